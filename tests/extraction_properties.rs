//! Property-based tests for statement extraction and counting
//!
//! These tests verify invariants that should hold for all trees:
//! - Extraction is deterministic and idempotent
//! - Extracted nodes always satisfy the requested category's matcher
//! - Structural wrappers never appear in any result
//! - No category can collect more nodes than the counter sees
//! - Branching extraction equals the seven per-kind extractions combined

use proptest::prelude::*;
use stmtmap::{count_elementary, Category, Statement, StatementExtractor};

/// Leaf statement shapes, including an unrecognized node.
fn arb_leaf() -> impl Strategy<Value = Statement> {
    prop::sample::select(vec![
        Statement::expression(),
        Statement::constructor_call(),
        Statement::Assert,
        Statement::Return,
        Statement::Throw,
        Statement::Break,
        Statement::Continue,
        Statement::variable_declaration(),
        Statement::type_declaration(),
        Statement::Switch,
        Statement::Other,
    ])
}

/// Generate an arbitrary statement tree of bounded depth and size.
fn arb_statement() -> impl Strategy<Value = Statement> {
    arb_leaf().prop_recursive(5, 64, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Statement::block),
            (inner.clone(), prop::option::of(inner.clone())).prop_map(|(t, e)| match e {
                Some(e) => Statement::if_then_else(t, e),
                None => Statement::if_then(t),
            }),
            inner.clone().prop_map(Statement::for_loop),
            inner.clone().prop_map(Statement::for_each),
            inner.clone().prop_map(Statement::while_loop),
            inner.clone().prop_map(Statement::do_while),
            inner.clone().prop_map(Statement::labeled),
            inner.clone().prop_map(Statement::synchronized),
            (
                inner.clone(),
                prop::collection::vec(inner.clone(), 0..3),
                prop::option::of(inner)
            )
                .prop_map(|(body, catches, fin)| match fin {
                    Some(fin) => Statement::try_catch_finally(body, catches, fin),
                    None => Statement::try_catch(body, catches),
                }),
        ]
    })
}

proptest! {
    /// Property: extraction twice over the same tree yields identical results
    #[test]
    fn prop_extraction_is_idempotent(body in arb_statement()) {
        let extractor = StatementExtractor::new();
        for category in Category::ALL {
            let first = extractor.statements(&body, category);
            let second = extractor.statements(&body, category);
            prop_assert_eq!(first, second);
        }
    }

    /// Property: every extracted node satisfies the category matcher
    #[test]
    fn prop_extracted_nodes_satisfy_their_category(body in arb_statement()) {
        let extractor = StatementExtractor::new();
        for category in Category::ALL {
            for stmt in extractor.statements(&body, category) {
                prop_assert!(category.matches(stmt), "{} returned a {}", category, stmt.kind_name());
            }
        }
    }

    /// Property: structural wrappers and expression leaves never surface
    #[test]
    fn prop_structural_nodes_never_surface(body in arb_statement()) {
        let extractor = StatementExtractor::new();
        for category in Category::ALL {
            for stmt in extractor.statements(&body, category) {
                let is_structural = matches!(
                    stmt,
                    Statement::Block { .. }
                        | Statement::Labeled { .. }
                        | Statement::Synchronized { .. }
                        | Statement::Expression { .. }
                        | Statement::Other
                );
                prop_assert!(!is_structural);
            }
        }
    }

    /// Property: extraction never finds more statements than the counter
    /// counts, for any category
    #[test]
    fn prop_match_count_bounded_by_elementary_count(body in arb_statement()) {
        let extractor = StatementExtractor::new();
        let total = count_elementary(&body);
        for category in Category::ALL {
            prop_assert!(extractor.statements(&body, category).len() <= total);
        }
    }

    /// Property: the branching category is exactly the union of the seven
    /// branching kinds
    #[test]
    fn prop_branching_is_union_of_kinds(body in arb_statement()) {
        let extractor = StatementExtractor::new();
        let branching = extractor.branching_statements(&body).len();
        let by_kind = extractor.if_statements(&body).len()
            + extractor.for_statements(&body).len()
            + extractor.enhanced_for_statements(&body).len()
            + extractor.while_statements(&body).len()
            + extractor.do_statements(&body).len()
            + extractor.switch_statements(&body).len()
            + extractor.try_statements(&body).len();
        prop_assert_eq!(branching, by_kind);
    }

    /// Property: the counter is pure - same tree, same count
    #[test]
    fn prop_counting_is_deterministic(body in arb_statement()) {
        prop_assert_eq!(count_elementary(&body), count_elementary(&body));
    }
}
