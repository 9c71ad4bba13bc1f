mod common;

use pretty_assertions::assert_eq;
use stmtmap::{Category, Statement, StatementExtractor};

#[test]
fn return_in_then_branch_is_found_exactly_once() {
    let body = common::return_in_then_branch();
    let extractor = StatementExtractor::new();

    let found = extractor.return_statements(&body);
    assert_eq!(found, vec![&Statement::Return]);
}

#[test]
fn nested_for_precedes_enclosing_while() {
    let body = common::for_inside_while();
    let extractor = StatementExtractor::new();

    let kinds: Vec<_> = extractor
        .branching_statements(&body)
        .iter()
        .map(|s| s.kind_name())
        .collect();
    assert_eq!(kinds, vec!["for", "while"]);
}

#[test]
fn if_matches_then_branch_before_else_branch_before_self() {
    // then-branch holds a for, else-branch a while; the if itself matches
    // last under the children-before-self rule.
    let body = Statement::if_then_else(
        Statement::block(vec![Statement::for_loop(Statement::expression())]),
        Statement::block(vec![Statement::while_loop(Statement::expression())]),
    );
    let extractor = StatementExtractor::new();

    let kinds: Vec<_> = extractor
        .branching_statements(&body)
        .iter()
        .map(|s| s.kind_name())
        .collect();
    assert_eq!(kinds, vec!["for", "while", "if"]);
}

#[test]
fn try_sections_match_in_declaration_order() {
    let body = common::try_with_branching_sections();
    let extractor = StatementExtractor::new();

    let kinds: Vec<_> = extractor
        .branching_statements(&body)
        .iter()
        .map(|s| s.kind_name())
        .collect();
    assert_eq!(kinds, vec!["for", "while", "do_while", "foreach", "try"]);
}

#[test]
fn every_category_finds_its_statement_in_a_full_body() {
    let body = common::kitchen_sink();
    let extractor = StatementExtractor::new();

    assert_eq!(extractor.variable_declarations(&body).len(), 1);
    assert_eq!(extractor.type_declarations(&body).len(), 1);
    assert_eq!(extractor.if_statements(&body).len(), 1);
    assert_eq!(extractor.for_statements(&body).len(), 1);
    assert_eq!(extractor.enhanced_for_statements(&body).len(), 1);
    assert_eq!(extractor.while_statements(&body).len(), 1);
    assert_eq!(extractor.do_statements(&body).len(), 1);
    assert_eq!(extractor.switch_statements(&body).len(), 1);
    assert_eq!(extractor.try_statements(&body).len(), 1);
    assert_eq!(extractor.break_statements(&body).len(), 1);
    assert_eq!(extractor.continue_statements(&body).len(), 1);
    assert_eq!(extractor.return_statements(&body).len(), 2);
    assert_eq!(extractor.branching_statements(&body).len(), 7);
    assert!(extractor.constructor_invocations(&body).is_empty());
}

#[test]
fn no_category_surfaces_structural_nodes() {
    let body = common::kitchen_sink();
    let extractor = StatementExtractor::new();

    for category in Category::ALL {
        for stmt in extractor.statements(&body, category) {
            assert!(
                !matches!(
                    stmt,
                    Statement::Block { .. }
                        | Statement::Labeled { .. }
                        | Statement::Synchronized { .. }
                        | Statement::Expression { .. }
                        | Statement::Other
                ),
                "category {category} returned a {} node",
                stmt.kind_name()
            );
        }
    }
}

#[test]
fn synchronized_propagates_nested_matches() {
    let body = Statement::synchronized(Statement::block(vec![
        Statement::Return,
        Statement::while_loop(Statement::block(vec![Statement::Return])),
    ]));
    let extractor = StatementExtractor::new();

    assert_eq!(extractor.return_statements(&body).len(), 2);
    assert_eq!(extractor.while_statements(&body).len(), 1);
}

#[test]
fn switch_case_bodies_are_not_walked() {
    // The structural model carries no case bodies; a switch can only match
    // itself.
    let body = Statement::block(vec![Statement::Switch, Statement::Switch]);
    let extractor = StatementExtractor::new();

    assert_eq!(extractor.switch_statements(&body).len(), 2);
    assert_eq!(extractor.branching_statements(&body).len(), 2);
}

#[test]
fn extraction_is_idempotent() {
    let body = common::kitchen_sink();
    let extractor = StatementExtractor::new();

    for category in Category::ALL {
        let first = extractor.statements(&body, category);
        let second = extractor.statements(&body, category);
        assert_eq!(first, second, "category {category} is not stable");
    }
}

#[test]
fn separate_extractors_agree() {
    let body = common::kitchen_sink();

    let a = StatementExtractor::new();
    let b = StatementExtractor::default();
    assert_eq!(
        a.branching_statements(&body),
        b.branching_statements(&body)
    );
}

#[test]
fn missing_else_and_finally_are_skipped() {
    let body = Statement::block(vec![
        Statement::if_then(Statement::block(vec![Statement::Break])),
        Statement::try_catch(Statement::block(vec![Statement::Continue]), vec![]),
    ]);
    let extractor = StatementExtractor::new();

    assert_eq!(extractor.break_statements(&body).len(), 1);
    assert_eq!(extractor.continue_statements(&body).len(), 1);
    assert_eq!(extractor.if_statements(&body).len(), 1);
    assert_eq!(extractor.try_statements(&body).len(), 1);
}

#[test]
fn deeply_nested_bodies_extract_without_issue() {
    // 512 levels of while nesting, a return at the bottom.
    let mut body = Statement::Return;
    for _ in 0..512 {
        body = Statement::while_loop(Statement::block(vec![body]));
    }

    let extractor = StatementExtractor::new();
    assert_eq!(extractor.return_statements(&body).len(), 1);
    assert_eq!(extractor.while_statements(&body).len(), 512);
}
