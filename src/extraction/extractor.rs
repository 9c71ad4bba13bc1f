//! Depth-first statement extraction over a method body.
//!
//! The walker recurses into every nested statement position a shape defines,
//! collecting the nodes that match the requested [`Category`] in source
//! order. Children are visited before the node itself is tested, so for a
//! nested construct the inner matches always precede the enclosing one.

use crate::core::stmt::Statement;
use crate::extraction::category::Category;

/// Stateless extraction walker.
///
/// The category is threaded through each call rather than stored, so a single
/// extractor value is reentrant and safe to share across threads. The only
/// configuration is the constructor-invocation recognizer, injected by the
/// host semantic layer; the default reads the construction-time annotation on
/// expression statements.
pub struct StatementExtractor<F = fn(&Statement) -> bool>
where
    F: Fn(&Statement) -> bool,
{
    constructor_recognizer: F,
}

impl StatementExtractor {
    pub fn new() -> Self {
        Self {
            constructor_recognizer: Statement::is_marked_constructor_call,
        }
    }
}

impl Default for StatementExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> StatementExtractor<F>
where
    F: Fn(&Statement) -> bool,
{
    /// Build an extractor with a host-supplied constructor-invocation
    /// recognizer.
    pub fn with_recognizer(recognizer: F) -> Self {
        Self {
            constructor_recognizer: recognizer,
        }
    }

    /// Collect every statement of `category` reachable from `root`, in
    /// source declaration order.
    pub fn statements<'a>(&self, root: &'a Statement, category: Category) -> Vec<&'a Statement> {
        let mut matches = Vec::new();
        self.walk(root, category, &mut matches);
        matches
    }

    /// Like [`statements`](Self::statements), accepting an absent root. A
    /// missing body yields an empty result rather than an error, consistent
    /// with how missing else/finally branches are skipped.
    pub fn statements_opt<'a>(
        &self,
        root: Option<&'a Statement>,
        category: Category,
    ) -> Vec<&'a Statement> {
        root.map(|root| self.statements(root, category))
            .unwrap_or_default()
    }

    pub fn constructor_invocations<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::ConstructorInvocation)
    }

    pub fn variable_declarations<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::VariableDeclaration)
    }

    pub fn branching_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Branching)
    }

    pub fn try_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Try)
    }

    pub fn switch_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Switch)
    }

    pub fn if_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::If)
    }

    pub fn return_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Return)
    }

    pub fn break_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Break)
    }

    pub fn continue_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::Continue)
    }

    pub fn enhanced_for_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::EnhancedFor)
    }

    pub fn for_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::For)
    }

    pub fn while_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::While)
    }

    pub fn do_statements<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::DoWhile)
    }

    pub fn type_declarations<'a>(&self, root: &'a Statement) -> Vec<&'a Statement> {
        self.statements(root, Category::TypeDeclaration)
    }

    fn walk<'a>(&self, stmt: &'a Statement, category: Category, matches: &mut Vec<&'a Statement>) {
        match stmt {
            Statement::Block { statements } => {
                for child in statements {
                    self.walk(child, category, matches);
                }
            }
            Statement::If {
                then_branch,
                else_branch,
            } => {
                self.walk(then_branch, category, matches);
                if let Some(else_branch) = else_branch {
                    self.walk(else_branch, category, matches);
                }
                self.collect_if_match(stmt, category, matches);
            }
            Statement::For { body }
            | Statement::ForEach { body }
            | Statement::While { body }
            | Statement::DoWhile { body } => {
                self.walk(body, category, matches);
                self.collect_if_match(stmt, category, matches);
            }
            // Labels and synchronized blocks are transparent wrappers:
            // nested matches propagate, the wrapper never matches.
            Statement::Labeled { body } | Statement::Synchronized { body } => {
                self.walk(body, category, matches);
            }
            Statement::Expression { .. } | Statement::Assert | Statement::Throw => {}
            // Case bodies are outside the structural model, so a switch is
            // only ever a self-match.
            Statement::Switch => self.collect_if_match(stmt, category, matches),
            Statement::Return
            | Statement::Break
            | Statement::Continue
            | Statement::Declaration { .. } => {
                self.collect_if_match(stmt, category, matches);
            }
            Statement::Try {
                body,
                catch_blocks,
                finally_block,
            } => {
                self.walk(body, category, matches);
                for catch in catch_blocks {
                    self.walk(catch, category, matches);
                }
                if let Some(finally_block) = finally_block {
                    self.walk(finally_block, category, matches);
                }
                self.collect_if_match(stmt, category, matches);
            }
            Statement::Other => {}
        }
    }

    fn collect_if_match<'a>(
        &self,
        stmt: &'a Statement,
        category: Category,
        matches: &mut Vec<&'a Statement>,
    ) {
        if category.matches_with(stmt, &self.constructor_recognizer) {
            matches.push(stmt);
        }
    }
}
