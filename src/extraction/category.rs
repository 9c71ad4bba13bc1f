//! Statement categories and the per-node matching predicate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::stmt::{DeclarationKind, Statement};

/// One statement kind the extraction engine can be asked to collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ConstructorInvocation,
    VariableDeclaration,
    /// Any control-structure statement that can alter linear execution
    /// order: if, the loop forms, switch, try.
    Branching,
    Try,
    Switch,
    If,
    Return,
    Break,
    Continue,
    EnhancedFor,
    For,
    While,
    DoWhile,
    TypeDeclaration,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 14] = [
        Category::ConstructorInvocation,
        Category::VariableDeclaration,
        Category::Branching,
        Category::Try,
        Category::Switch,
        Category::If,
        Category::Return,
        Category::Break,
        Category::Continue,
        Category::EnhancedFor,
        Category::For,
        Category::While,
        Category::DoWhile,
        Category::TypeDeclaration,
    ];

    /// Test a single node against this category using the default
    /// constructor-invocation recognizer (the host annotation on expression
    /// statements).
    pub fn matches(self, stmt: &Statement) -> bool {
        self.matches_with(stmt, &Statement::is_marked_constructor_call)
    }

    /// Test a single node against this category. Pure and total: never fails,
    /// unknown nodes match nothing.
    ///
    /// `recognizer` is consulted only for [`Category::ConstructorInvocation`],
    /// where deciding "is this expression a constructor call" needs semantic
    /// information the statement-shape model does not carry.
    pub fn matches_with<F>(self, stmt: &Statement, recognizer: &F) -> bool
    where
        F: Fn(&Statement) -> bool + ?Sized,
    {
        match self {
            Category::ConstructorInvocation => {
                matches!(stmt, Statement::Expression { .. }) && recognizer(stmt)
            }
            Category::VariableDeclaration => matches!(
                stmt,
                Statement::Declaration {
                    declares: DeclarationKind::Variable
                }
            ),
            Category::Branching => matches!(
                stmt,
                Statement::If { .. }
                    | Statement::For { .. }
                    | Statement::ForEach { .. }
                    | Statement::While { .. }
                    | Statement::DoWhile { .. }
                    | Statement::Switch
                    | Statement::Try { .. }
            ),
            Category::Try => matches!(stmt, Statement::Try { .. }),
            Category::Switch => matches!(stmt, Statement::Switch),
            Category::If => matches!(stmt, Statement::If { .. }),
            Category::Return => matches!(stmt, Statement::Return),
            Category::Break => matches!(stmt, Statement::Break),
            Category::Continue => matches!(stmt, Statement::Continue),
            Category::EnhancedFor => matches!(stmt, Statement::ForEach { .. }),
            Category::For => matches!(stmt, Statement::For { .. }),
            Category::While => matches!(stmt, Statement::While { .. }),
            Category::DoWhile => matches!(stmt, Statement::DoWhile { .. }),
            Category::TypeDeclaration => matches!(
                stmt,
                Statement::Declaration {
                    declares: DeclarationKind::Type
                }
            ),
        }
    }
}

static CATEGORY_NAMES: &[(Category, &str)] = &[
    (Category::ConstructorInvocation, "constructor-invocation"),
    (Category::VariableDeclaration, "variable-declaration"),
    (Category::Branching, "branching"),
    (Category::Try, "try"),
    (Category::Switch, "switch"),
    (Category::If, "if"),
    (Category::Return, "return"),
    (Category::Break, "break"),
    (Category::Continue, "continue"),
    (Category::EnhancedFor, "enhanced-for"),
    (Category::For, "for"),
    (Category::While, "while"),
    (Category::DoWhile, "do-while"),
    (Category::TypeDeclaration, "type-declaration"),
];

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = CATEGORY_NAMES
            .iter()
            .find(|(c, _)| c == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{name}")
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATEGORY_NAMES
            .iter()
            .find(|(_, name)| *name == s)
            .map(|(c, _)| *c)
            .ok_or_else(|| format!("unknown statement category: {s}"))
    }
}
