//! Statement tree model for method bodies.
//!
//! A `Statement` is the structural skeleton of one statement in an
//! already-parsed method body, stripped of expression-level detail. Trees are
//! built by a host front end (parser, IDE plugin, serialized dump) and
//! consumed read-only by the extraction and counting traversals.

use serde::{Deserialize, Serialize};

/// One statement in a method body.
///
/// The set of variants is closed over the statement shapes the analysis
/// understands. Anything else a front end hands over deserializes into
/// [`Statement::Other`], which every traversal treats as an inert leaf so a
/// single unrecognized node never aborts an analysis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// Brace-delimited sequence of statements. Purely structural; never a
    /// match candidate itself.
    Block {
        #[serde(default)]
        statements: Vec<Statement>,
    },
    If {
        then_branch: Box<Statement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        else_branch: Option<Box<Statement>>,
    },
    For {
        body: Box<Statement>,
    },
    /// Enhanced / iterator-style for loop.
    ForEach {
        body: Box<Statement>,
    },
    While {
        body: Box<Statement>,
    },
    DoWhile {
        body: Box<Statement>,
    },
    /// Expression used as a statement. The wrapped expression itself is not
    /// modeled; `constructor_call` is a host-populated annotation recording
    /// whether the expression is a constructor invocation, fixed at
    /// construction time.
    Expression {
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        constructor_call: bool,
    },
    /// Switch statements are treated as leaves: case bodies are not part of
    /// the structural model and are never walked.
    Switch,
    Assert,
    /// Label wrapping another statement. Structural only, like `Block`.
    Labeled {
        body: Box<Statement>,
    },
    Return,
    /// Synchronized block; the guarded block is walked in full.
    Synchronized {
        body: Box<Statement>,
    },
    Throw,
    Try {
        body: Box<Statement>,
        #[serde(default)]
        catch_blocks: Vec<Statement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        finally_block: Option<Box<Statement>>,
    },
    Break,
    Continue,
    /// Local declaration. `declares` distinguishes variable declarations from
    /// local type declarations and never changes after construction.
    Declaration {
        declares: DeclarationKind,
    },
    /// Any statement shape outside the closed set above. Inert: contributes
    /// nothing, matches nothing.
    #[serde(other)]
    Other,
}

/// Sub-kind flag for [`Statement::Declaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Variable,
    Type,
}

impl Statement {
    pub fn block(statements: Vec<Statement>) -> Self {
        Statement::Block { statements }
    }

    pub fn if_then(then_branch: Statement) -> Self {
        Statement::If {
            then_branch: Box::new(then_branch),
            else_branch: None,
        }
    }

    pub fn if_then_else(then_branch: Statement, else_branch: Statement) -> Self {
        Statement::If {
            then_branch: Box::new(then_branch),
            else_branch: Some(Box::new(else_branch)),
        }
    }

    pub fn for_loop(body: Statement) -> Self {
        Statement::For {
            body: Box::new(body),
        }
    }

    pub fn for_each(body: Statement) -> Self {
        Statement::ForEach {
            body: Box::new(body),
        }
    }

    pub fn while_loop(body: Statement) -> Self {
        Statement::While {
            body: Box::new(body),
        }
    }

    pub fn do_while(body: Statement) -> Self {
        Statement::DoWhile {
            body: Box::new(body),
        }
    }

    pub fn expression() -> Self {
        Statement::Expression {
            constructor_call: false,
        }
    }

    pub fn constructor_call() -> Self {
        Statement::Expression {
            constructor_call: true,
        }
    }

    pub fn labeled(body: Statement) -> Self {
        Statement::Labeled {
            body: Box::new(body),
        }
    }

    pub fn synchronized(body: Statement) -> Self {
        Statement::Synchronized {
            body: Box::new(body),
        }
    }

    pub fn try_catch(body: Statement, catch_blocks: Vec<Statement>) -> Self {
        Statement::Try {
            body: Box::new(body),
            catch_blocks,
            finally_block: None,
        }
    }

    pub fn try_catch_finally(
        body: Statement,
        catch_blocks: Vec<Statement>,
        finally_block: Statement,
    ) -> Self {
        Statement::Try {
            body: Box::new(body),
            catch_blocks,
            finally_block: Some(Box::new(finally_block)),
        }
    }

    pub fn variable_declaration() -> Self {
        Statement::Declaration {
            declares: DeclarationKind::Variable,
        }
    }

    pub fn type_declaration() -> Self {
        Statement::Declaration {
            declares: DeclarationKind::Type,
        }
    }

    /// Short name of this node's shape, for reports and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Statement::Block { .. } => "block",
            Statement::If { .. } => "if",
            Statement::For { .. } => "for",
            Statement::ForEach { .. } => "foreach",
            Statement::While { .. } => "while",
            Statement::DoWhile { .. } => "do_while",
            Statement::Expression { .. } => "expression",
            Statement::Switch => "switch",
            Statement::Assert => "assert",
            Statement::Labeled { .. } => "labeled",
            Statement::Return => "return",
            Statement::Synchronized { .. } => "synchronized",
            Statement::Throw => "throw",
            Statement::Try { .. } => "try",
            Statement::Break => "break",
            Statement::Continue => "continue",
            Statement::Declaration { .. } => "declaration",
            Statement::Other => "other",
        }
    }

    /// Default constructor-invocation recognizer: reads the host-populated
    /// annotation on expression statements.
    pub fn is_marked_constructor_call(&self) -> bool {
        matches!(
            self,
            Statement::Expression {
                constructor_call: true
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_deserializes_to_other() {
        let json = r#"{"kind": "yield", "value": 3}"#;
        let stmt: Statement = serde_json::from_str(json).unwrap();
        assert_eq!(stmt, Statement::Other);
    }

    #[test]
    fn block_without_statements_field_is_empty() {
        let stmt: Statement = serde_json::from_str(r#"{"kind": "block"}"#).unwrap();
        assert_eq!(stmt, Statement::block(vec![]));
    }

    #[test]
    fn declaration_sub_kind_round_trips() {
        let json = serde_json::to_string(&Statement::type_declaration()).unwrap();
        assert!(json.contains(r#""declares":"type""#));
        let back: Statement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Statement::type_declaration());
    }

    #[test]
    fn expression_annotation_defaults_to_false() {
        let stmt: Statement = serde_json::from_str(r#"{"kind": "expression"}"#).unwrap();
        assert!(!stmt.is_marked_constructor_call());
        assert!(Statement::constructor_call().is_marked_constructor_call());
    }
}
