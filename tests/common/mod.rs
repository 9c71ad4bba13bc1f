// Test utility module for stmtmap integration tests
#![allow(dead_code)]

use stmtmap::Statement;

/// Body with one return buried in an if's then-branch and none in the else.
pub fn return_in_then_branch() -> Statement {
    Statement::block(vec![Statement::if_then_else(
        Statement::block(vec![Statement::expression(), Statement::Return]),
        Statement::block(vec![Statement::expression()]),
    )])
}

/// A for loop nested inside a while loop.
pub fn for_inside_while() -> Statement {
    Statement::block(vec![Statement::while_loop(Statement::block(vec![
        Statement::variable_declaration(),
        Statement::for_loop(Statement::block(vec![Statement::expression()])),
    ]))])
}

/// Try with two catch clauses and a finally, each section holding one
/// distinct branching statement.
pub fn try_with_branching_sections() -> Statement {
    Statement::block(vec![Statement::try_catch_finally(
        Statement::block(vec![Statement::for_loop(Statement::expression())]),
        vec![
            Statement::block(vec![Statement::while_loop(Statement::expression())]),
            Statement::block(vec![Statement::do_while(Statement::expression())]),
        ],
        Statement::block(vec![Statement::for_each(Statement::expression())]),
    )])
}

/// A body exercising every statement shape at least once.
pub fn kitchen_sink() -> Statement {
    Statement::block(vec![
        Statement::variable_declaration(),
        Statement::type_declaration(),
        Statement::constructor_call(),
        Statement::expression(),
        Statement::Assert,
        Statement::Throw,
        Statement::Switch,
        Statement::labeled(Statement::while_loop(Statement::block(vec![
            Statement::Break,
            Statement::Continue,
        ]))),
        Statement::synchronized(Statement::block(vec![Statement::do_while(
            Statement::expression(),
        )])),
        Statement::if_then_else(
            Statement::block(vec![Statement::Return]),
            Statement::for_each(Statement::block(vec![Statement::for_loop(
                Statement::expression(),
            )])),
        ),
        Statement::try_catch_finally(
            Statement::block(vec![Statement::expression()]),
            vec![Statement::block(vec![Statement::Throw])],
            Statement::block(vec![Statement::Return]),
        ),
        Statement::Other,
    ])
}
