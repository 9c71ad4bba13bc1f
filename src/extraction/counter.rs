//! Elementary statement counting and nesting depth.
//!
//! Shares the extraction walker's shape rules but accumulates scalars
//! instead of filtering: one unit per leaf statement, one per
//! compound-statement header, nothing for block wrappers.

use crate::core::stmt::Statement;

/// Count the elementary statement units reachable from `root`.
///
/// Every compound header (if, the loop forms, switch, labeled, synchronized,
/// try) contributes 1 in addition to its nested counts; every leaf
/// contributes exactly 1; a block contributes only the sum of its children.
/// Unknown nodes contribute 0.
pub fn count_elementary(root: &Statement) -> usize {
    match root {
        Statement::Block { statements } => statements.iter().map(count_elementary).sum(),
        Statement::If {
            then_branch,
            else_branch,
        } => {
            1 + count_elementary(then_branch)
                + else_branch.as_deref().map(count_elementary).unwrap_or(0)
        }
        Statement::For { body }
        | Statement::ForEach { body }
        | Statement::While { body }
        | Statement::DoWhile { body }
        | Statement::Labeled { body }
        | Statement::Synchronized { body } => 1 + count_elementary(body),
        Statement::Try {
            body,
            catch_blocks,
            finally_block,
        } => {
            1 + count_elementary(body)
                + catch_blocks.iter().map(count_elementary).sum::<usize>()
                + finally_block.as_deref().map(count_elementary).unwrap_or(0)
        }
        // Case bodies are not modeled, so a switch counts as its header only.
        Statement::Switch => 1,
        Statement::Expression { .. }
        | Statement::Assert
        | Statement::Return
        | Statement::Throw
        | Statement::Break
        | Statement::Continue
        | Statement::Declaration { .. } => 1,
        Statement::Other => 0,
    }
}

/// Counting variant for an absent root; `None` counts as 0.
pub fn count_elementary_opt(root: Option<&Statement>) -> usize {
    root.map(count_elementary).unwrap_or(0)
}

/// Deepest compound-statement nesting reachable from `root`.
///
/// Compound headers deepen the nesting by one; block wrappers and leaves do
/// not. A body of straight-line statements has depth 0.
pub fn max_nesting_depth(root: &Statement) -> usize {
    depth_from(root, 0)
}

fn depth_from(stmt: &Statement, current: usize) -> usize {
    match stmt {
        Statement::Block { statements } => statements
            .iter()
            .map(|child| depth_from(child, current))
            .max()
            .unwrap_or(current),
        Statement::If {
            then_branch,
            else_branch,
        } => {
            let then_depth = depth_from(then_branch, current + 1);
            let else_depth = else_branch
                .as_deref()
                .map(|branch| depth_from(branch, current + 1))
                .unwrap_or(current + 1);
            then_depth.max(else_depth)
        }
        Statement::For { body }
        | Statement::ForEach { body }
        | Statement::While { body }
        | Statement::DoWhile { body }
        | Statement::Labeled { body }
        | Statement::Synchronized { body } => depth_from(body, current + 1),
        Statement::Try {
            body,
            catch_blocks,
            finally_block,
        } => {
            let mut deepest = depth_from(body, current + 1);
            for catch in catch_blocks {
                deepest = deepest.max(depth_from(catch, current + 1));
            }
            if let Some(finally_block) = finally_block {
                deepest = deepest.max(depth_from(finally_block, current + 1));
            }
            deepest
        }
        Statement::Switch => current + 1,
        Statement::Expression { .. }
        | Statement::Assert
        | Statement::Return
        | Statement::Throw
        | Statement::Break
        | Statement::Continue
        | Statement::Declaration { .. }
        | Statement::Other => current,
    }
}
