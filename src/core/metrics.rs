//! Size metrics over statement trees.

use serde::{Deserialize, Serialize};

use crate::core::stmt::Statement;
use crate::extraction::counter::{count_elementary, max_nesting_depth};
use crate::extraction::extractor::StatementExtractor;

/// Size profile of a single method body.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BodyMetrics {
    pub elementary_statements: usize,
    pub branching_statements: usize,
    pub max_nesting_depth: usize,
}

impl BodyMetrics {
    /// Measure a method body in one pass per metric.
    pub fn from_body(root: &Statement) -> Self {
        let extractor = StatementExtractor::new();
        Self {
            elementary_statements: count_elementary(root),
            branching_statements: extractor.branching_statements(root).len(),
            max_nesting_depth: max_nesting_depth(root),
        }
    }

    pub fn is_oversized(&self, threshold: usize) -> bool {
        self.elementary_statements > threshold
    }
}

pub fn calculate_average_size(bodies: &[BodyMetrics]) -> f64 {
    if bodies.is_empty() {
        return 0.0;
    }

    let total: usize = bodies.iter().map(|m| m.elementary_statements).sum();
    total as f64 / bodies.len() as f64
}

pub fn find_max_size(bodies: &[BodyMetrics]) -> usize {
    bodies
        .iter()
        .map(|m| m.elementary_statements)
        .max()
        .unwrap_or(0)
}

pub fn count_oversized(bodies: &[BodyMetrics], threshold: usize) -> usize {
    bodies.iter().filter(|m| m.is_oversized(threshold)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(size: usize) -> BodyMetrics {
        BodyMetrics {
            elementary_statements: size,
            branching_statements: 0,
            max_nesting_depth: 0,
        }
    }

    #[test]
    fn from_body_measures_all_dimensions() {
        let body = Statement::block(vec![
            Statement::while_loop(Statement::block(vec![
                Statement::if_then(Statement::block(vec![Statement::Break])),
                Statement::expression(),
            ])),
            Statement::Return,
        ]);

        let m = BodyMetrics::from_body(&body);
        // while + if + break + expression + return
        assert_eq!(m.elementary_statements, 5);
        assert_eq!(m.branching_statements, 2);
        assert_eq!(m.max_nesting_depth, 2);
    }

    #[test]
    fn average_of_no_bodies_is_zero() {
        assert_eq!(calculate_average_size(&[]), 0.0);
        assert_eq!(find_max_size(&[]), 0);
    }

    #[test]
    fn oversized_is_strictly_above_threshold() {
        let bodies = [metrics(10), metrics(20), metrics(21)];
        assert_eq!(count_oversized(&bodies, 20), 1);
        assert!(!metrics(20).is_oversized(20));
    }
}
