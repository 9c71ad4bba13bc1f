pub mod errors;
pub mod metrics;
pub mod stmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use errors::{Error, Result};
pub use metrics::BodyMetrics;
pub use stmt::{DeclarationKind, Statement};

use metrics::{calculate_average_size, count_oversized, find_max_size};

/// Results of one metrics pass over a set of method bodies.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub timestamp: DateTime<Utc>,
    pub max_statements: usize,
    pub max_nesting_depth: usize,
    pub bodies: Vec<BodyReport>,
    pub summary: MetricsSummary,
}

/// Metrics for one analyzed body, keyed by the tree file it came from.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyReport {
    pub path: PathBuf,
    pub metrics: BodyMetrics,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_bodies: usize,
    pub average_size: f64,
    pub max_size: usize,
    pub oversized_count: usize,
    pub deeply_nested_count: usize,
}

impl AnalysisReport {
    pub fn new(bodies: Vec<BodyReport>, max_statements: usize, max_nesting_depth: usize) -> Self {
        let metrics: Vec<BodyMetrics> = bodies.iter().map(|b| b.metrics.clone()).collect();
        let summary = MetricsSummary {
            total_bodies: bodies.len(),
            average_size: calculate_average_size(&metrics),
            max_size: find_max_size(&metrics),
            oversized_count: count_oversized(&metrics, max_statements),
            deeply_nested_count: metrics
                .iter()
                .filter(|m| m.max_nesting_depth > max_nesting_depth)
                .count(),
        };
        Self {
            timestamp: Utc::now(),
            max_statements,
            max_nesting_depth,
            bodies,
            summary,
        }
    }

    /// All thresholds respected, nothing to refactor.
    pub fn is_passing(&self) -> bool {
        self.summary.oversized_count == 0 && self.summary.deeply_nested_count == 0
    }
}
