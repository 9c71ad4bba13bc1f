// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extraction;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, BodyMetrics, BodyReport, DeclarationKind, Error, MetricsSummary, Result,
    Statement,
};

pub use crate::core::metrics::{calculate_average_size, count_oversized, find_max_size};

pub use crate::extraction::{
    count_elementary, count_elementary_opt, max_nesting_depth, Category, StatementExtractor,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
