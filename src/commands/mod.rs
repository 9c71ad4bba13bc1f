//! CLI command implementations for stmtmap operations.
//!
//! Available commands:
//! - **extract**: Collect statements of one category from serialized trees
//! - **metrics**: Compute size metrics and flag move-method candidates
//! - **init**: Initialize a new stmtmap configuration file

pub mod extract;
pub mod init;
pub mod metrics;

pub use extract::{run_extract, ExtractConfig};
pub use init::init_config;
pub use metrics::{run_metrics, MetricsConfig};
