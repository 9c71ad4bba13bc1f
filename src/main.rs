use anyhow::Result;
use stmtmap::cli::{self, Commands};
use stmtmap::commands::{self, ExtractConfig, MetricsConfig};

fn main() -> Result<()> {
    env_logger::init();

    let cli = cli::parse_args();
    cli::configure_thread_pool(cli.jobs);

    match cli.command {
        Commands::Extract {
            paths,
            category,
            format,
        } => commands::run_extract(ExtractConfig {
            paths,
            category: category.into(),
            format: format.into(),
        }),
        Commands::Metrics {
            paths,
            max_statements,
            max_nesting_depth,
            format,
            output,
        } => commands::run_metrics(MetricsConfig {
            paths,
            max_statements,
            max_nesting_depth,
            format: format.map(Into::into),
            output,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
