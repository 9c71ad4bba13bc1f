//! Command-line interface for stmtmap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "stmtmap")]
#[command(about = "Statement-tree extraction and size metrics for refactoring detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Worker threads for batch analysis (0 = all cores)
    #[arg(short = 'j', long, global = true, default_value_t = 0)]
    pub jobs: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract statements of one category from serialized statement trees
    Extract {
        /// Tree files, or directories containing .json trees
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Statement category to collect
        #[arg(short, long, value_enum)]
        category: Category,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Compute size metrics for serialized statement trees
    Metrics {
        /// Tree files, or directories containing .json trees
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Oversize threshold in elementary statements (overrides config)
        #[arg(long)]
        max_statements: Option<usize>,

        /// Nesting depth threshold (overrides config)
        #[arg(long)]
        max_nesting_depth: Option<usize>,

        /// Output format (defaults to config, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize stmtmap configuration
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    ConstructorInvocation,
    VariableDeclaration,
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

impl From<Category> for crate::extraction::Category {
    fn from(c: Category) -> Self {
        match c {
            Category::ConstructorInvocation => {
                crate::extraction::Category::ConstructorInvocation
            }
            Category::VariableDeclaration => crate::extraction::Category::VariableDeclaration,
            Category::Branching => crate::extraction::Category::Branching,
            Category::Try => crate::extraction::Category::Try,
            Category::Switch => crate::extraction::Category::Switch,
            Category::If => crate::extraction::Category::If,
            Category::Return => crate::extraction::Category::Return,
            Category::Break => crate::extraction::Category::Break,
            Category::Continue => crate::extraction::Category::Continue,
            Category::EnhancedFor => crate::extraction::Category::EnhancedFor,
            Category::For => crate::extraction::Category::For,
            Category::While => crate::extraction::Category::While,
            Category::DoWhile => crate::extraction::Category::DoWhile,
            Category::TypeDeclaration => crate::extraction::Category::TypeDeclaration,
        }
    }
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Rayon thread stack size (8MB for deeply nested statement trees)
const RAYON_STACK_SIZE: usize = 8 * 1024 * 1024;

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new().stack_size(RAYON_STACK_SIZE);

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured - this is fine, just ignore
        eprintln!("Note: Thread pool already configured: {}", e);
    }
}
