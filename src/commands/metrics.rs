//! Metrics command: size metrics over tree files.

use anyhow::Result;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::config;
use crate::core::{AnalysisReport, BodyMetrics, BodyReport};
use crate::io;
use crate::io::output::{create_writer, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter};

pub struct MetricsConfig {
    pub paths: Vec<PathBuf>,
    pub max_statements: Option<usize>,
    pub max_nesting_depth: Option<usize>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn run_metrics(config: MetricsConfig) -> Result<()> {
    let file_config = config::load_config();
    let max_statements = config
        .max_statements
        .unwrap_or_else(|| file_config.max_statements());
    let max_nesting_depth = config
        .max_nesting_depth
        .unwrap_or_else(|| file_config.max_nesting_depth());
    let format = config
        .format
        .or_else(|| file_config.default_format().and_then(OutputFormat::from_name))
        .unwrap_or(OutputFormat::Terminal);

    let files = io::collect_tree_files(&config.paths)?;
    log::debug!("measuring {} tree files", files.len());

    let bodies = files
        .par_iter()
        .map(|path| measure_file(path))
        .collect::<crate::core::Result<Vec<_>>>()?;

    let report = AnalysisReport::new(bodies, max_statements, max_nesting_depth);

    match &config.output {
        Some(path) => write_to_file(&report, format, path)?,
        None => create_writer(format).write_report(&report)?,
    }

    Ok(())
}

fn measure_file(path: &Path) -> crate::core::Result<BodyReport> {
    let tree = io::read_statement_tree(path)?;
    Ok(BodyReport {
        path: path.to_path_buf(),
        metrics: BodyMetrics::from_body(&tree),
    })
}

fn write_to_file(report: &AnalysisReport, format: OutputFormat, path: &Path) -> Result<()> {
    let mut buffer = Vec::new();
    match format {
        OutputFormat::Json => JsonWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Markdown => MarkdownWriter::new(&mut buffer).write_report(report)?,
        OutputFormat::Terminal => {
            anyhow::bail!("terminal format writes to stdout; use json or markdown with --output")
        }
    }
    io::write_file(path, &String::from_utf8(buffer)?)?;
    Ok(())
}
