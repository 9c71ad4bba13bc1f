//! Extract command: collect one category of statements from tree files.

use anyhow::Result;
use colored::*;
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::stmt::Statement;
use crate::extraction::{Category, StatementExtractor};
use crate::io;
use crate::io::output::OutputFormat;

pub struct ExtractConfig {
    pub paths: Vec<PathBuf>,
    pub category: Category,
    pub format: OutputFormat,
}

/// Matches found in one tree file.
#[derive(Clone, Debug, Serialize)]
pub struct ExtractionRecord {
    pub path: PathBuf,
    pub category: Category,
    pub count: usize,
    pub statements: Vec<Statement>,
}

pub fn run_extract(config: ExtractConfig) -> Result<()> {
    let files = io::collect_tree_files(&config.paths)?;
    log::debug!(
        "extracting {} from {} tree files",
        config.category,
        files.len()
    );

    let records = files
        .par_iter()
        .map(|path| extract_file(path, config.category))
        .collect::<crate::core::Result<Vec<_>>>()?;

    match config.format {
        OutputFormat::Json => print_json(&records)?,
        OutputFormat::Markdown => print_markdown(&records),
        OutputFormat::Terminal => print_terminal(&records),
    }

    Ok(())
}

fn extract_file(path: &Path, category: Category) -> crate::core::Result<ExtractionRecord> {
    let tree = io::read_statement_tree(path)?;
    let extractor = StatementExtractor::new();
    let statements: Vec<Statement> = extractor
        .statements(&tree, category)
        .into_iter()
        .cloned()
        .collect();

    Ok(ExtractionRecord {
        path: path.to_path_buf(),
        category,
        count: statements.len(),
        statements,
    })
}

fn print_json(records: &[ExtractionRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

fn print_markdown(records: &[ExtractionRecord]) {
    println!("# Stmtmap Extraction Report");
    println!();
    println!("| Body | Category | Matches |");
    println!("|------|----------|---------|");
    for record in records {
        println!(
            "| {} | {} | {} |",
            record.path.display(),
            record.category,
            record.count
        );
    }
}

fn print_terminal(records: &[ExtractionRecord]) {
    println!("{}", "Stmtmap Extraction Report".bold().blue());
    println!("{}", "=========================".blue());
    println!();

    for record in records {
        let count_display = if record.count > 0 {
            record.count.to_string().green()
        } else {
            record.count.to_string().dimmed()
        };
        println!(
            "  {} - {} {} statement(s)",
            record.path.display(),
            count_display,
            record.category
        );
        for stmt in &record.statements {
            println!("    - {}", stmt.kind_name());
        }
    }

    let total: usize = records.iter().map(|r| r.count).sum();
    println!();
    println!("Total: {total} match(es) across {} file(s)", records.len());
}
