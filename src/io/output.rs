use crate::core::{AnalysisReport, BodyReport};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a format name as written in `.stmtmap.toml`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "markdown" => Some(OutputFormat::Markdown),
            "terminal" => Some(OutputFormat::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_hotspots(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Stmtmap Metrics Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Bodies analyzed | {} |",
            report.summary.total_bodies
        )?;
        writeln!(
            self.writer,
            "| Average size | {:.1} |",
            report.summary.average_size
        )?;
        writeln!(self.writer, "| Max size | {} |", report.summary.max_size)?;
        writeln!(
            self.writer,
            "| Oversized (> {}) | {} |",
            report.max_statements, report.summary.oversized_count
        )?;
        writeln!(
            self.writer,
            "| Deeply nested (> {}) | {} |",
            report.max_nesting_depth, report.summary.deeply_nested_count
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_hotspots(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let flagged = flagged_bodies(report);
        if flagged.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Move-Method Candidates")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Body | Statements | Branching | Nesting |"
        )?;
        writeln!(self.writer, "|------|------------|-----------|---------|")?;
        for body in flagged {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                body.path.display(),
                body.metrics.elementary_statements,
                body.metrics.branching_statements,
                body.metrics.max_nesting_depth
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_summary(report);
        print_hotspots(report);
        print_pass_fail_status(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Stmtmap Metrics Report".bold().blue());
    println!("{}", "======================".blue());
    println!();
}

fn print_summary(report: &AnalysisReport) {
    println!("Summary:");
    println!("  Bodies analyzed: {}", report.summary.total_bodies);
    println!("  Average size: {:.1}", report.summary.average_size);
    println!("  Max size: {}", report.summary.max_size);

    let oversized = report.summary.oversized_count;
    let oversized_display = if oversized > 0 {
        oversized.to_string().red().to_string()
    } else {
        oversized.to_string().green().to_string()
    };
    println!(
        "  Oversized (> {} statements): {}",
        report.max_statements, oversized_display
    );

    let nested = report.summary.deeply_nested_count;
    let nested_display = if nested > 0 {
        nested.to_string().red().to_string()
    } else {
        nested.to_string().green().to_string()
    };
    println!(
        "  Deeply nested (> {} levels): {}",
        report.max_nesting_depth, nested_display
    );
    println!();
}

fn print_hotspots(report: &AnalysisReport) {
    let flagged = flagged_bodies(report);
    if flagged.is_empty() {
        return;
    }

    println!("{} Move-method candidates:", "⚠".yellow());
    flagged.iter().take(5).enumerate().for_each(|(i, body)| {
        println!(
            "  {}. {} - {} statements, {} branching, nesting {}",
            i + 1,
            body.path.display().to_string().yellow(),
            body.metrics.elementary_statements.to_string().red(),
            body.metrics.branching_statements,
            body.metrics.max_nesting_depth
        );
    });
    println!();
}

fn print_pass_fail_status(report: &AnalysisReport) {
    let (symbol, status, message) = if report.is_passing() {
        (
            "✓".green(),
            "PASS".green().bold(),
            "all bodies within thresholds",
        )
    } else {
        (
            "✗".red(),
            "FAIL".red().bold(),
            "some bodies exceed thresholds",
        )
    };

    println!("{symbol} Pass/Fail: {status} ({message})");
}

fn flagged_bodies(report: &AnalysisReport) -> Vec<&BodyReport> {
    let mut flagged: Vec<&BodyReport> = report
        .bodies
        .iter()
        .filter(|b| {
            b.metrics.is_oversized(report.max_statements)
                || b.metrics.max_nesting_depth > report.max_nesting_depth
        })
        .collect();
    flagged.sort_by(|a, b| {
        b.metrics
            .elementary_statements
            .cmp(&a.metrics.elementary_statements)
    });
    flagged
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}
