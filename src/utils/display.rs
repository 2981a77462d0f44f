//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::solve::{CliqueReport, CoverReport, SatOutcome, SatReport};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Formats reports as console text
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn sat_header(source: &str) -> String {
        format!(
            "* Solve 3CNF in {}: (reduced to k-clique) *\nX means can be either T or F\n",
            source
        )
    }

    /// One formula: sizes of the chain, then the solution and the formula twice
    pub fn format_sat_report(number: usize, report: &SatReport) -> String {
        let mut output = String::new();
        let _ = writeln!(
            output,
            "3CNF No.{}: [n={} c={}] ==> Clique: [V={} E={} K={}]",
            number, report.variable_count, report.clause_count, report.clique.vertices, report.clique.edges, report.clique.k
        );

        match &report.outcome {
            SatOutcome::Satisfied { assignment, .. } => {
                let _ = writeln!(output, "In {} ms, find solution {}", report.elapsed_ms, assignment);
            }
            SatOutcome::NoSolution { fallback } => {
                let _ = writeln!(
                    output,
                    "In {} ms, find no solution! Random assignment {}",
                    report.elapsed_ms, fallback
                );
            }
            SatOutcome::TimedOut { fallback } => {
                let _ = writeln!(
                    output,
                    "In {} ms, search timed out! Random assignment {}",
                    report.elapsed_ms, fallback
                );
            }
        }
        let _ = writeln!(output, "{}", report.formula);
        let _ = writeln!(output, "{}", report.evaluated);
        output
    }

    pub fn format_sat_reports(source: &str, reports: &[SatReport]) -> String {
        let mut output = Self::sat_header(source);
        output.push('\n');
        for (i, report) in reports.iter().enumerate() {
            output.push_str(&Self::format_sat_report(i + 1, report));
            output.push('\n');
        }
        output.push_str("***\n");
        output
    }

    pub fn cover_header(source: &str, size: Option<usize>) -> String {
        let title = match size {
            Some(k) => format!("* A Vertex Cover of size {} of every graph in {} *", k, source),
            None => format!("* A Minimum Vertex Cover of every graph in {} *", source),
        };
        format!("{}\n(|V|,|E|) (size, ms used) Vertex Cover\n", title)
    }

    pub fn format_cover_report(number: usize, report: &CoverReport) -> String {
        match (&report.cover, report.requested_size) {
            _ if report.timed_out => format!(
                "G{} ({}, {}) (ms={}) timed out after {} nodes",
                number, report.vertex_count, report.edge_count, report.elapsed_ms, report.nodes
            ),
            (Some(cover), _) => format!(
                "G{} ({}, {}) (size = {} ms={}) {}",
                number,
                report.vertex_count,
                report.edge_count,
                cover.size(),
                report.elapsed_ms,
                cover
            ),
            (None, k) => format!(
                "G{} ({}, {}) (size = {} ms={}) no cover of that size",
                number,
                report.vertex_count,
                report.edge_count,
                k.unwrap_or(0),
                report.elapsed_ms
            ),
        }
    }

    pub fn format_cover_reports(source: &str, size: Option<usize>, reports: &[CoverReport]) -> String {
        let mut output = Self::cover_header(source, size);
        for (i, report) in reports.iter().enumerate() {
            output.push_str(&Self::format_cover_report(i + 1, report));
            output.push('\n');
        }
        output
    }

    pub fn clique_header(source: &str) -> String {
        format!(
            "* Max Cliques in {} (reduced to K-Vertex Cover) *\n(|V|,|E|) (size, ms used) Cliques\n",
            source
        )
    }

    pub fn format_clique_report(number: usize, report: &CliqueReport) -> String {
        match &report.clique {
            Some(clique) => format!(
                "G{} ({:2}, {}) (size = {} ms={}) {}",
                number,
                report.vertex_count,
                report.edge_count,
                clique.size(),
                report.elapsed_ms,
                clique
            ),
            None => format!(
                "G{} ({:2}, {}) (ms={}) timed out after {} nodes",
                number, report.vertex_count, report.edge_count, report.elapsed_ms, report.nodes
            ),
        }
    }

    pub fn format_clique_reports(source: &str, reports: &[CliqueReport]) -> String {
        let mut output = Self::clique_header(source);
        for (i, report) in reports.iter().enumerate() {
            output.push_str(&Self::format_clique_report(i + 1, report));
            output.push('\n');
        }
        output
    }

    /// Write reports to `<dir>/<kind>_results.{txt,json}` and return the path
    pub fn save_reports<T: Serialize, P: AsRef<Path>>(
        kind: &str,
        text: &str,
        reports: &[T],
        output_dir: P,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let (path, content) = match format {
            OutputFormat::Text => (output_dir.join(format!("{}_results.txt", kind)), text.to_string()),
            OutputFormat::Json => (
                output_dir.join(format!("{}_results.json", kind)),
                serde_json::to_string_pretty(reports).context("Failed to serialize results")?,
            ),
        };

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write results: {}", path.display()))?;
        Ok(path)
    }
}

/// ANSI-coloured status lines for the CLI
pub struct ColorOutput;

impl ColorOutput {
    /// Wrap `text` in an ANSI colour, or return it unchanged when colour is off
    pub fn colored(text: &str, color: Color) -> String {
        if Self::color_enabled() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Colour is off under `NO_COLOR` or `TERM=dumb`
    fn color_enabled() -> bool {
        let dumb_terminal = std::env::var("TERM").is_ok_and(|term| term == "dumb");
        std::env::var_os("NO_COLOR").is_none() && !dumb_terminal
    }

    /// Batch summaries and saved-file notices
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Solutions that failed verification
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Missing config files, timed-out or unsolved instances
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Progress before a batch starts
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

/// The four colours the CLI uses
#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    /// SGR foreground code
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
