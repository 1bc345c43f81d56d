//! End-of-run report
//!
//! Summarizes a run once input is exhausted. Off unless requested, either with
//! `--report <human|json>` or the `POLYCALC_REPORT` env var:
//! - Unset → no report
//! - `1` → human-readable to stderr
//! - `json` → JSON to stderr
//! - `json:/path` → JSON to file

use crate::error::{ArgKind, CalcError};
use serde::Serialize;
use std::io::Write;

pub const REPORT_ENV: &str = "POLYCALC_REPORT";

// =============================================================================
// Report Data
// =============================================================================

/// Errors seen during a run, by category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorCounts {
    pub wrong_poly: u64,
    pub wrong_command: u64,
    pub wrong_argument: u64,
    pub stack_underflow: u64,
}

impl ErrorCounts {
    pub fn record(&mut self, error: &CalcError) {
        match error {
            CalcError::WrongPoly { .. } => self.wrong_poly += 1,
            CalcError::WrongCommand => self.wrong_command += 1,
            CalcError::WrongArgument(ArgKind::Value | ArgKind::Variable | ArgKind::Count) => {
                self.wrong_argument += 1
            }
            CalcError::StackUnderflow => self.stack_underflow += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.wrong_poly + self.wrong_command + self.wrong_argument + self.stack_underflow
    }
}

/// Counters collected by the interpreter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub lines: u64,
    pub literals: u64,
    pub commands: u64,
    pub errors: ErrorCounts,
    pub peak_depth: usize,
    pub final_depth: usize,
}

// =============================================================================
// Report Configuration
// =============================================================================

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Human,
    Json,
}

/// Output destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stderr,
    File(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl ReportConfig {
    /// A report in `format` on stderr
    pub fn stderr(format: ReportFormat) -> Self {
        ReportConfig {
            format,
            destination: ReportDestination::Stderr,
        }
    }

    /// Parse a `POLYCALC_REPORT` value. `None` means no report.
    pub fn parse(val: &str) -> Option<Self> {
        match val {
            "" | "0" => None,
            "1" => Some(Self::stderr(ReportFormat::Human)),
            "json" => Some(Self::stderr(ReportFormat::Json)),
            s if s.starts_with("json:") => Some(ReportConfig {
                format: ReportFormat::Json,
                destination: ReportDestination::File(s[5..].to_string()),
            }),
            _ => {
                tracing::warn!("{}='{}' not recognized, ignoring", REPORT_ENV, val);
                None
            }
        }
    }

    /// Parse from the `POLYCALC_REPORT` environment variable
    pub fn from_env() -> Option<Self> {
        let val = std::env::var(REPORT_ENV).ok()?;
        Self::parse(&val)
    }

    pub fn render(&self, stats: &RunStats) -> String {
        match self.format {
            ReportFormat::Human => format_human(stats),
            ReportFormat::Json => format_json(stats),
        }
    }

    pub fn emit(&self, stats: &RunStats) {
        let output = self.render(stats);
        match &self.destination {
            ReportDestination::Stderr => {
                let _ = std::io::stderr().write_all(output.as_bytes());
            }
            ReportDestination::File(path) => {
                if let Err(e) = std::fs::write(path, output.as_bytes()) {
                    tracing::warn!("could not write report to {}: {}", path, e);
                    let _ = std::io::stderr().write_all(output.as_bytes());
                }
            }
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

fn format_human(stats: &RunStats) -> String {
    let errors = &stats.errors;
    let mut out = String::new();
    out.push_str("=== POLYCALC REPORT ===\n");
    out.push_str(&format!("Lines:           {}\n", stats.lines));
    out.push_str(&format!("Literals:        {}\n", stats.literals));
    out.push_str(&format!("Commands:        {}\n", stats.commands));
    out.push_str(&format!("Errors:          {}\n", errors.total()));
    out.push_str(&format!("  wrong poly:    {}\n", errors.wrong_poly));
    out.push_str(&format!("  wrong command: {}\n", errors.wrong_command));
    out.push_str(&format!("  wrong arg:     {}\n", errors.wrong_argument));
    out.push_str(&format!("  underflow:     {}\n", errors.stack_underflow));
    out.push_str(&format!("Peak depth:      {}\n", stats.peak_depth));
    out.push_str(&format!("Final depth:     {}\n", stats.final_depth));
    out.push_str("=======================\n");
    out
}

fn format_json(stats: &RunStats) -> String {
    let mut json = serde_json::to_string(stats).unwrap_or_else(|_| "{}".to_string());
    json.push('\n');
    json
}

// =============================================================================
// Tests
// =============================================================================
