//! Delivery of validation errors.
//!
//! A check hands each non-empty group of errors to a [`Reporter`] as soon as
//! the pass that produced it finishes. Any `FnMut(&ErrorBatch)` closure is a
//! reporter, so embedding applications can route errors wherever they like;
//! [`ConsoleReporter`] is the default and prints to stderr.
//!
//! Formatters render batches and whole outcomes in human-readable form or
//! as JSON for tooling.

pub mod human;
pub mod json;

use std::io::Write;

use crate::check::CheckOutcome;
use crate::env::EnvReport;
use crate::paths::PathError;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown output format: {}", s)),
        }
    }
}

/// A group of errors produced by one validation phase.
#[derive(Debug, Clone, Copy)]
pub enum ErrorBatch<'a> {
    /// Invalid or missing environment variables.
    Environment(&'a EnvReport),
    /// Directory errors. When present, files were not checked.
    Directories(&'a [PathError]),
    /// File errors.
    Files(&'a [PathError]),
}

impl ErrorBatch<'_> {
    pub fn len(&self) -> usize {
        match self {
            Self::Environment(report) => report.error_count(),
            Self::Directories(errors) | Self::Files(errors) => errors.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Receives error batches from a check.
pub trait Reporter {
    fn report(&mut self, batch: &ErrorBatch<'_>);
}

impl<F> Reporter for F
where
    F: FnMut(&ErrorBatch<'_>),
{
    fn report(&mut self, batch: &ErrorBatch<'_>) {
        self(batch)
    }
}

/// Trait for formatting check results.
pub trait ReportFormatter {
    /// Format a single batch to the given writer.
    fn format_batch<W: Write>(&self, batch: &ErrorBatch<'_>, writer: &mut W)
        -> std::io::Result<()>;

    /// Format a complete outcome to the given writer.
    fn format_outcome<W: Write>(&self, outcome: &CheckOutcome, writer: &mut W)
        -> std::io::Result<()>;
}

/// Prints batches to stderr as they arrive.
#[derive(Debug, Clone)]
pub struct ConsoleReporter {
    formatter: HumanFormatter,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self {
            formatter: HumanFormatter::new(use_color),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(crate::ui::should_use_colors())
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, batch: &ErrorBatch<'_>) {
        let mut stderr = std::io::stderr().lock();
        if let Err(e) = self.formatter.format_batch(batch, &mut stderr) {
            tracing::warn!("Failed to write report: {}", e);
        }
    }
}

/// Discards every batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&mut self, _batch: &ErrorBatch<'_>) {}
}
