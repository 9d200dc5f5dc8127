//! Human-readable output formatter.
//!
//! Environment errors are printed as one framed block; path errors as
//! `ERROR:` lines.

use std::io::Write;

use super::{ErrorBatch, ReportFormatter};
use crate::check::CheckOutcome;
use crate::env::{EnvErrorKind, EnvReport};
use crate::paths::PathError;
use crate::ui::Theme;

const FRAME: &str = "================================";

/// Formats check output for terminal display.
#[derive(Debug, Clone)]
pub struct HumanFormatter {
    theme: Theme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color { Theme::new() } else { Theme::plain() };
        Self { theme }
    }

    fn format_env<W: Write>(&self, report: &EnvReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.theme.border.apply_to(FRAME))?;

        for (kind, heading) in [
            (EnvErrorKind::Invalid, "Invalid environment variables:"),
            (EnvErrorKind::Missing, "Missing environment variables:"),
        ] {
            let mut errors = report.errors_of_kind(kind).peekable();
            if errors.peek().is_none() {
                continue;
            }
            writeln!(writer, " {}", self.theme.error.apply_to(heading))?;
            for (name, error) in errors {
                writeln!(
                    writer,
                    "    {}: {}",
                    self.theme.key.apply_to(name),
                    error.message
                )?;
            }
        }

        writeln!(writer, "{}", self.theme.border.apply_to(FRAME))
    }

    fn format_paths<W: Write>(&self, errors: &[PathError], writer: &mut W) -> std::io::Result<()> {
        for error in errors {
            writeln!(writer, "{} {}", self.theme.error.apply_to("ERROR:"), error.message)?;
        }
        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format_batch<W: Write>(
        &self,
        batch: &ErrorBatch<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        match batch {
            ErrorBatch::Environment(report) => self.format_env(report, writer),
            ErrorBatch::Directories(errors) => {
                self.format_paths(errors, writer)?;
                writeln!(
                    writer,
                    "{}",
                    self.theme
                        .dim
                        .apply_to("File checks skipped until directory errors are fixed")
                )
            }
            ErrorBatch::Files(errors) => self.format_paths(errors, writer),
        }
    }

    fn format_outcome<W: Write>(
        &self,
        outcome: &CheckOutcome,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for batch in outcome.batches() {
            self.format_batch(&batch, writer)?;
        }

        for path in &outcome.paths.created {
            writeln!(
                writer,
                "{} {}",
                self.theme.warning.apply_to("Created"),
                path.display()
            )?;
        }

        if outcome.is_ok() {
            writeln!(
                writer,
                "{}",
                self.theme.success.apply_to("✓ All setup checks passed")
            )
        } else {
            writeln!(
                writer,
                "Found {} environment error(s) and {} path error(s)",
                outcome.env.error_count(),
                outcome.paths.error_count()
            )
        }
    }
}
