//! JSON output formatter.
//!
//! Formats check results as machine-readable JSON for tooling integration.

use std::io::Write;

use indexmap::IndexMap;
use serde::Serialize;

use super::{ErrorBatch, ReportFormatter};
use crate::check::CheckOutcome;
use crate::env::{EnvError, EnvValue};
use crate::paths::PathError;

/// Formats check output as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
enum JsonBatch<'a> {
    Environment { errors: &'a IndexMap<String, EnvError> },
    Directories { errors: &'a [PathError] },
    Files { errors: &'a [PathError] },
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    ok: bool,
    environment: JsonEnvironment<'a>,
    paths: &'a crate::paths::PathReport,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonEnvironment<'a> {
    values: &'a IndexMap<String, EnvValue>,
    errors: &'a IndexMap<String, EnvError>,
}

#[derive(Serialize)]
struct JsonSummary {
    environment_errors: usize,
    directory_errors: usize,
    file_errors: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_batch<W: Write>(
        &self,
        batch: &ErrorBatch<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json = match batch {
            ErrorBatch::Environment(report) => JsonBatch::Environment {
                errors: &report.errors,
            },
            ErrorBatch::Directories(errors) => JsonBatch::Directories { errors },
            ErrorBatch::Files(errors) => JsonBatch::Files { errors },
        };
        serde_json::to_writer(&mut *writer, &json)?;
        writeln!(writer)
    }

    fn format_outcome<W: Write>(
        &self,
        outcome: &CheckOutcome,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let json = JsonOutcome {
            ok: outcome.is_ok(),
            environment: JsonEnvironment {
                values: &outcome.env.values,
                errors: &outcome.env.errors,
            },
            paths: &outcome.paths,
            summary: JsonSummary {
                environment_errors: outcome.env.error_count(),
                directory_errors: outcome.paths.directory_errors.len(),
                file_errors: outcome.paths.file_errors.len(),
            },
        };
        serde_json::to_writer_pretty(&mut *writer, &json)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{PathErrorKind, PathKind};
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn formats_env_batch_with_phase_tag() {
        let mut outcome = CheckOutcome::default();
        outcome
            .env
            .errors
            .insert("PORT".into(), EnvError::invalid("Invalid port input: \"x\""));

        let mut output = Vec::new();
        JsonFormatter::new()
            .format_batch(&ErrorBatch::Environment(&outcome.env), &mut output)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["phase"], "environment");
        assert_eq!(parsed["errors"]["PORT"]["kind"], "invalid");
        assert_eq!(parsed["errors"]["PORT"]["message"], "Invalid port input: \"x\"");
    }

    #[test]
    fn formats_file_batch() {
        let errors = vec![PathError {
            path: PathBuf::from("/x/y.txt"),
            expected: PathKind::File,
            kind: PathErrorKind::Missing,
            message: "File '/x/y.txt' does not exist.".into(),
        }];

        let mut output = Vec::new();
        JsonFormatter::new()
            .format_batch(&ErrorBatch::Files(&errors), &mut output)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["phase"], "files");
        assert_eq!(parsed["errors"][0]["path"], "/x/y.txt");
        assert_eq!(parsed["errors"][0]["expected"], "file");
    }

    #[test]
    fn formats_outcome_with_summary() {
        let mut outcome = CheckOutcome::default();
        outcome.env.values.insert("PORT".into(), EnvValue::Port(8080));
        outcome.paths.files_checked = true;

        let mut output = Vec::new();
        JsonFormatter::new()
            .format_outcome(&outcome, &mut output)
            .unwrap();
        let parsed: Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(parsed["ok"], true);
        assert_eq!(parsed["environment"]["values"]["PORT"], 8080);
        assert_eq!(parsed["paths"]["files_checked"], true);
        assert_eq!(parsed["summary"]["environment_errors"], 0);
    }
}
