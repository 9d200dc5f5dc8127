//! Environment validation pass.
//!
//! Every declared variable is checked on its own; one bad value never hides
//! another. The result keeps declaration order.

use indexmap::IndexMap;
use serde::Serialize;

use crate::spec::EnvDeclaration;

use super::decode::{decode, reject_non_utf8};
use super::source::EnvSource;
use super::types::EnvValue;

/// Message recorded for a declared variable that is not set.
pub const MISSING_MESSAGE: &str = "Missing environment variable";

/// Why a variable failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvErrorKind {
    /// The variable is not set.
    Missing,
    /// The variable is set but does not match its declared type.
    Invalid,
}

/// A validation error for a single variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvError {
    pub kind: EnvErrorKind,
    pub message: String,
}

impl EnvError {
    pub fn missing() -> Self {
        Self {
            kind: EnvErrorKind::Missing,
            message: MISSING_MESSAGE.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            kind: EnvErrorKind::Invalid,
            message: message.into(),
        }
    }
}

/// Outcome of the environment pass.
///
/// A name is in exactly one of `values` or `errors`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnvReport {
    /// Decoded values of valid variables.
    pub values: IndexMap<String, EnvValue>,
    /// Errors keyed by variable name.
    pub errors: IndexMap<String, EnvError>,
}

impl EnvReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, name: &str) -> Option<&EnvValue> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&EnvError> {
        self.errors.get(name)
    }

    /// Errors of one kind, in declaration order.
    pub fn errors_of_kind(&self, kind: EnvErrorKind) -> impl Iterator<Item = (&str, &EnvError)> {
        self.errors
            .iter()
            .filter(move |(_, e)| e.kind == kind)
            .map(|(name, e)| (name.as_str(), e))
    }

    fn record(&mut self, name: &str, outcome: Result<EnvValue, EnvError>) {
        // A later declaration of the same name wins.
        self.values.shift_remove(name);
        self.errors.shift_remove(name);
        match outcome {
            Ok(value) => {
                self.values.insert(name.to_string(), value);
            }
            Err(error) => {
                self.errors.insert(name.to_string(), error);
            }
        }
    }
}

/// Validate `declarations` against `source`.
pub fn validate_environment<S: EnvSource + ?Sized>(
    source: &S,
    declarations: &[EnvDeclaration],
) -> EnvReport {
    let mut report = EnvReport::default();

    for decl in declarations {
        let outcome = match source.var(&decl.name) {
            None => Err(EnvError::missing()),
            Some(raw) => match raw.into_string() {
                Ok(text) => decode(decl.env_type, &text).map_err(EnvError::invalid),
                Err(raw) => Err(EnvError::invalid(reject_non_utf8(
                    decl.env_type,
                    &raw.to_string_lossy(),
                ))),
            },
        };

        match &outcome {
            Ok(_) => tracing::debug!("{} ({}) ok", decl.name, decl.env_type),
            Err(e) => tracing::debug!("{} ({}) failed: {}", decl.name, decl.env_type, e.message),
        }

        report.record(&decl.name, outcome);
    }

    tracing::info!(
        "Environment check: {} valid, {} invalid",
        report.values.len(),
        report.errors.len()
    );

    report
}
