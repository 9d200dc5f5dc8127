//! Specification file loading.
//!
//! Loading runs in a fixed order: read the raw text, substitute `%TOKEN%`
//! markers, parse YAML, check the document against the embedded schema, and
//! finally deserialize into [`SetupSpec`].

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, SetupError};
use crate::spec::schema::SpecSchema;
use crate::spec::substitution::{substitute, SubstitutionContext};
use crate::spec::types::SetupSpec;

/// Default specification file name looked up by the CLI.
pub const DEFAULT_SPEC_FILE: &str = "setup-check.yml";

/// Read a specification file as raw text.
///
/// # Errors
///
/// Returns `SpecNotFound` if the file doesn't exist.
pub fn read_spec_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::SpecNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SetupError::Io(e)
        }
    })
}

/// Parse YAML content into a JSON value suitable for schema validation.
///
/// An empty document parses to an empty object.
pub fn parse_spec_value(content: &str, source_path: &Path) -> Result<Value> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| SetupError::SpecParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    if yaml.is_null() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::to_value(yaml).map_err(|e| SetupError::SpecParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse and schema-check already substituted content.
///
/// # Errors
///
/// Returns `SpecParseError` if the YAML is invalid and `SchemaViolation`
/// listing every violation if the document does not match the schema.
pub fn parse_spec(content: &str, source_path: &Path) -> Result<SetupSpec> {
    let value = parse_spec_value(content, source_path)?;

    let schema = SpecSchema::compile()?;
    let violations = schema.violations(&value);
    if !violations.is_empty() {
        return Err(SetupError::SchemaViolation {
            path: source_path.to_path_buf(),
            violations,
        });
    }

    serde_json::from_value(value).map_err(|e| SetupError::SpecParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Substitute tokens in `content`, then parse it.
pub fn load_spec_str(
    content: &str,
    source_path: &Path,
    context: &SubstitutionContext,
) -> Result<SetupSpec> {
    let unresolved = context.unresolved_tokens(content);
    if !unresolved.is_empty() {
        tracing::debug!(
            "Leaving unresolved token(s) in {}: {}",
            source_path.display(),
            unresolved.join(", ")
        );
    }
    let substituted = substitute(content, context);
    parse_spec(&substituted, source_path)
}

/// Read, substitute and parse a specification file.
pub fn load_spec_file(path: &Path, context: &SubstitutionContext) -> Result<SetupSpec> {
    let content = read_spec_source(path)?;
    tracing::debug!("Loaded specification from {}", path.display());
    load_spec_str(&content, path, context)
}
