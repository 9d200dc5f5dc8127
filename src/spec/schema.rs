//! Embedded JSON Schema for specification documents.
//!
//! The schema is shipped inside the binary as YAML and compiled once per
//! check with the `jsonschema` crate (Draft-07). Every violation is
//! collected so a malformed document is reported in one go.

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::error::{Result, SetupError};

const SCHEMA_YAML: &str = include_str!("schema.yml");

/// The embedded schema as a JSON value.
pub fn schema_document() -> Result<Value> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(SCHEMA_YAML).map_err(|e| SetupError::SchemaBuildError {
            message: e.to_string(),
        })?;
    serde_json::to_value(yaml).map_err(|e| SetupError::SchemaBuildError {
        message: e.to_string(),
    })
}

/// The embedded schema as YAML text.
pub fn schema_yaml() -> &'static str {
    SCHEMA_YAML
}

/// A compiled validator for specification documents.
pub struct SpecSchema {
    validator: Validator,
}

impl SpecSchema {
    /// Compile the embedded schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaBuildError` if the embedded schema cannot be parsed or
    /// compiled.
    pub fn compile() -> Result<Self> {
        let schema = schema_document()?;
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(&schema)
            .map_err(|e| SetupError::SchemaBuildError {
                message: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// Collect every schema violation in `instance`.
    ///
    /// Each entry is `<instance path>: <message>`, with `(root)` standing in
    /// for the empty path.
    pub fn violations(&self, instance: &Value) -> Vec<String> {
        self.validator
            .iter_errors(instance)
            .map(|e| {
                let path = e.instance_path.to_string();
                if path.is_empty() {
                    format!("(root): {}", e)
                } else {
                    format!("{}: {}", path, e)
                }
            })
            .collect()
    }
}
