//! Specification document types.
//!
//! These types mirror the YAML layout of a specification document. Field
//! names are camelCase on disk (`ensureExists`, `baseDir`).

use serde::{Deserialize, Serialize};

use crate::env::EnvType;

/// Root of a specification document.
///
/// Every section is optional; an empty document declares nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SetupSpec {
    /// Global settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SpecConfig>,

    /// Required environment variables, in declaration order.
    #[serde(default)]
    pub environment: Vec<EnvDeclaration>,

    /// Required files, in declaration order.
    #[serde(default)]
    pub files: Vec<PathEntry>,

    /// Required directories, in declaration order.
    #[serde(default)]
    pub dirs: Vec<PathEntry>,
}

impl SetupSpec {
    /// Global base directory, if one is configured.
    pub fn base_dir(&self) -> Option<&str> {
        self.config.as_ref().and_then(|c| c.base_dir.as_deref())
    }

    /// Whether the document declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.environment.is_empty() && self.files.is_empty() && self.dirs.is_empty()
    }
}

/// The `config:` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpecConfig {
    /// Base directory that relative file and directory paths resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

/// A required environment variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnvDeclaration {
    /// Variable name as it appears in the environment.
    pub name: String,

    /// Expected type of the value.
    #[serde(rename = "type")]
    pub env_type: EnvType,
}

impl EnvDeclaration {
    pub fn new(name: impl Into<String>, env_type: EnvType) -> Self {
        Self {
            name: name.into(),
            env_type,
        }
    }
}

/// A required file or directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PathEntry {
    /// Path of the entry, relative to its base directory.
    pub path: String,

    /// Create the entry when it is missing instead of reporting it.
    #[serde(default)]
    pub ensure_exists: bool,

    /// Overrides the global base directory for this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<String>,
}

impl PathEntry {
    /// An entry that must already exist.
    pub fn required(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// An entry that is created when missing.
    pub fn ensured(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ensure_exists: true,
            ..Default::default()
        }
    }

    /// Set a per-entry base directory.
    pub fn with_base_dir(mut self, base_dir: impl Into<String>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_document() {
        let yaml = r#"
config:
  baseDir: /srv/app
environment:
  - name: PORT
    type: port
  - name: CREDENTIALS
    type: base64Json
files:
  - path: config/app.yml
    ensureExists: true
    baseDir: /etc/app
dirs:
  - path: var/log
"#;
        let spec: SetupSpec = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(spec.base_dir(), Some("/srv/app"));
        assert_eq!(spec.environment.len(), 2);
        assert_eq!(spec.environment[0], EnvDeclaration::new("PORT", EnvType::Port));
        assert_eq!(spec.environment[1].env_type, EnvType::Base64Json);
        assert_eq!(
            spec.files[0],
            PathEntry::ensured("config/app.yml").with_base_dir("/etc/app")
        );
        assert_eq!(spec.dirs[0], PathEntry::required("var/log"));
    }

    #[test]
    fn sections_default_to_empty() {
        let spec: SetupSpec = serde_yaml::from_str("environment: []").unwrap();
        assert!(spec.is_empty());
        assert!(spec.base_dir().is_none());
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<SetupSpec, _> = serde_yaml::from_str("dirs:\n  - path: a\n    mode: 755");
        assert!(result.is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let spec = SetupSpec {
            files: vec![PathEntry::ensured("a.txt").with_base_dir("/tmp")],
            ..Default::default()
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["files"][0]["ensureExists"], true);
        assert_eq!(json["files"][0]["baseDir"], "/tmp");
    }
}
