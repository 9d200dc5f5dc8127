//! Specification documents: types, loading and validation.
//!
//! This module handles everything up to a typed [`SetupSpec`]:
//! - Document types in [`types`]
//! - `%TOKEN%` substitution in [`substitution`]
//! - The embedded JSON Schema in [`schema`]
//! - File reading and parsing in [`loader`]
//!
//! # Example
//!
//! ```
//! use setupcheck::spec::{load_spec_str, SubstitutionContext};
//! use std::path::Path;
//!
//! let mut ctx = SubstitutionContext::new();
//! ctx.set("APP_ROOT", "/srv/app");
//!
//! let spec = load_spec_str(
//!     "config:\n  baseDir: \"%APP_ROOT%\"\ndirs:\n  - path: logs\n",
//!     Path::new("inline.yml"),
//!     &ctx,
//! )
//! .unwrap();
//! assert_eq!(spec.base_dir(), Some("/srv/app"));
//! ```

pub mod loader;
pub mod schema;
pub mod substitution;
pub mod types;

pub use loader::{
    load_spec_file, load_spec_str, parse_spec, parse_spec_value, read_spec_source,
    DEFAULT_SPEC_FILE,
};
pub use schema::{schema_document, schema_yaml, SpecSchema};
pub use substitution::{parse_tokens, substitute, Segment, SubstitutionContext, CWD_TOKEN};
pub use types::{EnvDeclaration, PathEntry, SetupSpec, SpecConfig};
