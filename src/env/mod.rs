//! Typed environment variable validation.
//!
//! - Types and decoded values in [`types`]
//! - Per-type decoding in [`decode`]
//! - Variable lookup in [`source`]
//! - The validation pass in [`validator`]
//!
//! # Example
//!
//! ```
//! use setupcheck::env::{validate_environment, EnvType, EnvValue};
//! use setupcheck::spec::EnvDeclaration;
//! use std::collections::HashMap;
//!
//! let source = HashMap::from([("PORT".to_string(), "8080".to_string())]);
//! let decls = [
//!     EnvDeclaration::new("PORT", EnvType::Port),
//!     EnvDeclaration::new("DEBUG", EnvType::Bool),
//! ];
//!
//! let report = validate_environment(&source, &decls);
//! assert_eq!(report.get("PORT"), Some(&EnvValue::Port(8080)));
//! assert!(report.error("DEBUG").is_some());
//! ```

pub mod decode;
pub mod source;
pub mod types;
pub mod validator;

pub use decode::decode;
pub use source::{EnvSource, ProcessEnv};
pub use types::{EnvType, EnvValue};
pub use validator::{
    validate_environment, EnvError, EnvErrorKind, EnvReport, MISSING_MESSAGE,
};
