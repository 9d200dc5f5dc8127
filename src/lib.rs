//! setupcheck - Declarative validation of a program's runtime preconditions.
//!
//! A YAML specification lists the environment variables a program needs
//! (with their types), the files and directories that must exist, and which
//! of those may be created on demand. setupcheck validates the process
//! environment and filesystem against it and reports every problem at once.
//!
//! # Modules
//!
//! - [`spec`] - Specification types, token substitution, schema and loading
//! - [`env`] - Typed environment variable validation
//! - [`paths`] - File and directory validation
//! - [`report`] - Error delivery and output formatting
//! - [`check`] - Running a full check
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use setupcheck::check::SetupCheck;
//! use setupcheck::env::EnvValue;
//! use setupcheck::paths::PathCheckOptions;
//! use setupcheck::report::SilentReporter;
//! use std::collections::HashMap;
//!
//! let check = SetupCheck::from_str(
//!     "environment:\n  - name: PORT\n    type: port\n",
//!     "inline.yml",
//! );
//! let env = HashMap::from([("PORT".to_string(), "8080".to_string())]);
//!
//! let outcome = check
//!     .run(&env, &mut SilentReporter, &PathCheckOptions::check_only())
//!     .unwrap();
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.env.get("PORT"), Some(&EnvValue::Port(8080)));
//! ```

pub mod check;
pub mod cli;
pub mod env;
pub mod error;
pub mod paths;
pub mod report;
pub mod spec;
pub mod ui;

pub use check::{CheckOutcome, SetupCheck};
pub use error::{Result, SetupError};
