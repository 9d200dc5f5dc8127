//! Required file and directory validation.
//!
//! - Path resolution against base directories in [`resolve`]
//! - The validation pass in [`validator`]

pub mod resolve;
pub mod validator;

pub use resolve::{join_under, resolve_entry_path};
pub use validator::{
    validate_paths, PathCheckOptions, PathError, PathErrorKind, PathKind, PathReport,
    PathRequirements,
};
