//! Where environment values come from.
//!
//! Validation never reads `std::env` directly; it goes through
//! [`EnvSource`] so tests and embedding applications can supply their own
//! variables.

use std::collections::{BTreeMap, HashMap};
use std::ffi::OsString;

/// A lookup of environment variables by name.
pub trait EnvSource {
    /// Raw value of `name`, or `None` when it is not set.
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(OsString::from)
    }
}

impl EnvSource for HashMap<String, OsString> {
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, name: &str) -> Option<OsString> {
        (**self).var(name)
    }
}
