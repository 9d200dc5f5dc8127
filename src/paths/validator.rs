//! Filesystem validation pass.
//!
//! Directories are checked before files, because an `ensureExists`
//! directory may be the parent of a required file. Any directory error ends
//! the pass before the file phase.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::spec::{PathEntry, SetupSpec};

use super::resolve::resolve_entry_path;

/// Whether an entry is expected to be a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathKind {
    Directory,
    File,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => f.write_str("directory"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Why an entry failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathErrorKind {
    /// Nothing exists at the path.
    Missing,
    /// Something exists, but of the other kind.
    WrongType,
    /// `ensureExists` was set and creating the entry failed.
    CreateFailed,
}

/// A failed file or directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathError {
    pub path: PathBuf,
    pub expected: PathKind,
    pub kind: PathErrorKind,
    pub message: String,
}

impl PathError {
    fn missing(path: &Path, expected: PathKind) -> Self {
        let message = match expected {
            PathKind::Directory => format!("Directory '{}' does not exist.", path.display()),
            PathKind::File => format!("File '{}' does not exist.", path.display()),
        };
        Self {
            path: path.to_path_buf(),
            expected,
            kind: PathErrorKind::Missing,
            message,
        }
    }

    fn wrong_type(path: &Path, expected: PathKind) -> Self {
        Self {
            path: path.to_path_buf(),
            expected,
            kind: PathErrorKind::WrongType,
            message: format!("'{}' is not a {}.", path.display(), expected),
        }
    }

    fn create_failed(path: &Path, expected: PathKind, err: &std::io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            expected,
            kind: PathErrorKind::CreateFailed,
            message: format!("Failed to create '{}': {}", path.display(), err),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The file and directory lists to check.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRequirements<'a> {
    /// Global base directory (`config.baseDir`).
    pub base_dir: Option<&'a str>,
    pub dirs: &'a [PathEntry],
    pub files: &'a [PathEntry],
}

impl<'a> PathRequirements<'a> {
    pub fn from_spec(spec: &'a SetupSpec) -> Self {
        Self {
            base_dir: spec.base_dir(),
            dirs: &spec.dirs,
            files: &spec.files,
        }
    }
}

/// Options for the filesystem pass.
#[derive(Debug, Clone)]
pub struct PathCheckOptions {
    /// Honour `ensureExists`. When false, missing entries are only reported.
    pub create: bool,
    /// Base used when neither the entry nor the document sets one.
    /// Defaults to the process working directory.
    pub default_base: Option<PathBuf>,
}

impl Default for PathCheckOptions {
    fn default() -> Self {
        Self {
            create: true,
            default_base: None,
        }
    }
}

impl PathCheckOptions {
    /// Check only; never create anything.
    pub fn check_only() -> Self {
        Self {
            create: false,
            ..Default::default()
        }
    }
}

/// Outcome of the filesystem pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PathReport {
    pub directory_errors: Vec<PathError>,
    pub file_errors: Vec<PathError>,
    /// False when directory errors stopped the pass before the file phase.
    pub files_checked: bool,
    /// Entries created because of `ensureExists`, in creation order.
    pub created: Vec<PathBuf>,
}

impl PathReport {
    pub fn is_ok(&self) -> bool {
        self.directory_errors.is_empty() && self.file_errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.directory_errors.len() + self.file_errors.len()
    }

    /// All errors, directories first.
    pub fn errors(&self) -> impl Iterator<Item = &PathError> {
        self.directory_errors.iter().chain(self.file_errors.iter())
    }
}

/// Validate `requirements` against the filesystem.
pub fn validate_paths(requirements: &PathRequirements<'_>, options: &PathCheckOptions) -> PathReport {
    let default_base = options
        .default_base
        .clone()
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let mut report = PathReport::default();

    for entry in requirements.dirs {
        let path = resolve_entry_path(entry, requirements.base_dir, &default_base);
        let ensure = entry.ensure_exists && options.create;
        if let Some(err) = check_directory(&path, ensure, &mut report.created) {
            tracing::debug!("{}", err);
            report.directory_errors.push(err);
        }
    }

    if !report.directory_errors.is_empty() {
        tracing::info!(
            "Skipping {} file check(s) after {} directory error(s)",
            requirements.files.len(),
            report.directory_errors.len()
        );
        return report;
    }

    report.files_checked = true;
    for entry in requirements.files {
        let path = resolve_entry_path(entry, requirements.base_dir, &default_base);
        let ensure = entry.ensure_exists && options.create;
        if let Some(err) = check_file(&path, ensure, &mut report.created) {
            tracing::debug!("{}", err);
            report.file_errors.push(err);
        }
    }

    tracing::info!(
        "Path check: {} directories, {} files, {} error(s)",
        requirements.dirs.len(),
        requirements.files.len(),
        report.error_count()
    );

    report
}

fn check_directory(path: &Path, ensure: bool, created: &mut Vec<PathBuf>) -> Option<PathError> {
    if ensure && !path.exists() {
        if let Err(e) = fs::create_dir_all(path) {
            return Some(PathError::create_failed(path, PathKind::Directory, &e));
        }
        tracing::warn!("Created directory {}", path.display());
        created.push(path.to_path_buf());
    }

    match fs::metadata(path) {
        Err(_) => Some(PathError::missing(path, PathKind::Directory)),
        Ok(meta) if !meta.is_dir() => Some(PathError::wrong_type(path, PathKind::Directory)),
        Ok(_) => None,
    }
}

// Existing files are never truncated.
fn check_file(path: &Path, ensure: bool, created: &mut Vec<PathBuf>) -> Option<PathError> {
    if ensure && !path.exists() {
        if let Err(e) = OpenOptions::new().write(true).create_new(true).open(path) {
            return Some(PathError::create_failed(path, PathKind::File, &e));
        }
        tracing::warn!("Created file {}", path.display());
        created.push(path.to_path_buf());
    }

    match fs::metadata(path) {
        Err(_) => Some(PathError::missing(path, PathKind::File)),
        Ok(meta) if !meta.is_file() => Some(PathError::wrong_type(path, PathKind::File)),
        Ok(_) => None,
    }
}
