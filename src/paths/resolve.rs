//! Effective path resolution for file and directory entries.

use std::path::{Component, Path, PathBuf};

use crate::spec::PathEntry;

/// Join `path` under `base`, dropping any root or prefix of `path`.
///
/// `Path::join` would replace `base` with an absolute `path`; entries are
/// always meant to live under their base, so `/logs/` under `/srv` is
/// `/srv/logs`.
pub fn join_under(base: &Path, path: &str) -> PathBuf {
    let mut joined = base.to_path_buf();
    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => joined.push(other.as_os_str()),
        }
    }
    joined
}

/// Resolve the effective path of `entry`.
///
/// The base is the entry's own `baseDir`, else `global_base`, else
/// `default_base`. An explicitly empty base stays empty, which makes the
/// result relative to the process working directory.
pub fn resolve_entry_path(
    entry: &PathEntry,
    global_base: Option<&str>,
    default_base: &Path,
) -> PathBuf {
    let base = match entry.base_dir.as_deref().or(global_base) {
        Some(base) => PathBuf::from(base),
        None => default_base.to_path_buf(),
    };
    join_under(&base, &entry.path)
}
