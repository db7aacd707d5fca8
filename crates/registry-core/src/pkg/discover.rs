//! Package directory discovery.
//!
//! Every direct sub-directory of the packages root is a package candidate.
//! Whether it actually holds a valid package is decided by the loader.

use super::error::PkgError;
use std::path::{Path, PathBuf};

/// List package paths under `base`, relative to `base` and sorted.
///
/// Only directories are returned. Each path is the bare directory name, since
/// every match of `base/*` is a direct child of `base`.
///
/// # Errors
/// Returns `PKG_SOURCE_UNAVAILABLE` if `base` is not a readable directory or
/// is not valid UTF-8.
pub fn package_paths(base: &Path) -> Result<Vec<PathBuf>, PkgError> {
    if !base.is_dir() {
        return Err(PkgError::source_unavailable(format!(
            "packages directory not found: {}",
            base.display()
        )));
    }

    let base_str = base.to_str().ok_or_else(|| {
        PkgError::source_unavailable(format!(
            "packages directory is not valid UTF-8: {}",
            base.display()
        ))
    })?;

    let pattern = format!("{}/*", glob::Pattern::escape(base_str));
    let entries = glob::glob(&pattern)
        .map_err(|e| PkgError::source_unavailable(format!("invalid pattern '{pattern}': {e}")))?;

    let mut paths = Vec::new();
    for entry in entries {
        // Only `base` itself is listed, so any read error means the source
        // cannot be listed.
        let entry = entry.map_err(|e| {
            PkgError::source_unavailable(format!("cannot read {}: {}", base.display(), e.error()))
        })?;
        if !entry.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name() {
            paths.push(PathBuf::from(name));
        }
    }

    paths.sort();
    Ok(paths)
}
