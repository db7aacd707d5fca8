//! Package manifest loading.
//!
//! Each package version lives in its own directory under the packages root
//! and is described by a `manifest.json`:
//!
//! ```json
//! {
//!   "name": "nginx",
//!   "version": "1.2.0",
//!   "categories": ["logs", "metrics"]
//! }
//! ```
//!
//! Other fields are ignored.

use super::error::PkgError;
use super::version::parse_version;
use semver::Version;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Manifest filename inside each package directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// On-disk manifest shape, before validation.
#[derive(Debug, Deserialize)]
struct RawManifest {
    name: String,
    version: String,
    #[serde(default)]
    categories: Vec<String>,
}

/// A single version of a package, as loaded from its manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name (e.g., "nginx").
    pub name: String,
    /// Package version.
    pub version: Version,
    /// Category ids the package declares. Duplicates collapse.
    pub categories: BTreeSet<String>,
    /// Path identifier relative to the packages root.
    pub path: PathBuf,
}

impl Package {
    /// Create a package record directly.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, version: Version, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let path = PathBuf::from(format!("{name}-{version}"));
        Self {
            name,
            version,
            categories: categories.into_iter().map(Into::into).collect(),
            path,
        }
    }

    /// Load the package at `base/path` from its manifest.
    ///
    /// # Errors
    /// - `PKG_MANIFEST_NOT_FOUND` if the directory has no manifest
    /// - `PKG_MANIFEST_INVALID` if the manifest cannot be read, is not valid
    ///   JSON, or has an empty or whitespace-padded name
    /// - `PKG_VERSION_INVALID` if the version is not semver
    pub fn load(base: &Path, path: &Path) -> Result<Self, PkgError> {
        let manifest_path = base.join(path).join(MANIFEST_FILE);
        if !manifest_path.is_file() {
            return Err(PkgError::manifest_not_found(&manifest_path));
        }

        let content = fs::read_to_string(&manifest_path)?;
        Self::from_manifest_str(&content, path)
    }

    /// Build a package from manifest JSON text.
    ///
    /// # Errors
    /// Same as [`Package::load`], minus the missing-file case.
    pub fn from_manifest_str(content: &str, path: &Path) -> Result<Self, PkgError> {
        let raw: RawManifest = serde_json::from_str(content)?;

        if raw.name.trim().is_empty() {
            return Err(PkgError::manifest_invalid(format!(
                "package name is empty in {}",
                path.display()
            )));
        }
        if raw.name.trim() != raw.name {
            return Err(PkgError::manifest_invalid(format!(
                "package name '{}' has surrounding whitespace in {}",
                raw.name,
                path.display()
            )));
        }

        let version = parse_version(&raw.version)?;

        Ok(Self {
            name: raw.name,
            version,
            categories: raw.categories.into_iter().collect(),
            path: path.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::codes;
    use tempfile::tempdir;

    fn write_manifest(base: &Path, dir: &str, content: &str) {
        let pkg_dir = base.join(dir);
        fs::create_dir_all(&pkg_dir).unwrap();
        fs::write(pkg_dir.join(MANIFEST_FILE), content).unwrap();
    }

    #[test]
    fn test_load_manifest() {
        let base = tempdir().unwrap();
        write_manifest(
            base.path(),
            "nginx-1.2.0",
            r#"{
                "name": "nginx",
                "version": "1.2.0",
                "title": "Nginx",
                "categories": ["logs", "metrics"]
            }"#,
        );

        let pkg = Package::load(base.path(), Path::new("nginx-1.2.0")).unwrap();
        assert_eq!(pkg.name, "nginx");
        assert_eq!(pkg.version, Version::new(1, 2, 0));
        assert!(pkg.categories.contains("logs"));
        assert!(pkg.categories.contains("metrics"));
        assert_eq!(pkg.path, PathBuf::from("nginx-1.2.0"));
    }

    #[test]
    fn test_categories_default_to_empty() {
        let pkg = Package::from_manifest_str(
            r#"{"name": "bare", "version": "0.1.0"}"#,
            Path::new("bare-0.1.0"),
        )
        .unwrap();
        assert!(pkg.categories.is_empty());
    }

    #[test]
    fn test_duplicate_categories_collapse() {
        let pkg = Package::from_manifest_str(
            r#"{"name": "dup", "version": "1.0.0", "categories": ["logs", "logs"]}"#,
            Path::new("dup-1.0.0"),
        )
        .unwrap();
        assert_eq!(pkg.categories.len(), 1);
    }

    #[test]
    fn test_missing_manifest() {
        let base = tempdir().unwrap();
        fs::create_dir_all(base.path().join("empty-1.0.0")).unwrap();

        let err = Package::load(base.path(), Path::new("empty-1.0.0")).unwrap_err();
        assert_eq!(err.code(), codes::PKG_MANIFEST_NOT_FOUND);
    }

    #[test]
    fn test_invalid_json() {
        let base = tempdir().unwrap();
        write_manifest(base.path(), "broken-1.0.0", "{ not json");

        let err = Package::load(base.path(), Path::new("broken-1.0.0")).unwrap_err();
        assert_eq!(err.code(), codes::PKG_MANIFEST_INVALID);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Package::from_manifest_str(
            r#"{"name": "  ", "version": "1.0.0"}"#,
            Path::new("noname"),
        )
        .unwrap_err();
        assert_eq!(err.code(), codes::PKG_MANIFEST_INVALID);
    }

    #[test]
    fn test_invalid_version_rejected() {
        let err = Package::from_manifest_str(
            r#"{"name": "nginx", "version": "latest"}"#,
            Path::new("nginx-latest"),
        )
        .unwrap_err();
        assert_eq!(err.code(), codes::PKG_VERSION_INVALID);
    }

    #[test]
    fn test_padded_name_rejected() {
        let err = Package::from_manifest_str(
            r#"{"name": "nginx ", "version": "1.0.0"}"#,
            Path::new("nginx-1.0.0"),
        )
        .unwrap_err();
        assert_eq!(err.code(), codes::PKG_MANIFEST_INVALID);
        assert!(err.message().contains("'nginx '"));
    }
}
