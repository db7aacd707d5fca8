//! Package source error types.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Package source error codes.
pub mod codes {
    pub const PKG_SOURCE_UNAVAILABLE: &str = "PKG_SOURCE_UNAVAILABLE";
    pub const PKG_MANIFEST_NOT_FOUND: &str = "PKG_MANIFEST_NOT_FOUND";
    pub const PKG_MANIFEST_INVALID: &str = "PKG_MANIFEST_INVALID";
    pub const PKG_VERSION_INVALID: &str = "PKG_VERSION_INVALID";
}

/// Package source error.
#[derive(Debug, Clone)]
pub struct PkgError {
    code: &'static str,
    message: String,
}

impl PkgError {
    /// Create a new error with the given code and message.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a source unavailable error.
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        Self::new(codes::PKG_SOURCE_UNAVAILABLE, msg)
    }

    /// Create a manifest not found error.
    #[must_use]
    pub fn manifest_not_found(path: &Path) -> Self {
        Self::new(
            codes::PKG_MANIFEST_NOT_FOUND,
            format!("manifest not found: {}", path.display()),
        )
    }

    /// Create a manifest invalid error.
    pub fn manifest_invalid(msg: impl Into<String>) -> Self {
        Self::new(codes::PKG_MANIFEST_INVALID, msg)
    }

    /// Create a version invalid error.
    #[must_use]
    pub fn version_invalid(version: &str, reason: &str) -> Self {
        Self::new(
            codes::PKG_VERSION_INVALID,
            format!("Invalid version '{version}': {reason}"),
        )
    }
}

impl fmt::Display for PkgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for PkgError {}

impl From<io::Error> for PkgError {
    fn from(e: io::Error) -> Self {
        Self::new(codes::PKG_MANIFEST_INVALID, format!("Failed to read: {e}"))
    }
}

impl From<serde_json::Error> for PkgError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(codes::PKG_MANIFEST_INVALID, format!("Invalid JSON: {e}"))
    }
}

/// A package that could not be loaded and was left out of the listing.
#[derive(Debug, Clone)]
pub struct PkgLoadError {
    /// Path identifier of the package, relative to the packages root.
    pub path: PathBuf,
    /// Error code.
    pub code: &'static str,
    /// Error message.
    pub message: String,
}

impl PkgLoadError {
    /// Record a load failure for the given package path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, err: &PkgError) -> Self {
        Self {
            path: path.into(),
            code: err.code(),
            message: err.message().to_string(),
        }
    }
}

impl fmt::Display for PkgLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.code, self.message, self.path.display())
    }
}
