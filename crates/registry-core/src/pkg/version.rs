//! Version comparison using semver.
//!
//! Versions are ordered by semver 2.0 precedence: `major.minor.patch`
//! numerically, a pre-release sorts below its release (`1.0.0-rc.1 < 1.0.0`),
//! pre-release identifiers compare field by field, and build metadata is
//! ignored. Two versions that differ only in build metadata are equal.

use super::error::PkgError;
use semver::Version;
use std::cmp::Ordering;

/// Parse a package version string.
///
/// Surrounding whitespace and a single leading `v` are tolerated.
///
/// # Errors
/// Returns `PKG_VERSION_INVALID` if the string is not a semver version.
pub fn parse_version(raw: &str) -> Result<Version, PkgError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).map_err(|e| PkgError::version_invalid(raw, &e.to_string()))
}

/// Total order over package versions by semver precedence.
#[must_use]
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

/// Whether `candidate` is strictly newer than `current`.
#[must_use]
pub fn is_newer(candidate: &Version, current: &Version) -> bool {
    compare_versions(candidate, current) == Ordering::Greater
}
