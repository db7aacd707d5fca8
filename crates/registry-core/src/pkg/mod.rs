//! Package source functionality.
//!
//! Provides utilities for:
//! - Discovering package directories under a packages root
//! - Loading a package record from its `manifest.json`
//! - Comparing package versions using semver precedence
//! - Reducing many versions of a package down to the newest one

pub mod discover;
pub mod error;
pub mod manifest;
pub mod reduce;
pub mod version;

pub use discover::package_paths;
pub use error::{codes, PkgError, PkgLoadError};
pub use manifest::{Package, MANIFEST_FILE};
pub use reduce::newest_versions;
pub use version::{compare_versions, is_newer, parse_version};
