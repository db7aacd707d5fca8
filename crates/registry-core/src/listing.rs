//! Category listing pipeline: discover, load, reduce, aggregate, render.
//!
//! Every call rebuilds the listing from the packages directory. Nothing is
//! cached between calls.

use crate::category::{render, summarize, CategorySummary, CategoryTitles};
use crate::error::Error;
use crate::pkg::{newest_versions, package_paths, Package, PkgLoadError};
use std::path::Path;

/// Packages loaded from a packages directory.
#[derive(Debug, Clone, Default)]
pub struct LoadedPackages {
    /// Successfully loaded packages, in discovery order.
    pub packages: Vec<Package>,
    /// Packages that failed to load and were skipped.
    pub errors: Vec<PkgLoadError>,
}

/// A computed category listing.
#[derive(Debug, Clone)]
pub struct CategoryListing {
    /// Category summaries sorted by id.
    pub categories: Vec<CategorySummary>,
    /// Number of distinct packages after keeping the newest version of each.
    pub package_count: usize,
    /// Packages skipped because they failed to load.
    pub skipped: Vec<PkgLoadError>,
}

impl CategoryListing {
    /// Render the categories as the JSON document served to clients.
    ///
    /// # Errors
    /// Returns [`Error::RenderFailure`] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        render(&self.categories)
    }
}

/// Load every package under `base`.
///
/// Packages whose manifest cannot be loaded are recorded in
/// [`LoadedPackages::errors`] instead of failing the whole load.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if the directory cannot be listed.
pub fn load_packages(base: &Path) -> Result<LoadedPackages, Error> {
    let paths = package_paths(base).map_err(|e| Error::source_unavailable(base, e))?;

    let mut loaded = LoadedPackages::default();
    for path in paths {
        match Package::load(base, &path) {
            Ok(package) => loaded.packages.push(package),
            Err(e) => loaded.errors.push(PkgLoadError::new(path, &e)),
        }
    }

    Ok(loaded)
}

/// Build the category listing for the packages under `base`.
///
/// # Errors
/// Returns [`Error::SourceUnavailable`] if the directory cannot be listed.
pub fn build_category_listing(
    base: &Path,
    titles: &CategoryTitles,
) -> Result<CategoryListing, Error> {
    let LoadedPackages { packages, errors } = load_packages(base)?;

    let newest = newest_versions(packages);
    let categories = summarize(&newest, titles);

    Ok(CategoryListing {
        categories,
        package_count: newest.len(),
        skipped: errors,
    })
}
