//! `registry categories` command implementation.
//!
//! Computes the category listing once and prints the same JSON document the
//! HTTP endpoint serves.

use miette::{IntoDiagnostic, Result};
use registry_core::{build_category_listing, CategoryListing, CategoryTitles, Config};
use tracing::{debug, warn};

/// Run the categories command.
pub fn run(config: &Config) -> Result<()> {
    let listing =
        build_category_listing(&config.packages_dir, &CategoryTitles::builtin()).into_diagnostic()?;
    log_listing(&listing);

    let json = listing.to_json().into_diagnostic()?;
    println!("{json}");
    Ok(())
}

/// Log skipped packages and listing totals.
pub fn log_listing(listing: &CategoryListing) {
    for skipped in &listing.skipped {
        warn!(
            path = %skipped.path.display(),
            code = skipped.code,
            "skipping package: {}",
            skipped.message
        );
    }

    debug!(
        packages = listing.package_count,
        categories = listing.categories.len(),
        skipped = listing.skipped.len(),
        "category listing built"
    );
}
