#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

pub mod category;
pub mod config;
pub mod error;
pub mod listing;
pub mod pkg;
pub mod version;

pub use category::{render, summarize, CategorySummary, CategoryTitles};
pub use config::Config;
pub use error::Error;
pub use listing::{build_category_listing, load_packages, CategoryListing, LoadedPackages};
pub use pkg::{newest_versions, package_paths, Package, PkgError, PkgLoadError};
pub use version::VERSION;
