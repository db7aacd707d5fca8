use crate::pkg::PkgError;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for category listing requests.
///
/// Both variants are fatal to the request that produced them. Failures to
/// load a single package are not represented here; they are collected as
/// [`crate::pkg::PkgLoadError`] and the request carries on without them.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Package source unavailable at {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: PkgError,
    },

    #[error("Failed to render category listing: {0}")]
    RenderFailure(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    pub fn source_unavailable(path: impl Into<PathBuf>, source: PkgError) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Whether the packages could not be enumerated at all.
    #[must_use]
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}
