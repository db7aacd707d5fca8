//! Category aggregation over the newest package versions.

use crate::error::Error;
use crate::pkg::Package;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Display titles that differ from the category id.
pub const BUILTIN_TITLES: &[(&str, &str)] = &[("logs", "Logs"), ("metrics", "Metrics")];

/// One entry of the category listing.
///
/// Field order is part of the JSON contract: `id`, `title`, `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Number of packages declaring the category.
    pub count: usize,
}

/// Immutable lookup table from category id to display title.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTitles {
    titles: HashMap<String, String>,
}

impl CategoryTitles {
    /// Table with no overrides; every title equals its id.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in overrides.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_TITLES
            .iter()
            .fold(Self::empty(), |titles, (id, title)| titles.with_title(*id, *title))
    }

    /// Return a table with an added or replaced override.
    #[must_use]
    pub fn with_title(mut self, id: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(id.into(), title.into());
        self
    }

    /// Display title for a category id.
    #[must_use]
    pub fn title_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.titles.get(id).map_or(id, String::as_str)
    }
}

/// Count category membership across packages, sorted by category id.
///
/// Each package contributes at most once to a category. Ids are ordered by
/// byte value, independent of the map's iteration order.
#[must_use]
pub fn summarize(
    packages: &HashMap<String, Package>,
    titles: &CategoryTitles,
) -> Vec<CategorySummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for package in packages.values() {
        for id in &package.categories {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(id, count)| CategorySummary {
            id: id.to_string(),
            title: titles.title_for(id).to_string(),
            count,
        })
        .collect()
}

/// Render summaries as a JSON array indented with two spaces.
///
/// # Errors
/// Returns [`Error::RenderFailure`] if serialization fails.
pub fn render(summaries: &[CategorySummary]) -> Result<String, Error> {
    Ok(serde_json::to_string_pretty(summaries)?)
}
