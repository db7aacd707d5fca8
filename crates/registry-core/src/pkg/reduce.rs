//! Reduce package versions to the newest one per name.

use super::manifest::Package;
use super::version::is_newer;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Keep only the newest version of each package.
///
/// A stored record is replaced only by a strictly newer candidate, so when
/// two records of the same name have equal versions the first one seen wins.
#[must_use]
pub fn newest_versions<I>(packages: I) -> HashMap<String, Package>
where
    I: IntoIterator<Item = Package>,
{
    let mut newest: HashMap<String, Package> = HashMap::new();

    for candidate in packages {
        match newest.entry(candidate.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if is_newer(&candidate.version, &slot.get().version) {
                    slot.insert(candidate);
                }
            }
        }
    }

    newest
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;
    use std::path::PathBuf;

    fn pkg(name: &str, version: &str, categories: &[&str]) -> Package {
        Package::new(name, Version::parse(version).unwrap(), categories.iter().copied())
    }

    #[test]
    fn test_empty_input() {
        assert!(newest_versions(Vec::new()).is_empty());
    }

    #[test]
    fn test_keeps_newest_regardless_of_order() {
        let inputs = [
            vec![pkg("a", "1.0.0", &[]), pkg("a", "2.0.0", &[]), pkg("a", "1.5.0", &[])],
            vec![pkg("a", "2.0.0", &[]), pkg("a", "1.0.0", &[]), pkg("a", "1.5.0", &[])],
            vec![pkg("a", "1.5.0", &[]), pkg("a", "1.0.0", &[]), pkg("a", "2.0.0", &[])],
        ];

        for input in inputs {
            let newest = newest_versions(input);
            assert_eq!(newest.len(), 1);
            assert_eq!(newest["a"].version, Version::new(2, 0, 0));
        }
    }

    #[test]
    fn test_one_record_per_name() {
        let newest = newest_versions(vec![
            pkg("a", "1.0.0", &["logs"]),
            pkg("b", "1.0.0", &["metrics"]),
            pkg("a", "2.0.0", &["logs", "metrics"]),
            pkg("c", "0.1.0", &[]),
        ]);

        assert_eq!(newest.len(), 3);
        assert_eq!(newest["a"].version, Version::new(2, 0, 0));
        assert_eq!(newest["b"].version, Version::new(1, 0, 0));
        assert_eq!(newest["c"].version, Version::new(0, 1, 0));
    }

    #[test]
    fn test_first_seen_wins_on_tie() {
        let mut first = pkg("a", "1.0.0", &["logs"]);
        first.path = PathBuf::from("first");
        let mut second = pkg("a", "1.0.0", &["metrics"]);
        second.path = PathBuf::from("second");

        // Other records around the tied pair must not change the winner.
        let orders = [
            vec![first.clone(), second.clone(), pkg("b", "1.0.0", &[])],
            vec![pkg("b", "1.0.0", &[]), first.clone(), second.clone()],
            vec![first.clone(), pkg("b", "1.0.0", &[]), second.clone()],
        ];

        for input in orders {
            let newest = newest_versions(input);
            assert_eq!(newest["a"].path, PathBuf::from("first"));
        }
    }

    #[test]
    fn test_build_metadata_is_a_tie() {
        let mut first = pkg("a", "1.0.0+build.1", &[]);
        first.path = PathBuf::from("first");
        let mut second = pkg("a", "1.0.0+build.2", &[]);
        second.path = PathBuf::from("second");

        let newest = newest_versions(vec![first, second]);
        assert_eq!(newest["a"].path, PathBuf::from("first"));
    }

    #[test]
    fn test_release_beats_prerelease() {
        let newest = newest_versions(vec![pkg("a", "1.0.0", &[]), pkg("a", "1.0.0-rc.1", &[])]);
        assert_eq!(newest["a"].version, Version::new(1, 0, 0));
    }
}
