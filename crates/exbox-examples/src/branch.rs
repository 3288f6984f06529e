//! Documentation version to repository branch mapping.

use std::collections::BTreeMap;
use std::fmt;

/// Alias that always points at the latest documentation version.
const LATEST_ALIAS: &str = "latest";

/// A named snapshot of the source repository.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Branch(String);

impl Branch {
    /// Create a branch from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Branch name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves documentation versions to branches.
///
/// `latest`, an empty version and the configured latest version all map to
/// the latest branch. Explicit overrides are consulted next; any other version
/// is used verbatim as the branch name.
#[derive(Clone, Debug)]
pub struct BranchResolver {
    latest_version: String,
    latest_branch: String,
    overrides: BTreeMap<String, String>,
}

impl BranchResolver {
    /// Create a resolver with no overrides.
    #[must_use]
    pub fn new(latest_version: impl Into<String>, latest_branch: impl Into<String>) -> Self {
        Self {
            latest_version: latest_version.into(),
            latest_branch: latest_branch.into(),
            overrides: BTreeMap::new(),
        }
    }

    /// Add explicit version to branch overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve a version to its branch.
    #[must_use]
    pub fn resolve(&self, version: &str) -> Branch {
        if version.is_empty() || version == LATEST_ALIAS || version == self.latest_version {
            return Branch::new(self.latest_branch.clone());
        }
        let name = self
            .overrides
            .get(version)
            .map_or(version, String::as_str);
        Branch::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> BranchResolver {
        BranchResolver::new("v5", "main")
    }

    #[test]
    fn test_latest_alias_resolves_to_latest_branch() {
        assert_eq!(resolver().resolve("latest").as_str(), "main");
    }

    #[test]
    fn test_latest_version_resolves_to_latest_branch() {
        assert_eq!(resolver().resolve("v5").as_str(), "main");
    }

    #[test]
    fn test_empty_version_resolves_to_latest_branch() {
        assert_eq!(resolver().resolve("").as_str(), "main");
    }

    #[test]
    fn test_other_version_used_verbatim() {
        assert_eq!(resolver().resolve("v3").as_str(), "v3");
        assert_eq!(resolver().resolve("v4").as_str(), "v4");
    }

    #[test]
    fn test_overrides_take_precedence_over_verbatim() {
        let overrides = BTreeMap::from([("beta".to_owned(), "next".to_owned())]);
        let resolver = resolver().with_overrides(overrides);

        assert_eq!(resolver.resolve("beta").as_str(), "next");
        assert_eq!(resolver.resolve("v4").as_str(), "v4");
    }

    #[test]
    fn test_overrides_do_not_shadow_latest() {
        let overrides = BTreeMap::from([("latest".to_owned(), "stale".to_owned())]);
        let resolver = resolver().with_overrides(overrides);

        assert_eq!(resolver.resolve("latest").as_str(), "main");
    }

    #[test]
    fn test_branch_display() {
        assert_eq!(Branch::new("main").to_string(), "main");
    }
}
