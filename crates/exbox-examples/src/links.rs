//! Outbound link construction.
//!
//! All links point into the `examples/` directory of the configured
//! repository at the resolved branch:
//!
//! ```text
//! https://github.com/{repo}/tree/{branch}/examples/{path}
//! https://stackblitz.com/github/{repo}/tree/{branch}/examples/{path}?{search}embed=1&theme={theme}
//! https://codesandbox.io/s/github/{repo}/tree/{branch}/examples/{path}?{search}embed=1&theme={theme}
//! ```

use crate::branch::Branch;
use crate::reference::ExampleReference;
use crate::theme::ColorScheme;

const GITHUB_BASE: &str = "https://github.com";
const STACKBLITZ_BASE: &str = "https://stackblitz.com/github";
const CODESANDBOX_BASE: &str = "https://codesandbox.io/s/github";

/// Branch whose examples are not grouped by framework.
const DEFAULT_LEGACY_BRANCH: &str = "v3";

/// Links rendered on an example page.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct ExampleLinks {
    /// Path of the example below `examples/`.
    pub example_path: String,
    /// Source tree browser URL.
    pub github: String,
    /// StackBlitz embed URL (also used as the iframe source).
    pub stackblitz: String,
    /// CodeSandbox embed URL.
    pub codesandbox: String,
}

/// Builds [`ExampleLinks`] for a repository.
#[derive(Clone, Debug)]
pub struct LinkBuilder {
    repo: String,
    legacy_branches: Vec<String>,
}

impl LinkBuilder {
    /// Create a builder for `repo` (`owner/name`) with the default legacy
    /// branch set.
    #[must_use]
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            legacy_branches: vec![DEFAULT_LEGACY_BRANCH.to_owned()],
        }
    }

    /// Replace the set of legacy branches.
    #[must_use]
    pub fn with_legacy_branches(mut self, legacy_branches: Vec<String>) -> Self {
        self.legacy_branches = legacy_branches;
        self
    }

    /// Repository identifier.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Whether `branch` stores examples directly under `examples/{name}`.
    #[must_use]
    pub fn is_legacy(&self, branch: &Branch) -> bool {
        self.legacy_branches.iter().any(|b| b == branch.as_str())
    }

    /// Path of the example below the `examples/` directory.
    ///
    /// A missing kind joins as the empty string.
    #[must_use]
    pub fn example_path(&self, reference: &ExampleReference, branch: &Branch) -> String {
        if self.is_legacy(branch) {
            reference.name.clone()
        } else {
            format!("{}/{}", reference.kind_str(), reference.name)
        }
    }

    /// Build all links for an example.
    #[must_use]
    pub fn build(
        &self,
        reference: &ExampleReference,
        branch: &Branch,
        scheme: ColorScheme,
    ) -> ExampleLinks {
        let example_path = self.example_path(reference, branch);
        let tree = format!("{}/tree/{branch}/examples/{example_path}", self.repo);
        let embed = format!("?{}embed=1&theme={scheme}", reference.search);

        ExampleLinks {
            github: format!("{GITHUB_BASE}/{tree}"),
            stackblitz: format!("{STACKBLITZ_BASE}/{tree}{embed}"),
            codesandbox: format!("{CODESANDBOX_BASE}/{tree}{embed}"),
            example_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn builder() -> LinkBuilder {
        LinkBuilder::new("tanstack/query")
    }

    #[test]
    fn test_build_links() {
        let reference = ExampleReference::parse("react/simple");
        let links = builder().build(&reference, &Branch::new("main"), ColorScheme::Dark);

        assert_eq!(
            links,
            ExampleLinks {
                example_path: "react/simple".to_owned(),
                github: "https://github.com/tanstack/query/tree/main/examples/react/simple"
                    .to_owned(),
                stackblitz: "https://stackblitz.com/github/tanstack/query/tree/main/examples/react/simple?embed=1&theme=dark"
                    .to_owned(),
                codesandbox: "https://codesandbox.io/s/github/tanstack/query/tree/main/examples/react/simple?embed=1&theme=dark"
                    .to_owned(),
            }
        );
    }

    #[test]
    fn test_legacy_branch_omits_kind() {
        let reference = ExampleReference::parse("react/basic");
        let links = builder().build(&reference, &Branch::new("v3"), ColorScheme::Dark);

        assert_eq!(links.example_path, "basic");
        assert_eq!(
            links.github,
            "https://github.com/tanstack/query/tree/v3/examples/basic"
        );
    }

    #[test]
    fn test_custom_legacy_branches() {
        let builder = builder().with_legacy_branches(vec!["v1".to_owned(), "v2".to_owned()]);
        let reference = ExampleReference::parse("react/basic");

        assert_eq!(builder.example_path(&reference, &Branch::new("v2")), "basic");
        assert_eq!(
            builder.example_path(&reference, &Branch::new("v3")),
            "react/basic"
        );
    }

    #[test]
    fn test_search_is_reattached_before_embed() {
        let reference = ExampleReference::parse("vue/basic?file=src/App.vue&");
        let links = builder().build(&reference, &Branch::new("main"), ColorScheme::Light);

        assert!(
            links
                .stackblitz
                .ends_with("/examples/vue/basic?file=src/App.vue&embed=1&theme=light")
        );
        assert!(
            links
                .codesandbox
                .ends_with("/examples/vue/basic?file=src/App.vue&embed=1&theme=light")
        );
        // GitHub link never carries the search string
        assert!(!links.github.contains('?'));
    }

    #[test]
    fn test_sandbox_links_always_end_with_theme() {
        let reference = ExampleReference::parse("solid/todo?x=1");
        for scheme in [ColorScheme::Dark, ColorScheme::Light] {
            let links = builder().build(&reference, &Branch::new("main"), scheme);
            let suffix = format!("embed=1&theme={scheme}");
            assert!(links.stackblitz.ends_with(&suffix));
            assert!(links.codesandbox.ends_with(&suffix));
        }
    }

    #[test]
    fn test_missing_kind_joins_as_empty() {
        let reference = ExampleReference::parse("simple");
        let links = builder().build(&reference, &Branch::new("main"), ColorScheme::Dark);

        assert_eq!(links.example_path, "/simple");
        assert_eq!(
            links.github,
            "https://github.com/tanstack/query/tree/main/examples//simple"
        );
    }

    #[test]
    fn test_is_legacy() {
        assert!(builder().is_legacy(&Branch::new("v3")));
        assert!(!builder().is_legacy(&Branch::new("main")));
    }
}
