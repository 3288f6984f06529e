//! Application state.
//!
//! Shared state for all request handlers.

use exbox_examples::{
    Branch, BranchResolver, ColorScheme, ExampleLinks, ExampleMeta, ExampleReference, LinkBuilder,
};

use crate::ServerConfig;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Version to branch mapping.
    pub(crate) branches: BranchResolver,
    /// Link builder for the configured repository.
    pub(crate) links: LinkBuilder,
    /// Library slug (route prefix).
    pub(crate) library: String,
    /// Site name appended to page titles.
    pub(crate) site_name: String,
    /// Enable verbose output.
    pub(crate) verbose: bool,
    /// Application version for cache invalidation.
    pub(crate) version: String,
}

/// Everything needed to render one example, in either HTML or JSON.
pub(crate) struct ResolvedExample {
    pub(crate) reference: ExampleReference,
    pub(crate) branch: Branch,
    pub(crate) scheme: ColorScheme,
    pub(crate) links: ExampleLinks,
    pub(crate) meta: ExampleMeta,
    pub(crate) heading: String,
}

impl AppState {
    /// Build state from server configuration.
    pub(crate) fn from_config(config: &ServerConfig) -> Self {
        Self {
            branches: BranchResolver::new(
                config.latest_version.clone(),
                config.latest_branch.clone(),
            )
            .with_overrides(config.branch_overrides.clone()),
            links: LinkBuilder::new(config.repo.clone())
                .with_legacy_branches(config.legacy_branches.clone()),
            library: config.library.clone(),
            site_name: config.site_name.clone(),
            verbose: config.verbose,
            version: config.version.clone(),
        }
    }

    /// Repository identifier.
    pub(crate) fn repo(&self) -> &str {
        self.links.repo()
    }

    /// Resolve an example for a documentation version and color scheme.
    pub(crate) fn resolve(
        &self,
        version: &str,
        reference: ExampleReference,
        scheme: ColorScheme,
    ) -> ResolvedExample {
        let branch = self.branches.resolve(version);
        let links = self.links.build(&reference, &branch, scheme);
        let meta = ExampleMeta::new(&reference, &self.library, &self.site_name);
        let heading = ExampleMeta::heading(&reference);

        if self.verbose {
            tracing::info!(
                version,
                branch = %branch,
                example_path = %links.example_path,
                theme = %scheme,
                "Resolved example"
            );
        } else {
            tracing::debug!(
                version,
                branch = %branch,
                example_path = %links.example_path,
                theme = %scheme,
                "Resolved example"
            );
        }

        ResolvedExample {
            reference,
            branch,
            scheme,
            links,
            meta,
            heading,
        }
    }
}
