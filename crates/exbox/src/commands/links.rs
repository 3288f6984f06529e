//! `exbox links` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use exbox_config::Config;
use exbox_examples::{
    BranchResolver, ColorScheme, ExampleLinks, ExampleMeta, ExampleReference, LinkBuilder,
};

use crate::error::CliError;
use crate::output::Output;

/// Color scheme choices for the sandbox links.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub(crate) enum ThemeArg {
    #[default]
    Dark,
    Light,
}

impl From<ThemeArg> for ColorScheme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Self::Dark,
            ThemeArg::Light => Self::Light,
        }
    }
}

/// Arguments for the links command.
#[derive(Args)]
pub(crate) struct LinksArgs {
    /// Example path, e.g. `react/simple` or `react/simple?file=index.tsx&`.
    path: String,

    /// Documentation version.
    #[arg(long, default_value = "latest")]
    version: String,

    /// Color scheme for the sandbox embeds.
    #[arg(long, value_enum, default_value_t)]
    theme: ThemeArg,

    /// Path to configuration file (default: auto-discover exbox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Resolved output of the links command.
struct Resolved {
    heading: String,
    branch: String,
    links: ExampleLinks,
}

impl LinksArgs {
    /// Execute the links command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let resolved = self.resolve(&config);
        tracing::debug!(
            path = %self.path,
            version = %self.version,
            branch = %resolved.branch,
            "Resolved example links"
        );

        output.highlight(&resolved.heading);
        output.field("Branch", &resolved.branch);
        output.field("Github", &resolved.links.github);
        output.field("StackBlitz", &resolved.links.stackblitz);
        output.field("CodeSandbox", &resolved.links.codesandbox);

        Ok(())
    }

    /// Resolve the example against the loaded configuration.
    fn resolve(&self, config: &Config) -> Resolved {
        let branches = BranchResolver::new(
            config.versions.latest.clone(),
            config.versions.latest_branch.clone(),
        )
        .with_overrides(config.versions.branches.clone());
        let builder = LinkBuilder::new(config.project.repo.clone())
            .with_legacy_branches(config.versions.legacy_branches.clone());

        let reference = ExampleReference::parse(&self.path);
        let branch = branches.resolve(&self.version);
        let links = builder.build(&reference, &branch, self.theme.into());

        Resolved {
            heading: ExampleMeta::heading(&reference),
            branch: branch.to_string(),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(path: &str, version: &str, theme: ThemeArg) -> LinksArgs {
        LinksArgs {
            path: path.to_owned(),
            version: version.to_owned(),
            theme,
            config: None,
        }
    }

    #[test]
    fn test_resolve_latest() {
        let resolved = args("react/simple-example", "latest", ThemeArg::Dark).resolve(&Config::default());

        assert_eq!(resolved.heading, "React Example: Simple Example");
        assert_eq!(resolved.branch, "main");
        assert_eq!(
            resolved.links.github,
            "https://github.com/tanstack/query/tree/main/examples/react/simple-example"
        );
    }

    #[test]
    fn test_resolve_legacy_with_light_theme() {
        let resolved = args("react/basic", "v3", ThemeArg::Light).resolve(&Config::default());

        assert_eq!(resolved.branch, "v3");
        assert_eq!(
            resolved.links.stackblitz,
            "https://stackblitz.com/github/tanstack/query/tree/v3/examples/basic?embed=1&theme=light"
        );
    }
}
