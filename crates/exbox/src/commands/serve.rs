//! `exbox serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use exbox_config::{CliSettings, Config};
use exbox_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover exbox.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Repository identifier, `owner/name` (overrides config).
    #[arg(long, env = "EXBOX_REPO")]
    repo: Option<String>,

    /// Enable verbose output (log every resolved example).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
            repo: self.repo,
        };

        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::info!(
            config = ?config.config_path,
            repo = %config.project.repo,
            library = %config.project.library,
            "Configuration loaded"
        );

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Repository: {}", config.project.repo));
        output.info(&format!(
            "Examples: {}",
            example_url_hint(&config.server.host, config.server.port, &config.project.library)
        ));
        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        } else {
            output.info("Config: defaults (no exbox.toml found)");
        }

        let server_config = server_config_from_config(&config, version.to_owned(), self.verbose);
        run_server(server_config).await?;

        Ok(())
    }
}

/// URL pattern of example pages served under `library`.
fn example_url_hint(host: &str, port: u16, library: &str) -> String {
    format!("http://{host}:{port}/{library}/latest/docs/<framework>/examples/<kind>/<name>")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_example_url_hint_matches_page_route() {
        let hint = example_url_hint("127.0.0.1", 7979, "query");

        assert_eq!(
            hint,
            "http://127.0.0.1:7979/query/latest/docs/<framework>/examples/<kind>/<name>"
        );
        // {library}/{version}/docs/{framework}/examples/{kind}/{name}
        let path = hint.trim_start_matches("http://127.0.0.1:7979/");
        let segments: Vec<&str> = path.split('/').collect();
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[2], "docs");
        assert_eq!(segments[4], "examples");
    }
}
