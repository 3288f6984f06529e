//! exbox CLI - documentation example pages.
//!
//! Provides commands for:
//! - `serve`: Start the example page server
//! - `links`: Print the source and sandbox links for an example

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{LinksArgs, ServeArgs};
use error::CliError;
use output::Output;

/// Application version from Cargo.toml.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// exbox - documentation example pages.
#[derive(Parser)]
#[command(name = "exbox", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the example page server.
    Serve(ServeArgs),
    /// Print the source and sandbox links for an example path.
    Links(LinksArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for serve command
    let verbose = matches!(&cli.command, Commands::Serve(args) if args.verbose);

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Serve(args) => run_async(args),
        Commands::Links(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Run the server on a multi-threaded tokio runtime.
fn run_async(args: ServeArgs) -> Result<(), CliError> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(args.execute(VERSION))
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_links_command() {
        let cli = Cli::try_parse_from([
            "exbox", "links", "react/simple", "--version", "v4", "--theme", "light",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Links(_)));
    }

    #[test]
    fn test_parse_serve_verbose() {
        let cli = Cli::try_parse_from(["exbox", "serve", "--verbose", "--port", "9000"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve(args) if args.verbose));
    }
}
