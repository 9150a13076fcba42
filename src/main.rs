//! vault2env - Render Vault-backed YAML secret manifests into .env files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vault2env::cli::output;
use vault2env::cli::{execute, Cli};
use vault2env::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("VAULT2ENV_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vault2env=debug")
        } else {
            EnvFilter::new("vault2env=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::InvalidInputExtension(_) => Some("single-file input must be a .yml manifest"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
