//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::config::DEFAULT_VAULT_ADDR;

pub use commands::execute;

/// vault2env - Render Vault-backed YAML secret manifests into .env files.
#[derive(Parser)]
#[command(
    name = "vault2env",
    about = "Render Vault-backed YAML secret manifests into .env files",
    version
)]
pub struct Cli {
    /// Manifest file or directory to scan recursively
    #[arg(default_value = ".")]
    pub input: PathBuf,

    /// Output directory for generated .env files
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Vault server address
    #[arg(long, env = "VAULT_ADDR", default_value = DEFAULT_VAULT_ADDR)]
    pub vault: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
