//! Run configuration.
//!
//! One `Config` is built per invocation and threaded explicitly into each
//! pipeline call, so tests can drive multiple independent runs in one
//! process without touching globals.

use std::path::PathBuf;

/// Default Vault API base URL.
pub const DEFAULT_VAULT_ADDR: &str = "http://127.0.0.1:8200";

/// Environment variable holding the Vault access token.
pub const VAULT_TOKEN_ENV: &str = "VAULT_TOKEN";

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory where generated `.env` files are written.
    pub output_dir: PathBuf,
    /// Vault server base address.
    pub vault_addr: String,
}

impl Config {
    pub fn new(output_dir: impl Into<PathBuf>, vault_addr: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            vault_addr: vault_addr.into(),
        }
    }
}
