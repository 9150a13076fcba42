//! vault2env - Render Vault-backed YAML secret manifests into .env files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── commands      # Run dispatch (single file vs. directory)
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Run configuration threaded through the pipeline
//!     ├── reference     # vault:// reference parsing
//!     ├── manifest      # YAML manifest loading
//!     ├── resolve       # SecretBackend trait + entry resolution
//!     ├── render        # .env line rendering and quoting
//!     ├── vault         # Blocking Vault KV v2 client
//!     └── walk          # Manifest discovery and per-file pipeline
//! ```
//!
//! # Features
//!
//! - Declarative YAML manifests under a single `secrets` key
//! - `vault://mount/path#key` references resolved against Vault KV v2
//! - Literal values passed through untouched
//! - Deterministic, document-ordered `.env` output
//! - Recursive directory mode that skips broken files instead of aborting

pub mod cli;
pub mod core;
pub mod error;
