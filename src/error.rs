use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid vault reference `{reference}`: {reason}")]
    InvalidReferenceSyntax {
        reference: String,
        reason: &'static str,
    },

    #[error("vault read failed for {mount}/{path}: {reason}")]
    BackendUnavailable {
        mount: String,
        path: String,
        reason: String,
    },

    #[error("key `{key}` not found in secret {mount}/{path}")]
    KeyNotFound {
        mount: String,
        path: String,
        key: String,
    },

    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] serde_yaml::Error),

    #[error("input file must have .yml extension: {0}")]
    InvalidInputExtension(PathBuf),

    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
