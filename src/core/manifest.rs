//! YAML manifest loading.
//!
//! A manifest is a single YAML document with a top-level `secrets` mapping
//! of output variable names to raw string values. Values are not inspected
//! here; `vault://` syntax is validated later by the reference parser.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;

/// One input document describing named secrets to resolve.
///
/// `IndexMap` keeps entries in document order, so rendered output is stable
/// across runs.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub secrets: IndexMap<String, String>,
}

impl Manifest {
    /// Parse a manifest from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `Error::ManifestParse` if the document is not valid YAML or
    /// does not match the expected `secrets: {name: value}` shape.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Read and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}
