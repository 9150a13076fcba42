//! Command implementation.
//!
//! Assembles the run configuration and backend client, then hands off to
//! the traversal driver.

use crate::cli::{output, Cli};
use crate::core::config::Config;
use crate::core::vault::VaultClient;
use crate::core::walk;
use crate::error::Result;

/// Execute a run described by the parsed CLI arguments.
///
/// # Errors
///
/// Returns an error if the backend client cannot be built, or if the
/// path-level operation fails (single-file mode is strict; directory mode
/// only fails when the root itself is inaccessible).
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::new(cli.output, cli.vault);
    let client = VaultClient::new(&config)?;

    let report = walk::run(&config, &client, &cli.input)?;

    if report.files == 0 {
        output::warn("no manifest files found");
    } else {
        output::success(&format!(
            "wrote {} env file(s), {} entries",
            report.files, report.written
        ));
    }
    if report.skipped > 0 {
        output::warn(&format!("{} entries skipped", report.skipped));
    }
    if report.failed_files > 0 {
        output::warn(&format!("{} manifest(s) skipped", report.failed_files));
    }

    Ok(())
}
