//! Manifest discovery and the per-file pipeline.
//!
//! The traversal driver owns all filesystem decisions: which files count as
//! manifests, where output lands, and which failures stop the run. Entry
//! failures never do; file failures stop only single-file runs.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::manifest::Manifest;
use crate::core::reference;
use crate::core::render;
use crate::core::resolve::{self, SecretBackend};
use crate::error::{Error, Result};

/// File extension required in single-file mode.
const MANIFEST_EXT: &str = "yml";

/// Outcome of processing one manifest file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileReport {
    /// Entries rendered into the output file.
    pub written: usize,
    /// Entries skipped due to entry-level failures.
    pub skipped: usize,
}

/// Outcome of a whole run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Manifest files that produced an output file.
    pub files: usize,
    /// Manifest files skipped due to file-level failures (directory mode).
    pub failed_files: usize,
    /// Sum of entries written across all files.
    pub written: usize,
    /// Sum of entries skipped across all files.
    pub skipped: usize,
}

/// Lazy stream of manifest candidates below `root`.
///
/// Yields regular files ending in `.yml` or `.yaml`; other files and all
/// directories are skipped without error. Entries the walker cannot read
/// are reported and skipped, and the walk continues.
pub fn candidates(root: &Path) -> impl Iterator<Item = PathBuf> {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                None
            }
        })
        .filter(|e| {
            e.file_type().is_file()
                && matches!(
                    e.path().extension().and_then(|ext| ext.to_str()),
                    Some("yml" | "yaml")
                )
        })
        .map(|e| e.into_path())
}

/// Output path for a manifest: its base name with the extension replaced by
/// `.env`, inside the configured output directory.
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    output_dir.join(format!("{}.env", stem.to_string_lossy()))
}

/// Process one manifest: load, resolve every entry in document order, and
/// write the rendered lines.
///
/// Entry-level failures (bad reference, backend failure, missing key) are
/// logged and skipped; the file is still produced with the remaining
/// entries. The output handle is flushed before returning.
///
/// # Errors
///
/// Returns `Error::Io` or `Error::ManifestParse` if the manifest cannot be
/// read, and `Error::OutputWrite` if the output file cannot be created or
/// written.
pub fn process_file(
    config: &Config,
    backend: &dyn SecretBackend,
    input: &Path,
) -> Result<FileReport> {
    let manifest = Manifest::load(input)?;
    let out_path = output_path(input, &config.output_dir);
    debug!(input = %input.display(), output = %out_path.display(), "processing manifest");

    let file = File::create(&out_path).map_err(|e| Error::OutputWrite {
        path: out_path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let mut report = FileReport::default();
    for (name, raw) in &manifest.secrets {
        let resolved = reference::parse(raw).and_then(|r| resolve::resolve(backend, &r));
        match resolved {
            Ok(value) => {
                writer
                    .write_all(render::line(name, &value).as_bytes())
                    .map_err(|e| Error::OutputWrite {
                        path: out_path.clone(),
                        source: e,
                    })?;
                report.written += 1;
            }
            Err(e) => {
                warn!(
                    file = %input.display(),
                    entry = %name,
                    raw = %raw,
                    "skipping entry: {e}"
                );
                report.skipped += 1;
            }
        }
    }

    writer.flush().map_err(|e| Error::OutputWrite {
        path: out_path.clone(),
        source: e,
    })?;

    info!(
        output = %out_path.display(),
        written = report.written,
        skipped = report.skipped,
        "created env file"
    );
    Ok(report)
}

/// Run the pipeline over `input`.
///
/// A directory is walked recursively and file-level failures only skip the
/// offending manifest. A single file must end in `.yml` and any failure is
/// fatal to the run.
pub fn run(config: &Config, backend: &dyn SecretBackend, input: &Path) -> Result<RunReport> {
    let metadata = std::fs::metadata(input)?;

    let mut report = RunReport::default();
    if metadata.is_dir() {
        for path in candidates(input) {
            match process_file(config, backend, &path) {
                Ok(file_report) => {
                    report.files += 1;
                    report.written += file_report.written;
                    report.skipped += file_report.skipped;
                }
                Err(e) => {
                    warn!(file = %path.display(), "skipping file: {e}");
                    report.failed_files += 1;
                }
            }
        }
    } else {
        if input.extension().and_then(|ext| ext.to_str()) != Some(MANIFEST_EXT) {
            return Err(Error::InvalidInputExtension(input.to_path_buf()));
        }
        let file_report = process_file(config, backend, input)?;
        report.files = 1;
        report.written = file_report.written;
        report.skipped = file_report.skipped;
    }

    Ok(report)
}
