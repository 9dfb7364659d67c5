//! Directory sweep: one CSV report per NSQ file
//!
//! Files are processed one at a time in directory-listing order. Each file
//! is fully loaded and projected before its report is written.

use log::{debug, info, warn};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ErrorPolicy;
use crate::error::{NsqError, Result};
use crate::nsq::Document;
use crate::report::{ReportProjector, write_report_file};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    pub source_dir: PathBuf,
    pub destination_dir: PathBuf,
    /// File extension to pick up, without the leading dot
    pub extension: String,
    pub on_error: ErrorPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub source: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ExportSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedFile>,
}

/// Convert every matching file in `options.source_dir`
pub fn export_directory(options: &ExportOptions) -> Result<ExportSummary> {
    fs::create_dir_all(&options.destination_dir)
        .map_err(|e| NsqError::io(&options.destination_dir, e))?;
    let entries =
        fs::read_dir(&options.source_dir).map_err(|e| NsqError::io(&options.source_dir, e))?;

    let mut summary = ExportSummary::default();
    for entry in entries {
        let source = entry
            .map_err(|e| NsqError::io(&options.source_dir, e))?
            .path();
        if !source.is_file() || !has_extension(&source, &options.extension) {
            debug!("Ignoring {}", source.display());
            continue;
        }

        let file_name = source.file_name().unwrap_or_default().to_string_lossy();
        info!("Pulling recipients from {}...", file_name);
        let output = output_path(&options.destination_dir, &source);

        match export_file(&source, &output) {
            Ok(()) => summary.written.push(output),
            Err(err) => match options.on_error {
                ErrorPolicy::Abort => return Err(err),
                ErrorPolicy::Skip => {
                    warn!("Skipping {}: {}", file_name, err);
                    summary.skipped.push(SkippedFile {
                        source,
                        reason: err.to_string(),
                    });
                }
            },
        }
    }

    info!(
        "Export finished: {} written, {} skipped",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

/// Load one NSQ file and write its user report to `output`
pub fn export_file(source: &Path, output: &Path) -> Result<()> {
    let document = Document::load(source).map_err(|e| e.in_file(source))?;
    let rows = ReportProjector::new(&document)
        .rows()
        .map_err(|e| e.in_file(source))?;
    write_report_file(output, &rows)
}

/// `<destination>/<source stem>.csv`
pub fn output_path(destination_dir: &Path, source: &Path) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(".csv");
    destination_dir.join(name)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension() == Some(OsStr::new(extension))
}
