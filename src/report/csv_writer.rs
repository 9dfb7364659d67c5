//! CSV output for report rows

use csv::{Terminator, WriterBuilder};
use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::projector::{HEADER, ReportRow};
use crate::error::{NsqError, Result};

/// Write the header and one record per row. Fields are quoted only when needed
/// and records end in CRLF.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> csv::Result<()> {
    let mut csv = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for row in rows {
        csv.write_record(row.as_record())?;
    }
    csv.flush()?;
    Ok(())
}

/// Write the report to `path`. A failed write leaves no file behind.
pub fn write_report_file(path: &Path, rows: &[ReportRow]) -> Result<()> {
    write_file_with(path, |writer| write_report(writer, rows))?;
    debug!("Wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

fn write_file_with<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> csv::Result<()>,
{
    let file = File::create(path).map_err(|e| NsqError::io(path, e))?;
    write(BufWriter::new(file)).map_err(|source| {
        if let Err(e) = fs::remove_file(path) {
            warn!("Could not remove partial report {}: {}", path.display(), e);
        }
        NsqError::Csv {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Render the report as an in-memory CSV string
pub fn render_report(rows: &[ReportRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_report(&mut buffer, rows).map_err(|source| NsqError::Csv {
        path: "<memory>".into(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
