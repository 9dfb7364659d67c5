//! Export command handlers

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use log::info;
use std::io;
use std::path::PathBuf;

use nsq_report::config::{Config, ErrorPolicy, ExportOverrides};
use nsq_report::export::export_directory;
use nsq_report::nsq::Document;
use nsq_report::report::{ReportProjector, write_report, write_report_file};

#[derive(Args)]
pub struct ExportCommands {
    /// Directory containing NSQ files
    #[arg(short, long, help = "Directory containing NSQ files")]
    pub source: Option<PathBuf>,

    /// Directory the CSV reports are written to
    #[arg(short, long, help = "Directory the CSV reports are written to")]
    pub destination: Option<PathBuf>,

    /// Extension of the files to convert
    #[arg(long, help = "Extension of the files to convert (default: nsq)")]
    pub extension: Option<String>,

    /// What to do when a file cannot be converted
    #[arg(long, value_enum, help = "What to do when a file cannot be converted (default: abort)")]
    pub on_error: Option<ErrorPolicy>,
}

#[derive(Args)]
pub struct ExportFileCommands {
    /// NSQ file to convert
    #[arg(help = "NSQ file to convert")]
    pub file: PathBuf,

    /// Save the report to a file instead of stdout
    #[arg(short, long, help = "Save the report to a file instead of stdout")]
    pub output: Option<PathBuf>,
}

/// Handle the directory export command
pub fn handle_export_command(args: ExportCommands, config: &Config) -> Result<()> {
    let options = config.export.resolve(ExportOverrides {
        source_dir: args.source,
        destination_dir: args.destination,
        extension: args.extension,
        on_error: args.on_error,
    })?;
    info!(
        "Exporting *.{} from {:?} to {:?} (on error: {:?})",
        options.extension, options.source_dir, options.destination_dir, options.on_error
    );

    let summary = export_directory(&options).with_context(|| {
        format!("Export of {} failed", options.source_dir.display())
    })?;

    for path in &summary.written {
        println!("{} {}", "Wrote".bright_green(), path.display());
    }
    for skipped in &summary.skipped {
        println!(
            "{} {}: {}",
            "Skipped".bright_yellow(),
            skipped.source.display(),
            skipped.reason.dimmed()
        );
    }
    println!(
        "{} report(s) written, {} file(s) skipped",
        summary.written.len().to_string().bold(),
        summary.skipped.len().to_string().bold()
    );
    Ok(())
}

/// Handle the single-file export command
pub fn handle_export_file_command(args: ExportFileCommands) -> Result<()> {
    let document = Document::load(&args.file)
        .map_err(|e| e.in_file(&args.file))
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let rows = ReportProjector::new(&document)
        .rows()
        .map_err(|e| e.in_file(&args.file))
        .with_context(|| format!("Failed to build report for {}", args.file.display()))?;

    match args.output {
        Some(output_path) => {
            write_report_file(&output_path, &rows)
                .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
            println!(
                "Report saved to: {}",
                output_path.display().to_string().bright_green()
            );
        }
        None => {
            write_report(io::stdout().lock(), &rows).context("Failed to write report to stdout")?;
        }
    }
    Ok(())
}
