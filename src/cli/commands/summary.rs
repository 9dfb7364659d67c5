use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use nsq_report::nsq::Document;
use nsq_report::report::task_summary;

#[derive(Args)]
pub struct SummaryCommands {
    /// NSQ file to inspect
    #[arg(help = "NSQ file to inspect")]
    pub file: PathBuf,
}

pub fn handle_summary_command(args: SummaryCommands) -> Result<()> {
    let document = Document::load(&args.file)
        .map_err(|e| e.in_file(&args.file))
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    print!("{}", task_summary(&document));
    Ok(())
}
