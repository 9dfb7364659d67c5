use super::commands::{ExportCommands, ExportFileCommands, SummaryCommands};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nsq-report")]
#[command(about = "Extract recipient and filter reports from NPrinting NSQ files")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true, help = "Config file (defaults to <config dir>/nsq-report/config.toml)")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true, help = "Write logs to this file (truncated on each run)")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert every NSQ file in a directory into a CSV user report
    Export(ExportCommands),
    /// Convert a single NSQ file into a CSV user report
    ExportFile(ExportFileCommands),
    /// Print the task summary of a single NSQ file
    Summary(SummaryCommands),
}
