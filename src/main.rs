use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, debug, info};
use std::path::Path;

mod cli;

use cli::Cli;
use nsq_report::config::Config;

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }

    // Log to file (truncate on each run) when requested
    if let Some(path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    info!("Starting nsq-report");
    let config = Config::load(cli.config.as_deref())?;
    debug!("Effective export config: {:?}", config.export);

    use cli::app::Commands;
    match cli.command {
        Commands::Export(export_args) => {
            cli::commands::handle_export_command(export_args, &config)?;
        }
        Commands::ExportFile(export_file_args) => {
            cli::commands::handle_export_file_command(export_file_args)?;
        }
        Commands::Summary(summary_args) => {
            cli::commands::handle_summary_command(summary_args)?;
        }
    }

    Ok(())
}
