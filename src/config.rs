use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportOptions;

pub const DEFAULT_EXTENSION: &str = "nsq";

/// What a directory sweep does when one file fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the sweep at the first failing file
    #[default]
    Abort,
    /// Log the failure, skip the file and continue
    Skip,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    pub source_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub on_error: Option<ErrorPolicy>,
}

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct ExportOverrides {
    pub source_dir: Option<PathBuf>,
    pub destination_dir: Option<PathBuf>,
    pub extension: Option<String>,
    pub on_error: Option<ErrorPolicy>,
}

impl Config {
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nsq-report").join("config.toml"))
    }

    /// Load an explicit config file, or the default one when it exists.
    /// A missing default file yields the default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::get_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        debug!("Loading config from: {:?}", config_path);

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config = Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML configuration")
    }
}

impl ExportConfig {
    /// Merge command-line overrides over the configured values
    pub fn resolve(&self, overrides: ExportOverrides) -> Result<ExportOptions> {
        let source_dir = overrides
            .source_dir
            .or_else(|| self.source_dir.clone())
            .context("No source directory given. Pass --source or set export.source_dir in the config file")?;
        let destination_dir = overrides
            .destination_dir
            .or_else(|| self.destination_dir.clone())
            .context("No destination directory given. Pass --destination or set export.destination_dir in the config file")?;
        let extension = overrides
            .extension
            .or_else(|| self.extension.clone())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Ok(ExportOptions {
            source_dir,
            destination_dir,
            extension: extension.trim_start_matches('.').to_string(),
            on_error: overrides.on_error.or(self.on_error).unwrap_or_default(),
        })
    }
}
