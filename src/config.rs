use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::BaseDirs;

use crate::loader::DataSource;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".course-catalog";
/// Log folder inside the application data directory.
const LOG_DIR_NAME: &str = "logs";
/// Course list read when no source is given.
pub const DEFAULT_SOURCE: &str = "data/data.json";

/// Browse a course catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "course-catalog", version, about)]
pub struct Cli {
    /// Path or http(s) URL of the JSON course list.
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Category tab to show, in order. Repeat for several tabs. Defaults to
    /// every category found in the data.
    #[arg(long = "category", value_name = "LABEL")]
    pub categories: Vec<String>,

    /// Directory for the rolling log file.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the course list is read from.
    pub source: DataSource,
    /// Explicit tab labels, or `None` to derive tabs from the data.
    pub category_labels: Option<Vec<String>>,
    /// Directory receiving the rolling log file.
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolve parsed arguments, filling in the default log directory.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let log_dir = match cli.log_dir {
            Some(dir) => dir,
            None => default_log_dir()?,
        };
        let category_labels = if cli.categories.is_empty() {
            None
        } else {
            Some(cli.categories)
        };
        Ok(Self {
            source: DataSource::parse(&cli.source),
            category_labels,
            log_dir,
        })
    }
}

/// Resolve `~/.course-catalog/logs`.
fn default_log_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME).join(LOG_DIR_NAME))
}
