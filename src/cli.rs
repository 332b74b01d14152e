use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::plain::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "moviefetch", version, about = "Browse the Star Wars film catalog")]
pub struct Cli {
    /// Config file (default: ~/.config/moviefetch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Give up on a request after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Append log records to this file (overrides [log] path and MOVIEFETCH_LOG)
    #[arg(long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// Fetch once, print the result and exit instead of starting the UI
    #[arg(long)]
    pub plain: bool,

    /// Print movies as JSON (with --plain)
    #[arg(long, requires = "plain")]
    pub json: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Load the config file and apply command line overrides on top.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::load_from(&self.config_path())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = Some(timeout);
        }
        if let Some(log) = &self.log {
            config.log.path = Some(log.clone());
        }
    }
}
