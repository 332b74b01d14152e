//! Configuration: TOML file on disk, overridable from the command line.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, LogConfig, UiConfig};
