use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_DIST_DIR: &str = "dist";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Preview server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Directory produced by `trunk build`
    pub dist_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Loads settings from defaults, then the config file, then `NEXTBANKING_*`
/// environment variables (a `.env` file is honored).
///
/// Without an explicit `config_file`, `./nextbanking.toml` is used if present.
pub fn load_config(config_file: Option<&Path>) -> Result<ServerConfig> {
    dotenvy::dotenv().ok();

    let file = match config_file {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            File::from(path).required(true)
        }
        None => File::with_name("nextbanking").required(false),
    };

    Config::builder()
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
        .set_default("dist_dir", DEFAULT_DIST_DIR)?
        .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
        .add_source(file)
        .add_source(Environment::with_prefix("NEXTBANKING"))
        .build()
        .context("Failed to read configuration")?
        .try_deserialize()
        .context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9000\"").unwrap();
        writeln!(file, "dist_dir = \"/srv/nextbanking\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/nextbanking"));
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("absent.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "request_timeout_secs = \"soon\"").unwrap();

        assert!(load_config(Some(file.path())).is_err());
    }
}
