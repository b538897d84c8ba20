use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Built frontend served at `/`
    pub dist_dir: PathBuf,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    pub fn bundle_present(&self) -> bool {
        self.index_file().is_file()
    }
}

impl From<&ServerConfig> for AppState {
    fn from(config: &ServerConfig) -> Self {
        Self {
            dist_dir: config.dist_dir.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Whether the frontend bundle is available ("present" or "missing")
    pub bundle: String,
}
