use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::DEFAULT_BACKEND_URL;

const APP_DIR: &str = "quizgen";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default)]
    pub offline: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_fallback_delay_ms")]
    pub fallback_delay_ms: u64,
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}
fn default_fallback_delay_ms() -> u64 {
    1500
}
fn default_log_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("quizgen.log")
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            offline: false,
            request_timeout_secs: default_request_timeout_secs(),
            fallback_delay_ms: default_fallback_delay_ms(),
            question_bank: None,
            log_file: default_log_file(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Loads the config from `path`, or from the default location.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }
}
