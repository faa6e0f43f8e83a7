use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE: &str = "gospoil.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },
    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub omdb_api_key: String,
    pub omdb_base_url: String,
    pub poster_cache_dir: String,
    pub export_log_path: String,
    pub summarizer_endpoint: String,
    pub summarizer_model: String,
    pub summarizer_token: Option<String>,
    pub refresh_detail_before_actions: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            omdb_api_key: "492917e1".to_string(),
            omdb_base_url: "http://www.omdbapi.com/".to_string(),
            poster_cache_dir: "poster_cache".to_string(),
            export_log_path: "gospoil_local.db".to_string(),
            summarizer_endpoint: "https://api-inference.huggingface.co/models".to_string(),
            summarizer_model: "facebook/bart-large-cnn".to_string(),
            summarizer_token: None,
            refresh_detail_before_actions: false,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by whatever the file at `path` sets. A missing
    /// file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        toml::from_str(&text).map_err(|error| ConfigError::Parse {
            path: path.display().to_string(),
            message: error.to_string(),
        })
    }
}
