//! Credential settings
//!
//! Loads API credentials from a JSON or YAML file, picked by extension.
//! A missing or malformed file is fatal: the error propagates out of `main`
//! and the run aborts before any network call is made.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// API credentials, loaded once and read-only afterwards.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// NASA ADS API token (required)
    pub ads_token: String,
    /// Google Programmable Search API key
    pub google_api_key: Option<String>,
    /// Google Programmable Search engine id (cx)
    pub google_cx: Option<String>,
}

impl Settings {
    /// Load settings from `path`. `.json` files are parsed as JSON,
    /// anything else as YAML. Unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let settings = if has_extension(path, "json") {
            serde_json::from_str(&raw)?
        } else {
            serde_yaml::from_str(&raw)?
        };
        Ok(settings)
    }

    /// Google search is only usable with both a key and an engine id.
    pub fn google_credentials(&self) -> Option<(&str, &str)> {
        match (self.google_api_key.as_deref(), self.google_cx.as_deref()) {
            (Some(key), Some(cx)) if !key.is_empty() && !cx.is_empty() => Some((key, cx)),
            _ => None,
        }
    }
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}
