//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::openai;
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// `OpenAI` API key used for slide enhancement
    pub openai_api_key: String,
    /// Chat model to request
    pub openai_model: String,
    /// Request timeout in seconds for enhancement calls
    pub openai_timeout_secs: u64,
    /// Directory holding stored presentations, when overridden
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            openai_api_key: String::new(),
            openai_model: openai::DEFAULT_MODEL.to_string(),
            openai_timeout_secs: openai::DEFAULT_TIMEOUT_SECS,
            data_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(key) = env::var("OPENAI_API_KEY") {
            config.openai_api_key = key;
        }

        if let Ok(model) = env::var("OPENAI_MODEL") {
            if !model.is_empty() {
                config.openai_model = model;
            }
        }

        if let Ok(timeout) = env::var("OPENAI_TIMEOUT_SECS") {
            if let Ok(secs) = timeout.parse::<u64>() {
                config.openai_timeout_secs = secs;
            }
        }

        // Data directory: env var override, else resolved lazily by the store
        config.data_dir = env::var("PRESO_DATA_DIR").ok().map(PathBuf::from);

        Ok(config)
    }

    /// Check if `OpenAI` enhancement is configured
    pub const fn has_openai_credentials(&self) -> bool {
        !self.openai_api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_has_no_credentials() {
        let config = Config::default();
        assert!(!config.has_openai_credentials());
        assert_eq!(config.openai_model, "gpt-4o");
        assert_eq!(config.openai_timeout_secs, 30);
    }

    #[test]
    fn app_name_matches_package() {
        let config = Config::default();
        assert_eq!(config.app_name(), "preso");
        assert!(!config.app_version().is_empty());
    }
}
