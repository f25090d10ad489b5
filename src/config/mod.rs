//
//  podio
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration for the Podio client: where the API
//! lives, how long a request may take, and (for the CLI) which OAuth client
//! credentials to use when exchanging a token.
//!
//! ## Overview
//!
//! - **API Configuration** ([`ApiConfig`]): API origin, token endpoint, timeout, user agent.
//!   The library never hardcodes the origin; tests point it at a mock server.
//! - **Credentials** ([`CredentialsConfig`]): OAuth client id and secret.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/podio/config.toml`
//! - **macOS**: `~/Library/Application Support/podio/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\podio\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://api.podio.com"
//! token_url = "https://api.podio.com/oauth/token"
//! timeout_secs = 30
//!
//! [credentials]
//! client_id = "my-client"
//! client_secret = "s3cret"
//! ```
//!
//! ## Submodules
//!
//! - `file`: Low-level configuration file I/O operations

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Default origin of the Podio REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.podio.com";

/// Default OAuth2 token endpoint.
pub const DEFAULT_TOKEN_URL: &str = "https://api.podio.com/oauth/token";

/// Global configuration container.
///
/// Serialized to and from TOML. Every section uses `#[serde(default)]` so a
/// partial file, or no file at all, still yields a usable configuration.
///
/// # Example
///
/// ```rust
/// use podio::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.base_url, "https://api.podio.com");
/// assert!(config.credentials.client_id.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where and how to reach the API.
    #[serde(default)]
    pub api: ApiConfig,

    /// OAuth client credentials used by the token grants.
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// Connection settings for the Podio API.
///
/// Passed to [`PodioClient::with_config`](crate::api::PodioClient::with_config)
/// and to the token grants in [`crate::auth`].
///
/// # Fields
///
/// * `base_url` - Origin that every API path is appended to
/// * `token_url` - OAuth2 token endpoint
/// * `timeout_secs` - Request timeout; `None` leaves the transport default
/// * `user_agent` - Value of the `User-Agent` header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin that every API path is appended to (no trailing slash).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OAuth2 token endpoint.
    #[serde(default = "default_token_url")]
    pub token_url: String,

    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_user_agent() -> String {
    format!("podio/{}", crate::VERSION)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_url: default_token_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration rooted at `base_url`, with the token endpoint
    /// at `<base_url>/oauth/token`.
    ///
    /// ```rust
    /// use podio::config::ApiConfig;
    ///
    /// let config = ApiConfig::with_base_url("http://127.0.0.1:9000/");
    /// assert_eq!(config.base_url, "http://127.0.0.1:9000");
    /// assert_eq!(config.token_url, "http://127.0.0.1:9000/oauth/token");
    /// ```
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            token_url: format!("{}/oauth/token", base_url),
            base_url,
            ..Self::default()
        }
    }

    /// Returns the configured timeout as a [`Duration`].
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the HTTP client shared by API calls and token grants.
    pub(crate) fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout() {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// OAuth client credentials.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CredentialsConfig {
    /// OAuth client id issued by Podio.
    #[serde(default)]
    pub client_id: Option<String>,

    /// OAuth client secret issued by Podio.
    #[serde(default)]
    pub client_secret: Option<String>,
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Returns [`Config::default`] when no file exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the default configuration file path.
    ///
    /// | Platform | Path |
    /// |----------|------|
    /// | Linux | `~/.config/podio/config.toml` |
    /// | macOS | `~/Library/Application Support/podio/config.toml` |
    /// | Windows | `C:\Users\<User>\AppData\Roaming\podio\config.toml` |
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "podio")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.token_url, DEFAULT_TOKEN_URL);
        assert!(config.timeout().is_none());
        assert!(config.user_agent.starts_with("podio/"));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[api]\ntimeout_secs = 5\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
        assert!(config.credentials.client_secret.is_none());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api = ApiConfig::with_base_url("http://localhost:1234");
        config.credentials.client_id = Some("client".to_string());
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.base_url, "http://localhost:1234");
        assert_eq!(loaded.api.token_url, "http://localhost:1234/oauth/token");
        assert_eq!(loaded.credentials.client_id.as_deref(), Some("client"));
    }

    #[test]
    fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "api = 3").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
