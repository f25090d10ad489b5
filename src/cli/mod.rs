//
//  podio
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod auth;
mod resources;

pub use auth::AuthCommand;
pub use resources::{AppCommand, CommentCommand, FileCommand, ItemCommand, OrgCommand, SpaceCommand};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::api::PodioClient;
use crate::auth::Token;
use crate::config::{ApiConfig, Config};

#[derive(Parser, Debug)]
#[command(
    name = "podio",
    version,
    about = "Work with Podio from the command line",
    long_about = "podio is a small CLI over the podio client library.\n\n\
                  It issues OAuth2 tokens and reads or writes organizations, spaces, apps, items, files and comments.",
    propagate_version = true,
    after_help = "Use 'podio <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Access token for API calls
    #[arg(long, global = true, env = "PODIO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to a config file instead of the default location
    #[arg(long, global = true, env = "PODIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the API origin from the config file
    #[arg(long, global = true, env = "PODIO_BASE_URL")]
    pub base_url: Option<String>,
}

impl GlobalOptions {
    /// Loads the config file and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(base_url) = &self.base_url {
            let origin = ApiConfig::with_base_url(base_url.clone());
            config.api.base_url = origin.base_url;
            config.api.token_url = origin.token_url;
        }
        Ok(config)
    }

    /// Builds an authenticated client from `--token`.
    pub fn client(&self) -> Result<PodioClient> {
        let token = self.token.as_deref().context(
            "No access token. Pass --token or set PODIO_TOKEN ('podio auth' can issue one)",
        )?;
        let config = self.load_config()?;
        Ok(PodioClient::with_config(Token::new(token), &config.api)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exchange credentials for an access token
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Organizations
    Org(OrgCommand),

    /// Spaces
    Space(SpaceCommand),

    /// Apps
    App(AppCommand),

    /// Items
    Item(ItemCommand),

    /// Comments
    Comment(CommentCommand),

    /// Files
    File(FileCommand),

    /// Print the version
    Version,
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_client_requires_token() {
        let global = GlobalOptions::default();
        let err = global.client().err().unwrap();
        assert!(err.to_string().contains("No access token"));
    }

    #[test]
    fn test_base_url_override() {
        let dir = tempfile::tempdir().unwrap();
        let global = GlobalOptions {
            token: Some("T1".to_string()),
            config: Some(dir.path().join("config.toml")),
            base_url: Some("http://localhost:4000".to_string()),
        };

        let config = global.load_config().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.token_url, "http://localhost:4000/oauth/token");

        let client = global.client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:4000");
    }

    #[test]
    fn test_base_url_override_keeps_other_api_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut saved = Config::default();
        saved.api.timeout_secs = Some(12);
        saved.api.user_agent = "acme-sync/2.0".to_string();
        saved.save_to(&path).unwrap();

        let global = GlobalOptions {
            token: None,
            config: Some(path),
            base_url: Some("http://localhost:4000/".to_string()),
        };

        let config = global.load_config().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:4000");
        assert_eq!(config.api.token_url, "http://localhost:4000/oauth/token");
        assert_eq!(config.api.timeout_secs, Some(12));
        assert_eq!(config.api.user_agent, "acme-sync/2.0");
    }

    #[test]
    fn test_parse_item_create() {
        let cli = Cli::try_parse_from([
            "podio", "--token", "T1", "item", "create", "42", "--field", "title=Hello",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Item(_)));
        assert_eq!(cli.global.token.as_deref(), Some("T1"));
    }
}
