//
//  podio
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands
//!
//! Runs one of the OAuth2 grants and prints the resulting token as JSON, so
//! it can be piped into `PODIO_TOKEN`:
//!
//! ```bash
//! export PODIO_TOKEN=$(podio auth app 42 --app-token ... | jq -r .access_token)
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::auth::{
    authenticate_with_app, authenticate_with_password, refresh_access_token, OAuthConfig,
};
use crate::config::Config;

use super::{print_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct AuthCommand {
    /// OAuth client id (defaults to the config file)
    #[arg(long, global = true, env = "PODIO_CLIENT_ID")]
    pub client_id: Option<String>,

    /// OAuth client secret (defaults to the config file)
    #[arg(long, global = true, env = "PODIO_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Authenticate as a user with username and password
    Password {
        #[arg(long, short = 'u')]
        username: String,

        #[arg(long, short = 'p', env = "PODIO_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Authenticate as an app with its app token
    App {
        app_id: u64,

        #[arg(long, env = "PODIO_APP_TOKEN", hide_env_values = true)]
        app_token: String,
    },

    /// Exchange a refresh token for a new access token
    Refresh {
        #[arg(long)]
        refresh_token: String,
    },
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;
        let oauth = self.oauth_config(&config)?;

        let token = match &self.command {
            AuthSubcommand::Password { username, password } => {
                authenticate_with_password(&config.api, &oauth, username, password).await
            }
            AuthSubcommand::App { app_id, app_token } => {
                authenticate_with_app(&config.api, &oauth, *app_id, app_token).await
            }
            AuthSubcommand::Refresh { refresh_token } => {
                refresh_access_token(&config.api, &oauth, refresh_token).await
            }
        }
        .context("Authentication failed")?;

        print_json(&token)
    }

    fn oauth_config(&self, config: &Config) -> Result<OAuthConfig> {
        let client_id = self
            .client_id
            .clone()
            .or_else(|| config.credentials.client_id.clone())
            .context("No client id. Pass --client-id or set credentials.client_id in the config file")?;
        let client_secret = self
            .client_secret
            .clone()
            .or_else(|| config.credentials.client_secret.clone())
            .context("No client secret. Pass --client-secret or set credentials.client_secret in the config file")?;

        Ok(OAuthConfig::new(client_id, client_secret))
    }
}
