//
//  podio
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module holds the OAuth2 [`Token`] every API call is authenticated
//! with, and the grants that obtain one.
//!
//! ## Supported Grants
//!
//! | Grant | Function | Credentials |
//! |-------|----------|-------------|
//! | Password | [`authenticate_with_password`] | username + password |
//! | App | [`authenticate_with_app`] | app id + app token |
//! | Refresh | [`refresh_access_token`] | refresh token |
//!
//! ## Example
//!
//! ```rust,no_run
//! use podio::api::PodioClient;
//! use podio::auth::{authenticate_with_password, OAuthConfig};
//! use podio::config::ApiConfig;
//!
//! # async fn example() -> podio::Result<()> {
//! let oauth = OAuthConfig::new("client-id", "client-secret");
//! let token = authenticate_with_password(&ApiConfig::default(), &oauth, "me@example.com", "pw").await?;
//!
//! let client = PodioClient::new(token)?;
//! let orgs = client.get_organizations().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Notes
//!
//! - Tokens are never refreshed automatically. When one expires, run a grant
//!   again and build a new client.

pub mod oauth;

pub use oauth::*;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// An OAuth2 token as returned by the Podio token endpoint.
///
/// The client holds the token read-only for its whole lifetime.
///
/// # Fields
///
/// - `access_token`: Sent as `Authorization: OAuth2 <token>` on every call.
/// - `token_type`: Usually `"bearer"`.
/// - `expires_in`: Lifetime in seconds from issue.
/// - `refresh_token`: Used by [`refresh_access_token`].
/// - `reference`: Opaque description of what the token grants access to.
/// - `transfer_token`: Token for handing a session over to the web UI.
///
/// # Example
///
/// ```rust
/// use podio::auth::Token;
///
/// let token = Token::new("abc123");
/// assert_eq!(token.authorization_header(), "OAuth2 abc123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The OAuth2 access token.
    pub access_token: String,

    /// Token type reported by the server.
    #[serde(default)]
    pub token_type: String,

    /// Lifetime in seconds.
    #[serde(default)]
    pub expires_in: i64,

    /// Refresh token for obtaining a new access token.
    #[serde(default)]
    pub refresh_token: String,

    /// Opaque reference map describing the grant.
    #[serde(rename = "ref", default)]
    pub reference: serde_json::Map<String, serde_json::Value>,

    /// Transfer token.
    #[serde(default)]
    pub transfer_token: String,
}

impl Token {
    /// Creates a token from an access token the caller already holds.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            ..Self::default()
        }
    }

    /// The `Authorization` header value for this token.
    pub fn authorization_header(&self) -> String {
        format!("OAuth2 {}", self.access_token)
    }

    /// Returns when the token expires, given when it was issued.
    ///
    /// Returns `None` if the server did not report a lifetime.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        (self.expires_in > 0).then(|| issued_at + Duration::seconds(self.expires_in))
    }

    /// Returns `true` if a refresh token is available.
    pub fn can_refresh(&self) -> bool {
        !self.refresh_token.is_empty()
    }
}
