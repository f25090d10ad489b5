//
//  podio
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Podio API Client Library
//!
//! A typed async client for the Podio REST API: organizations, spaces, apps,
//! items, fields, files, comments, and OAuth2 token issuance.
//!
//! ## Overview
//!
//! Every operation is a thin method on [`PodioClient`] that builds a path and
//! body and hands them to one request primitive. That primitive authenticates
//! the call, reads the response and returns either the decoded target or a
//! [`PodioError`].
//!
//! ## Module Structure
//!
//! - [`api`]: The client, resource operations and entity types
//! - [`auth`]: OAuth2 tokens and grants
//! - [`config`]: API origin, timeout and credential configuration
//! - [`cli`]: Command-line front end used by the `podio` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use podio::{PodioClient, Token};
//!
//! # async fn example() -> podio::Result<()> {
//! let client = PodioClient::new(Token::new("access-token"))?;
//!
//! let item = client.get_item(99).await?;
//! println!("{}: {}", item.formatted_app_item_id, item.title);
//! # Ok(())
//! # }
//! ```
//!
//! ## What This Library Does Not Do
//!
//! | Concern | Behavior |
//! |---------|----------|
//! | Retries | None; every failure goes straight back to the caller |
//! | Token refresh | Manual, via [`auth::refresh_access_token`] |
//! | Pagination | Item filters return a single page |
//! | Rate limiting | Left to the server |

/// API client and resource operations.
///
/// Provides [`PodioClient`], the typed records it returns, and the error model.
pub mod api;

/// Authentication and token grants.
///
/// Handles the OAuth2 `password`, `app` and `refresh_token` grants against
/// the configured token endpoint.
pub mod auth;

/// Configuration management.
///
/// [`config::ApiConfig`] carries the API origin so tests and proxies can
/// redirect the client; [`config::Config`] adds a TOML file for the CLI.
pub mod config;

/// Command-line interface definitions.
pub mod cli;

pub use api::common::{ApiError, ErrorKind, PodioError, Result};
pub use api::PodioClient;
pub use auth::Token;
pub use config::{ApiConfig, Config};

/// Library version, derived from Cargo.toml at compile time.
///
/// ```rust
/// use podio::VERSION;
///
/// println!("podio version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1`: General error
/// - `4`: Authentication rejected
/// - `8`: Resource not found
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Authentication required or failed.
    ///
    /// Run `podio auth password` or `podio auth app` for a fresh token.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;
}
