//
//  podio
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Podio REST API and the typed
//! records it returns.
//!
//! ## Architecture
//!
//! - [`client`]: The request primitive, authentication and response classification
//! - [`resources`]: One method per endpoint plus the entity types they return
//! - [`common`]: The error model shared by every call
//!
//! ## Usage
//!
//! ```rust,no_run
//! use podio::api::PodioClient;
//! use podio::auth::Token;
//!
//! # async fn example() -> podio::Result<()> {
//! let client = PodioClient::new(Token::new("access-token"))?;
//!
//! for org in client.get_organizations().await? {
//!     println!("{} ({})", org.name, org.slug);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result`], whose error is a [`PodioError`]:
//!
//! - `Transport`: the network call failed
//! - `Decode`: a successful body did not match the requested type
//! - `Api`: the server sent a structured error, rendered as `"<type>: <description>"`
//! - `Opaque`: the server failed with a body that is not an error payload

/// Core HTTP client wrapper for the Podio API.
///
/// Provides the [`PodioClient`] struct which handles:
/// - Authentication header injection
/// - Request body serialization
/// - Success/failure classification and JSON decoding
pub mod client;

/// Podio resources: organizations, spaces, apps, items, fields, files, comments.
pub mod resources;

/// Error types shared by the API and auth layers.
///
/// Includes:
/// - [`PodioError`]: The library error type
/// - [`ApiError`]: A structured error reported by the server
pub mod common;

pub use client::{PodioClient, RequestBody};
pub use common::{ApiError, ErrorKind, PodioError, RequestInfo, Result};
pub use resources::*;
