//
//  podio
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Podio client
//!
//! This module holds the error model shared by every request the client makes,
//! including the token grants in [`crate::auth`].
//!
//! # Overview
//!
//! A failed call is always one of four things:
//!
//! | Kind | Variant | When |
//! |------|---------|------|
//! | Transport | [`PodioError::Transport`] | Connection, TLS or body read failed |
//! | Decode | [`PodioError::Decode`] | A 2xx body did not match the requested type |
//! | Api | [`PodioError::Api`] | A non-2xx body parsed as an [`ApiError`] |
//! | Api | [`PodioError::Opaque`] | A non-2xx body that did not parse; the raw bytes are kept |
//!
//! # Example
//!
//! ```rust
//! use podio::api::common::{ApiError, ErrorKind, PodioError};
//!
//! let err = PodioError::Api {
//!     status: 404,
//!     error: ApiError::new("not_found", "missing"),
//! };
//!
//! assert_eq!(err.kind(), ErrorKind::Api);
//! assert_eq!(err.to_string(), "not_found: missing");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Result alias used by every fallible operation in the library.
pub type Result<T> = std::result::Result<T, PodioError>;

/// Unified error type for all Podio API operations.
///
/// Every resource operation funnels through the same request primitive, so
/// the variants here describe the only ways a call can fail. The library never
/// retries or recovers; the error is handed straight back to the caller.
///
/// # Notes
///
/// - `Transport` converts from `reqwest::Error` and renders it unchanged
/// - `Decode` converts from `serde_json::Error`
/// - `Opaque` keeps the response body byte-for-byte; see [`PodioError::raw_body`]
#[derive(Error, Debug)]
pub enum PodioError {
    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and
    /// failures while reading the response body.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A successful response body could not be decoded into the target type.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The API reported a structured error.
    ///
    /// # Fields
    ///
    /// - `status` - HTTP status code of the response
    /// - `error` - The decoded error payload
    #[error("{error}")]
    Api {
        /// HTTP status code of the response.
        status: u16,
        /// The decoded error payload.
        error: ApiError,
    },

    /// The API failed with a body that is not an [`ApiError`].
    ///
    /// The body is kept verbatim so no diagnostic information is lost.
    /// `Display` decodes it as UTF-8, replacing invalid sequences.
    #[error("{}", String::from_utf8_lossy(.body))]
    Opaque {
        /// HTTP status code of the response.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The request could not be built (bad header, unparsable link).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Discriminant of a [`PodioError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or connection failure.
    Transport,
    /// Success body did not decode.
    Decode,
    /// The server rejected the request.
    Api,
    /// The request was never sent.
    Request,
}

impl PodioError {
    /// Returns the kind of failure, for callers that branch on the category
    /// rather than on the concrete variant.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport(_) => ErrorKind::Transport,
            Self::Decode(_) => ErrorKind::Decode,
            Self::Api { .. } | Self::Opaque { .. } => ErrorKind::Api,
            Self::InvalidRequest(_) => ErrorKind::Request,
        }
    }

    /// Returns the HTTP status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::Opaque { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the structured API error, if the server sent one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the unparsed response body of an [`Opaque`](Self::Opaque) error.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::Opaque { body, .. } => Some(body.as_slice()),
            _ => None,
        }
    }

    /// Returns `true` if the server marked this error as safe to show to an end user.
    pub fn should_propagate(&self) -> bool {
        self.api_error().is_some_and(|e| e.propagate)
    }
}

/// An error reported by the Podio API.
///
/// Podio returns errors in the format:
/// ```json
/// {
///     "error": "not_found",
///     "error_description": "Object not found",
///     "error_detail": null,
///     "error_parameters": {},
///     "error_propagate": false,
///     "request": {"url": "http://api.podio.com/item/1", "query_string": ""}
/// }
/// ```
///
/// Only `error` is required; everything else defaults when absent or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error type, e.g. `not_found` or `unauthorized`.
    #[serde(rename = "error")]
    pub kind: String,

    /// Human-readable description.
    #[serde(rename = "error_description", default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Opaque extra detail.
    #[serde(rename = "error_detail", default)]
    pub detail: serde_json::Value,

    /// Opaque parameters relating to the error.
    #[serde(rename = "error_parameters", default)]
    pub parameters: serde_json::Value,

    /// Whether the error message is meant for the end user.
    #[serde(rename = "error_propagate", default, deserialize_with = "null_as_default")]
    pub propagate: bool,

    /// The request that caused the error.
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: RequestInfo,
}

impl ApiError {
    /// Creates an error with just a type and description.
    pub fn new(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            description: description.into(),
            detail: serde_json::Value::Null,
            parameters: serde_json::Value::Null,
            propagate: false,
            request: RequestInfo::default(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.description)
    }
}

impl std::error::Error for ApiError {}

/// The originating request echoed back inside an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestInfo {
    /// Full URL of the failed request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Query string of the failed request.
    #[serde(rename = "query_string", default, deserialize_with = "null_as_default")]
    pub query: String,
}

// Podio sends `null` for unset error fields.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Classifies a non-2xx response.
///
/// The body is first decoded as an [`ApiError`]. If that fails the raw text
/// becomes the error, so nothing the server said is dropped.
pub fn classify_failure(status: u16, body: &[u8]) -> PodioError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(error) => {
            tracing::debug!("API error {}: {}", status, error.kind);
            PodioError::Api { status, error }
        }
        Err(_) => {
            tracing::debug!("Unparsed API error body ({} bytes) for status {}", body.len(), status);
            PodioError::Opaque {
                status,
                body: body.to_vec(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new("forbidden", "No access");
        assert_eq!(err.to_string(), "forbidden: No access");
    }

    #[test]
    fn test_classify_full_api_error() {
        let body = br#"{
            "error": "not_found",
            "error_description": "Object not found",
            "error_detail": "item",
            "error_parameters": {"id": 12},
            "error_propagate": true,
            "request": {"url": "https://api.podio.com/item/12", "query_string": "fields=files"}
        }"#;

        let err = classify_failure(404, body);
        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.status(), Some(404));
        assert!(err.should_propagate());

        let api = err.api_error().unwrap();
        assert_eq!(api.kind, "not_found");
        assert_eq!(api.detail, serde_json::json!("item"));
        assert_eq!(api.parameters["id"], 12);
        assert_eq!(api.request.url, "https://api.podio.com/item/12");
        assert_eq!(api.request.query, "fields=files");
        assert_eq!(err.to_string(), "not_found: Object not found");
    }

    #[test]
    fn test_classify_minimal_api_error() {
        let err = classify_failure(404, br#"{"error":"not_found","error_description":"missing"}"#);
        assert_eq!(
            err.api_error(),
            Some(&ApiError::new("not_found", "missing"))
        );
        assert_eq!(err.to_string(), "not_found: missing");
        assert!(!err.should_propagate());
    }

    #[test]
    fn test_classify_non_json_keeps_raw_body() {
        let body = "<html>Bad Gateway</html>\n";
        let err = classify_failure(502, body.as_bytes());
        assert!(matches!(err, PodioError::Opaque { status: 502, .. }));
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn test_classify_non_utf8_body_is_kept_verbatim() {
        let body = b"bad \xff\xfe gateway";
        let err = classify_failure(502, body);

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.raw_body(), Some(&body[..]));
        assert_eq!(err.to_string(), "bad \u{fffd}\u{fffd} gateway");
    }

    #[test]
    fn test_classify_api_error_with_null_fields() {
        let body = br#"{
            "error": "not_found",
            "error_description": null,
            "error_detail": null,
            "error_parameters": null,
            "error_propagate": null,
            "request": null
        }"#;

        let err = classify_failure(404, body);
        let api = err.api_error().unwrap();
        assert_eq!(api, &ApiError::new("not_found", ""));
        assert!(err.raw_body().is_none());
        assert_eq!(err.to_string(), "not_found: ");
    }

    #[test]
    fn test_request_info_with_null_fields() {
        let err = classify_failure(
            400,
            br#"{"error":"invalid_value","error_propagate":true,"request":{"url":null,"query_string":null}}"#,
        );
        let api = err.api_error().unwrap();
        assert_eq!(api.request, RequestInfo::default());
        assert!(err.should_propagate());
    }

    #[test]
    fn test_classify_json_without_error_key_is_opaque() {
        let body = r#"{"message":"rate limited"}"#;
        let err = classify_failure(420, body.as_bytes());
        assert_eq!(err.kind(), ErrorKind::Api);
        assert!(err.api_error().is_none());
        assert_eq!(err.to_string(), body);
    }

    #[test]
    fn test_invalid_request_kind() {
        let err = PodioError::InvalidRequest("bad header".to_string());
        assert_eq!(err.kind(), ErrorKind::Request);
        assert_eq!(err.status(), None);
    }
}
