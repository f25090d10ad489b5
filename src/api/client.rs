//
//  podio
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Podio API
//!
//! This module provides [`PodioClient`] and its request primitive. Every
//! resource operation in [`crate::api::resources`] is a method, path and body
//! fed into [`PodioClient::request`] or [`PodioClient::request_empty`]; this is
//! the only place that authenticates, classifies responses and decodes JSON.
//!
//! ## Response Classification
//!
//! The whole body is read before anything is decided:
//!
//! - status in `200..300`: the body is decoded into the target type
//!   (a failure here is [`PodioError::Decode`])
//! - any other status: the body is decoded as an [`ApiError`](super::ApiError)
//!   ([`PodioError::Api`]); if that fails the raw text is returned as
//!   [`PodioError::Opaque`]
//!
//! There are no retries and no local state changes. A call is exactly one
//! round trip.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::common::{classify_failure, PodioError, Result};
use crate::auth::Token;
use crate::config::ApiConfig;

/// Characters left unescaped in a path segment built from caller input.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes a caller-supplied string for use as one path segment.
///
/// ```rust
/// use podio::api::client::encode_segment;
///
/// assert_eq!(encode_segment("my-app"), "my-app");
/// assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
/// ```
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// Appends `oauth_token=<token>` to a file download link.
///
/// Links that already carry a query string get `&oauth_token=...`, links
/// without one get `?oauth_token=...`. The token is form-encoded.
///
/// # Errors
///
/// Returns [`PodioError::InvalidRequest`] if `link` is not an absolute URL.
pub fn with_access_token(link: &str, access_token: &str) -> Result<Url> {
    let mut url = Url::parse(link)
        .map_err(|e| PodioError::InvalidRequest(format!("invalid file link '{}': {}", link, e)))?;
    url.query_pairs_mut().append_pair("oauth_token", access_token);
    Ok(url)
}

/// A request body accepted by the request primitive.
#[derive(Debug)]
pub enum RequestBody {
    /// Serialized JSON, sent with `Content-Type: application/json`.
    Json(Vec<u8>),

    /// A `multipart/form-data` form; the boundary header is set by the transport.
    Multipart(Form),
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Self::Json(serde_json::to_vec(value)?))
    }
}

/// The main HTTP client for the Podio API.
///
/// Holds the transport, the API origin and a [`Token`]. The token is never
/// mutated, so a client can be shared across tasks by reference; reconnecting
/// after expiry means building a new client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use podio::api::PodioClient;
/// use podio::auth::Token;
/// use podio::config::ApiConfig;
///
/// // Against api.podio.com
/// let client = PodioClient::new(Token::new("access-token"))?;
///
/// // Against another origin, with a timeout
/// let mut config = ApiConfig::with_base_url("http://localhost:8080");
/// config.timeout_secs = Some(10);
/// let client = PodioClient::with_config(Token::new("access-token"), &config)?;
/// # Ok::<(), podio::PodioError>(())
/// ```
pub struct PodioClient {
    /// The underlying HTTP client
    http: Client,
    /// API origin, without trailing slash
    base_url: String,
    /// Credentials sent with every API call
    token: Token,
}

impl PodioClient {
    /// Creates a client for the default API origin.
    ///
    /// # Errors
    ///
    /// Returns [`PodioError::Transport`] if the HTTP client cannot be built.
    pub fn new(token: Token) -> Result<Self> {
        Self::with_config(token, &ApiConfig::default())
    }

    /// Creates a client from an explicit [`ApiConfig`].
    pub fn with_config(token: Token, config: &ApiConfig) -> Result<Self> {
        if token.access_token.is_empty() {
            tracing::warn!("Creating a client with an empty access token; calls will be rejected");
        }

        Ok(Self {
            http: config.http_client()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Returns the token this client authenticates with.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Returns the API origin paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs one authenticated round trip and decodes the success body into `T`.
    ///
    /// # Parameters
    ///
    /// * `method` - HTTP method
    /// * `path` - Path relative to the API origin, including any query string
    /// * `headers` - Extra headers; an `Authorization` entry is replaced by the client's token
    /// * `body` - Optional request body
    ///
    /// # Errors
    ///
    /// See the [module documentation](self) for how responses are classified.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use podio::api::{Organization, PodioClient};
    /// use reqwest::Method;
    ///
    /// # async fn example(client: &PodioClient) -> podio::Result<()> {
    /// let orgs: Vec<Organization> = client.request(Method::GET, "/org", None, None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<RequestBody>,
    ) -> Result<T> {
        let bytes = self.execute(method, path, headers, body).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Performs one authenticated round trip and discards the success body.
    pub async fn request_empty(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<RequestBody>,
    ) -> Result<()> {
        self.execute(method, path, headers, body).await?;
        Ok(())
    }

    /// Makes an HTTP GET request and decodes the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::GET, path, None, None).await
    }

    /// Makes an HTTP POST request with a JSON body and decodes the response.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.request(Method::POST, path, None, Some(RequestBody::json(body)?))
            .await
    }

    /// Makes an HTTP POST request with a JSON body, ignoring the response body.
    pub async fn post_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.request_empty(Method::POST, path, None, Some(RequestBody::json(body)?))
            .await
    }

    /// Makes an HTTP PUT request with a JSON body, ignoring the response body.
    pub async fn put_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.request_empty(Method::PUT, path, None, Some(RequestBody::json(body)?))
            .await
    }

    /// Makes an HTTP DELETE request.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.request_empty(Method::DELETE, path, None, None).await
    }

    /// Downloads the raw contents behind a file link.
    ///
    /// File links point outside the API namespace, so the token travels as an
    /// `oauth_token` query parameter and no `Authorization` header is sent.
    ///
    /// # Errors
    ///
    /// - [`PodioError::InvalidRequest`] if `link` is not an absolute URL
    /// - otherwise the same classification as [`request`](Self::request)
    pub async fn download_file(&self, link: &str) -> Result<Vec<u8>> {
        let url = with_access_token(link, &self.token.access_token)?;
        let path = url.path().to_string();

        let response = self.http.get(url).send().await?;
        read_response(&Method::GET, &path, response).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        headers: Option<&HeaderMap>,
        body: Option<RequestBody>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);

        let mut merged = headers.cloned().unwrap_or_default();
        let auth = HeaderValue::from_str(&self.token.authorization_header())
            .map_err(|e| PodioError::InvalidRequest(format!("access token is not a valid header: {}", e)))?;
        merged.insert(AUTHORIZATION, auth);

        let mut request = self.http.request(method.clone(), &url).headers(merged);
        request = match body {
            Some(RequestBody::Json(bytes)) => request.header(CONTENT_TYPE, "application/json").body(bytes),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request.send().await?;
        read_response(&method, path, response).await
    }
}

/// Reads the whole body, then splits success from failure.
async fn read_response(method: &Method, path: &str, response: Response) -> Result<Vec<u8>> {
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    tracing::debug!("{} {} -> {} ({} bytes)", method, path, status, body.len());

    if (200..300).contains(&status) {
        Ok(body.to_vec())
    } else {
        Err(classify_failure(status, &body))
    }
}
