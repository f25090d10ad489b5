//
//  podio
//  auth/oauth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # OAuth 2.0 Token Grants
//!
//! Each grant is one form-encoded POST to the token endpoint configured in
//! [`ApiConfig::token_url`]. The response is classified the same way as any
//! other API response:
//!
//! - non-2xx: [`PodioError::Api`] if the body is an error payload, otherwise
//!   [`PodioError::Opaque`] with the raw body
//! - 2xx carrying an `error` field: treated as a failure, not as a token
//! - 2xx otherwise: decoded into a [`Token`], or [`PodioError::Decode`]
//!
//! ## Security Considerations
//!
//! - Store client secrets securely; never commit them to version control
//! - Tokens and secrets are never written to the log

use crate::api::common::{classify_failure, Result};
use crate::config::ApiConfig;

use super::Token;

/// OAuth client credentials presented with every grant.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub client_secret: String,
}

impl OAuthConfig {
    /// Creates client credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

/// Exchanges a username and password for a token (grant type `password`).
///
/// # Errors
///
/// - [`PodioError::Transport`](crate::PodioError::Transport) if the request fails
/// - [`PodioError::Api`](crate::PodioError::Api) if the server rejects the credentials
/// - [`PodioError::Decode`](crate::PodioError::Decode) if the body is not a token
pub async fn authenticate_with_password(
    api: &ApiConfig,
    oauth: &OAuthConfig,
    username: &str,
    password: &str,
) -> Result<Token> {
    let params = [
        ("grant_type", "password"),
        ("username", username),
        ("password", password),
        ("client_id", oauth.client_id.as_str()),
        ("client_secret", oauth.client_secret.as_str()),
    ];
    request_token(api, &params).await
}

/// Exchanges an app id and app token for a token (grant type `app`).
///
/// The resulting token acts on behalf of the app and can only reach that
/// app's items.
pub async fn authenticate_with_app(
    api: &ApiConfig,
    oauth: &OAuthConfig,
    app_id: u64,
    app_token: &str,
) -> Result<Token> {
    let app_id = app_id.to_string();
    let params = [
        ("grant_type", "app"),
        ("app_id", app_id.as_str()),
        ("app_token", app_token),
        ("client_id", oauth.client_id.as_str()),
        ("client_secret", oauth.client_secret.as_str()),
    ];
    request_token(api, &params).await
}

/// Exchanges a refresh token for a new token (grant type `refresh_token`).
///
/// Nothing calls this automatically; the caller decides when to refresh and
/// builds a new client from the result.
pub async fn refresh_access_token(
    api: &ApiConfig,
    oauth: &OAuthConfig,
    refresh_token: &str,
) -> Result<Token> {
    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
        ("client_id", oauth.client_id.as_str()),
        ("client_secret", oauth.client_secret.as_str()),
    ];
    request_token(api, &params).await
}

async fn request_token(api: &ApiConfig, params: &[(&str, &str)]) -> Result<Token> {
    let grant = params
        .iter()
        .find(|(k, _)| *k == "grant_type")
        .map(|(_, v)| *v)
        .unwrap_or_default();

    let response = api
        .http_client()?
        .post(&api.token_url)
        .form(params)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.bytes().await?;
    tracing::debug!("Token grant '{}' -> {}", grant, status);

    if !(200..300).contains(&status) {
        return Err(classify_failure(status, &body));
    }

    decode_token(status, &body)
}

/// Decodes a 2xx token response, rejecting error payloads that some OAuth
/// servers return with a success status.
fn decode_token(status: u16, body: &[u8]) -> Result<Token> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if value.get("error").is_some() {
        return Err(classify_failure(status, body));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{ErrorKind, PodioError};
    use mockito::Matcher;

    fn oauth() -> OAuthConfig {
        OAuthConfig::new("cid", "csecret")
    }

    #[tokio::test]
    async fn test_password_grant() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "password".into()),
                Matcher::UrlEncoded("username".into(), "me@example.com".into()),
                Matcher::UrlEncoded("password".into(), "p&ss".into()),
                Matcher::UrlEncoded("client_id".into(), "cid".into()),
                Matcher::UrlEncoded("client_secret".into(), "csecret".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"access_token":"T1","token_type":"bearer","expires_in":28800,"refresh_token":"R1","ref":{"type":"user","id":1}}"#)
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let token = authenticate_with_password(&api, &oauth(), "me@example.com", "p&ss")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(token.access_token, "T1");
        assert_eq!(token.refresh_token, "R1");
    }

    #[tokio::test]
    async fn test_app_grant() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "app".into()),
                Matcher::UrlEncoded("app_id".into(), "42".into()),
                Matcher::UrlEncoded("app_token".into(), "apptok".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"access_token":"T2","ref":{"type":"app","id":42}}"#)
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let token = authenticate_with_app(&api, &oauth(), 42, "apptok").await.unwrap();

        mock.assert_async().await;
        assert_eq!(token.access_token, "T2");
        assert_eq!(token.reference["id"], 42);
    }

    #[tokio::test]
    async fn test_refresh_grant() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/oauth/token")
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
                Matcher::UrlEncoded("refresh_token".into(), "R1".into()),
            ]))
            .with_status(200)
            .with_body(r#"{"access_token":"T3","refresh_token":"R2"}"#)
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let token = refresh_access_token(&api, &oauth(), "R1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(token.access_token, "T3");
        assert_eq!(token.refresh_token, "R2");
    }

    #[tokio::test]
    async fn test_rejected_credentials() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .with_status(400)
            .with_body(r#"{"error":"invalid_grant","error_description":"Invalid user credentials"}"#)
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let err = authenticate_with_password(&api, &oauth(), "me", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "invalid_grant: Invalid user credentials");
    }

    #[tokio::test]
    async fn test_error_body_with_success_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .with_status(200)
            .with_body(r#"{"error":"invalid_client","error_description":"bad secret"}"#)
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let err = authenticate_with_app(&api, &oauth(), 1, "x").await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Api);
        assert_eq!(err.to_string(), "invalid_client: bad secret");
    }

    #[tokio::test]
    async fn test_non_json_success_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/oauth/token")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let api = ApiConfig::with_base_url(server.url());
        let err = authenticate_with_app(&api, &oauth(), 1, "x").await.unwrap_err();
        assert!(matches!(err, PodioError::Decode(_)));
    }
}
