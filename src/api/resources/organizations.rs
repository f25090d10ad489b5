//
//  podio
//  api/resources/organizations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization API types and operations.
//!
//! An organization is the top-level container in Podio. It holds spaces,
//! which in turn hold apps.
//!
//! # Example
//!
//! ```rust,no_run
//! use podio::api::PodioClient;
//!
//! # async fn example(client: &PodioClient) -> podio::Result<()> {
//! let org = client.get_organization_by_slug("acme").await?;
//! println!("{} has id {}", org.name, org.id);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::api::client::{encode_segment, PodioClient};
use crate::api::common::Result;

/// Represents a Podio organization.
///
/// # Fields
///
/// * `id` - Numeric organization id
/// * `slug` - URL label used in web URLs
/// * `name` - Display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Numeric organization id.
    #[serde(rename = "org_id")]
    pub id: u64,

    /// URL label, e.g. `acme`.
    #[serde(rename = "url_label", default)]
    pub slug: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl PodioClient {
    /// Lists the organizations the authenticated user is a member of.
    pub async fn get_organizations(&self) -> Result<Vec<Organization>> {
        self.get("/org").await
    }

    /// Fetches one organization by id.
    pub async fn get_organization(&self, id: u64) -> Result<Organization> {
        self.get(&format!("/org/{}", id)).await
    }

    /// Fetches one organization by its URL label.
    pub async fn get_organization_by_slug(&self, slug: &str) -> Result<Organization> {
        self.get(&format!("/org/url?org_slug={}", encode_segment(slug)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::test_client;

    #[tokio::test]
    async fn test_get_organizations() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/org")
            .match_header("authorization", "OAuth2 T1")
            .with_status(200)
            .with_body(r#"[
                {"org_id": 1, "url_label": "acme", "name": "Acme", "rank": 3},
                {"org_id": 2, "url_label": "initech", "name": "Initech"}
            ]"#)
            .create_async()
            .await;

        let orgs = test_client(&server).get_organizations().await.unwrap();

        mock.assert_async().await;
        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0].slug, "acme");
        assert_eq!(orgs[1].id, 2);
    }

    #[tokio::test]
    async fn test_get_organization() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/org/7")
            .with_status(200)
            .with_body(r#"{"org_id": 7, "url_label": "seven", "name": "Seven"}"#)
            .create_async()
            .await;

        let org = test_client(&server).get_organization(7).await.unwrap();

        mock.assert_async().await;
        assert_eq!(org.name, "Seven");
    }

    #[tokio::test]
    async fn test_get_organization_by_slug() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/org/url?org_slug=acme")
            .with_status(200)
            .with_body(r#"{"org_id": 1, "url_label": "acme", "name": "Acme"}"#)
            .create_async()
            .await;

        let org = test_client(&server).get_organization_by_slug("acme").await.unwrap();

        mock.assert_async().await;
        assert_eq!(org.id, 1);
    }
}
