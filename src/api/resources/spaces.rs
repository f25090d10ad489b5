//
//  podio
//  api/resources/spaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Space API types and operations.
//!
//! Spaces (workspaces in the Podio UI) live inside an organization and hold apps.

use serde::{Deserialize, Serialize};

use crate::api::client::{encode_segment, PodioClient};
use crate::api::common::Result;

/// Represents a Podio space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    /// Numeric space id.
    #[serde(rename = "space_id")]
    pub id: u64,

    /// URL label, unique within the organization.
    #[serde(rename = "url_label", default)]
    pub slug: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl PodioClient {
    /// Lists the spaces in an organization that the user can see.
    pub async fn get_spaces(&self, org_id: u64) -> Result<Vec<Space>> {
        self.get(&format!("/org/{}/space", org_id)).await
    }

    /// Fetches one space by id.
    pub async fn get_space(&self, id: u64) -> Result<Space> {
        self.get(&format!("/space/{}", id)).await
    }

    /// Fetches a space by organization id and URL label.
    pub async fn get_space_by_org_and_slug(&self, org_id: u64, slug: &str) -> Result<Space> {
        self.get(&format!("/space/org/{}/{}", org_id, encode_segment(slug)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::test_client;

    #[tokio::test]
    async fn test_get_spaces() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/org/1/space")
            .with_status(200)
            .with_body(r#"[{"space_id": 10, "url_label": "sales", "name": "Sales"}]"#)
            .create_async()
            .await;

        let spaces = test_client(&server).get_spaces(1).await.unwrap();

        mock.assert_async().await;
        assert_eq!(spaces[0].id, 10);
        assert_eq!(spaces[0].slug, "sales");
    }

    #[tokio::test]
    async fn test_get_space() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/space/10")
            .with_status(200)
            .with_body(r#"{"space_id": 10, "url_label": "sales", "name": "Sales"}"#)
            .create_async()
            .await;

        let space = test_client(&server).get_space(10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(space.name, "Sales");
    }

    #[tokio::test]
    async fn test_get_space_by_org_and_slug() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/space/org/1/sales-team")
            .with_status(200)
            .with_body(r#"{"space_id": 11, "url_label": "sales-team", "name": "Sales Team"}"#)
            .create_async()
            .await;

        let space = test_client(&server)
            .get_space_by_org_and_slug(1, "sales-team")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(space.id, 11);
    }
}
