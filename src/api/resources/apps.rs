//
//  podio
//  api/resources/apps.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! App API types and operations.
//!
//! Apps are requested with `view=micro`, which returns only the identifying
//! fields; the app's field configuration is not part of this model.

use serde::{Deserialize, Serialize};

use crate::api::client::{encode_segment, PodioClient};
use crate::api::common::Result;

/// Represents a Podio app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// Numeric app id.
    #[serde(rename = "app_id")]
    pub id: u64,

    /// URL label, unique within the space.
    #[serde(rename = "url_label", default)]
    pub slug: String,

    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl PodioClient {
    /// Lists the apps in a space.
    pub async fn get_apps(&self, space_id: u64) -> Result<Vec<App>> {
        self.get(&format!("/app/space/{}?view=micro", space_id))
            .await
    }

    /// Fetches one app by id.
    pub async fn get_app(&self, id: u64) -> Result<App> {
        self.get(&format!("/app/{}?view=micro", id)).await
    }

    /// Fetches an app by space id and URL label.
    pub async fn get_app_by_space_and_slug(&self, space_id: u64, slug: &str) -> Result<App> {
        self.get(&format!("/app/space/{}/{}", space_id, encode_segment(slug)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::test_client;

    #[tokio::test]
    async fn test_get_apps() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/app/space/10?view=micro")
            .with_status(200)
            .with_body(r#"[{"app_id": 42, "name": "Leads"}, {"app_id": 43, "url_label": "deals", "name": "Deals"}]"#)
            .create_async()
            .await;

        let apps = test_client(&server).get_apps(10).await.unwrap();

        mock.assert_async().await;
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].slug, "");
        assert_eq!(apps[1].slug, "deals");
    }

    #[tokio::test]
    async fn test_get_app() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/app/42?view=micro")
            .with_status(200)
            .with_body(r#"{"app_id": 42, "name": "Leads"}"#)
            .create_async()
            .await;

        let app = test_client(&server).get_app(42).await.unwrap();

        mock.assert_async().await;
        assert_eq!(app.name, "Leads");
    }

    #[tokio::test]
    async fn test_get_app_by_space_and_slug() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/app/space/10/leads")
            .with_status(200)
            .with_body(r#"{"app_id": 42, "url_label": "leads", "name": "Leads"}"#)
            .create_async()
            .await;

        let app = test_client(&server)
            .get_app_by_space_and_slug(10, "leads")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(app.id, 42);
    }
}
