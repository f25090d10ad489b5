//
//  podio
//  api/resources/files.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! File API types and operations.
//!
//! Uploading a file creates an unattached file; attach it to an item (or
//! another object) with [`PodioClient::attach_file`].
//!
//! # Example
//!
//! ```rust,no_run
//! use podio::api::PodioClient;
//!
//! # async fn example(client: &PodioClient) -> podio::Result<()> {
//! let file = client.upload_file("report.pdf", std::fs::read("report.pdf").unwrap()).await?;
//! client.attach_file(file.id, "item", 99).await?;
//!
//! let contents = client.download_file(&file.link).await?;
//! assert_eq!(contents.len() as u64, file.size);
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Downloads authenticate with an `oauth_token` query parameter; see
//!   [`PodioClient::download_file`].

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::{PodioClient, RequestBody};
use crate::api::common::Result;

/// Metadata for a file stored in Podio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Numeric file id.
    #[serde(rename = "file_id")]
    pub id: u64,

    /// File name.
    #[serde(default)]
    pub name: String,

    /// Direct download link.
    #[serde(default)]
    pub link: String,

    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
}

impl PodioClient {
    /// Lists files visible to the user.
    pub async fn get_files(&self) -> Result<Vec<File>> {
        self.get("/file").await
    }

    /// Fetches metadata for one file.
    pub async fn get_file(&self, file_id: u64) -> Result<File> {
        self.get(&format!("/file/{}", file_id)).await
    }

    /// Uploads a file as `multipart/form-data`.
    ///
    /// The contents go in the `source` part; the name is sent both as that
    /// part's filename and as a `filename` text field.
    pub async fn upload_file(&self, name: &str, contents: Vec<u8>) -> Result<File> {
        let form = Form::new()
            .part("source", Part::bytes(contents).file_name(name.to_string()))
            .text("filename", name.to_string());

        self.request(Method::POST, "/file", None, Some(RequestBody::Multipart(form)))
            .await
    }

    /// Replaces `old_file_id` with `new_file_id` wherever the old file is attached.
    pub async fn replace_file(&self, old_file_id: u64, new_file_id: u64) -> Result<()> {
        self.post_empty(
            &format!("/file/{}/replace", new_file_id),
            &serde_json::json!({ "old_file_id": old_file_id }),
        )
        .await
    }

    /// Attaches a file to an object, e.g. `("item", 99)`.
    pub async fn attach_file(&self, file_id: u64, ref_type: &str, ref_id: u64) -> Result<()> {
        self.post_empty(
            &format!("/file/{}/attach", file_id),
            &serde_json::json!({ "ref_type": ref_type, "ref_id": ref_id }),
        )
        .await
    }

    /// Deletes a file.
    pub async fn delete_file(&self, file_id: u64) -> Result<()> {
        self.delete(&format!("/file/{}", file_id)).await
    }
}
