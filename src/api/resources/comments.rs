//
//  podio
//  api/resources/comments.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Comment API types and operations.
//!
//! Comments hang off a reference: an object type (`item`, `task`, `status`,
//! ...) and that object's id.

use serde::{Deserialize, Serialize};

use super::files::File;
use crate::api::client::{encode_segment, PodioClient};
use crate::api::common::Result;

/// A comment on a Podio object.
///
/// The creator fields are kept untyped; their shape depends on whether a
/// user or an app made the comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Numeric comment id.
    #[serde(rename = "comment_id")]
    pub id: u64,

    /// Comment text.
    #[serde(default)]
    pub value: String,

    /// The object commented on.
    #[serde(rename = "ref", default)]
    pub reference: serde_json::Map<String, serde_json::Value>,

    /// Attached files.
    #[serde(default)]
    pub files: Vec<File>,

    /// Who created the comment.
    #[serde(default)]
    pub created_by: serde_json::Value,

    /// Which client created the comment.
    #[serde(default)]
    pub created_via: serde_json::Value,

    /// Creation timestamp as sent by the API.
    #[serde(default)]
    pub created_on: serde_json::Value,

    /// Whether the current user likes the comment.
    #[serde(default)]
    pub is_liked: bool,

    /// Number of likes.
    #[serde(default)]
    pub like_count: u64,
}

#[derive(Serialize)]
struct CreateCommentRequest<'a> {
    value: &'a str,
}

fn comment_path(ref_type: &str, ref_id: &str) -> String {
    format!("/comment/{}/{}/", encode_segment(ref_type), encode_segment(ref_id))
}

impl PodioClient {
    /// Adds a comment to an object and returns the created comment.
    pub async fn create_comment(&self, ref_type: &str, ref_id: &str, text: &str) -> Result<Comment> {
        self.post(&comment_path(ref_type, ref_id), &CreateCommentRequest { value: text })
            .await
    }

    /// Lists the comments on an object.
    pub async fn get_comments(&self, ref_type: &str, ref_id: &str) -> Result<Vec<Comment>> {
        self.get(&comment_path(ref_type, ref_id)).await
    }
}
