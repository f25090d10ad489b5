//
//  podio
//  api/resources/items.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Item API types and operations.
//!
//! Items are the records stored in an app. Each item carries its fields and
//! the files attached to it.
//!
//! # Writing Items
//!
//! Field values are sent as a map from field external id (or numeric id) to
//! value, wrapped in a `{"fields": ...}` envelope:
//!
//! ```rust,no_run
//! use podio::api::{FieldValues, PodioClient};
//! use serde_json::json;
//!
//! # async fn example(client: &PodioClient) -> podio::Result<()> {
//! let mut fields = FieldValues::new();
//! fields.insert("title".to_string(), json!("Hello"));
//!
//! let item_id = client.create_item(42, None, &fields).await?;
//! client.update_item(item_id, &fields).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - [`PodioClient::get_items`] and [`PodioClient::filter_items`] return a
//!   single page; there is no cursor handling.

use serde::{Deserialize, Serialize};

use super::fields::Field;
use super::files::File;
use crate::api::client::{encode_segment, PodioClient, RequestBody};
use crate::api::common::Result;

/// Field values keyed by field external id or field id.
pub type FieldValues = serde_json::Map<String, serde_json::Value>;

/// Represents a Podio item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Globally unique item id.
    #[serde(rename = "item_id")]
    pub id: u64,

    /// Sequential id within the app.
    #[serde(default)]
    pub app_item_id: u64,

    /// App item id with the app's prefix applied, e.g. `LEAD-12`.
    #[serde(rename = "app_item_id_formatted", default)]
    pub formatted_app_item_id: String,

    /// Item title.
    #[serde(default)]
    pub title: String,

    /// Attached files, in API order.
    #[serde(default)]
    pub files: Vec<File>,

    /// Fields, in API order.
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Item {
    /// Looks up a field by its external id.
    pub fn field(&self, external_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.external_id == external_id)
    }
}

/// One page of items returned by a filter call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemList {
    /// Number of items matching the filter.
    #[serde(default)]
    pub filtered: u64,

    /// Number of items in the app.
    #[serde(default)]
    pub total: u64,

    /// Items on this page.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Options for [`PodioClient::filter_items`].
///
/// Unset options are omitted from the request body and the server defaults apply.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ItemFilter {
    /// Maximum number of items on the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,

    /// Sort key, e.g. `created_on` or a field id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// Sort descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_desc: Option<bool>,

    /// Filter conditions keyed by field, passed through unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<serde_json::Value>,
}

/// Body of a create-item request.
#[derive(Serialize)]
struct CreateItemRequest<'a> {
    fields: &'a FieldValues,
    #[serde(skip_serializing_if = "Option::is_none")]
    external_id: Option<&'a str>,
}

/// Body of an update-item request.
#[derive(Serialize)]
struct UpdateItemRequest<'a> {
    fields: &'a FieldValues,
}

#[derive(Deserialize)]
struct CreateItemResponse {
    item_id: u64,
}

const ITEM_FILTER_FIELDS: &str = "fields=items.fields(files)";

impl PodioClient {
    /// Fetches the first page of items in an app, with their files.
    pub async fn get_items(&self, app_id: u64) -> Result<ItemList> {
        let path = format!("/item/app/{}/filter?{}", app_id, ITEM_FILTER_FIELDS);
        self.request(reqwest::Method::POST, &path, None, None).await
    }

    /// Fetches one page of items in an app matching `filter`.
    pub async fn filter_items(&self, app_id: u64, filter: &ItemFilter) -> Result<ItemList> {
        let path = format!("/item/app/{}/filter?{}", app_id, ITEM_FILTER_FIELDS);
        self.post(&path, filter).await
    }

    /// Fetches one item by id, with its files.
    pub async fn get_item(&self, item_id: u64) -> Result<Item> {
        self.get(&format!("/item/{}?fields=files", item_id)).await
    }

    /// Fetches an item by its formatted app item id, e.g. `LEAD-12`.
    pub async fn get_item_by_app_item_id(
        &self,
        app_id: u64,
        formatted_app_item_id: &str,
    ) -> Result<Item> {
        self.get(&format!(
            "/app/{}/item/{}",
            app_id,
            encode_segment(formatted_app_item_id)
        ))
        .await
    }

    /// Fetches an item by the external id it was created with.
    pub async fn get_item_by_external_id(&self, app_id: u64, external_id: &str) -> Result<Item> {
        self.get(&format!(
            "/item/app/{}/external_id/{}",
            app_id,
            encode_segment(external_id)
        ))
        .await
    }

    /// Creates an item and returns its id.
    ///
    /// `external_id` is only sent when given.
    pub async fn create_item(
        &self,
        app_id: u64,
        external_id: Option<&str>,
        fields: &FieldValues,
    ) -> Result<u64> {
        let body = CreateItemRequest { fields, external_id };
        let response: CreateItemResponse = self
            .request(
                reqwest::Method::POST,
                &format!("/item/app/{}", app_id),
                None,
                Some(RequestBody::json(&body)?),
            )
            .await?;
        Ok(response.item_id)
    }

    /// Replaces the given field values on an item.
    pub async fn update_item(&self, item_id: u64, fields: &FieldValues) -> Result<()> {
        self.put_empty(&format!("/item/{}", item_id), &UpdateItemRequest { fields })
            .await
    }

    /// Deletes an item.
    pub async fn delete_item(&self, item_id: u64) -> Result<()> {
        self.delete(&format!("/item/{}", item_id)).await
    }
}
