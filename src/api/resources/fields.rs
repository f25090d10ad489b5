//
//  podio
//  api/resources/fields.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Item fields and their values.
//!
//! The wire format of a field value depends on the field type: a text field
//! carries a string, a date field carries `start`/`end` keys, an app
//! reference carries a nested item. [`Value`] keeps all of that untyped, so
//! decoding an item never fails because of an unfamiliar field type.
//!
//! Typed access is a separate step: [`FieldValue::decode`] reads a [`Value`]
//! according to the field's declared type.
//!
//! # Example
//!
//! ```rust
//! use podio::api::{Field, FieldValue};
//!
//! let field: Field = serde_json::from_str(r#"{
//!     "field_id": 1, "external_id": "title", "type": "text", "label": "Title",
//!     "values": [{"value": "Hello"}]
//! }"#).unwrap();
//!
//! assert_eq!(field.typed_values().unwrap(), vec![FieldValue::Text("Hello".to_string())]);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};

use crate::api::common::Result;

/// Date-time layout used by Podio date fields.
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Date-only layout used by all-day date fields.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A field on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Numeric field id.
    pub field_id: u64,

    /// Stable, human-chosen identifier, e.g. `title`.
    #[serde(default)]
    pub external_id: String,

    /// Declared field type, e.g. `text`, `number`, `date`, `app`.
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Display label.
    #[serde(default)]
    pub label: String,

    /// Values in the order the API returned them.
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Field {
    /// Decodes every value according to this field's declared type.
    ///
    /// # Errors
    ///
    /// Returns [`PodioError::Decode`](crate::PodioError::Decode) if a value
    /// does not have the shape its field type requires.
    pub fn typed_values(&self) -> Result<Vec<FieldValue>> {
        self.values
            .iter()
            .map(|v| FieldValue::decode(&self.kind, v))
            .collect()
    }
}

/// A loosely-typed field value.
///
/// `value` holds the `value` key as-is; every other key (date fields use
/// `start`, `end`, `start_date`, ...) is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
    /// The `value` key, `null` when absent.
    #[serde(default)]
    pub value: serde_json::Value,

    /// All sibling keys.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A field value decoded according to its field type.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// `text` fields.
    Text(String),

    /// `number`, `money` and `progress` fields.
    Number(f64),

    /// `date` fields. All-day dates have a midnight time.
    Date {
        /// Start of the range.
        start: Option<NaiveDateTime>,
        /// End of the range, if any.
        end: Option<NaiveDateTime>,
    },

    /// `app` fields: a reference to another item.
    Reference {
        /// Referenced item id.
        item_id: u64,
        /// Referenced item title.
        title: String,
    },

    /// `category` fields: one selected option.
    Category {
        /// Option id.
        id: u64,
        /// Option label.
        text: String,
    },

    /// Any other field type, left untyped.
    Raw(serde_json::Value),
}

#[derive(Deserialize)]
struct ItemRef {
    item_id: u64,
    #[serde(default)]
    title: String,
}

#[derive(Deserialize)]
struct CategoryOption {
    id: u64,
    #[serde(default)]
    text: String,
}

impl FieldValue {
    /// Decodes `value` as a value of a field with declared type `field_type`.
    pub fn decode(field_type: &str, value: &Value) -> Result<Self> {
        let decoded = match field_type {
            "text" => match &value.value {
                serde_json::Value::String(s) => Self::Text(s.clone()),
                other => return Err(invalid(field_type, other)),
            },
            "number" | "money" | "progress" => Self::Number(decode_number(field_type, &value.value)?),
            "date" => Self::Date {
                start: decode_date(value.extra.get("start"))?,
                end: decode_date(value.extra.get("end"))?,
            },
            "app" => {
                let item: ItemRef = serde_json::from_value(value.value.clone())?;
                Self::Reference {
                    item_id: item.item_id,
                    title: item.title,
                }
            }
            "category" => {
                let option: CategoryOption = serde_json::from_value(value.value.clone())?;
                Self::Category {
                    id: option.id,
                    text: option.text,
                }
            }
            _ => Self::Raw(value.value.clone()),
        };
        Ok(decoded)
    }
}

fn invalid(field_type: &str, value: &serde_json::Value) -> crate::PodioError {
    serde_json::Error::custom(format!("invalid value for '{}' field: {}", field_type, value)).into()
}

// Podio sends numbers as strings ("12.5000") on most field types.
fn decode_number(field_type: &str, value: &serde_json::Value) -> Result<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64().ok_or_else(|| invalid(field_type, value)),
        serde_json::Value::String(s) => s.trim().parse().map_err(|_| invalid(field_type, value)),
        other => Err(invalid(field_type, other)),
    }
}

fn decode_date(raw: Option<&serde_json::Value>) -> Result<Option<NaiveDateTime>> {
    let text = match raw {
        None | Some(serde_json::Value::Null) => return Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => return Ok(None),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => return Err(invalid("date", other)),
    };

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        return Ok(Some(dt));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Some)
        .ok_or_else(|| invalid("date", &serde_json::Value::String(text.clone())))
}
