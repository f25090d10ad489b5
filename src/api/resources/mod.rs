//
//  podio
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Podio REST API resources.
//!
//! Each submodule holds the records for one resource and the
//! [`PodioClient`](crate::api::PodioClient) methods that fetch or change them.
//!
//! # Module Organization
//!
//! - [`organizations`] - Organizations the user belongs to
//! - [`spaces`] - Workspaces inside an organization
//! - [`apps`] - Apps inside a space
//! - [`items`] - Items inside an app, and item filtering
//! - [`fields`] - Item fields and typed access to their values
//! - [`files`] - File metadata, upload, download, attach
//! - [`comments`] - Comments on items and other objects
//!
//! # Hierarchy
//!
//! ```text
//! Organization
//! └── Space
//!     └── App
//!         └── Item
//!             ├── Fields → Values
//!             ├── Files
//!             └── Comments
//! ```
//!
//! The hierarchy only exists in the API paths; nothing is enforced client-side.

pub mod apps;
pub mod comments;
pub mod fields;
pub mod files;
pub mod items;
pub mod organizations;
pub mod spaces;

pub use apps::App;
pub use comments::Comment;
pub use fields::{Field, FieldValue, Value};
pub use files::File;
pub use items::{FieldValues, Item, ItemFilter, ItemList};
pub use organizations::Organization;
pub use spaces::Space;
