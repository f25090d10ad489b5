//
//  podio
//  cli/resources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource commands
//!
//! One noun per Podio resource, each with a handful of verbs. Every command
//! prints the API response as pretty JSON.
//!
//! ## Examples
//!
//! ```bash
//! podio org list
//! podio space list 1234
//! podio item create 42 --field title=Hello --field amount=12
//! podio comment add item 99 "Looks good"
//! podio file download 555 -o report.pdf
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use serde_json::Value;

use crate::api::{FieldValues, ItemFilter};

use super::{print_json, GlobalOptions};

#[derive(Args, Debug)]
pub struct OrgCommand {
    #[command(subcommand)]
    pub command: OrgSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum OrgSubcommand {
    /// List organizations
    #[command(visible_alias = "ls")]
    List,

    /// View an organization by id or URL label
    View { org: String },
}

impl OrgCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            OrgSubcommand::List => print_json(&client.get_organizations().await?),
            OrgSubcommand::View { org } => {
                let org = match org.parse::<u64>() {
                    Ok(id) => client.get_organization(id).await?,
                    Err(_) => client.get_organization_by_slug(org).await?,
                };
                print_json(&org)
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct SpaceCommand {
    #[command(subcommand)]
    pub command: SpaceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SpaceSubcommand {
    /// List spaces in an organization
    #[command(visible_alias = "ls")]
    List { org_id: u64 },

    /// View a space by id, or by URL label with --org
    View {
        space: String,

        #[arg(long)]
        org: Option<u64>,
    },
}

impl SpaceCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            SpaceSubcommand::List { org_id } => print_json(&client.get_spaces(*org_id).await?),
            SpaceSubcommand::View { space, org } => {
                let space = match (org, space.parse::<u64>()) {
                    (Some(org_id), _) => client.get_space_by_org_and_slug(*org_id, space).await?,
                    (None, Ok(id)) => client.get_space(id).await?,
                    (None, Err(_)) => bail!("'{}' is not a space id; pass --org to look up by URL label", space),
                };
                print_json(&space)
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct AppCommand {
    #[command(subcommand)]
    pub command: AppSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// List apps in a space
    #[command(visible_alias = "ls")]
    List { space_id: u64 },

    /// View an app by id, or by URL label with --space
    View {
        app: String,

        #[arg(long)]
        space: Option<u64>,
    },
}

impl AppCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            AppSubcommand::List { space_id } => print_json(&client.get_apps(*space_id).await?),
            AppSubcommand::View { app, space } => {
                let app = match (space, app.parse::<u64>()) {
                    (Some(space_id), _) => client.get_app_by_space_and_slug(*space_id, app).await?,
                    (None, Ok(id)) => client.get_app(id).await?,
                    (None, Err(_)) => bail!("'{}' is not an app id; pass --space to look up by URL label", app),
                };
                print_json(&app)
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct ItemCommand {
    #[command(subcommand)]
    pub command: ItemSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ItemSubcommand {
    /// List one page of items in an app
    #[command(visible_alias = "ls")]
    List {
        app_id: u64,

        #[arg(long, short = 'l')]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },

    /// View an item by id
    View { item_id: u64 },

    /// Create an item from field=value pairs
    Create {
        app_id: u64,

        /// Field value as external_id=value; JSON values are parsed
        #[arg(long = "field", short = 'F', action = clap::ArgAction::Append)]
        fields: Vec<String>,

        #[arg(long)]
        external_id: Option<String>,
    },

    /// Update an item's fields from field=value pairs
    Update {
        item_id: u64,

        #[arg(long = "field", short = 'F', action = clap::ArgAction::Append)]
        fields: Vec<String>,
    },

    /// Delete an item
    Delete { item_id: u64 },
}

impl ItemCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            ItemSubcommand::List { app_id, limit, offset } => {
                let list = if limit.is_none() && offset.is_none() {
                    client.get_items(*app_id).await?
                } else {
                    let filter = ItemFilter {
                        limit: *limit,
                        offset: *offset,
                        ..ItemFilter::default()
                    };
                    client.filter_items(*app_id, &filter).await?
                };
                print_json(&list)
            }
            ItemSubcommand::View { item_id } => print_json(&client.get_item(*item_id).await?),
            ItemSubcommand::Create {
                app_id,
                fields,
                external_id,
            } => {
                let fields = parse_fields(fields)?;
                let item_id = client
                    .create_item(*app_id, external_id.as_deref(), &fields)
                    .await?;
                print_json(&serde_json::json!({ "item_id": item_id }))
            }
            ItemSubcommand::Update { item_id, fields } => {
                client.update_item(*item_id, &parse_fields(fields)?).await?;
                tracing::info!("Updated item {}", item_id);
                Ok(())
            }
            ItemSubcommand::Delete { item_id } => {
                client.delete_item(*item_id).await?;
                tracing::info!("Deleted item {}", item_id);
                Ok(())
            }
        }
    }
}

#[derive(Args, Debug)]
pub struct CommentCommand {
    #[command(subcommand)]
    pub command: CommentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CommentSubcommand {
    /// List comments on an object
    #[command(visible_alias = "ls")]
    List { ref_type: String, ref_id: String },

    /// Add a comment to an object
    Add {
        ref_type: String,
        ref_id: String,
        text: String,
    },
}

impl CommentCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            CommentSubcommand::List { ref_type, ref_id } => {
                print_json(&client.get_comments(ref_type, ref_id).await?)
            }
            CommentSubcommand::Add {
                ref_type,
                ref_id,
                text,
            } => print_json(&client.create_comment(ref_type, ref_id, text).await?),
        }
    }
}

#[derive(Args, Debug)]
pub struct FileCommand {
    #[command(subcommand)]
    pub command: FileSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum FileSubcommand {
    /// View file metadata
    View { file_id: u64 },

    /// Download a file's contents
    Download {
        file_id: u64,

        /// Output path (defaults to the file's name)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Upload a file, optionally attaching it to an object
    Upload {
        path: PathBuf,

        /// Attach to an object, as ref_type:ref_id (e.g. item:99)
        #[arg(long)]
        attach: Option<String>,
    },

    /// Delete a file
    Delete { file_id: u64 },
}

impl FileCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        match &self.command {
            FileSubcommand::View { file_id } => print_json(&client.get_file(*file_id).await?),
            FileSubcommand::Download { file_id, output } => {
                let file = client.get_file(*file_id).await?;
                let output = download_path(output.as_deref(), &file.name)?;
                let contents = client.download_file(&file.link).await?;
                std::fs::write(&output, &contents)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                tracing::info!("Wrote {} bytes to {}", contents.len(), output.display());
                Ok(())
            }
            FileSubcommand::Upload { path, attach } => {
                let name = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .context("Upload path has no file name")?;
                let contents = std::fs::read(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let file = client.upload_file(name, contents).await?;

                if let Some(target) = attach {
                    let (ref_type, ref_id) = parse_reference(target)?;
                    client.attach_file(file.id, &ref_type, ref_id).await?;
                }
                print_json(&file)
            }
            FileSubcommand::Delete { file_id } => {
                client.delete_file(*file_id).await?;
                tracing::info!("Deleted file {}", file_id);
                Ok(())
            }
        }
    }
}

/// Parses `key=value` pairs; values that parse as JSON are kept as JSON,
/// everything else becomes a string.
fn parse_fields(pairs: &[String]) -> Result<FieldValues> {
    let mut fields = FieldValues::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .with_context(|| format!("Invalid field format: {}. Expected key=value", pair))?;
        let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        fields.insert(key.trim().to_string(), value);
    }
    Ok(fields)
}

/// Resolves where a download is written. Without an explicit path the file
/// lands in the working directory under the last component of its name.
fn download_path(output: Option<&Path>, name: &str) -> Result<PathBuf> {
    if let Some(output) = output {
        return Ok(output.to_path_buf());
    }
    match Path::new(name).file_name() {
        Some(base) => Ok(PathBuf::from(base)),
        None => bail!("Cannot derive a local file name from '{}'; pass -o", name),
    }
}

/// Parses `ref_type:ref_id`.
fn parse_reference(target: &str) -> Result<(String, u64)> {
    let (ref_type, ref_id) = target
        .split_once(':')
        .with_context(|| format!("Invalid reference: {}. Expected ref_type:ref_id", target))?;
    let ref_id = ref_id
        .parse()
        .with_context(|| format!("Invalid reference id: {}", ref_id))?;
    Ok((ref_type.to_string(), ref_id))
}
