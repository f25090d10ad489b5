//
//  podio
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O Module
//!
//! Small file helpers used by [`Config`](super::Config) to read and write the
//! TOML configuration file.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use podio::config::{config_exists, read_config_file, write_config_file};
//!
//! let path = Path::new("/tmp/podio/config.toml");
//! if config_exists(path) {
//!     println!("{}", read_config_file(path)?);
//! } else {
//!     write_config_file(path, "[api]\ntimeout_secs = 30\n")?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the contents of a configuration file.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes a configuration file, creating any missing parent directories.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Returns `true` if a configuration file exists at `path`.
///
/// Directories are not configuration files.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}
