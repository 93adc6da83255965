// SPDX-License-Identifier: MPL-2.0
//! Optional TOML-backed registry configuration.
//!
//! The built-in library table covers the common case; applications that
//! ship their own icon sets can describe them in a `libraries.toml` file
//! instead and build a [`Registry`] from it.
//!
//! # Examples
//!
//! ```no_run
//! use iced_iconlib::config::{self, RegistryConfig};
//! use iced_iconlib::Registry;
//!
//! let config = config::load().unwrap_or_default();
//! let registry = Registry::from_config(config, "/usr/share/myapp/icons");
//! ```

use crate::error::Result;
use crate::registry::{LibrarySpec, Registry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "libraries.toml";
const APP_NAME: &str = "IcedIconlib";

/// On-disk description of a registry: an optional icon root plus zero or
/// more library definitions. An empty `libraries` table means "use the
/// built-in set".
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    pub root: Option<PathBuf>,
    #[serde(default)]
    pub libraries: BTreeMap<String, LibrarySpec>,
}

impl Registry {
    /// Builds a registry from a config, falling back to `fallback_root`
    /// when the config does not pin a root and to the built-in library
    /// table when it defines no libraries.
    #[must_use]
    pub fn from_config(config: RegistryConfig, fallback_root: impl Into<PathBuf>) -> Self {
        let root = config.root.unwrap_or_else(|| fallback_root.into());
        if config.libraries.is_empty() {
            Self::builtin(root)
        } else {
            Self::new(root, config.libraries)
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the registry config from the user's config directory, or returns
/// the default (empty) config when no file exists.
pub fn load() -> Result<RegistryConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(RegistryConfig::default())
}

pub fn load_from_path(path: &Path) -> Result<RegistryConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &RegistryConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
