// SPDX-License-Identifier: MPL-2.0
//! The icon library registry: a read-only table mapping library names to
//! path templates, and path resolution against an on-disk icon root.
//!
//! A resolved path is built by merging the library's default placeholder
//! values with the icon name and any caller overrides (later wins),
//! expanding the template, and joining the result to `root/<library>/`.
//! Existence is checked at resolution time; nothing is cached.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A named icon collection: a relative path template plus the default
/// placeholder values used when the caller supplies none.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySpec {
    /// Template for the path below `root/<library>/`, e.g.
    /// `"{icon}/{style}.{ext}"`. The `icon` placeholder is always bound to
    /// the requested icon name.
    pub path_template: String,

    /// Default placeholder values, overridable per call.
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

impl LibrarySpec {
    #[must_use]
    pub fn new(path_template: impl Into<String>) -> Self {
        Self {
            path_template: path_template.into(),
            defaults: BTreeMap::new(),
        }
    }

    /// Adds a default placeholder value (builder style).
    #[must_use]
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }
}

/// Registry of icon libraries below a common root directory.
///
/// Immutable once constructed. The `BTreeMap` keeps library names in
/// sorted order, which [`Registry::library_names`] relies on.
#[derive(Debug, Clone)]
pub struct Registry {
    root: PathBuf,
    libraries: BTreeMap<String, LibrarySpec>,
}

impl Registry {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, libraries: BTreeMap<String, LibrarySpec>) -> Self {
        Self {
            root: root.into(),
            libraries,
        }
    }

    /// The built-in library table: `material` (SVG sources) and `internal`
    /// (pre-rendered PNG sources), both laid out as
    /// `<library>/<icon>/<style>.<ext>`.
    #[must_use]
    pub fn builtin(root: impl Into<PathBuf>) -> Self {
        let mut libraries = BTreeMap::new();
        libraries.insert(
            "material".to_string(),
            LibrarySpec::new("{icon}/{style}.{ext}")
                .with_default("style", "regular")
                .with_default("ext", "svg"),
        );
        libraries.insert(
            "internal".to_string(),
            LibrarySpec::new("{icon}/{style}.{ext}")
                .with_default("style", "regular")
                .with_default("ext", "png"),
        );
        Self::new(root, libraries)
    }

    /// Root directory the library subdirectories live under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the registered library names in sorted order.
    pub fn library_names(&self) -> Vec<String> {
        self.libraries.keys().cloned().collect()
    }

    /// Resolves the on-disk path of an icon file.
    ///
    /// Substitutions are merged in order: library defaults, then the
    /// `icon` placeholder, then `overrides` (later wins). Override keys
    /// that the template never references are ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::LibraryNotFound`] if `library` is not registered.
    /// - [`Error::Template`] if the template references a placeholder with
    ///   no value, or is malformed.
    /// - [`Error::IconNotFound`] if the formatted path does not exist.
    pub fn resolve(&self, library: &str, icon: &str, overrides: &[(&str, &str)]) -> Result<PathBuf> {
        let spec = self
            .libraries
            .get(library)
            .ok_or_else(|| Error::LibraryNotFound {
                library: library.to_string(),
                available: self.library_names(),
            })?;

        let mut substitutions = spec.defaults.clone();
        substitutions.insert("icon".to_string(), icon.to_string());
        for (key, value) in overrides {
            substitutions.insert((*key).to_string(), (*value).to_string());
        }

        let relative = expand_template(&spec.path_template, &substitutions)?;
        let path = self.root.join(library).join(relative);

        if !path.exists() {
            return Err(Error::IconNotFound(path));
        }

        Ok(path)
    }
}

/// Expands `{name}` placeholders in `template` from `values`.
/// `{{` and `}}` are literal braces.
fn expand_template(template: &str, values: &BTreeMap<String, String>) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => key.push(c),
                        None => {
                            return Err(Error::Template(format!(
                                "unterminated placeholder in '{}'",
                                template
                            )))
                        }
                    }
                }
                match values.get(&key) {
                    Some(value) => out.push_str(value),
                    None => {
                        return Err(Error::Template(format!(
                            "no value for placeholder '{}' in '{}'",
                            key, template
                        )))
                    }
                }
            }
            '}' => {
                return Err(Error::Template(format!(
                    "unmatched '}}' in '{}'",
                    template
                )))
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}
