// SPDX-License-Identifier: MPL-2.0
//! `iced_iconlib` resolves named icons from on-disk icon libraries and
//! rasterizes them into tinted RGBA bitmaps for the Iced GUI toolkit.
//!
//! A [`Registry`] maps library names to path templates. Resolution merges
//! the library's defaults with the icon name and per-call overrides, and
//! rendering branches on the source kind: SVGs are rasterized and filled
//! through their coverage mask, pre-rendered rasters are recoloured
//! alpha-preservingly. Every call is stateless; nothing is cached.
//!
//! ```no_run
//! use iced_iconlib::{Registry, RenderOptions};
//!
//! let registry = Registry::builtin("/usr/share/myapp/icons");
//!
//! let names = registry.library_names();
//! let path = registry.resolve("material", "add", &[("style", "outlined")])?;
//! let bitmap = registry.bitmap("material", "wifi_find", &RenderOptions::sized(30, 30), &[])?;
//! # Ok::<(), iced_iconlib::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/iced_iconlib/0.1.0")]

pub mod bitmap;
pub mod config;
pub mod error;
pub mod registry;

pub use bitmap::{IconBitmap, RenderOptions, DEFAULT_ICON_SIZE};
pub use config::RegistryConfig;
pub use error::{Error, Result};
pub use registry::{LibrarySpec, Registry};
