//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for data files:
//! - Item catalogs (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime item factory and never appears in
//! player records except as copies inside created items.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult};
