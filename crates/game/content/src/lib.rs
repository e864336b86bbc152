//! Data-driven arena content and loaders.
//!
//! This crate reads static content from RON/TOML data files:
//! - Item catalogs (RON)
//! - Floor boss definitions (RON)
//! - Game configuration (TOML)
//!
//! Raw records are validated into a [`mech_core::Catalog`] before the runtime
//! sees them, so a broken file stops startup instead of a running arena.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BossLoader, ConfigLoader, ContentFactory, ItemLoader, LoadResult};
