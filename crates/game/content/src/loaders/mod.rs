//! Content loaders for reading arena data from files.
//!
//! RON files are expected to start with `#![enable(implicit_some)]` so
//! optional record fields can be written without `Some(..)`.

pub mod boss;
pub mod config;
pub mod factory;
pub mod item;

pub use boss::BossLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
