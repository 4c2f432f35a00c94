//! Content loaders for reading session data from files.
//!
//! Maps are plain text with a `cols rows` header; configuration is TOML.

pub mod config;
pub mod map;

pub use config::{ConfigLoader, SessionConfig};
pub use map::MapLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
