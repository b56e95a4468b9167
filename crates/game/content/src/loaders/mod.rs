//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into `phrase-core` types and validates
//! it the same way the built-in content is validated.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod puzzles;

pub use catalog::{CatalogFile, CatalogLoader, LayoutLoader};
pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use puzzles::{PuzzleFile, PuzzleLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
