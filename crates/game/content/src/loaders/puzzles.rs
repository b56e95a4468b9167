//! Puzzle corpus loader.

use std::path::Path;

use phrase_core::{GameConfig, Puzzle, PuzzlePool};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Puzzle corpus structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleFile {
    pub puzzles: Vec<Puzzle>,
}

/// Loader for the puzzle corpus from RON files.
pub struct PuzzleLoader;

impl PuzzleLoader {
    /// Load the raw puzzle list from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<Puzzle>> {
        let content = read_file(path)?;
        let file: PuzzleFile = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse puzzle RON: {}", e))?;

        Ok(file.puzzles)
    }

    /// Load and score the corpus against `config`.
    pub fn load_pool(path: &Path, config: &GameConfig) -> LoadResult<PuzzlePool> {
        let puzzles = Self::load(path)?;
        PuzzlePool::new(puzzles, config)
            .map_err(|e| anyhow::anyhow!("Invalid puzzle corpus {}: {}", path.display(), e))
    }
}
