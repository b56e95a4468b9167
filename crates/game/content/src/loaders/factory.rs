//! Content factory for building a playable content set from data files.

use std::path::{Path, PathBuf};

use phrase_core::{Catalog, GameConfig, GameSession, PuzzlePool};

use crate::catalog::default_catalog;
use crate::loaders::{CatalogLoader, ConfigLoader, LayoutLoader, LoadResult, PuzzleLoader};
use crate::puzzles::builtin_pool;

/// Validated config, corpus and catalog ready to start a session.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: GameConfig,
    pub pool: PuzzlePool,
    pub catalog: Catalog,
}

impl GameContent {
    /// Shipped rules, corpus and shop.
    pub fn builtin() -> LoadResult<Self> {
        let config = GameConfig::default();
        let pool = builtin_pool(&config)?;
        let catalog = default_catalog(&config)?;
        Ok(Self {
            config,
            pool,
            catalog,
        })
    }

    pub fn into_session(self, seed: u64) -> GameSession {
        GameSession::new(self.config, self.pool, self.catalog, seed)
    }
}

/// Content factory that loads game content from a data directory.
///
/// Every file is optional; a missing file falls back to the built-in content.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    # rule tables
/// ├── puzzles.ron    # puzzle corpus
/// ├── catalog.ron    # explicit shop entries, or
/// └── shop.toml      # slot layout the shop is generated from
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn existing(&self, name: &str) -> Option<PathBuf> {
        let path = self.data_dir.join(name);
        if path.is_file() {
            Some(path)
        } else {
            tracing::debug!(path = %path.display(), "content file not found, using built-in");
            None
        }
    }

    /// Load rule tables from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        match self.existing("config.toml") {
            Some(path) => ConfigLoader::load(&path),
            None => Ok(GameConfig::default()),
        }
    }

    /// Load and score the corpus from `puzzles.ron`.
    pub fn load_pool(&self, config: &GameConfig) -> LoadResult<PuzzlePool> {
        match self.existing("puzzles.ron") {
            Some(path) => PuzzleLoader::load_pool(&path, config),
            None => Ok(builtin_pool(config)?),
        }
    }

    /// Load the shop from `catalog.ron`, else generate it from `shop.toml`.
    pub fn load_catalog(&self, config: &GameConfig) -> LoadResult<Catalog> {
        if let Some(path) = self.existing("catalog.ron") {
            return CatalogLoader::load(&path);
        }
        match self.existing("shop.toml") {
            Some(path) => LayoutLoader::load_catalog(&path, config),
            None => Ok(default_catalog(config)?),
        }
    }

    /// Load everything.
    pub fn load(&self) -> LoadResult<GameContent> {
        let config = self.load_config()?;
        let pool = self.load_pool(&config)?;
        let catalog = self.load_catalog(&config)?;

        tracing::info!(
            data_dir = %self.data_dir.display(),
            puzzles = pool.len(),
            catalog_entries = catalog.entries().len(),
            "content loaded"
        );
        Ok(GameContent {
            config,
            pool,
            catalog,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
