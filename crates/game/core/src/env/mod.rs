//! Read-only content the engine consults.
//!
//! The [`GameEnv`] aggregate bundles the rule tables, puzzle corpus, shop
//! catalog and RNG so the engine can reach everything it needs without
//! owning any of it.
mod rng;

pub use rng::{DrawPurpose, DrawState, PcgRng, RngOracle, compute_seed};

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::puzzle::PuzzlePool;

/// Aggregates the immutable inputs required by [`crate::engine::GameEngine`].
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    pub config: &'a GameConfig,
    pub pool: &'a PuzzlePool,
    pub catalog: &'a Catalog,
    pub rng: &'a dyn RngOracle,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        config: &'a GameConfig,
        pool: &'a PuzzlePool,
        catalog: &'a Catalog,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            config,
            pool,
            catalog,
            rng,
        }
    }
}

impl core::fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameEnv")
            .field("config", self.config)
            .field("puzzles", &self.pool.len())
            .field("catalog_entries", &self.catalog.entries().len())
            .finish_non_exhaustive()
    }
}
