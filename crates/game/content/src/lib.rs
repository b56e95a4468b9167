//! Data-driven content definitions and loaders.
//!
//! This crate houses the shipped game content and provides loaders for
//! RON/TOML data files:
//! - Puzzle corpus (built in, or data-driven via RON)
//! - Shop catalog (generated from a slot layout, or listed explicitly in RON)
//! - Rule tables (data-driven via TOML)
//!
//! Content is consumed through `phrase-core` types and never appears in
//! session state.

pub mod catalog;
pub mod puzzles;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogLayout, ConsumableCosts, SlotLayout, default_catalog, generate_catalog};
pub use puzzles::{BUILTIN_PUZZLES, builtin_pool, builtin_puzzles};

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, GameContent, LayoutLoader, PuzzleLoader,
};
