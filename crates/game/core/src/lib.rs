//! Deterministic rules for the phrase-guessing game.
//!
//! `phrase-core` defines the canonical rules (difficulty scoring, puzzle
//! selection, rounds, the economy ledger and the shop catalog) and exposes
//! pure APIs that hosts drive one intent at a time. All state mutation flows
//! through [`engine::GameEngine`]; [`session::GameSession`] bundles it with
//! owned content for clients.
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod letter;
pub mod puzzle;
pub mod scoring;
pub mod session;
pub mod state;

pub use catalog::{
    Catalog, CatalogEntry, CatalogError, ConsumableDef, ConsumableEffect, EffectOutcome, EntryId,
    EntryKind, PurchaseError, UpgradeDef, UpgradeEffect,
};
pub use config::{ConfigError, DifficultyTier, GameConfig, PayoutRules};
pub use engine::{GameEngine, GuessOutcome, PurchaseReceipt, RoundError, RoundStart, StrikeAbsorber};
pub use env::{GameEnv, PcgRng, RngOracle};
pub use error::{ErrorSeverity, GameError};
pub use letter::{Letter, LetterClass, LetterSet};
pub use puzzle::{PoolError, Puzzle, PuzzlePool, ScoredPuzzle};
pub use scoring::score;
pub use session::{GameSession, SessionView, ShopEntry};
pub use state::{
    EconomyLedger, GuessError, RoundPhase, RoundState, RoundSummary, SessionState, StreakState,
};
