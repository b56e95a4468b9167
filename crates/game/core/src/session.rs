//! Owned session facade for hosts.
//!
//! [`GameSession`] owns the content and the mutable state together and hands
//! out a short-lived [`GameEngine`] for every intent, so a client only keeps
//! one value around.
use crate::catalog::{Catalog, CatalogEntry, EntryKind, PurchaseError};
use crate::config::GameConfig;
use crate::engine::{GameEngine, GuessOutcome, PurchaseReceipt, RoundError, RoundStart};
use crate::env::{GameEnv, PcgRng};
use crate::letter::LetterSet;
use crate::puzzle::PuzzlePool;
use crate::state::{GuessError, RoundPhase, RoundSummary, SessionState};

/// Shop row as presented to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShopEntry<'a> {
    pub entry: &'a CatalogEntry,
    pub owned: bool,
    /// Could be bought now, ignoring money.
    pub available: bool,
    pub affordable: bool,
}

/// Read-only snapshot for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub phase: RoundPhase,
    /// Phrase with hidden letters as `_`; empty before the first round.
    pub masked_phrase: String,
    pub category: String,
    pub guessed: LetterSet,
    pub strikes: u32,
    pub max_strikes: u32,
    pub bonus_strikes: u32,
    pub free_guess: bool,
    pub money: u64,
    pub streak: u32,
    pub previous_streak: u32,
}

pub struct GameSession {
    config: GameConfig,
    pool: PuzzlePool,
    catalog: Catalog,
    rng: PcgRng,
    state: SessionState,
}

impl GameSession {
    pub fn new(config: GameConfig, pool: PuzzlePool, catalog: Catalog, seed: u64) -> Self {
        tracing::debug!(seed, puzzles = pool.len(), entries = catalog.entries().len(), "new session");
        Self {
            config,
            pool,
            catalog,
            rng: PcgRng,
            state: SessionState::new(seed),
        }
    }

    fn engine(&mut self) -> GameEngine<'_> {
        let env = GameEnv::new(&self.config, &self.pool, &self.catalog, &self.rng);
        GameEngine::new(&mut self.state, env)
    }

    /// Starts the first round, or the next one after a round ended.
    pub fn start_round(&mut self) -> Result<RoundStart, RoundError> {
        self.engine().start_round()
    }

    pub fn start_next_round(&mut self) -> Result<RoundStart, RoundError> {
        self.start_round()
    }

    pub fn submit_guess(&mut self, input: char) -> Result<GuessOutcome, GuessError> {
        self.engine().submit_guess(input)
    }

    pub fn purchase(&mut self, kind: EntryKind, id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        self.engine().purchase(kind, id)
    }

    /// Buys `id` with the kind looked up from the catalog.
    pub fn purchase_by_id(&mut self, id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        let kind = self
            .catalog
            .get(id)
            .map(CatalogEntry::kind)
            .ok_or_else(|| PurchaseError::UnknownEntry(id.to_string()))?;
        self.purchase(kind, id)
    }

    pub fn summary(&self) -> Option<&RoundSummary> {
        if self.state.phase.is_terminal() {
            self.state.last_summary.as_ref()
        } else {
            None
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Visible catalog entries with ownership and affordability.
    pub fn shop(&self) -> Vec<ShopEntry<'_>> {
        let purchased = self.state.ledger.purchased();
        let money = self.state.ledger.money();
        self.catalog
            .visible_entries(purchased)
            .into_iter()
            .map(|entry| ShopEntry {
                entry,
                owned: purchased.contains(entry.id()),
                available: self.catalog.is_available(entry, purchased),
                affordable: entry.cost() <= money,
            })
            .collect()
    }

    pub fn view(&self) -> SessionView {
        let state = &self.state;
        let round = state.round();
        SessionView {
            phase: state.phase,
            masked_phrase: round.map(|r| r.masked_phrase()).unwrap_or_default(),
            category: round.map(|r| r.category().to_string()).unwrap_or_default(),
            guessed: round.map(|r| r.guessed()).unwrap_or_default(),
            strikes: round.map_or(0, |r| r.strike_count()),
            max_strikes: round.map_or(self.config.base_strikes, |r| r.max_strikes()),
            bonus_strikes: round.map_or(0, |r| r.bonus_strikes()),
            free_guess: state.free_guess,
            money: state.ledger.money(),
            streak: state.streak.count,
            previous_streak: state.streak.previous,
        }
    }
}
