//! Results reported back to the host for each accepted intent.

use crate::catalog::{EffectOutcome, EntryId, EntryKind};
use crate::letter::Letter;

/// A freshly started round, as announced to the player.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundStart {
    pub category: String,
    pub difficulty: f64,
    pub max_strikes: u32,
    /// Letters guessed by owned auto-reveal upgrades, in slot order.
    pub auto_revealed: Vec<Letter>,
    /// Auto-reveals uncovered the whole phrase and the round is already won.
    pub solved: bool,
}

/// What kept a wrong guess from costing a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum StrikeAbsorber {
    BonusStrike,
    FreeGuess,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: Letter,
    pub matched: bool,
    pub strike_charged: bool,
    pub absorbed_by: Option<StrikeAbsorber>,
    pub solved: bool,
    pub game_over: bool,
}

impl GuessOutcome {
    pub fn round_ended(&self) -> bool {
        self.solved || self.game_over
    }
}

/// Accepted purchase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub id: EntryId,
    pub kind: EntryKind,
    pub cost: u64,
    /// Balance after the charge.
    pub balance: u64,
    /// Set for consumables only.
    pub outcome: Option<EffectOutcome>,
    /// A reveal completed the phrase.
    pub round_won: bool,
}
