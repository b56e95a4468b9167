//! Session state: everything that changes while the game is played.
//!
//! The session owns the ledger, streak and current round explicitly; there is
//! no ambient global. Hosts read this state freely but mutate it only through
//! [`crate::engine::GameEngine`].
mod ledger;
mod round;
mod streak;

pub use ledger::EconomyLedger;
pub use round::{GuessError, RoundState};
pub use streak::StreakState;

use crate::env::DrawState;

/// Round lifecycle.
///
/// `Idle → RoundActive → (RoundWon | RoundLost) → RoundActive → ...`
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    Idle,
    RoundActive,
    RoundWon,
    RoundLost,
}

impl RoundPhase {
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::RoundWon | Self::RoundLost)
    }

    /// Whether a new round may be started from this phase.
    pub const fn can_start_round(&self) -> bool {
        !matches!(self, Self::RoundActive)
    }
}

/// Report produced once a round reaches a terminal phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary {
    pub won: bool,
    pub revealed_phrase: String,
    pub category: String,
    pub streak_before: u32,
    pub streak_after: u32,
    pub money_earned: u64,
}

/// Canonical state of one play session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub ledger: EconomyLedger,
    pub streak: StreakState,
    pub phase: RoundPhase,
    /// Present from the first round on; replaced when the next round starts.
    pub round: Option<RoundState>,
    /// Armed by the free-guess consumable; survives wins, cleared on a loss.
    pub free_guess: bool,
    pub draws: DrawState,
    pub last_summary: Option<RoundSummary>,
}

impl SessionState {
    pub fn new(seed: u64) -> Self {
        Self {
            draws: DrawState::new(seed),
            ..Self::default()
        }
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }
}
