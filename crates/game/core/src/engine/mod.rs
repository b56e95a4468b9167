//! Round progression: start, guess, purchase and round-end resolution.
//!
//! The [`GameEngine`] is the only writer of [`SessionState`]. Every entry point
//! runs to completion before returning and either applies its whole effect or
//! rejects the intent without touching state.
mod effects;
mod errors;
mod outcome;

pub use errors::RoundError;
pub use outcome::{GuessOutcome, PurchaseReceipt, RoundStart, StrikeAbsorber};

use crate::catalog::{EntryKind, PurchaseError, purchase_consumable, purchase_upgrade};
use crate::env::GameEnv;
use crate::letter::Letter;
use crate::state::{GuessError, RoundPhase, RoundState, RoundSummary, SessionState};

use effects::{RoundEffects, draw_auto_reveal};

/// Progression controller over a borrowed session.
pub struct GameEngine<'a> {
    state: &'a mut SessionState,
    env: GameEnv<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut SessionState, env: GameEnv<'a>) -> Self {
        Self { state, env }
    }

    /// Strikes available to a round started now: base plus owned capacity upgrades.
    pub fn max_strikes(&self) -> u32 {
        self.env.config.base_strikes + self.env.catalog.extra_strikes(self.state.ledger.purchased())
    }

    /// Selects a puzzle for the current streak and begins a new round.
    ///
    /// Owned auto-reveal upgrades guess their letters silently; these never
    /// charge strikes.
    pub fn start_round(&mut self) -> Result<RoundStart, RoundError> {
        if !self.state.phase.can_start_round() {
            return Err(RoundError::RoundInProgress);
        }

        let env = self.env;
        let max_strikes = self.max_strikes();
        let streak = self.state.streak.count;
        let scored = env
            .pool
            .select(streak, env.config, env.rng, &mut self.state.draws);

        let mut round = RoundState::new(&scored.puzzle, scored.difficulty, max_strikes);
        let mut auto_revealed = Vec::new();
        for slot in env.catalog.auto_reveal_slots(self.state.ledger.purchased()) {
            let Some(letter) = draw_auto_reveal(&round, slot, env.rng, &mut self.state.draws)
            else {
                continue;
            };
            if round.guess(letter).is_ok() {
                tracing::debug!(%letter, guaranteed = slot.guaranteed, "auto-revealed letter");
                auto_revealed.push(letter);
            }
        }

        let solved = round.is_solved();
        let start = RoundStart {
            category: round.category().to_string(),
            difficulty: round.difficulty(),
            max_strikes,
            auto_revealed,
            solved,
        };

        tracing::info!(
            streak,
            category = %start.category,
            difficulty = start.difficulty,
            max_strikes,
            "round started"
        );

        self.state.round = Some(round);
        self.state.phase = RoundPhase::RoundActive;
        self.state.last_summary = None;
        if solved {
            self.finish_round(true);
        }
        Ok(start)
    }

    /// Applies one player keystroke.
    ///
    /// A wrong letter is absorbed by a bonus strike first, then by an armed
    /// free guess, and only otherwise charges a strike.
    pub fn submit_guess(&mut self, input: char) -> Result<GuessOutcome, GuessError> {
        if self.state.phase != RoundPhase::RoundActive {
            return Err(GuessError::RoundNotActive);
        }
        let letter = Letter::from_char(input).ok_or(GuessError::NotALetter(input))?;
        let round = self
            .state
            .round
            .as_mut()
            .ok_or(GuessError::RoundNotActive)?;

        let matched = round.guess(letter)?;
        let mut absorbed_by = None;
        let mut strike_charged = false;
        if !matched {
            if round.absorb_with_bonus() {
                absorbed_by = Some(StrikeAbsorber::BonusStrike);
            } else if self.state.free_guess {
                self.state.free_guess = false;
                absorbed_by = Some(StrikeAbsorber::FreeGuess);
            } else {
                round.add_strike();
                strike_charged = true;
            }
        }

        let solved = round.is_solved();
        let game_over = !solved && round.is_game_over();
        tracing::debug!(
            %letter,
            matched,
            strike_charged,
            ?absorbed_by,
            strikes = round.strike_count(),
            "guess"
        );

        if solved || game_over {
            self.finish_round(solved);
        }

        Ok(GuessOutcome {
            letter,
            matched,
            strike_charged,
            absorbed_by,
            solved,
            game_over,
        })
    }

    /// Buys a catalog entry.
    ///
    /// Upgrades can be bought in any phase and take effect from the next round
    /// on. Consumables need an active round and apply immediately; a reveal
    /// that completes the phrase wins the round.
    pub fn purchase(&mut self, kind: EntryKind, id: &str) -> Result<PurchaseReceipt, PurchaseError> {
        let env = self.env;
        match kind {
            EntryKind::Upgrade => {
                let upgrade = purchase_upgrade(env.catalog, id, &mut self.state.ledger)?;
                Ok(PurchaseReceipt {
                    id: upgrade.id.clone(),
                    kind,
                    cost: upgrade.cost,
                    balance: self.state.ledger.money(),
                    outcome: None,
                    round_won: false,
                })
            }
            EntryKind::Consumable => {
                if self.state.phase != RoundPhase::RoundActive {
                    return Err(PurchaseError::RoundNotActive);
                }
                let state = &mut *self.state;
                let round = state.round.as_mut().ok_or(PurchaseError::RoundNotActive)?;
                let mut effects = RoundEffects {
                    round,
                    free_guess: &mut state.free_guess,
                    draws: &mut state.draws,
                    rng: env.rng,
                    eliminate_count: env.config.eliminate_count,
                };
                let (consumable, outcome) =
                    purchase_consumable(env.catalog, id, &mut state.ledger, &mut effects)?;

                let round_won = state.round.as_ref().is_some_and(RoundState::is_solved);
                let receipt = PurchaseReceipt {
                    id: consumable.id.clone(),
                    kind,
                    cost: consumable.cost,
                    balance: state.ledger.money(),
                    outcome: Some(outcome),
                    round_won,
                };
                if round_won {
                    self.finish_round(true);
                }
                Ok(receipt)
            }
        }
    }

    /// Report for the round that just ended; `None` while a round is active or
    /// before the first round.
    pub fn end_of_round_summary(&self) -> Option<&RoundSummary> {
        if self.state.phase.is_terminal() {
            self.state.last_summary.as_ref()
        } else {
            None
        }
    }

    /// Settles streak and money for a round that just reached a terminal state.
    fn finish_round(&mut self, won: bool) {
        let config = self.env.config;
        let state = &mut *self.state;
        let Some(round) = state.round.as_mut() else {
            return;
        };

        let streak_before = state.streak.count;
        let (streak_after, money_earned) = if won {
            let streak_after = state.streak.win();
            let earned = state.ledger.earn(
                &config.payout,
                round.difficulty(),
                round.strikes_left(),
                streak_after,
            );
            (streak_after, earned)
        } else {
            state.streak.lose();
            state.ledger.reset();
            state.free_guess = false;
            round.clear_bonus_strikes();
            (0, 0)
        };

        state.phase = if won {
            RoundPhase::RoundWon
        } else {
            RoundPhase::RoundLost
        };
        state.last_summary = Some(RoundSummary {
            won,
            revealed_phrase: round.phrase().to_string(),
            category: round.category().to_string(),
            streak_before,
            streak_after,
            money_earned,
        });

        tracing::info!(
            won,
            streak_before,
            streak_after,
            money_earned,
            balance = state.ledger.money(),
            "round ended"
        );
    }
}
