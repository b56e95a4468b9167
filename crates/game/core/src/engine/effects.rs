//! Round-side letter draws: start-of-round auto-reveals and consumable effects.

use arrayvec::ArrayVec;

use crate::catalog::{ConsumableEffect, EffectOutcome, EffectRegistry, RevealSlot};
use crate::env::{DrawPurpose, DrawState, RngOracle};
use crate::letter::{Letter, LetterSet};
use crate::state::RoundState;

/// Uniform draw from `pool`, or `None` if it is empty.
fn draw_letter(
    pool: LetterSet,
    rng: &dyn RngOracle,
    draws: &mut DrawState,
    purpose: DrawPurpose,
) -> Option<Letter> {
    let letters = pool.to_array();
    if letters.is_empty() {
        return None;
    }
    let index = draws.pick(rng, purpose, letters.len());
    letters.get(index).copied()
}

/// Letter an owned auto-reveal slot guesses at round start.
///
/// Draws from the slot's class minus letters already guessed. A guaranteed
/// slot narrows that to letters in the phrase, falling back to the wider pool
/// when the phrase has none left.
pub(crate) fn draw_auto_reveal(
    round: &RoundState,
    slot: RevealSlot,
    rng: &dyn RngOracle,
    draws: &mut DrawState,
) -> Option<Letter> {
    let open = slot.class.letters().difference(round.guessed());
    let pool = if slot.guaranteed {
        let in_phrase = open.intersection(round.phrase_letters());
        if in_phrase.is_empty() { open } else { in_phrase }
    } else {
        open
    };
    draw_letter(pool, rng, draws, DrawPurpose::AutoReveal)
}

/// Effect registry backed by the active round and the session's armed flags.
pub(crate) struct RoundEffects<'s> {
    pub round: &'s mut RoundState,
    pub free_guess: &'s mut bool,
    pub draws: &'s mut DrawState,
    pub rng: &'s dyn RngOracle,
    pub eliminate_count: u32,
}

impl EffectRegistry for RoundEffects<'_> {
    fn can_apply(&self, effect: ConsumableEffect) -> bool {
        match effect {
            ConsumableEffect::RevealLetter(class) => {
                !self.round.hidden().intersection(class.letters()).is_empty()
            }
            ConsumableEffect::EliminateLetters => {
                self.eliminate_count > 0 && !self.round.unguessed_misses().is_empty()
            }
            ConsumableEffect::FreeGuess => !*self.free_guess,
            ConsumableEffect::BonusStrike => true,
        }
    }

    fn apply(&mut self, effect: ConsumableEffect) -> EffectOutcome {
        match effect {
            ConsumableEffect::RevealLetter(class) => {
                let pool = self.round.hidden().intersection(class.letters());
                match draw_letter(pool, self.rng, self.draws, DrawPurpose::RevealConsumable) {
                    Some(letter) if self.round.guess(letter).is_ok() => {
                        tracing::debug!(%letter, "consumable revealed letter");
                        EffectOutcome::Revealed(letter)
                    }
                    _ => EffectOutcome::NoEffect,
                }
            }
            ConsumableEffect::EliminateLetters => {
                let mut removed = ArrayVec::<Letter, 26>::new();
                for _ in 0..self.eliminate_count {
                    let pool = self.round.unguessed_misses();
                    let drawn = draw_letter(pool, self.rng, self.draws, DrawPurpose::Eliminate);
                    let Some(letter) = drawn else {
                        break;
                    };
                    if self.round.eliminate(letter) {
                        removed.push(letter);
                    }
                }
                let removed_text: String = removed.iter().map(|l| l.as_char()).collect();
                tracing::debug!(removed = %removed_text, "eliminated letters");
                EffectOutcome::Eliminated(removed)
            }
            ConsumableEffect::FreeGuess => {
                *self.free_guess = true;
                EffectOutcome::FreeGuessArmed
            }
            ConsumableEffect::BonusStrike => EffectOutcome::BonusStrikeGranted {
                available: self.round.grant_bonus_strike(),
            },
        }
    }
}
