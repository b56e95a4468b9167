//! Per-round puzzle progress.

use crate::error::{ErrorSeverity, GameError};
use crate::letter::{Letter, LetterSet};
use crate::puzzle::Puzzle;

/// Rejected guesses. A rejected guess never changes the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("'{0}' was already guessed")]
    AlreadyGuessed(Letter),

    #[error("no round is active")]
    RoundNotActive,
}

impl GameError for GuessError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotALetter(_) => "GUESS_NOT_A_LETTER",
            Self::AlreadyGuessed(_) => "GUESS_ALREADY_GUESSED",
            Self::RoundNotActive => "GUESS_ROUND_NOT_ACTIVE",
        }
    }
}

/// Reveal progress and strikes for the puzzle being played.
///
/// Invariants:
/// - `revealed ⊆ phrase letters` and `revealed ⊆ guessed`
/// - `strike_count <= max_strikes`
#[derive(Clone, Debug, PartialEq)]
pub struct RoundState {
    phrase: String,
    category: String,
    difficulty: f64,
    phrase_letters: LetterSet,
    revealed: LetterSet,
    guessed: LetterSet,
    strike_count: u32,
    max_strikes: u32,
    bonus_strikes: u32,
}

impl RoundState {
    /// Starts a round on `puzzle`. `max_strikes` is fixed for the whole round.
    pub fn new(puzzle: &Puzzle, difficulty: f64, max_strikes: u32) -> Self {
        let phrase = puzzle.text.to_uppercase();
        let phrase_letters = LetterSet::from_text(&phrase);
        Self {
            phrase,
            category: puzzle.category.clone(),
            difficulty,
            phrase_letters,
            revealed: LetterSet::empty(),
            guessed: LetterSet::empty(),
            strike_count: 0,
            max_strikes,
            bonus_strikes: 0,
        }
    }

    /// Records a guess and reveals every occurrence of `letter`.
    ///
    /// Returns whether the letter occurs in the phrase. Never charges a strike;
    /// that is the caller's decision.
    pub fn guess(&mut self, letter: Letter) -> Result<bool, GuessError> {
        if !self.guessed.add(letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }
        let matched = self.phrase_letters.has(letter);
        if matched {
            self.revealed.add(letter);
        }
        Ok(matched)
    }

    /// Takes a letter that is not in the phrase out of play without a strike.
    ///
    /// Returns `false` if the letter is in the phrase or was already guessed.
    pub fn eliminate(&mut self, letter: Letter) -> bool {
        if self.phrase_letters.has(letter) || self.guessed.has(letter) {
            return false;
        }
        self.guessed.add(letter)
    }

    pub fn is_solved(&self) -> bool {
        self.revealed.contains(self.phrase_letters)
    }

    /// Charges one strike. Saturates at `max_strikes`.
    pub fn add_strike(&mut self) {
        if self.strike_count < self.max_strikes {
            self.strike_count += 1;
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.strike_count >= self.max_strikes
    }

    pub fn grant_bonus_strike(&mut self) -> u32 {
        self.bonus_strikes += 1;
        self.bonus_strikes
    }

    /// Consumes a bonus strike if one is available.
    pub fn absorb_with_bonus(&mut self) -> bool {
        if self.bonus_strikes == 0 {
            return false;
        }
        self.bonus_strikes -= 1;
        true
    }

    pub fn clear_bonus_strikes(&mut self) {
        self.bonus_strikes = 0;
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn phrase_letters(&self) -> LetterSet {
        self.phrase_letters
    }

    pub fn revealed(&self) -> LetterSet {
        self.revealed
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    /// Phrase letters not yet revealed.
    pub fn hidden(&self) -> LetterSet {
        self.phrase_letters.difference(self.revealed)
    }

    /// Letters that are neither in the phrase nor guessed yet.
    pub fn unguessed_misses(&self) -> LetterSet {
        self.phrase_letters.union(self.guessed).complement()
    }

    pub fn strike_count(&self) -> u32 {
        self.strike_count
    }

    pub fn max_strikes(&self) -> u32 {
        self.max_strikes
    }

    pub fn strikes_left(&self) -> u32 {
        self.max_strikes - self.strike_count
    }

    pub fn bonus_strikes(&self) -> u32 {
        self.bonus_strikes
    }

    /// Phrase with hidden letters replaced by `_`. Spaces and punctuation are kept.
    pub fn masked_phrase(&self) -> String {
        self.phrase
            .chars()
            .map(|c| match Letter::from_char(c) {
                Some(letter) if !self.revealed.has(letter) => '_',
                _ => c,
            })
            .collect()
    }
}
