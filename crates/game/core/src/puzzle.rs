//! Puzzle corpus and streak-gated selection.

use crate::config::GameConfig;
use crate::env::{DrawPurpose, DrawState, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::letter::LetterSet;
use crate::scoring;

/// A phrase to solve and the category shown alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Puzzle {
    pub text: String,
    pub category: String,
}

impl Puzzle {
    pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
        }
    }
}

/// A puzzle with its difficulty computed once at load time.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoredPuzzle {
    pub puzzle: Puzzle,
    pub difficulty: f64,
}

/// Errors raised while building a [`PuzzlePool`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    #[error("puzzle corpus is empty")]
    EmptyCorpus,

    #[error("puzzle \"{0}\" contains no letters")]
    NoLetters(String),
}

impl GameError for PoolError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyCorpus => "POOL_EMPTY_CORPUS",
            Self::NoLetters(_) => "POOL_NO_LETTERS",
        }
    }
}

/// Immutable puzzle corpus with cached difficulty scores.
#[derive(Clone, Debug)]
pub struct PuzzlePool {
    puzzles: Vec<ScoredPuzzle>,
}

impl PuzzlePool {
    /// Scores every puzzle against `config`.
    ///
    /// The corpus must be non-empty and every puzzle must contain at least one
    /// letter, so selection can never come back empty-handed.
    pub fn new(puzzles: Vec<Puzzle>, config: &GameConfig) -> Result<Self, PoolError> {
        if puzzles.is_empty() {
            return Err(PoolError::EmptyCorpus);
        }

        let puzzles = puzzles
            .into_iter()
            .map(|puzzle| {
                if LetterSet::from_text(&puzzle.text).is_empty() {
                    return Err(PoolError::NoLetters(puzzle.text));
                }
                let difficulty = scoring::score(&puzzle.text, &puzzle.category, config);
                Ok(ScoredPuzzle { puzzle, difficulty })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { puzzles })
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredPuzzle> {
        self.puzzles.iter()
    }

    /// Puzzles scoring at or below `ceiling`, falling back to the full corpus
    /// when none qualify.
    pub fn eligible(&self, ceiling: f64) -> Vec<&ScoredPuzzle> {
        let eligible: Vec<_> = self
            .puzzles
            .iter()
            .filter(|scored| scored.difficulty <= ceiling)
            .collect();

        if eligible.is_empty() {
            tracing::warn!(
                ceiling,
                corpus = self.puzzles.len(),
                "no puzzle within difficulty ceiling, falling back to full corpus"
            );
            return self.puzzles.iter().collect();
        }
        eligible
    }

    /// Picks uniformly among the puzzles eligible at `streak`.
    pub fn select(
        &self,
        streak: u32,
        config: &GameConfig,
        rng: &dyn RngOracle,
        draws: &mut DrawState,
    ) -> &ScoredPuzzle {
        let ceiling = config.max_difficulty(streak);
        let eligible = self.eligible(ceiling);
        let index = draws.pick(rng, DrawPurpose::Puzzle, eligible.len());
        let chosen = eligible[index];

        tracing::debug!(
            streak,
            ceiling,
            eligible = eligible.len(),
            difficulty = chosen.difficulty,
            "selected puzzle"
        );
        chosen
    }
}
