//! Tunable rule tables.
//!
//! Every constant the engine consults lives here so the tables can be loaded
//! from a file without touching engine logic. [`GameConfig::default`] carries
//! the shipped values.
use std::collections::BTreeMap;

use strum::IntoEnumIterator;

use crate::error::{ErrorSeverity, GameError};
use crate::letter::{Letter, LetterSet};

/// One step of the streak → difficulty ceiling table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifficultyTier {
    /// Lowest streak at which this tier applies.
    pub min_streak: u32,
    /// Highest puzzle score allowed while this tier applies.
    pub max_difficulty: f64,
}

impl DifficultyTier {
    pub const fn new(min_streak: u32, max_difficulty: f64) -> Self {
        Self {
            min_streak,
            max_difficulty,
        }
    }
}

/// Constants of the round-end payout formula.
///
/// `payout = round(difficulty / difficulty_divisor
///                 * max(streak / streak_divisor, 1)
///                 * (1 + strike_bonus * strikes_left))`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoutRules {
    pub difficulty_divisor: f64,
    pub streak_divisor: f64,
    pub strike_bonus: f64,
}

impl PayoutRules {
    pub const DEFAULT_DIFFICULTY_DIVISOR: f64 = 10.0;
    pub const DEFAULT_STREAK_DIVISOR: f64 = 10.0;
    pub const DEFAULT_STRIKE_BONUS: f64 = 0.05;

    /// Computes the payout for a won round. Rounds half away from zero.
    pub fn payout(&self, difficulty: f64, strikes_left: u32, streak: u32) -> u64 {
        let streak_multiplier = (f64::from(streak) / self.streak_divisor).max(1.0);
        let clean_bonus = 1.0 + self.strike_bonus * f64::from(strikes_left);
        let raw = difficulty / self.difficulty_divisor * streak_multiplier * clean_bonus;
        if raw.is_finite() && raw > 0.0 {
            raw.round() as u64
        } else {
            0
        }
    }
}

impl Default for PayoutRules {
    fn default() -> Self {
        Self {
            difficulty_divisor: Self::DEFAULT_DIFFICULTY_DIVISOR,
            streak_divisor: Self::DEFAULT_STREAK_DIVISOR,
            strike_bonus: Self::DEFAULT_STRIKE_BONUS,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Strikes available before any strike-capacity upgrade.
    pub base_strikes: u32,

    /// Difficulty ceilings ordered by `min_streak`. The first tier must start at 0.
    pub difficulty_tiers: Vec<DifficultyTier>,

    /// From this streak on every puzzle is eligible.
    pub unbounded_from_streak: u32,

    /// Rarity weight per letter, indexed `A..=Z`.
    pub rarity: [u32; 26],

    /// Letters that do not count toward difficulty for a given category.
    pub free_letters: BTreeMap<String, LetterSet>,

    pub payout: PayoutRules,

    /// Number of wrong letters removed by the eliminate consumable.
    pub eliminate_count: u32,
}

impl GameConfig {
    pub const DEFAULT_BASE_STRIKES: u32 = 3;
    pub const DEFAULT_UNBOUNDED_FROM_STREAK: u32 = 9;
    pub const DEFAULT_ELIMINATE_COUNT: u32 = 3;

    /// Scrabble tile values.
    pub const DEFAULT_RARITY: [u32; 26] = [
        1, 3, 3, 2, 1, 4, 2, 1, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
    ];

    /// Category whose puzzles all end in "ING".
    pub const ING_CATEGORY: &'static str = "What Are You Doing?";

    pub fn new() -> Self {
        let mut free_letters = BTreeMap::new();
        free_letters.insert(
            Self::ING_CATEGORY.to_string(),
            LetterSet::I | LetterSet::N | LetterSet::G,
        );

        Self {
            base_strikes: Self::DEFAULT_BASE_STRIKES,
            difficulty_tiers: vec![
                DifficultyTier::new(0, 200.0),
                DifficultyTier::new(3, 350.0),
                DifficultyTier::new(5, 500.0),
                DifficultyTier::new(7, 700.0),
            ],
            unbounded_from_streak: Self::DEFAULT_UNBOUNDED_FROM_STREAK,
            rarity: Self::DEFAULT_RARITY,
            free_letters,
            payout: PayoutRules::default(),
            eliminate_count: Self::DEFAULT_ELIMINATE_COUNT,
        }
    }

    pub fn rarity_of(&self, letter: Letter) -> u32 {
        self.rarity[letter.index()]
    }

    /// Letters excluded from scoring for `category` (empty when none are configured).
    pub fn free_letters_for(&self, category: &str) -> LetterSet {
        self.free_letters
            .get(category)
            .copied()
            .unwrap_or_default()
    }

    /// Maximum puzzle difficulty unlocked at `streak`.
    ///
    /// Non-decreasing in `streak`; returns [`f64::INFINITY`] once the streak
    /// reaches `unbounded_from_streak`.
    pub fn max_difficulty(&self, streak: u32) -> f64 {
        if streak >= self.unbounded_from_streak {
            return f64::INFINITY;
        }
        self.difficulty_tiers
            .iter()
            .rev()
            .find(|tier| tier.min_streak <= streak)
            .or_else(|| self.difficulty_tiers.first())
            .map_or(f64::INFINITY, |tier| tier.max_difficulty)
    }

    /// Checks the table invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_strikes == 0 {
            return Err(ConfigError::NoStrikes);
        }

        let first = self
            .difficulty_tiers
            .first()
            .ok_or(ConfigError::NoDifficultyTiers)?;
        if first.min_streak != 0 {
            return Err(ConfigError::FirstTierNotAtZero(first.min_streak));
        }

        for tier in &self.difficulty_tiers {
            if tier.max_difficulty.is_nan() || tier.max_difficulty < 0.0 {
                return Err(ConfigError::InvalidCeiling {
                    min_streak: tier.min_streak,
                });
            }
        }

        for pair in self.difficulty_tiers.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            if upper.min_streak <= lower.min_streak {
                return Err(ConfigError::TierStreaksNotIncreasing {
                    previous: lower.min_streak,
                    next: upper.min_streak,
                });
            }
            if upper.max_difficulty < lower.max_difficulty {
                return Err(ConfigError::TierCeilingDecreases {
                    min_streak: upper.min_streak,
                });
            }
        }

        if let Some(last) = self.difficulty_tiers.last()
            && self.unbounded_from_streak <= last.min_streak
        {
            return Err(ConfigError::UnboundedBeforeLastTier {
                unbounded_from: self.unbounded_from_streak,
                last_tier: last.min_streak,
            });
        }

        if let Some(letter) = Letter::iter().find(|&letter| self.rarity_of(letter) == 0) {
            return Err(ConfigError::ZeroRarity(letter));
        }

        let payout = &self.payout;
        let divisors = [payout.difficulty_divisor, payout.streak_divisor];
        if divisors.iter().any(|d| d.is_nan() || *d <= 0.0) {
            return Err(ConfigError::NonPositiveDivisor);
        }
        if payout.strike_bonus.is_nan() || payout.strike_bonus < 0.0 {
            return Err(ConfigError::NegativeStrikeBonus);
        }

        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejections from [`GameConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("base_strikes must be at least 1")]
    NoStrikes,

    #[error("at least one difficulty tier is required")]
    NoDifficultyTiers,

    #[error("first difficulty tier must start at streak 0, found {0}")]
    FirstTierNotAtZero(u32),

    #[error("difficulty tier streaks must increase: {previous} then {next}")]
    TierStreaksNotIncreasing { previous: u32, next: u32 },

    #[error("difficulty ceiling at streak {min_streak} must be a non-negative number")]
    InvalidCeiling { min_streak: u32 },

    #[error("difficulty ceiling decreases at streak {min_streak}")]
    TierCeilingDecreases { min_streak: u32 },

    #[error("unbounded_from_streak ({unbounded_from}) must exceed the last tier ({last_tier})")]
    UnboundedBeforeLastTier { unbounded_from: u32, last_tier: u32 },

    #[error("rarity weight for {0} must be at least 1")]
    ZeroRarity(Letter),

    #[error("payout divisors must be positive")]
    NonPositiveDivisor,

    #[error("payout strike bonus must not be negative")]
    NegativeStrikeBonus,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoStrikes => "CONFIG_NO_STRIKES",
            Self::NoDifficultyTiers => "CONFIG_NO_TIERS",
            Self::FirstTierNotAtZero(_) => "CONFIG_FIRST_TIER",
            Self::TierStreaksNotIncreasing { .. } => "CONFIG_TIER_ORDER",
            Self::InvalidCeiling { .. } => "CONFIG_INVALID_CEILING",
            Self::TierCeilingDecreases { .. } => "CONFIG_TIER_CEILING",
            Self::UnboundedBeforeLastTier { .. } => "CONFIG_UNBOUNDED",
            Self::ZeroRarity(_) => "CONFIG_ZERO_RARITY",
            Self::NonPositiveDivisor => "CONFIG_DIVISOR",
            Self::NegativeStrikeBonus => "CONFIG_STRIKE_BONUS",
        }
    }
}
