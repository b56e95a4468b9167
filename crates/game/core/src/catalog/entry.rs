//! Shop catalog entry definitions.

use std::borrow::Borrow;
use std::fmt;

use crate::letter::LetterClass;

/// Unique identifier of a catalog entry (e.g. `auto_vowel_1`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// What owning an upgrade does at the start of every round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeEffect {
    /// Silently guess one random letter of the class.
    AutoReveal(LetterClass),
    /// Restricts the draw of the required `AutoReveal` slot to letters in the phrase.
    GuaranteeReveal,
    /// One more strike before the round is lost.
    ExtraStrike,
}

/// What a consumable does the moment it is bought.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ConsumableEffect {
    /// Reveal one hidden letter of the class.
    RevealLetter(LetterClass),
    /// Remove letters that are not in the phrase from play.
    EliminateLetters,
    /// Suppress the next strike charge.
    FreeGuess,
    /// Absorb one wrong guess before a real strike.
    BonusStrike,
}

/// Permanent purchase, kept until the player loses a round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeDef {
    pub id: EntryId,
    pub label: String,
    pub description: String,
    pub cost: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub requires: Option<EntryId>,
    pub effect: UpgradeEffect,
}

/// Single-use purchase applied immediately; never stored in the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableDef {
    pub id: EntryId,
    pub label: String,
    pub description: String,
    pub cost: u64,
    pub effect: ConsumableEffect,
}

/// Kind selector for purchase requests.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EntryKind {
    Upgrade,
    Consumable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CatalogEntry {
    Upgrade(UpgradeDef),
    Consumable(ConsumableDef),
}

impl CatalogEntry {
    pub fn id(&self) -> &EntryId {
        match self {
            Self::Upgrade(upgrade) => &upgrade.id,
            Self::Consumable(consumable) => &consumable.id,
        }
    }

    pub fn cost(&self) -> u64 {
        match self {
            Self::Upgrade(upgrade) => upgrade.cost,
            Self::Consumable(consumable) => consumable.cost,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Upgrade(upgrade) => &upgrade.label,
            Self::Consumable(consumable) => &consumable.label,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::Upgrade(upgrade) => &upgrade.description,
            Self::Consumable(consumable) => &consumable.description,
        }
    }

    /// Prerequisite id; consumables never have one.
    pub fn requires(&self) -> Option<&EntryId> {
        match self {
            Self::Upgrade(upgrade) => upgrade.requires.as_ref(),
            Self::Consumable(_) => None,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Upgrade(_) => EntryKind::Upgrade,
            Self::Consumable(_) => EntryKind::Consumable,
        }
    }

    pub fn as_upgrade(&self) -> Option<&UpgradeDef> {
        match self {
            Self::Upgrade(upgrade) => Some(upgrade),
            Self::Consumable(_) => None,
        }
    }

    pub fn as_consumable(&self) -> Option<&ConsumableDef> {
        match self {
            Self::Upgrade(_) => None,
            Self::Consumable(consumable) => Some(consumable),
        }
    }
}
