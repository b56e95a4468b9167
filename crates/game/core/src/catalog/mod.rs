//! Shop catalog: upgrade and consumable definitions plus the visibility,
//! availability and purchase rules that sit on top of them.
//!
//! A [`Catalog`] is validated once when it is built (unique ids, positive
//! costs, prerequisites that exist and form single-parent acyclic chains), so
//! lookups never have to second-guess the data.
mod entry;
mod resolver;

use std::collections::{BTreeMap, BTreeSet};

pub use entry::{
    CatalogEntry, ConsumableDef, ConsumableEffect, EntryId, EntryKind, UpgradeDef, UpgradeEffect,
};
pub use resolver::{
    EffectOutcome, EffectRegistry, PurchaseError, purchase_consumable, purchase_upgrade,
};

use crate::error::{ErrorSeverity, GameError};
use crate::letter::LetterClass;

/// Validated, immutable list of shop entries in declaration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: BTreeMap<EntryId, usize>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.cost() == 0 {
                return Err(CatalogError::ZeroCost(entry.id().clone()));
            }
            if index.insert(entry.id().clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id().clone()));
            }
        }

        let catalog = Self { entries, index };
        for upgrade in catalog.upgrades() {
            catalog.validate_upgrade(upgrade)?;
        }
        Ok(catalog)
    }

    fn validate_upgrade(&self, upgrade: &UpgradeDef) -> Result<(), CatalogError> {
        if let Some(requires) = &upgrade.requires {
            let parent = self
                .get(requires.as_str())
                .ok_or_else(|| CatalogError::UnknownPrerequisite {
                    id: upgrade.id.clone(),
                    requires: requires.clone(),
                })?
                .as_upgrade()
                .ok_or_else(|| CatalogError::PrerequisiteNotUpgrade {
                    id: upgrade.id.clone(),
                    requires: requires.clone(),
                })?;

            if upgrade.effect == UpgradeEffect::GuaranteeReveal
                && !matches!(parent.effect, UpgradeEffect::AutoReveal(_))
            {
                return Err(CatalogError::GuaranteeWithoutRevealSlot(upgrade.id.clone()));
            }
        } else if upgrade.effect == UpgradeEffect::GuaranteeReveal {
            return Err(CatalogError::GuaranteeWithoutRevealSlot(upgrade.id.clone()));
        }

        // Walk the single-parent chain; more links than entries means a cycle.
        let mut current = upgrade;
        for _ in 0..self.entries.len() {
            match current.requires.as_ref() {
                None => return Ok(()),
                Some(requires) => match self.get(requires.as_str()).and_then(|e| e.as_upgrade()) {
                    Some(parent) if parent.id == upgrade.id => break,
                    Some(parent) => current = parent,
                    None => return Ok(()),
                },
            }
        }
        Err(CatalogError::CyclicPrerequisite(upgrade.id.clone()))
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn upgrades(&self) -> impl Iterator<Item = &UpgradeDef> {
        self.entries.iter().filter_map(CatalogEntry::as_upgrade)
    }

    pub fn consumables(&self) -> impl Iterator<Item = &ConsumableDef> {
        self.entries.iter().filter_map(CatalogEntry::as_consumable)
    }

    /// Entries shown to the player, in declaration order.
    ///
    /// An upgrade is visible when it has no prerequisite or its prerequisite is
    /// owned. Consumables are always visible.
    pub fn visible_entries(&self, purchased: &BTreeSet<EntryId>) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| match entry.requires() {
                None => true,
                Some(requires) => purchased.contains(requires),
            })
            .collect()
    }

    /// Whether the entry could be bought right now, ignoring affordability.
    pub fn is_available(&self, entry: &CatalogEntry, purchased: &BTreeSet<EntryId>) -> bool {
        match entry {
            CatalogEntry::Upgrade(upgrade) => {
                !purchased.contains(&upgrade.id)
                    && upgrade
                        .requires
                        .as_ref()
                        .is_none_or(|requires| purchased.contains(requires))
            }
            CatalogEntry::Consumable(_) => true,
        }
    }

    /// Strikes granted by owned strike-capacity upgrades.
    pub fn extra_strikes(&self, purchased: &BTreeSet<EntryId>) -> u32 {
        self.upgrades()
            .filter(|upgrade| upgrade.effect == UpgradeEffect::ExtraStrike)
            .filter(|upgrade| purchased.contains(&upgrade.id))
            .count() as u32
    }

    /// Owned auto-reveal slots in declaration order, each flagged with whether
    /// an owned guarantee upgrade restricts it to phrase letters.
    pub fn auto_reveal_slots(&self, purchased: &BTreeSet<EntryId>) -> Vec<RevealSlot> {
        self.upgrades()
            .filter(|upgrade| purchased.contains(&upgrade.id))
            .filter_map(|upgrade| match upgrade.effect {
                UpgradeEffect::AutoReveal(class) => Some(RevealSlot {
                    class,
                    guaranteed: self.upgrades().any(|other| {
                        other.effect == UpgradeEffect::GuaranteeReveal
                            && other.requires.as_ref() == Some(&upgrade.id)
                            && purchased.contains(&other.id)
                    }),
                }),
                _ => None,
            })
            .collect()
    }
}

/// One owned auto-reveal slot resolved for the start of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealSlot {
    pub class: LetterClass,
    pub guaranteed: bool,
}

/// Rejections raised while validating a catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate catalog id '{0}'")]
    DuplicateId(EntryId),

    #[error("catalog entry '{0}' must cost more than 0")]
    ZeroCost(EntryId),

    #[error("upgrade '{id}' requires unknown entry '{requires}'")]
    UnknownPrerequisite { id: EntryId, requires: EntryId },

    #[error("upgrade '{id}' requires '{requires}', which is not an upgrade")]
    PrerequisiteNotUpgrade { id: EntryId, requires: EntryId },

    #[error("upgrade '{0}' is part of a prerequisite cycle")]
    CyclicPrerequisite(EntryId),

    #[error("guarantee upgrade '{0}' must require an auto-reveal upgrade")]
    GuaranteeWithoutRevealSlot(EntryId),
}

impl GameError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicateId(_) => "CATALOG_DUPLICATE_ID",
            Self::ZeroCost(_) => "CATALOG_ZERO_COST",
            Self::UnknownPrerequisite { .. } => "CATALOG_UNKNOWN_PREREQUISITE",
            Self::PrerequisiteNotUpgrade { .. } => "CATALOG_PREREQUISITE_NOT_UPGRADE",
            Self::CyclicPrerequisite(_) => "CATALOG_CYCLE",
            Self::GuaranteeWithoutRevealSlot(_) => "CATALOG_GUARANTEE_SLOT",
        }
    }
}
