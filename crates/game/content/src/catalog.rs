//! Shop catalog generation from a slot layout.
//!
//! Each slot family is a prerequisite chain whose cost doubles per slot. Every
//! auto-reveal slot also gets a guarantee tier that costs twice the slot and
//! requires it.

use phrase_core::{
    Catalog, CatalogEntry, CatalogError, ConsumableDef, ConsumableEffect, EntryId, GameConfig,
    LetterClass, UpgradeDef, UpgradeEffect,
};

/// Number of slots in a family and the cost of the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotLayout {
    pub slots: u32,
    pub base_cost: u64,
}

impl SlotLayout {
    pub const fn new(slots: u32, base_cost: u64) -> Self {
        Self { slots, base_cost }
    }

    /// Cost of the 1-based `slot`.
    pub fn cost(&self, slot: u32) -> u64 {
        let factor = 1u64.checked_shl(slot.saturating_sub(1)).unwrap_or(u64::MAX);
        self.base_cost.saturating_mul(factor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConsumableCosts {
    pub reveal_consonant: u64,
    pub reveal_vowel: u64,
    pub eliminate_letters: u64,
    pub free_guess: u64,
    pub bonus_strike: u64,
}

impl Default for ConsumableCosts {
    fn default() -> Self {
        Self {
            reveal_consonant: 25,
            reveal_vowel: 50,
            eliminate_letters: 25,
            free_guess: 50,
            bonus_strike: 75,
        }
    }
}

/// Shape of the generated shop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogLayout {
    pub auto_consonant: SlotLayout,
    pub auto_vowel: SlotLayout,
    pub extra_strike: SlotLayout,
    pub consumables: ConsumableCosts,
}

impl Default for CatalogLayout {
    fn default() -> Self {
        Self {
            auto_consonant: SlotLayout::new(2, 50),
            auto_vowel: SlotLayout::new(1, 100),
            extra_strike: SlotLayout::new(2, 250),
            consumables: ConsumableCosts::default(),
        }
    }
}

fn upgrade(
    id: String,
    label: String,
    description: String,
    cost: u64,
    requires: Option<&str>,
    effect: UpgradeEffect,
) -> CatalogEntry {
    CatalogEntry::Upgrade(UpgradeDef {
        id: EntryId::new(id),
        label,
        description,
        cost,
        requires: requires.map(EntryId::new),
        effect,
    })
}

fn consumable(
    id: &str,
    label: String,
    description: &str,
    cost: u64,
    effect: ConsumableEffect,
) -> CatalogEntry {
    CatalogEntry::Consumable(ConsumableDef {
        id: EntryId::new(id),
        label,
        description: description.to_string(),
        cost,
        effect,
    })
}

/// "1st", "2nd", "11th", "23rd".
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn reveal_family(entries: &mut Vec<CatalogEntry>, class: LetterClass, layout: SlotLayout) {
    let (key, noun) = match class {
        LetterClass::Consonant => ("consonant", "Consonant"),
        LetterClass::Vowel => ("vowel", "Vowel"),
    };

    let mut previous: Option<String> = None;
    for slot in 1..=layout.slots {
        let cost = layout.cost(slot);
        let random_id = format!("auto_{key}_{slot}");
        let suffix = if layout.slots > 1 {
            format!(" {slot}")
        } else {
            String::new()
        };

        entries.push(upgrade(
            random_id.clone(),
            format!("Free {noun}{suffix}"),
            format!("A random {key} is revealed each round"),
            cost,
            previous.as_deref(),
            UpgradeEffect::AutoReveal(class),
        ));
        entries.push(upgrade(
            format!("auto_{key}_guaranteed_{slot}"),
            format!("Guaranteed {noun}{suffix}"),
            format!("Free {key} is guaranteed to be in the phrase"),
            cost.saturating_mul(2),
            Some(&random_id),
            UpgradeEffect::GuaranteeReveal,
        ));
        previous = Some(random_id);
    }
}

/// Builds every catalog entry described by `layout`, in shop order.
///
/// `config` supplies the base strike count (for strike labels) and the
/// eliminate count.
pub fn generate_catalog(layout: &CatalogLayout, config: &GameConfig) -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    reveal_family(&mut entries, LetterClass::Consonant, layout.auto_consonant);
    reveal_family(&mut entries, LetterClass::Vowel, layout.auto_vowel);

    let mut previous: Option<String> = None;
    for slot in 1..=layout.extra_strike.slots {
        let id = format!("extra_strike_{slot}");
        let nth = ordinal(config.base_strikes + slot);
        entries.push(upgrade(
            id.clone(),
            format!("{nth} Strike"),
            format!("Gain a {nth} strike before losing"),
            layout.extra_strike.cost(slot),
            previous.as_deref(),
            UpgradeEffect::ExtraStrike,
        ));
        previous = Some(id);
    }

    let costs = layout.consumables;
    entries.extend([
        consumable(
            "reveal_consonant",
            "Reveal Consonant".to_string(),
            "Reveals a random hidden consonant in the phrase",
            costs.reveal_consonant,
            ConsumableEffect::RevealLetter(LetterClass::Consonant),
        ),
        consumable(
            "reveal_vowel",
            "Reveal Vowel".to_string(),
            "Reveals a random hidden vowel in the phrase",
            costs.reveal_vowel,
            ConsumableEffect::RevealLetter(LetterClass::Vowel),
        ),
        consumable(
            "eliminate_letters",
            format!("Eliminate {} Letters", config.eliminate_count),
            "Removes wrong letters from the alphabet",
            costs.eliminate_letters,
            ConsumableEffect::EliminateLetters,
        ),
        consumable(
            "free_guess",
            "Free Guess".to_string(),
            "Next wrong guess costs nothing",
            costs.free_guess,
            ConsumableEffect::FreeGuess,
        ),
        consumable(
            "bonus_strike",
            "Bonus Strike".to_string(),
            "Absorbs one wrong guess before a real strike",
            costs.bonus_strike,
            ConsumableEffect::BonusStrike,
        ),
    ]);

    // A zero cost switches an entry off.
    entries.retain(|entry| entry.cost() > 0);
    entries
}

/// Catalog generated from the default layout.
pub fn default_catalog(config: &GameConfig) -> Result<Catalog, CatalogError> {
    Catalog::new(generate_catalog(&CatalogLayout::default(), config))
}
