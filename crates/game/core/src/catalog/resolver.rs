//! Purchase resolution.
//!
//! Purchases are all-or-nothing: every precondition is checked before the
//! ledger is charged, and a rejected purchase leaves money, owned upgrades
//! and the round untouched. [`EconomyLedger::spend`] is the only path that
//! deducts money.

use arrayvec::ArrayVec;

use super::{Catalog, ConsumableDef, ConsumableEffect, EntryId, EntryKind, UpgradeDef};
use crate::error::{ErrorSeverity, GameError};
use crate::letter::Letter;
use crate::state::EconomyLedger;

/// Applies consumable effects to whatever the caller owns (normally the
/// active round).
///
/// The resolver only knows about money and ids; anything that needs the
/// phrase or the revealed letters is done by the registry.
pub trait EffectRegistry {
    /// Whether `effect` would change anything right now. Checked before charging.
    fn can_apply(&self, effect: ConsumableEffect) -> bool;

    /// Applies `effect`. Only called after `can_apply` returned true and the
    /// ledger was charged.
    fn apply(&mut self, effect: ConsumableEffect) -> EffectOutcome;
}

/// What a consumable did once applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EffectOutcome {
    Revealed(Letter),
    Eliminated(ArrayVec<Letter, 26>),
    FreeGuessArmed,
    BonusStrikeGranted { available: u32 },
    /// The effect found nothing to act on.
    NoEffect,
}

/// Rejected purchase requests. State is never modified when one is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    #[error("no catalog entry named '{0}'")]
    UnknownEntry(String),

    #[error("'{id}' is not a {expected}")]
    KindMismatch { id: EntryId, expected: EntryKind },

    #[error("upgrade '{0}' is already owned")]
    AlreadyOwned(EntryId),

    #[error("upgrade '{id}' requires '{requires}' first")]
    PrerequisiteUnmet { id: EntryId, requires: EntryId },

    #[error("'{id}' costs {cost} but only {balance} is available")]
    InsufficientFunds { id: EntryId, cost: u64, balance: u64 },

    #[error("'{0}' would have no effect right now")]
    EffectUnavailable(EntryId),

    #[error("consumables can only be bought during an active round")]
    RoundNotActive,
}

impl GameError for PurchaseError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. }
            | Self::PrerequisiteUnmet { .. }
            | Self::EffectUnavailable(_)
            | Self::RoundNotActive => ErrorSeverity::Recoverable,
            Self::UnknownEntry(_) | Self::KindMismatch { .. } | Self::AlreadyOwned(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntry(_) => "PURCHASE_UNKNOWN_ENTRY",
            Self::KindMismatch { .. } => "PURCHASE_KIND_MISMATCH",
            Self::AlreadyOwned(_) => "PURCHASE_ALREADY_OWNED",
            Self::PrerequisiteUnmet { .. } => "PURCHASE_PREREQUISITE_UNMET",
            Self::InsufficientFunds { .. } => "PURCHASE_INSUFFICIENT_FUNDS",
            Self::EffectUnavailable(_) => "PURCHASE_EFFECT_UNAVAILABLE",
            Self::RoundNotActive => "PURCHASE_ROUND_NOT_ACTIVE",
        }
    }
}

fn resolve_upgrade<'c>(catalog: &'c Catalog, id: &str) -> Result<&'c UpgradeDef, PurchaseError> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| PurchaseError::UnknownEntry(id.to_string()))?;
    entry.as_upgrade().ok_or_else(|| PurchaseError::KindMismatch {
        id: entry.id().clone(),
        expected: EntryKind::Upgrade,
    })
}

fn resolve_consumable<'c>(
    catalog: &'c Catalog,
    id: &str,
) -> Result<&'c ConsumableDef, PurchaseError> {
    let entry = catalog
        .get(id)
        .ok_or_else(|| PurchaseError::UnknownEntry(id.to_string()))?;
    entry.as_consumable().ok_or_else(|| PurchaseError::KindMismatch {
        id: entry.id().clone(),
        expected: EntryKind::Consumable,
    })
}

fn ensure_affordable(ledger: &EconomyLedger, id: &EntryId, cost: u64) -> Result<(), PurchaseError> {
    let balance = ledger.money();
    if balance < cost {
        return Err(PurchaseError::InsufficientFunds {
            id: id.clone(),
            cost,
            balance,
        });
    }
    Ok(())
}

fn charge(ledger: &mut EconomyLedger, id: &EntryId, cost: u64) -> Result<(), PurchaseError> {
    let balance = ledger.money();
    if ledger.spend(cost) {
        Ok(())
    } else {
        Err(PurchaseError::InsufficientFunds {
            id: id.clone(),
            cost,
            balance,
        })
    }
}

/// Buys a permanent upgrade and records it in the ledger.
pub fn purchase_upgrade<'c>(
    catalog: &'c Catalog,
    id: &str,
    ledger: &mut EconomyLedger,
) -> Result<&'c UpgradeDef, PurchaseError> {
    let upgrade = resolve_upgrade(catalog, id)?;

    if ledger.owns(upgrade.id.as_str()) {
        return Err(PurchaseError::AlreadyOwned(upgrade.id.clone()));
    }
    if let Some(requires) = &upgrade.requires
        && !ledger.owns(requires.as_str())
    {
        return Err(PurchaseError::PrerequisiteUnmet {
            id: upgrade.id.clone(),
            requires: requires.clone(),
        });
    }

    charge(ledger, &upgrade.id, upgrade.cost)?;
    ledger.grant(upgrade.id.clone());

    tracing::info!(
        upgrade = %upgrade.id,
        cost = upgrade.cost,
        balance = ledger.money(),
        "purchased upgrade"
    );
    Ok(upgrade)
}

/// Buys a consumable and applies it through `effects` immediately.
pub fn purchase_consumable<'c>(
    catalog: &'c Catalog,
    id: &str,
    ledger: &mut EconomyLedger,
    effects: &mut dyn EffectRegistry,
) -> Result<(&'c ConsumableDef, EffectOutcome), PurchaseError> {
    let consumable = resolve_consumable(catalog, id)?;

    // Funds are reported before applicability.
    ensure_affordable(ledger, &consumable.id, consumable.cost)?;
    if !effects.can_apply(consumable.effect) {
        return Err(PurchaseError::EffectUnavailable(consumable.id.clone()));
    }

    charge(ledger, &consumable.id, consumable.cost)?;
    let outcome = effects.apply(consumable.effect);

    tracing::info!(
        consumable = %consumable.id,
        cost = consumable.cost,
        balance = ledger.money(),
        ?outcome,
        "used consumable"
    );
    Ok((consumable, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    /// Records applied effects instead of touching a round.
    #[derive(Default)]
    struct RecordingEffects {
        applied: Vec<ConsumableEffect>,
        blocked: bool,
    }

    impl EffectRegistry for RecordingEffects {
        fn can_apply(&self, _effect: ConsumableEffect) -> bool {
            !self.blocked
        }

        fn apply(&mut self, effect: ConsumableEffect) -> EffectOutcome {
            self.applied.push(effect);
            match effect {
                ConsumableEffect::BonusStrike => EffectOutcome::BonusStrikeGranted { available: 1 },
                _ => EffectOutcome::FreeGuessArmed,
            }
        }
    }

    #[test]
    fn buys_upgrade_with_exact_balance() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(50);

        let upgrade = purchase_upgrade(&catalog, "auto_consonant_1", &mut ledger).unwrap();
        assert_eq!(upgrade.cost, 50);
        assert_eq!(ledger.money(), 0);
        assert!(ledger.owns("auto_consonant_1"));

        let err = purchase_upgrade(&catalog, "extra_strike_1", &mut ledger).unwrap_err();
        assert!(matches!(err, PurchaseError::InsufficientFunds { cost: 250, balance: 0, .. }));
        assert_eq!(ledger.money(), 0);
    }

    #[test]
    fn unmet_prerequisite_changes_nothing() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(1_000);

        let err = purchase_upgrade(&catalog, "auto_consonant_guaranteed_1", &mut ledger).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::PrerequisiteUnmet {
                id: "auto_consonant_guaranteed_1".into(),
                requires: "auto_consonant_1".into(),
            }
        );
        assert_eq!(ledger.money(), 1_000);
        assert!(ledger.purchased().is_empty());
    }

    #[test]
    fn rejects_repeat_upgrade() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(1_000);
        purchase_upgrade(&catalog, "extra_strike_1", &mut ledger).unwrap();

        let err = purchase_upgrade(&catalog, "extra_strike_1", &mut ledger).unwrap_err();
        assert_eq!(err, PurchaseError::AlreadyOwned("extra_strike_1".into()));
        assert_eq!(ledger.money(), 750);
    }

    #[test]
    fn rejects_unknown_and_mismatched_ids() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(1_000);
        let mut effects = RecordingEffects::default();

        assert_eq!(
            purchase_upgrade(&catalog, "nope", &mut ledger).unwrap_err(),
            PurchaseError::UnknownEntry("nope".into())
        );
        assert!(matches!(
            purchase_upgrade(&catalog, "free_guess", &mut ledger),
            Err(PurchaseError::KindMismatch { expected: EntryKind::Upgrade, .. })
        ));
        assert!(matches!(
            purchase_consumable(&catalog, "extra_strike_1", &mut ledger, &mut effects),
            Err(PurchaseError::KindMismatch { expected: EntryKind::Consumable, .. })
        ));
        assert_eq!(ledger.money(), 1_000);
    }

    #[test]
    fn consumable_charges_then_applies() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(100);
        let mut effects = RecordingEffects::default();

        let (consumable, outcome) =
            purchase_consumable(&catalog, "bonus_strike", &mut ledger, &mut effects).unwrap();
        assert_eq!(consumable.cost, 75);
        assert_eq!(outcome, EffectOutcome::BonusStrikeGranted { available: 1 });
        assert_eq!(ledger.money(), 25);
        assert_eq!(effects.applied, [ConsumableEffect::BonusStrike]);
        assert!(ledger.purchased().is_empty());
    }

    #[test]
    fn consumable_not_applied_when_unaffordable() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(10);
        let mut effects = RecordingEffects::default();

        let err = purchase_consumable(&catalog, "free_guess", &mut ledger, &mut effects).unwrap_err();
        assert!(matches!(err, PurchaseError::InsufficientFunds { .. }));
        assert!(effects.applied.is_empty());
        assert_eq!(ledger.money(), 10);
    }

    #[test]
    fn consumable_without_effect_is_not_charged() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(100);
        let mut effects = RecordingEffects {
            blocked: true,
            ..Default::default()
        };

        let err = purchase_consumable(&catalog, "free_guess", &mut ledger, &mut effects).unwrap_err();
        assert_eq!(err, PurchaseError::EffectUnavailable("free_guess".into()));
        assert_eq!(ledger.money(), 100);
    }

    #[test]
    fn funds_are_checked_before_effect() {
        let catalog = sample_catalog();
        let mut ledger = EconomyLedger::with_money(3);
        let mut effects = RecordingEffects {
            blocked: true,
            ..Default::default()
        };

        let err = purchase_consumable(&catalog, "free_guess", &mut ledger, &mut effects).unwrap_err();
        assert!(matches!(err, PurchaseError::InsufficientFunds { cost: 50, balance: 3, .. }));
        assert_eq!(ledger.money(), 3);
        assert!(effects.applied.is_empty());
    }
}
