//! Money and permanent upgrades, kept across rounds until a loss.

use std::collections::BTreeSet;

use crate::catalog::EntryId;
use crate::config::PayoutRules;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EconomyLedger {
    money: u64,
    purchased: BTreeSet<EntryId>,
}

impl EconomyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_money(money: u64) -> Self {
        Self {
            money,
            purchased: BTreeSet::new(),
        }
    }

    pub fn money(&self) -> u64 {
        self.money
    }

    pub fn purchased(&self) -> &BTreeSet<EntryId> {
        &self.purchased
    }

    pub fn owns(&self, id: &str) -> bool {
        self.purchased.contains(id)
    }

    /// Deducts `amount` if the balance covers it. Returns whether it did.
    pub fn spend(&mut self, amount: u64) -> bool {
        match self.money.checked_sub(amount) {
            Some(rest) => {
                self.money = rest;
                true
            }
            None => false,
        }
    }

    pub fn deposit(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    /// Pays out a won round and returns the amount earned.
    pub fn earn(
        &mut self,
        rules: &PayoutRules,
        difficulty: f64,
        strikes_left: u32,
        streak: u32,
    ) -> u64 {
        let amount = rules.payout(difficulty, strikes_left, streak);
        self.deposit(amount);
        amount
    }

    pub(crate) fn grant(&mut self, id: EntryId) {
        self.purchased.insert(id);
    }

    /// Clears money and every upgrade. Only a lost round calls this.
    pub fn reset(&mut self) {
        self.money = 0;
        self.purchased.clear();
    }
}
