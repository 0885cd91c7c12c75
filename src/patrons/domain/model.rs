use serde::{Deserialize, Serialize};
use crate::core::domain::PaymentPolicy;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::money::Money;
use crate::patrons::Patron;

// PatronEntity abstracts library member. Held items are listed by id so the
// patron never owns the items themselves.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub name: String,
    pub(crate) held_items: Vec<String>,
    pub(crate) fine_balance: Money,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
            held_items: vec![],
            fine_balance: Money::ZERO,
        }
    }

    // Registration starts every member with no loans and nothing owed.
    pub(crate) fn reset_account(&mut self) {
        self.held_items.clear();
        self.fine_balance = Money::ZERO;
    }

    pub(crate) fn add_held_item(&mut self, item_id: &str) {
        if !self.holds(item_id) {
            self.held_items.push(item_id.to_string());
        }
    }

    pub(crate) fn remove_held_item(&mut self, item_id: &str) -> LibraryResult<()> {
        let pos = self.held_items.iter().position(|held| held == item_id)
            .ok_or_else(|| LibraryError::not_held(
                format!("patron {} does not hold item {}", self.patron_id, item_id).as_str()))?;
        self.held_items.remove(pos);
        Ok(())
    }

    pub(crate) fn accrue_fine(&mut self, amount: Money) {
        self.fine_balance = self.fine_balance.saturating_add(amount);
    }

    // Negative deltas are payments.
    pub(crate) fn adjust_fine(&mut self, delta: Money, policy: PaymentPolicy) -> LibraryResult<Money> {
        let next = self.fine_balance.saturating_add(delta);
        if next.is_negative() {
            match policy {
                PaymentPolicy::Clamp => {
                    self.fine_balance = Money::ZERO;
                }
                PaymentPolicy::Reject => {
                    return Err(LibraryError::invalid_payment(
                        format!("payment of {} exceeds fine {} owed by patron {}",
                                Money::ZERO.saturating_sub(delta), self.fine_balance, self.patron_id).as_str()));
                }
            }
        } else {
            self.fine_balance = next;
        }
        Ok(self.fine_balance)
    }
}

impl Patron for PatronEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn fine_balance(&self) -> Money {
        self.fine_balance
    }

    fn held_items(&self) -> &[String] {
        &self.held_items
    }
}
