use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use crate::core::domain::{Configuration, PaymentPolicy};
use crate::core::library::{ItemLocation, LibraryError, LibraryResult};
use crate::core::money::Money;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::LibraryItemEntity;
use crate::patrons::Patron;
use crate::patrons::domain::model::PatronEntity;

// OverdueCharge records one fine increment applied by a day tick.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OverdueCharge {
    pub item_id: String,
    pub patron_id: String,
    pub amount: Money,
}

/// Library is the aggregate root owning holdings, membership and the day clock.
///
/// Every operation resolves the ids it is given and checks its preconditions
/// before touching any state, so a failed call leaves the library unchanged.
/// Registered items start on the shelf and registered patrons start with no
/// loans and no fine, whatever state the given entity carried.
#[derive(Debug, PartialEq, Clone)]
pub struct Library {
    holdings: BTreeMap<String, LibraryItemEntity>,
    members: BTreeMap<String, PatronEntity>,
    current_date: u32,
    fine_increment: Money,
    payment_policy: PaymentPolicy,
}

impl Library {
    pub fn new(config: &Configuration) -> Self {
        let fine_increment = if config.fine_increment.is_negative() {
            warn!(branch_id = config.branch_id.as_str(), fine_increment = %config.fine_increment,
                "negative fine increment, no fines will accrue");
            Money::ZERO
        } else {
            config.fine_increment
        };
        Self {
            holdings: BTreeMap::new(),
            members: BTreeMap::new(),
            current_date: 0,
            fine_increment,
            payment_policy: config.payment_policy,
        }
    }

    pub fn current_date(&self) -> u32 {
        self.current_date
    }

    pub fn holdings(&self) -> impl Iterator<Item=&LibraryItemEntity> {
        self.holdings.values()
    }

    pub fn members(&self) -> impl Iterator<Item=&PatronEntity> {
        self.members.values()
    }

    pub fn add_item(&mut self, mut item: LibraryItemEntity) -> LibraryResult<()> {
        if self.holdings.contains_key(item.item_id.as_str()) {
            return Err(LibraryError::duplicate_id(
                format!("item with id {} already exists", item.item_id).as_str()));
        }
        item.reset_lending();
        debug!(item_id = item.item_id.as_str(), kind = item.kind.name(), "item added to holdings");
        self.holdings.insert(item.item_id.to_string(), item);
        Ok(())
    }

    pub fn add_patron(&mut self, mut patron: PatronEntity) -> LibraryResult<()> {
        if self.members.contains_key(patron.patron_id.as_str()) {
            return Err(LibraryError::duplicate_id(
                format!("patron with id {} already exists", patron.patron_id).as_str()));
        }
        patron.reset_account();
        debug!(patron_id = patron.patron_id.as_str(), "patron added to members");
        self.members.insert(patron.patron_id.to_string(), patron);
        Ok(())
    }

    pub fn remove_item(&mut self, item_id: &str) -> LibraryResult<LibraryItemEntity> {
        let item = self.find_item(item_id)?;
        if item.location() == ItemLocation::CheckedOut {
            warn!(item_id, "refusing to remove checked out item");
            return Err(LibraryError::item_checked_out(
                format!("item {} is checked out by {:?}", item_id, item.checked_out_by()).as_str()));
        }
        self.holdings.remove(item_id).ok_or_else(|| LibraryError::item_not_found(item_id))
    }

    pub fn find_item(&self, item_id: &str) -> LibraryResult<&LibraryItemEntity> {
        self.holdings.get(item_id).ok_or_else(|| LibraryError::item_not_found(item_id))
    }

    pub fn find_patron(&self, patron_id: &str) -> LibraryResult<&PatronEntity> {
        self.members.get(patron_id).ok_or_else(|| LibraryError::patron_not_found(patron_id))
    }

    pub fn check_out_item(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()> {
        let patron = self.members.get_mut(patron_id)
            .ok_or_else(|| LibraryError::patron_not_found(patron_id))?;
        let item = self.holdings.get_mut(item_id)
            .ok_or_else(|| LibraryError::item_not_found(item_id))?;
        match item.location {
            ItemLocation::CheckedOut => {
                warn!(patron_id, item_id, "item already checked out");
                return Err(LibraryError::already_checked_out(
                    format!("item {} is already checked out", item_id).as_str()));
            }
            ItemLocation::OnHoldShelf if item.requested_by() != Some(patron_id) => {
                warn!(patron_id, item_id, "item on hold for another patron");
                return Err(LibraryError::on_hold_for_other(
                    format!("item {} is on hold for another patron", item_id).as_str()));
            }
            _ => {}
        }
        item.checked_out_by = Some(patron_id.to_string());
        item.date_checked_out = self.current_date;
        item.location = ItemLocation::CheckedOut;
        if item.requested_by() == Some(patron_id) {
            item.requested_by = None;
        }
        patron.add_held_item(item_id);
        info!(patron_id, item_id, day = self.current_date, "check out successful");
        Ok(())
    }

    pub fn return_item(&mut self, item_id: &str) -> LibraryResult<ItemLocation> {
        let item = self.holdings.get_mut(item_id)
            .ok_or_else(|| LibraryError::item_not_found(item_id))?;
        if item.location != ItemLocation::CheckedOut {
            warn!(item_id, location = %item.location, "item already in library");
            return Err(LibraryError::not_checked_out(
                format!("item {} is not checked out", item_id).as_str()));
        }
        let holder_id = item.checked_out_by.as_deref().unwrap_or_default();
        let holder = self.members.get_mut(holder_id)
            .filter(|holder| holder.holds(item_id))
            .ok_or_else(|| LibraryError::not_held(
                format!("item {} is not held by its recorded patron {}", item_id, holder_id).as_str()))?;
        holder.remove_held_item(item_id)?;
        item.checked_out_by = None;
        item.date_checked_out = 0;
        item.location = if item.requested_by.is_some() {
            ItemLocation::OnHoldShelf
        } else {
            ItemLocation::OnShelf
        };
        info!(item_id, location = %item.location, "return successful");
        Ok(item.location)
    }

    pub fn request_item(&mut self, patron_id: &str, item_id: &str) -> LibraryResult<()> {
        if !self.members.contains_key(patron_id) {
            return Err(LibraryError::patron_not_found(patron_id));
        }
        let item = self.holdings.get_mut(item_id)
            .ok_or_else(|| LibraryError::item_not_found(item_id))?;
        match item.location {
            ItemLocation::CheckedOut => {
                warn!(patron_id, item_id, "request rejected, item already checked out");
                Err(LibraryError::already_checked_out(
                    format!("item {} is already checked out", item_id).as_str()))
            }
            ItemLocation::OnHoldShelf => {
                warn!(patron_id, item_id, "request rejected, item already on hold");
                Err(LibraryError::already_on_hold(
                    format!("item {} is already on hold", item_id).as_str()))
            }
            ItemLocation::OnShelf => {
                item.requested_by = Some(patron_id.to_string());
                item.location = ItemLocation::OnHoldShelf;
                info!(patron_id, item_id, "request successful");
                Ok(())
            }
        }
    }

    pub fn pay_fine(&mut self, patron_id: &str, amount: Money) -> LibraryResult<Money> {
        let patron = self.members.get_mut(patron_id)
            .ok_or_else(|| LibraryError::patron_not_found(patron_id))?;
        if amount.is_negative() {
            return Err(LibraryError::invalid_payment(
                format!("payment amount {} must not be negative", amount).as_str()));
        }
        let balance = patron.adjust_fine(Money::ZERO.saturating_sub(amount), self.payment_policy)?;
        info!(patron_id, paid = %amount, balance = %balance, "payment successful");
        Ok(balance)
    }

    pub fn advance_day(&mut self) -> Vec<OverdueCharge> {
        self.current_date = self.current_date.saturating_add(1);
        let today = self.current_date;
        let mut charges = vec![];
        for item in self.holdings.values().filter(|item| item.is_overdue(today)) {
            let Some(patron_id) = item.checked_out_by() else {
                continue;
            };
            if let Some(patron) = self.members.get_mut(patron_id) {
                patron.accrue_fine(self.fine_increment);
                debug!(patron_id, item_id = item.item_id.as_str(), fine = %patron.fine_balance(), "overdue fine accrued");
                charges.push(OverdueCharge {
                    item_id: item.item_id.to_string(),
                    patron_id: patron_id.to_string(),
                    amount: self.fine_increment,
                });
            }
        }
        charges
    }
}
