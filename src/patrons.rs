use crate::core::money::Money;

pub mod command;
pub mod domain;
pub mod dto;

pub trait Patron: Sync + Send {
    fn name(&self) -> &str;
    fn fine_balance(&self) -> Money;
    fn held_items(&self) -> &[String];

    fn holds(&self, item_id: &str) -> bool {
        self.held_items().iter().any(|held| held == item_id)
    }
}
