use crate::core::library::ItemLocation;

pub mod model;

pub trait LibraryItem: Sync + Send {
    fn title(&self) -> &str;
    fn location(&self) -> ItemLocation;
    fn date_checked_out(&self) -> u32;
    fn checkout_length_days(&self) -> u32;

    // Fines accrue once the loan has run strictly longer than the checkout length.
    fn is_overdue(&self, today: u32) -> bool {
        self.location() == ItemLocation::CheckedOut &&
            today.saturating_sub(self.date_checked_out()) > self.checkout_length_days()
    }
}
