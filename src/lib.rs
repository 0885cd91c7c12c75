//! In-memory lending library: items and patrons registered with a single
//! `Library`, lent out, returned, requested and fined as the day clock advances.

pub mod catalog;
pub mod checkout;
pub mod core;
pub mod gateway;
pub mod hold;
pub mod items;
pub mod library;
pub mod patrons;
pub mod utils;
