use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq)]
pub enum LibraryError {
    PatronNotFound {
        message: String,
    },
    ItemNotFound {
        message: String,
    },
    DuplicateId {
        message: String,
    },
    // Removal is refused while a patron still has the item.
    ItemCheckedOut {
        message: String,
    },
    AlreadyCheckedOut {
        message: String,
    },
    OnHoldForOther {
        message: String,
    },
    NotCheckedOut {
        message: String,
    },
    AlreadyOnHold {
        message: String,
    },
    // The holder recorded on an item does not list it among its held items.
    NotHeld {
        message: String,
    },
    InvalidPayment {
        message: String,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn patron_not_found(patron_id: &str) -> LibraryError {
        LibraryError::PatronNotFound { message: format!("patron {} not found", patron_id) }
    }

    pub fn item_not_found(item_id: &str) -> LibraryError {
        LibraryError::ItemNotFound { message: format!("item {} not found", item_id) }
    }

    pub fn duplicate_id(message: &str) -> LibraryError {
        LibraryError::DuplicateId { message: message.to_string() }
    }

    pub fn item_checked_out(message: &str) -> LibraryError {
        LibraryError::ItemCheckedOut { message: message.to_string() }
    }

    pub fn already_checked_out(message: &str) -> LibraryError {
        LibraryError::AlreadyCheckedOut { message: message.to_string() }
    }

    pub fn on_hold_for_other(message: &str) -> LibraryError {
        LibraryError::OnHoldForOther { message: message.to_string() }
    }

    pub fn not_checked_out(message: &str) -> LibraryError {
        LibraryError::NotCheckedOut { message: message.to_string() }
    }

    pub fn already_on_hold(message: &str) -> LibraryError {
        LibraryError::AlreadyOnHold { message: message.to_string() }
    }

    pub fn not_held(message: &str) -> LibraryError {
        LibraryError::NotHeld { message: message.to_string() }
    }

    pub fn invalid_payment(message: &str) -> LibraryError {
        LibraryError::InvalidPayment { message: message.to_string() }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    // Stable code naming the rule that rejected the call.
    pub fn reason_code(&self) -> &'static str {
        match self {
            LibraryError::PatronNotFound { .. } => { "PATRON_NOT_FOUND" }
            LibraryError::ItemNotFound { .. } => { "ITEM_NOT_FOUND" }
            LibraryError::DuplicateId { .. } => { "DUPLICATE_ID" }
            LibraryError::ItemCheckedOut { .. } => { "ITEM_CHECKED_OUT" }
            LibraryError::AlreadyCheckedOut { .. } => { "ALREADY_CHECKED_OUT" }
            LibraryError::OnHoldForOther { .. } => { "ON_HOLD_FOR_OTHER" }
            LibraryError::NotCheckedOut { .. } => { "NOT_CHECKED_OUT" }
            LibraryError::AlreadyOnHold { .. } => { "ALREADY_ON_HOLD" }
            LibraryError::NotHeld { .. } => { "NOT_HELD" }
            LibraryError::InvalidPayment { .. } => { "INVALID_PAYMENT" }
            LibraryError::Serialization { .. } => { "SERIALIZATION" }
            LibraryError::Runtime { .. } => { "RUNTIME" }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::PatronNotFound { message }
            | LibraryError::ItemNotFound { message }
            | LibraryError::DuplicateId { message }
            | LibraryError::ItemCheckedOut { message }
            | LibraryError::AlreadyCheckedOut { message }
            | LibraryError::OnHoldForOther { message }
            | LibraryError::NotCheckedOut { message }
            | LibraryError::AlreadyOnHold { message }
            | LibraryError::NotHeld { message }
            | LibraryError::InvalidPayment { message }
            | LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ItemLocation {
    OnShelf,
    OnHoldShelf,
    CheckedOut,
}

impl Display for ItemLocation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ItemLocation::OnShelf => write!(f, "ON_SHELF"),
            ItemLocation::OnHoldShelf => write!(f, "ON_HOLD_SHELF"),
            ItemLocation::CheckedOut => write!(f, "CHECKED_OUT"),
        }
    }
}
