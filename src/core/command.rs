use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    // A lending rule refused the request; reason_code names the rule.
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        let reason_code = Some(other.reason_code().to_string());
        match other {
            LibraryError::PatronNotFound { message } | LibraryError::ItemNotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::DuplicateId { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::ItemCheckedOut { message }
            | LibraryError::AlreadyCheckedOut { message }
            | LibraryError::OnHoldForOther { message }
            | LibraryError::NotCheckedOut { message }
            | LibraryError::AlreadyOnHold { message }
            | LibraryError::InvalidPayment { message } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotHeld { message } => {
                CommandError::Runtime { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::DuplicateKey { message }
            | CommandError::NotFound { message }
            | CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, reason_code }
            | CommandError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for CommandError {}
