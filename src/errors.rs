use thiserror::Error;

use crate::types::{LoanId, LoanStatus};

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("{message}")]
    Validation {
        message: String,
    },

    #[error("invalid transition: loan {id} is {status:?}, only pending loans can be decided")]
    InvalidTransition {
        id: LoanId,
        status: LoanStatus,
    },

    #[error("loan not found: {id}")]
    LoanNotFound {
        id: LoanId,
    },

    #[error("persistence failure: {message}")]
    Persistence {
        message: String,
    },
}

impl LoanError {
    /// validation error with the given field message
    pub fn validation(message: impl Into<String>) -> Self {
        LoanError::Validation {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
