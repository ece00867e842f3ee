use thiserror::Error;

use crate::domain::{ParseCentsError, ParseDateError};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount '{input}': {source}")]
    InvalidAmount {
        input: String,
        source: ParseCentsError,
    },

    #[error("{0}")]
    InvalidDate(#[from] ParseDateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
