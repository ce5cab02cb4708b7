//! Error types.
//!
//! Application failures (config files, CSV input, terminal I/O) are `anyhow` errors carried by
//! the crate's `Result` alias. A rejected entry is an `EntryError`, which names the field that
//! failed so the presentation layer can tell the user what to fix.

use crate::model::EntryKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The input fields of an income or expense entry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The label of an income entry.
    Source,
    /// The label of an expense entry.
    Category,
    Amount,
    Date,
}

serde_plain::derive_display_from_serialize!(Field);
serde_plain::derive_fromstr_from_deserialize!(Field);

/// The reason an entry was rejected. A rejected entry is never stored, not even in part.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum EntryError {
    #[error("{field} must not be empty")]
    EmptyField { field: Field },
    #[error("'{value}' is not a valid number for {field}")]
    InvalidNumber { field: Field, value: String },
    #[error("'{value}' is not a valid {field}, expected YYYY-MM-DD")]
    InvalidDate { field: Field, value: String },
    #[error("'{value}' is too large to record as an {field}")]
    OutOfRange { field: Field, value: String },
}

/// The totals of a ledger cannot be computed without losing their value.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum SummaryError {
    #[error("the {total} total is too large to compute")]
    Overflow { total: &'static str },
}

impl EntryError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            EntryError::EmptyField { field }
            | EntryError::InvalidNumber { field, .. }
            | EntryError::InvalidDate { field, .. }
            | EntryError::OutOfRange { field, .. } => *field,
        }
    }

    /// The generic notice shown for any rejected entry of the given kind, regardless of which
    /// field failed.
    pub fn notice(kind: EntryKind) -> String {
        format!("Please enter valid {kind} details.")
    }
}
