//! Checks raw text against the semantic types an entry needs before it can be recorded.
//!
//! `validate` answers yes or no. The `parse_*` functions do the same checks but return the parsed
//! value, or an `EntryError` naming the field that failed.

use crate::error::{EntryError, Field};
use crate::model::{Amount, AmountError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The only date layout accepted, e.g. `2025-04-08`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The kinds of value raw text can be checked against.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// A base-10 number such as `12.50`, `-3` or `1e3`.
    Decimal,
    /// A calendar date written as `YYYY-MM-DD`.
    Date,
}

serde_plain::derive_display_from_serialize!(Kind);
serde_plain::derive_fromstr_from_deserialize!(Kind);

/// Returns true if `raw` is a valid value of `kind`. Empty text is never valid.
pub fn validate(raw: &str, kind: Kind) -> bool {
    if raw.is_empty() {
        return false;
    }
    match kind {
        // A number too large to record is still a number
        Kind::Decimal => matches!(
            Amount::from_str(raw),
            Ok(_) | Err(AmountError::OutOfRange(_))
        ),
        Kind::Date => date(raw).is_some(),
    }
}

/// Returns the label unchanged, or an error if it is empty.
pub fn parse_label(raw: &str, field: Field) -> Result<String, EntryError> {
    if raw.is_empty() {
        return Err(EntryError::EmptyField { field });
    }
    Ok(raw.to_string())
}

pub fn parse_amount(raw: &str) -> Result<Amount, EntryError> {
    if raw.is_empty() {
        return Err(EntryError::EmptyField {
            field: Field::Amount,
        });
    }
    Amount::from_str(raw).map_err(|e| match e {
        AmountError::OutOfRange(_) => EntryError::OutOfRange {
            field: Field::Amount,
            value: raw.to_string(),
        },
        AmountError::Empty | AmountError::NotANumber(_) => EntryError::InvalidNumber {
            field: Field::Amount,
            value: raw.to_string(),
        },
    })
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, EntryError> {
    if raw.is_empty() {
        return Err(EntryError::EmptyField { field: Field::Date });
    }
    date(raw).ok_or_else(|| EntryError::InvalidDate {
        field: Field::Date,
        value: raw.to_string(),
    })
}

fn date(raw: &str) -> Option<NaiveDate> {
    // chrono accepts single-digit months and days and any number of year digits, so the shape is
    // checked here before the calendar is.
    if !has_date_shape(raw) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(ix, b)| match ix {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
