//! Amount type for handling monetary values.
//!
//! This module provides the `Amount` type which wraps `Decimal`, parses user-entered numbers and
//! formats values for display with a currency symbol and optional thousands separators.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Represents how amounts should be written for display.
///
/// # Examples
///  - `AmountFormat{ symbol: "$", commas: true }` -> `-$60,000.00`
///  - `AmountFormat{ symbol: "", commas: true }` -> `-60,000.00`
///  - `AmountFormat{ symbol: "", commas: false }` -> `-60000.00`
///  - `AmountFormat{ symbol: "€", commas: false }` -> `-€60000.00`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountFormat {
    /// The currency symbol written before the number.
    symbol: String,
    /// Whether commas are written as thousands separators.
    commas: bool,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL, true)
    }
}

/// The default currency symbol.
pub const DEFAULT_SYMBOL: &str = "$";

impl AmountFormat {
    pub fn new(symbol: impl Into<String>, commas: bool) -> Self {
        Self {
            symbol: symbol.into(),
            commas,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn commas(&self) -> bool {
        self.commas
    }

    /// Writes `amount` rounded to exactly two decimal places, e.g. `$1,050.00`. Every digit of
    /// the whole part is kept, however large.
    pub fn format(&self, amount: Amount) -> String {
        let rounded = amount.value().round_dp(2);
        let sign = if !rounded.is_zero() && rounded.is_sign_negative() {
            "-"
        } else {
            ""
        };

        let text = rounded.abs().to_string();
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let whole = if self.commas {
            group_thousands(whole)
        } else {
            whole.to_string()
        };

        format!("{sign}{}{whole}.{fraction:0<2}", self.symbol)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (ix, c) in digits.chars().enumerate() {
        if ix > 0 && (digits.len() - ix) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Represents an amount of money entered as income or expense.
///
/// The value is held as a `Decimal` so that sums are exact. Any sign is allowed: zero and negative
/// amounts are valid entries.
///
/// # Examples
///
/// ```
/// # use fincalc::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("1000.5").unwrap();
/// assert_eq!(amount.to_string(), "$1,000.50");
/// ```
///
/// Exponent notation is accepted:
/// ```
/// # use fincalc::model::Amount;
/// # use std::str::FromStr;
/// let amount = Amount::from_str("2.5e2").unwrap();
/// assert_eq!(amount.to_string(), "$250.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    value: Decimal,
}

impl Amount {
    pub const ZERO: Amount = Amount::new(Decimal::ZERO);

    pub const fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Returns the underlying Decimal value.
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value().is_zero()
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.value().is_sign_negative()
    }
}

/// An error that can occur when parsing text into an `Amount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("an amount cannot be empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// A well-formed number too large in magnitude to be held exactly.
    #[error("'{0}' is too large to record as an amount")]
    OutOfRange(String),
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(AmountError::Empty);
        }

        // Decimal::from_str does not understand exponents
        let parsed = if trimmed.contains(|c| c == 'e' || c == 'E') {
            Decimal::from_scientific(trimmed)
        } else {
            Decimal::from_str(trimmed)
        };

        if let Ok(value) = parsed {
            return Ok(Amount::new(value));
        }

        // Too many digits or too large an exponent for a Decimal. A value too small to hold is
        // rounded to the nearest one that is, down to zero.
        match f64::from_str(trimmed) {
            Ok(float) if float.is_finite() => Decimal::from_f64(float)
                .map(Amount::new)
                .ok_or_else(|| AmountError::OutOfRange(s.to_string())),
            // inf and nan are not amounts, but 1e400 is a number that overflows an f64
            Ok(_) if trimmed.bytes().any(|b| b.is_ascii_digit()) => {
                Err(AmountError::OutOfRange(s.to_string()))
            }
            _ => Err(AmountError::NotANumber(s.to_string())),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&AmountFormat::default().format(*self))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Plain decimal text, without symbol or separators
        serializer.serialize_str(&self.value.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.value()
    }
}
