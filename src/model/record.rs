use crate::error::Field;
use crate::model::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an entry is money coming in or going out.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Income,
    Expense,
}

serde_plain::derive_display_from_serialize!(EntryKind);
serde_plain::derive_fromstr_from_deserialize!(EntryKind);

impl EntryKind {
    /// The name of the text field that labels an entry of this kind.
    pub fn label_field(self) -> Field {
        match self {
            EntryKind::Income => Field::Source,
            EntryKind::Expense => Field::Category,
        }
    }

    /// The prompt shown for the label field.
    pub fn label_prompt(self) -> &'static str {
        match self {
            EntryKind::Income => "Source of Income",
            EntryKind::Expense => "Category",
        }
    }
}

/// A recorded income entry.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    source: String,
    amount: Amount,
    date: NaiveDate,
}

impl IncomeRecord {
    pub(crate) fn new(source: String, amount: Amount, date: NaiveDate) -> Self {
        Self {
            source,
            amount,
            date,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// A recorded expense entry.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    category: String,
    amount: Amount,
    date: NaiveDate,
}

impl ExpenseRecord {
    pub(crate) fn new(category: String, amount: Amount, date: NaiveDate) -> Self {
        Self {
            category,
            amount,
            date,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// The raw text of one submitted entry, exactly as the user typed it. `label` is the source of an
/// income entry or the category of an expense entry.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub label: String,
    pub amount: String,
    pub date: String,
}

impl RawEntry {
    pub fn new(
        label: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }
}
