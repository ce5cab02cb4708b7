//! The in-memory, append-only store of income and expense records.

use crate::error::EntryError;
use crate::model::{Amount, EntryKind, ExpenseRecord, IncomeRecord, RawEntry};
use crate::validate;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

/// Holds every income and expense record entered during the session, in insertion order.
///
/// A `Ledger` is created empty and lives for as long as its owner keeps it. Records can be added
/// but never changed or removed. Use `submit` to add raw user input: it validates every field
/// first and stores nothing unless all of them pass.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Ledger {
    incomes: Vec<IncomeRecord>,
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an income record. `source` is expected to be non-empty; the caller is trusted.
    pub fn add_income(&mut self, source: impl Into<String>, amount: Amount, date: NaiveDate) {
        let record = IncomeRecord::new(source.into(), amount, date);
        debug!(
            "Recorded income '{}' of {} on {}",
            record.source(),
            amount,
            date
        );
        self.incomes.push(record);
    }

    /// Appends an expense record. `category` is expected to be non-empty; the caller is trusted.
    pub fn add_expense(&mut self, category: impl Into<String>, amount: Amount, date: NaiveDate) {
        let record = ExpenseRecord::new(category.into(), amount, date);
        debug!(
            "Recorded expense '{}' of {} on {}",
            record.category(),
            amount,
            date
        );
        self.expenses.push(record);
    }

    /// Validates `entry` and, only if the label, amount and date are all valid, appends it as a
    /// record of the given `kind`. Fields are checked in that order and the first failure is
    /// returned.
    ///
    /// # Errors
    /// - `EntryError::EmptyField` if the label (or any other field) is empty.
    /// - `EntryError::InvalidNumber` if the amount is not a number.
    /// - `EntryError::OutOfRange` if the amount is a number too large to record.
    /// - `EntryError::InvalidDate` if the date is not a real `YYYY-MM-DD` date.
    pub fn submit(&mut self, kind: EntryKind, entry: &RawEntry) -> Result<(), EntryError> {
        let checked = validate::parse_label(&entry.label, kind.label_field()).and_then(|label| {
            let amount = validate::parse_amount(&entry.amount)?;
            let date = validate::parse_date(&entry.date)?;
            Ok((label, amount, date))
        });

        let (label, amount, date) = match checked {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Rejected {kind} entry: {e}");
                return Err(e);
            }
        };

        match kind {
            EntryKind::Income => self.add_income(label, amount, date),
            EntryKind::Expense => self.add_expense(label, amount, date),
        }
        Ok(())
    }

    pub fn incomes(&self) -> &[IncomeRecord] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// The total number of records of both kinds.
    pub fn len(&self) -> usize {
        self.incomes.len() + self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
