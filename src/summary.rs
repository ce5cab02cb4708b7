//! Totals derived from a `Ledger`.

use crate::error::SummaryError;
use crate::ledger::Ledger;
use crate::model::{Amount, AmountFormat};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Chart label of the income bar.
pub const INCOME_LABEL: &str = "Income";
/// Chart label of the expense bar.
pub const EXPENSES_LABEL: &str = "Expenses";

/// Total income, total expense and their difference at a point in time.
///
/// A snapshot is computed from the ledger each time it is needed and is never stored, so it always
/// agrees with the ledger it came from.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SummarySnapshot {
    total_income: Amount,
    total_expense: Amount,
    net: Amount,
}

impl SummarySnapshot {
    pub fn total_income(&self) -> Amount {
        self.total_income
    }

    pub fn total_expense(&self) -> Amount {
        self.total_expense
    }

    /// Savings when positive, a loss when negative.
    pub fn net(&self) -> Amount {
        self.net
    }

    /// The two bars of the summary chart, income first.
    pub fn bars(&self) -> [(&'static str, Amount); 2] {
        [
            (INCOME_LABEL, self.total_income),
            (EXPENSES_LABEL, self.total_expense),
        ]
    }

    /// The three total lines shown on the summary screen.
    pub fn lines(&self, format: &AmountFormat) -> Vec<String> {
        vec![
            format!("Total Income: {}", format.format(self.total_income)),
            format!("Total Expenses: {}", format.format(self.total_expense)),
            format!("Total Savings/Loss: {}", format.format(self.net)),
        ]
    }
}

/// Sums every income amount and every expense amount in `ledger`. Values are exact; nothing is
/// rounded. An empty ledger gives zero for all three totals.
///
/// # Errors
/// - `SummaryError::Overflow` if a total does not fit in a `Decimal`. No total is ever clamped.
pub fn compute_summary(ledger: &Ledger) -> Result<SummarySnapshot, SummaryError> {
    let total_income = sum(ledger.incomes().iter().map(|r| r.amount()), "income")?;
    let total_expense = sum(ledger.expenses().iter().map(|r| r.amount()), "expense")?;
    let net = total_income
        .checked_sub(total_expense)
        .ok_or(SummaryError::Overflow { total: "net" })?;
    Ok(SummarySnapshot {
        total_income: total_income.into(),
        total_expense: total_expense.into(),
        net: net.into(),
    })
}

fn sum(
    mut amounts: impl Iterator<Item = Amount>,
    total: &'static str,
) -> Result<Decimal, SummaryError> {
    amounts.try_fold(Decimal::ZERO, |acc, a| {
        acc.checked_add(a.value())
            .ok_or(SummaryError::Overflow { total })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryKind, RawEntry};
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    fn submit(ledger: &mut Ledger, kind: EntryKind, label: &str, value: &str, date: &str) {
        ledger
            .submit(kind, &RawEntry::new(label, value, date))
            .unwrap();
    }

    #[test]
    fn test_empty_ledger() {
        let summary = compute_summary(&Ledger::new()).unwrap();
        assert!(summary.total_income().is_zero());
        assert!(summary.total_expense().is_zero());
        assert!(summary.net().is_zero());
        assert_eq!(summary, SummarySnapshot::default());
    }

    #[test]
    fn test_income_is_additive() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "1000.00", "2025-01-01");
        submit(&mut ledger, EntryKind::Income, "Gift", "50.00", "2025-01-02");
        let summary = compute_summary(&ledger).unwrap();
        assert_eq!(summary.total_income(), amount("1050.00"));
        assert!(summary.total_expense().is_zero());
        assert_eq!(summary.net(), amount("1050.00"));
    }

    #[test]
    fn test_net() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "1000.00", "2025-01-01");
        submit(&mut ledger, EntryKind::Income, "Gift", "50.00", "2025-01-02");
        submit(&mut ledger, EntryKind::Expense, "Rent", "500.00", "2025-01-03");
        let summary = compute_summary(&ledger).unwrap();
        assert_eq!(summary.total_income(), amount("1050.00"));
        assert_eq!(summary.total_expense(), amount("500.00"));
        assert_eq!(summary.net(), amount("550.00"));
    }

    #[test]
    fn test_loss_is_negative() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "100", "2025-01-01");
        submit(&mut ledger, EntryKind::Expense, "Car", "250.75", "2025-01-03");
        let summary = compute_summary(&ledger).unwrap();
        assert_eq!(summary.net(), amount("-150.75"));
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "a", "0.1", "2025-01-01");
        submit(&mut ledger, EntryKind::Income, "b", "0.2", "2025-01-01");
        assert_eq!(compute_summary(&ledger).unwrap().total_income(), amount("0.3"));
    }

    #[test]
    fn test_idempotent() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "10", "2025-01-01");
        submit(&mut ledger, EntryKind::Expense, "Food", "3", "2025-01-01");
        assert_eq!(compute_summary(&ledger).unwrap(), compute_summary(&ledger).unwrap());
    }

    const LARGE: &str = "70000000000000000000000000000";

    #[test]
    fn test_sum_up_to_the_largest_decimal() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "a", LARGE, "2025-01-01");
        let rest = "9228162514264337593543950335";
        submit(&mut ledger, EntryKind::Income, "b", rest, "2025-01-01");
        submit(&mut ledger, EntryKind::Expense, "c", "1", "2025-01-01");
        let summary = compute_summary(&ledger).unwrap();
        assert_eq!(summary.total_income().value(), Decimal::MAX);
        assert_eq!(summary.net().value(), Decimal::MAX - Decimal::ONE);
    }

    #[test]
    fn test_income_overflow_is_an_error() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "a", LARGE, "2025-01-01");
        submit(&mut ledger, EntryKind::Income, "b", LARGE, "2025-01-02");
        assert_eq!(
            compute_summary(&ledger),
            Err(SummaryError::Overflow { total: "income" })
        );
    }

    #[test]
    fn test_expense_overflow_is_an_error() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Expense, "a", LARGE, "2025-01-01");
        submit(&mut ledger, EntryKind::Expense, "b", LARGE, "2025-01-02");
        assert_eq!(
            compute_summary(&ledger),
            Err(SummaryError::Overflow { total: "expense" })
        );
    }

    #[test]
    fn test_net_overflow_is_an_error() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "a", LARGE, "2025-01-01");
        let negative = format!("-{LARGE}");
        submit(&mut ledger, EntryKind::Expense, "b", &negative, "2025-01-02");
        assert_eq!(
            compute_summary(&ledger),
            Err(SummaryError::Overflow { total: "net" })
        );
    }

    #[test]
    fn test_bars() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "10", "2025-01-01");
        submit(&mut ledger, EntryKind::Expense, "Food", "3", "2025-01-01");
        let bars = compute_summary(&ledger).unwrap().bars();
        assert_eq!(bars[0], ("Income", amount("10")));
        assert_eq!(bars[1], ("Expenses", amount("3")));
    }

    #[test]
    fn test_lines() {
        let mut ledger = Ledger::new();
        submit(&mut ledger, EntryKind::Income, "Job", "1000", "2025-01-01");
        submit(&mut ledger, EntryKind::Income, "Gift", "50", "2025-01-02");
        submit(&mut ledger, EntryKind::Expense, "Rent", "500", "2025-01-03");
        let lines = compute_summary(&ledger).unwrap().lines(&AmountFormat::default());
        assert_eq!(
            lines,
            vec![
                "Total Income: $1,050.00",
                "Total Expenses: $500.00",
                "Total Savings/Loss: $550.00",
            ]
        );
    }
}
