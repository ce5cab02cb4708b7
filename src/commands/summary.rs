//! The `summary` command: totals for a batch of entries given up front.

use crate::args::SummaryArgs;
use crate::chart::{BarChart, SUMMARY_TITLE};
use crate::commands::Out;
use crate::import;
use crate::ledger::Ledger;
use crate::model::{EntryKind, RawEntry};
use crate::summary::{compute_summary, SummarySnapshot};
use crate::{Config, Result};
use serde::Serialize;

/// An entry that failed validation and was left out of the totals.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Rejection {
    kind: EntryKind,
    entry: RawEntry,
    reason: String,
}

impl Rejection {
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn entry(&self) -> &RawEntry {
        &self.entry
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The structured output of the `summary` command.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    summary: SummarySnapshot,
    recorded: usize,
    rejected: Vec<Rejection>,
}

impl SummaryReport {
    pub fn summary(&self) -> &SummarySnapshot {
        &self.summary
    }

    /// The number of entries that were recorded.
    pub fn recorded(&self) -> usize {
        self.recorded
    }

    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }
}

/// Records the entries from the CSV file (if given) followed by the `--income` and `--expense`
/// entries, then computes the summary. Each invalid entry is rejected on its own; the rest are
/// still recorded.
///
/// # Errors
/// - Returns an error if the CSV file cannot be read or parsed.
/// - Returns an error if a total is too large to compute.
pub async fn summary(config: Config, args: SummaryArgs) -> Result<Out<SummaryReport>> {
    let mut entries = Vec::new();
    if let Some(path) = args.file() {
        entries.extend(import::read_file(path).await?);
    }
    entries.extend(
        args.income()
            .iter()
            .map(|e| (EntryKind::Income, e.raw().clone())),
    );
    entries.extend(
        args.expense()
            .iter()
            .map(|e| (EntryKind::Expense, e.raw().clone())),
    );

    let mut ledger = Ledger::new();
    let mut rejected = Vec::new();
    for (kind, entry) in entries {
        if let Err(e) = ledger.submit(kind, &entry) {
            rejected.push(Rejection {
                kind,
                entry,
                reason: e.to_string(),
            });
        }
    }

    let snapshot = compute_summary(&ledger)?;
    let format = config.amount_format();
    let mut message = snapshot.lines(&format).join("\n");
    message.push_str("\n\n");
    message.push_str(
        &BarChart::new(SUMMARY_TITLE, snapshot.bars()).render(config.chart_width(), &format),
    );
    if !rejected.is_empty() {
        message.push_str(&format!("\nRejected {} invalid entries:\n", rejected.len()));
        for r in &rejected {
            message.push_str(&format!("- {} '{}': {}\n", r.kind, r.entry.label, r.reason));
        }
    }

    let report = SummaryReport {
        summary: snapshot,
        recorded: ledger.len(),
        rejected,
    };
    Ok(Out::new(message.trim_end(), report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::EntryArg;
    use crate::model::Amount;
    use std::str::FromStr;

    fn entries(items: &[&str]) -> Vec<EntryArg> {
        items.iter().map(|s| EntryArg::from_str(s).unwrap()).collect()
    }

    #[tokio::test]
    async fn test_summary_from_args() {
        let args = SummaryArgs::new(
            None,
            entries(&["Job,1000.00,2025-01-01", "Gift,50.00,2025-01-02"]),
            entries(&["Rent,500.00,2025-01-03"]),
        );
        let out = summary(Config::default(), args).await.unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.recorded(), 3);
        assert!(report.rejected().is_empty());
        assert_eq!(
            report.summary().net(),
            Amount::from_str("550.00").unwrap()
        );
        assert!(out.message().starts_with("Total Income: $1,050.00\n"));
        assert!(out.message().contains("Income vs Expenses"));
    }

    #[tokio::test]
    async fn test_summary_rejects_invalid_entries() {
        let args = SummaryArgs::new(
            None,
            entries(&["Job,1000,2025-01-01", "Gift,abc,2025-01-02"]),
            entries(&["Rent,500,2025-13-01"]),
        );
        let out = summary(Config::default(), args).await.unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.recorded(), 1);
        assert_eq!(report.rejected().len(), 2);
        assert_eq!(report.rejected()[0].kind(), EntryKind::Income);
        assert_eq!(report.rejected()[0].entry().amount, "abc");
        assert_eq!(report.rejected()[1].kind(), EntryKind::Expense);
        assert_eq!(
            report.summary().total_expense(),
            Amount::ZERO
        );
        assert!(out.message().contains("Rejected 2 invalid entries"));
        assert!(out
            .message()
            .contains("- income 'Gift': 'abc' is not a valid number for amount"));
    }

    #[tokio::test]
    async fn test_summary_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("entries.csv");
        crate::utils::write(
            &path,
            "kind,label,amount,date\n\
             income,Job,1000,2025-01-01\n\
             expense,Rent,500,2025-01-03\n",
        )
        .await
        .unwrap();

        let args = SummaryArgs::new(Some(path), entries(&["Gift,50,2025-01-02"]), Vec::new());
        let out = summary(Config::default(), args).await.unwrap();
        let report = out.structure().unwrap();
        assert_eq!(report.recorded(), 3);
        assert_eq!(
            report.summary().total_income(),
            Amount::from_str("1050").unwrap()
        );
    }

    #[tokio::test]
    async fn test_summary_total_overflow() {
        let large = "70000000000000000000000000000";
        let job = format!("Job,{large},2025-01-01");
        let bonus = format!("Bonus,{large},2025-01-02");
        let args = SummaryArgs::new(None, entries(&[job.as_str(), bonus.as_str()]), Vec::new());
        let err = summary(Config::default(), args).await.unwrap_err();
        assert_eq!(err.to_string(), "the income total is too large to compute");
    }

    #[tokio::test]
    async fn test_summary_missing_file() {
        let args = SummaryArgs::new(
            Some("/definitely/not/here.csv".into()),
            Vec::new(),
            Vec::new(),
        );
        assert!(summary(Config::default(), args).await.is_err());
    }
}
