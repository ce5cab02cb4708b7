//! Reads a batch of raw entries from CSV.
//!
//! The CSV must have a header row with the columns `kind,label,amount,date`, where `kind` is
//! `income` or `expense`. Entries are returned unvalidated, exactly as written.

use crate::model::{EntryKind, RawEntry};
use crate::{utils, Result};
use anyhow::Context;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
struct CsvEntry {
    kind: EntryKind,
    label: String,
    amount: String,
    date: String,
}

/// Reads every row of the CSV file at `path`.
pub async fn read_file(path: &Path) -> Result<Vec<(EntryKind, RawEntry)>> {
    let content = utils::read(path).await?;
    read(content.as_bytes())
        .with_context(|| format!("Unable to read entries from {}", path.display()))
}

/// Reads every row of CSV data from `r`.
pub fn read(r: impl Read) -> Result<Vec<(EntryKind, RawEntry)>> {
    let mut rdr = csv::Reader::from_reader(r);
    let mut entries = Vec::new();
    for (ix, result) in rdr.deserialize::<CsvEntry>().enumerate() {
        // Row 1 is the header
        let row = result.with_context(|| format!("Invalid CSV row {}", ix + 2))?;
        entries.push((row.kind, RawEntry::new(row.label, row.amount, row.date)));
    }
    Ok(entries)
}
