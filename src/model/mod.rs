//! Types that represent the core data model, such as `Amount` and `IncomeRecord`.
mod amount;
mod record;

pub use amount::{Amount, AmountError, AmountFormat, DEFAULT_SYMBOL};
pub use record::{EntryKind, ExpenseRecord, IncomeRecord, RawEntry};
