//! Record income and expense entries and summarize them.
//!
//! The core is three pieces that know nothing about any user interface:
//! - [`validate`] checks raw text before it may become part of a record,
//! - [`Ledger`] stores the records for as long as it is kept alive,
//! - [`compute_summary`] derives total income, total expense and net savings from a ledger.
//!
//! The [`session`] module and the [`commands`] drive these from a terminal.

pub mod args;
pub mod chart;
pub mod commands;
mod config;
mod error;
mod import;
mod ledger;
pub mod model;
pub mod session;
mod summary;
mod utils;
pub mod validate;

pub use config::{default_config_path, init_path, Config};
pub use error::{EntryError, Error, Field, Result, SummaryError};
pub use ledger::Ledger;
pub use summary::{compute_summary, SummarySnapshot};
