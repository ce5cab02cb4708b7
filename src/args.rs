//! These structs provide the CLI interface for the fincalc CLI.

use crate::model::RawEntry;
use crate::validate::Kind;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// fincalc: A personal finance calculator.
///
/// Record income and expense entries, then view your total income, total expenses and net
/// savings or loss along with a chart comparing the two. Entries are kept in memory only and are
/// gone when the program exits.
///
/// Run without a subcommand to start the interactive menu.
#[derive(Debug, Parser, Clone)]
#[command(version)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn new(common: Common, command: Option<Command>) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The subcommand to run. Defaults to `interactive`.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Interactive)
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Write a config file with default settings.
    ///
    /// The file is written to --config if given, otherwise to the default location in your
    /// platform's config directory (e.g. ~/.config/fincalc/config.json).
    Init(InitArgs),
    /// Start the interactive menu to enter income and expenses and view the summary.
    Interactive,
    /// Summarize entries given on the command line or in a CSV file.
    ///
    /// Invalid entries are reported and left out of the totals.
    Summary(SummaryArgs),
    /// Check whether some text is a valid decimal amount or date.
    Validate(ValidateArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The path to the config file. Defaults to fincalc/config.json in your platform's config
    /// directory, and default settings are used if that file does not exist.
    #[arg(long, env = "FINCALC_CONFIG")]
    config: Option<PathBuf>,
}

impl Common {
    pub fn new(log_level: LevelFilter, config: Option<PathBuf>) -> Self {
        Self { log_level, config }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Args for the `fincalc init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    force: bool,
}

impl InitArgs {
    pub fn new(force: bool) -> Self {
        Self { force }
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Args for the `fincalc summary` command.
#[derive(Debug, Parser, Clone, Default)]
pub struct SummaryArgs {
    /// A CSV file of entries with the header `kind,label,amount,date`, where kind is `income` or
    /// `expense`.
    #[arg(long, short = 'f')]
    file: Option<PathBuf>,

    /// An income entry. May be repeated.
    #[arg(long, value_name = "SOURCE,AMOUNT,DATE")]
    income: Vec<EntryArg>,

    /// An expense entry. May be repeated.
    #[arg(long, value_name = "CATEGORY,AMOUNT,DATE")]
    expense: Vec<EntryArg>,
}

impl SummaryArgs {
    pub fn new(file: Option<PathBuf>, income: Vec<EntryArg>, expense: Vec<EntryArg>) -> Self {
        Self {
            file,
            income,
            expense,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn income(&self) -> &[EntryArg] {
        &self.income
    }

    pub fn expense(&self) -> &[EntryArg] {
        &self.expense
    }
}

/// Args for the `fincalc validate` command.
#[derive(Debug, Parser, Clone)]
pub struct ValidateArgs {
    /// What the text should be.
    kind: Kind,

    /// The text to check.
    #[arg(allow_hyphen_values = true)]
    text: String,
}

impl ValidateArgs {
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An entry written on the command line as `LABEL,AMOUNT,DATE`. The label may itself contain
/// commas; the amount and date are taken from the last two fields.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EntryArg(RawEntry);

impl EntryArg {
    pub fn raw(&self) -> &RawEntry {
        &self.0
    }
}

impl FromStr for EntryArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(3, ',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(date), Some(amount), Some(label)) => {
                Ok(EntryArg(RawEntry::new(label, amount, date)))
            }
            _ => Err(format!("expected LABEL,AMOUNT,DATE but got '{s}'")),
        }
    }
}
