//! The interactive menu: a main menu, an entry form for income or expenses and a summary screen.
//!
//! A `Session` reads answers line by line and writes screens as text, so it can run against a
//! terminal or against in-memory buffers. It owns the `Ledger` for as long as it runs.

use crate::chart::{BarChart, SUMMARY_TITLE};
use crate::error::EntryError;
use crate::ledger::Ledger;
use crate::model::{AmountFormat, EntryKind, RawEntry};
use crate::summary::compute_summary;
use crate::{Config, Result};
use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info, warn};

const TITLE: &str = "Individual Finance Calculator";

/// The screens of the interactive session.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    MainMenu,
    EntryForm(EntryKind),
    Summary,
    /// The session is over.
    Exit,
}

/// The navigation actions a user can take.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Action {
    EnterIncome,
    EnterExpenses,
    ViewSummary,
    Back,
    Exit,
}

impl Screen {
    /// The screen reached by taking `action` on this screen. `Back` returns to the main menu from
    /// anywhere. Actions that a screen does not offer leave it where it is.
    pub fn next(self, action: Action) -> Screen {
        match (self, action) {
            (Screen::Exit, _) | (_, Action::Exit) => Screen::Exit,
            (_, Action::Back) => Screen::MainMenu,
            (Screen::MainMenu, Action::EnterIncome) => Screen::EntryForm(EntryKind::Income),
            (Screen::MainMenu, Action::EnterExpenses) => Screen::EntryForm(EntryKind::Expense),
            (Screen::MainMenu, Action::ViewSummary) => Screen::Summary,
            (screen, _) => screen,
        }
    }
}

impl Action {
    /// Maps a main menu answer to an action.
    fn from_menu_choice(choice: &str) -> Option<Action> {
        match choice.trim().to_lowercase().as_str() {
            "1" | "income" => Some(Action::EnterIncome),
            "2" | "expense" | "expenses" => Some(Action::EnterExpenses),
            "3" | "summary" => Some(Action::ViewSummary),
            "4" | "exit" | "q" | "quit" => Some(Action::Exit),
            _ => None,
        }
    }
}

/// An interactive session reading answers from `R` and writing screens to `W`.
pub struct Session<R, W> {
    lines: Lines<R>,
    out: W,
    ledger: Ledger,
    format: AmountFormat,
    chart_width: usize,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a session with an empty ledger.
    pub fn new(input: R, out: W, config: &Config) -> Self {
        Self {
            lines: input.lines(),
            out,
            ledger: Ledger::new(),
            format: config.amount_format(),
            chart_width: config.chart_width(),
        }
    }

    /// Runs screens until the user exits or the input ends.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        self.write_line(TITLE).await?;
        self.write_line(&format!("Welcome to your {TITLE}!")).await?;

        let mut screen = Screen::MainMenu;
        while screen != Screen::Exit {
            let next = match screen {
                Screen::MainMenu => self.main_menu().await?,
                Screen::EntryForm(kind) => self.entry_form(kind).await?,
                Screen::Summary => self.summary().await?,
                Screen::Exit => Screen::Exit,
            };
            debug!("Moving from {screen:?} to {next:?}");
            screen = next;
        }

        info!(
            "Interactive session ended with {} records",
            self.ledger.len()
        );
        Ok(())
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Gives back the writer, e.g. to inspect what was written.
    pub fn into_writer(self) -> W {
        self.out
    }

    async fn main_menu(&mut self) -> Result<Screen> {
        self.write_line("").await?;
        self.write_line("1) Enter Income").await?;
        self.write_line("2) Enter Expenses").await?;
        self.write_line("3) View Summary").await?;
        self.write_line("4) Exit").await?;

        let Some(choice) = self.prompt("Choose an option").await? else {
            return Ok(Screen::Exit);
        };
        match Action::from_menu_choice(&choice) {
            Some(action) => Ok(Screen::MainMenu.next(action)),
            None => {
                self.write_line(&format!("Unknown option '{choice}'")).await?;
                Ok(Screen::MainMenu)
            }
        }
    }

    async fn entry_form(&mut self, kind: EntryKind) -> Result<Screen> {
        let screen = Screen::EntryForm(kind);
        let heading = match kind {
            EntryKind::Income => "Enter Income",
            EntryKind::Expense => "Enter Expenses",
        };
        self.write_line("").await?;
        self.write_line(heading).await?;

        let Some(label) = self.prompt(kind.label_prompt()).await? else {
            return Ok(Screen::Exit);
        };
        let Some(amount) = self.prompt("Amount ($)").await? else {
            return Ok(Screen::Exit);
        };
        let Some(date) = self.prompt("Date (YYYY-MM-DD)").await? else {
            return Ok(Screen::Exit);
        };

        match self.ledger.submit(kind, &RawEntry::new(label, amount, date)) {
            Ok(()) => {
                let saved = match kind {
                    EntryKind::Income => "Income data saved successfully!",
                    EntryKind::Expense => "Expense data saved successfully!",
                };
                self.write_line(saved).await?;
            }
            Err(e) => {
                self.write_rejection(kind, &e).await?;
            }
        }

        match self.prompt("Add another entry? [y/N]").await? {
            None => Ok(Screen::Exit),
            Some(answer) if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") => {
                Ok(screen)
            }
            Some(_) => Ok(screen.next(Action::Back)),
        }
    }

    async fn summary(&mut self) -> Result<Screen> {
        self.write_line("").await?;
        self.write_line("Financial Summary").await?;
        match compute_summary(&self.ledger) {
            Ok(snapshot) => {
                for line in snapshot.lines(&self.format) {
                    self.write_line(&line).await?;
                }
                self.write_line("").await?;
                let chart = BarChart::new(SUMMARY_TITLE, snapshot.bars())
                    .render(self.chart_width, &self.format);
                self.write(&chart).await?;
            }
            Err(e) => {
                warn!("Unable to compute the summary: {e}");
                self.write_line(&format!("Summary Error: {e}")).await?;
            }
        }

        match self.prompt("Press Enter to return to the main menu").await? {
            None => Ok(Screen::Exit),
            Some(_) => Ok(Screen::Summary.next(Action::Back)),
        }
    }

    async fn write_rejection(&mut self, kind: EntryKind, e: &EntryError) -> Result<()> {
        self.write_line(&format!("Input Error: {} ({e})", EntryError::notice(kind)))
            .await
    }

    /// Writes `text` as a prompt and reads one line. Returns `None` when the input has ended.
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(&format!("{text}: ")).await?;
        self.lines
            .next_line()
            .await
            .context("Unable to read from the input")
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(&format!("{text}\n")).await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .await
            .context("Unable to write to the output")?;
        self.out
            .flush()
            .await
            .context("Unable to flush the output")
    }
}
