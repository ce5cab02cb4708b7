use crate::commands::Out;
use crate::session::Session;
use crate::summary::{compute_summary, SummarySnapshot};
use crate::{Config, Result};
use tokio::io::BufReader;

/// Runs the interactive menu on the terminal until the user exits, then returns the final
/// summary. Nothing entered during the session is kept afterwards.
pub async fn interactive(config: Config) -> Result<Out<SummarySnapshot>> {
    let input = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(input, tokio::io::stdout(), &config);
    session.run().await?;

    let ledger = session.ledger();
    let summary = compute_summary(ledger)?;
    let count = ledger.len();
    let message = format!(
        "Session ended after recording {} entr{}",
        count,
        if count == 1 { "y" } else { "ies" }
    );
    Ok(Out::new(message, summary))
}
