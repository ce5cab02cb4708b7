use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Writes a config file with default settings at `path`, creating its directory if needed.
///
/// # Errors
/// - Returns an error if a config file already exists and `force` is false.
/// - Returns an error if any file operations fail.
pub async fn init(path: &Path, force: bool) -> Result<Out<()>> {
    let _config = Config::create(path, force)
        .await
        .context("Unable to create the config file")?;
    Ok(format!("Wrote a default config file to {}", path.display()).into())
}
