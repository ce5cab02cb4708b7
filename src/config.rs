//! Configuration file handling for fincalc.
//!
//! The configuration file is optional. By default it is looked for at
//! `<platform config dir>/fincalc/config.json`; a different path can be given with `--config` or
//! `FINCALC_CONFIG`. It only controls how results are displayed.

use crate::model::{AmountFormat, DEFAULT_SYMBOL};
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "fincalc";
const CONFIG_VERSION: u8 = 1;
const CHART_WIDTH: usize = 40;
const CONFIG_JSON: &str = "config.json";

/// The `Config` object represents the configuration of the app. It is either loaded from a config
/// file or, when no file exists at the default location, made of default settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    config_file: ConfigFile,
}

impl Config {
    /// Writes a config file with default settings to `path`, creating parent directories as
    /// needed.
    ///
    /// # Errors
    /// - Returns an error if a file already exists at `path` and `force` is false.
    /// - Returns an error if any file operations fail.
    pub async fn create(path: impl Into<PathBuf>, force: bool) -> Result<Self> {
        let path = path.into();
        if path.exists() && !force {
            bail!(
                "A config file already exists at '{}', use --force to overwrite it",
                path.display()
            )
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            utils::make_dir(parent)
                .await
                .context("Unable to create the config directory")?;
        }

        let config_file = ConfigFile::default();
        config_file.save(&path).await?;
        Ok(Self {
            path: Some(path),
            config_file,
        })
    }

    /// Loads the config file at `path`, which must exist.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            bail!("The config file is missing '{}'", path.display())
        }
        let config_file = ConfigFile::load(&path).await?;
        Ok(Self {
            path: Some(path),
            config_file,
        })
    }

    /// Loads the config file at `path` if there is one, otherwise returns the default settings.
    pub async fn load_or_default(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if path.is_file() {
            Self::load(path).await
        } else {
            debug!(
                "No config file at '{}', using default settings",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Loads the config for a run. An explicit `path` must exist; without one the default
    /// location is tried and default settings are used if nothing is there.
    pub async fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path).await,
            None => match default_config_path() {
                Some(default_path) => Self::load_or_default(default_path).await,
                None => Ok(Self::default()),
            },
        }
    }

    /// The file this config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config_file.currency_symbol
    }

    pub fn thousands_separator(&self) -> bool {
        self.config_file.thousands_separator
    }

    pub fn chart_width(&self) -> usize {
        self.config_file.chart_width
    }

    /// The display format for amounts described by this config.
    pub fn amount_format(&self) -> AmountFormat {
        AmountFormat::new(self.currency_symbol(), self.thousands_separator())
    }
}

/// The default location of the config file, or `None` if the platform has no config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_JSON))
}

/// The path `fincalc init` writes to: `path` if given, otherwise the default location.
pub fn init_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path()
            .context("Unable to find your config directory, use --config to choose a path"),
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "fincalc",
///   "config_version": 1,
///   "currency_symbol": "$",
///   "thousands_separator": true,
///   "chart_width": 40
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
struct ConfigFile {
    /// Application name, should always be "fincalc"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Written before every displayed amount
    currency_symbol: String,

    /// Whether displayed amounts group thousands with commas
    thousands_separator: bool,

    /// Number of characters the longest chart bar takes up
    chart_width: usize,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            currency_symbol: DEFAULT_SYMBOL.to_string(),
            thousands_separator: true,
            chart_width: CHART_WIDTH,
        }
    }
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or holds invalid settings.
    async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.chart_width > 0,
            "Invalid chart_width in config file: it must be at least 1"
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let created = Config::create(&path, false).await.unwrap();
        assert_eq!(created.path(), Some(path.as_path()));
        assert!(path.is_file());

        let loaded = Config::load(&path).await.unwrap();
        assert_eq!(loaded.currency_symbol(), "$");
        assert!(loaded.thousands_separator());
        assert_eq!(loaded.chart_width(), 40);
    }

    #[tokio::test]
    async fn test_config_create_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        Config::create(&path, false).await.unwrap();

        let result = Config::create(&path, false).await;
        assert!(result.unwrap_err().to_string().contains("--force"));
        assert!(Config::create(&path, true).await.is_ok());
    }

    #[tokio::test]
    async fn test_config_load_missing() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path().join("nope.json")).await;
        assert!(result.unwrap_err().to_string().contains("missing"));
    }

    #[tokio::test]
    async fn test_config_resolve_explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(Config::resolve(Some(missing.as_path())).await.is_err());

        let path = dir.path().join("config.json");
        Config::create(&path, false).await.unwrap();
        let config = Config::resolve(Some(path.as_path())).await.unwrap();
        assert_eq!(config.path(), Some(path.as_path()));
    }

    #[test]
    fn test_init_path() {
        let path = PathBuf::from("/tmp/fincalc.json");
        assert_eq!(init_path(Some(path.as_path())).unwrap(), path);
    }

    #[tokio::test]
    async fn test_config_load_or_default_missing() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_or_default(dir.path().join("nope.json"))
            .await
            .unwrap();
        assert!(config.path().is_none());
        assert_eq!(config.amount_format(), AmountFormat::default());
    }

    #[tokio::test]
    async fn test_config_file_load_with_minimal_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        utils::write(&path, r#"{ "app_name": "fincalc", "currency_symbol": "€" }"#)
            .await
            .unwrap();

        let config = Config::load(&path).await.unwrap();
        assert_eq!(config.currency_symbol(), "€");
        assert!(config.thousands_separator());
        assert_eq!(config.chart_width(), CHART_WIDTH);
    }

    #[tokio::test]
    async fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        utils::write(&path, r#"{ "app_name": "wrong_app" }"#)
            .await
            .unwrap();

        let result = ConfigFile::load(&path).await;
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_file_load_zero_chart_width() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        utils::write(&path, r#"{ "app_name": "fincalc", "chart_width": 0 }"#)
            .await
            .unwrap();

        let result = ConfigFile::load(&path).await;
        assert!(result.unwrap_err().to_string().contains("chart_width"));
    }

    #[tokio::test]
    async fn test_config_file_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        let original = ConfigFile {
            currency_symbol: "£".to_string(),
            thousands_separator: false,
            chart_width: 12,
            ..ConfigFile::default()
        };
        original.save(&path).await.unwrap();

        let loaded = ConfigFile::load(&path).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_amount_format_from_config() {
        let config = Config {
            path: None,
            config_file: ConfigFile {
                currency_symbol: "£".to_string(),
                thousands_separator: false,
                ..ConfigFile::default()
            },
        };
        assert_eq!(config.amount_format(), AmountFormat::new("£", false));
    }
}
