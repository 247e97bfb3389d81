// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::client::FeedSources;
use crate::context::AppContext;
use crate::model::DateOrder;
use anyhow::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Published TSV export of the "Eventos Fijos" sheet.
pub const DEFAULT_FIXED_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTK0K8Sm6UEvmeBz8dCz_WI8j7GO3F6XAfI5J8c0ZAHqwMKXtjyTtXk7yTCUu-g302uJ8dH_OxyqPrX/pub?gid=954616486&single=true&output=tsv";
/// Published TSV export of the form responses sheet.
pub const DEFAULT_OCCASIONAL_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTK0K8Sm6UEvmeBz8dCz_WI8j7GO3F6XAfI5J8c0ZAHqwMKXtjyTtXk7yTCUu-g302uJ8dH_OxyqPrX/pub?gid=853423287&single=true&output=tsv";

fn default_fixed_feed_url() -> String {
    DEFAULT_FIXED_FEED_URL.to_string()
}
fn default_occasional_feed_url() -> String {
    DEFAULT_OCCASIONAL_FEED_URL.to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_fixed_feed_url")]
    pub fixed_feed_url: String,
    #[serde(default = "default_occasional_feed_url")]
    pub occasional_feed_url: String,
    #[serde(default)]
    pub date_order: DateOrder,
    /// One of off, error, warn, info, debug, trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fixed_feed_url: default_fixed_feed_url(),
            occasional_feed_url: default_occasional_feed_url(),
            date_order: DateOrder::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;

        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(&path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e)
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e)
        })?;

        Ok(config)
    }

    /// Like `load`, but a missing file means defaults. Other errors are kept.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Whether an error from `load` means the config file does not exist.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        atomic_write(&path, toml_str)?;
        Ok(())
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn feed_sources(&self) -> FeedSources {
        FeedSources {
            fixed_url: self.fixed_feed_url.clone(),
            occasional_url: self.occasional_feed_url.clone(),
        }
    }

    /// Parsed `log_level`; unknown values fall back to `Info`.
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn missing_file_yields_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "date_order = \"month-first\"\nlog_level = \"debug\"\n").unwrap();

        let cfg = Config::load(&ctx).unwrap();
        assert_eq!(cfg.date_order, DateOrder::MonthFirst);
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Debug);
        assert_eq!(cfg.fixed_feed_url, DEFAULT_FIXED_FEED_URL);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "fixed_feed_url = [").unwrap();

        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn save_then_load() {
        let ctx = TestContext::new();
        let cfg = Config {
            fixed_feed_url: "http://localhost/fixed.tsv".to_string(),
            ..Config::default()
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let cfg = Config {
            log_level: "loud".to_string(),
            ..Config::default()
        };
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Info);
    }
}
