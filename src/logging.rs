// Logger setup. The TUI owns the terminal, so log lines go to a file.
use crate::context::AppContext;
use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Installs a file logger at `ctx`'s log path and returns that path.
/// Calling it twice is harmless; the second logger is simply not installed.
pub fn init(ctx: &dyn AppContext, level: LevelFilter) -> Result<PathBuf> {
    let path = ctx.get_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {:?}", path))?;

    let config = ConfigBuilder::new()
        .add_filter_allow_str("celebra")
        .build();

    if WriteLogger::init(level, config, file).is_err() {
        log::debug!("Logger already installed");
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn creates_log_file_in_cache_dir() {
        let ctx = TestContext::new();
        let path = init(&ctx, LevelFilter::Info).unwrap();
        assert!(path.starts_with(&ctx.root));
        assert!(path.exists());
    }
}
