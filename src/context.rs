// File: ./src/context.rs
//! Where celebra keeps its files.
//!
//! Only two directories exist: one holding `config.toml` and one holding the
//! log file. Both hang off a single base, which is either the platform's
//! per-user locations, a `--root` folder, or a throwaway folder in tests.
//! Anything that reads or writes files receives a `&dyn AppContext`.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "celebra.log";

/// The two directories celebra uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirKind {
    Config,
    Cache,
}

impl DirKind {
    /// Folder name used under a `--root` or test base.
    fn folder(self) -> &'static str {
        match self {
            DirKind::Config => "config",
            DirKind::Cache => "cache",
        }
    }
}

/// Resolves celebra's directories. Returned directories exist on disk.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn dir(&self, kind: DirKind) -> Result<PathBuf>;

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::Config)
    }

    fn get_cache_dir(&self) -> Result<PathBuf> {
        self.dir(DirKind::Cache)
    }

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join(CONFIG_FILE))
    }

    fn get_log_path(&self) -> Result<PathBuf> {
        Ok(self.get_cache_dir()?.join(LOG_FILE))
    }
}

fn created(path: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Cannot create directory {}", path.display()))?;
    Ok(path)
}

fn under(base: &Path, kind: DirKind) -> Result<PathBuf> {
    created(base.join(kind.folder()))
}

/// Per-user platform directories, or everything under `--root` when given.
#[derive(Clone, Debug)]
pub struct StandardContext {
    root: Option<PathBuf>,
}

impl StandardContext {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl AppContext for StandardContext {
    fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        if let Some(root) = &self.root {
            return under(root, kind);
        }
        let dirs = ProjectDirs::from("com", "celebra", "celebra")
            .ok_or_else(|| anyhow!("Cannot locate a home directory"))?;
        let path = match kind {
            DirKind::Config => dirs.config_dir(),
            DirKind::Cache => dirs.cache_dir(),
        };
        created(path.to_path_buf())
    }
}

/// A unique folder under the system temp dir, deleted on drop.
#[derive(Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("celebra_test_{}", uuid::Uuid::new_v4()));
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn dir(&self, kind: DirKind) -> Result<PathBuf> {
        under(&self.root, kind)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
