use std::path::PathBuf;

use crate::{
    config::{DEFAULT_BACKUP_FILE, DEFAULT_QUARANTINE_FILE, DEFAULT_STORE_FILE, StoreConfig},
    store::StoreManager,
};

/// Fluent construction of a `StoreManager`.
///
/// Explicit file paths win over the data directory; anything left unset
/// falls back to the default file name inside the directory (or the
/// working directory when no directory is given).
#[derive(Debug, Default)]
pub struct LedgerBuilder {
    data_dir: Option<PathBuf>,
    store_file: Option<PathBuf>,
    backup_file: Option<PathBuf>,
    quarantine_file: Option<PathBuf>,
}

impl LedgerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn store_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.store_file = Some(path.into());
        self
    }

    pub fn backup_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_file = Some(path.into());
        self
    }

    pub fn quarantine_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.quarantine_file = Some(path.into());
        self
    }

    pub fn config(self) -> StoreConfig {
        let dir = self.data_dir.unwrap_or_default();
        StoreConfig::new(
            self.store_file.unwrap_or_else(|| dir.join(DEFAULT_STORE_FILE)),
            self.backup_file.unwrap_or_else(|| dir.join(DEFAULT_BACKUP_FILE)),
            self.quarantine_file.unwrap_or_else(|| dir.join(DEFAULT_QUARANTINE_FILE)),
        )
    }

    pub fn build(self) -> StoreManager {
        StoreManager::new(self.config())
    }
}
