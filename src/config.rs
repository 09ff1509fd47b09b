use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "finance_data.csv";
pub const DEFAULT_BACKUP_FILE: &str = "finance_data_backup.csv";
pub const DEFAULT_QUARANTINE_FILE: &str = "finance_data_corrupt.csv";

/// Where the ledger lives on disk and how its rows are laid out.
///
/// Paths are the only configurable part; the columns, the date format and
/// the repair budget are fixed for every store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    store_file: PathBuf,
    backup_file: PathBuf,
    quarantine_file: PathBuf,
    columns: [&'static str; 4],
    date_format: &'static str,
    max_repair_attempts: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_FILE, DEFAULT_BACKUP_FILE, DEFAULT_QUARANTINE_FILE)
    }
}

impl StoreConfig {
    pub fn new(
        store_file: impl Into<PathBuf>,
        backup_file: impl Into<PathBuf>,
        quarantine_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store_file: store_file.into(),
            backup_file: backup_file.into(),
            quarantine_file: quarantine_file.into(),
            columns: ["Date", "Amount", "Category", "Description"],
            date_format: "%d-%m-%Y",
            max_repair_attempts: 2,
        }
    }

    /// Default file names placed under `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(DEFAULT_STORE_FILE),
            dir.join(DEFAULT_BACKUP_FILE),
            dir.join(DEFAULT_QUARANTINE_FILE),
        )
    }

    pub fn store_file(&self) -> &Path {
        &self.store_file
    }

    pub fn backup_file(&self) -> &Path {
        &self.backup_file
    }

    pub fn quarantine_file(&self) -> &Path {
        &self.quarantine_file
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn date_format(&self) -> &'static str {
        self.date_format
    }

    /// Validation passes allowed before giving up: the file as found plus one restore
    pub fn max_repair_attempts(&self) -> usize {
        self.max_repair_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_are_relative() {
        let config = StoreConfig::default();
        assert_eq!(config.store_file(), Path::new("finance_data.csv"));
        assert_eq!(config.backup_file(), Path::new("finance_data_backup.csv"));
        assert_eq!(config.quarantine_file(), Path::new("finance_data_corrupt.csv"));
    }

    #[test]
    fn test_fixed_schema() {
        let config = StoreConfig::in_dir("/tmp/ledger");
        assert_eq!(config.columns(), ["Date", "Amount", "Category", "Description"]);
        assert_eq!(config.date_format(), "%d-%m-%Y");
        assert_eq!(config.max_repair_attempts(), 2);
    }

    #[test]
    fn test_in_dir_joins_paths() {
        let config = StoreConfig::in_dir("/tmp/ledger");
        assert_eq!(config.store_file(), Path::new("/tmp/ledger/finance_data.csv"));
        assert_eq!(config.backup_file(), Path::new("/tmp/ledger/finance_data_backup.csv"));
    }
}
