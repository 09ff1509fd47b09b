use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};

use log::{debug, error, info, warn};

use super::parser::{read_transactions, write_header, write_transaction};
use crate::{
    config::StoreConfig,
    errors::{LedgerError, LedgerResult, RecordError},
    report,
    types::{DailyPoint, DateRange, Listing, MonthlySummary, Totals, Transaction},
};

/// How the data file was found when the manager started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// There was no data file; an empty one was written
    Created,
    /// The data file passed validation as is
    Valid,
    /// The data file was corrupted and replaced by the backup
    Restored,
}

/// Owns the data file and its single backup generation.
///
/// Holds no state besides its configuration: every call re-reads the files.
#[derive(Debug, Clone)]
pub struct StoreManager {
    config: StoreConfig,
}

impl StoreManager {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Creates a header-only data file when there is none, validates it otherwise
    pub fn initialize(&self) -> LedgerResult<InitOutcome> {
        let path = self.config.store_file();
        if path.exists() {
            return self.validate();
        }

        File::create(path)
            .and_then(|file| write_header(file, self.config.columns()).map_err(Into::into))
            .map_err(|source| LedgerError::StoreUncreatable {
                path: path.to_path_buf(),
                source,
            })?;
        info!("Created data file {}", path.display());
        Ok(InitOutcome::Created)
    }

    /// Checks the data file, falling back to the backup once.
    ///
    /// A restored copy that is still invalid is terminal, whatever the
    /// backup holds.
    pub fn validate(&self) -> LedgerResult<InitOutcome> {
        let mut attempt = 1;
        loop {
            let err = match self.load() {
                Ok(transactions) => {
                    debug!("Data file holds {} transactions", transactions.len());
                    return Ok(if attempt == 1 {
                        InitOutcome::Valid
                    } else {
                        InitOutcome::Restored
                    });
                }
                Err(err) => err,
            };

            warn!("Data file is corrupted: {err}");
            if attempt > 1 {
                error!("Restored backup is corrupted too: {err}");
                return Err(LedgerError::BackupCorrupt(err));
            }
            if attempt >= self.config.max_repair_attempts() || !self.config.backup_file().exists() {
                return Err(LedgerError::StoreCorrupt(err));
            }

            if self.store_matches_backup() {
                error!("Backup holds the same corrupted data; leaving files untouched");
                return Err(LedgerError::BackupCorrupt(err));
            }

            info!("Attempting to restore from backup...");
            self.restore_backup().map_err(LedgerError::RestoreFailed)?;
            attempt += 1;
        }
    }

    /// Snapshots the data file into the backup, then appends `tx`.
    ///
    /// The caller is expected to have validated the fields already.
    pub fn add_entry(&self, tx: &Transaction) -> LedgerResult<()> {
        self.create_backup()?;

        let path = self.config.store_file();
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)?;

        let len = file.metadata()?.len();
        if len == 0 {
            write_header(&mut file, self.config.columns()).map_err(LedgerError::WriteFailed)?;
        } else {
            // a hand-edited file may lack the final newline
            let mut last = [0u8; 1];
            file.seek(SeekFrom::Start(len - 1))?;
            file.read_exact(&mut last)?;
            if last[0] != b'\n' {
                file.write_all(b"\n")?;
            }
        }

        write_transaction(&mut file, tx, self.config.date_format())
            .map_err(LedgerError::WriteFailed)?;
        info!("Entry added: {} {} {}", tx.date, tx.category, tx.amount);
        Ok(())
    }

    /// Rows within `range` (all rows when `None`), newest first, with their totals
    pub fn get_transactions(&self, range: Option<DateRange>) -> LedgerResult<Listing> {
        let mut transactions = self.load().map_err(LedgerError::ReadFailed)?;

        let title = match range {
            Some(range) => {
                transactions.retain(|tx| range.contains(tx.date));
                let format = self.config.date_format();
                format!(
                    "Transactions from {} to {}",
                    range.start.format(format),
                    range.end.format(format)
                )
            }
            None => "All Transactions".to_string(),
        };

        report::sort_newest_first(&mut transactions);
        let totals: Totals = transactions.iter().collect();
        debug!(
            "{} transactions, income {} expense {}",
            transactions.len(),
            totals.income,
            totals.expense
        );

        Ok(Listing {
            title,
            transactions,
            totals,
        })
    }

    pub fn get_monthly_summary(&self) -> LedgerResult<Vec<MonthlySummary>> {
        let transactions = self.load().map_err(LedgerError::ReadFailed)?;
        Ok(report::monthly_summary(&transactions))
    }

    /// Day-by-day income/expense series covering the span of `transactions`
    pub fn plot_transactions(transactions: &[Transaction]) -> Vec<DailyPoint> {
        report::daily_series(transactions)
    }

    fn load(&self) -> Result<Vec<Transaction>, RecordError> {
        let file = File::open(self.config.store_file())?;
        read_transactions(file, self.config.columns(), self.config.date_format())
    }

    fn create_backup(&self) -> std::io::Result<()> {
        let store = self.config.store_file();
        if store.exists() {
            fs::copy(store, self.config.backup_file())?;
            debug!("Backup written to {}", self.config.backup_file().display());
        }
        Ok(())
    }

    /// Moves the corrupt data file to quarantine and copies the backup in its place
    fn restore_backup(&self) -> std::io::Result<()> {
        let store = self.config.store_file();
        let quarantine = self.config.quarantine_file();
        if store.exists() {
            if quarantine.exists() {
                fs::remove_file(quarantine)?;
            }
            fs::rename(store, quarantine)?;
            info!("Corrupted data file kept as {}", quarantine.display());
        }
        fs::copy(self.config.backup_file(), store)?;
        Ok(())
    }

    /// Restoring a byte-identical backup would only replace the quarantined
    /// original with another copy of the same corruption
    fn store_matches_backup(&self) -> bool {
        match (fs::read(self.config.store_file()), fs::read(self.config.backup_file())) {
            (Ok(store), Ok(backup)) => store == backup,
            _ => false,
        }
    }
}
