use std::path::PathBuf;

use thiserror::Error;

/// Defects found while reading the data file, row by row
#[derive(Error, Debug)]
pub enum RecordError {
    /// One of the fixed columns is absent from the header
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// The date cell does not follow the dd-mm-yyyy format
    #[error("Invalid date '{value}' on line {line} (expected dd-mm-yyyy)")]
    InvalidDate { line: u64, value: String },

    /// The amount cell is not a number
    #[error("Invalid amount '{value}' on line {line}")]
    InvalidAmount { line: u64, value: String },

    /// The category cell is neither Income nor Expense
    #[error("Invalid category '{value}' on line {line} (expected Income or Expense)")]
    InvalidCategory { line: u64, value: String },

    /// Amounts add up past what a decimal can hold
    #[error("Amounts overflow on line {line}: the file's totals cannot be represented")]
    AmountOverflow { line: u64 },

    /// The file is not well-formed CSV
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read the file from disk
    #[error("Failed to read data file: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the store manager
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The data file is missing and could not be created. Fatal.
    #[error("Unable to create data file {}: {source}", .path.display())]
    StoreUncreatable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is corrupted and no backup was available to repair it
    #[error("Data file is corrupted: {0}")]
    StoreCorrupt(#[source] RecordError),

    /// The backup was restored but is itself invalid
    #[error("Data file is corrupted and the backup could not repair it: {0}")]
    BackupCorrupt(#[source] RecordError),

    /// Moving the backup into place failed
    #[error("Failed to restore data file from backup: {0}")]
    RestoreFailed(#[source] std::io::Error),

    /// Writing the backup or appending a row failed; the store is unchanged
    #[error("Failed to write entry: {0}")]
    WriteFailed(#[source] csv::Error),

    /// Reading the store for a query failed
    #[error("Error reading transactions: {0}")]
    ReadFailed(#[source] RecordError),
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::WriteFailed(err.into())
    }
}

/// Convenient alias for results carrying a `LedgerError`
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RecordError::MissingColumn("Amount".into()), "Missing required column: Amount")]
    #[case(
        RecordError::InvalidDate { line: 3, value: "2024-03-15".into() },
        "Invalid date '2024-03-15' on line 3 (expected dd-mm-yyyy)"
    )]
    #[case(
        RecordError::InvalidAmount { line: 2, value: "ten".into() },
        "Invalid amount 'ten' on line 2"
    )]
    #[case(
        RecordError::InvalidCategory { line: 4, value: "Gift".into() },
        "Invalid category 'Gift' on line 4 (expected Income or Expense)"
    )]
    fn test_record_error_messages(#[case] err: RecordError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn test_io_error_becomes_write_failure() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: LedgerError = io.into();
        assert!(matches!(err, LedgerError::WriteFailed(_)));
        assert!(err.to_string().starts_with("Failed to write entry"));
    }

    #[test]
    fn test_corrupt_wraps_record_error() {
        let err = LedgerError::StoreCorrupt(RecordError::MissingColumn("Date".into()));
        assert_eq!(err.to_string(), "Data file is corrupted: Missing required column: Date");
    }
}
