//! Personal income/expense bookkeeping over a self-repairing CSV store.
//!
//! ```rust,ignore
//! use pocket_ledger::LedgerBuilder;
//!
//! let manager = LedgerBuilder::new().data_dir("ledger").build();
//! manager.initialize()?;
//! let listing = manager.get_transactions(None)?;
//! ```

mod builder;
mod types;

pub mod cli;
pub mod config;
pub mod errors;
pub mod render;
pub mod report;
pub mod store;

pub use builder::LedgerBuilder;
pub use config::StoreConfig;
pub use errors::{LedgerError, LedgerResult, RecordError};
pub use store::prelude::*;
pub use types::{Category, DailyPoint, DateRange, Listing, Month, MonthlySummary, Totals, Transaction};
