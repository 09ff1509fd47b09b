use serde::{Deserialize, Serialize};

use super::types::{StoreAmount, StoreDate};
use crate::{errors::RecordError, types::Transaction};

/// Raw row of the data file, every cell still text
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionRow {
    #[serde(rename = "Date")]
    pub date: StoreDate,
    #[serde(rename = "Amount")]
    pub amount: StoreAmount,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction, date_format: &str) -> Self {
        Self {
            date: StoreDate::format(tx.date, date_format),
            amount: tx.amount.into(),
            category: tx.category.to_string(),
            description: tx.description.clone(),
        }
    }

    /// `line` is the 1-based line of the row in the file, used in error messages
    pub fn into_transaction(self, line: u64, date_format: &str) -> Result<Transaction, RecordError> {
        let date = self.date.parse(date_format, line)?;
        let amount = self.amount.parse(line)?;
        let category = self
            .category
            .parse()
            .map_err(|value| RecordError::InvalidCategory { line, value })?;

        Ok(Transaction {
            date,
            amount,
            category,
            description: self.description,
        })
    }
}
