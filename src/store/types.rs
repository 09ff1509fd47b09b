use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::RecordError;

/// Date cell as it appears in the data file.
///
/// The store accepts a single fixed format; there is no fallback to other
/// layouts, a cell that does not match is a corrupt row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreDate(String);

impl StoreDate {
    pub fn parse(&self, format: &str, line: u64) -> Result<NaiveDate, RecordError> {
        NaiveDate::parse_from_str(self.0.trim(), format).map_err(|_| RecordError::InvalidDate {
            line,
            value: self.0.clone(),
        })
    }

    pub fn format(date: NaiveDate, format: &str) -> Self {
        Self(date.format(format).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for StoreDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StoreDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Amount cell as it appears in the data file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreAmount(String);

impl StoreAmount {
    /// Plain decimals first, then scientific notation (`1.5e3`).
    /// Values beyond `Decimal`'s range are invalid.
    pub fn parse(&self, line: u64) -> Result<Decimal, RecordError> {
        let s = self.0.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| RecordError::InvalidAmount {
                line,
                value: self.0.clone(),
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Decimal> for StoreAmount {
    fn from(value: Decimal) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for StoreAmount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for StoreAmount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
