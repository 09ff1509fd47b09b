use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};
use rust_decimal::Decimal;

use super::dto::TransactionRow;
use crate::{errors::RecordError, types::Transaction};

/// Reads every row of a data file, failing on the first malformed one.
///
/// All `columns` must be present in the header, in any order; extra columns
/// are ignored. The sum of all amounts must fit in a `Decimal`, which bounds
/// every total the reports derive from the rows.
pub fn read_transactions<R: Read>(
    reader: R,
    columns: &[&str],
    date_format: &str,
) -> Result<Vec<Transaction>, RecordError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = columns
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(RecordError::MissingColumn(missing.to_string()));
    }

    let mut transactions = Vec::new();
    let mut volume = Decimal::ZERO;
    for result in reader.records() {
        let mut record = result?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        // short rows read as empty trailing cells
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: TransactionRow = record.deserialize(Some(&headers))?;
        let tx = row.into_transaction(line, date_format)?;
        volume = volume
            .checked_add(tx.amount.abs())
            .ok_or(RecordError::AmountOverflow { line })?;
        transactions.push(tx);
    }

    Ok(transactions)
}

/// Writes the header line of an empty data file
pub fn write_header<W: Write>(writer: W, columns: &[&str]) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(columns)?;
    writer.flush()?;
    Ok(())
}

/// Writes a single row, without header
pub fn write_transaction<W: Write>(
    writer: W,
    tx: &Transaction,
    date_format: &str,
) -> Result<(), csv::Error> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.serialize(TransactionRow::from_transaction(tx, date_format))?;
    writer.flush()?;
    Ok(())
}
