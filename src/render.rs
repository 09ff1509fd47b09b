//! Text rendering of listings, monthly summaries and the daily series.
//!
//! Everything here produces `String`s; printing is left to the caller.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::{DailyPoint, Listing, MonthlySummary, Totals};

const PLOT_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// `$1,234.50`, negatives as `-$70.00`
pub fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int, frac) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int.len() + int.len() / 3);
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{frac}")
}

fn amount_cell(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Cells are drawn on a single line
fn flatten(cell: &str) -> String {
    cell.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ")
}

/// Box-drawn table; `align` holds one entry per column
fn table(headers: &[&str], rows: &[Vec<String>], align: &[Align]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|cell| flatten(cell)).collect())
        .collect();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = |left: &str, mid: &str, right: &str, fill: &str| {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        format!("{left}{}{right}\n", segments.join(mid))
    };
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .zip(align)
            .map(|((cell, width), align)| {
                let pad = " ".repeat(width - cell.chars().count());
                match align {
                    Align::Left => format!(" {cell}{pad} "),
                    Align::Right => format!(" {pad}{cell} "),
                }
            })
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let mut out = border("╒", "╤", "╕", "═");
    out.push_str(&line(header_cells.as_slice()));
    out.push_str(&border("╞", "╪", "╡", "═"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(&border("├", "┼", "┤", "─"));
        }
        out.push_str(&line(row.as_slice()));
    }
    out.push_str(&border("╘", "╧", "╛", "═"));
    out
}

pub fn totals(totals: &Totals) -> String {
    format!(
        "Total Income: {}\nTotal Expense: {}\nNet Savings: {}\n",
        money(totals.income),
        money(totals.expense),
        money(totals.net())
    )
}

/// Title, table and totals, or a notice when there is nothing to show
pub fn listing(listing: &Listing, date_format: &str) -> String {
    if listing.transactions.is_empty() {
        return "No transactions found\n".to_string();
    }

    let rows: Vec<Vec<String>> = listing
        .transactions
        .iter()
        .map(|tx| {
            vec![
                tx.date.format(date_format).to_string(),
                amount_cell(tx.amount),
                tx.category.to_string(),
                tx.description.clone(),
            ]
        })
        .collect();

    let mut out = format!("\n{}\n", listing.title);
    out.push_str(&table(
        &["Date", "Amount", "Category", "Description"],
        &rows,
        &[Align::Left, Align::Right, Align::Left, Align::Left],
    ));
    out.push('\n');
    out.push_str(&totals(&listing.totals));
    out
}

pub fn monthly_summary(summary: &[MonthlySummary]) -> String {
    if summary.is_empty() {
        return "No transactions found\n".to_string();
    }

    let rows: Vec<Vec<String>> = summary
        .iter()
        .map(|line| {
            vec![
                line.month.to_string(),
                amount_cell(line.income),
                amount_cell(line.expense),
                amount_cell(line.net()),
            ]
        })
        .collect();

    let mut out = "\nMonthly Summary\n".to_string();
    out.push_str(&table(
        &["Month", "Income", "Expense", "Net Savings"],
        &rows,
        &[Align::Left, Align::Right, Align::Right, Align::Right],
    ));
    out
}

fn bar(value: Decimal, max: f64, glyph: char) -> String {
    let value = value.to_f64().unwrap_or_default();
    let len = if max > 0.0 {
        ((value / max) * PLOT_WIDTH as f64).round() as usize
    } else {
        0
    };
    std::iter::repeat_n(glyph, len).collect()
}

/// Horizontal bar chart, one income (`+`) and one expense (`-`) bar per day
pub fn plot(series: &[DailyPoint], date_format: &str) -> String {
    if series.is_empty() {
        return "No transactions found\n".to_string();
    }

    let max = series
        .iter()
        .flat_map(|point| [point.income, point.expense])
        .max()
        .and_then(|max| max.to_f64())
        .unwrap_or_default();

    let mut out = "\nIncome and Expenses\n".to_string();
    for point in series {
        let date = point.date.format(date_format).to_string();
        let blank = " ".repeat(date.chars().count());
        out.push_str(&format!(
            "{date} │{:<width$} {}\n",
            bar(point.income, max, '+'),
            amount_cell(point.income),
            width = PLOT_WIDTH
        ));
        out.push_str(&format!(
            "{blank} │{:<width$} {}\n",
            bar(point.expense, max, '-'),
            amount_cell(point.expense),
            width = PLOT_WIDTH
        ));
    }

    if let Some(last) = series.last() {
        out.push_str(&format!(
            "\nCumulative: income {} / expense {}\n",
            money(last.cumulative_income),
            money(last.cumulative_expense)
        ));
    }
    out
}

/// Daily series as pretty JSON, for plotting with external tools
pub fn series_json(series: &[DailyPoint]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(series)
}
