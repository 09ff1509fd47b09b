//! Aggregations over transaction slices. Nothing here touches the disk.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::types::{DailyPoint, Month, MonthlySummary, Totals, Transaction};

/// Newest first; rows sharing a date keep their file order
pub fn sort_newest_first(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Income/expense per calendar month, oldest first.
///
/// Every month between the first and the last one seen gets a line, with
/// zeros when nothing was recorded in it.
pub fn monthly_summary(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut buckets: BTreeMap<Month, Totals> = BTreeMap::new();
    for tx in transactions {
        buckets.entry(Month::of(tx.date)).or_default().add(tx);
    }

    let (Some(first), Some(last)) = (
        buckets.keys().next().copied(),
        buckets.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let mut summary = Vec::new();
    let mut month = first;
    while month <= last {
        let totals = buckets.get(&month).copied().unwrap_or_default();
        summary.push(MonthlySummary {
            month,
            income: totals.income,
            expense: totals.expense,
        });
        month = month.succ();
    }
    summary
}

/// One point per day from the earliest to the latest transaction
pub fn daily_series(transactions: &[Transaction]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, Totals> = BTreeMap::new();
    for tx in transactions {
        days.entry(tx.date).or_default().add(tx);
    }

    let (Some(first), Some(last)) = (
        days.keys().next().copied(),
        days.keys().next_back().copied(),
    ) else {
        return Vec::new();
    };

    let mut running = Totals::default();
    first
        .iter_days()
        .take_while(|day| *day <= last)
        .map(|date| {
            let day = days.get(&date).copied().unwrap_or_default();
            running.income = running.income.saturating_add(day.income);
            running.expense = running.expense.saturating_add(day.expense);
            DailyPoint {
                date,
                income: day.income,
                expense: day.expense,
                cumulative_income: running.income,
                cumulative_expense: running.expense,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use rust_decimal::Decimal;

    fn tx(d: u32, m: u32, y: i32, amount: i64, category: Category) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            Decimal::new(amount, 0),
            category,
            "",
        )
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let mut txs = vec![
            Transaction::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Decimal::ONE, Category::Income, "a"),
            Transaction::new(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(), Decimal::ONE, Category::Income, "b"),
            Transaction::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), Decimal::ONE, Category::Income, "c"),
        ];
        sort_newest_first(&mut txs);
        let order: Vec<_> = txs.iter().map(|tx| tx.description.as_str()).collect();
        assert_eq!(order, ["b", "a", "c"]);
    }

    #[test]
    fn test_monthly_summary_single_month() {
        let txs = [
            tx(15, 3, 2024, 100, Category::Income),
            tx(20, 3, 2024, 40, Category::Expense),
        ];
        let summary = monthly_summary(&txs);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].month.to_string(), "2024-03");
        assert_eq!(summary[0].income, Decimal::new(100, 0));
        assert_eq!(summary[0].expense, Decimal::new(40, 0));
        assert_eq!(summary[0].net(), Decimal::new(60, 0));
    }

    #[test]
    fn test_monthly_summary_fills_gaps_and_orders_chronologically() {
        let txs = [
            tx(2, 2, 2024, 30, Category::Expense),
            tx(31, 12, 2023, 500, Category::Income),
        ];
        let summary = monthly_summary(&txs);
        let months: Vec<String> = summary.iter().map(|line| line.month.to_string()).collect();
        assert_eq!(months, ["2023-12", "2024-01", "2024-02"]);

        assert_eq!(summary[0].expense, Decimal::ZERO);
        assert_eq!(summary[1].income, Decimal::ZERO);
        assert_eq!(summary[1].expense, Decimal::ZERO);
        assert_eq!(summary[2].income, Decimal::ZERO);
        assert_eq!(summary[2].net(), Decimal::new(-30, 0));
    }

    #[test]
    fn test_monthly_summary_empty() {
        assert!(monthly_summary(&[]).is_empty());
    }

    #[test]
    fn test_daily_series_spans_full_range() {
        let txs = [
            tx(4, 1, 2024, 20, Category::Expense),
            tx(1, 1, 2024, 100, Category::Income),
            tx(4, 1, 2024, 5, Category::Expense),
        ];
        let series = daily_series(&txs);
        assert_eq!(series.len(), 4);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(series[3].date, NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());

        assert_eq!(series[1].income, Decimal::ZERO);
        assert_eq!(series[1].expense, Decimal::ZERO);
        assert_eq!(series[1].cumulative_income, Decimal::new(100, 0));

        assert_eq!(series[3].expense, Decimal::new(25, 0));
        assert_eq!(series[3].cumulative_expense, Decimal::new(25, 0));
        assert_eq!(series[3].cumulative_income, Decimal::new(100, 0));
    }

    #[test]
    fn test_daily_series_empty() {
        assert!(daily_series(&[]).is_empty());
    }
}
