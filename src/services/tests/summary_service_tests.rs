use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::ledger::Transaction;
use crate::period::Granularity;
use crate::services::SummaryService;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
}

fn expense(title: &str, amount: f64, category: &str, days_ago: i64) -> Transaction {
    Transaction::expense(title, amount, category, "Cash", now() - Duration::days(days_ago))
}

#[test]
fn rolling_week_filter_keeps_six_days_and_drops_eight() {
    let transactions = vec![
        expense("Inside", 60.0, "Food", 6),
        expense("Outside", 40.0, "Food", 8),
    ];
    let filtered = SummaryService::filter_by_period(&transactions, Granularity::Week, now());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].title, "Inside");
}

#[test]
fn all_granularity_is_the_identity_filter() {
    let transactions = vec![expense("Old", 10.0, "Food", 900), expense("New", 10.0, "Food", 1)];
    let filtered = SummaryService::filter_by_period(&transactions, Granularity::All, now());
    assert_eq!(filtered.len(), 2);
}

#[test]
fn breakdown_of_nothing_is_empty() {
    assert!(SummaryService::category_breakdown(&[]).is_empty());
}

#[test]
fn breakdown_percentages_sum_to_one_hundred() {
    let transactions = vec![
        expense("Dinner", 300.0, "Food", 1),
        expense("Cab", 100.0, "Travel", 1),
        expense("Shoes", 600.0, "Shopping", 1),
    ];
    let slices = SummaryService::category_breakdown(&transactions);
    let total_pct: f64 = slices.iter().map(|slice| slice.percentage).sum();
    assert!((total_pct - 100.0).abs() < 1e-9, "got {total_pct}");
    // Largest total leads.
    assert_eq!(slices[0].category, "Shopping");
    assert_eq!(slices[0].total, 600.0);
}

#[test]
fn zero_sum_breakdown_never_divides_by_zero() {
    let transactions = vec![expense("Freebie", 0.0, "Food", 1)];
    let slices = SummaryService::category_breakdown(&transactions);
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].percentage, 0.0);
}

#[test]
fn totals_split_income_from_expense() {
    let mut transactions = vec![expense("Dinner", 300.0, "Food", 1)];
    transactions.push(Transaction::income("Salary", 5000.0, "Monthly", now()));
    let totals = SummaryService::totals(&transactions);
    assert_eq!(totals.income, 5000.0);
    assert_eq!(totals.expense, 300.0);
    assert_eq!(totals.net, 4700.0);
}

#[test]
fn top_expense_ignores_income() {
    let transactions = vec![
        Transaction::income("Salary", 9000.0, "Monthly", now()),
        expense("Dinner", 300.0, "Food", 1),
        expense("Laptop", 800.0, "Shopping", 1),
    ];
    let top = SummaryService::top_expense(&transactions).expect("an expense exists");
    assert_eq!(top.title, "Laptop");
}

#[test]
fn top_expense_of_an_empty_ledger_is_none() {
    assert!(SummaryService::top_expense(&[]).is_none());
}
