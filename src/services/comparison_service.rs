//! Aligned-window comparison between two reference dates.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};

use crate::ledger::Transaction;
use crate::period::{self, DateWindow, Granularity};

/// Per-category spending difference between the two compared windows.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDelta {
    pub category: String,
    pub total_a: f64,
    pub total_b: f64,
    pub delta: f64,
}

/// Expense totals for two aligned windows plus what changed per category.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodComparison {
    pub window_a: DateWindow,
    pub window_b: DateWindow,
    pub label_a: String,
    pub label_b: String,
    pub total_a: f64,
    pub total_b: f64,
    pub deltas: Vec<CategoryDelta>,
}

pub struct ComparisonService;

impl ComparisonService {
    /// Compares expense activity in the calendar buckets containing the two
    /// reference dates. Deltas are sorted by descending absolute difference
    /// so the biggest movers lead the "what changed" report.
    pub fn period_comparison(
        transactions: &[Transaction],
        date_a: DateTime<Utc>,
        date_b: DateTime<Utc>,
        granularity: Granularity,
        now: DateTime<Utc>,
    ) -> PeriodComparison {
        let window_a = period::aligned_window(granularity, date_a);
        let window_b = period::aligned_window(granularity, date_b);

        let mut totals_a: HashMap<&str, f64> = HashMap::new();
        let mut totals_b: HashMap<&str, f64> = HashMap::new();
        let mut total_a = 0.0;
        let mut total_b = 0.0;
        for txn in transactions.iter().filter(|txn| txn.is_expense()) {
            if window_a.contains(txn.date) {
                total_a += txn.amount;
                *totals_a.entry(txn.category.as_str()).or_insert(0.0) += txn.amount;
            }
            if window_b.contains(txn.date) {
                total_b += txn.amount;
                *totals_b.entry(txn.category.as_str()).or_insert(0.0) += txn.amount;
            }
        }

        let categories: BTreeSet<&str> = totals_a.keys().chain(totals_b.keys()).copied().collect();
        let mut deltas: Vec<CategoryDelta> = categories
            .into_iter()
            .map(|category| {
                let a = totals_a.get(category).copied().unwrap_or(0.0);
                let b = totals_b.get(category).copied().unwrap_or(0.0);
                CategoryDelta {
                    category: category.to_string(),
                    total_a: a,
                    total_b: b,
                    delta: b - a,
                }
            })
            .collect();
        deltas.sort_by(|x, y| {
            y.delta
                .abs()
                .partial_cmp(&x.delta.abs())
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.category.cmp(&y.category))
        });

        PeriodComparison {
            label_a: period::window_label(&window_a, now),
            label_b: period::window_label(&window_b, now),
            window_a,
            window_b,
            total_a,
            total_b,
            deltas,
        }
    }
}
