//! Rolling-window filtering and categorical aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::ledger::{Transaction, TransactionKind};
use crate::period::{self, Granularity};

/// One category's share of the analyzed spending.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub category: String,
    pub total: f64,
    pub percentage: f64,
}

/// Income, expense, and net totals over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LedgerTotals {
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

/// Stateless aggregation helpers over ledger snapshots.
pub struct SummaryService;

impl SummaryService {
    /// Keeps transactions at or after the rolling cutoff; `All` is the
    /// identity.
    pub fn filter_by_period(
        transactions: &[Transaction],
        granularity: Granularity,
        now: DateTime<Utc>,
    ) -> Vec<Transaction> {
        match period::rolling_cutoff(granularity, now) {
            Some(cutoff) => transactions
                .iter()
                .filter(|txn| txn.date >= cutoff)
                .cloned()
                .collect(),
            None => transactions.to_vec(),
        }
    }

    /// Per-category totals with percentage shares, largest total first.
    ///
    /// A zero grand total yields 0% for every slice; the division is never
    /// attempted against zero.
    pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategorySlice> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for txn in transactions {
            *totals.entry(txn.category.as_str()).or_insert(0.0) += txn.amount;
        }
        let sum: f64 = totals.values().sum();
        let mut slices: Vec<CategorySlice> = totals
            .into_iter()
            .map(|(category, total)| CategorySlice {
                category: category.to_string(),
                total,
                percentage: if sum > 0.0 { total / sum * 100.0 } else { 0.0 },
            })
            .collect();
        slices.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.category.cmp(&b.category))
        });
        slices
    }

    /// Income, expense, and net totals for the supplied snapshot.
    pub fn totals(transactions: &[Transaction]) -> LedgerTotals {
        let mut totals = LedgerTotals::default();
        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => totals.income += txn.amount,
                TransactionKind::Expense => totals.expense += txn.amount,
            }
        }
        totals.net = totals.income - totals.expense;
        totals
    }

    /// The single largest expense, if any.
    pub fn top_expense(transactions: &[Transaction]) -> Option<&Transaction> {
        transactions
            .iter()
            .filter(|txn| txn.is_expense())
            .max_by(|a, b| a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal))
    }
}
