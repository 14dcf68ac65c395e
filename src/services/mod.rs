//! Stateless aggregation services over ledger snapshots.
//!
//! Every function takes the full snapshot plus an injected "now" and
//! returns a fresh result; nothing is cached between calls.

pub mod balance_service;
pub mod comparison_service;
pub mod summary_service;

pub use balance_service::{BalanceData, BalanceService};
pub use comparison_service::{CategoryDelta, ComparisonService, PeriodComparison};
pub use summary_service::{CategorySlice, LedgerTotals, SummaryService};

#[cfg(test)]
mod tests;
