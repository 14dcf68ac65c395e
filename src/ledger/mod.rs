//! Ledger domain models and the persistence-friendly container.

pub mod budget;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use budget::{BudgetConfig, BudgetPeriod};
pub use ledger::{Ledger, LedgerAction};
pub use transaction::{Transaction, TransactionKind, INCOME_CATEGORY};
