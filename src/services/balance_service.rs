//! Budget-versus-spend projection for the active budgeting period.

use chrono::{DateTime, Utc};

use crate::ledger::{BudgetConfig, BudgetPeriod, Transaction};
use crate::period::{self, DateWindow, Granularity};

/// Snapshot of the current period's budget position.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceData {
    pub window: DateWindow,
    pub spent: f64,
    pub income: f64,
    pub available: f64,
}

pub struct BalanceService;

impl BalanceService {
    /// Recomputes the budget position from the full snapshot on every call.
    ///
    /// The window is the calendar period (per the budget cadence) containing
    /// `now`; income earned inside it carries over into the available
    /// balance: `available = budget + income - spent`.
    pub fn balance_data(
        transactions: &[Transaction],
        budget: &BudgetConfig,
        now: DateTime<Utc>,
    ) -> BalanceData {
        let window = period::aligned_window(granularity_for(budget.period), now);
        let mut spent = 0.0;
        let mut income = 0.0;
        for txn in transactions {
            if !window.contains(txn.date) {
                continue;
            }
            if txn.is_expense() {
                spent += txn.amount;
            } else {
                income += txn.amount;
            }
        }
        BalanceData {
            window,
            spent,
            income,
            available: budget.amount + income - spent,
        }
    }
}

fn granularity_for(period: BudgetPeriod) -> Granularity {
    match period {
        BudgetPeriod::Weekly => Granularity::Week,
        BudgetPeriod::Monthly => Granularity::Month,
        BudgetPeriod::Yearly => Granularity::Year,
    }
}
