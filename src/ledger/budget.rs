use std::fmt;

use serde::{Deserialize, Serialize};

/// A spending allowance that refreshes every budgeting period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl BudgetConfig {
    pub fn new(amount: f64, period: BudgetPeriod) -> Self {
        Self { amount, period }
    }
}

/// Enumeration of budgeting cadences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Weekly => "Weekly",
            BudgetPeriod::Monthly => "Monthly",
            BudgetPeriod::Yearly => "Yearly",
        };
        f.write_str(label)
    }
}
