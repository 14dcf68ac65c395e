use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category label reserved for income entries.
pub const INCOME_CATEGORY: &str = "Income";

/// A single ledger entry. Immutable once created; edits replace it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Payment channel for expenses (Cash, Card, UPI); a frequency label
    /// (One-time, Weekly, Monthly, Yearly) for income.
    pub payment_mode: String,
    /// Set only when `payment_mode` is an app-based channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_app: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn expense(
        title: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        payment_mode: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Expense,
            title: title.into(),
            amount,
            category: category.into(),
            payment_mode: payment_mode.into(),
            payment_app: None,
            description: None,
            date,
        }
    }

    pub fn income(
        title: impl Into<String>,
        amount: f64,
        frequency: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: TransactionKind::Income,
            title: title.into(),
            amount,
            category: INCOME_CATEGORY.to_string(),
            payment_mode: frequency.into(),
            payment_app: None,
            description: None,
            date,
        }
    }

    pub fn with_payment_app(mut self, app: Option<String>) -> Self {
        self.payment_app = app;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}

/// Distinguishes money leaving the ledger from money entering it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}
