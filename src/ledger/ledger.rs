use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{budget::BudgetConfig, transaction::Transaction};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Persistence-friendly container for every recorded transaction.
///
/// Owned by the storage collaborator. Core computations only ever borrow
/// `&[Transaction]` snapshots from it and never retain them across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetConfig>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

/// Mutation intent produced by the chat router for the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LedgerAction {
    Append(Transaction),
    Remove(Uuid),
}

impl Ledger {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            transactions: Vec::new(),
            budget: None,
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        self.touch();
        id
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> Option<Transaction> {
        let index = self.transactions.iter().position(|txn| txn.id == id)?;
        self.touch();
        Some(self.transactions.remove(index))
    }

    /// Commits a mutation intent against this container.
    pub fn apply(&mut self, action: LedgerAction) {
        match action {
            LedgerAction::Append(transaction) => {
                self.add_transaction(transaction);
            }
            LedgerAction::Remove(id) => {
                self.remove_transaction(id);
            }
        }
    }

    pub fn set_budget(&mut self, budget: Option<BudgetConfig>) {
        self.budget = budget;
        self.touch();
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
