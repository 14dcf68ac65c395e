//! Persistence collaborators.
//!
//! The core never owns the ledger between calls: the chat surface loads a
//! snapshot, routes an utterance, and commits any resulting mutation intent
//! back through a store. Store failures leave the mutation unapplied; the
//! caller surfaces them and nothing is retried.

pub mod json_store;

use std::path::PathBuf;

pub use json_store::JsonStore;

use crate::errors::{CoreError, Result};
use crate::ledger::Ledger;

/// Backend contract for loading and committing ledger snapshots.
pub trait LedgerStore {
    fn load(&self) -> Result<Ledger>;
    fn save(&self, ledger: &Ledger) -> Result<()>;
}

/// Tracker data directory, honoring the `FINBOT_CORE_DATA_DIR` override.
pub fn data_dir() -> Result<PathBuf> {
    let base = match std::env::var_os("FINBOT_CORE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => dirs::data_dir()
            .ok_or_else(|| CoreError::Storage("no data directory available".into()))?
            .join("finbot"),
    };
    std::fs::create_dir_all(&base)?;
    Ok(base)
}
