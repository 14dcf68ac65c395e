use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::Result;
use crate::ledger::Ledger;

use super::LedgerStore;

const LEDGER_FILE: &str = "ledger.json";

/// JSON file backend with temp-file staging for atomic writes.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the ledger file inside the tracker's data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(super::data_dir()?.join(LEDGER_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStore for JsonStore {
    /// Loads the persisted ledger, or a fresh one when none exists yet.
    fn load(&self) -> Result<Ledger> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Ledger::new())
        }
    }

    /// Writes the ledger atomically by staging to a temporary file.
    fn save(&self, ledger: &Ledger) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(ledger)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "ledger committed");
        Ok(())
    }
}
