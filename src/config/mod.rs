//! User configuration: currency symbol, recognition vocabularies, budget.
//!
//! Vocabularies are explicit inputs to every interpreter call rather than
//! ambient state, so settings changes never couple to parsing behavior
//! except through the snapshot handed in.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::ledger::BudgetConfig;
use crate::storage;

const CONFIG_FILE: &str = "config.json";

/// Vocabularies the interpreter matches against, snapshotted per call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vocabularies {
    pub categories: Vec<String>,
    pub payment_modes: Vec<String>,
    pub upi_apps: Vec<String>,
}

impl Default for Vocabularies {
    fn default() -> Self {
        Self {
            categories: vec![
                "Food".into(),
                "Travel".into(),
                "Shopping".into(),
                "Entertainment".into(),
                "Bills".into(),
                "Health".into(),
                "Education".into(),
                "Other".into(),
            ],
            payment_modes: vec!["Cash".into(), "Card".into(), "UPI".into()],
            upi_apps: vec!["GPay".into(), "PhonePe".into(), "Paytm".into()],
        }
    }
}

/// Complete user-tunable settings for the tracker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrackerConfig {
    /// Display symbol only; never used for arithmetic.
    pub currency: String,
    #[serde(default)]
    pub vocabularies: Vocabularies,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetConfig>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency: "\u{20b9}".into(),
            vocabularies: Vocabularies::default(),
            budget: None,
        }
    }
}

/// Loads and saves [`TrackerConfig`] as JSON with atomic staging.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the config file inside the tracker's data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(storage::data_dir()?.join(CONFIG_FILE)))
    }

    /// Reads the configuration, falling back to defaults when absent.
    pub fn load(&self) -> Result<TrackerConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(TrackerConfig::default())
        }
    }

    pub fn save(&self, config: &TrackerConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
