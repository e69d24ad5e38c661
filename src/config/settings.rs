//! User settings for tally-cli
//!
//! Persisted preferences: display formatting and the policy applied when the
//! ledger file turns out to be unreadable at startup.

use serde::{Deserialize, Serialize};

use super::paths::TallyPaths;
use crate::error::TallyError;
use crate::ledger::CorruptFilePolicy;
use crate::storage::{read_json, write_json_atomic};

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

/// User settings for tally-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used for display only; stored amounts are
    /// currency-agnostic magnitudes
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// What to do when the ledger file cannot be parsed at startup
    #[serde(default)]
    pub corrupt_file_policy: CorruptFilePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            corrupt_file_policy: CorruptFilePolicy::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, writing defaults on first run
    pub fn load_or_create(paths: &TallyPaths) -> Result<Self, TallyError> {
        let path = paths.settings_file();
        match read_json::<Settings, _>(&path)? {
            Some(settings) => Ok(settings),
            None => {
                let settings = Settings::default();
                settings.save(paths)?;
                Ok(settings)
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TallyPaths) -> Result<(), TallyError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
