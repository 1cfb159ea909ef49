//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;

use crate::types::LEVEL_PRESETS;

pub const DEFAULT_LOG_PATH: &str = "tui-memory.log";

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed deck seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Preset (1-based) to start in instead of the level menu.
    pub start_level: Option<u8>,
    pub log_path: PathBuf,
    pub log_disabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_level: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_disabled: false,
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = var("MEMORY_SEED").and_then(|s| s.parse().ok());

        let start_level = var("MEMORY_LEVEL")
            .and_then(|s| s.parse::<u8>().ok())
            .filter(|&n| n >= 1 && n as usize <= LEVEL_PRESETS.len());

        let log_path = var("MEMORY_LOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        let log_disabled = var("MEMORY_LOG_DISABLED")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            seed,
            start_level,
            log_path,
            log_disabled,
        }
    }
}
