//! Runtime configuration.
//!
//! Values come from (in increasing precedence) the built-in defaults, an
//! optional JSON document, and environment variables:
//!
//! - `LIFE_CELL_SIZE`: cell size in surface units (default 1)
//! - `LIFE_INTERVAL_MS`: interval between generations (default 1000, range 200..=86400000)
//! - `LIFE_HISTORY_LENGTH`: retained generations (default 1, must be >= 1)
//! - `LIFE_RULES`: compact thresholds `"under,repmin,repmax,over,birth"`
//!
//! Invalid values are logged and ignored; the prior value is kept.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::{
    RuleSet, DEFAULT_CELL_SIZE, DEFAULT_HISTORY_LENGTH, DEFAULT_INTERVAL_MS, INTERVAL_MAX_MS,
    INTERVAL_MIN_MS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    pub cell_size: u16,
    pub interval_ms: u32,
    pub history_length: usize,
    pub rules: RuleSet,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            history_length: DEFAULT_HISTORY_LENGTH,
            rules: RuleSet::default(),
        }
    }
}

pub fn interval_in_range(ms: u32) -> bool {
    (INTERVAL_MIN_MS..=INTERVAL_MAX_MS).contains(&ms)
}

impl LifeConfig {
    /// Defaults overridden by environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Parse a JSON document; missing fields take their defaults.
    ///
    /// The result is passed through [`LifeConfig::validated`].
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        let parsed: Self = serde_json::from_str(s)?;
        Ok(parsed.validated())
    }

    /// Apply `LIFE_*` environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup (the environment in production).
    pub fn apply_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("LIFE_CELL_SIZE") {
            match raw.trim().parse::<u16>() {
                Ok(v) if v > 0 => self.cell_size = v,
                _ => warn!("ignoring LIFE_CELL_SIZE={raw:?}"),
            }
        }

        if let Some(raw) = lookup("LIFE_INTERVAL_MS") {
            match raw.trim().parse::<u32>() {
                Ok(v) if interval_in_range(v) => self.interval_ms = v,
                _ => warn!(
                    "ignoring LIFE_INTERVAL_MS={raw:?} (expected {INTERVAL_MIN_MS}..={INTERVAL_MAX_MS})"
                ),
            }
        }

        if let Some(raw) = lookup("LIFE_HISTORY_LENGTH") {
            match raw.trim().parse::<usize>() {
                Ok(v) if v > 0 => self.history_length = v,
                _ => warn!("ignoring LIFE_HISTORY_LENGTH={raw:?}"),
            }
        }

        if let Some(raw) = lookup("LIFE_RULES") {
            match RuleSet::parse_compact(&raw) {
                Some(rules) => self.rules = rules,
                None => warn!("ignoring LIFE_RULES={raw:?} (expected five comma-separated counts)"),
            }
        }
    }

    /// Replace every out-of-range field with its default.
    pub fn validated(mut self) -> Self {
        let defaults = Self::default();
        if self.cell_size == 0 {
            warn!("cell_size must be positive; using {}", defaults.cell_size);
            self.cell_size = defaults.cell_size;
        }
        if !interval_in_range(self.interval_ms) {
            warn!(
                "interval_ms {} out of range; using {}",
                self.interval_ms, defaults.interval_ms
            );
            self.interval_ms = defaults.interval_ms;
        }
        if self.history_length == 0 {
            warn!(
                "history_length must be positive; using {}",
                defaults.history_length
            );
            self.history_length = defaults.history_length;
        }
        self
    }
}
