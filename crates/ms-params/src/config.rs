//! Configuration shared by range declaration and the search cursors.

use serde::{Deserialize, Serialize};

use crate::config_error;
use crate::errors::ParamResult;

/// Samples per declared range unless configured otherwise.
pub const DEFAULT_SAMPLE_COUNT: usize = 5;

/// Search-space settings. One instance is meant to be shared by every range
/// declared in a tree so all axes use the same resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of samples generated for each non-degenerate range.
    pub sample_count: usize,

    /// Fraction of all combinations kept by random search, in (0, 1].
    pub random_ratio: f64,

    /// Seed for random search, so subsets are reproducible.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            random_ratio: 0.5,
            seed: 0,
        }
    }
}

impl SearchConfig {
    pub fn with_sample_count(mut self, n: usize) -> Self {
        self.sample_count = n;
        self
    }

    pub fn with_random_ratio(mut self, ratio: f64) -> Self {
        self.random_ratio = ratio;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Parse from JSON; missing fields fall back to defaults.
    pub fn from_json_str(json: &str) -> ParamResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ParamResult<()> {
        if self.sample_count == 0 {
            return Err(config_error!("sample_count must be at least 1"));
        }
        if !(self.random_ratio > 0.0 && self.random_ratio <= 1.0) {
            return Err(config_error!(
                "random_ratio must be in (0, 1], got {}",
                self.random_ratio
            ));
        }
        Ok(())
    }
}
