//! Alignment configuration.
//!
//! Provider-specific constants (end delay, hyphen treatment) are carried
//! here instead of being hard-coded in the algorithms.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use thiserror::Error;

use crate::rules::WordRules;

/// Padding after the last spoken word, in milliseconds.
pub const DEFAULT_END_DELAY_MS: u64 = 1500;

/// Upper bound accepted for [`AlignmentConfig::end_delay_ms`].
pub const MAX_END_DELAY_MS: u64 = 10_000;

/// How a hyphen inside a chunk or character stream is treated.
///
/// `Separate` splits `"well-known"` into `well` and `known`; `Join` reads it
/// as the single word `wellknown`. Whichever is chosen applies to both the
/// character segmenter and the chunk tokenizer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum HyphenHandling {
    #[default]
    Separate,
    Join,
}

/// Tunables for speech-mark reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Added after the final word's timestamp to close the last chunk.
    pub end_delay_ms: u64,
    pub hyphens: HyphenHandling,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            end_delay_ms: DEFAULT_END_DELAY_MS,
            hyphens: HyphenHandling::default(),
        }
    }
}

impl AlignmentConfig {
    pub fn with_end_delay_ms(mut self, end_delay_ms: u64) -> Self {
        self.end_delay_ms = end_delay_ms;
        self
    }

    pub fn with_hyphens(mut self, hyphens: HyphenHandling) -> Self {
        self.hyphens = hyphens;
        self
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.end_delay_ms > MAX_END_DELAY_MS {
            return Err(ConfigError::EndDelayTooLong {
                end_delay_ms: self.end_delay_ms,
                max_ms: MAX_END_DELAY_MS,
            });
        }
        Ok(())
    }

    pub fn word_rules(&self) -> WordRules {
        WordRules::new(self.hyphens)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("end delay {end_delay_ms}ms exceeds the {max_ms}ms limit")]
    EndDelayTooLong { end_delay_ms: u64, max_ms: u64 },
    #[error("invalid alignment config: {0}")]
    Parse(#[from] serde_json::Error),
}
