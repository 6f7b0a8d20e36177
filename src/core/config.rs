//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Spawn probability of a 4 tile (the rest are 2s).
pub const DEFAULT_FOUR_PROBABILITY: f64 = 0.1;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the tile RNG.
    /// `None` draws a seed from OS entropy; `Some` gives a reproducible game.
    pub seed: Option<u64>,

    /// Probability that a spawned tile is a 4 instead of a 2 (default: 0.1).
    pub four_probability: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            four_probability: DEFAULT_FOUR_PROBABILITY,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Create a new config with a custom 4-tile probability.
    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    /// Check that every parameter is in range.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        Ok(())
    }
}
