//! Hand configuration.
//!
//! Tables or seats build their hands from a shared `HandConfig` so every
//! hand starts with the same tie-break order and reproducible randomness.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use crate::hand::SortOrder;

/// Configuration applied when hands are created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandConfig {
    /// Tie-break between equal ranks for newly created hands.
    #[serde(default)]
    pub order: SortOrder,

    /// Seed for [`HandConfig::rng`].
    /// Same seed produces the same random removals.
    pub seed: u64,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::default(),
            seed: 42,
        }
    }
}

impl HandConfig {
    /// Create a new config with a custom tie-break order.
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// A fresh random source seeded from this config.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.seed)
    }
}
