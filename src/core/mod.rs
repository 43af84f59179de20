//! Engine plumbing shared by hands: injected randomness and configuration.

pub mod config;
pub mod rng;

pub use config::HandConfig;
pub use rng::{GameRng, GameRngState, RandomIndex};
