//! Injected randomness for random card removal.
//!
//! The hand never owns a generator. Callers pass a [`RandomIndex`] into
//! [`Hand::take_random`](crate::hand::Hand::take_random), one draw per call.
//!
//! ```
//! use zipai_hand::core::{GameRng, RandomIndex};
//!
//! let mut rng = GameRng::new(42);
//! let idx = rng.next_index(5);
//! assert!(idx < 5);
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.next_index(5), idx);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform index source: `next_index(n)` returns a value in `[0, n)`.
///
/// `n` is always at least 1 when called by the hand.
pub trait RandomIndex {
    fn next_index(&mut self, n: usize) -> usize;
}

/// Closures work as scripted sources in tests and replays.
impl<F: FnMut(usize) -> usize> RandomIndex for F {
    fn next_index(&mut self, n: usize) -> usize {
        self(n)
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 so a seed reproduces the same removals on every platform.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent, deterministic stream (e.g. one per seat).
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomIndex for GameRng {
    fn next_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    pub fork_counter: u64,
}
