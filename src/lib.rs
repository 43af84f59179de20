//! # zipai-hand
//!
//! Hand management and meld detection for zipai-style rank/suit card games.
//!
//! ## Design Principles
//!
//! 1. **Contract, not encoding**: the hand only talks to cards through the
//!    `Tile` trait. The shipped `Card` is one implementation.
//!
//! 2. **Total operations**: nothing here fails. Missing cards, empty hands
//!    and absent targets come back as `false`, `None` or an empty list.
//!
//! 3. **Injected randomness**: random removal draws from a caller-supplied
//!    `RandomIndex`, so games and tests stay reproducible.
//!
//! ## Modules
//!
//! - `cards`: the `Tile` contract, `Card`, `Suit`
//! - `hand`: `Hand`, ordering, multiset queries, meld detection
//! - `core`: RNG and configuration
//!
//! ## Example
//!
//! ```
//! use zipai_hand::{Card, Hand};
//!
//! let hand: Hand = Hand::from_cards([Card::small(3), Card::small(4), Card::small(6)]);
//! let groups = hand.run_groups(&Card::small(5));
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups[0].to_string(), "s3,s4,s5");
//! assert_eq!(groups[1].to_string(), "s4,s5,s6");
//! ```

pub mod cards;
pub mod core;
pub mod hand;

// Re-export commonly used types
pub use crate::cards::{Card, CardError, Suit, Tile};
pub use crate::core::{GameRng, GameRngState, HandConfig, RandomIndex};
pub use crate::hand::{Hand, MeldKind, SortOrder};
