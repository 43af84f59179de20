//! The hand: ordering, collection mechanics, multiset queries and melds.
//!
//! ## Key Types
//!
//! - `Hand`: ordered card collection, generic over any [`Tile`](crate::cards::Tile)
//! - `SortOrder`: tie-break between cards of equal rank
//! - `MeldKind`: run, pair-completion, sweep, escalation
//!
//! A hand is owned by one actor at a time and has no internal locking.

pub mod collection;
pub mod meld;
pub mod order;
pub mod query;

pub use collection::Hand;
pub use meld::{MeldKind, ESCALATE_THRESHOLD, MIN_RUN_HAND, PAIR_THRESHOLD};
pub use order::SortOrder;
