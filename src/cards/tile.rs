//! The card contract consumed by [`Hand`](crate::hand::Hand).
//!
//! A hand never inspects a card's encoding directly. It only needs:
//! - `suit` / `rank` accessors for ordering
//! - identity, same-suit and same-rank equality
//! - adjacency within a suit (`prev` / `next`)
//! - the partner mapping used by the two-card special meld
//! - the special wraparound ranks that count as a run
//! - a hashable identity key for deduplication
//!
//! Games plug their own card type in by implementing `Tile`.

use std::fmt;
use std::hash::Hash;

/// A rank/suit card as seen by the hand engine.
///
/// Implementations must be immutable values: every method is a pure
/// function of `(suit, rank)`.
pub trait Tile: Clone + fmt::Debug {
    /// Suit category. `Ord` drives the tie-break when ranks are equal.
    type Suit: Copy + Ord + Eq + fmt::Debug;

    /// Value uniquely encoding `(suit, rank)`.
    type Key: Copy + Eq + Hash;

    fn suit(&self) -> Self::Suit;

    fn rank(&self) -> u8;

    /// The card one rank below in the same suit, or `None` at the bottom.
    fn prev(&self) -> Option<Self>;

    /// The card one rank above in the same suit, or `None` at the top.
    fn next(&self) -> Option<Self>;

    /// Fixed partner card for the two-card special meld.
    fn complement(&self) -> Self;

    /// The other two special wraparound cards, if `self` is one of them.
    ///
    /// The three special ranks of a suit form a run even though they are
    /// not numerically adjacent. Returned in ascending rank order.
    fn wraparound_partners(&self) -> Option<[Self; 2]>;

    fn key(&self) -> Self::Key;

    /// Identical card: same suit and same rank.
    fn same_as(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    fn same_suit_as(&self, other: &Self) -> bool {
        self.suit() == other.suit()
    }

    fn same_rank_as(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}
