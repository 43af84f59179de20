//! Card system: the contract the hand consumes and the game's card.
//!
//! ## Key Types
//!
//! - `Tile`: suit/rank accessors, adjacency, complement, identity key
//! - `Card`: the shipped zipai card (two suits, ranks 1-10)
//! - `Suit`: small or big
//! - `CardError`: rejected construction or notation

pub mod card;
pub mod tile;

pub use card::{Card, CardError, Suit, MAX_RANK, MIN_RANK, WRAPAROUND_RANKS};
pub use tile::Tile;
