//! The zipai card: two suits of ranks 1-10.
//!
//! ## Notation
//!
//! Cards are written as a suit letter followed by the rank:
//! `s1`..`s10` for the small suit, `b1`..`b10` for the big suit.
//!
//! ```
//! use zipai_hand::cards::{Card, Suit};
//!
//! let card: Card = "b7".parse().unwrap();
//! assert_eq!(card.suit, Suit::Big);
//! assert_eq!(card.rank, 7);
//! assert_eq!(card.to_string(), "b7");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::Tile;

/// Lowest rank in a suit.
pub const MIN_RANK: u8 = 1;

/// Highest rank in a suit.
pub const MAX_RANK: u8 = 10;

/// Ranks that form a run together despite the gaps (2-7-10).
pub const WRAPAROUND_RANKS: [u8; 3] = [2, 7, 10];

/// Card suit. `Small` orders before `Big`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Small,
    Big,
}

impl Suit {
    pub const ALL: [Suit; 2] = [Suit::Small, Suit::Big];

    /// The other suit.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Suit::Small => Suit::Big,
            Suit::Big => Suit::Small,
        }
    }

    const fn letter(self) -> char {
        match self {
            Suit::Small => 's',
            Suit::Big => 'b',
        }
    }
}

/// Errors from building or parsing a [`Card`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("rank {0} outside 1..=10")]
    RankOutOfRange(u8),
    #[error("unknown suit letter {0:?}")]
    UnknownSuit(char),
    #[error("malformed card notation {0:?}")]
    Malformed(String),
}

/// An immutable card value.
///
/// Fields are public for pattern matching, but cards should be built with
/// [`Card::new`] or parsed so the rank stays in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    pub suit: Suit,
    pub rank: u8,
}

impl Card {
    /// Build a card, rejecting ranks outside 1-10.
    pub fn new(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if !(MIN_RANK..=MAX_RANK).contains(&rank) {
            return Err(CardError::RankOutOfRange(rank));
        }
        Ok(Self { suit, rank })
    }

    /// Small-suit card. Caller guarantees the rank is valid.
    #[must_use]
    pub const fn small(rank: u8) -> Self {
        Self { suit: Suit::Small, rank }
    }

    /// Big-suit card. Caller guarantees the rank is valid.
    #[must_use]
    pub const fn big(rank: u8) -> Self {
        Self { suit: Suit::Big, rank }
    }

    /// One of each distinct card, small suit first, ranks ascending.
    pub fn full_set() -> impl Iterator<Item = Card> {
        Suit::ALL
            .into_iter()
            .flat_map(|suit| (MIN_RANK..=MAX_RANK).map(move |rank| Card { suit, rank }))
    }

    fn with_rank(self, rank: u8) -> Option<Self> {
        Card::new(self.suit, rank).ok()
    }
}

impl Tile for Card {
    type Suit = Suit;
    type Key = u16;

    fn suit(&self) -> Suit {
        self.suit
    }

    fn rank(&self) -> u8 {
        self.rank
    }

    fn prev(&self) -> Option<Self> {
        self.rank.checked_sub(1).and_then(|rank| self.with_rank(rank))
    }

    fn next(&self) -> Option<Self> {
        self.rank.checked_add(1).and_then(|rank| self.with_rank(rank))
    }

    /// Same rank, opposite suit.
    fn complement(&self) -> Self {
        Self {
            suit: self.suit.opposite(),
            rank: self.rank,
        }
    }

    fn wraparound_partners(&self) -> Option<[Self; 2]> {
        let [a, b, c] = WRAPAROUND_RANKS;
        let (x, y) = match self.rank {
            r if r == a => (b, c),
            r if r == b => (a, c),
            r if r == c => (a, b),
            _ => return None,
        };
        Some([self.with_rank(x)?, self.with_rank(y)?])
    }

    fn key(&self) -> u16 {
        ((self.suit as u16) << 8) | u16::from(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.letter(), self.rank)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars
            .next()
            .ok_or_else(|| CardError::Malformed(s.to_string()))?;
        let suit = match letter.to_ascii_lowercase() {
            's' => Suit::Small,
            'b' => Suit::Big,
            other => return Err(CardError::UnknownSuit(other)),
        };
        let rank = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| CardError::Malformed(s.to_string()))?;
        Card::new(suit, rank)
    }
}

impl TryFrom<String> for Card {
    type Error = CardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}
