//! The hand container and its collection mechanics.
//!
//! A `Hand` is an ordered sequence of cards. Duplicates are allowed: a
//! player may hold several identical cards.
//!
//! ## Ordering
//!
//! Construction from cards and [`Hand::insert_sorted`] keep the hand in
//! canonical order. [`Hand::push`] and [`Hand::append`] do not; callers
//! sort explicitly when they are done appending.
//!
//! ## Storage
//!
//! Cards live in an `im::Vector`, so cloning a hand is O(1) and
//! [`Hand::split_from_back`] shares structure with the original. Writes are
//! copy-on-write: mutating one side of a split never shows through on the
//! other side or on the source hand.

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::order::SortOrder;
use crate::cards::{Card, Tile};
use crate::core::{HandConfig, RandomIndex};

/// An ordered, mutable collection of cards.
///
/// ```
/// use zipai_hand::cards::Card;
/// use zipai_hand::hand::Hand;
///
/// let mut hand: Hand = Hand::from_cards([Card::small(4), Card::big(2), Card::small(2)]);
/// assert_eq!(hand.to_string(), "s2,b2,s4");
///
/// assert!(hand.remove(&Card::big(2)));
/// assert!(!hand.remove(&Card::big(9)));
/// assert_eq!(hand.len(), 2);
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C: Clone + Serialize",
    deserialize = "C: Clone + Deserialize<'de>"
))]
pub struct Hand<C = Card> {
    pub(crate) cards: Vector<C>,
    #[serde(default)]
    pub(crate) order: SortOrder,
}

impl<C: Tile> Default for Hand<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Tile> Hand<C> {
    /// Create an empty hand with the default tie-break.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vector::new(),
            order: SortOrder::default(),
        }
    }

    /// Create an empty hand using the configured tie-break.
    #[must_use]
    pub fn with_config(config: &HandConfig) -> Self {
        Self {
            cards: Vector::new(),
            order: config.order,
        }
    }

    /// Create a hand from cards, in canonical order.
    pub fn from_cards(cards: impl IntoIterator<Item = C>) -> Self {
        let mut hand = Self::from_raw(cards);
        hand.resort();
        hand
    }

    /// Create a hand that keeps the given sequence as-is.
    pub fn from_raw(cards: impl IntoIterator<Item = C>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            order: SortOrder::default(),
        }
    }

    /// Tie-break applied by the most recent sort.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Backing sequence.
    #[must_use]
    pub fn cards(&self) -> &Vector<C> {
        &self.cards
    }

    pub fn iter(&self) -> im::vector::Iter<'_, C> {
        self.cards.iter()
    }

    /// Card at `idx`, or `None` past the end.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&C> {
        self.cards.get(idx)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Last card without removing it.
    #[must_use]
    pub fn last(&self) -> Option<&C> {
        self.cards.back()
    }

    /// Append one card without re-sorting.
    pub fn push(&mut self, card: C) {
        self.cards.push_back(card);
    }

    /// Append every card of `other` without re-sorting.
    pub fn append(&mut self, other: &Hand<C>) {
        self.cards.append(other.cards.clone());
    }

    /// Remove the first card identical to `card`.
    ///
    /// Returns `true` on removal. `None` means nothing to remove and also
    /// returns `true`. A card that is not held returns `false` and leaves
    /// the hand untouched.
    pub fn remove<'a>(&mut self, card: impl Into<Option<&'a C>>) -> bool
    where
        C: 'a,
    {
        let Some(card) = card.into() else {
            return true;
        };
        match self.cards.iter().position(|held| held.same_as(card)) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove and return the first card.
    pub fn pop_front(&mut self) -> Option<C> {
        self.cards.pop_front()
    }

    /// Remove and return a uniformly chosen card.
    ///
    /// Draws exactly one index from `rng` when the hand is not empty.
    pub fn take_random<R: RandomIndex + ?Sized>(&mut self, rng: &mut R) -> Option<C> {
        let len = self.cards.len();
        if len == 0 {
            return None;
        }
        let idx = rng.next_index(len);
        debug_assert!(idx < len, "random index {idx} out of range for {len} cards");
        Some(self.cards.remove(idx.min(len - 1)))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Split off the last `k` cards.
    ///
    /// Returns `(all but the last k, last k)`. When `k >= len` the whole
    /// hand comes back as the left side and there is no right side, so
    /// `k == len` does not produce an empty left part.
    ///
    /// Both sides are independent hands; see the module docs on storage.
    #[must_use]
    pub fn split_from_back(&self, k: usize) -> (Hand<C>, Option<Hand<C>>) {
        let len = self.cards.len();
        if k >= len {
            return (self.clone(), None);
        }
        let mut left = self.cards.clone();
        let right = left.split_off(len - k);
        (
            Hand { cards: left, order: self.order },
            Some(Hand { cards: right, order: self.order }),
        )
    }

    /// Positional equality: same length and identical cards at every index.
    ///
    /// Two hands holding the same cards in a different order are not the
    /// same.
    #[must_use]
    pub fn same_as(&self, other: &Hand<C>) -> bool {
        self.cards.len() == other.cards.len()
            && self.cards.iter().zip(other.cards.iter()).all(|(a, b)| a.same_as(b))
    }
}

impl<C: Tile> PartialEq for Hand<C> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<C: Tile> Eq for Hand<C> {}

impl<C: Tile> FromIterator<C> for Hand<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

/// Appends without re-sorting, like [`Hand::push`].
impl<C: Tile> Extend<C> for Hand<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl<'a, C: Tile> IntoIterator for &'a Hand<C> {
    type Item = &'a C;
    type IntoIter = im::vector::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<C: Tile> fmt::Debug for Hand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hand")
            .field("cards", &self.cards)
            .field("order", &self.order)
            .finish()
    }
}

impl<C: Tile + fmt::Display> fmt::Display for Hand<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
