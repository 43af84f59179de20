//! Canonical ordering of a hand.
//!
//! Primary key is rank ascending. Cards of equal rank are ordered by suit,
//! in the direction chosen by the hand's [`SortOrder`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::collection::Hand;
use crate::cards::Tile;

/// Tie-break between cards of equal rank.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Lower suit first (`s5` before `b5`).
    #[default]
    LowerSuitFirst,
    /// Higher suit first (`b5` before `s5`).
    HigherSuitFirst,
}

impl SortOrder {
    /// Comparator for this order.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use zipai_hand::cards::Card;
    /// use zipai_hand::hand::SortOrder;
    ///
    /// let (s5, b5) = (Card::small(5), Card::big(5));
    /// assert_eq!(SortOrder::LowerSuitFirst.compare(&s5, &b5), Ordering::Less);
    /// assert_eq!(SortOrder::HigherSuitFirst.compare(&s5, &b5), Ordering::Greater);
    /// assert_eq!(SortOrder::HigherSuitFirst.compare(&b5, &Card::small(6)), Ordering::Less);
    /// ```
    pub fn compare<C: Tile>(self, a: &C, b: &C) -> Ordering {
        a.rank().cmp(&b.rank()).then_with(|| match self {
            SortOrder::LowerSuitFirst => a.suit().cmp(&b.suit()),
            SortOrder::HigherSuitFirst => b.suit().cmp(&a.suit()),
        })
    }
}

impl<C: Tile> Hand<C> {
    /// Set the tie-break order and reorder the hand in place.
    ///
    /// `None` selects [`SortOrder::LowerSuitFirst`].
    pub fn sort(&mut self, order: impl Into<Option<SortOrder>>) {
        self.order = order.into().unwrap_or_default();
        self.resort();
    }

    /// Reorder using the hand's current tie-break.
    pub(crate) fn resort(&mut self) {
        let order = self.order;
        self.cards.sort_by(|a, b| order.compare(a, b));
    }

    /// Append `card` and restore canonical order.
    ///
    /// `None` is ignored. The whole hand is re-sorted on every insertion;
    /// hands are small enough that this stays cheap.
    pub fn insert_sorted(&mut self, card: impl Into<Option<C>>) {
        let Some(card) = card.into() else {
            return;
        };
        self.cards.push_back(card);
        self.resort();
    }

    /// Whether the hand currently satisfies its own ordering.
    ///
    /// Can be false after [`Hand::push`] until the next sort.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        let order = self.order;
        self.cards
            .iter()
            .zip(self.cards.iter().skip(1))
            .all(|(a, b)| order.compare(a, b) != Ordering::Greater)
    }
}
