//! Multiset queries over a hand.
//!
//! All queries are read-only and treat the hand as a multiset: order never
//! matters, multiplicity does.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::collection::Hand;
use crate::cards::Tile;

impl<C: Tile> Hand<C> {
    /// Number of held cards identical to `card`.
    #[must_use]
    pub fn count_identical(&self, card: &C) -> usize {
        self.cards.iter().filter(|held| held.same_as(card)).count()
    }

    /// Number of distinct `(suit, rank)` identities held.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.cards
            .iter()
            .map(C::key)
            .collect::<FxHashSet<_>>()
            .len()
    }

    /// Number of held cards of `suit`.
    #[must_use]
    pub fn count_suit(&self, suit: C::Suit) -> usize {
        self.cards.iter().filter(|held| held.suit() == suit).count()
    }

    /// True when every card is identical. Vacuously true below two cards.
    #[must_use]
    pub fn all_same_card(&self) -> bool {
        self.all_match(C::same_as)
    }

    #[must_use]
    pub fn all_same_suit(&self) -> bool {
        self.all_match(C::same_suit_as)
    }

    #[must_use]
    pub fn all_same_rank(&self) -> bool {
        self.all_match(C::same_rank_as)
    }

    fn all_match(&self, pred: impl Fn(&C, &C) -> bool) -> bool {
        let mut cards = self.cards.iter();
        match cards.next() {
            Some(first) => cards.all(|card| pred(first, card)),
            None => true,
        }
    }

    #[must_use]
    pub fn contains(&self, card: &C) -> bool {
        self.cards.iter().any(|held| held.same_as(card))
    }

    /// True when `sub` is a sub-multiset of this hand.
    ///
    /// Each card of `sub` must be matched by a distinct held card, so a
    /// card listed twice in `sub` must be held at least twice.
    #[must_use]
    pub fn contains_all(&self, sub: &Hand<C>) -> bool {
        self.contains_each(sub.cards.iter())
    }

    pub(crate) fn contains_each<'a>(&self, required: impl IntoIterator<Item = &'a C>) -> bool
    where
        C: 'a,
    {
        let mut used: SmallVec<[bool; 32]> = SmallVec::from_elem(false, self.cards.len());
        required.into_iter().all(|card| {
            let slot = self
                .cards
                .iter()
                .enumerate()
                .position(|(idx, held)| !used[idx] && held.same_as(card));
            match slot {
                Some(idx) => {
                    used[idx] = true;
                    true
                }
                None => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{Card, Suit};
    use crate::hand::Hand;

    fn hand_of(cards: &[&str]) -> Hand {
        Hand::from_raw(cards.iter().map(|c| c.parse::<Card>().unwrap()))
    }

    #[test]
    fn test_counts() {
        let hand = hand_of(&["s3", "s3", "b3", "s9"]);
        assert_eq!(hand.count_identical(&Card::small(3)), 2);
        assert_eq!(hand.count_identical(&Card::big(9)), 0);
        assert_eq!(hand.distinct_count(), 3);
        assert_eq!(hand.count_suit(Suit::Small), 3);
        assert_eq!(hand.count_suit(Suit::Big), 1);
    }

    #[test]
    fn test_homogeneity_vacuous() {
        let empty: Hand = Hand::new();
        assert!(empty.all_same_card());
        assert!(empty.all_same_suit());
        assert!(empty.all_same_rank());

        let single = hand_of(&["b4"]);
        assert!(single.all_same_card());
        assert!(single.all_same_suit());
        assert!(single.all_same_rank());
    }

    #[test]
    fn test_homogeneity() {
        let hand = hand_of(&["s4", "b4"]);
        assert!(!hand.all_same_card());
        assert!(!hand.all_same_suit());
        assert!(hand.all_same_rank());

        let hand = hand_of(&["s4", "s8"]);
        assert!(hand.all_same_suit());
        assert!(!hand.all_same_rank());

        assert!(hand_of(&["b1", "b1", "b1"]).all_same_card());
    }

    #[test]
    fn test_contains() {
        let hand = hand_of(&["s1", "b2"]);
        assert!(hand.contains(&Card::big(2)));
        assert!(!hand.contains(&Card::small(2)));
    }

    #[test]
    fn test_contains_all_respects_multiplicity() {
        let hand = hand_of(&["s5", "s6", "b6"]);
        assert!(hand.contains_all(&hand_of(&["b6", "s5"])));
        assert!(!hand.contains_all(&hand_of(&["s5", "s5"])));
        assert!(hand.contains_all(&Hand::new()));

        let doubled = hand_of(&["s5", "s6", "s5"]);
        assert!(doubled.contains_all(&hand_of(&["s5", "s5"])));
        assert!(!doubled.contains_all(&hand_of(&["s5", "s5", "s5"])));
    }
}
