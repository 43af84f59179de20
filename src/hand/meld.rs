//! Meld detection: which combinations a target card can form with a hand.
//!
//! The target is the card being drawn, discarded or offered. It is never
//! assumed to be in the hand.
//!
//! ## Meld Kinds
//!
//! - Pair-completion: two held cards identical to the target
//! - Sweep: same precondition as pair-completion, different game action
//! - Escalation: three held cards identical to the target
//! - Run: any group from [`Hand::run_groups`]
//!
//! ## Run Groups
//!
//! Checked in a fixed order, every hit is kept:
//!
//! 1. backward run `R-2, R-1, target`
//! 2. straddling run `R-1, target, R+1`
//! 3. forward run `target, R+1, R+2`
//! 4. wraparound run over the special ranks of the target's suit
//! 5. two-card complement group `target, complement`
//! 6. three-card complement group `complement, complement, target`
//!
//! Every group is a [`Hand`] in lower-suit-first order. Absence of a meld is
//! an empty result, never an error.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::collection::Hand;
use crate::cards::Tile;

/// Held cards needed for pair-completion and sweep.
pub const PAIR_THRESHOLD: usize = 2;

/// Held cards needed for escalation.
pub const ESCALATE_THRESHOLD: usize = 3;

/// Minimum hand size for any run group.
pub const MIN_RUN_HAND: usize = 2;

/// The four meld kinds a target card can enable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    Run,
    PairComplete,
    Sweep,
    Escalate,
}

impl MeldKind {
    pub const ALL: [MeldKind; 4] = [
        MeldKind::Run,
        MeldKind::PairComplete,
        MeldKind::Sweep,
        MeldKind::Escalate,
    ];
}

impl<C: Tile> Hand<C> {
    #[must_use]
    pub fn can_pair_complete(&self, target: &C) -> bool {
        self.count_identical(target) >= PAIR_THRESHOLD
    }

    #[must_use]
    pub fn can_sweep(&self, target: &C) -> bool {
        self.count_identical(target) >= PAIR_THRESHOLD
    }

    #[must_use]
    pub fn can_escalate(&self, target: &C) -> bool {
        self.count_identical(target) >= ESCALATE_THRESHOLD
    }

    /// True when `group` is one of the run groups for `target`.
    ///
    /// Comparison is positional, so `group` must be in lower-suit-first
    /// order like the groups [`Hand::run_groups`] returns.
    pub fn can_form_run<'a>(&self, target: impl Into<Option<&'a C>>, group: &Hand<C>) -> bool
    where
        C: 'a,
    {
        let target = target.into();
        log::debug!("can_form_run: hand={:?} target={:?} group={:?}", self.cards, target, group.cards);
        let groups = self.run_groups(target);
        log::debug!("can_form_run: {} candidate groups {:?}", groups.len(), groups);
        groups.iter().any(|candidate| candidate.same_as(group))
    }

    /// Every group that, with `target`, forms a legal run.
    ///
    /// Empty for a `None` target or a hand of fewer than two cards.
    pub fn run_groups<'a>(&self, target: impl Into<Option<&'a C>>) -> Vec<Hand<C>>
    where
        C: 'a,
    {
        let Some(target) = target.into() else {
            return Vec::new();
        };
        if self.len() < MIN_RUN_HAND {
            return Vec::new();
        }

        let mut groups = Vec::new();

        let prev = target.prev();
        let next = target.next();
        let prev2 = prev.as_ref().and_then(C::prev);
        let next2 = next.as_ref().and_then(C::next);

        let sequential = [both(&prev2, &prev), both(&prev, &next), both(&next, &next2)];
        for support in sequential.into_iter().flatten() {
            self.push_if_held(&mut groups, support, target);
        }

        if let Some(support) = target.wraparound_partners() {
            self.push_if_held(&mut groups, support, target);
        }

        let complement = target.complement();
        if self.contains_each([&complement]) {
            groups.push(Hand::from_cards([target.clone(), complement.clone()]));
        }
        if self.count_identical(&complement) >= PAIR_THRESHOLD {
            groups.push(Hand::from_cards([complement.clone(), complement, target.clone()]));
        }

        log::trace!("run_groups: target={:?} found {}", target, groups.len());
        groups
    }

    /// Which meld kinds `target` enables against this hand.
    pub fn available_melds(&self, target: &C) -> SmallVec<[MeldKind; 4]> {
        MeldKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                MeldKind::Run => !self.run_groups(target).is_empty(),
                MeldKind::PairComplete => self.can_pair_complete(target),
                MeldKind::Sweep => self.can_sweep(target),
                MeldKind::Escalate => self.can_escalate(target),
            })
            .collect()
    }

    fn push_if_held(&self, groups: &mut Vec<Hand<C>>, support: [C; 2], target: &C) {
        if self.contains_each(&support) {
            let [a, b] = support;
            groups.push(Hand::from_cards([a, b, target.clone()]));
        }
    }
}

fn both<C: Clone>(a: &Option<C>, b: &Option<C>) -> Option<[C; 2]> {
    Some([a.clone()?, b.clone()?])
}
