//! Meld detection integration tests.
//!
//! These tests drive the hand the way a turn processor does: build a
//! hand, offer a target card, read back the groups or predicates.

use zipai_hand::cards::{Card, Suit, Tile, WRAPAROUND_RANKS};
use zipai_hand::hand::{Hand, MeldKind};

fn hand_of(cards: &[&str]) -> Hand {
    cards.iter().map(|c| c.parse::<Card>().unwrap()).collect()
}

// =============================================================================
// Run Groups
// =============================================================================

/// Test that a lone backward pair yields exactly the backward run.
#[test]
fn test_backward_run_scenario() {
    let hand = hand_of(&["s3", "s4"]);
    let groups = hand.run_groups(&Card::small(5));

    assert_eq!(groups, vec![hand_of(&["s3", "s4", "s5"])]);
}

/// Test that backward, straddling and forward runs are all reported, in that order.
#[test]
fn test_three_sequential_runs_scenario() {
    let hand = hand_of(&["s3", "s4", "s6", "s7"]);
    let groups = hand.run_groups(&Card::small(5));

    assert_eq!(
        groups,
        vec![
            hand_of(&["s3", "s4", "s5"]),
            hand_of(&["s4", "s5", "s6"]),
            hand_of(&["s5", "s6", "s7"]),
        ]
    );
}

/// Test the wraparound run for every special rank in both suits.
#[test]
fn test_wraparound_scenario() {
    for suit in Suit::ALL {
        for rank in WRAPAROUND_RANKS {
            let target = Card::new(suit, rank).unwrap();
            let others = WRAPAROUND_RANKS
                .iter()
                .filter(|&&r| r != rank)
                .map(|&r| Card::new(suit, r).unwrap());
            let hand: Hand = others.collect();

            let groups = hand.run_groups(&target);
            let full: Hand = WRAPAROUND_RANKS
                .iter()
                .map(|&r| Card::new(suit, r).unwrap())
                .collect();

            assert_eq!(groups.iter().filter(|g| **g == full).count(), 1, "{target}");
            assert_eq!(groups.len(), 1, "{target}");
        }
    }
}

/// Test that special ranks of the other suit do not form a wraparound run.
#[test]
fn test_wraparound_needs_same_suit() {
    let hand = hand_of(&["b7", "b10"]);
    assert!(hand.run_groups(&Card::small(2)).is_empty());
}

/// Test that a held card only counts once when two groups need it.
#[test]
fn test_overlapping_groups_share_cards() {
    let hand = hand_of(&["s4", "s6"]);
    let groups = hand.run_groups(&Card::small(5));
    assert_eq!(groups, vec![hand_of(&["s4", "s5", "s6"])]);
}

/// Test the complement groups with one and two partner cards held.
#[test]
fn test_complement_scenarios() {
    let target = Card::small(6);
    let partner = target.complement();

    let one = Hand::from_cards([partner, Card::big(1)]);
    assert_eq!(one.run_groups(&target), vec![Hand::from_cards([target, partner])]);

    let two = Hand::from_cards([partner, partner]);
    assert_eq!(
        two.run_groups(&target),
        vec![
            Hand::from_cards([target, partner]),
            Hand::from_cards([partner, partner, target]),
        ]
    );
}

/// Test that sequential, wraparound and complement checks combine.
#[test]
fn test_mixed_groups_follow_check_order() {
    let hand = hand_of(&["b8", "b9", "b2", "b7", "s10", "s10"]);
    let groups = hand.run_groups(&Card::big(10));

    assert_eq!(
        groups,
        vec![
            hand_of(&["b8", "b9", "b10"]),
            hand_of(&["b2", "b7", "b10"]),
            hand_of(&["s10", "b10"]),
            hand_of(&["s10", "s10", "b10"]),
        ]
    );
}

/// Test that fewer than two cards never yields a group.
#[test]
fn test_short_hand_has_no_groups() {
    let hand = hand_of(&["b5"]);
    assert!(hand.run_groups(&Card::small(5)).is_empty());
    assert!(Hand::<Card>::new().run_groups(&Card::small(5)).is_empty());
}

// =============================================================================
// Predicates
// =============================================================================

/// Test pair, sweep and escalation thresholds.
#[test]
fn test_identical_thresholds() {
    let target = Card::small(9);

    let two = hand_of(&["s9", "s9", "b9", "s1"]);
    assert!(two.can_pair_complete(&target));
    assert!(two.can_sweep(&target));
    assert!(!two.can_escalate(&target));

    let three = hand_of(&["s9", "s9", "s9"]);
    assert!(three.can_pair_complete(&target));
    assert!(three.can_sweep(&target));
    assert!(three.can_escalate(&target));
}

/// Test validating a player's chosen run against the hand.
#[test]
fn test_can_form_run_against_choice() {
    let hand = hand_of(&["s3", "s4", "s6", "s7"]);
    let target = Card::small(5);

    for choice in hand.run_groups(&target) {
        assert!(hand.can_form_run(&target, &choice));
    }
    assert!(!hand.can_form_run(&target, &hand_of(&["s2", "s3", "s5"])));
}

/// Test the meld summary used when offering a discard to a seat.
#[test]
fn test_available_melds_summary() {
    let hand = hand_of(&["s5", "s5", "s3", "s4"]);
    assert_eq!(
        hand.available_melds(&Card::small(5)).as_slice(),
        &[MeldKind::Run, MeldKind::PairComplete, MeldKind::Sweep]
    );
}
