use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zipai_hand::{Card, GameRng, Hand};

fn dealt_hand() -> Hand {
    let mut deck: Hand = Card::full_set().chain(Card::full_set()).collect();
    let mut rng = GameRng::new(11);
    let mut hand = Hand::new();
    for _ in 0..20 {
        if let Some(card) = deck.take_random(&mut rng) {
            hand.insert_sorted(card);
        }
    }
    hand
}

fn enumerating_run_groups(c: &mut Criterion) {
    let hand = dealt_hand();
    c.bench_function("run groups for every card against a 20-card hand", |b| {
        b.iter(|| {
            for target in Card::full_set() {
                black_box(hand.run_groups(&target));
            }
        })
    });
}

fn inserting_sorted(c: &mut Criterion) {
    c.bench_function("deal 20 cards with insert_sorted", |b| b.iter(|| black_box(dealt_hand())));
}

criterion_group!(benches, enumerating_run_groups, inserting_sorted);
criterion_main!(benches);
