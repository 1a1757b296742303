use piece_supply::{error::SupplyError, Level, PieceSupply, Snapshot, SupplyConfig};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn master(seed: u64) -> PieceSupply<SmallRng> {
    PieceSupply::new(SupplyConfig::default(), SmallRng::seed_from_u64(seed)).unwrap()
}

#[test]
fn reserve_play_swap_walkthrough() {
    let mut supply = master(3);
    let start = supply.snapshot();
    assert_eq!(start.queue_ids(), vec![0, 1, 2, 3, 4]);
    assert!(start.stack.is_empty());

    let reserved = supply.reserve().unwrap();
    assert_eq!(reserved, start.queue[0]);
    assert_eq!(supply.snapshot().queue_ids(), vec![1, 2, 3, 4, 5]);
    assert_eq!(supply.snapshot().stack_ids(), vec![0]);

    let played = supply.play().unwrap();
    assert_eq!(played, start.queue[1]);
    assert_eq!(supply.snapshot().queue_ids(), vec![2, 3, 4, 5, 6]);

    supply.swap_front_top().unwrap();
    let after = supply.snapshot();
    assert_eq!(after.queue_ids(), vec![0, 3, 4, 5, 6]);
    assert_eq!(after.stack_ids(), vec![2]);
    assert_eq!(after.queue[0], start.queue[0]);
    assert_eq!(supply.queue().len(), 5);
    assert_eq!(supply.stack().top(), Some(0));
    assert_eq!(supply.next_id(), 7);
}

#[test]
fn swap_triple_with_one_reserved_piece() {
    let mut supply = master(9);
    supply.reserve().unwrap();

    let before = supply.snapshot();
    let drawn = supply.next_id();
    assert_eq!(
        supply.swap_triple(),
        Err(SupplyError::InsufficientStack {
            required: 3,
            available: 1,
        })
    );
    assert_eq!(supply.snapshot(), before);
    assert_eq!(supply.next_id(), drawn);
}

#[test]
fn swaps_are_self_inverse_and_draw_free() {
    let mut supply = master(11);
    for _ in 0..3 {
        supply.reserve().unwrap();
    }

    let before = supply.snapshot();
    let drawn = supply.next_id();

    supply.swap_front_top().unwrap();
    assert_ne!(supply.snapshot(), before);
    supply.swap_front_top().unwrap();
    assert_eq!(supply.snapshot(), before);

    supply.swap_triple().unwrap();
    assert_ne!(supply.snapshot(), before);
    supply.swap_triple().unwrap();
    assert_eq!(supply.snapshot(), before);

    assert_eq!(supply.next_id(), drawn);
    assert_eq!(supply.queue().len(), 5);
    assert_eq!(supply.stack().top(), Some(2));
}

#[derive(Clone, Copy, Debug)]
enum Op {
    Play,
    Reserve,
    UseReserved,
    SwapFrontTop,
    SwapTriple,
    Insert,
}

const OPS: [Op; 6] = [
    Op::Play,
    Op::Reserve,
    Op::UseReserved,
    Op::SwapFrontTop,
    Op::SwapTriple,
    Op::Insert,
];

fn apply(supply: &mut PieceSupply<SmallRng>, op: Op) -> Result<(), SupplyError> {
    match op {
        Op::Play => supply.play().map(drop),
        Op::Reserve => supply.reserve().map(drop),
        Op::UseReserved => supply.use_reserved().map(drop),
        Op::SwapFrontTop => supply.swap_front_top(),
        Op::SwapTriple => supply.swap_triple(),
        Op::Insert => supply.insert().map(drop),
    }
}

fn all_ids(snapshot: &Snapshot) -> Vec<u64> {
    let mut ids = snapshot.queue_ids();
    ids.extend(snapshot.stack_ids());
    ids
}

fn random_walk(config: SupplyConfig, seed: u64, steps: usize) {
    let mut supply = PieceSupply::new(config.clone(), SmallRng::seed_from_u64(seed)).unwrap();
    let mut picker = SmallRng::seed_from_u64(seed ^ 0x5eed);

    for _ in 0..steps {
        let op = OPS[picker.gen_range(0..OPS.len())];
        let before = supply.snapshot();
        let drawn = supply.next_id();
        let was_full = supply.queue().is_full();

        match apply(&mut supply, op) {
            Ok(()) => match op {
                Op::Play | Op::Reserve | Op::UseReserved => {
                    if was_full {
                        assert!(supply.queue().is_full(), "{op:?} lost fullness");
                    }
                }
                Op::SwapFrontTop | Op::SwapTriple => {
                    assert_eq!(supply.next_id(), drawn, "{op:?} drew a piece");
                    assert_eq!(supply.queue().len(), before.queue.len());
                    assert_eq!(supply.stack().len(), before.stack.len());
                }
                Op::Insert => assert_eq!(supply.next_id(), drawn + 1),
            },
            Err(_) => {
                assert_eq!(supply.snapshot(), before, "{op:?} mutated on failure");
                assert_eq!(supply.next_id(), drawn);
            }
        }

        assert!(supply.queue().len() <= config.queue_capacity);
        assert!(supply.stack().len() <= config.stack_capacity);

        // every live piece is unique and was dealt before the counter
        let mut ids = all_ids(&supply.snapshot());
        assert!(ids.iter().all(|&id| id < supply.next_id()));
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), supply.queue().len() + supply.stack().len());
    }
}

#[test]
fn random_walk_master() {
    for seed in 0..8 {
        random_walk(Level::Master.config(), seed, 500);
    }
}

#[test]
fn random_walk_adventurer() {
    for seed in 0..8 {
        random_walk(Level::Adventurer.config(), seed, 500);
    }
}

#[test]
fn random_walk_novice() {
    for seed in 0..4 {
        random_walk(Level::Novice.config(), seed, 200);
    }
}

#[test]
fn random_walk_short_queue() {
    // a two-slot queue can never satisfy swap_triple
    let config = SupplyConfig {
        queue_capacity: 2,
        initial_fill: 1,
        ..SupplyConfig::default()
    };

    for seed in 0..8 {
        random_walk(config.clone(), seed, 300);
    }
}

#[test]
fn replenished_ids_increase_in_call_order() {
    let mut supply = master(5);
    let mut last = supply.snapshot().queue_ids().last().copied().unwrap();

    for _ in 0..50 {
        supply.play().unwrap();
        let newest = supply.snapshot().queue_ids().last().copied().unwrap();
        assert_eq!(newest, last + 1);
        last = newest;
    }
}
