//! Shuffle integration tests.
//!
//! Swaps must land cups exactly on each other's starting positions, so the
//! set of positions after any shuffle is the original set, bit for bit.

use shell_game::core::{Axis, CupId, GameRng, ShellGameConfig, Vec3};
use shell_game::director::{GameDirector, GameEvent, RoundPhase};

const FRAME: f32 = 1.0 / 60.0;

fn director_with(config: ShellGameConfig, seed: u64) -> GameDirector {
    GameDirector::new(config, GameRng::new(seed)).unwrap()
}

fn sorted_bits(positions: &[Vec3]) -> Vec<(u32, u32, u32)> {
    let mut bits: Vec<_> = positions
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits(), p.z.to_bits()))
        .collect();
    bits.sort_unstable();
    bits
}

fn finish_shuffle(director: &mut GameDirector) -> Vec<GameEvent> {
    let mut events = director.take_events();
    for _ in 0..100_000 {
        if !director.is_shuffling() {
            return events;
        }
        director.update(FRAME);
        events.extend(director.take_events());
    }
    panic!("shuffle never finished");
}

// =============================================================================
// Exactness
// =============================================================================

/// Positions after a shuffle are an exact permutation of the slots.
#[test]
fn test_shuffle_is_exact_permutation() {
    let config = ShellGameConfig::default().with_shuffle_count(25);
    let slots = config.slots.clone();
    let mut director = director_with(config, 11);

    director.start();
    finish_shuffle(&mut director);

    assert_eq!(sorted_bits(&director.positions()), sorted_bits(&slots));
    assert_eq!(director.phase(), RoundPhase::AwaitingSelection);
}

/// Each swap ends with both cups on the other's pre-swap position.
#[test]
fn test_each_swap_exchanges_exactly() {
    let config = ShellGameConfig::default()
        .with_shuffle_count(12)
        .with_slots(vec![
            Vec3::new(-1.3, 0.1, 0.7),
            Vec3::new(0.2, 0.0, -0.4),
            Vec3::new(1.9, -0.2, 0.05),
            Vec3::new(3.3, 0.0, 1.1),
        ]);
    let mut director = director_with(config, 12);
    director.start_round();
    director.take_events();

    director.shuffle(12);
    let mut before = director.positions();

    let mut swaps = 0;
    for _ in 0..100_000 {
        if !director.is_shuffling() {
            break;
        }
        director.update(FRAME);

        let mut finished = false;
        for event in director.take_events() {
            if let GameEvent::SwapFinished { first, second } = event {
                let after = director.positions();
                assert_eq!(after[first.index()], before[second.index()]);
                assert_eq!(after[second.index()], before[first.index()]);
                for (i, p) in after.iter().enumerate() {
                    if i != first.index() && i != second.index() {
                        assert_eq!(*p, before[i]);
                    }
                }
                swaps += 1;
                finished = true;
            }
        }
        // The next swap starts from the layout the last one left behind
        if finished {
            before = director.positions();
        }
    }

    assert_eq!(swaps, 12);
}

/// The swap pair is always two different cups.
#[test]
fn test_swap_pairs_are_distinct() {
    let config = ShellGameConfig::default()
        .with_shuffle_count(200)
        .with_shuffle_timing(0.05, 10.0);
    let mut director = director_with(config, 13);
    director.start();

    let events = finish_shuffle(&mut director);
    let pairs: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::SwapStarted { first, second } => Some((*first, *second)),
            _ => None,
        })
        .collect();

    assert_eq!(pairs.len(), 200);
    assert!(pairs.iter().all(|(a, b)| a != b));
    // Every cup takes part sooner or later
    for cup in 0..3 {
        assert!(pairs.iter().any(|(a, b)| a.index() == cup || b.index() == cup));
    }
}

// =============================================================================
// Arc
// =============================================================================

/// Mid-swap the pair is displaced along the arc axis in opposite directions.
#[test]
fn test_hop_displaces_opposite_ways() {
    let config = ShellGameConfig::default()
        .with_shuffle_count(1)
        .with_arc(1.0, Axis::Z);
    let mut director = director_with(config, 14);
    director.start();

    let (first, second) = director
        .take_events()
        .iter()
        .find_map(|e| match e {
            GameEvent::SwapStarted { first, second } => Some((*first, *second)),
            _ => None,
        })
        .unwrap();

    // A few frames in, well before the end of the 0.5s (speed-scaled) swap
    for _ in 0..5 {
        director.update(FRAME);
    }
    let a = director.cup(first).unwrap().position();
    let b = director.cup(second).unwrap().position();
    assert!(a.z > 0.0);
    assert!(b.z < 0.0);
    assert!((a.z + b.z).abs() < 1e-5);
    assert_eq!(a.y, 0.0);

    let untouched = (0..3)
        .map(CupId::new)
        .find(|c| *c != first && *c != second)
        .unwrap();
    assert_eq!(director.cup(untouched).unwrap().position().z, 0.0);
}

/// Hopping on the height axis leaves depth alone.
#[test]
fn test_hop_on_height_axis() {
    let config = ShellGameConfig::default()
        .with_shuffle_count(1)
        .with_arc(0.5, Axis::Y);
    let mut director = director_with(config, 15);
    director.start();

    for _ in 0..5 {
        director.update(FRAME);
    }
    assert!(director.cups().iter().all(|c| c.position().z == 0.0));
    assert!(director.cups().iter().any(|c| c.position().y > 0.0));
}

// =============================================================================
// Re-entrancy and determinism
// =============================================================================

/// A shuffle request mid-shuffle does nothing.
#[test]
fn test_shuffle_while_shuffling_is_noop() {
    let config = ShellGameConfig::default().with_shuffle_count(3);
    let mut director = director_with(config, 16);
    director.start();
    director.update(FRAME);

    assert!(!director.shuffle(50));
    assert!(!director.request_shuffle());
    assert!(director.is_shuffling());

    let events = finish_shuffle(&mut director);
    let started = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShuffleStarted { .. }))
        .count();
    let swaps = events
        .iter()
        .filter(|e| matches!(e, GameEvent::SwapFinished { .. }))
        .count();
    assert_eq!(started, 1);
    assert_eq!(swaps, 3);
}

/// Same seed, same shuffle.
#[test]
fn test_seeded_shuffle_is_reproducible() {
    let run = |seed| {
        let mut director = director_with(ShellGameConfig::default(), seed);
        director.start();
        finish_shuffle(&mut director);
        (director.positions(), director.correct_index())
    };

    assert_eq!(run(99), run(99));
}

/// Forcing the correct cup does not disturb the swap sequence.
#[test]
fn test_forced_correct_cup_keeps_shuffle_stream() {
    let swaps = |force: bool| {
        let mut director = director_with(ShellGameConfig::default(), 17);
        director.start_round();
        if force {
            director.force_correct_index(CupId::new(2));
        }
        director.shuffle(5);
        finish_shuffle(&mut director)
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SwapStarted { .. }))
            .collect::<Vec<_>>()
    };

    assert_eq!(swaps(false), swaps(true));
}
