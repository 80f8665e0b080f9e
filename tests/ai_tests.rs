use broadside::{
    sample_uniform, sample_weighted, AttackOutcome, Axis, Board, Difficulty, ProbabilityMap,
    Targeting, TargetingState, Visibility, BB, BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn mask(cells: &[(usize, usize)]) -> BB {
    BB::from_cells(cells.iter().copied()).unwrap()
}

#[test]
fn test_first_hit_queues_orthogonal_neighbours() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let attacked = mask(&[(4, 4)]);
    ai.observe((4, 4), AttackOutcome::Hit("Cruiser"), &attacked);
    assert_eq!(ai.state(), TargetingState::Hunting);
    assert_eq!(ai.open_hits(), &[(4, 4)]);
    assert_eq!(
        ai.candidates().copied().collect::<Vec<_>>(),
        vec![(3, 4), (4, 5), (5, 4), (4, 3)]
    );

    let mut rng = SmallRng::seed_from_u64(9);
    assert_eq!(ai.decide(&mut rng, &attacked), Some((3, 4)));
}

#[test]
fn test_corner_hit_skips_off_board_and_attacked_neighbours() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let attacked = mask(&[(0, 0), (0, 1)]);
    ai.observe((0, 0), AttackOutcome::Hit("Destroyer"), &attacked);
    assert_eq!(ai.candidates().copied().collect::<Vec<_>>(), vec![(1, 0)]);
}

#[test]
fn test_second_aligned_hit_starts_tracking() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let mut attacked = mask(&[(6, 2)]);
    ai.observe((6, 2), AttackOutcome::Hit("Battleship"), &attacked);
    attacked.insert(6, 3).unwrap();
    ai.observe((6, 3), AttackOutcome::Hit("Battleship"), &attacked);
    assert_eq!(ai.state(), TargetingState::Tracking(Axis::Row));
}

#[test]
fn test_queued_cells_attacked_elsewhere_are_skipped() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let attacked = mask(&[(4, 4)]);
    ai.observe((4, 4), AttackOutcome::Hit("Cruiser"), &attacked);
    let later = mask(&[(4, 4), (3, 4), (4, 5)]);
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(ai.decide(&mut rng, &later), Some((5, 4)));
}

#[test]
fn test_normal_difficulty_ignores_outcomes() {
    let mut ai = Targeting::new(Difficulty::Normal);
    let attacked = mask(&[(2, 2)]);
    ai.observe((2, 2), AttackOutcome::Hit("Carrier"), &attacked);
    assert_eq!(ai.state(), TargetingState::Searching);
    assert!(ai.open_hits().is_empty());
    assert_eq!(ai.candidates().count(), 0);
    ai.observe((7, 7), AttackOutcome::Miss, &attacked);
    assert_eq!(*ai.probability(), ProbabilityMap::new());
}

#[test]
fn test_decide_returns_last_open_cell_then_none() {
    let mut all_but_one = BB::full();
    all_but_one.remove(9, 9).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    for difficulty in [Difficulty::Normal, Difficulty::Hard] {
        let mut ai = Targeting::new(difficulty);
        assert_eq!(ai.decide(&mut rng, &all_but_one), Some((9, 9)));
        assert_eq!(ai.decide(&mut rng, &BB::full()), None);
    }
}

#[test]
fn test_miss_decay() {
    let mut map = ProbabilityMap::new();
    map.decay_miss((0, 0));
    assert_eq!(map.get((0, 0)), 0);
    assert_eq!(map.get((0, 1)), 0);
    assert_eq!(map.get((1, 1)), 0);
    assert_eq!(map.get((2, 2)), 1);
    // repeated decay saturates at zero
    map.decay_miss((0, 0));
    assert_eq!(map.get((0, 0)), 0);
    assert_eq!(map.get((BOARD_SIZE, 0)), 0);
}

#[test]
fn test_sample_weighted_zero_total() {
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(sample_weighted(&mut rng, &BB::new(), |_| 0.0), None);
    let only = sample_weighted(&mut rng, &BB::new(), |c| if c == (7, 3) { 2.0 } else { 0.0 });
    assert_eq!(only, Some((7, 3)));
}

#[test]
fn test_sample_uniform_avoids_attacked() {
    let mut rng = SmallRng::seed_from_u64(11);
    let attacked = !mask(&[(1, 8), (8, 1)]);
    for _ in 0..20 {
        let cell = sample_uniform(&mut rng, &attacked).unwrap();
        assert!(cell == (1, 8) || cell == (8, 1));
    }
}

#[test]
fn test_hard_ai_sinks_a_fleet_without_repeats() {
    let mut rng = SmallRng::seed_from_u64(2024);
    let mut board = Board::new(Visibility::Concealed);
    board.place_randomly(&mut rng);
    let mut ai = Targeting::new(Difficulty::Hard);
    let mut shots = 0;
    while !board.all_ships_sunk() {
        let attacked = board.attacked();
        let (r, c) = ai.decide(&mut rng, &attacked).unwrap();
        assert!(!attacked.contains(r, c));
        let outcome = board.resolve_attack(r, c).unwrap();
        ai.observe((r, c), outcome, &board.attacked());
        shots += 1;
        assert!(shots <= BOARD_SIZE * BOARD_SIZE);
    }
    assert_eq!(ai.state(), TargetingState::Searching);
}

#[test]
fn test_reset_clears_memory() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let attacked = mask(&[(5, 5)]);
    ai.observe((5, 5), AttackOutcome::Hit("Submarine"), &attacked);
    ai.observe((0, 0), AttackOutcome::Miss, &attacked);
    ai.reset();
    assert_eq!(ai.difficulty(), Difficulty::Hard);
    assert_eq!(ai.state(), TargetingState::Searching);
    assert_eq!(ai.candidates().count(), 0);
    assert_eq!(*ai.probability(), ProbabilityMap::new());
}

fn even_share(ai: &mut Targeting, attacked: &BB, seed: u64, draws: usize) -> f64 {
    let mut rng = SmallRng::seed_from_u64(seed);
    let even = (0..draws)
        .map(|_| ai.decide(&mut rng, attacked).unwrap())
        .filter(|&(r, c)| (r + c) % 2 == 0)
        .count();
    even as f64 / draws as f64
}

#[test]
fn test_parity_bonus_while_searching() {
    let mut ai = Targeting::new(Difficulty::Hard);
    // 50 even cells at 1.5 against 50 odd cells at 1: 0.6
    let share = even_share(&mut ai, &BB::new(), 99, 10_000);
    assert!((0.57..0.63).contains(&share), "even share {}", share);
    assert_eq!(ai.state(), TargetingState::Searching);
}

#[test]
fn test_parity_bonus_off_with_open_hit() {
    let mut ai = Targeting::new(Difficulty::Hard);
    // every neighbour already attacked, so nothing gets queued
    let attacked = mask(&[(4, 4), (3, 4), (4, 5), (5, 4), (4, 3)]);
    ai.observe((4, 4), AttackOutcome::Hit("Cruiser"), &attacked);
    assert_eq!(ai.state(), TargetingState::Hunting);
    assert_eq!(ai.candidates().count(), 0);

    // 49 even against 46 odd open cells, all at weight 1
    let share = even_share(&mut ai, &attacked, 99, 10_000);
    assert!((0.48..0.55).contains(&share), "even share {}", share);
}

#[test]
fn test_decide_avoids_decayed_cells() {
    let mut ai = Targeting::new(Difficulty::Hard);
    let attacked = mask(&[(5, 5)]);
    ai.observe((5, 5), AttackOutcome::Miss, &attacked);
    let mut rng = SmallRng::seed_from_u64(4);
    for _ in 0..2_000 {
        let (r, c) = ai.decide(&mut rng, &attacked).unwrap();
        assert!(r.abs_diff(5) > 1 || c.abs_diff(5) > 1, "picked ({}, {})", r, c);
    }
}
