// Targeting logic for the automated opponent.
//
// Normal difficulty fires uniformly at random. Hard difficulty runs a
// hunt-target-destroy state machine: follow up every hit on its orthogonal
// neighbours, extend along the axis once two hits line up, and otherwise
// sample from a decaying probability map.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use log::debug;
use rand::Rng;

use super::common::{AttackOutcome, Coord};
use super::config::{BB, BOARD_SIZE, MISS_DECAY, PARITY_BONUS};

const GRID_SIZE: usize = BOARD_SIZE;

/// How hard the automated opponent tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Uniform random fire.
    #[default]
    Normal,
    /// Hunt, track and destroy with probability weighting.
    Hard,
}

/// Line along which two or more open hits are aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Hits share a row; extend left and right.
    Row,
    /// Hits share a column; extend up and down.
    Column,
}

/// Where the hard AI is in its hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingState {
    /// No open hits; sample the probability map.
    Searching,
    /// At least one open hit, direction unknown; probe neighbours.
    Hunting,
    /// Two or more open hits aligned on the given axis.
    Tracking(Axis),
}

/// Per-cell integer weights used while searching. Starts uniform at 1 and
/// only ever decays, never below 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityMap {
    weights: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl ProbabilityMap {
    pub fn new() -> Self {
        Self {
            weights: [[1; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Weight at `(row, col)`; 0 outside the board.
    pub fn get(&self, (row, col): Coord) -> u32 {
        if row < GRID_SIZE && col < GRID_SIZE {
            self.weights[row][col]
        } else {
            0
        }
    }

    pub fn weights(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.weights
    }

    /// Penalise a miss: the cell loses `MISS_DECAY`, its eight neighbours
    /// lose half of that.
    pub fn decay_miss(&mut self, (row, col): Coord) {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return;
        }
        for (r, c) in ring(row, col) {
            self.weights[r][c] = self.weights[r][c].saturating_sub(MISS_DECAY / 2);
        }
        self.weights[row][col] = self.weights[row][col].saturating_sub(MISS_DECAY);
    }
}

impl Default for ProbabilityMap {
    fn default() -> Self {
        Self::new()
    }
}

/// The in-bounds cells among the eight surrounding `(row, col)`.
fn ring(row: usize, col: usize) -> impl Iterator<Item = Coord> {
    (-1i32..=1)
        .flat_map(|dr| (-1i32..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| (dr, dc) != (0, 0))
        .filter_map(move |(dr, dc)| step((row, col), dr, dc))
}

/// The in-bounds orthogonal neighbours, in up/right/down/left order.
fn orthogonal(coord: Coord) -> impl Iterator<Item = Coord> {
    [(-1, 0), (0, 1), (1, 0), (0, -1)]
        .into_iter()
        .filter_map(move |(dr, dc)| step(coord, dr, dc))
}

fn step((row, col): Coord, dr: i32, dc: i32) -> Option<Coord> {
    let r = row.checked_add_signed(dr as isize)?;
    let c = col.checked_add_signed(dc as isize)?;
    (r < GRID_SIZE && c < GRID_SIZE).then_some((r, c))
}

fn manhattan(a: Coord, b: Coord) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Targeting memory and decision function for the automated opponent.
#[derive(Debug, Clone)]
pub struct Targeting {
    difficulty: Difficulty,
    state: TargetingState,
    hits: Vec<Coord>,
    candidates: VecDeque<Coord>,
    probability: ProbabilityMap,
}

impl Targeting {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            state: TargetingState::Searching,
            hits: Vec::new(),
            candidates: VecDeque::new(),
            probability: ProbabilityMap::new(),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> TargetingState {
        self.state
    }

    /// Hits not yet resolved into a sunk ship, in the order they landed.
    pub fn open_hits(&self) -> &[Coord] {
        &self.hits
    }

    /// Queued follow-up targets, front first.
    pub fn candidates(&self) -> impl Iterator<Item = &Coord> {
        self.candidates.iter()
    }

    pub fn probability(&self) -> &ProbabilityMap {
        &self.probability
    }

    /// Forget everything; called at the start of each match.
    pub fn reset(&mut self) {
        *self = Self::new(self.difficulty);
    }

    /// Choose the next cell to fire at. `attacked` holds every cell already
    /// resolved on the opponent board. Returns `None` only when no cell is
    /// left to attack.
    pub fn decide<R: Rng + ?Sized>(&mut self, rng: &mut R, attacked: &BB) -> Option<Coord> {
        if self.difficulty == Difficulty::Normal {
            return sample_uniform(rng, attacked);
        }
        if let Some(target) = self.pop_candidate(attacked) {
            debug!("{:?}: following up at {:?}", self.state, target);
            return Some(target);
        }
        match self.state {
            TargetingState::Searching => self.sample_probability(rng, attacked),
            TargetingState::Hunting | TargetingState::Tracking(_) => {
                if let Some(axis) = self.infer_direction(attacked) {
                    self.state = TargetingState::Tracking(axis);
                    if let Some(target) = self.pop_candidate(attacked) {
                        debug!("tracking along {:?}: {:?}", axis, target);
                        return Some(target);
                    }
                }
                self.sample_probability(rng, attacked)
            }
        }
    }

    /// Update memory with the outcome of the shot at `coord`. `attacked`
    /// must already include `coord`.
    pub fn observe(&mut self, coord: Coord, outcome: AttackOutcome, attacked: &BB) {
        if self.difficulty == Difficulty::Normal {
            return;
        }
        match outcome {
            AttackOutcome::Miss => self.probability.decay_miss(coord),
            AttackOutcome::Hit(_) | AttackOutcome::Sunk(_) => {
                self.hits.push(coord);
                for next in orthogonal(coord) {
                    if !attacked.contains(next.0, next.1) && !self.candidates.contains(&next) {
                        self.candidates.push_back(next);
                    }
                }
                if outcome.is_sunk() {
                    self.clear_sunk_ship();
                }
            }
        }
        self.state = classify(&self.hits);
    }

    /// Drop the open hits and any queued target touching them.
    fn clear_sunk_ship(&mut self) {
        let cleared = core::mem::take(&mut self.hits);
        self.candidates
            .retain(|&target| cleared.iter().all(|&hit| manhattan(target, hit) > 1));
        debug!(
            "ship sunk; cleared {} hit(s), {} candidate(s) left",
            cleared.len(),
            self.candidates.len()
        );
    }

    fn pop_candidate(&mut self, attacked: &BB) -> Option<Coord> {
        while let Some(target) = self.candidates.pop_front() {
            if !attacked.contains(target.0, target.1) {
                return Some(target);
            }
        }
        None
    }

    /// Queue the cells just past both ends of the first line holding two or
    /// more open hits. Returns the axis if anything was queued.
    fn infer_direction(&mut self, attacked: &BB) -> Option<Axis> {
        if self.hits.len() < 2 {
            return None;
        }
        for axis in [Axis::Row, Axis::Column] {
            let (line_of, along): (fn(Coord) -> usize, fn(Coord) -> usize) = match axis {
                Axis::Row => (|c: Coord| c.0, |c: Coord| c.1),
                Axis::Column => (|c: Coord| c.1, |c: Coord| c.0),
            };
            let Some(line) = self
                .hits
                .iter()
                .map(|&h| line_of(h))
                .find(|&l| self.hits.iter().filter(|&&h| line_of(h) == l).count() >= 2)
            else {
                continue;
            };
            let on_line = self.hits.iter().filter(|&&h| line_of(h) == line);
            let lo = on_line.clone().map(|&h| along(h)).min().unwrap_or(0);
            let hi = on_line.map(|&h| along(h)).max().unwrap_or(0);

            let mut ends = Vec::with_capacity(2);
            if lo > 0 {
                ends.push(lo - 1);
            }
            if hi + 1 < GRID_SIZE {
                ends.push(hi + 1);
            }
            let mut queued = false;
            for end in ends {
                let target = match axis {
                    Axis::Row => (line, end),
                    Axis::Column => (end, line),
                };
                if !attacked.contains(target.0, target.1) && !self.candidates.contains(&target) {
                    self.candidates.push_front(target);
                    queued = true;
                }
            }
            if queued {
                return Some(axis);
            }
        }
        None
    }

    fn sample_probability<R: Rng + ?Sized>(&self, rng: &mut R, attacked: &BB) -> Option<Coord> {
        let parity = self.hits.is_empty();
        let weight = |(r, c): Coord| {
            let base = self.probability.get((r, c)) as f64;
            if parity && (r + c) % 2 == 0 {
                base * PARITY_BONUS
            } else {
                base
            }
        };
        sample_weighted(rng, attacked, weight).or_else(|| sample_uniform(rng, attacked))
    }
}

/// Derive the hunt state from the open hits.
fn classify(hits: &[Coord]) -> TargetingState {
    match hits {
        [] => TargetingState::Searching,
        [_] => TargetingState::Hunting,
        [first, rest @ ..] => {
            if rest.iter().all(|h| h.0 == first.0) {
                TargetingState::Tracking(Axis::Row)
            } else if rest.iter().all(|h| h.1 == first.1) {
                TargetingState::Tracking(Axis::Column)
            } else {
                TargetingState::Hunting
            }
        }
    }
}

/// Pick uniformly among cells not in `attacked`.
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, attacked: &BB) -> Option<Coord> {
    let open = !*attacked;
    let count = open.len();
    if count == 0 {
        return None;
    }
    open.iter().nth(rng.random_range(0..count))
}

/// Pick among cells not in `attacked` with probability proportional to
/// `weight`. Returns `None` if the total weight is zero.
pub fn sample_weighted<R, F>(rng: &mut R, attacked: &BB, weight: F) -> Option<Coord>
where
    R: Rng + ?Sized,
    F: Fn(Coord) -> f64,
{
    let open = !*attacked;
    let total: f64 = open.iter().map(&weight).sum();
    if total <= 0.0 {
        return None;
    }
    let threshold: f64 = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last = None;
    for cell in open.iter() {
        let w = weight(cell);
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last = Some(cell);
        if threshold < cumulative {
            return Some(cell);
        }
    }
    // Float rounding can leave the threshold just past the final sum.
    last
}
