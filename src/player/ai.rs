use crate::core::{AttackOutcome, Coord, Difficulty, Targeting, BB};
use rand::rngs::SmallRng;

use super::Attacker;

/// Automated attacker driven by [`Targeting`].
#[derive(Debug, Clone)]
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            targeting: Targeting::new(difficulty),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.targeting.difficulty()
    }

    /// Read-only view of the targeting memory.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }
}

impl Attacker for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, attacked: &BB) -> Option<Coord> {
        self.targeting.decide(rng, attacked)
    }

    fn handle_outcome(&mut self, coord: Coord, outcome: AttackOutcome, attacked: &BB) {
        self.targeting.observe(coord, outcome, attacked);
    }

    fn reset(&mut self) {
        self.targeting.reset();
    }
}
