use crate::engine::{Board, Coordinate};
use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;

/// Computer player that fires at uniformly random cells, spent ones included.
#[derive(Debug, Default)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomAi {
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        let bound = i32::try_from(enemy.size())
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| anyhow::anyhow!("cannot target a {0}x{0} board", enemy.size()))?;
        Ok(Coordinate::new(
            rng.random_range(0..bound),
            rng.random_range(0..bound),
        ))
    }
}
