//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - RandomAi: picks targets uniformly at random
//! - CliPlayer: reads moves from a line-oriented text stream

use crate::engine::{Board, Coordinate, TurnReport};
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets on the opponent's board
/// - Handling feedback from shots
pub trait Player {
    /// Choose the next target. `enemy` is the opponent's board; implementations must
    /// only consult what a shooter could know (its size and the targeted cells).
    fn select_target(&mut self, rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _report: &TurnReport) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _report: &TurnReport) {}
}

pub mod ai;
pub use ai::RandomAi;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{parse_move, CliPlayer, InputError};
