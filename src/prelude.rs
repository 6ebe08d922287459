//! Commonly used types and utilities for ease of import.

pub use crate::{
    build_random_board, Board, Coordinate, Game, GameConfig, GameStatus, Orientation, Player,
    RandomAi, Ship, ShotOutcome, Side, Visibility,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer, Session};
