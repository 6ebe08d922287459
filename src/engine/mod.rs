//! Core battleship engine (no_std compatible)
//!
//! This module contains the pure game logic: coordinates, ships, boards with
//! contour-reserving placement and shot resolution, random fleet building and the
//! turn engine. It only needs `alloc`, `rand` and `log`, so it builds without the
//! `std` feature.

pub mod board;
pub mod builder;
pub mod cell_set;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod game;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, Cell, Phase, Visibility};
pub use builder::build_random_board;
pub use cell_set::{CellSet, CellSetError, Cells};
pub use common::{BuildError, PlacementError, ShotError, ShotOutcome};
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{Game, GameStatus, Side, TurnReport};
pub use ship::{Orientation, Ship};
