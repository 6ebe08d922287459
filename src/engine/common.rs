//! Common types for the engine: shot outcomes and the errors raised by placement,
//! shooting and random fleet building.

use core::fmt;

use crate::engine::cell_set::CellSetError;
use crate::engine::coordinate::Coordinate;

/// Result of a shot against a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShotOutcome {
    /// The cell was already hit, missed or revealed; nothing changed.
    AlreadyTargeted,
    /// Shot landed in open water.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot destroyed the last intact cell of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter moves again. Only a miss passes the turn; a spent cell
    /// does not consume the move.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ShotOutcome::AlreadyTargeted => "already targeted",
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sunk => "sunk",
        };
        f.write_str(text)
    }
}

/// Reason a ship could not be placed on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// A footprint cell lies outside the board.
    OutOfBounds { cell: Coordinate },
    /// A footprint cell is occupied by, or touches, a ship already placed.
    Occupied { cell: Coordinate },
    /// Shooting has begun; the fleet is frozen.
    PlacementClosed,
    /// Ships must have a positive length.
    EmptyShip,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds { cell } => {
                write!(f, "Ship placement leaves the board at {}", cell)
            }
            PlacementError::Occupied { cell } => {
                write!(f, "Ship placement collides with another ship at {}", cell)
            }
            PlacementError::PlacementClosed => {
                write!(f, "Ships cannot be placed once shooting has started")
            }
            PlacementError::EmptyShip => write!(f, "Ship length must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}

/// Errors returned when firing at a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the board.
    OutOfBounds { target: Coordinate },
    /// The game already has a winner.
    GameOver,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds { target } => write!(f, "Target {} is off the board", target),
            ShotError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShotError {}

/// Errors returned by random fleet building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The shared attempt budget ran out before the fleet was complete.
    AttemptsExhausted {
        attempts: usize,
        placed: usize,
        fleet: usize,
    },
    /// The fleet entry at `index` has length 0 and can never be placed.
    InvalidFleet { index: usize },
    /// The board itself could not be allocated.
    Grid(CellSetError),
    /// Every full rebuild of the board failed.
    RebuildsExhausted { rebuilds: usize },
}

impl From<CellSetError> for BuildError {
    fn from(err: CellSetError) -> Self {
        BuildError::Grid(err)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::AttemptsExhausted {
                attempts,
                placed,
                fleet,
            } => write!(
                f,
                "Gave up after {} placement attempts with {}/{} ships placed",
                attempts, placed, fleet
            ),
            BuildError::InvalidFleet { index } => {
                write!(f, "Fleet entry {} has zero length", index)
            }
            BuildError::Grid(e) => write!(f, "Grid error: {}", e),
            BuildError::RebuildsExhausted { rebuilds } => {
                write!(f, "Unable to build a board in {} rebuilds", rebuilds)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BuildError {}
