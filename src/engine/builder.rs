//! Random fleet placement.

use rand::Rng;

use crate::engine::board::Board;
use crate::engine::common::{BuildError, PlacementError};
use crate::engine::coordinate::Coordinate;
use crate::engine::ship::{Orientation, Ship};

/// Place every ship of `fleet` at random on a fresh `size × size` board.
///
/// Ships are placed in fleet order. Each candidate gets a uniformly random start cell
/// and orientation; rejected candidates are simply redrawn. One attempt counter is
/// shared by the whole fleet, so ships late in the fleet inherit the failures of the
/// earlier ones. Once more than `max_attempts` candidates have been drawn the build
/// is abandoned with [`BuildError::AttemptsExhausted`]; rebuilding from scratch is
/// left to the caller.
///
/// The returned board is already in the shooting phase.
pub fn build_random_board<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    fleet: &[usize],
    max_attempts: usize,
) -> Result<Board, BuildError> {
    if let Some(index) = fleet.iter().position(|&len| len == 0) {
        return Err(BuildError::InvalidFleet { index });
    }
    let mut board = Board::try_new(size)?;
    let mut attempts = 0usize;

    for (placed, &length) in fleet.iter().enumerate() {
        loop {
            attempts += 1;
            if attempts > max_attempts {
                log::debug!(
                    "random build abandoned after {} attempts ({}/{} ships placed)",
                    max_attempts,
                    placed,
                    fleet.len()
                );
                return Err(BuildError::AttemptsExhausted {
                    attempts: max_attempts,
                    placed,
                    fleet: fleet.len(),
                });
            }
            let ship = random_ship(rng, size, length)
                .map_err(|_| BuildError::InvalidFleet { index: placed })?;
            if board.place_ship(ship).is_ok() {
                break;
            }
        }
    }

    board.reset_targeting();
    log::info!(
        "built {}x{} board with {} ships in {} attempts",
        size,
        size,
        fleet.len(),
        attempts
    );
    Ok(board)
}

fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    length: usize,
) -> Result<Ship, PlacementError> {
    // `Board::try_new` already bounded `size` by `i32::MAX`.
    let bound = i32::try_from(size).unwrap_or(i32::MAX).max(1);
    let start = Coordinate::new(rng.random_range(0..bound), rng.random_range(0..bound));
    let orientation: Orientation = rng.random();
    Ship::new(start, orientation, length)
}
