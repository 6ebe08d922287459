use alloc::vec::Vec;

/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Largest side length a board may have.
pub const MAX_BOARD_SIZE: usize = 100;

/// Ship lengths of one player's fleet, in placement order: one three-cell ship, two
/// two-cell ships and four single-cell ships.
pub const STANDARD_FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Total number of ship cells in [`STANDARD_FLEET`].
pub const TOTAL_SHIP_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement attempts allowed for a whole fleet before a build is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Full board rebuilds tried before giving up on a configuration.
pub const MAX_BOARD_REBUILDS: usize = 100;

/// Parameters for setting up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_attempts: usize,
    pub max_rebuilds: usize,
}

impl GameConfig {
    /// Number of ship cells each player has to defend.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_rebuilds: MAX_BOARD_REBUILDS,
        }
    }
}
