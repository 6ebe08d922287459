use rand::Rng;

use crate::engine::{
    board::{Board, Phase},
    builder::build_random_board,
    common::{BuildError, ShotError, ShotOutcome},
    config::GameConfig,
    coordinate::Coordinate,
};

/// The two participants of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

/// What happened on a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub shooter: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
    /// Side to move after this shot.
    pub next: Side,
}

/// Turn engine holding both boards. The human moves first.
pub struct Game {
    human: Board,
    computer: Board,
    turn: Side,
    shots: usize,
}

impl Game {
    /// Start a game on two placed boards. Boards still in placement are moved to the
    /// shooting phase.
    pub fn new(mut human: Board, mut computer: Board) -> Self {
        for board in [&mut human, &mut computer] {
            if board.phase() == Phase::Placement {
                board.reset_targeting();
            }
        }
        Self {
            human,
            computer,
            turn: Side::Human,
            shots: 0,
        }
    }

    /// Build both boards at random. A board whose build runs out of attempts is
    /// rebuilt from scratch, at most `config.max_rebuilds` times.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Self, BuildError> {
        let human = random_board(rng, config)?;
        let computer = random_board(rng, config)?;
        Ok(Self::new(human, computer))
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }

    /// Number of shots fired so far, including repeats at spent cells.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Fire at `target` on the opponent's board for the side to move.
    ///
    /// The turn passes only on a miss; hits, sinkings and spent cells let the same
    /// side shoot again.
    pub fn fire(&mut self, target: Coordinate) -> Result<TurnReport, ShotError> {
        if self.status() != GameStatus::InProgress {
            return Err(ShotError::GameOver);
        }
        let shooter = self.turn;
        let outcome = self.board_mut(shooter.opponent()).shoot(target)?;
        self.shots += 1;
        if !outcome.grants_extra_turn() {
            self.turn = shooter.opponent();
        }
        log::debug!("{:?} fired at {}: {}", shooter, target, outcome);
        Ok(TurnReport {
            shooter,
            target,
            outcome,
            next: self.turn,
        })
    }

    /// Evaluate the current game status. The computer's fleet is checked first.
    pub fn status(&self) -> GameStatus {
        if self.computer.all_destroyed() {
            GameStatus::Won(Side::Human)
        } else if self.human.all_destroyed() {
            GameStatus::Won(Side::Computer)
        } else {
            GameStatus::InProgress
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }
}

/// Rebuild a random board from an empty grid until one build succeeds.
fn random_board<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Board, BuildError> {
    for rebuild in 0..config.max_rebuilds {
        match build_random_board(rng, config.size, &config.fleet, config.max_attempts) {
            Ok(board) => return Ok(board),
            Err(BuildError::AttemptsExhausted { placed, fleet, .. }) => {
                log::debug!(
                    "rebuild {} failed with {}/{} ships placed",
                    rebuild + 1,
                    placed,
                    fleet
                );
            }
            Err(e) => return Err(e),
        }
    }
    log::warn!(
        "no valid {}x{} board after {} rebuilds",
        config.size,
        config.size,
        config.max_rebuilds
    );
    Err(BuildError::RebuildsExhausted {
        rebuilds: config.max_rebuilds,
    })
}
