#![cfg(feature = "std")]

//! Text turn loop: alternates the two players over a [`Game`] and narrates every
//! shot to an output stream.

use std::io::Write;

use rand::rngs::SmallRng;

use crate::engine::{Game, GameStatus, ShotError, ShotOutcome, Side, Visibility};
use crate::player::Player;

const SEPARATOR: &str = "--------------------";

/// A game in progress together with the players driving both sides.
pub struct Session {
    game: Game,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
}

impl Session {
    pub fn new(game: Game, human: Box<dyn Player>, computer: Box<dyn Player>) -> Self {
        Self {
            game,
            human,
            computer,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Play until one fleet is destroyed and return the winning side.
    pub fn run<W: Write>(&mut self, rng: &mut SmallRng, out: &mut W) -> anyhow::Result<Side> {
        loop {
            if let GameStatus::Won(winner) = self.game.status() {
                writeln!(out, "{}", SEPARATOR)?;
                match winner {
                    Side::Human => writeln!(out, "Congratulations, you won!")?,
                    Side::Computer => {
                        writeln!(out, "The computer won. Don't give up, try again!")?
                    }
                }
                log::info!("{:?} won after {} shots", winner, self.game.shots());
                return Ok(winner);
            }

            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "Your board:")?;
            writeln!(out, "{}", self.game.board(Side::Human).render(Visibility::Visible))?;
            writeln!(out, "Computer's board:")?;
            writeln!(out, "{}", self.game.board(Side::Computer).render(Visibility::Hidden))?;
            writeln!(out, "{}", SEPARATOR)?;

            let shooter = self.game.turn();
            let (player, opponent) = match shooter {
                Side::Human => (&mut self.human, &mut self.computer),
                Side::Computer => (&mut self.computer, &mut self.human),
            };
            let enemy = self.game.board(shooter.opponent());
            let target = match shooter {
                Side::Human => {
                    writeln!(out, "Your move.")?;
                    out.flush()?;
                    player.select_target(rng, enemy)?
                }
                Side::Computer => {
                    writeln!(out, "Computer's move.")?;
                    let target = player.select_target(rng, enemy)?;
                    writeln!(out, "Computer fires at: {} {}", target.x + 1, target.y + 1)?;
                    target
                }
            };

            let report = match self.game.fire(target) {
                Ok(report) => report,
                Err(ShotError::OutOfBounds { .. }) => {
                    writeln!(out, "That cell is off the board. Choose another one.")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            player.handle_shot_result(&report);
            opponent.handle_opponent_shot(&report);

            let message = match report.outcome {
                ShotOutcome::AlreadyTargeted => {
                    "That cell has already been targeted. Choose another one."
                }
                ShotOutcome::Miss => "Miss!",
                ShotOutcome::Hit => "Hit! One more move.",
                ShotOutcome::Sunk => "Ship destroyed! One more move.",
            };
            writeln!(out, "{}", message)?;
        }
    }
}
