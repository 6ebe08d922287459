#![cfg(feature = "std")]

use std::fmt;
use std::io::{BufRead, Write};

use crate::engine::{Board, Coordinate};
use rand::rngs::SmallRng;

use super::Player;

/// Why a line of input is not a valid move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A move needs exactly two numbers.
    WrongTokenCount(usize),
    NotANumber(String),
    /// Value outside `1..=size`.
    OutOfRange { value: u64, size: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(_) => {
                write!(f, "Please enter 2 numbers: the row and the column of your move.")
            }
            InputError::NotANumber(token) => {
                write!(f, "'{}' is not a number. Please enter numbers.", token)
            }
            InputError::OutOfRange { size, .. } => {
                write!(f, "Please enter numbers in the range 1 to {}.", size)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a move typed as `"<row> <column>"`, 1-indexed, into a 0-indexed
/// [`Coordinate`] on a `size × size` board.
pub fn parse_move(input: &str, size: usize) -> Result<Coordinate, InputError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(InputError::WrongTokenCount(tokens.len()));
    }
    let mut values = [0i32; 2];
    for (slot, token) in values.iter_mut().zip(&tokens) {
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(InputError::NotANumber(token.to_string()));
        }
        let value: u64 = token
            .parse()
            .map_err(|_| InputError::NotANumber(token.to_string()))?;
        if value == 0 || value > size as u64 {
            return Err(InputError::OutOfRange { value, size });
        }
        *slot = (value - 1) as i32;
    }
    Ok(Coordinate::new(values[0], values[1]))
}

/// Human player reading moves from `input` and writing prompts and feedback to
/// `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Consume the player and return the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, message: fmt::Arguments<'_>) {
        // Feedback is best-effort; a closed terminal surfaces on the next read.
        let _ = self.output.write_fmt(message);
        let _ = self.output.write_all(b"\n");
    }
}

impl CliPlayer<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Player bound to the process's terminal.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, _rng: &mut SmallRng, enemy: &Board) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Enter your move (row column): ")?;
            self.output.flush()?;
            self.line.clear();
            if self.input.read_line(&mut self.line)? == 0 {
                anyhow::bail!("input closed before a move was entered");
            }
            match parse_move(&self.line, enemy.size()) {
                Ok(target) => return Ok(target),
                Err(e) => {
                    log::debug!("rejected move {:?}: {:?}", self.line.trim(), e);
                    self.say(format_args!("{}", e));
                }
            }
        }
    }
}
