//! Ship definitions and footprint logic.

use core::fmt;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::engine::common::PlacementError;
use crate::engine::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Extends along the `x` axis.
    Horizontal,
    /// Extends along the `y` axis.
    Vertical,
}

impl Orientation {
    /// Unit step taken from one footprint cell to the next.
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

impl Distribution<Orientation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A straight ship: a start cell, an orientation, a fixed length and the number of
/// cells still intact.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    start: Coordinate,
    orientation: Orientation,
    length: usize,
    remaining_health: usize,
}

impl Ship {
    /// Create an undamaged ship. Fails with [`PlacementError::EmptyShip`] if `length`
    /// is zero.
    pub fn new(
        start: Coordinate,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, PlacementError> {
        if length == 0 {
            return Err(PlacementError::EmptyShip);
        }
        Ok(Ship {
            start,
            orientation,
            length,
            remaining_health: length,
        })
    }

    pub fn start(&self) -> Coordinate {
        self.start
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Original length; never changes.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Intact cells left, in `0..=length`.
    pub fn remaining_health(&self) -> usize {
        self.remaining_health
    }

    pub fn is_destroyed(&self) -> bool {
        self.remaining_health == 0
    }

    /// The cells the ship occupies, starting at `start` and stepping along its
    /// orientation.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let start = self.start;
        let (dx, dy) = self.orientation.step();
        (0..self.length).map(move |i| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            start.offset(dx.saturating_mul(i), dy.saturating_mul(i))
        })
    }

    /// Returns `true` if `shot` lands on one of the ship's cells.
    pub fn is_hit_by(&self, shot: Coordinate) -> bool {
        self.cells().any(|c| c == shot)
    }

    /// Remove one point of health. Called by the board when a shot lands.
    pub(crate) fn take_hit(&mut self) {
        self.remaining_health = self.remaining_health.saturating_sub(1);
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, orientation: {:?}, length: {}, health: {} }}",
            self.start, self.orientation, self.length, self.remaining_health,
        )
    }
}
