//! Board state: ship placement with contour reservation, shot resolution and text
//! rendering.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use crate::engine::cell_set::{CellSet, CellSetError};
use crate::engine::common::{PlacementError, ShotError, ShotOutcome};
use crate::engine::config::MAX_BOARD_SIZE;
use crate::engine::coordinate::Coordinate;
use crate::engine::ship::Ship;

const GLYPH_UNKNOWN: char = '.';
const GLYPH_SHIP: char = 'S';
const GLYPH_HIT: char = 'X';
const GLYPH_MISS: char = 'o';

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Holds the index of the ship in placement order.
    Occupied(usize),
    /// Reserved around a ship during placement so that ships never touch.
    BlockedAdjacent,
    Hit,
    Miss,
}

/// Which lifecycle phase the board is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Placement,
    Shooting,
}

/// Whether rendering reveals ship positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// One player's board: the grid, the placed ships and the shooting bookkeeping.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    /// Occupied plus contour cells; consulted only while placing.
    reserved: CellSet,
    /// Cells already hit, missed or revealed by a sinking.
    targeted: CellSet,
    ships: Vec<Ship>,
    destroyed: usize,
    phase: Phase,
}

impl Board {
    /// Create an empty `size × size` board.
    ///
    /// Panics if `size` exceeds [`MAX_BOARD_SIZE`]; see [`Board::try_new`].
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(e) => panic!("cannot create board: {}", e),
        }
    }

    /// Create an empty `size × size` board, failing with
    /// [`CellSetError::SizeTooLarge`] when `size` exceeds [`MAX_BOARD_SIZE`].
    pub fn try_new(size: usize) -> Result<Self, CellSetError> {
        if size > MAX_BOARD_SIZE {
            return Err(CellSetError::SizeTooLarge { size });
        }
        let reserved = CellSet::try_new(size)?;
        let targeted = reserved.clone();
        Ok(Board {
            size,
            cells: vec![Cell::Empty; size * size],
            reserved,
            targeted,
            ships: Vec::new(),
            destroyed: 0,
            phase: Phase::Placement,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed
    }

    /// Returns `true` once every placed ship is destroyed. A board without ships
    /// counts as lost.
    pub fn all_destroyed(&self) -> bool {
        self.destroyed == self.ships.len()
    }

    /// Cells already hit, missed or revealed.
    pub fn targeted(&self) -> &CellSet {
        &self.targeted
    }

    pub fn is_targeted(&self, cell: Coordinate) -> bool {
        self.targeted.contains(cell)
    }

    pub fn in_board(&self, cell: Coordinate) -> bool {
        self.index(cell).is_some()
    }

    /// State of the cell at `cell`, or `None` off the board.
    pub fn cell(&self, cell: Coordinate) -> Option<Cell> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Place `ship` on the board.
    ///
    /// Every footprint cell must be on the board and outside the cells already
    /// occupied or blocked by earlier ships. On failure the board is left untouched.
    /// On success the 8-neighbour contour of the ship is reserved so that no later
    /// ship can touch it.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if self.phase == Phase::Shooting {
            return Err(PlacementError::PlacementClosed);
        }
        for cell in ship.cells() {
            if !self.in_board(cell) {
                return Err(PlacementError::OutOfBounds { cell });
            }
            if self.reserved.contains(cell) {
                return Err(PlacementError::Occupied { cell });
            }
        }

        let id = self.ships.len();
        for cell in ship.cells() {
            self.set_cell(cell, Cell::Occupied(id));
            self.reserve(cell);
        }
        self.ships.push(ship);

        for cell in self.contour(&ship) {
            if !self.reserved.contains(cell) {
                self.set_cell(cell, Cell::BlockedAdjacent);
                self.reserve(cell);
            }
        }
        log::debug!("placed {:?} as ship #{}", ship, id);
        Ok(())
    }

    /// Leave the placement phase and start shooting with an empty targeted-set.
    ///
    /// Only the first call has an effect; later calls would erase shot history and
    /// are ignored.
    pub fn reset_targeting(&mut self) {
        if self.phase == Phase::Shooting {
            log::warn!("targeting reset requested after shooting began; ignored");
            return;
        }
        self.targeted.clear_all();
        self.phase = Phase::Shooting;
        log::debug!("board ready with {} ships", self.ships.len());
    }

    /// Fire at `target`.
    ///
    /// Returns [`ShotOutcome::AlreadyTargeted`] without changing anything if the cell
    /// was shot or revealed before. Sinking a ship marks its whole contour as missed.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        if !self.in_board(target) {
            return Err(ShotError::OutOfBounds { target });
        }
        self.phase = Phase::Shooting;
        if self.targeted.contains(target) {
            return Ok(ShotOutcome::AlreadyTargeted);
        }

        let Some(id) = self.ships.iter().position(|s| s.is_hit_by(target)) else {
            self.mark_targeted(target, Cell::Miss);
            return Ok(ShotOutcome::Miss);
        };

        self.ships[id].take_hit();
        self.mark_targeted(target, Cell::Hit);
        if !self.ships[id].is_destroyed() {
            return Ok(ShotOutcome::Hit);
        }

        self.destroyed += 1;
        let ship = self.ships[id];
        for cell in self.contour(&ship) {
            if !self.targeted.contains(cell) {
                self.mark_targeted(cell, Cell::Miss);
            }
        }
        log::debug!(
            "ship #{} sunk at {}, {}/{} destroyed",
            id,
            target,
            self.destroyed,
            self.ships.len()
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Render the grid as text with 1-indexed row and column labels.
    ///
    /// With [`Visibility::Hidden`] intact ship cells look like open water.
    pub fn render(&self, visibility: Visibility) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_grid(&mut out, visibility);
        out
    }

    fn write_grid<W: Write>(&self, out: &mut W, visibility: Visibility) -> fmt::Result {
        let width = digits(self.size);
        write!(out, "{:>pad$}|", "", pad = width + 1)?;
        for col in 1..=self.size {
            write!(out, " {:>width$} |", col)?;
        }
        for row in 0..self.size {
            write!(out, "\n{:>width$} |", row + 1)?;
            for col in 0..self.size {
                let glyph = match self.cells[row * self.size + col] {
                    Cell::Occupied(_) if visibility == Visibility::Visible => GLYPH_SHIP,
                    Cell::Hit => GLYPH_HIT,
                    Cell::Miss => GLYPH_MISS,
                    _ => GLYPH_UNKNOWN,
                };
                write!(out, " {:>width$} |", glyph)?;
            }
        }
        Ok(())
    }

    /// In-board cells around the ship's footprint, possibly repeated.
    fn contour(&self, ship: &Ship) -> Vec<Coordinate> {
        ship.cells()
            .flat_map(Coordinate::neighbors)
            .filter(|&c| self.in_board(c))
            .collect()
    }

    fn index(&self, cell: Coordinate) -> Option<usize> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        (x < self.size && y < self.size).then(|| x * self.size + y)
    }

    fn set_cell(&mut self, cell: Coordinate, state: Cell) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = state;
        }
    }

    fn reserve(&mut self, cell: Coordinate) {
        // Callers only pass in-board cells.
        let _ = self.reserved.insert(cell);
    }

    fn mark_targeted(&mut self, cell: Coordinate, state: Cell) {
        self.set_cell(cell, state);
        let _ = self.targeted.insert(cell);
    }
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, Visibility::Visible)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{\n  size: {},\n  phase: {:?},\n  destroyed: {},\n  ships: {:?},\n  reserved: {:?},\n  targeted: {:?}\n}}",
            self.size, self.phase, self.destroyed, self.ships, self.reserved, self.targeted
        )
    }
}
