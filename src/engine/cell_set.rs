//! A runtime-sized bitset over an `N×N` grid.
//!
//! The set is `no_std` friendly. Cells are packed row-major into `u64` words, one bit
//! per cell. It backs both the placement reservation set and the targeted-set of a
//! [`Board`](crate::Board).

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::engine::coordinate::Coordinate;

const WORD_BITS: usize = u64::BITS as usize;

/// Errors returned by cell set operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellSetError {
    /// The requested grid is too large to address or to allocate.
    SizeTooLarge { size: usize },
    /// Coordinate is outside `[0, size) × [0, size)`.
    IndexOutOfBounds { x: i32, y: i32, size: usize },
}

impl fmt::Display for CellSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellSetError::SizeTooLarge { size } => {
                write!(f, "SizeTooLarge: a {size}x{size} grid is too large")
            }
            CellSetError::IndexOutOfBounds { x, y, size } => {
                write!(f, "IndexOutOfBounds: ({x}, {y}) on a {size}x{size} grid")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CellSetError {}

/// Set of cells on a square grid of side `size`.
#[derive(Clone, PartialEq, Eq)]
pub struct CellSet {
    size: usize,
    words: Vec<u64>,
}

impl CellSet {
    /// Fallible constructor: returns `Err(SizeTooLarge)` if the grid is not addressable.
    pub fn try_new(size: usize) -> Result<Self, CellSetError> {
        let cells = size
            .checked_mul(size)
            .filter(|_| size <= i32::MAX as usize)
            .ok_or(CellSetError::SizeTooLarge { size })?;
        Ok(CellSet {
            size,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Creates a set from an iterator over coordinates.
    pub fn from_cells<I>(size: usize, cells: I) -> Result<Self, CellSetError>
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut set = Self::try_new(size)?;
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// Returns the number of cells in the set.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no cells are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Membership test that treats off-grid coordinates as absent.
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.get(cell).unwrap_or(false)
    }

    /// Gets the bit for `cell`.
    pub fn get(&self, cell: Coordinate) -> Result<bool, CellSetError> {
        let idx = self.index(cell)?;
        Ok(self.words[idx / WORD_BITS] >> (idx % WORD_BITS) & 1 == 1)
    }

    /// Adds `cell` to the set. Returns `true` if it was not already present.
    pub fn insert(&mut self, cell: Coordinate) -> Result<bool, CellSetError> {
        let idx = self.index(cell)?;
        let word = &mut self.words[idx / WORD_BITS];
        let bit = 1u64 << (idx % WORD_BITS);
        let fresh = *word & bit == 0;
        *word |= bit;
        Ok(fresh)
    }

    /// Removes `cell` from the set. Returns `true` if it was present.
    pub fn remove(&mut self, cell: Coordinate) -> Result<bool, CellSetError> {
        let idx = self.index(cell)?;
        let word = &mut self.words[idx / WORD_BITS];
        let bit = 1u64 << (idx % WORD_BITS);
        let present = *word & bit != 0;
        *word &= !bit;
        Ok(present)
    }

    /// Clears all cells.
    #[inline]
    pub fn clear_all(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Iterator over the set cells in row-major order.
    #[inline]
    pub fn iter(&self) -> Cells<'_> {
        Cells { set: self, idx: 0 }
    }

    #[inline]
    fn index(&self, cell: Coordinate) -> Result<usize, CellSetError> {
        let out_of_bounds = CellSetError::IndexOutOfBounds {
            x: cell.x,
            y: cell.y,
            size: self.size,
        };
        let x = usize::try_from(cell.x).map_err(|_| out_of_bounds)?;
        let y = usize::try_from(cell.y).map_err(|_| out_of_bounds)?;
        if x >= self.size || y >= self.size {
            return Err(out_of_bounds);
        }
        Ok(x * self.size + y)
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellSet<{}>:", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.size {
            for y in 0..self.size {
                let bit = if self.contains(Coordinate::new(x as i32, y as i32)) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if x + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells of a [`CellSet`].
#[derive(Clone, Copy)]
pub struct Cells<'a> {
    set: &'a CellSet,
    idx: usize,
}

impl Iterator for Cells<'_> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.set.size * self.set.size;
        while self.idx < total {
            let idx = self.idx;
            self.idx += 1;
            if self.set.words[idx / WORD_BITS] >> (idx % WORD_BITS) & 1 == 1 {
                let size = self.set.size;
                return Some(Coordinate::new((idx / size) as i32, (idx % size) as i32));
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = Coordinate;
    type IntoIter = Cells<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
