//! A square N×N cell container with the board size chosen at runtime.
//!
//! Cells are stored row-major in a single `Vec`. Every strategy that needs
//! positional memory keeps its own `Grid`, and the density estimator writes
//! its scores into one as well.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::StrategyError;

/// A `(row, col)` address into the grid, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checkerboard color of the cell: `true` when `row + col` is even.
    pub fn is_even_parity(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Column letters followed by the 1-based row, e.g. `A1` for `(0, 0)`.
    /// Columns past `Z` continue as `AA`, `AB`, ...
    pub fn label(&self) -> Label {
        Label(*self)
    }

    /// Parse a label such as `C7` or `AB12` back into a coordinate.
    pub fn parse_label(input: &str) -> Option<Self> {
        let input = input.trim();
        let split = input
            .find(|ch: char| !ch.is_ascii_alphabetic())
            .unwrap_or(input.len());
        let (letters, digits) = input.split_at(split);
        if letters.is_empty() {
            return None;
        }
        let mut col: usize = 0;
        for ch in letters.bytes() {
            let digit = (ch.to_ascii_uppercase() - b'A') as usize + 1;
            col = col.checked_mul(26)?.checked_add(digit)?;
        }
        let row: usize = digits.parse().ok()?;
        if row == 0 {
            return None;
        }
        Some(Self::new(row - 1, col - 1))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Display adapter returned by [`Coordinate::label`].
pub struct Label(Coordinate);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ColumnLabel(self.0.col), self.0.row + 1)
    }
}

/// Spreadsheet-style column name: `A`..`Z`, then `AA`, `AB`, ...
///
/// Honors width and alignment flags, so it can head padded columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLabel(pub usize);

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 14 base-26 digits cover usize::MAX
        let mut buf = [0u8; 16];
        let mut pos = buf.len();
        let mut n = self.0;
        loop {
            pos -= 1;
            buf[pos] = b'A' + (n % 26) as u8;
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        f.pad(core::str::from_utf8(&buf[pos..]).map_err(|_| fmt::Error)?)
    }
}

/// A strategy's private view of one cell of the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    /// Never fired at.
    #[default]
    Unvisited,
    /// Fired at, outcome not reported yet.
    Pending,
    /// Confirmed hit on a ship that is still afloat.
    Hit,
    /// Confirmed miss, or a cell of a ship already sunk.
    MissOrSunk,
}

impl CellStatus {
    pub fn is_unvisited(self) -> bool {
        self == CellStatus::Unvisited
    }

    /// Single-character rendering used by `Display` and the CLI.
    pub fn glyph(self) -> char {
        match self {
            CellStatus::Unvisited => '.',
            CellStatus::Pending => '?',
            CellStatus::Hit => 'X',
            CellStatus::MissOrSunk => 'o',
        }
    }
}

/// Row-major N×N container.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `size × size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: T) -> Self {
        Grid {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `coord` lies inside `[0, N)²`.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    #[inline]
    pub fn check_bounds(&self, coord: Coordinate) -> Result<(), StrategyError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(StrategyError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: self.size,
            })
        }
    }

    pub fn get(&self, coord: Coordinate) -> Result<&T, StrategyError> {
        self.check_bounds(coord)?;
        Ok(&self.cells[coord.row * self.size + coord.col])
    }

    pub fn get_mut(&mut self, coord: Coordinate) -> Result<&mut T, StrategyError> {
        self.check_bounds(coord)?;
        let idx = coord.row * self.size + coord.col;
        Ok(&mut self.cells[idx])
    }

    pub fn set(&mut self, coord: Coordinate, value: T) -> Result<(), StrategyError> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        (0..size * size).map(move |idx| Coordinate::new(idx / size, idx % size))
    }

    /// Coordinates paired with their cell values, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// In-bounds axis neighbors of `coord`, in the order up, down, left, right.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> {
        let size = self.size;
        let Coordinate { row, col } = coord;
        let up = (row > 0).then(|| Coordinate::new(row - 1, col));
        let down = (row + 1 < size).then(|| Coordinate::new(row + 1, col));
        let left = (col > 0).then(|| Coordinate::new(row, col - 1));
        let right = (col + 1 < size).then(|| Coordinate::new(row, col + 1));
        [up, down, left, right].into_iter().flatten()
    }
}

impl<T: Copy> Grid<T> {
    /// Copy of the value at `coord`; out-of-range reads yield `None`.
    #[inline]
    pub fn at(&self, coord: Coordinate) -> Option<T> {
        self.get(coord).ok().copied()
    }
}

impl fmt::Debug for Grid<CellStatus> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<CellStatus, {}>:", self.size)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Grid<CellStatus> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{} ", self.cells[r * self.size + c].glyph())?;
            }
            if r + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid<u64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<u64, {}>:", self.size)?;
        for r in 0..self.size {
            for c in 0..self.size {
                write!(f, "{:4} ", self.cells[r * self.size + c])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
