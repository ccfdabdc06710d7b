//! Square board storage and line checks
//!
//! The board is stored row-major, so cell `(row, col)` lives at move index
//! `row * n + col`.

use std::fmt;

/// Placeholder used when rendering an empty cell
pub const EMPTY_CELL: char = '.';

/// An N×N grid of cells, each either empty or holding a player symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Board {
    /// Creates an empty board with the given side length
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a zero-sized board
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Converts a move index into `(row, col)`
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Returns the cell at `(row, col)`, or `None` outside the board
    pub fn get(&self, row: usize, col: usize) -> Option<Option<char>> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Returns the cell at a move index, or `None` outside the board
    pub fn cell(&self, index: usize) -> Option<Option<char>> {
        self.cells.get(index).copied()
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns true when no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Clears every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    pub(crate) fn place(&mut self, index: usize, symbol: char) {
        self.cells[index] = Some(symbol);
    }

    /// Returns true if some row, column or diagonal is filled entirely with `symbol`
    ///
    /// Each of the N rows, N columns and the two diagonals is inspected once.
    pub fn has_line(&self, symbol: char) -> bool {
        let n = self.size;
        if n == 0 {
            return false;
        }
        let owned = |row: usize, col: usize| self.cells[row * n + col] == Some(symbol);

        (0..n).any(|row| (0..n).all(|col| owned(row, col)))
            || (0..n).any(|col| (0..n).all(|row| owned(row, col)))
            || (0..n).all(|i| owned(i, i))
            || (0..n).all(|i| owned(i, n - 1 - i))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or(EMPTY_CELL))?;
            }
        }
        Ok(())
    }
}
