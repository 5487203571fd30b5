//! N×N occupancy grid

use crate::board::Individual;
use crate::conflict;
use std::fmt;

/// An N×N board of binary occupancy, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty `n`×`n` board
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![0; n * n],
        }
    }

    /// Build a board from a 0/1 matrix.
    ///
    /// Returns `None` unless the matrix is square and every cell is 0 or 1.
    pub fn from_matrix(rows: &[Vec<u8>]) -> Option<Self> {
        let n = rows.len();
        let mut board = Self::new(n);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != n {
                return None;
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => {}
                    1 => board.place(row, col),
                    _ => return None,
                }
            }
        }
        Some(board)
    }

    /// Build a board from `(row, col)` queen coordinates
    pub fn from_queens(n: usize, queens: &[(usize, usize)]) -> Self {
        let mut board = Self::new(n);
        for &(row, col) in queens {
            board.place(row, col);
        }
        board
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.n + col] != 0
    }

    /// Put a queen on `(row, col)`
    pub fn place(&mut self, row: usize, col: usize) {
        self.cells[row * self.n + col] = 1;
    }

    /// Take the queen (if any) off `(row, col)`
    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells[row * self.n + col] = 0;
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Column of the first queen in `row`, if any
    pub fn queen_in_row(&self, row: usize) -> Option<usize> {
        (0..self.n).find(|&col| self.has_queen(row, col))
    }

    /// All queen coordinates in row-major order
    pub fn queens(&self) -> Vec<(usize, usize)> {
        (0..self.n)
            .flat_map(|row| (0..self.n).map(move |col| (row, col)))
            .filter(|&(row, col)| self.has_queen(row, col))
            .collect()
    }

    /// Export as an N×N 0/1 matrix
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.n.max(1))
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Convert to column representation.
    ///
    /// Requires exactly one queen per column; returns `None` otherwise.
    pub fn to_individual(&self) -> Option<Individual> {
        let mut genes = Vec::with_capacity(self.n);
        for col in 0..self.n {
            let mut rows = (0..self.n).filter(|&row| self.has_queen(row, col));
            let row = rows.next()?;
            if rows.next().is_some() {
                return None;
            }
            genes.push(row);
        }
        Some(Individual::new(genes))
    }

    /// True if the board holds N queens and none of them attack each other
    pub fn is_solution(&self) -> bool {
        self.queen_count() == self.n && conflict::count_board_conflicts(self) == 0
    }
}

impl From<&Individual> for Board {
    fn from(individual: &Individual) -> Self {
        let n = individual.size();
        let mut board = Board::new(n);
        for (col, &row) in individual.genes().iter().enumerate() {
            board.place(row, col);
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.n {
            let line: Vec<&str> = (0..self.n)
                .map(|col| if self.has_queen(row, col) { "Q" } else { "." })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
