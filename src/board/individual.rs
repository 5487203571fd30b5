//! Column representation used by the genetic solver

use crate::conflict;
use rand::Rng;
use std::fmt;

/// A candidate board: `genes[col]` is the row of the queen in column `col`.
///
/// Any row value in `[0, n)` is legal. Collisions are scored, not forbidden.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Individual {
    genes: Vec<usize>,
}

impl Individual {
    pub fn new(genes: Vec<usize>) -> Self {
        Self { genes }
    }

    /// Draw `n` genes independently and uniformly from `[0, n)`
    pub fn random<R: Rng>(rng: &mut R, n: usize) -> Self {
        Self {
            genes: (0..n).map(|_| rng.random_range(0..n)).collect(),
        }
    }

    pub fn size(&self) -> usize {
        self.genes.len()
    }

    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [usize] {
        &mut self.genes
    }

    /// Number of attacking pairs
    pub fn conflicts(&self) -> usize {
        conflict::count_conflicts(&self.genes)
    }

    /// Negated conflict count; 0 means a valid placement
    pub fn fitness(&self) -> i64 {
        conflict::fitness(&self.genes)
    }

    pub fn is_solution(&self) -> bool {
        self.conflicts() == 0
    }

    /// Genes in reverse column order (the board mirrored left to right)
    pub fn reversed(&self) -> Self {
        Self {
            genes: self.genes.iter().rev().copied().collect(),
        }
    }
}

impl From<Vec<usize>> for Individual {
    fn from(genes: Vec<usize>) -> Self {
        Self::new(genes)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.genes)
    }
}
