//! Attack relationships between queens
//!
//! Both solvers share these definitions: the best-first solver filters every
//! placement through [`is_safe`], the genetic solver scores individuals with
//! [`count_conflicts`].

use crate::board::Board;

/// Check whether a queen may go on `(row, col)`.
///
/// Only rows `0..row` are inspected, matching the row-by-row placement order
/// of the best-first solver.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    let n = board.size();
    for r in 0..row {
        let d = row - r;
        if board.has_queen(r, col) {
            return false;
        }
        if col >= d && board.has_queen(r, col - d) {
            return false;
        }
        if col + d < n && board.has_queen(r, col + d) {
            return false;
        }
    }
    true
}

/// Do two queens at `(r1, c1)` and `(r2, c2)` attack each other?
pub fn attacks(r1: usize, c1: usize, r2: usize, c2: usize) -> bool {
    r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2)
}

/// Count attacking pairs in column representation.
///
/// `genes[i]` is the row of the queen in column `i`. Every unordered pair
/// `(i, j)` sharing a row or a diagonal is counted exactly once.
pub fn count_conflicts(genes: &[usize]) -> usize {
    let mut conflicts = 0;
    for i in 0..genes.len() {
        for j in (i + 1)..genes.len() {
            if genes[i] == genes[j] || genes[i].abs_diff(genes[j]) == j - i {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Fitness of an individual: the negated conflict count
pub fn fitness(genes: &[usize]) -> i64 {
    -(count_conflicts(genes) as i64)
}

/// Count attacking pairs among all queens on a grid board
pub fn count_board_conflicts(board: &Board) -> usize {
    let queens = board.queens();
    let mut conflicts = 0;
    for (i, &(r1, c1)) in queens.iter().enumerate() {
        for &(r2, c2) in &queens[i + 1..] {
            if attacks(r1, c1, r2, c2) {
                conflicts += 1;
            }
        }
    }
    conflicts
}

/// Columns of `row` that are attacked by queens in rows `0..row`
pub fn attacked_columns(board: &Board, row: usize) -> usize {
    (0..board.size())
        .filter(|&col| !is_safe(board, row, col))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_safe_empty_board() {
        let board = Board::new(4);
        for col in 0..4 {
            assert!(is_safe(&board, 0, col));
        }
    }

    #[test]
    fn test_is_safe_column_and_diagonals() {
        let board = Board::from_queens(4, &[(0, 1)]);
        assert!(!is_safe(&board, 1, 0)); // anti-diagonal
        assert!(!is_safe(&board, 1, 1)); // column
        assert!(!is_safe(&board, 1, 2)); // diagonal
        assert!(is_safe(&board, 1, 3));
        assert!(!is_safe(&board, 3, 1));
        assert!(is_safe(&board, 2, 0));
    }

    #[test]
    fn test_is_safe_ignores_rows_below() {
        let board = Board::from_queens(4, &[(3, 0)]);
        assert!(is_safe(&board, 1, 0));
    }

    #[test]
    fn test_count_conflicts_safe_board() {
        assert_eq!(count_conflicts(&[1, 3, 0, 2]), 0);
        assert_eq!(count_conflicts(&[0, 4, 7, 5, 2, 6, 1, 3]), 0);
    }

    #[test]
    fn test_count_conflicts_same_row() {
        for n in 1..10 {
            let genes = vec![0; n];
            assert_eq!(count_conflicts(&genes), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_count_conflicts_pairs_counted_once() {
        // single diagonal pair
        assert_eq!(count_conflicts(&[0, 1]), 1);
        // main diagonal: every pair attacks
        assert_eq!(count_conflicts(&[0, 1, 2, 3]), 6);
        assert_eq!(count_conflicts(&[0, 2]), 0);
    }

    #[test]
    fn test_count_conflicts_reversal_invariant() {
        let samples: [&[usize]; 5] = [
            &[0, 0, 1, 3],
            &[2, 0, 3, 3, 1],
            &[5, 1, 4, 0, 0, 2],
            &[1, 3, 0, 2],
            &[7, 7, 6, 0, 3, 1, 2, 4],
        ];
        for genes in samples {
            let reversed: Vec<usize> = genes.iter().rev().copied().collect();
            assert_eq!(count_conflicts(genes), count_conflicts(&reversed));
        }
    }

    #[test]
    fn test_fitness() {
        assert_eq!(fitness(&[1, 3, 0, 2]), 0);
        assert_eq!(fitness(&[0, 0, 0]), -3);
    }

    #[test]
    fn test_count_board_conflicts() {
        let board = Board::from_queens(4, &[(0, 1), (1, 3), (2, 0), (3, 2)]);
        assert_eq!(count_board_conflicts(&board), 0);
        let row = Board::from_queens(3, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(count_board_conflicts(&row), 3);
    }

    #[test]
    fn test_attacked_columns() {
        let board = Board::from_queens(4, &[(0, 0)]);
        assert_eq!(attacked_columns(&board, 1), 2);
        assert_eq!(attacked_columns(&board, 0), 0);
    }
}
