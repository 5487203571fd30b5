//! Error types for solver input validation

use rand::distr::weighted;
use thiserror::Error;

/// Errors raised before (or while setting up) a search.
///
/// Running out of generations or finding no solution are ordinary outcomes and
/// are reported through the search results instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("board size must be a positive integer, got {0}")]
    InvalidBoardSize(i64),

    #[error("population size must be at least 2, got {0}")]
    InvalidPopulationSize(usize),

    #[error("population size must be even for pairwise crossover, got {0}")]
    OddPopulationSize(usize),

    #[error("generation budget must be positive, got {0}")]
    InvalidGenerationBudget(usize),

    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    #[error("failed to build selection weights: {0}")]
    Selection(#[from] weighted::Error),
}

/// Check that a probability parameter lies in `[0, 1]` (rejects NaN)
pub fn check_rate(name: &'static str, value: f64) -> Result<(), SolveError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SolveError::RateOutOfRange { name, value })
    }
}

/// Convert a caller-supplied board size into a usable dimension
pub fn check_board_size(n: i64) -> Result<usize, SolveError> {
    if n <= 0 {
        return Err(SolveError::InvalidBoardSize(n));
    }
    usize::try_from(n).map_err(|_| SolveError::InvalidBoardSize(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rate_bounds() {
        assert!(check_rate("crossover rate", 0.0).is_ok());
        assert!(check_rate("crossover rate", 1.0).is_ok());
        assert!(check_rate("crossover rate", 0.7).is_ok());
        assert_eq!(
            check_rate("mutation rate", 1.5),
            Err(SolveError::RateOutOfRange {
                name: "mutation rate",
                value: 1.5
            })
        );
        assert!(check_rate("mutation rate", -0.1).is_err());
        assert!(check_rate("mutation rate", f64::NAN).is_err());
    }

    #[test]
    fn test_check_board_size() {
        assert_eq!(check_board_size(8), Ok(8));
        assert_eq!(check_board_size(1), Ok(1));
        assert_eq!(check_board_size(0), Err(SolveError::InvalidBoardSize(0)));
        assert_eq!(check_board_size(-3), Err(SolveError::InvalidBoardSize(-3)));
    }

    #[test]
    fn test_error_messages() {
        let err = SolveError::OddPopulationSize(7);
        assert_eq!(
            err.to_string(),
            "population size must be even for pairwise crossover, got 7"
        );
        let err = SolveError::InvalidBoardSize(-1);
        assert!(err.to_string().contains("positive integer"));
    }
}
