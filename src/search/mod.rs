//! Search algorithms for placing N queens
//!
//! Two independent solvers share only the conflict model:
//! - Best-first: exhaustive, priority-ordered expansion of partial boards
//! - Genetic: generational evolution of column-representation individuals

pub mod best_first;
pub mod cancel;
pub mod config;
pub mod genetic;
pub mod result;

pub use best_first::BestFirstSearch;
pub use cancel::{CancelToken, StopCondition};
pub use config::{Algorithm, BestFirstConfig, GeneticConfig, Heuristic, SearchConfig};
pub use genetic::GeneticSearch;
pub use result::{BestFirstResult, GenerationRecord, GeneticResult, SearchStatistics};

use crate::error::SolveError;

/// Trait for N-Queens solvers
pub trait SearchAlgorithm {
    /// What a completed (or stopped) search hands back
    type Output;

    /// Run the search for `config.n` queens
    ///
    /// # Arguments
    /// * `config` - Board size and solver parameters
    /// * `stop` - Polled between units of work; a stopped search returns its
    ///   partial result
    ///
    /// # Returns
    /// The solver's result, or an error if the configuration is invalid
    fn search(
        &mut self,
        config: &SearchConfig,
        stop: &StopCondition,
    ) -> Result<Self::Output, SolveError>;

    /// Get statistics from the most recent search
    fn statistics(&self) -> SearchStatistics;

    /// Reset the search state for a new search
    fn reset(&mut self);
}
