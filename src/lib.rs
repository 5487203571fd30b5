//! N-Queens solvers
//!
//! Two independent engines over a shared conflict model:
//! - [`solve_best_first`] enumerates every solution with a best-first search
//!   over partial boards
//! - [`run_genetic`] evolves a population of candidate boards and returns the
//!   best one found within a generation budget
//!
//! Both are synchronous and single-threaded. The [`search`] module exposes the
//! configurable engines behind these two entry points (heuristic choice,
//! seeding, cancellation, statistics).

pub mod board;
pub mod conflict;
pub mod error;
pub mod search;

pub use board::{Board, Individual};
pub use error::SolveError;

use error::check_board_size;
use search::{
    Algorithm, BestFirstSearch, GeneticConfig, GeneticSearch, SearchAlgorithm, SearchConfig,
    StopCondition,
};

/// Every placement of `n` mutually non-attacking queens.
///
/// Returns an empty vector when no placement exists (n = 2 or 3) and an
/// error when `n` is not positive.
pub fn solve_best_first(n: i64) -> Result<Vec<Board>, SolveError> {
    let n = check_board_size(n)?;
    let config = SearchConfig::new(n);
    let result = BestFirstSearch::new().search(&config, &StopCondition::none())?;
    Ok(result.solutions)
}

/// Run the genetic solver and return the best individual with its fitness.
///
/// `on_generation(generation, best_fitness, best)` is called once per
/// evaluated generation with the best-so-far values. A fitness of 0 means the
/// returned individual is a valid placement; a negative fitness means the
/// budget ran out first.
pub fn run_genetic<F>(
    population_size: usize,
    max_generations: usize,
    n: i64,
    crossover_rate: f64,
    mutation_rate: f64,
    mut on_generation: F,
) -> Result<(Individual, i64), SolveError>
where
    F: FnMut(usize, i64, &Individual),
{
    let n = check_board_size(n)?;
    let config = SearchConfig::new(n)
        .with_algorithm(Algorithm::Genetic)
        .with_genetic(
            GeneticConfig::default()
                .with_population_size(population_size)
                .with_max_generations(max_generations)
                .with_crossover_rate(crossover_rate)
                .with_mutation_rate(mutation_rate),
        );
    let result = GeneticSearch::new().run(&config, &StopCondition::none(), |record| {
        on_generation(record.generation, record.best_fitness, &record.best)
    })?;
    Ok((result.best, result.best_fitness))
}
