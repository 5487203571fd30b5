//! Genetic algorithm search
//!
//! Non-overlapping generational model over column-representation boards:
//! 1. Initialise a population with uniformly random genes
//! 2. Evaluate fitness (negated conflict count) of every individual
//! 3. Update the running best if this generation beat it
//! 4. Stop when the running best has zero conflicts or the budget is spent
//! 5. Roulette-wheel selection, pairwise single-point crossover, point mutation
//! 6. Replace the whole population and go to 2
//!
//! No elitism: the best individual is only remembered, not re-inserted.

pub mod crossover;
pub mod mutation;
pub mod selection;

use crate::board::Individual;
use crate::error::SolveError;
use crate::search::cancel::StopCondition;
use crate::search::config::{Algorithm, SearchConfig};
use crate::search::result::{GenerationRecord, GeneticResult, SearchStatistics};
use crate::search::SearchAlgorithm;
use crossover::crossover_population;
use log::{debug, info, trace};
use mutation::mutate_population;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use selection::roulette_select;
use std::time::Instant;

/// Index and value of the first maximum fitness
fn fittest(fitness: &[i64]) -> (usize, i64) {
    let mut best = (0, i64::MIN);
    for (i, &f) in fitness.iter().enumerate() {
        if f > best.1 {
            best = (i, f);
        }
    }
    best
}

/// Best-effort genetic N-Queens solver
pub struct GeneticSearch {
    statistics: SearchStatistics,
}

impl GeneticSearch {
    pub fn new() -> Self {
        Self {
            statistics: SearchStatistics::new(Algorithm::Genetic),
        }
    }

    /// Run the generational loop, reporting each generation to `on_generation`.
    ///
    /// The observer sees the best-so-far record after every evaluation; it
    /// cannot influence the search.
    pub fn run<F>(
        &mut self,
        config: &SearchConfig,
        stop: &StopCondition,
        mut on_generation: F,
    ) -> Result<GeneticResult, SolveError>
    where
        F: FnMut(&GenerationRecord),
    {
        self.reset();
        if config.n == 0 {
            return Err(SolveError::InvalidBoardSize(0));
        }
        let params = &config.genetic;
        params.validate()?;
        let start_time = Instant::now();
        let n = config.n;

        info!(
            "genetic search: n={}, population={}, generations={}, pc={}, pm={}, seed={:?}",
            n,
            params.population_size,
            params.max_generations,
            params.crossover_rate,
            params.mutation_rate,
            params.seed
        );

        let mut rng: ChaCha8Rng = match params.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };

        let mut population: Vec<Individual> = (0..params.population_size)
            .map(|_| Individual::random(&mut rng, n))
            .collect();

        let mut best = population[0].clone();
        let mut best_fitness = i64::MIN;
        let mut trace = Vec::new();

        for generation in 0..params.max_generations {
            let fitness: Vec<i64> = population.iter().map(Individual::fitness).collect();
            self.statistics.generations += 1;
            self.statistics.evaluations += fitness.len() as u64;

            let (best_index, generation_best) = fittest(&fitness);
            if generation_best > best_fitness {
                best_fitness = generation_best;
                best = population[best_index].clone();
                self.statistics.improvements_found += 1;
                debug!(
                    "generation {}: best fitness improved to {} ({})",
                    generation, best_fitness, best
                );
            }

            let record = GenerationRecord {
                generation,
                best_fitness,
                best: best.clone(),
            };
            trace!(
                "generation {:06}: conflicts={:03}, best={}",
                generation,
                -best_fitness,
                best
            );
            on_generation(&record);
            trace.push(record);

            if best_fitness == 0 || generation + 1 == params.max_generations {
                break;
            }
            if stop.should_stop() {
                debug!("genetic search cancelled after generation {}", generation);
                self.statistics.cancelled = true;
                break;
            }

            let selected = roulette_select(&mut rng, &population, &fitness)?;
            let (mut offspring, crossovers) =
                crossover_population(&mut rng, &selected, params.crossover_rate);
            self.statistics.crossovers += crossovers;
            self.statistics.mutations +=
                mutate_population(&mut rng, &mut offspring, params.mutation_rate);
            population = offspring;
        }

        let converged = best_fitness == 0;
        self.statistics.best_fitness = best_fitness;
        self.statistics.elapsed_time = start_time.elapsed();

        if converged {
            info!(
                "genetic search converged after {} generation(s) in {:.2?}",
                self.statistics.generations, self.statistics.elapsed_time
            );
        } else {
            info!(
                "genetic search stopped after {} generation(s) with {} conflict(s) remaining",
                self.statistics.generations, -best_fitness
            );
        }

        Ok(GeneticResult {
            best,
            best_fitness,
            converged,
            trace,
            statistics: self.statistics.clone(),
        })
    }
}

impl Default for GeneticSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchAlgorithm for GeneticSearch {
    type Output = GeneticResult;

    fn search(
        &mut self,
        config: &SearchConfig,
        stop: &StopCondition,
    ) -> Result<GeneticResult, SolveError> {
        self.run(config, stop, |_| {})
    }

    fn statistics(&self) -> SearchStatistics {
        self.statistics.clone()
    }

    fn reset(&mut self) {
        self.statistics = SearchStatistics::new(Algorithm::Genetic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::cancel::CancelToken;
    use crate::search::config::GeneticConfig;

    fn config(n: usize, genetic: GeneticConfig) -> SearchConfig {
        SearchConfig::new(n)
            .with_algorithm(Algorithm::Genetic)
            .with_genetic(genetic)
    }

    #[test]
    fn test_fittest_picks_first_maximum() {
        assert_eq!(fittest(&[-3, -1, -1, -5]), (1, -1));
        assert_eq!(fittest(&[0]), (0, 0));
    }

    #[test]
    fn test_genetic_search_creation() {
        let search = GeneticSearch::new();
        let stats = search.statistics();
        assert_eq!(stats.algorithm, Algorithm::Genetic);
        assert_eq!(stats.generations, 0);
    }

    #[test]
    fn test_trace_is_monotone() {
        let mut search = GeneticSearch::new();
        let config = config(
            8,
            GeneticConfig::default()
                .with_population_size(20)
                .with_max_generations(100)
                .with_seed(42),
        );
        let result = search.search(&config, &StopCondition::none()).unwrap();

        assert!(!result.trace.is_empty());
        for (i, pair) in result.trace.windows(2).enumerate() {
            assert!(pair[0].best_fitness <= pair[1].best_fitness);
            assert_eq!(pair[0].generation, i);
        }
        let last = result.trace.last().unwrap();
        assert_eq!(last.best_fitness, result.best_fitness);
        assert_eq!(last.best, result.best);
        assert_eq!(result.best.fitness(), result.best_fitness);
    }

    #[test]
    fn test_budget_respected() {
        let mut search = GeneticSearch::new();
        let config = config(
            10,
            GeneticConfig::default()
                .with_population_size(4)
                .with_max_generations(5)
                .with_mutation_rate(0.0)
                .with_seed(7),
        );
        let result = search.search(&config, &StopCondition::none()).unwrap();
        assert!(result.trace.len() <= 5);
        assert_eq!(result.statistics.generations as usize, result.trace.len());
        assert_eq!(result.statistics.evaluations, 4 * result.trace.len() as u64);
        assert_eq!(result.statistics.mutations, 0);
        assert_eq!(result.converged, result.best_fitness == 0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = config(
            6,
            GeneticConfig::default()
                .with_population_size(16)
                .with_max_generations(50)
                .with_seed(1234),
        );
        let a = GeneticSearch::new()
            .search(&config, &StopCondition::none())
            .unwrap();
        let b = GeneticSearch::new()
            .search(&config, &StopCondition::none())
            .unwrap();
        assert_eq!(a.trace, b.trace);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_converges_on_four_queens() {
        let config = config(
            4,
            GeneticConfig::default()
                .with_population_size(50)
                .with_max_generations(200)
                .with_seed(2024),
        );
        let result = GeneticSearch::new()
            .search(&config, &StopCondition::none())
            .unwrap();
        if result.converged {
            assert!(result.best.is_solution());
            assert!(result.best_board().is_solution());
        }
    }

    #[test]
    fn test_single_queen_converges_immediately() {
        let config = config(
            1,
            GeneticConfig::default()
                .with_population_size(2)
                .with_max_generations(10)
                .with_seed(0),
        );
        let result = GeneticSearch::new()
            .search(&config, &StopCondition::none())
            .unwrap();
        assert!(result.converged);
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.best.genes(), &[0]);
    }

    #[test]
    fn test_observer_called_once_per_generation() {
        let config = config(
            8,
            GeneticConfig::default()
                .with_population_size(10)
                .with_max_generations(25)
                .with_seed(9),
        );
        let mut seen = Vec::new();
        let result = GeneticSearch::new()
            .run(&config, &StopCondition::none(), |record| {
                seen.push(record.generation)
            })
            .unwrap();
        assert_eq!(seen, (0..result.trace.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_cancellation_stops_after_first_generation() {
        let token = CancelToken::new();
        token.cancel();
        let config = config(
            12,
            GeneticConfig::default()
                .with_population_size(10)
                .with_max_generations(1000)
                .with_seed(3),
        );
        let result = GeneticSearch::new()
            .search(&config, &StopCondition::new(Some(token), None))
            .unwrap();
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.best.size(), 12);
        assert!(result.statistics.cancelled || result.converged);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let mut search = GeneticSearch::new();
        let odd = config(4, GeneticConfig::default().with_population_size(5));
        assert_eq!(
            search.search(&odd, &StopCondition::none()).unwrap_err(),
            SolveError::OddPopulationSize(5)
        );
        let empty = config(0, GeneticConfig::default());
        assert_eq!(
            search.search(&empty, &StopCondition::none()).unwrap_err(),
            SolveError::InvalidBoardSize(0)
        );
    }
}
