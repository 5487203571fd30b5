//! Configuration types for the solvers

use crate::error::{SolveError, check_rate};
use std::time::Duration;

/// Solver selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Priority-ordered expansion of partial boards (exhaustive)
    #[default]
    BestFirst,
    /// Generational genetic algorithm (best effort)
    Genetic,
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::BestFirst => write!(f, "best-first"),
            Algorithm::Genetic => write!(f, "genetic"),
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "best-first" | "bestfirst" | "bfs" => Ok(Algorithm::BestFirst),
            "genetic" | "ga" => Ok(Algorithm::Genetic),
            _ => Err(format!(
                "Unknown algorithm: '{}'. Valid options: best-first, genetic",
                s
            )),
        }
    }
}

/// Ordering policy for the best-first frontier.
///
/// Every placement is already filtered through the safety check, so the
/// heuristic changes only the traversal order, never the solution set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    /// Always 0: the frontier degrades to a FIFO queue
    Constant,
    /// Remaining rows to fill: deeper states first
    Depth,
    /// Columns of the next row already attacked: fewer first
    #[default]
    NextRowConflicts,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Constant => write!(f, "constant"),
            Heuristic::Depth => write!(f, "depth"),
            Heuristic::NextRowConflicts => write!(f, "next-row-conflicts"),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "constant" | "zero" | "fifo" => Ok(Heuristic::Constant),
            "depth" => Ok(Heuristic::Depth),
            "next-row-conflicts" | "conflicts" => Ok(Heuristic::NextRowConflicts),
            _ => Err(format!(
                "Unknown heuristic: '{}'. Valid options: constant, depth, next-row-conflicts",
                s
            )),
        }
    }
}

/// Configuration for best-first search
#[derive(Debug, Clone, Default)]
pub struct BestFirstConfig {
    /// Frontier ordering policy
    pub heuristic: Heuristic,
    /// Stop after this many solutions (None = enumerate all)
    pub max_solutions: Option<usize>,
}

impl BestFirstConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_max_solutions(mut self, max: usize) -> Self {
        self.max_solutions = Some(max);
        self
    }

    pub fn with_max_solutions_option(mut self, max: Option<usize>) -> Self {
        self.max_solutions = max;
        self
    }
}

/// Configuration for the genetic solver
#[derive(Debug, Clone)]
pub struct GeneticConfig {
    /// Individuals per generation (even, at least 2)
    pub population_size: usize,
    /// Generation budget
    pub max_generations: usize,
    /// Probability that a parent pair is recombined
    pub crossover_rate: f64,
    /// Probability that an individual receives a point mutation
    pub mutation_rate: f64,
    /// Seed for random number generator (None = random seed)
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            seed: None,
        }
    }
}

impl GeneticConfig {
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_seed_option(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Reject parameters the generational loop cannot run with
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.population_size < 2 {
            return Err(SolveError::InvalidPopulationSize(self.population_size));
        }
        if self.population_size % 2 != 0 {
            return Err(SolveError::OddPopulationSize(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(SolveError::InvalidGenerationBudget(self.max_generations));
        }
        check_rate("crossover rate", self.crossover_rate)?;
        check_rate("mutation rate", self.mutation_rate)?;
        Ok(())
    }
}

/// Main search configuration
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Board dimension
    pub n: usize,
    /// Solver to use
    pub algorithm: Algorithm,
    /// Overall timeout for the search
    pub timeout: Option<Duration>,
    /// Best-first specific configuration
    pub best_first: BestFirstConfig,
    /// Genetic specific configuration
    pub genetic: GeneticConfig,
    /// Log progress at debug level
    pub verbose: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n: 8,
            algorithm: Algorithm::default(),
            timeout: None,
            best_first: BestFirstConfig::default(),
            genetic: GeneticConfig::default(),
            verbose: false,
        }
    }
}

impl SearchConfig {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            ..Default::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_timeout_option(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_best_first(mut self, best_first: BestFirstConfig) -> Self {
        self.best_first = best_first;
        self
    }

    pub fn with_genetic(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the board size and, for the genetic solver, its parameters
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.n == 0 {
            return Err(SolveError::InvalidBoardSize(0));
        }
        match self.algorithm {
            Algorithm::BestFirst => Ok(()),
            Algorithm::Genetic => self.genetic.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(
            "best-first".parse::<Algorithm>().unwrap(),
            Algorithm::BestFirst
        );
        assert_eq!(
            "best_first".parse::<Algorithm>().unwrap(),
            Algorithm::BestFirst
        );
        assert_eq!("GA".parse::<Algorithm>().unwrap(), Algorithm::Genetic);
        assert!("annealing".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", Algorithm::BestFirst), "best-first");
        assert_eq!(format!("{}", Algorithm::Genetic), "genetic");
    }

    #[test]
    fn test_heuristic_round_trip() {
        for heuristic in [
            Heuristic::Constant,
            Heuristic::Depth,
            Heuristic::NextRowConflicts,
        ] {
            assert_eq!(
                heuristic.to_string().parse::<Heuristic>().unwrap(),
                heuristic
            );
        }
        assert_eq!("fifo".parse::<Heuristic>().unwrap(), Heuristic::Constant);
    }

    #[test]
    fn test_genetic_defaults() {
        let config = GeneticConfig::default();
        assert_eq!(config.crossover_rate, 0.7);
        assert_eq!(config.mutation_rate, 0.01);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_genetic_validate() {
        let config = GeneticConfig::default().with_population_size(7);
        assert_eq!(config.validate(), Err(SolveError::OddPopulationSize(7)));

        let config = GeneticConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(SolveError::InvalidPopulationSize(0)));

        let config = GeneticConfig::default().with_max_generations(0);
        assert_eq!(
            config.validate(),
            Err(SolveError::InvalidGenerationBudget(0))
        );

        let config = GeneticConfig::default().with_crossover_rate(1.2);
        assert!(matches!(
            config.validate(),
            Err(SolveError::RateOutOfRange {
                name: "crossover rate",
                ..
            })
        ));

        let config = GeneticConfig::default().with_mutation_rate(-0.5);
        assert!(matches!(
            config.validate(),
            Err(SolveError::RateOutOfRange {
                name: "mutation rate",
                ..
            })
        ));
    }

    #[test]
    fn test_search_config_builder() {
        let config = SearchConfig::new(6)
            .with_algorithm(Algorithm::Genetic)
            .with_genetic(GeneticConfig::default().with_seed(42))
            .with_timeout(Duration::from_secs(5))
            .with_verbose(true);

        assert_eq!(config.n, 6);
        assert_eq!(config.algorithm, Algorithm::Genetic);
        assert_eq!(config.genetic.seed, Some(42));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_search_config_rejects_empty_board() {
        let config = SearchConfig::new(0);
        assert_eq!(config.validate(), Err(SolveError::InvalidBoardSize(0)));
    }

    #[test]
    fn test_best_first_validation_ignores_genetic_parameters() {
        let config = SearchConfig::new(4)
            .with_genetic(GeneticConfig::default().with_population_size(3));
        assert!(config.validate().is_ok());
        let config = config.with_algorithm(Algorithm::Genetic);
        assert!(config.validate().is_err());
    }
}
