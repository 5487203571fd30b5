//! Search result types and statistics

use crate::board::{Board, Individual};
use crate::search::config::Algorithm;
use std::time::Duration;

/// Outcome of a best-first enumeration
#[derive(Debug, Clone)]
pub struct BestFirstResult {
    /// Board dimension
    pub n: usize,
    /// Every conflict-free board found, in discovery order
    pub solutions: Vec<Board>,
    /// Statistics from the search
    pub statistics: SearchStatistics,
}

impl BestFirstResult {
    /// True when the search drained its frontier without being stopped early
    pub fn is_exhaustive(&self) -> bool {
        !self.statistics.cancelled && !self.statistics.truncated
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

/// Best-so-far snapshot taken at the end of one generation's evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    pub generation: usize,
    pub best_fitness: i64,
    pub best: Individual,
}

/// Outcome of a genetic run
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// Best individual seen across all generations
    pub best: Individual,
    /// Its fitness (0 for a valid placement)
    pub best_fitness: i64,
    /// Whether a zero-conflict individual was found
    pub converged: bool,
    /// One record per evaluated generation
    pub trace: Vec<GenerationRecord>,
    /// Statistics from the run
    pub statistics: SearchStatistics,
}

impl GeneticResult {
    /// The best individual as a grid board
    pub fn best_board(&self) -> Board {
        Board::from(&self.best)
    }
}

/// Statistics from a search operation
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Algorithm used for the search
    pub algorithm: Algorithm,
    /// Total time spent searching
    pub elapsed_time: Duration,
    /// Partial states pushed onto the frontier (best-first)
    pub states_generated: u64,
    /// Partial states popped and expanded (best-first)
    pub states_expanded: u64,
    /// Largest frontier size observed (best-first)
    pub peak_frontier: usize,
    /// Complete boards recorded (best-first)
    pub solutions_found: u64,
    /// Generations evaluated (genetic)
    pub generations: u64,
    /// Fitness evaluations performed (genetic)
    pub evaluations: u64,
    /// Parent pairs recombined (genetic)
    pub crossovers: u64,
    /// Point mutations applied (genetic)
    pub mutations: u64,
    /// Number of times the running best improved (genetic)
    pub improvements_found: u64,
    /// Best fitness reached (genetic)
    pub best_fitness: i64,
    /// Stopped by cancellation or timeout
    pub cancelled: bool,
    /// Stopped by the solution cap (best-first)
    pub truncated: bool,
}

impl SearchStatistics {
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    /// Fraction of recombined pairs per pairing opportunity (0.0 to 1.0)
    pub fn crossover_rate(&self, population_size: usize) -> f64 {
        let pairs = self.generations.saturating_sub(1) * (population_size as u64 / 2);
        if pairs == 0 {
            0.0
        } else {
            self.crossovers as f64 / pairs as f64
        }
    }

    /// Get states expanded per second
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed_time.as_secs_f64();
        let work = match self.algorithm {
            Algorithm::BestFirst => self.states_expanded,
            Algorithm::Genetic => self.evaluations,
        };
        if secs == 0.0 {
            0.0
        } else {
            work as f64 / secs
        }
    }

    /// Format statistics as a human-readable string
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Algorithm: {}\n", self.algorithm));
        s.push_str(&format!("Time: {:.2?}\n", self.elapsed_time));

        match self.algorithm {
            Algorithm::BestFirst => {
                s.push_str(&format!("States generated: {}\n", self.states_generated));
                s.push_str(&format!("States expanded: {}\n", self.states_expanded));
                s.push_str(&format!("Peak frontier: {}\n", self.peak_frontier));
                s.push_str(&format!("Solutions found: {}\n", self.solutions_found));
                s.push_str(&format!("Throughput: {:.0} states/sec\n", self.throughput()));
            }
            Algorithm::Genetic => {
                s.push_str(&format!("Generations: {}\n", self.generations));
                s.push_str(&format!("Fitness evaluations: {}\n", self.evaluations));
                s.push_str(&format!("Crossovers: {}\n", self.crossovers));
                s.push_str(&format!("Mutations: {}\n", self.mutations));
                s.push_str(&format!("Improvements found: {}\n", self.improvements_found));
                s.push_str(&format!("Best fitness: {}\n", self.best_fitness));
            }
        }

        if self.cancelled {
            s.push_str("Stopped early: cancelled\n");
        }
        if self.truncated {
            s.push_str("Stopped early: solution limit reached\n");
        }

        s
    }
}

impl std::fmt::Display for BestFirstResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.solutions.is_empty() {
            writeln!(f, "No solution exists.")
        } else {
            writeln!(
                f,
                "Found {} solution(s) for N={}",
                self.solutions.len(),
                self.n
            )
        }
    }
}

impl std::fmt::Display for GeneticResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.converged {
            writeln!(f, "Found optimal solution!")?;
        } else {
            writeln!(
                f,
                "No solution found within the max generations ({} conflicts remain)",
                -self.best_fitness
            )?;
        }
        writeln!(f, "Best Solution Found:")?;
        writeln!(f, "{}", self.best)?;
        write!(f, "{}", self.best_board())
    }
}
