use clap::{Parser, Subcommand, ValueEnum};
use nqueens_search::error::check_board_size;
use nqueens_search::search::{
    Algorithm, BestFirstConfig, BestFirstResult, BestFirstSearch, GenerationRecord,
    GeneticConfig, GeneticResult, GeneticSearch, Heuristic, SearchAlgorithm, SearchConfig,
    SearchStatistics, StopCondition,
};
use nqueens_search::SolveError;
use std::time::Duration;

// --- Command Line Arguments ---

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "nqueens - N-Queens solver (best-first search and genetic algorithm)")]
#[command(version)]
#[command(subcommand_required = true)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// CLI heuristic selection
#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliHeuristic {
    /// Constant score (plain FIFO expansion)
    Constant,
    /// Prefer states with more queens placed
    Depth,
    /// Prefer states whose next row has fewer attacked columns
    NextRowConflicts,
}

impl From<CliHeuristic> for Heuristic {
    fn from(cli: CliHeuristic) -> Self {
        match cli {
            CliHeuristic::Constant => Heuristic::Constant,
            CliHeuristic::Depth => Heuristic::Depth,
            CliHeuristic::NextRowConflicts => Heuristic::NextRowConflicts,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Enumerate every solution with best-first search
    BestFirst {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Frontier ordering heuristic
        #[arg(long, value_enum, default_value = "next-row-conflicts")]
        heuristic: CliHeuristic,
        /// Stop after this many solutions
        #[arg(long)]
        max_solutions: Option<usize>,
        /// Index of the solution to display (wraps around, negative counts back)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        show: i64,
        /// Display every solution
        #[arg(long)]
        all: bool,
        /// Only print the number of solutions
        #[arg(long)]
        count_only: bool,

        // --- Common options ---
        /// Timeout in seconds for the search
        #[arg(long)]
        timeout: Option<u64>,
        /// Print search statistics
        #[arg(long)]
        stats: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
    /// Evolve a solution with a genetic algorithm
    Genetic {
        /// Board size
        #[arg(allow_negative_numbers = true)]
        n: i64,
        /// Population size (must be even)
        #[arg(long, default_value = "100")]
        population: usize,
        /// Maximum number of generations
        #[arg(long, default_value = "1000")]
        generations: usize,
        /// Crossover probability per parent pair
        #[arg(long, default_value = "0.7")]
        crossover: f64,
        /// Mutation probability per individual
        #[arg(long, default_value = "0.01")]
        mutation: f64,
        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,
        /// Suppress the per-generation progress lines
        #[arg(long, short)]
        quiet: bool,

        // --- Common options ---
        /// Timeout in seconds for the search
        #[arg(long)]
        timeout: Option<u64>,
        /// Print search statistics
        #[arg(long)]
        stats: bool,
        /// Enable verbose output
        #[arg(long, short)]
        verbose: bool,
    },
}

// --- Logging ---

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

// --- Presentation ---

/// Map a possibly negative or out-of-range display index onto `0..len`
fn wrap_index(index: i64, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        index.rem_euclid(len as i64) as usize
    }
}

fn print_search_statistics(stats: &SearchStatistics) {
    println!("\n--- Search Statistics ---");
    print!("{}", stats.format_summary());
}

fn print_best_first(result: &BestFirstResult, show: i64, all: bool, count_only: bool) {
    print!("{}", result);
    if !result.is_exhaustive() {
        println!("(search stopped early; the list may be incomplete)");
    }
    if count_only || result.solutions.is_empty() {
        return;
    }

    let total = result.solutions.len();
    if all {
        for (i, board) in result.solutions.iter().enumerate() {
            println!("\nSolution {} of {}", i + 1, total);
            print!("{}", board);
        }
    } else {
        let current = wrap_index(show, total);
        println!("\nSolution {} of {}", current + 1, total);
        print!("{}", result.solutions[current]);
    }
}

fn print_generation(record: &GenerationRecord) {
    println!(
        "Generation {:06} - Conflicts: {:03} - Best Solution: {}",
        record.generation, -record.best_fitness, record.best
    );
}

fn print_genetic(result: &GeneticResult) {
    println!();
    print!("{}", result);
}

// --- Commands ---

fn run_best_first(
    n: i64,
    best_first: BestFirstConfig,
    timeout: Option<Duration>,
    verbose: bool,
) -> Result<BestFirstResult, SolveError> {
    let n = check_board_size(n)?;
    let config = SearchConfig::new(n)
        .with_algorithm(Algorithm::BestFirst)
        .with_best_first(best_first)
        .with_timeout_option(timeout)
        .with_verbose(verbose);
    let stop = StopCondition::new(None, config.timeout);
    BestFirstSearch::new().search(&config, &stop)
}

fn run_genetic(
    n: i64,
    genetic: GeneticConfig,
    timeout: Option<Duration>,
    verbose: bool,
    quiet: bool,
) -> Result<GeneticResult, SolveError> {
    let n = check_board_size(n)?;
    let config = SearchConfig::new(n)
        .with_algorithm(Algorithm::Genetic)
        .with_genetic(genetic)
        .with_timeout_option(timeout)
        .with_verbose(verbose);
    let stop = StopCondition::new(None, config.timeout);
    GeneticSearch::new().run(&config, &stop, |record| {
        if !quiet {
            print_generation(record);
        }
    })
}

// --- Main Function ---
fn main() {
    let args = Args::parse();

    match args.command {
        Commands::BestFirst {
            n,
            heuristic,
            max_solutions,
            show,
            all,
            count_only,
            timeout,
            stats,
            verbose,
        } => {
            init_logging(verbose);
            let best_first = BestFirstConfig::default()
                .with_heuristic(heuristic.into())
                .with_max_solutions_option(max_solutions);

            match run_best_first(n, best_first, timeout.map(Duration::from_secs), verbose) {
                Ok(result) => {
                    print_best_first(&result, show, all, count_only);
                    if stats {
                        print_search_statistics(&result.statistics);
                    }
                }
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Genetic {
            n,
            population,
            generations,
            crossover,
            mutation,
            seed,
            quiet,
            timeout,
            stats,
            verbose,
        } => {
            init_logging(verbose);
            let genetic = GeneticConfig::default()
                .with_population_size(population)
                .with_max_generations(generations)
                .with_crossover_rate(crossover)
                .with_mutation_rate(mutation)
                .with_seed_option(seed);

            match run_genetic(n, genetic, timeout.map(Duration::from_secs), verbose, quiet) {
                Ok(result) => {
                    print_genetic(&result);
                    if stats {
                        print_search_statistics(&result.statistics);
                    }
                }
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
