//! Single-point crossover
//!
//! Selected parents are paired in order: (0, 1), (2, 3), ... Each pair is
//! recombined with the configured probability by swapping the tails after a
//! cut point drawn from `[1, n - 1]`; otherwise the children copy the parents.

use crate::board::Individual;
use rand::Rng;

/// Swap the tails of two parents after `cut`
pub fn crossover_at(
    parent1: &Individual,
    parent2: &Individual,
    cut: usize,
) -> (Individual, Individual) {
    let (a, b) = (parent1.genes(), parent2.genes());
    let child1 = a[..cut].iter().chain(&b[cut..]).copied().collect();
    let child2 = b[..cut].iter().chain(&a[cut..]).copied().collect();
    (Individual::new(child1), Individual::new(child2))
}

/// Recombine one pair with probability `rate`.
///
/// Returns the children and whether a cut was made. Boards narrower than
/// two columns have no valid cut point and are always copied.
pub fn crossover<R: Rng>(
    rng: &mut R,
    parent1: &Individual,
    parent2: &Individual,
    rate: f64,
) -> (Individual, Individual, bool) {
    let n = parent1.size();
    if rng.random_bool(rate) && n >= 2 {
        let cut = rng.random_range(1..n);
        let (child1, child2) = crossover_at(parent1, parent2, cut);
        (child1, child2, true)
    } else {
        (parent1.clone(), parent2.clone(), false)
    }
}

/// Breed a whole selected population pairwise.
///
/// Returns the offspring (same length as `selected`) and the number of pairs
/// that were recombined. An unpaired trailing individual is copied through.
pub fn crossover_population<R: Rng>(
    rng: &mut R,
    selected: &[Individual],
    rate: f64,
) -> (Vec<Individual>, u64) {
    let mut offspring = Vec::with_capacity(selected.len());
    let mut crossovers = 0;
    let mut pairs = selected.chunks_exact(2);
    for pair in &mut pairs {
        let (child1, child2, crossed) = crossover(rng, &pair[0], &pair[1], rate);
        if crossed {
            crossovers += 1;
        }
        offspring.push(child1);
        offspring.push(child2);
    }
    offspring.extend_from_slice(pairs.remainder());
    (offspring, crossovers)
}
