//! Point mutation: with probability `rate`, move the queen of one random
//! column to a random row.

use crate::board::Individual;
use rand::Rng;

/// Mutate `individual` in place. Returns true if a position was rewritten.
///
/// The redrawn value may equal the old one, so a mutation is not guaranteed
/// to change the genes; it never touches more than one position.
pub fn mutate<R: Rng>(rng: &mut R, individual: &mut Individual, rate: f64) -> bool {
    let n = individual.size();
    if n == 0 || !rng.random_bool(rate) {
        return false;
    }
    let position = rng.random_range(0..n);
    individual.genes_mut()[position] = rng.random_range(0..n);
    true
}

/// Apply [`mutate`] to every individual; returns how many were mutated
pub fn mutate_population<R: Rng>(rng: &mut R, population: &mut [Individual], rate: f64) -> u64 {
    population
        .iter_mut()
        .map(|individual| u64::from(mutate(rng, individual, rate)))
        .sum()
}
