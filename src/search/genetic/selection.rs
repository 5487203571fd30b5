//! Fitness-proportionate (roulette wheel) selection
//!
//! Fitness values are non-positive, so they are shifted until the worst
//! individual weighs exactly 1 before normalising. Every individual keeps a
//! non-zero chance of being drawn.

use crate::board::Individual;
use crate::error::SolveError;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// Selection probabilities for a slice of fitness values (sums to 1)
pub fn selection_probabilities(fitness: &[i64]) -> Vec<f64> {
    let Some(&min) = fitness.iter().min() else {
        return Vec::new();
    };
    let weights: Vec<f64> = fitness.iter().map(|&f| (f - min + 1) as f64).collect();
    let total: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / total).collect()
}

/// Draw `population.len()` individuals with replacement, weighted by fitness
pub fn roulette_select<R: Rng>(
    rng: &mut R,
    population: &[Individual],
    fitness: &[i64],
) -> Result<Vec<Individual>, SolveError> {
    let wheel = WeightedIndex::new(selection_probabilities(fitness))?;
    Ok((0..population.len())
        .map(|_| population[wheel.sample(rng)].clone())
        .collect())
}
