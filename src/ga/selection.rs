//! Selection strategies for the GA.
//!
//! Selection draws the individuals that will reproduce into the next
//! generation. Every strategy returns exactly `k` individuals (repetition
//! allowed) and refuses to run on a population that contains unevaluated
//! individuals.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Individual, Objective};
use crate::error::{ConfigurationError, GaError, StateError};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Selection;
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: sample `k` individuals uniformly with
    /// replacement, keep the best. Ties go to the earliest draw.
    ///
    /// Higher `k` = stronger selection pressure; `k = 1` is uniform
    /// random sampling.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Fitness is shifted so the worst individual gets a tiny positive
    /// weight, which makes the scheme usable for both objectives and for
    /// negative fitness values.
    ///
    /// # Complexity
    /// O(n) per selection
    Roulette,

    /// Uniform random sampling with replacement.
    Random,

    /// Truncation: the `k` best individuals, best first. If `k` exceeds the
    /// population size the ranking is repeated.
    Best,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Checks the strategy's own parameters.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        match self {
            Selection::Tournament(0) => Err(ConfigurationError::TournamentSize),
            _ => Ok(()),
        }
    }

    /// Selects `k` indices into `population`.
    ///
    /// Fails if any individual is unevaluated, if the population is empty
    /// while `k > 0`, or if the strategy is misconfigured.
    pub fn select_indices<R: Rng>(
        &self,
        population: &[Individual],
        k: usize,
        objective: Objective,
        rng: &mut R,
    ) -> Result<Vec<usize>, GaError> {
        self.validate()?;
        let fitnesses = fitness_values(population)?;
        if k == 0 {
            return Ok(Vec::new());
        }
        if fitnesses.is_empty() {
            return Err(StateError::EmptyPopulation.into());
        }

        let indices: Vec<usize> = match self {
            Selection::Tournament(size) => (0..k)
                .map(|_| tournament(&fitnesses, *size, objective, rng))
                .collect(),
            Selection::Roulette => roulette(&fitnesses, k, objective, rng),
            Selection::Random => (0..k)
                .map(|_| rng.random_range(0..fitnesses.len()))
                .collect(),
            Selection::Best => {
                let ranked = rank_best_first(&fitnesses, objective);
                ranked.iter().copied().cycle().take(k).collect()
            }
        };
        Ok(indices)
    }

    /// Selects `k` individuals, returned as independent copies.
    pub fn select<R: Rng>(
        &self,
        population: &[Individual],
        k: usize,
        objective: Objective,
        rng: &mut R,
    ) -> Result<Vec<Individual>, GaError> {
        let indices = self.select_indices(population, k, objective, rng)?;
        Ok(indices.into_iter().map(|i| population[i].clone()).collect())
    }
}

/// Returns the fittest individual and its fitness. Ties go to the first.
pub fn select_best(
    population: &[Individual],
    objective: Objective,
) -> Result<(&Individual, f64), GaError> {
    let fitnesses = fitness_values(population)?;
    let mut best: Option<usize> = None;
    for (i, &f) in fitnesses.iter().enumerate() {
        match best {
            Some(b) if !objective.is_better(f, fitnesses[b]) => {}
            _ => best = Some(i),
        }
    }
    let index = best.ok_or(StateError::EmptyPopulation)?;
    Ok((&population[index], fitnesses[index]))
}

/// Collects every fitness, failing on the first unevaluated individual.
fn fitness_values(population: &[Individual]) -> Result<Vec<f64>, StateError> {
    population
        .iter()
        .enumerate()
        .map(|(index, ind)| ind.fitness().ok_or(StateError::Unevaluated { index }))
        .collect()
}

/// One tournament: draw `size` indices with replacement, return the best.
fn tournament<R: Rng>(fitnesses: &[f64], size: usize, objective: Objective, rng: &mut R) -> usize {
    let n = fitnesses.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..size {
        let idx = rng.random_range(0..n);
        if objective.is_better(fitnesses[idx], fitnesses[best_idx]) {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel over shifted fitness.
///
/// For maximization: weight_i = fitness_i - min + epsilon
/// For minimization: weight_i = max - fitness_i + epsilon
fn roulette<R: Rng>(fitnesses: &[f64], k: usize, objective: Objective, rng: &mut R) -> Vec<usize> {
    let n = fitnesses.len();
    let min = fitnesses.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = fitnesses.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let epsilon = 1e-10;

    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            let w = match objective {
                Objective::Maximize => f - min,
                Objective::Minimize => max - f,
            } + epsilon;
            if w > 0.0 {
                w
            } else {
                epsilon
            }
        })
        .collect();
    let total: f64 = weights.iter().sum();

    (0..k)
        .map(|_| {
            if !(total > 0.0 && total.is_finite()) {
                return rng.random_range(0..n);
            }
            let threshold = rng.random_range(0.0..total);
            let mut cumulative = 0.0;
            for (i, &w) in weights.iter().enumerate() {
                cumulative += w;
                if cumulative > threshold {
                    return i;
                }
            }
            n - 1 // floating-point fallback
        })
        .collect()
}

/// Indices sorted best first; stable, so equal fitness keeps population order.
fn rank_best_first(fitnesses: &[f64], objective: Objective) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..fitnesses.len()).collect();
    indices.sort_by(|&a, &b| objective.cmp_best_first(fitnesses[a], fitnesses[b]));
    indices
}
