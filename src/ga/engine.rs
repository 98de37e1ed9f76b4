//! Building blocks of the evolutionary loop.
//!
//! Each step of a generation is exposed as a free function so callers can
//! assemble their own loop. [`GaRunner`](super::GaRunner) composes them
//! into the standard one. Stochastic functions take the random source
//! explicitly.

use super::operators::{flip_bit_mutation, two_point_crossover};
use super::selection::Selection;
use super::types::{Individual, Objective};
use crate::error::{check_probability, ConfigurationError, GaError};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Creates `size` individuals from `factory`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{engine, operators, Individual};
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(64);
/// let pop = engine::initialize_population(10, || {
///     Individual::new(operators::random_genome(8, &mut rng))
/// })
/// .unwrap();
/// assert_eq!(pop.len(), 10);
/// ```
pub fn initialize_population<F>(size: usize, mut factory: F) -> Result<Vec<Individual>, GaError>
where
    F: FnMut() -> Individual,
{
    if size == 0 {
        return Err(ConfigurationError::PopulationSize.into());
    }
    Ok((0..size).map(|_| factory()).collect())
}

/// Evaluates every individual that has no cached fitness.
///
/// Returns the number of individuals evaluated. Order is preserved and
/// already-evaluated individuals are left untouched.
pub fn evaluate<F>(population: &mut [Individual], fitness_fn: F) -> usize
where
    F: Fn(&[bool]) -> f64,
{
    let mut evaluated = 0;
    for ind in population.iter_mut().filter(|ind| !ind.is_evaluated()) {
        ind.fitness = Some(fitness_fn(&ind.genome));
        evaluated += 1;
    }
    evaluated
}

/// Parallel counterpart of [`evaluate`] using rayon.
#[cfg(feature = "parallel")]
pub fn evaluate_parallel<F>(population: &mut [Individual], fitness_fn: F) -> usize
where
    F: Fn(&[bool]) -> f64 + Sync,
{
    population
        .par_iter_mut()
        .filter(|ind| !ind.is_evaluated())
        .map(|ind| {
            ind.fitness = Some(fitness_fn(&ind.genome));
            1
        })
        .sum()
}

/// Tournament selection of `k` individuals.
///
/// Shorthand for `Selection::Tournament(tournament_size).select(..)`.
pub fn select<R: Rng>(
    population: &[Individual],
    k: usize,
    tournament_size: usize,
    objective: Objective,
    rng: &mut R,
) -> Result<Vec<Individual>, GaError> {
    Selection::Tournament(tournament_size).select(population, k, objective, rng)
}

/// Two-point crossover applied with `probability`.
///
/// Returns the pair unchanged when the coin flip fails or the genomes are
/// too short to cut; otherwise both children have their fitness unset.
pub fn crossover<R: Rng>(
    a: Individual,
    b: Individual,
    probability: f64,
    rng: &mut R,
) -> Result<(Individual, Individual), GaError> {
    let (mut a, mut b) = (a, b);
    crossover_with(&mut a, &mut b, probability, rng, two_point_crossover)?;
    Ok((a, b))
}

/// Applies `op` to a pair with `probability`.
///
/// Both fitness values are unset if `op` reports a change or if either genome
/// differs afterwards, so an operator that under-reports cannot leave a stale
/// fitness behind. Returns whether fitness was unset.
pub fn crossover_with<R, F>(
    a: &mut Individual,
    b: &mut Individual,
    probability: f64,
    rng: &mut R,
    op: F,
) -> Result<bool, GaError>
where
    R: Rng,
    F: FnOnce(&mut [bool], &mut [bool], &mut R) -> bool,
{
    check_probability("crossover probability", probability)?;
    if a.len() != b.len() {
        return Err(ConfigurationError::GenomeLengthMismatch {
            left: a.len(),
            right: b.len(),
        }
        .into());
    }

    if !rng.random_bool(probability) {
        return Ok(false);
    }
    let (before_a, before_b) = (a.genome.clone(), b.genome.clone());
    let reported = op(a.genome.as_mut_slice(), b.genome.as_mut_slice(), rng);
    let changed = reported || a.genome != before_a || b.genome != before_b;
    if changed {
        a.invalidate();
        b.invalidate();
    }
    Ok(changed)
}

/// Bit-flip mutation: every bit flips independently with `per_bit_probability`.
///
/// Fitness is unset only if at least one bit flipped.
pub fn mutate<R: Rng>(
    individual: Individual,
    per_bit_probability: f64,
    rng: &mut R,
) -> Result<Individual, GaError> {
    let mut individual = individual;
    mutate_with(&mut individual, per_bit_probability, rng, flip_bit_mutation)?;
    Ok(individual)
}

/// Applies a mutation operator in place.
///
/// Fitness is unset if `op` reports a change or the genome differs afterwards.
pub fn mutate_with<R, F>(
    individual: &mut Individual,
    per_bit_probability: f64,
    rng: &mut R,
    op: F,
) -> Result<bool, GaError>
where
    R: Rng,
    F: FnOnce(&mut [bool], f64, &mut R) -> bool,
{
    check_probability("per-bit mutation probability", per_bit_probability)?;
    let before = individual.genome.clone();
    let reported = op(individual.genome.as_mut_slice(), per_bit_probability, rng);
    let changed = reported || individual.genome != before;
    if changed {
        individual.invalidate();
    }
    Ok(changed)
}
