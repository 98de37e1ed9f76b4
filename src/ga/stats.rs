//! Per-generation population statistics.

use super::types::Individual;
use crate::error::StateError;

/// Fitness statistics for one population snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; `0` is the initial population.
    pub generation: usize,

    /// Number of individuals in the population.
    pub population_size: usize,

    /// Number of individuals (re-)evaluated in this generation.
    pub evaluated: usize,

    /// Lowest fitness in the population.
    pub min: f64,

    /// Highest fitness in the population.
    pub max: f64,

    /// Mean fitness.
    pub mean: f64,

    /// Population standard deviation of fitness.
    pub std: f64,
}

impl GenerationStats {
    /// Computes statistics over a fully evaluated population.
    pub fn from_population(
        generation: usize,
        evaluated: usize,
        population: &[Individual],
    ) -> Result<Self, StateError> {
        let fitnesses = population
            .iter()
            .enumerate()
            .map(|(index, ind)| ind.fitness().ok_or(StateError::Unevaluated { index }))
            .collect::<Result<Vec<f64>, _>>()?;
        Self::from_fitnesses(generation, evaluated, &fitnesses)
    }

    /// Computes statistics over raw fitness values.
    ///
    /// The standard deviation is `sqrt(E[x²] − E[x]²)`; the radicand is
    /// clamped at zero since cancellation can push it slightly negative.
    pub fn from_fitnesses(
        generation: usize,
        evaluated: usize,
        fitnesses: &[f64],
    ) -> Result<Self, StateError> {
        if fitnesses.is_empty() {
            return Err(StateError::EmptyPopulation);
        }

        let n = fitnesses.len() as f64;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        for &f in fitnesses {
            min = min.min(f);
            max = max.max(f);
            sum += f;
            sum_sq += f * f;
        }
        let mean = sum / n;
        let std = (sum_sq / n - mean * mean).max(0.0).sqrt();

        Ok(Self {
            generation,
            population_size: fitnesses.len(),
            evaluated,
            min,
            max,
            mean,
            std,
        })
    }
}
