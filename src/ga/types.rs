//! Core type definitions for the GA engine.
//!
//! [`Individual`] carries a bit-string genome and its cached fitness,
//! [`Objective`] fixes the optimization direction, and [`GaProblem`] is the
//! contract between the generic engine and a concrete problem.

use super::operators::{flip_bit_mutation, random_genome, two_point_crossover};
use super::stats::GenerationStats;
use rand::Rng;
use std::fmt;

/// Optimization direction for fitness values.
///
/// All comparisons between fitness values in the engine go through
/// [`Objective::is_better`], so selection and reporting work for either
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Higher fitness is better (OneMax).
    #[default]
    Maximize,
    /// Lower fitness is better.
    Minimize,
}

impl Objective {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }

    /// Orders two fitness values so that the better one compares as `Less`.
    ///
    /// Incomparable values (NaN) are treated as equal.
    pub fn cmp_best_first(self, a: f64, b: f64) -> std::cmp::Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal);
        match self {
            Objective::Maximize => ord.reverse(),
            Objective::Minimize => ord,
        }
    }
}

/// A candidate solution: a fixed-length bit string plus cached fitness.
///
/// Fitness is `None` until the individual is evaluated. Any change to the
/// genome through [`genome_mut`](Individual::genome_mut) or one of the
/// engine's variation operators resets it to `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    pub(crate) genome: Vec<bool>,
    pub(crate) fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual from a genome.
    pub fn new(genome: Vec<bool>) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    /// The genome bits.
    pub fn genome(&self) -> &[bool] {
        &self.genome
    }

    /// Mutable access to the genome. Invalidates the cached fitness.
    pub fn genome_mut(&mut self) -> &mut [bool] {
        self.fitness = None;
        &mut self.genome
    }

    /// Consumes the individual, returning its genome.
    pub fn into_genome(self) -> Vec<bool> {
        self.genome
    }

    /// Genome length in bits.
    pub fn len(&self) -> usize {
        self.genome.len()
    }

    /// Returns `true` for a zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.genome.is_empty()
    }

    /// The cached fitness, if the individual has been evaluated.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Returns `true` if the cached fitness is valid.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Stores a fitness value.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Marks the individual for re-evaluation.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.genome {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        match self.fitness {
            Some(fitness) => write!(f, " ({fitness})"),
            None => f.write_str(" (unevaluated)"),
        }
    }
}

/// Defines a bit-string GA problem.
///
/// Only [`genome_length`](GaProblem::genome_length) and
/// [`evaluate`](GaProblem::evaluate) are required. The defaults give the
/// classic configuration: uniform random initialization, two-point
/// crossover and independent bit-flip mutation.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// Length of every genome this problem works with.
    fn genome_length(&self) -> usize;

    /// Creates a random genome of [`genome_length`](GaProblem::genome_length) bits.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        random_genome(self.genome_length(), rng)
    }

    /// Computes the fitness of a genome.
    ///
    /// Must be a pure function of the genome.
    fn evaluate(&self, genome: &[bool]) -> f64;

    /// Recombines two genomes in place.
    ///
    /// Returns `true` if the genomes were modified. The engine also compares
    /// the genomes before and after, so a wrong `false` never keeps a stale
    /// fitness.
    fn crossover<R: Rng>(&self, a: &mut [bool], b: &mut [bool], rng: &mut R) -> bool {
        two_point_crossover(a, b, rng)
    }

    /// Perturbs a genome in place, flipping each bit with `flip_probability`.
    ///
    /// Returns `true` if any bit changed. As with [`GaProblem::crossover`],
    /// an actual change unsets fitness regardless of the returned value.
    fn mutate<R: Rng>(&self, genome: &mut [bool], flip_probability: f64, rng: &mut R) -> bool {
        flip_bit_mutation(genome, flip_probability, rng)
    }

    /// Called after every generation (including the initial population)
    /// with that generation's statistics. The default is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
