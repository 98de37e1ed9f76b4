//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use super::types::Objective;
use crate::error::{check_probability, ConfigurationError};

/// Configuration for the Genetic Algorithm.
///
/// Setters store values exactly as given; [`validate`](GaConfig::validate)
/// rejects anything out of range. The runner validates before drawing a
/// single random number.
///
/// # Defaults
///
/// The defaults reproduce the classic OneMax tutorial setup.
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 300);
/// assert_eq!(config.max_generations, 40);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_mutation_rate(0.1)
///     .with_seed(64);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Number of generations to run. There is no early stop.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Optimization direction.
    pub objective: Objective,

    /// Probability of applying crossover to an adjacent pair of offspring (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-bit flip probability used by mutation (0.0–1.0).
    pub flip_probability: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation draws no
    /// random numbers, so results do not depend on this flag.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            max_generations: 40,
            selection: Selection::default(),
            objective: Objective::Maximize,
            crossover_rate: 0.5,
            mutation_rate: 0.2,
            flip_probability: 0.05,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the optimization direction.
    pub fn with_objective(mut self, objective: Objective) -> Self {
        self.objective = objective;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-individual mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-bit flip probability.
    pub fn with_flip_probability(mut self, p: f64) -> Self {
        self.flip_probability = p;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::PopulationSize);
        }
        if self.max_generations == 0 {
            return Err(ConfigurationError::Generations);
        }
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("flip_probability", self.flip_probability)?;
        self.selection.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 300);
        assert_eq!(config.max_generations, 40);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert_eq!(config.objective, Objective::Maximize);
        assert!((config.crossover_rate - 0.5).abs() < 1e-10);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!((config.flip_probability - 0.05).abs() < 1e-10);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(1000)
            .with_selection(Selection::Roulette)
            .with_objective(Objective::Minimize)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_flip_probability(0.01)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.selection, Selection::Roulette);
        assert_eq!(config.objective, Objective::Minimize);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert!((config.flip_probability - 0.01).abs() < 1e-10);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default()
            .with_population_size(1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(ConfigurationError::PopulationSize));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert_eq!(config.validate(), Err(ConfigurationError::Generations));
    }

    #[test]
    fn test_rates_are_not_clamped() {
        let config = GaConfig::default().with_crossover_rate(1.5);
        assert!((config.crossover_rate - 1.5).abs() < 1e-10);
        assert_eq!(
            config.validate(),
            Err(ConfigurationError::Probability {
                name: "crossover_rate",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_validate_each_probability() {
        assert!(GaConfig::default()
            .with_mutation_rate(-0.1)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_flip_probability(2.0)
            .validate()
            .is_err());
        assert!(GaConfig::default()
            .with_crossover_rate(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_probability_bounds_inclusive() {
        let config = GaConfig::default()
            .with_crossover_rate(0.0)
            .with_mutation_rate(1.0)
            .with_flip_probability(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_tournament_size() {
        let config = GaConfig::default().with_tournament_size(5);
        assert_eq!(config.selection, Selection::Tournament(5));
        let config = GaConfig::default().with_tournament_size(0);
        assert_eq!(config.validate(), Err(ConfigurationError::TournamentSize));
    }
}
