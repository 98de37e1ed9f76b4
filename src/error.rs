//! Error types for the GA engine.
//!
//! Two families exist: [`ConfigurationError`] for parameters that can never
//! produce a valid run, and [`StateError`] for operations invoked on a
//! population that is not ready for them. Both surface through [`GaError`].

/// Invalid parameters passed to the engine or one of its operators.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("population_size must be at least 1")]
    PopulationSize,
    #[error("max_generations must be at least 1")]
    Generations,
    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("genome lengths differ: {left} vs {right}")]
    GenomeLengthMismatch { left: usize, right: usize },
    #[error("genome_length must be at least 1")]
    GenomeLength,
    #[error("tournament size must be at least 1")]
    TournamentSize,
}

/// An operation was invoked on a population in the wrong state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("individual at index {index} has no fitness; evaluate the population first")]
    Unevaluated { index: usize },
    #[error("cannot select from an empty population")]
    EmptyPopulation,
}

/// Top-level error returned by every fallible API in this crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("ConfigurationError: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("StateError: {0}")]
    State(#[from] StateError),
}

/// Checks that `value` is a probability, naming the offending parameter otherwise.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigurationError::Probability { name, value })
    }
}
