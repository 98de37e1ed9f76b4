//! Seedable genetic algorithm engine for bit-string genomes.
//!
//! Provides the generic GA loop — population initialization, fitness
//! evaluation, tournament selection, two-point crossover, bit-flip
//! mutation, replacement and per-generation statistics — with every
//! operator pluggable through the [`ga::GaProblem`] trait.
//!
//! - [`ga`]: the engine, its configuration and operators
//! - [`onemax`]: the OneMax benchmark problem
//! - [`random`]: seedable random sources for reproducible runs
//! - [`error`]: configuration and state errors
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner};
//! use u_bitga::onemax::OneMax;
//!
//! let result = GaRunner::run(&OneMax::new(16), &GaConfig::default().with_seed(64)).unwrap();
//! assert_eq!(result.history.len(), 41);
//! ```
//!
//! # Architecture
//!
//! All randomness flows through one explicitly passed generator, so a run
//! is fully determined by its configuration and seed. Fitness evaluation
//! can optionally run on the rayon pool (`parallel` feature) without
//! affecting results.

pub mod error;
pub mod ga;
pub mod onemax;
pub mod random;

pub use error::{ConfigurationError, GaError, StateError};
