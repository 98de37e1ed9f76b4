//! Genetic Algorithm framework for bit-string genomes.
//!
//! Users define their problem by implementing [`GaProblem`], which only
//! needs a genome length and a fitness function; initialization,
//! crossover and mutation have standard defaults.
//!
//! # Core Types
//!
//! - [`Individual`]: A bit-string genome with an optional cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//! - [`Objective`]: Optimization direction
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, selection)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with per-generation statistics
//!
//! # Submodules
//!
//! - [`engine`]: The individual steps of a generation as free functions
//! - [`operators`]: Two-point crossover and bit-flip mutation on raw genomes
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Bäck, Fogel & Michalewicz (2000), *Evolutionary Computation 1: Basic Algorithms and Operators*

mod config;
pub mod engine;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::{select_best, Selection};
pub use stats::GenerationStats;
pub use types::{GaProblem, Individual, Objective};
