//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! re-evaluation → replacement, for a fixed number of generations.

use super::config::GaConfig;
use super::engine::{crossover_with, evaluate, initialize_population, mutate_with};
use super::selection::select_best;
use super::stats::GenerationStats;
use super::types::{GaProblem, Individual};
use crate::error::{ConfigurationError, GaError};
use crate::random::rng_from_option;
use rand::Rng;
use tracing::instrument;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest individual of the final population.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// The fittest individual seen in any generation.
    ///
    /// Selection is not elitist, so this can beat `best`.
    pub best_ever: Individual,

    /// Number of generations executed (excluding the initial population).
    pub generations: usize,

    /// Total number of fitness evaluations, initial population included.
    pub evaluations: usize,

    /// Statistics of the initial population followed by one entry per generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner};
/// use u_bitga::onemax::OneMax;
///
/// let problem = OneMax::new(20);
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(5)
///     .with_seed(64);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.best_fitness <= 20.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// The configuration and the problem's genome length are validated
    /// before any random number is drawn.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            max_generations = config.max_generations,
            genome_length = problem.genome_length(),
            seed = ?config.seed,
        )
    )]
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, GaError> {
        config.validate()?;
        let genome_length = problem.genome_length();
        if genome_length == 0 {
            return Err(ConfigurationError::GenomeLength.into());
        }

        let mut rng = rng_from_option(config.seed);

        // 1. Initialize population
        let mut population = initialize_population(config.population_size, || {
            Individual::new(problem.create_genome(&mut rng))
        })?;
        if let Some(ind) = population.iter().find(|ind| ind.len() != genome_length) {
            return Err(ConfigurationError::GenomeLengthMismatch {
                left: genome_length,
                right: ind.len(),
            }
            .into());
        }

        tracing::info!(
            population_size = config.population_size,
            max_generations = config.max_generations,
            "Start of evolution"
        );

        // 2. Evaluate initial population
        let evaluated = evaluate_population(problem, &mut population, config.parallel);
        let mut evaluations = evaluated;

        let stats = GenerationStats::from_population(0, evaluated, &population)?;
        report(problem, &stats);
        let mut history = Vec::with_capacity(config.max_generations + 1);
        history.push(stats);

        // 3. Track best
        let (best, mut best_ever_fitness) = select_best(&population, config.objective)?;
        let mut best_ever = best.clone();

        // 4. Evolutionary loop
        for generation in 1..=config.max_generations {
            // Selection returns owned copies, so variation never aliases the parents.
            let mut offspring = config.selection.select(
                &population,
                population.len(),
                config.objective,
                &mut rng,
            )?;

            vary(problem, &mut offspring, config, &mut rng)?;

            let evaluated = evaluate_population(problem, &mut offspring, config.parallel);
            evaluations += evaluated;

            population = offspring;

            let stats = GenerationStats::from_population(generation, evaluated, &population)?;
            report(problem, &stats);
            history.push(stats);

            let (gen_best, gen_best_fitness) = select_best(&population, config.objective)?;
            if config.objective.is_better(gen_best_fitness, best_ever_fitness) {
                best_ever = gen_best.clone();
                best_ever_fitness = gen_best_fitness;
            }
        }

        let (best, best_fitness) = select_best(&population, config.objective)?;
        tracing::info!(best_fitness, evaluations, "End of (successful) evolution");

        Ok(GaResult {
            best: best.clone(),
            best_fitness,
            best_ever,
            generations: config.max_generations,
            evaluations,
            history,
        })
    }
}

/// Crossover on adjacent pairs, then mutation on every offspring.
///
/// An odd trailing offspring takes no part in crossover.
fn vary<P: GaProblem, R: Rng>(
    problem: &P,
    offspring: &mut [Individual],
    config: &GaConfig,
    rng: &mut R,
) -> Result<(), GaError> {
    for pair in offspring.chunks_exact_mut(2) {
        let (left, right) = pair.split_at_mut(1);
        crossover_with(
            &mut left[0],
            &mut right[0],
            config.crossover_rate,
            rng,
            |a, b, rng| problem.crossover(a, b, rng),
        )?;
    }

    for ind in offspring.iter_mut() {
        if rng.random_bool(config.mutation_rate) {
            mutate_with(ind, config.flip_probability, rng, |genome, p, rng| {
                problem.mutate(genome, p, rng)
            })?;
        }
    }
    Ok(())
}

/// Evaluate every unevaluated individual, in parallel when enabled.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [Individual],
    parallel: bool,
) -> usize {
    if parallel {
        super::engine::evaluate_parallel(population, |genome| problem.evaluate(genome))
    } else {
        evaluate(population, |genome| problem.evaluate(genome))
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [Individual],
    _parallel: bool,
) -> usize {
    evaluate(population, |genome| problem.evaluate(genome))
}

fn report<P: GaProblem>(problem: &P, stats: &GenerationStats) {
    tracing::info!(
        generation = stats.generation,
        population_size = stats.population_size,
        evaluated = stats.evaluated,
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        std_dev = stats.std,
        "Generation complete"
    );
    problem.on_generation(stats);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Objective, Selection};
    use crate::onemax::OneMax;
    use crate::random::create_rng;
    use std::sync::Mutex;

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(50)
            .with_max_generations(30)
            .with_seed(42)
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMax::new(20);
        let result = GaRunner::run(&problem, &small_config()).unwrap();

        let initial = result.history[0].max;
        assert!(
            result.best_ever.fitness().unwrap() >= initial,
            "best ever should be at least the initial max"
        );
        assert!(
            result.best_fitness >= 15.0,
            "expected fitness >= 15 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_history_length_and_indices() {
        let problem = OneMax::new(10);
        let result = GaRunner::run(&problem, &small_config()).unwrap();

        assert_eq!(result.generations, 30);
        assert_eq!(result.history.len(), 31);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
        }
        assert_eq!(result.history[0].evaluated, 50);
    }

    #[test]
    fn test_evaluation_count_matches_history() {
        let problem = OneMax::new(10);
        let result = GaRunner::run(&problem, &small_config()).unwrap();
        let sum: usize = result.history.iter().map(|s| s.evaluated).sum();
        assert_eq!(result.evaluations, sum);
        for stats in &result.history[1..] {
            assert!(stats.evaluated <= 50);
        }
    }

    #[test]
    fn test_best_is_final_population_max() {
        let problem = OneMax::new(30);
        let result = GaRunner::run(&problem, &small_config()).unwrap();
        let last = result.history.last().unwrap();
        assert_eq!(result.best_fitness, last.max);
        assert_eq!(result.best.fitness(), Some(last.max));
        assert_eq!(problem.evaluate(result.best.genome()), result.best_fitness);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let problem = OneMax::new(25);
        let a = GaRunner::run(&problem, &small_config()).unwrap();
        let b = GaRunner::run(&problem, &small_config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
        assert_eq!(a.evaluations, b.evaluations);
    }

    #[test]
    fn test_no_variation_evaluates_nothing() {
        let problem = OneMax::new(10);
        let config = small_config()
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.evaluations, 50);
        assert!(result.history[1..].iter().all(|s| s.evaluated == 0));
    }

    #[test]
    fn test_minimize_objective() {
        let problem = OneMax::new(20);
        let config = small_config().with_objective(Objective::Minimize);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert!(
            result.best_fitness <= 5.0,
            "expected fitness <= 5 when minimizing ones, got {}",
            result.best_fitness
        );
        assert_eq!(result.best_fitness, result.history.last().unwrap().min);
    }

    #[test]
    fn test_all_selection_strategies() {
        let problem = OneMax::new(10);

        for selection in [
            Selection::Tournament(3),
            Selection::Roulette,
            Selection::Random,
            Selection::Best,
        ] {
            let config = small_config().with_selection(selection);
            let result = GaRunner::run(&problem, &config).unwrap();
            assert_eq!(result.history.len(), 31, "selection {selection:?}");
            assert!(
                (0.0..=10.0).contains(&result.best_fitness),
                "selection {selection:?} gave fitness {}",
                result.best_fitness
            );
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = OneMax::new(10);
        let config = small_config().with_mutation_rate(1.5);
        assert!(matches!(
            GaRunner::run(&problem, &config),
            Err(GaError::Configuration(ConfigurationError::Probability {
                name: "mutation_rate",
                ..
            }))
        ));
    }

    #[test]
    fn test_zero_length_genome_rejected() {
        let problem = OneMax::new(0);
        assert_eq!(
            GaRunner::run(&problem, &small_config()).unwrap_err(),
            GaError::Configuration(ConfigurationError::GenomeLength)
        );
    }

    #[test]
    fn test_single_bit_genome_runs() {
        let problem = OneMax::new(1);
        let config = small_config().with_crossover_rate(1.0);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert!(result.best.len() == 1);
    }

    #[test]
    fn test_odd_population_size() {
        let problem = OneMax::new(8);
        let config = small_config().with_population_size(7);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert!(result.history.iter().skip(1).all(|s| s.evaluated <= 7));
    }

    #[test]
    fn test_population_size_constant_across_generations() {
        let problem = OneMax::new(12);
        for size in [1, 7, 50] {
            let config = small_config()
                .with_population_size(size)
                .with_max_generations(8);
            let result = GaRunner::run(&problem, &config).unwrap();
            assert_eq!(result.history.len(), 9);
            for stats in &result.history {
                assert_eq!(
                    stats.population_size, size,
                    "generation {} had {} individuals",
                    stats.generation, stats.population_size
                );
            }
        }
    }

    #[test]
    fn test_vary_without_rates_keeps_selection() {
        let problem = OneMax::new(16);
        let config = small_config()
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0);
        let mut rng = create_rng(7);

        let mut population = initialize_population(20, || {
            Individual::new(problem.create_genome(&mut rng))
        })
        .unwrap();
        evaluate(&mut population, |genome| problem.evaluate(genome));

        let selected = config
            .selection
            .select(&population, population.len(), config.objective, &mut rng)
            .unwrap();
        let mut offspring = selected.clone();
        vary(&problem, &mut offspring, &config, &mut rng).unwrap();

        assert_eq!(offspring.len(), selected.len());
        for (child, parent) in offspring.iter().zip(&selected) {
            assert_eq!(child.genome(), parent.genome());
            assert_eq!(child.fitness(), parent.fitness());
            assert!(child.is_evaluated());
        }
    }

    // ---- Custom problem: hooks and wrong-length initializer ----

    struct Recording {
        seen: Mutex<Vec<usize>>,
    }

    impl GaProblem for Recording {
        fn genome_length(&self) -> usize {
            4
        }

        fn evaluate(&self, genome: &[bool]) -> f64 {
            genome.iter().filter(|&&b| b).count() as f64
        }

        fn on_generation(&self, stats: &GenerationStats) {
            self.seen.lock().unwrap().push(stats.generation);
        }
    }

    #[test]
    fn test_on_generation_called_for_every_generation() {
        let problem = Recording {
            seen: Mutex::new(Vec::new()),
        };
        let config = small_config().with_max_generations(5);
        GaRunner::run(&problem, &config).unwrap();
        assert_eq!(*problem.seen.lock().unwrap(), vec![0, 1, 2, 3, 4, 5]);
    }

    struct WrongLength;

    impl GaProblem for WrongLength {
        fn genome_length(&self) -> usize {
            4
        }

        fn create_genome<R: Rng>(&self, _rng: &mut R) -> Vec<bool> {
            vec![true; 3]
        }

        fn evaluate(&self, _genome: &[bool]) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_wrong_length_initializer_rejected() {
        assert_eq!(
            GaRunner::run(&WrongLength, &small_config()).unwrap_err(),
            GaError::Configuration(ConfigurationError::GenomeLengthMismatch { left: 4, right: 3 })
        );
    }
}
