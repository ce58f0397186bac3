use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    breeding::Crossover,
    chromosome::{Chromosome, ChromosomeFactory},
    error::{GeneticError, OptionExt, Result},
    mutation::{AdaptiveRate, Mutation},
    population::Population,
    rng::RandomAllocator,
    selection::{ParentSelection, SurvivorSelection},
    termination::Termination,
    workers::WorkerPool,
};

/// Summary statistics of one evaluated generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationRecord {
    /// Zero-based index of the generation.
    pub generation: usize,
    /// Mean fitness over the generation.
    pub mean: f64,
    /// Best fitness in the generation.
    pub max: i64,
}

impl GenerationRecord {
    fn of<C: Chromosome>(generation: usize, population: &Population<C>) -> Result<Self> {
        let max = population
            .max()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?
            .fitness();
        Ok(Self {
            generation,
            mean: population.average(),
            max,
        })
    }
}

impl fmt::Display for GenerationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation {}: mean {:.2}, max {}",
            self.generation, self.mean, self.max
        )
    }
}

/// Represents the result of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionResult<C: Chromosome> {
    /// The best chromosome seen during the run, simplified.
    pub chromosome: C,
    /// The fitness of `chromosome`.
    pub fitness: i64,
    /// The number of generations bred before termination fired.
    pub generations: usize,
    /// One record per evaluated generation, the initial one included.
    pub history: Vec<GenerationRecord>,
}

/// Drives a population through generations until its termination strategy fires.
///
/// Built through [`EvolutionLauncherBuilder`](super::builder::EvolutionLauncherBuilder).
pub struct EvolutionLauncher<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    pub(super) factory: F,
    pub(super) selection: S,
    pub(super) crossover: X,
    pub(super) mutation: M,
    pub(super) termination: T,
    pub(super) survivor: Option<Box<dyn SurvivorSelection<C>>>,
    pub(super) allocator: RandomAllocator,
    pub(super) workers: WorkerPool,
    pub(super) options: EvolutionOptions,
}

impl<C, F, S, X, M, T> EvolutionLauncher<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    /// The options the launcher was built with.
    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    /// Returns the termination strategy.
    ///
    /// # Returns
    ///
    /// The strategy in its current state; after a run, counters and streaks
    /// reflect the checks that run made.
    pub fn termination(&self) -> &T {
        &self.termination
    }

    /// Evolves a population until the termination strategy fires.
    ///
    /// The initial population is spawned from the factory with lane 0. Each
    /// generation is evaluated (on the worker pool), recorded, and checked against
    /// the termination strategy; if the run continues, the next generation is bred
    /// and, when a survivor selection is configured, merged with the current one.
    ///
    /// The best chromosome is tracked across all generations and replaced only by
    /// a strictly fitter one. If the mutation has an adaptive rate, the rate is
    /// reset whenever the best improves and raised otherwise.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The initial or any later population is empty
    /// - The crossover fails to produce offspring
    /// - The random allocator has fewer lanes than the population
    pub fn run(&mut self) -> Result<EvolutionResult<C>> {
        let Self {
            ref factory,
            ref selection,
            ref crossover,
            ref mutation,
            ref mut termination,
            ref survivor,
            ref mut allocator,
            ref workers,
            ref options,
        } = *self;

        debug!(
            family = %factory.family(),
            selection = %selection.name(),
            crossover = %crossover.name(),
            mutation = %mutation.name(),
            termination = %termination.name(),
            population_size = options.get_population_size(),
            workers = workers.workers(),
            "Starting evolution"
        );

        let rate = mutation.adaptive_rate();
        if let Some(rate) = rate {
            rate.reset_rate();
        }

        let mut current =
            Population::spawn(options.get_population_size(), factory, allocator.lane(0));
        let mut best = Arc::clone(
            current
                .max()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?,
        );

        let mut history = Vec::new();
        let mut generation = 0;
        loop {
            current.prewarm_fitness(workers);

            let record = GenerationRecord::of(generation, &current)?;
            log_generation(options.get_log_level(), &record, best.as_ref(), rate);
            history.push(record);

            if termination.should_stop(&current, allocator.lane(0)) {
                break;
            }

            let candidate = current.next_generation(
                selection,
                crossover,
                mutation,
                options.get_num_parents(),
                workers,
                allocator,
            )?;

            let next = match survivor {
                Some(survivor) => {
                    candidate.prewarm_fitness(workers);
                    survivor.select_survivors(&current, &candidate, allocator.lane(0))
                }
                None => candidate,
            };

            let contender = next
                .max()
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
            if contender.fitness() > best.fitness() {
                best = Arc::clone(contender);
                if let Some(rate) = rate {
                    rate.reset_rate();
                }
            } else if let Some(rate) = rate {
                rate.increase_rate();
            }

            current = next;
            generation += 1;
        }

        drop(current);
        let mut chromosome = Arc::try_unwrap(best).unwrap_or_else(|shared| C::clone(&shared));
        chromosome.simplify();
        let fitness = chromosome.fitness();

        info!(generations = generation, fitness, "Evolution finished");

        Ok(EvolutionResult {
            chromosome,
            fitness,
            generations: generation,
            history,
        })
    }
}

fn log_generation<C: Chromosome>(
    level: LogLevel,
    record: &GenerationRecord,
    best: &C,
    rate: Option<&dyn AdaptiveRate>,
) {
    match level {
        LogLevel::None => {}
        LogLevel::Minimal => {
            info!(
                generation = record.generation,
                mean = record.mean,
                max = record.max,
                "{}",
                record
            )
        }
        LogLevel::Verbose => {
            info!(
                generation = record.generation,
                mean = record.mean,
                max = record.max,
                "{}",
                record
            );
            debug!(
                generation = record.generation,
                best = %best,
                rate = ?rate.map(|r| r.current_rate()),
                "Best so far"
            );
        }
    }
}

impl<C, F, S, X, M, T> fmt::Debug for EvolutionLauncher<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvolutionLauncher")
            .field("family", &self.factory.family())
            .field("selection", &self.selection.name())
            .field("crossover", &self.crossover.name())
            .field("mutation", &self.mutation.name())
            .field("termination", &self.termination.name())
            .field("survivor", &self.survivor.as_ref().map(|s| s.name()))
            .field("allocator", &self.allocator)
            .field("options", &self.options)
            .finish()
    }
}
