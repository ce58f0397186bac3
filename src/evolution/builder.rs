use crate::{
    breeding::Crossover,
    chromosome::{Chromosome, ChromosomeFactory},
    error::{GeneticError, Result},
    mutation::Mutation,
    rng::RandomAllocator,
    selection::{ParentSelection, SurvivorSelection},
    termination::Termination,
    workers::WorkerPool,
};

use super::{EvolutionLauncher, EvolutionOptions};

/// Assembles an [`EvolutionLauncher`] from its strategies.
///
/// The factory, parent selection, crossover, mutation and termination are
/// required. Survivor selection is optional; without it each bred generation
/// simply replaces the previous one. Without an explicit allocator, one `StdRng`
/// lane per population slot is seeded from the options' seed.
pub struct EvolutionLauncherBuilder<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    options: EvolutionOptions,
    factory: Option<F>,
    selection: Option<S>,
    crossover: Option<X>,
    mutation: Option<M>,
    termination: Option<T>,
    survivor: Option<Box<dyn SurvivorSelection<C>>>,
    allocator: Option<RandomAllocator>,
}

impl<C, F, S, X, M, T> EvolutionLauncherBuilder<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    pub fn new() -> Self {
        Self {
            options: EvolutionOptions::default(),
            factory: None,
            selection: None,
            crossover: None,
            mutation: None,
            termination: None,
            survivor: None,
            allocator: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_factory(mut self, factory: F) -> Self {
        self.factory = Some(factory);
        self
    }

    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_crossover(mut self, crossover: X) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: M) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn with_termination(mut self, termination: T) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn with_survivor_selection<V>(mut self, survivor: V) -> Self
    where
        V: SurvivorSelection<C> + 'static,
    {
        self.survivor = Some(Box::new(survivor));
        self
    }

    /// Uses `allocator` instead of the default seeded lanes.
    pub fn with_allocator(mut self, allocator: RandomAllocator) -> Self {
        self.allocator = Some(allocator);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<C, F, S, X, M, T>> {
        let factory = self.factory.ok_or_else(|| {
            GeneticError::Configuration("Chromosome factory not specified".to_string())
        })?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover = self.crossover.ok_or_else(|| {
            GeneticError::Configuration("Crossover strategy not specified".to_string())
        })?;

        let mutation = self.mutation.ok_or_else(|| {
            GeneticError::Configuration("Mutation strategy not specified".to_string())
        })?;

        let termination = self.termination.ok_or_else(|| {
            GeneticError::Configuration("Termination strategy not specified".to_string())
        })?;

        let population_size = self.options.get_population_size();
        if population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        let num_parents = self.options.get_num_parents();
        if !(1..=2).contains(&num_parents) {
            return Err(GeneticError::Configuration(format!(
                "Number of parents must be 1 or 2, got {}",
                num_parents
            )));
        }

        let allocator = self
            .allocator
            .unwrap_or_else(|| RandomAllocator::seeded(population_size, self.options.get_seed()));
        if allocator.len() < population_size {
            return Err(GeneticError::Configuration(format!(
                "Random allocator has {} lanes but the population has {} slots",
                allocator.len(),
                population_size
            )));
        }

        let workers = WorkerPool::new(self.options.get_workers())?;

        Ok(EvolutionLauncher {
            factory,
            selection,
            crossover,
            mutation,
            termination,
            survivor: self.survivor,
            allocator,
            workers,
            options: self.options,
        })
    }
}

impl<C, F, S, X, M, T> Default for EvolutionLauncherBuilder<C, F, S, X, M, T>
where
    C: Chromosome,
    F: ChromosomeFactory<C>,
    S: ParentSelection<C>,
    X: Crossover<C>,
    M: Mutation<C>,
    T: Termination<C>,
{
    fn default() -> Self {
        Self::new()
    }
}
