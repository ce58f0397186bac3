//! # Population
//!
//! A `Population` is the ordered set of chromosomes making up one generation.
//! It is built once and replaced wholesale by [`Population::next_generation`];
//! the previous generation stays readable until survivor selection is done with it.
//!
//! ## Generation transition
//!
//! `next_generation` first prewarms every member's fitness on the worker pool and
//! waits for all of it to finish. Only then do the workers start synthesizing
//! offspring, so during synthesis every fitness read hits a filled memo. Each
//! output slot `i` (all but the last) is produced with the random lane `i`:
//! select parents, cross them over, mutate the child. The last slot is always the
//! mutated best member of the incoming generation.

use std::sync::Arc;

use rand::RngCore;
use rayon::prelude::*;

use crate::{
    breeding::Crossover,
    chromosome::{Chromosome, ChromosomeFactory},
    error::{GeneticError, OptionExt, Result},
    mutation::Mutation,
    rng::{Lane, RandomAllocator},
    selection::ParentSelection,
    workers::WorkerPool,
};

/// One generation of shared chromosomes.
///
/// Members are held behind `Arc` so that parents, offspring and survivor
/// selection can refer to the same chromosome without copying it.
#[derive(Debug, Clone)]
pub struct Population<C: Chromosome> {
    members: Vec<Arc<C>>,
    sorted: bool,
}

impl<C: Chromosome> Population<C> {
    /// Wraps already shared chromosomes into a population.
    ///
    /// # Arguments
    ///
    /// * `members` - The chromosomes of the generation, in slot order.
    pub fn new(members: Vec<Arc<C>>) -> Self {
        Self {
            members,
            sorted: false,
        }
    }

    /// Builds a population from owned chromosomes, sharing each one behind an `Arc`.
    pub fn from_chromosomes<I>(chromosomes: I) -> Self
    where
        I: IntoIterator<Item = C>,
    {
        Self::new(chromosomes.into_iter().map(Arc::new).collect())
    }

    /// Builds `n` chromosomes one after another from `factory`, all drawing from `rng`.
    ///
    /// # Arguments
    ///
    /// * `n` - The number of chromosomes to create.
    /// * `factory` - The source of new chromosomes.
    /// * `rng` - The random generator every chromosome is drawn from, in order.
    ///
    /// # Returns
    ///
    /// A population of exactly `n` members.
    pub fn spawn<F>(n: usize, factory: &F, rng: &mut dyn RngCore) -> Self
    where
        F: ChromosomeFactory<C> + ?Sized,
    {
        Self::new((0..n).map(|_| Arc::new(factory.spawn(rng))).collect())
    }

    /// Returns the members in slot order.
    ///
    /// # Returns
    ///
    /// A slice of shared chromosomes. Slot `i` of a bred generation was
    /// produced with random lane `i`.
    pub fn members(&self) -> &[Arc<C>] {
        &self.members
    }

    /// Consumes the population and hands back its members.
    pub fn into_members(self) -> Vec<Arc<C>> {
        self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<C>> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The least fit member; the first one wins ties.
    pub fn min(&self) -> Option<&Arc<C>> {
        self.members.iter().reduce(|worst, candidate| {
            if candidate.fitness() < worst.fitness() {
                candidate
            } else {
                worst
            }
        })
    }

    /// The fittest member; the first one wins ties.
    pub fn max(&self) -> Option<&Arc<C>> {
        self.members.iter().reduce(|best, candidate| {
            if candidate.fitness() > best.fitness() {
                candidate
            } else {
                best
            }
        })
    }

    /// Mean fitness, or `0.0` for an empty population.
    pub fn average(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        let sum: i64 = self.members.iter().map(|c| c.fitness()).sum();
        sum as f64 / self.members.len() as f64
    }

    /// Orders members by ascending fitness. Meant for inspection only; the
    /// generation transition never depends on member order being sorted.
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        self.members.sort_by_key(|c| c.fitness());
        self.sorted = true;
    }

    /// Whether [`Population::sort`] has run since the population was built.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Computes and caches the fitness of every member.
    ///
    /// Runs on the calling thread for a sequential pool. Otherwise the members are
    /// spread over the pool's workers and the call returns only once all of them
    /// are evaluated.
    pub fn prewarm_fitness(&self, workers: &WorkerPool) {
        match workers.pool() {
            Some(pool) => pool.install(|| {
                self.members.par_iter().for_each(|c| {
                    c.fitness();
                })
            }),
            None => self.members.iter().for_each(|c| {
                c.fitness();
            }),
        }
    }

    /// Produces the next generation, the same size as this one.
    ///
    /// Prewarms fitness first; no offspring work starts before every member's
    /// fitness is cached. Slot `i < len - 1` is bred with `allocator.lane(i)`, so
    /// the output depends only on the lanes' state, not on how work was scheduled.
    /// The last slot holds `mutation` applied to the current best member, using lane 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty, if the allocator has fewer
    /// lanes than the population has slots, or if the crossover yields no child.
    pub fn next_generation<S, X, M>(
        &self,
        selection: &S,
        crossover: &X,
        mutation: &M,
        num_parents: usize,
        workers: &WorkerPool,
        allocator: &mut RandomAllocator,
    ) -> Result<Population<C>>
    where
        S: ParentSelection<C> + ?Sized,
        X: Crossover<C> + ?Sized,
        M: Mutation<C> + ?Sized,
    {
        let size = self.len();
        if size == 0 {
            return Err(GeneticError::EmptyPopulation);
        }
        if allocator.len() < size {
            return Err(GeneticError::Configuration(format!(
                "Random allocator has {} lanes but the population has {} slots",
                allocator.len(),
                size
            )));
        }

        self.prewarm_fitness(workers);

        let breed = |lane: &mut Lane| {
            self.breed_one(selection, crossover, mutation, num_parents, lane.as_mut())
        };
        let lanes = &mut allocator.lanes_mut()[..size - 1];
        let mut members = match workers.pool() {
            Some(pool) => {
                pool.install(|| lanes.par_iter_mut().map(breed).collect::<Result<Vec<_>>>())
            }
            None => lanes.iter_mut().map(breed).collect::<Result<Vec<_>>>(),
        }?;

        let best = self.max().ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        members.push(mutation.mutate(Arc::clone(best), allocator.lane(0)));

        Ok(Population::new(members))
    }

    fn breed_one<S, X, M>(
        &self,
        selection: &S,
        crossover: &X,
        mutation: &M,
        num_parents: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Arc<C>>
    where
        S: ParentSelection<C> + ?Sized,
        X: Crossover<C> + ?Sized,
        M: Mutation<C> + ?Sized,
    {
        let mut parents = Vec::with_capacity(num_parents);
        for _ in 0..num_parents {
            if let Some(idx) = selection.pick_parent(&self.members, rng) {
                parents.push(Arc::clone(&self.members[idx]));
            }
        }

        let child = crossover.reproduce(&parents, rng).ok_or_else_genetic(|| {
            GeneticError::Breeding(format!(
                "{} produced no offspring from {} parents",
                crossover.name(),
                parents.len()
            ))
        })?;

        Ok(mutation.mutate(child, rng))
    }
}

impl<C: Chromosome> From<Vec<Arc<C>>> for Population<C> {
    fn from(members: Vec<Arc<C>>) -> Self {
        Self::new(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breeding::OnePointCrossover;
    use crate::mutation::SwapMutation;
    use crate::selection::TournamentSelection;
    use crate::testing::{Genes, GenesFactory};
    use rand::{rngs::StdRng, SeedableRng};
    use std::sync::atomic::AtomicUsize;

    /// Leaves every chromosome untouched.
    #[derive(Debug)]
    struct Identity;

    impl Mutation<Genes> for Identity {
        fn mutate(&self, input: Arc<Genes>, _rng: &mut dyn RngCore) -> Arc<Genes> {
            input
        }

        fn name(&self) -> String {
            "identity".to_string()
        }
    }

    fn population(fitness: &[i64]) -> Population<Genes> {
        Population::from_chromosomes(fitness.iter().map(|f| Genes::new(vec![*f])))
    }

    #[test]
    fn test_spawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let population = Population::spawn(5, &GenesFactory { length: 3 }, &mut rng);
        assert_eq!(population.len(), 5);
        assert!(population.iter().all(|c| c.values.len() == 3));
    }

    #[test]
    fn test_spawn_is_deterministic() {
        let factory = GenesFactory { length: 4 };
        let first = Population::spawn(3, &factory, &mut StdRng::seed_from_u64(8));
        let second = Population::spawn(3, &factory, &mut StdRng::seed_from_u64(8));
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.values, b.values);
        }
    }

    #[test]
    fn test_min_max_average() {
        let population = population(&[3, 9, 1, 9, 5]);
        assert_eq!(population.min().unwrap().fitness(), 1);
        assert_eq!(population.max().unwrap().fitness(), 9);
        assert!((population.average() - 5.4).abs() < 1e-9);

        // The first of two equal maxima wins.
        assert!(Arc::ptr_eq(population.max().unwrap(), &population.members()[1]));
    }

    #[test]
    fn test_empty_population_stats() {
        let population: Population<Genes> = Population::new(Vec::new());
        assert!(population.min().is_none());
        assert!(population.max().is_none());
        assert_eq!(population.average(), 0.0);
    }

    #[test]
    fn test_sort() {
        let mut population = population(&[4, 2, 8, 6]);
        assert!(!population.is_sorted());
        population.sort();
        assert!(population.is_sorted());
        let fitness: Vec<i64> = population.iter().map(|c| c.fitness()).collect();
        assert_eq!(fitness, vec![2, 4, 6, 8]);
    }

    #[test]
    fn test_prewarm_sequential_and_parallel() {
        for workers in [1, 4] {
            let counter = Arc::new(AtomicUsize::new(0));
            let population = Population::from_chromosomes(
                (0..50).map(|i| Genes::counted(vec![i], Arc::clone(&counter))),
            );
            population.prewarm_fitness(&WorkerPool::new(workers).unwrap());

            assert!(population.iter().all(|c| c.is_memoized()));
            assert_eq!(population.members()[0].evaluations(), 50);

            // A second prewarm reads only cached values.
            population.prewarm_fitness(&WorkerPool::new(workers).unwrap());
            assert_eq!(population.members()[0].evaluations(), 50);
        }
    }

    #[test]
    fn test_next_generation_keeps_size() {
        let mut rng = StdRng::seed_from_u64(3);
        let factory = GenesFactory { length: 6 };
        let mut allocator = RandomAllocator::seeded(10, 3);

        for size in [1, 2, 7, 10] {
            let current = Population::spawn(size, &factory, &mut rng);
            let next = current
                .next_generation(
                    &TournamentSelection::new(2),
                    &OnePointCrossover,
                    &SwapMutation,
                    2,
                    &WorkerPool::sequential(),
                    &mut allocator,
                )
                .unwrap();
            assert_eq!(next.len(), size);
        }
    }

    #[test]
    fn test_elitism_slot_holds_current_best() {
        let current = population(&[5, 42, 17, 8]);
        let mut allocator = RandomAllocator::seeded(4, 11);

        let next = current
            .next_generation(
                &TournamentSelection::new(1),
                &OnePointCrossover,
                &Identity,
                2,
                &WorkerPool::sequential(),
                &mut allocator,
            )
            .unwrap();

        let last = next.members().last().unwrap();
        assert!(Arc::ptr_eq(last, current.max().unwrap()));
        assert!(next.max().unwrap().fitness() >= current.max().unwrap().fitness());
    }

    #[test]
    fn test_next_generation_is_schedule_independent() {
        let factory = GenesFactory { length: 8 };
        let current = Population::spawn(32, &factory, &mut StdRng::seed_from_u64(21));

        let run = |workers: usize| {
            let mut allocator = RandomAllocator::seeded(32, 77);
            current
                .next_generation(
                    &TournamentSelection::new(3),
                    &OnePointCrossover,
                    &SwapMutation,
                    2,
                    &WorkerPool::new(workers).unwrap(),
                    &mut allocator,
                )
                .unwrap()
        };

        let sequential = run(1);
        let parallel = run(4);
        for (a, b) in sequential.iter().zip(parallel.iter()) {
            assert_eq!(a.values, b.values);
        }
    }

    #[test]
    fn test_next_generation_rejects_small_allocator() {
        let current = population(&[1, 2, 3]);
        let mut allocator = RandomAllocator::seeded(2, 0);
        let result = current.next_generation(
            &TournamentSelection::new(1),
            &OnePointCrossover,
            &Identity,
            2,
            &WorkerPool::sequential(),
            &mut allocator,
        );
        assert!(matches!(result, Err(GeneticError::Configuration(_))));
    }

    #[test]
    fn test_next_generation_empty_population() {
        let current: Population<Genes> = Population::new(Vec::new());
        let mut allocator = RandomAllocator::seeded(1, 0);
        let result = current.next_generation(
            &TournamentSelection::new(1),
            &OnePointCrossover,
            &Identity,
            2,
            &WorkerPool::sequential(),
            &mut allocator,
        );
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_zero_parents_is_a_breeding_error() {
        let current = population(&[1, 2, 3]);
        let mut allocator = RandomAllocator::seeded(3, 0);
        let result = current.next_generation(
            &TournamentSelection::new(1),
            &OnePointCrossover,
            &Identity,
            0,
            &WorkerPool::sequential(),
            &mut allocator,
        );
        assert!(matches!(result, Err(GeneticError::Breeding(_))));
    }

    #[test]
    fn test_single_parent_passes_through() {
        let current = population(&[10, 20, 30]);
        let mut allocator = RandomAllocator::seeded(3, 4);
        let next = current
            .next_generation(
                &TournamentSelection::new(1),
                &OnePointCrossover,
                &Identity,
                1,
                &WorkerPool::sequential(),
                &mut allocator,
            )
            .unwrap();

        // Every child is one of the current members, unchanged.
        for child in next.iter() {
            assert!(current.iter().any(|c| Arc::ptr_eq(c, child)));
        }
    }
}
