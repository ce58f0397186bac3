//! Shared fixtures for unit tests.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::{Rng, RngCore};

use crate::chromosome::{ArrayChromosome, Chromosome, ChromosomeFactory, FitnessMemo};

/// An integer array whose fitness is the sum of its values.
#[derive(Clone, Debug)]
pub struct Genes {
    pub values: Vec<i64>,
    memo: FitnessMemo,
    evaluations: Arc<AtomicUsize>,
}

impl Genes {
    pub fn new(values: Vec<i64>) -> Self {
        Self::counted(values, Arc::new(AtomicUsize::new(0)))
    }

    pub fn counted(values: Vec<i64>, evaluations: Arc<AtomicUsize>) -> Self {
        Self {
            values,
            memo: FitnessMemo::new(),
            evaluations,
        }
    }

    pub fn evaluations(&self) -> usize {
        self.evaluations.load(Ordering::SeqCst)
    }

    pub fn is_memoized(&self) -> bool {
        self.memo.get().is_some()
    }
}

impl fmt::Display for Genes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}

impl Chromosome for Genes {
    fn fitness(&self) -> i64 {
        self.memo.get_or_compute(|| {
            self.evaluations.fetch_add(1, Ordering::SeqCst);
            self.values.iter().sum()
        })
    }

    fn shell(&self) -> Self {
        Self::counted(vec![0; self.values.len()], Arc::clone(&self.evaluations))
    }
}

impl ArrayChromosome for Genes {
    fn len(&self) -> usize {
        self.values.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
        self.memo.invalidate();
    }

    fn copy_from(&mut self, from: &Self, start: usize, end: usize, into: usize) {
        let span = end - start;
        self.values[into..into + span].copy_from_slice(&from.values[start..end]);
        self.memo.invalidate();
    }

    fn randomize(&mut self, locus: usize, rng: &mut dyn RngCore) {
        self.values[locus] = rng.gen_range(0..100);
        self.memo.invalidate();
    }
}

/// Spawns `Genes` of a fixed length with values in `0..100`.
#[derive(Debug, Clone)]
pub struct GenesFactory {
    pub length: usize,
}

impl ChromosomeFactory<Genes> for GenesFactory {
    fn spawn(&self, rng: &mut dyn RngCore) -> Genes {
        Genes::new((0..self.length).map(|_| rng.gen_range(0..100)).collect())
    }

    fn family(&self) -> String {
        format!("genes-{}", self.length)
    }
}

/// Wraps each fitness value in a single-locus chromosome.
pub fn pool(fitness: &[i64]) -> Vec<Arc<Genes>> {
    fitness
        .iter()
        .map(|f| Arc::new(Genes::new(vec![*f])))
        .collect()
}
