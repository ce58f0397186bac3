//! # Adversarial arrays
//!
//! A reference chromosome for the engine: an integer array whose fitness is the
//! number of comparisons the standard library's unstable sort makes while
//! ordering it. Evolving it searches for inputs that are expensive to sort.
//!
//! ## Example
//!
//! ```rust
//! use lanevo::adversary::{AdversarialArray, AdversarialArrayFactory};
//! use lanevo::chromosome::{Chromosome, ChromosomeFactory};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let factory = AdversarialArrayFactory::new(16);
//! let mut rng = StdRng::seed_from_u64(1);
//! let array: AdversarialArray = factory.spawn(&mut rng);
//!
//! assert_eq!(factory.family(), "intarray-sort-16");
//! assert!(array.fitness() >= 15);
//! ```

use std::fmt;

use rand::{Rng, RngCore};

use crate::chromosome::{
    ArrayChromosome, Chromosome, ChromosomeFactory, FitnessMemo, LocalOptimization,
};

/// An integer array whose fitness is the number of comparisons the standard
/// unstable sort makes on it.
#[derive(Debug, Clone)]
pub struct AdversarialArray {
    vals: Vec<i64>,
    memo: FitnessMemo,
}

impl AdversarialArray {
    /// Creates an array with an empty fitness memo.
    ///
    /// # Arguments
    ///
    /// * `vals` - The values to sort. Any length is accepted, including zero.
    pub fn new(vals: Vec<i64>) -> Self {
        Self {
            vals,
            memo: FitnessMemo::new(),
        }
    }

    /// Returns the values in their current order.
    pub fn values(&self) -> &[i64] {
        &self.vals
    }

    /// Counts the comparisons made by `sort_unstable_by` on a copy of the values.
    fn count_comparisons(&self) -> i64 {
        let mut scratch = self.vals.clone();
        let mut comparisons: i64 = 0;
        scratch.sort_unstable_by(|a, b| {
            comparisons += 1;
            a.cmp(b)
        });
        comparisons
    }
}

impl fmt::Display for AdversarialArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.vals.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl Chromosome for AdversarialArray {
    fn fitness(&self) -> i64 {
        self.memo.get_or_compute(|| self.count_comparisons())
    }

    fn shell(&self) -> Self {
        Self::new(vec![0; self.vals.len()])
    }

    /// Replaces every value with its rank; equal values share the lowest rank.
    ///
    /// The relative order of all values is preserved, so the fitness is unchanged.
    fn simplify(&mut self) {
        let mut sorted = self.vals.clone();
        sorted.sort_unstable();
        for v in self.vals.iter_mut() {
            *v = sorted.partition_point(|s| *s < *v) as i64;
        }
        self.memo.invalidate();
    }
}

impl ArrayChromosome for AdversarialArray {
    fn len(&self) -> usize {
        self.vals.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.vals.swap(i, j);
        self.memo.invalidate();
    }

    fn copy_from(&mut self, from: &Self, start: usize, end: usize, into: usize) {
        let span = end - start;
        self.vals[into..into + span].copy_from_slice(&from.vals[start..end]);
        self.memo.invalidate();
    }

    fn randomize(&mut self, locus: usize, rng: &mut dyn RngCore) {
        self.vals[locus] = rng.gen_range(0..i64::MAX);
        self.memo.invalidate();
    }
}

impl LocalOptimization for AdversarialArray {
    /// One pass of adjacent swaps, keeping each swap only if it raises fitness.
    fn locally_optimize(&self) -> Self {
        let mut best = self.clone();
        let mut best_fitness = best.fitness();
        for i in 1..best.vals.len() {
            let mut candidate = best.clone();
            candidate.swap(i - 1, i);
            let fitness = candidate.fitness();
            if fitness > best_fitness {
                best = candidate;
                best_fitness = fitness;
            }
        }
        best
    }
}

/// Spawns adversarial arrays of a fixed size with uniformly random non-negative values.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct AdversarialArrayFactory {
    size: usize,
}

impl AdversarialArrayFactory {
    /// # Arguments
    ///
    /// * `size` - The length of every array the factory spawns.
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl ChromosomeFactory<AdversarialArray> for AdversarialArrayFactory {
    fn spawn(&self, rng: &mut dyn RngCore) -> AdversarialArray {
        AdversarialArray::new((0..self.size).map(|_| rng.gen_range(0..i64::MAX)).collect())
    }

    fn family(&self) -> String {
        format!("intarray-sort-{}", self.size)
    }
}
