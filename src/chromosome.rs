//! # Chromosome Traits
//!
//! The `Chromosome` trait defines the interface for candidate solutions evolved by
//! the engine. The engine never looks inside a chromosome: it only asks for its
//! fitness, copies it, asks for an empty value of the same shape, and prints it.
//!
//! Chromosomes that are laid out as a sequence of loci additionally implement
//! [`ArrayChromosome`], which is what the array-based crossover and mutation
//! strategies are bounded on.
//!
//! ## Example
//!
//! ```rust
//! use std::fmt;
//! use lanevo::chromosome::{Chromosome, FitnessMemo};
//!
//! #[derive(Clone, Debug)]
//! struct Bits {
//!     bits: Vec<bool>,
//!     memo: FitnessMemo,
//! }
//!
//! impl fmt::Display for Bits {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         for bit in &self.bits {
//!             write!(f, "{}", u8::from(*bit))?;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl Chromosome for Bits {
//!     fn fitness(&self) -> i64 {
//!         self.memo
//!             .get_or_compute(|| self.bits.iter().filter(|b| **b).count() as i64)
//!     }
//!
//!     fn shell(&self) -> Self {
//!         Bits { bits: vec![false; self.bits.len()], memo: FitnessMemo::new() }
//!     }
//! }
//! ```

use std::fmt::{Debug, Display};
use std::sync::OnceLock;

use rand::RngCore;

/// An evolvable candidate solution.
///
/// Fitness is a scalar where higher is better. Implementations are expected to
/// memoize it (see [`FitnessMemo`]) because the engine asks for the fitness of
/// the same chromosome many times per generation.
///
/// Chromosomes are shared between generations as `Arc<Self>` and are treated as
/// immutable once shared. Strategies that change a chromosome always do so on a
/// fresh `clone` or `shell`.
pub trait Chromosome: Clone + Debug + Display + Send + Sync + 'static {
    /// Returns the (memoized) fitness. Must be idempotent.
    fn fitness(&self) -> i64;

    /// Returns an empty chromosome with the same shape as `self`.
    fn shell(&self) -> Self;

    /// Canonicalizes a final answer, e.g. by remapping values to rank order.
    ///
    /// Called once on the best chromosome when a run ends. The default does nothing.
    fn simplify(&mut self) {}
}

/// The array capability: a chromosome made of indexable loci.
pub trait ArrayChromosome: Chromosome {
    /// Number of loci.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the values at loci `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Copies `from[start..end]` into `self` starting at locus `into`.
    fn copy_from(&mut self, from: &Self, start: usize, end: usize, into: usize);

    /// Replaces the value at `locus` with a fresh random value.
    fn randomize(&mut self, locus: usize, rng: &mut dyn RngCore);
}

/// A hook for problem-specific local improvement of a chromosome.
///
/// The driver does not call it; it is offered to callers that want to polish a
/// result after a run.
pub trait LocalOptimization: Chromosome {
    fn locally_optimize(&self) -> Self;
}

/// Builds the chromosomes of an initial population.
pub trait ChromosomeFactory<C: Chromosome>: Send + Sync {
    /// Creates a new random chromosome.
    fn spawn(&self, rng: &mut dyn RngCore) -> C;

    /// A stable name for the kind of chromosome this factory builds.
    fn family(&self) -> String;
}

/// A write-once fitness cache for use inside a chromosome.
///
/// The value is computed at most once; later reads are a single atomic load, so
/// the hot path of a generation transition never blocks on it. Any operation that
/// changes the chromosome through `&mut self` must call [`FitnessMemo::invalidate`].
#[derive(Debug, Clone, Default)]
pub struct FitnessMemo {
    cell: OnceLock<i64>,
}

impl FitnessMemo {
    pub fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Returns the cached fitness, computing it with `compute` on first use.
    pub fn get_or_compute<F>(&self, compute: F) -> i64
    where
        F: FnOnce() -> i64,
    {
        *self.cell.get_or_init(compute)
    }

    /// Returns the cached fitness if it has been computed.
    pub fn get(&self) -> Option<i64> {
        self.cell.get().copied()
    }

    /// Forgets the cached fitness.
    pub fn invalidate(&mut self) {
        self.cell.take();
    }
}
