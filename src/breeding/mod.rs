//! # Crossover
//!
//! The `Crossover` trait defines how a set of parents is recombined into a single
//! child. The arity rules are shared by every implementation:
//!
//! - no parents yields no child (`None`)
//! - a single parent is passed through unchanged
//! - more than two parents is a programming error and panics
use std::fmt::Debug;
use std::sync::Arc;

use rand::RngCore;

use crate::chromosome::Chromosome;

pub mod one_point;

pub use one_point::OnePointCrossover;

pub trait Crossover<C: Chromosome>: Debug + Send + Sync {
    /// Recombines `parents` into a child, drawing randomness from `rng`.
    fn reproduce(&self, parents: &[Arc<C>], rng: &mut dyn RngCore) -> Option<Arc<C>>;

    /// A stable name used when recording runs.
    fn name(&self) -> String;
}
