//! # Mutation
//!
//! Mutation strategies take a chromosome and return a possibly perturbed one.
//! The input is shared and never changed: a strategy that perturbs always works
//! on a fresh clone, and a strategy that decides not to perturb returns the very
//! same `Arc`.
use std::fmt::Debug;
use std::sync::Arc;

use rand::RngCore;

use crate::chromosome::Chromosome;

pub mod adaptive;
pub mod index;
pub mod look_ahead;
pub mod swap;

pub use adaptive::AdaptiveMutation;
pub use index::IndexMutation;
pub use look_ahead::LookAheadMutation;
pub use swap::SwapMutation;

pub trait Mutation<C: Chromosome>: Debug + Send + Sync {
    /// Returns a mutated version of `input`, or `input` itself.
    fn mutate(&self, input: Arc<C>, rng: &mut dyn RngCore) -> Arc<C>;

    /// A stable name used when recording runs.
    fn name(&self) -> String;

    /// The adaptive-rate control of this mutation, if it has one.
    fn adaptive_rate(&self) -> Option<&dyn AdaptiveRate> {
        None
    }
}

/// A mutation rate that the driver tunes between generations.
///
/// The rate is expressed as `r`: a mutation fires with probability about `1/r`.
/// Lowering `r` therefore raises the mutation probability.
pub trait AdaptiveRate: Send + Sync {
    /// Lowers `r` by one, never below 1.
    fn increase_rate(&self);

    /// Restores `r` to its configured baseline.
    fn reset_rate(&self);

    /// The current `r`.
    fn current_rate(&self) -> usize;
}
