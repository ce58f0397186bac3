//! # Termination
//!
//! A termination strategy is asked once per generation, before the next one is
//! bred, whether the run should stop. Strategies may keep state between checks
//! (a counter, a start time, the best fitness seen so far), so a strategy belongs
//! to a single run.
use rand::RngCore;

use crate::chromosome::Chromosome;
use crate::population::Population;

pub mod any;
pub mod counting;
pub mod stall;
pub mod timing;

pub use any::AnyTermination;
pub use counting::CountingTermination;
pub use stall::StallTermination;
pub use timing::TimingTermination;

pub trait Termination<C: Chromosome>: Send {
    /// Returns `true` when the run should stop with the current population.
    fn should_stop(&mut self, population: &Population<C>, rng: &mut dyn RngCore) -> bool;

    /// A stable name used when recording runs.
    fn name(&self) -> String;
}

impl<C: Chromosome> Termination<C> for Box<dyn Termination<C>> {
    fn should_stop(&mut self, population: &Population<C>, rng: &mut dyn RngCore) -> bool {
        (**self).should_stop(population, rng)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}
