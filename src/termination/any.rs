use rand::RngCore;

use super::Termination;
use crate::chromosome::Chromosome;
use crate::population::Population;

/// Stops when any of its strategies says so.
///
/// Every strategy is checked on every call, even after one has already fired,
/// so stateful strategies (counters, stall streaks) keep advancing in step.
pub struct AnyTermination<C: Chromosome> {
    strategies: Vec<Box<dyn Termination<C>>>,
}

impl<C: Chromosome> AnyTermination<C> {
    /// Creates a composite over already boxed strategies.
    ///
    /// # Arguments
    ///
    /// * `strategies` - The strategies to check, in order. An empty list never terminates.
    pub fn new(strategies: Vec<Box<dyn Termination<C>>>) -> Self {
        Self { strategies }
    }

    /// Adds `strategy` after the ones already held.
    ///
    /// # Returns
    ///
    /// The composite, for chaining.
    pub fn with<T>(mut self, strategy: T) -> Self
    where
        T: Termination<C> + 'static,
    {
        self.strategies.push(Box::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl<C: Chromosome> Default for AnyTermination<C> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C: Chromosome> std::fmt::Debug for AnyTermination<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnyTermination")
            .field("strategies", &Termination::name(self))
            .finish()
    }
}

impl<C: Chromosome> Termination<C> for AnyTermination<C> {
    fn should_stop(&mut self, population: &Population<C>, rng: &mut dyn RngCore) -> bool {
        self.strategies.iter_mut().fold(false, |stop, strategy| {
            strategy.should_stop(population, rng) || stop
        })
    }

    fn name(&self) -> String {
        let parts: Vec<String> = self.strategies.iter().map(|s| s.name()).collect();
        format!("multi-{}", parts.join(","))
    }
}
