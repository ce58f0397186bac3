use rand::RngCore;

use super::Termination;
use crate::chromosome::Chromosome;
use crate::population::Population;

/// Stops after a fixed number of checks have let the run continue.
///
/// With a limit of `k`, the first `k` checks return `false` and every later
/// check returns `true`, so the driver breeds exactly `k` generations.
#[derive(Debug, Clone)]
pub struct CountingTermination {
    limit: usize,
    checks: usize,
}

impl CountingTermination {
    pub fn new(limit: usize) -> Self {
        Self { limit, checks: 0 }
    }

    /// The number of generations allowed before the run stops.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The number of checks that have let the run continue so far.
    pub fn checks(&self) -> usize {
        self.checks
    }
}

impl<C: Chromosome> Termination<C> for CountingTermination {
    fn should_stop(&mut self, _population: &Population<C>, _rng: &mut dyn RngCore) -> bool {
        if self.checks >= self.limit {
            return true;
        }
        self.checks += 1;
        false
    }

    fn name(&self) -> String {
        format!("counting-{}", self.limit)
    }
}
