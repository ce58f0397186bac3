use rand::RngCore;

use super::Termination;
use crate::chromosome::Chromosome;
use crate::population::Population;

/// Stops when the best fitness has not improved for too many consecutive checks.
///
/// Each check compares the population's best fitness with the best seen so far.
/// A strictly greater value resets the streak; anything else extends it. With a
/// threshold of `n`, the run stops on the `n + 1`-th consecutive check without
/// improvement.
#[derive(Debug, Clone)]
pub struct StallTermination {
    threshold: usize,
    best: Option<i64>,
    streak: usize,
}

impl StallTermination {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            best: None,
            streak: 0,
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Consecutive checks without improvement so far.
    pub fn streak(&self) -> usize {
        self.streak
    }

    /// Records one observation of the best fitness and reports whether to stop.
    fn observe(&mut self, fitness: Option<i64>) -> bool {
        match (fitness, self.best) {
            (Some(current), Some(best)) if current <= best => {}
            (Some(current), _) => {
                self.best = Some(current);
                self.streak = 0;
                return false;
            }
            (None, _) => {}
        }

        self.streak += 1;
        self.streak > self.threshold
    }
}

impl<C: Chromosome> Termination<C> for StallTermination {
    fn should_stop(&mut self, population: &Population<C>, _rng: &mut dyn RngCore) -> bool {
        self.observe(population.max().map(|c| c.fitness()))
    }

    fn name(&self) -> String {
        format!("consecutive-{}", self.threshold)
    }
}
