use std::fmt;
use std::time::{Duration, Instant};

use rand::RngCore;

use super::Termination;
use crate::chromosome::Chromosome;
use crate::population::Population;

type Clock = Box<dyn Fn() -> Instant + Send>;

/// Stops once more than a fixed wall-clock duration has passed since the first check.
pub struct TimingTermination {
    duration: Duration,
    started: Option<Instant>,
    clock: Clock,
}

impl TimingTermination {
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, Instant::now)
    }

    /// Uses `clock` instead of the system clock to tell the time.
    pub fn with_clock<F>(duration: Duration, clock: F) -> Self
    where
        F: Fn() -> Instant + Send + 'static,
    {
        Self {
            duration,
            started: None,
            clock: Box::new(clock),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Debug for TimingTermination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimingTermination")
            .field("duration", &self.duration)
            .field("started", &self.started)
            .finish()
    }
}

impl<C: Chromosome> Termination<C> for TimingTermination {
    fn should_stop(&mut self, _population: &Population<C>, _rng: &mut dyn RngCore) -> bool {
        let now = (self.clock)();
        let started = *self.started.get_or_insert(now);
        now.saturating_duration_since(started) > self.duration
    }

    fn name(&self) -> String {
        format!("timing-{:?}", self.duration)
    }
}
