use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use rand::{Rng, RngCore};

use super::{AdaptiveRate, Mutation};
use crate::chromosome::Chromosome;
use crate::error::{GeneticError, Result};

/// Passes chromosomes through, mutating only about one in `r` of them.
///
/// On every call a number is drawn from `[0, r)`; the inner mutation runs only
/// when it is zero. `r` starts at the configured baseline and is tuned by the
/// driver through [`AdaptiveRate`]: it drops by one each generation that brings
/// no improvement (down to 1, where every call mutates) and returns to the
/// baseline when a generation improves. `mutate` itself never changes `r`.
#[derive(Debug)]
pub struct AdaptiveMutation<M> {
    inner: M,
    baseline: usize,
    current: AtomicUsize,
}

impl<M> AdaptiveMutation<M> {
    /// Wraps `inner` with a baseline rate of `baseline`.
    ///
    /// # Errors
    ///
    /// Returns an error if `baseline` is 0.
    pub fn new(inner: M, baseline: usize) -> Result<Self> {
        if baseline < 1 {
            return Err(GeneticError::Configuration(
                "Mutation rate baseline must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            inner,
            baseline,
            current: AtomicUsize::new(baseline),
        })
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }

    pub fn baseline(&self) -> usize {
        self.baseline
    }
}

impl<M: Send + Sync> AdaptiveRate for AdaptiveMutation<M> {
    fn increase_rate(&self) {
        let _ = self
            .current
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |rate| {
                Some(rate.saturating_sub(1).max(1))
            });
    }

    fn reset_rate(&self) {
        self.current.store(self.baseline, Ordering::Relaxed);
    }

    fn current_rate(&self) -> usize {
        self.current.load(Ordering::Relaxed)
    }
}

impl<C, M> Mutation<C> for AdaptiveMutation<M>
where
    C: Chromosome,
    M: Mutation<C>,
{
    fn mutate(&self, input: Arc<C>, rng: &mut dyn RngCore) -> Arc<C> {
        let rate = self.current_rate().max(1);
        if rng.gen_range(0..rate) != 0 {
            return input;
        }
        self.inner.mutate(input, rng)
    }

    fn name(&self) -> String {
        format!("pass-{}-{}", self.baseline, self.inner.name())
    }

    fn adaptive_rate(&self) -> Option<&dyn AdaptiveRate> {
        Some(self)
    }
}
