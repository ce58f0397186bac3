//! # OnePointCrossover
//!
//! Splits two array parents at a random locus and joins the prefix of one with
//! the suffix of the other.
use std::sync::Arc;

use rand::{Rng, RngCore};

use super::Crossover;
use crate::chromosome::ArrayChromosome;

/// One-point ("split") crossover for array chromosomes.
///
/// For parents `a` and `b`, a split point is drawn in `[0, a.len())` and a fair
/// coin decides which parent gives the prefix `[0, split)`; the other gives the
/// suffix `[split, b.len())`. The child starts as `a.shell()`, so every locus of
/// the child is copied from exactly one parent.
///
/// Parents of different lengths are allowed. The child always has the length of
/// `a`: recombination covers the loci both parents share, and when `a` is the
/// longer parent its remaining loci are copied from `a` unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl<C: ArrayChromosome> Crossover<C> for OnePointCrossover {
    fn reproduce(&self, parents: &[Arc<C>], rng: &mut dyn RngCore) -> Option<Arc<C>> {
        let (first, second) = match parents {
            [] => return None,
            [only] => return Some(Arc::clone(only)),
            [first, second] => (first, second),
            _ => panic!(
                "one-point crossover supports at most 2 parents, got {}",
                parents.len()
            ),
        };

        let mut child = first.shell();
        if first.is_empty() {
            return Some(Arc::new(child));
        }

        let split = rng.gen_range(0..first.len());
        let (prefix, suffix) = if rng.gen_bool(0.5) {
            (first, second)
        } else {
            (second, first)
        };
        // Only loci both parents have are recombined; any tail of the first
        // parent beyond the shorter length is kept from the first parent.
        let shared = first.len().min(second.len());
        child.copy_from(prefix, 0, split.min(shared), 0);
        if split < shared {
            child.copy_from(suffix, split, shared, split);
        }
        if shared < first.len() {
            child.copy_from(first, shared, first.len(), shared);
        }

        Some(Arc::new(child))
    }

    fn name(&self) -> String {
        "split".to_string()
    }
}
