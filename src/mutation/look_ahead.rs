use std::sync::Arc;

use rand::{Rng, RngCore};

use super::Mutation;
use crate::chromosome::ArrayChromosome;

/// Performs several swaps in one mutation.
///
/// Every locus is, with probability `1/len`, swapped with another random locus.
/// Positions are offset by a random rotation so the first loci are not favoured
/// by the order of the walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LookAheadMutation;

impl<C: ArrayChromosome> Mutation<C> for LookAheadMutation {
    fn mutate(&self, input: Arc<C>, rng: &mut dyn RngCore) -> Arc<C> {
        let len = input.len();
        if len == 0 {
            return input;
        }

        let mut mutated = C::clone(&input);
        let rotation = rng.gen_range(0..len);
        for locus in 0..len {
            if rng.gen_range(0..len) != 0 {
                continue;
            }
            let other = rng.gen_range(0..len);
            if other == locus {
                continue;
            }
            mutated.swap((locus + rotation) % len, (other + rotation) % len);
        }

        Arc::new(mutated)
    }

    fn name(&self) -> String {
        "lookahead".to_string()
    }
}
