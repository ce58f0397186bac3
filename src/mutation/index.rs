use std::sync::Arc;

use rand::{Rng, RngCore};

use super::Mutation;
use crate::chromosome::ArrayChromosome;

/// Re-randomizes exactly one random locus of a clone of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexMutation;

impl<C: ArrayChromosome> Mutation<C> for IndexMutation {
    fn mutate(&self, input: Arc<C>, rng: &mut dyn RngCore) -> Arc<C> {
        let len = input.len();
        if len == 0 {
            return input;
        }
        let mut mutated = C::clone(&input);
        let locus = rng.gen_range(0..len);
        mutated.randomize(locus, rng);
        Arc::new(mutated)
    }

    fn name(&self) -> String {
        "index-mutation".to_string()
    }
}
