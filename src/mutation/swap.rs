use std::sync::Arc;

use rand::{Rng, RngCore};

use super::Mutation;
use crate::chromosome::ArrayChromosome;

/// Swaps the values at two random loci.
///
/// When both draws hit the same locus the input is returned unchanged, without cloning.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapMutation;

impl SwapMutation {
    fn swap_at<C: ArrayChromosome>(input: Arc<C>, i: usize, j: usize) -> Arc<C> {
        if i == j {
            return input;
        }
        let mut mutated = C::clone(&input);
        mutated.swap(i, j);
        Arc::new(mutated)
    }
}

impl<C: ArrayChromosome> Mutation<C> for SwapMutation {
    fn mutate(&self, input: Arc<C>, rng: &mut dyn RngCore) -> Arc<C> {
        let len = input.len();
        if len == 0 {
            return input;
        }
        let i = rng.gen_range(0..len);
        let j = rng.gen_range(0..len);
        Self::swap_at(input, i, j)
    }

    fn name(&self) -> String {
        "swap".to_string()
    }
}
