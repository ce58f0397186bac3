use std::collections::HashSet;
use std::sync::Arc;

use rand::RngCore;

use crate::chromosome::Chromosome;
use crate::population::Population;
use crate::selection::selection_strategy::{ParentSelection, SurvivorSelection};

/// Survivor selection that reuses a parent selection on the merged generations.
///
/// The previous and candidate generations are pooled and half the pool is drawn
/// with the wrapped selection. Picks are recorded; when a draw lands on a
/// position already picked, the pool is compacted (all recorded picks removed,
/// record cleared) and the draw is repeated on the smaller pool. Compaction only
/// happens on a collision, so most rounds stay linear in the pool size, and no
/// pool position is ever chosen twice.
#[derive(Debug, Clone)]
pub struct ParentSurvivorSelection<S> {
    selection: S,
}

impl<S> ParentSurvivorSelection<S> {
    /// Wraps a parent selection for use on merged generations.
    ///
    /// # Arguments
    ///
    /// * `selection` - The strategy drawing each survivor from the merged pool.
    pub fn new(selection: S) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &S {
        &self.selection
    }
}

impl<C, S> SurvivorSelection<C> for ParentSurvivorSelection<S>
where
    C: Chromosome,
    S: ParentSelection<C>,
{
    fn select_survivors(
        &self,
        previous: &Population<C>,
        candidate: &Population<C>,
        rng: &mut dyn RngCore,
    ) -> Population<C> {
        let mut pool: Vec<Arc<C>> = previous.iter().chain(candidate.iter()).cloned().collect();
        let draws = pool.len() / 2;
        let mut survivors = Vec::with_capacity(draws);
        let mut picked = HashSet::with_capacity(draws);

        for _ in 0..draws {
            let Some(mut idx) = self.selection.pick_parent(&pool, rng) else {
                break;
            };

            if picked.contains(&idx) {
                pool = pool
                    .into_iter()
                    .enumerate()
                    .filter(|(i, _)| !picked.contains(i))
                    .map(|(_, c)| c)
                    .collect();
                picked.clear();

                match self.selection.pick_parent(&pool, rng) {
                    Some(redrawn) => idx = redrawn,
                    None => break,
                }
            }

            picked.insert(idx);
            survivors.push(Arc::clone(&pool[idx]));
        }

        Population::new(survivors)
    }

    fn name(&self) -> String {
        format!("parent-select-{}", self.selection.name())
    }
}
