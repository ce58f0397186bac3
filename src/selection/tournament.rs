use std::sync::Arc;

use rand::{Rng, RngCore};

use crate::chromosome::Chromosome;
use crate::selection::selection_strategy::ParentSelection;

/// A selection strategy that picks a parent through a K-way tournament.
///
/// `K` contenders are drawn uniformly at random (with replacement) and the one with
/// strictly the highest fitness wins; on ties the earliest draw is kept.
///
/// - Smaller tournaments lead to more exploration (K = 1 is a uniform random pick)
/// - Larger tournaments lead to more exploitation
///
/// A tournament size of 0 means "derive it from the pool": `floor(ln(pool size)) + 1`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a tournament of `tournament_size` contenders, or an adaptive one if 0.
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }

    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// The configured number of contenders; `0` means adaptive.
    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// The number of contenders used for a pool of `pool_size` chromosomes.
    pub fn effective_size(&self, pool_size: usize) -> usize {
        if self.tournament_size > 0 {
            return self.tournament_size;
        }
        (pool_size.max(1) as f64).ln() as usize + 1
    }
}

impl<C: Chromosome> ParentSelection<C> for TournamentSelection {
    fn pick_parent(&self, pool: &[Arc<C>], rng: &mut dyn RngCore) -> Option<usize> {
        if pool.is_empty() {
            return None;
        }

        let mut best = rng.gen_range(0..pool.len());
        for _ in 1..self.effective_size(pool.len()) {
            let contender = rng.gen_range(0..pool.len());
            if pool[contender].fitness() > pool[best].fitness() {
                best = contender;
            }
        }

        Some(best)
    }

    fn name(&self) -> String {
        format!("K-Tournament-{}", self.tournament_size)
    }
}
