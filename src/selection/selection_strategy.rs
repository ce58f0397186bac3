use std::fmt::Debug;
use std::sync::Arc;

use rand::RngCore;

use crate::chromosome::Chromosome;
use crate::population::Population;

/// Trait for parent selection strategies.
///
/// A parent selection picks one position out of a pool of chromosomes, typically
/// favouring fitter ones. It is called concurrently from every worker during a
/// generation transition, each time with the random lane of the slot being bred,
/// so implementations must not keep mutable state.
///
/// # Examples
///
/// ```
/// use lanevo::selection::{ParentSelection, TournamentSelection};
/// # use lanevo::chromosome::Chromosome;
/// # use std::{fmt, sync::Arc};
/// # #[derive(Clone, Debug)]
/// # struct Score(i64);
/// # impl fmt::Display for Score {
/// #     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
/// # }
/// # impl Chromosome for Score {
/// #     fn fitness(&self) -> i64 { self.0 }
/// #     fn shell(&self) -> Self { Score(0) }
/// # }
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let pool: Vec<Arc<Score>> = [3, 8, 1].into_iter().map(|f| Arc::new(Score(f))).collect();
/// let mut rng = StdRng::seed_from_u64(1);
///
/// let selection = TournamentSelection::new(2);
/// let idx = selection.pick_parent(&pool, &mut rng).unwrap();
/// assert!(idx < pool.len());
/// ```
pub trait ParentSelection<C: Chromosome>: Debug + Send + Sync {
    /// Returns the index of the chosen chromosome, or `None` for an empty pool.
    fn pick_parent(&self, pool: &[Arc<C>], rng: &mut dyn RngCore) -> Option<usize>;

    /// A stable name used when recording runs.
    fn name(&self) -> String;
}

/// Trait for survivor selection strategies.
///
/// After a candidate generation is bred, a survivor selection decides which
/// chromosomes of the previous and candidate generations carry on.
pub trait SurvivorSelection<C: Chromosome>: Debug + Send + Sync {
    /// Merges `previous` and `candidate` into the generation that carries on.
    ///
    /// Both populations must have their fitness prewarmed.
    fn select_survivors(
        &self,
        previous: &Population<C>,
        candidate: &Population<C>,
        rng: &mut dyn RngCore,
    ) -> Population<C>;

    /// A stable name used when recording runs.
    fn name(&self) -> String;
}
