//! # lanevo
//!
//! A parallel evolutionary optimization engine. A population of chromosomes is
//! evolved generation by generation: parents are picked by a selection strategy,
//! recombined by a crossover, perturbed by a mutation, and the run stops when a
//! termination strategy says so.
//!
//! Every population slot owns its own random lane, and fitness is cached in each
//! chromosome, so a run is reproducible from its seed no matter how many worker
//! threads evaluate and breed it.
//!
//! ## Example
//!
//! ```rust
//! use lanevo::{
//!     adversary::{AdversarialArray, AdversarialArrayFactory},
//!     breeding::OnePointCrossover,
//!     evolution::{EvolutionLauncherBuilder, EvolutionOptions},
//!     mutation::{AdaptiveMutation, SwapMutation},
//!     selection::TournamentSelection,
//!     termination::{AnyTermination, CountingTermination, StallTermination},
//! };
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .seed(7)
//!     .build();
//!
//! let termination = AnyTermination::default()
//!     .with(CountingTermination::new(10))
//!     .with(StallTermination::new(5));
//!
//! let mut launcher = EvolutionLauncherBuilder::<AdversarialArray, _, _, _, _, _>::new()
//!     .with_options(options)
//!     .with_factory(AdversarialArrayFactory::new(12))
//!     .with_selection(TournamentSelection::new(3))
//!     .with_crossover(OnePointCrossover)
//!     .with_mutation(AdaptiveMutation::new(SwapMutation, 10).unwrap())
//!     .with_termination(termination)
//!     .build()
//!     .unwrap();
//!
//! let result = launcher.run().unwrap();
//! assert!(result.generations <= 10);
//! assert_eq!(result.history.len(), result.generations + 1);
//! ```

pub mod adversary;
pub mod breeding;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod mutation;
pub mod population;
pub mod rng;
pub mod selection;
pub mod termination;
pub mod workers;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use chromosome::{ArrayChromosome, Chromosome, ChromosomeFactory, FitnessMemo};
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{
    EvolutionLauncher, EvolutionLauncherBuilder, EvolutionOptions, EvolutionResult,
};
pub use population::Population;
pub use rng::RandomAllocator;
