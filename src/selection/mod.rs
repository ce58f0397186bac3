pub mod selection_strategy;
pub mod survivor;
pub mod tournament;

pub use selection_strategy::{ParentSelection, SurvivorSelection};
pub use survivor::ParentSurvivorSelection;
pub use tournament::TournamentSelection;
