pub mod builder;
pub mod launcher;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use launcher::{EvolutionLauncher, EvolutionResult, GenerationRecord};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
