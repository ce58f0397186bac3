//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run-wide parameters of the engine:
//! the population size, how many parents each child has, how many worker threads
//! to use, the seed of the random lanes, and how much to log.
//!
//! ## Example
//!
//! ```rust
//! use lanevo::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(200, 2, 4, 42, LogLevel::Minimal);
//!
//! // Or through the builder
//! let built = EvolutionOptions::builder()
//!     .population_size(200)
//!     .workers(4)
//!     .seed(42)
//!     .log_level(LogLevel::Minimal)
//!     .build();
//!
//! assert_eq!(custom_options.get_population_size(), built.get_population_size());
//! ```
//!
//! ## LogLevel
//!
//! - `Verbose`: a summary line per generation plus the best chromosome and mutation rate.
//! - `Minimal`: a summary line per generation.
//! - `None`: no per-generation logging.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    num_parents: usize,
    /// Number of worker threads; fewer than 2 runs everything on the calling thread
    workers: usize,
    seed: u64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn new(
        population_size: usize,
        num_parents: usize,
        workers: usize,
        seed: u64,
        log_level: LogLevel,
    ) -> Self {
        Self {
            population_size,
            num_parents,
            workers,
            seed,
            log_level,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_parents(&self) -> usize {
        self.num_parents
    }

    pub fn get_workers(&self) -> usize {
        self.workers
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of parents per child.
    pub fn set_num_parents(&mut self, num_parents: usize) {
        self.num_parents = num_parents;
    }

    /// Sets the number of worker threads.
    pub fn set_workers(&mut self, workers: usize) {
        self.workers = workers;
    }

    /// Sets the seed of the random lanes.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 100,
            num_parents: 2,
            workers: rayon::current_num_threads(),
            seed: 0,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_parents: Option<usize>,
    workers: Option<usize>,
    seed: Option<u64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_parents(mut self, value: usize) -> Self {
        self.num_parents = Some(value);
        self
    }

    pub fn workers(mut self, value: usize) -> Self {
        self.workers = Some(value);
        self
    }

    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_parents: self.num_parents.unwrap_or(defaults.num_parents),
            workers: self.workers.unwrap_or(defaults.workers),
            seed: self.seed.unwrap_or(defaults.seed),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
