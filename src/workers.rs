//! # Worker Pool
//!
//! A bounded set of worker threads used for the two parallel phases of a
//! generation: fitness prewarming and offspring synthesis. With fewer than two
//! workers everything runs on the calling thread.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;

/// The threads that evaluate fitness and synthesize offspring.
#[derive(Debug)]
pub struct WorkerPool {
    workers: usize,
    pool: Option<ThreadPool>,
}

impl WorkerPool {
    /// Creates a pool of exactly `workers` threads, or a sequential pool if `workers < 2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the threads cannot be spawned.
    pub fn new(workers: usize) -> Result<Self> {
        if workers < 2 {
            return Ok(Self::sequential());
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|idx| format!("lanevo-worker-{}", idx))
            .build()?;

        Ok(Self {
            workers,
            pool: Some(pool),
        })
    }

    /// A pool that runs all work on the calling thread.
    pub fn sequential() -> Self {
        Self {
            workers: 1,
            pool: None,
        }
    }

    /// Returns the number of workers the pool runs on.
    ///
    /// # Returns
    ///
    /// The thread count for a parallel pool, or `1` for a sequential one.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Whether work is spread over a thread pool rather than the calling thread.
    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// The underlying thread pool, if any.
    pub(crate) fn pool(&self) -> Option<&ThreadPool> {
        self.pool.as_ref()
    }
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self::sequential()
    }
}
