//! # Random Lanes
//!
//! The `RandomAllocator` hands out one independent random stream ("lane") per
//! population slot. Every unit of work in a generation is bound to the lane of
//! the slot it produces, never to the thread that happens to run it, so a run is
//! reproducible from its seed regardless of scheduling.
//!
//! ## Example
//!
//! ```rust
//! use lanevo::rng::RandomAllocator;
//! use rand::Rng;
//!
//! let mut first = RandomAllocator::seeded(4, 42);
//! let mut second = RandomAllocator::seeded(4, 42);
//!
//! for lane in 0..4 {
//!     let a: u64 = first.lane(lane).gen();
//!     let b: u64 = second.lane(lane).gen();
//!     assert_eq!(a, b);
//! }
//! ```
//!
//! ## Sharing one stream
//!
//! Callers that cannot guarantee one lane per slot can wrap a generator in a
//! [`LockedRng`]. The engine itself never does this:
//!
//! ```rust
//! use lanevo::rng::LockedRng;
//! use rand::{rngs::StdRng, Rng, SeedableRng};
//!
//! let shared = LockedRng::new(StdRng::seed_from_u64(7));
//! let value = (&shared).gen_range(0..10);
//! assert!(value < 10);
//! ```

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand::{rngs::StdRng, RngCore, SeedableRng};

/// A single random stream owned by one population slot.
pub type Lane = Box<dyn RngCore + Send>;

/// A fixed set of deterministic, independent random streams.
pub struct RandomAllocator {
    lanes: Vec<Lane>,
}

impl RandomAllocator {
    /// Builds `size` lanes from `seed`.
    ///
    /// A root stream is created with `ctor(seed)`; lane `i` is then created by
    /// feeding the root's next draw to `ctor`. The same `(size, seed, ctor)`
    /// always produces the same lanes.
    pub fn build<R, F>(size: usize, seed: u64, ctor: F) -> Self
    where
        R: RngCore + Send + 'static,
        F: Fn(u64) -> R,
    {
        let mut root = ctor(seed);
        let lanes = (0..size)
            .map(|_| Box::new(ctor(root.next_u64())) as Lane)
            .collect();
        Self { lanes }
    }

    /// Builds `size` lanes of `StdRng`.
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::build(size, seed, StdRng::seed_from_u64)
    }

    /// Returns the lane bound to slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is out of range.
    pub fn lane(&mut self, idx: usize) -> &mut dyn RngCore {
        self.lanes[idx].as_mut()
    }

    /// Returns all lanes, for handing disjoint lanes to parallel workers.
    pub fn lanes_mut(&mut self) -> &mut [Lane] {
        &mut self.lanes
    }

    /// The number of lanes, which is the largest population the allocator can serve.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

impl fmt::Debug for RandomAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomAllocator")
            .field("lanes", &self.lanes.len())
            .finish()
    }
}

/// A generator behind a mutex, usable from several callers at once through `&LockedRng`.
///
/// Only for callers that cannot keep one lane per slot; every draw takes the lock.
#[derive(Debug)]
pub struct LockedRng<R> {
    inner: Mutex<R>,
}

impl<R: RngCore> LockedRng<R> {
    /// # Arguments
    ///
    /// * `rng` - The generator every caller will share.
    pub fn new(rng: R) -> Self {
        Self {
            inner: Mutex::new(rng),
        }
    }

    fn with<T>(&self, draw: impl FnOnce(&mut R) -> T) -> T {
        let mut rng = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut rng)
    }

    /// Releases the generator, even if a previous holder of the lock panicked.
    pub fn into_inner(self) -> R {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: RngCore> RngCore for &LockedRng<R> {
    fn next_u32(&mut self) -> u32 {
        self.with(|rng| rng.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.with(|rng| rng.next_u64())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.with(|rng| rng.fill_bytes(dest))
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.with(|rng| rng.try_fill_bytes(dest))
    }
}
