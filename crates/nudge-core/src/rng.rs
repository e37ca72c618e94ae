//! Sampling source and seed-derivation helpers.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use siphasher::sip::SipHasher13;
use std::hash::Hasher;

/// Uniform integer source over inclusive ranges.
///
/// Every call is independent. Callers must pass `low <= high`; the mutation
/// engine only samples from non-empty ranges.
pub trait Sampler {
    /// Returns an integer drawn uniformly from `low..=high`.
    fn uniform(&mut self, low: usize, high: usize) -> usize;
}

/// RNG handle used for every random choice made by nudge.
///
/// The handle wraps `StdRng`. Runs that must be reproducible are built with
/// [`RngHandle::from_seed`]; otherwise [`RngHandle::from_entropy`] draws the
/// seed from the operating system. Independent phases of one run (mutation,
/// bottom SCC selection) use substreams derived with
/// [`derive_substream_seed`].
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a handle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Returns a mutable reference to the underlying RNG for advanced usage.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Sampler for RngHandle {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Derives the deterministic seed for a specific substream.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    hasher.write_u64(substream);
    hasher.finish()
}
