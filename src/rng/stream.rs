use rand_chacha::ChaCha8Rng;
use rand_core::{RngCore, SeedableRng};

use crate::types::identifiers::Seed;

/// A reproducible source of 64-bit draws.
///
/// The algorithm behind an implementation is part of the published-page
/// contract: swapping it regenerates every page with different content.
pub trait DeterministicStream {
    fn next_u64(&mut self) -> u64;
}

/// v0: ChaCha8 keyed through `seed_from_u64`.
///
/// Only raw `next_u64` output is consumed. Range reduction lives in
/// [`random_int`](super::random_int) so upstream sampling changes cannot
/// leak into page content.
#[derive(Debug, Clone)]
pub struct ChaChaStream {
    inner: ChaCha8Rng,
}

impl ChaChaStream {
    pub fn new(seed: Seed) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(u64::from(seed.value())),
        }
    }
}

impl DeterministicStream for ChaChaStream {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

impl<S: DeterministicStream + ?Sized> DeterministicStream for &mut S {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// Construct the system-wide stream for a seed.
pub fn new_stream(seed: Seed) -> ChaChaStream {
    ChaChaStream::new(seed)
}
