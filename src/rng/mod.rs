//! Seeded pick/shuffle primitives.
//!
//! Draw counts are fixed so that several operations sharing one stream stay
//! reproducible:
//! - `random_int`: exactly one draw
//! - `pick`: zero draws on an empty list, otherwise one
//! - `shuffle`: `max(len - 1, 0)` draws (Fisher-Yates, last index down to 1)

pub mod stream;

pub use stream::{new_stream, ChaChaStream, DeterministicStream};

use crate::types::identifiers::Seed;

/// Seed for a stable string key. See [`Seed::derive`].
pub fn derive_seed(key: &str) -> Seed {
    Seed::derive(key)
}

/// Draw an integer in the closed range `[min, max]`.
/// Bounds given in reverse order are swapped.
pub fn random_int<S: DeterministicStream + ?Sized>(min: i64, max: i64, stream: &mut S) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let span = (hi as i128) - (lo as i128) + 1;
    let draw = stream.next_u64() as i128;

    // span is at most 2^64, so the sum always fits back into [lo, hi]
    (lo as i128 + draw % span) as i64
}

/// Uniform choice. An empty list yields `None` without consuming a draw.
pub fn pick<'a, T, S: DeterministicStream + ?Sized>(items: &'a [T], stream: &mut S) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = random_int(0, items.len() as i64 - 1, stream) as usize;
    items.get(idx)
}

/// Deterministic permutation of `items`.
pub fn shuffle<T: Clone, S: DeterministicStream + ?Sized>(items: &[T], stream: &mut S) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = random_int(0, i as i64, stream) as usize;
        out.swap(i, j);
    }
    out
}

/// Shuffle then keep at most `cap` items.
pub fn shuffle_take<T: Clone, S: DeterministicStream + ?Sized>(
    items: &[T],
    cap: usize,
    stream: &mut S,
) -> Vec<T> {
    let mut out = shuffle(items, stream);
    out.truncate(cap);
    out
}
