//! Entry Weight Module
//!
//! Size functions used to enforce per-cache byte budgets.

use bytes::Bytes;
use serde::Serialize;

// == Weigh Trait ==
/// Computes the byte size charged against a cache's byte budget.
pub trait Weigh {
    fn weight(&self) -> usize;
}

impl Weigh for String {
    fn weight(&self) -> usize {
        self.len()
    }
}

impl Weigh for Vec<u8> {
    fn weight(&self) -> usize {
        self.len()
    }
}

impl Weigh for Bytes {
    fn weight(&self) -> usize {
        self.len()
    }
}

/// Length of the value's JSON encoding.
///
/// This approximates rather than measures memory footprint. A value that
/// cannot be encoded weighs `usize::MAX` and is therefore never admitted.
pub fn json_weight<T: Serialize + ?Sized>(value: &T) -> usize {
    serde_json::to_vec(value)
        .map(|encoded| encoded.len())
        .unwrap_or(usize::MAX)
}
