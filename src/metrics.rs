//! Instrumentation counters shared by every algorithm run.
//!
//! Variables:
//!   comparisons : u64, comparator invocations so far
//!   aux_bytes   : usize, auxiliary memory attributed to the run
//!
//! Equations:
//!   record_comparison(): comparisons' = comparisons + 1
//!   charge_aux(b):       aux_bytes'   = aux_bytes + b
//!
//! Non-comparison sorts (radix, counting) never call record_comparison,
//! so their count stays 0 by construction.

use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub comparisons: u64,
    pub aux_bytes: usize,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn charge_aux(&mut self, bytes: usize) {
        self.aux_bytes += bytes;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Invoke `cmp` on a pair, counting the invocation.
    #[inline]
    pub fn compare<T, F>(&mut self, a: &T, b: &T, cmp: &F) -> std::cmp::Ordering
    where
        F: Fn(&T, &T) -> std::cmp::Ordering,
    {
        self.record_comparison();
        cmp(a, b)
    }
}
