//! Process-wide request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic in-memory request counter.
///
/// Writers call [`RequestCounter::next`]; readers call [`RequestCounter::get`]
/// and never mutate it. The value is lost on restart.
#[derive(Debug, Default)]
pub struct RequestCounter {
    hits: AtomicU64,
}

impl RequestCounter {
    pub fn new() -> Self {
        Self { hits: AtomicU64::new(0) }
    }

    /// Count one request and return the number served before it.
    pub fn next(&self) -> u64 {
        self.hits.fetch_add(1, Ordering::Relaxed)
    }

    /// Current value. May already be stale when the caller looks at it.
    pub fn get(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }
}
