use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier allocator for a single collection.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn allocate(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }

    /// Moves the cursor. Callers must pass a value above every id already handed out.
    pub fn reset_to(&self, next: u64) {
        self.next.store(next, Ordering::Relaxed);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// One allocator per mutable collection.
#[derive(Debug, Default)]
pub struct StoreSequences {
    pub teams: IdSequence,
    pub jobs: IdSequence,
    pub candidates: IdSequence,
    pub applications: IdSequence,
    pub interviews: IdSequence,
}
