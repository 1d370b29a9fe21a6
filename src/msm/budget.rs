//! The bounded-parallelism resource shared across concurrent `MultiExp`
//! calls (§5): a counting semaphore of worker tokens plus a mutex acting as
//! an exclusive spawn-phase gate.
//!
//! `CpuBudget` is process-wide if the caller shares one `Arc<CpuBudget>`
//! across calls; tokens guarantee at most `N` chunk workers run
//! simultaneously across every `MultiExp` sharing the budget. The
//! exclusive-phase lock is not a correctness lock over bucket state --
//! buckets are per-worker stack/local data and never shared -- it exists so
//! one `MultiExp`'s spawn loop cannot fragment the token budget across
//! another's.
//!
//! The reference models `enterSpawnPhase`/`exitSpawnPhase` as a pair of
//! calls around the spawn loop. This crate instead returns a RAII guard
//! from [`CpuBudget::enter_spawn_phase`] whose `Drop` releases the lock,
//! which is the idiomatic Rust shape for "acquire, do bounded work, always
//! release" and cannot be forgotten on an early return.

use std::sync::{Condvar, Mutex, MutexGuard};

/// A counting semaphore built from a `Mutex<usize>` + `Condvar`, since the
/// standard library has no built-in semaphore.
pub struct Semaphore {
    count: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    pub fn new(n: usize) -> Self {
        Self {
            count: Mutex::new(n),
            available: Condvar::new(),
        }
    }

    pub fn acquire(&self) {
        let mut count = self.count.lock().expect("semaphore mutex poisoned");
        while *count == 0 {
            count = self
                .available
                .wait(count)
                .expect("semaphore mutex poisoned");
        }
        *count -= 1;
    }

    pub fn release(&self) {
        let mut count = self.count.lock().expect("semaphore mutex poisoned");
        *count += 1;
        self.available.notify_one();
    }
}

/// The CPU budget described in §5.
pub struct CpuBudget {
    tokens: Semaphore,
    spawn_phase: Mutex<()>,
}

impl CpuBudget {
    pub fn new(n: usize) -> Self {
        Self {
            tokens: Semaphore::new(n.max(1)),
            spawn_phase: Mutex::new(()),
        }
    }

    /// One token per available CPU, matching the reference's default of
    /// sizing the budget to `runtime.NumCPU()`.
    pub fn for_available_parallelism() -> Self {
        let n = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        Self::new(n)
    }

    pub fn acquire_token(&self) {
        tracing::trace!("acquiring MSM worker token");
        self.tokens.acquire();
    }

    pub fn release_token(&self) {
        self.tokens.release();
    }

    /// Acquires the exclusive spawn-phase lock; the returned guard's `Drop`
    /// releases it, so the lock cannot be held past the scope that built
    /// the chunk worker list.
    pub fn enter_spawn_phase(&self) -> MutexGuard<'_, ()> {
        tracing::trace!("entering MSM spawn phase");
        self.spawn_phase
            .lock()
            .expect("spawn-phase mutex poisoned")
    }
}

impl Default for CpuBudget {
    fn default() -> Self {
        Self::for_available_parallelism()
    }
}
