//! Errors returned by this crate's public, caller-facing entry points.
//!
//! The core is total under preconditions (every operation in [`crate::curve`]
//! returns a point and cannot fail). `MultiExp` is the one entry point a
//! caller can plausibly misuse by accident — mismatched slice lengths, an
//! unsupported window override — and it rejects those instead of panicking,
//! so a service embedding this crate can log and reject the request rather
//! than aborting the process. `BatchScalarMultiplication` takes a single
//! base and one scalars array, so it has no analogous length precondition
//! and returns its result directly rather than a `Result`. Internal helpers
//! that are only ever reached once a caller has already passed `MultiExp`'s
//! checks continue to assume their precondition and `debug_assert!` it.

use thiserror::Error;

/// Errors returned by [`crate::msm::multi_exp`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MsmError {
    /// `points` and `scalars` were not the same length.
    #[error("points has length {points} but scalars has length {scalars}")]
    LengthMismatch { points: usize, scalars: usize },

    /// The caller pinned a window size `c` outside the implemented set.
    #[error("window size {c} is not in the implemented set")]
    UnsupportedWindowSize { c: u32 },
}
