//! The parallel Pippenger multi-scalar multiplication engine.
//!
//! - [`window`] — window-size selection (§4.6)
//! - [`partition`] — signed-digit scalar recoding (§4.5)
//! - [`budget`] — the bounded-parallelism `CpuBudget` (§5)
//! - [`engine`] — `MultiExp` itself: scheduling, per-chunk bucket
//!   processing, and the cross-chunk fold (§4.6-§4.8)

pub mod budget;
pub mod engine;
pub mod partition;
pub mod window;

pub use budget::CpuBudget;
pub use engine::{multi_exp, MultiExpOptions};
