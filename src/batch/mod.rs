//! Batch routines (§4.9, §4.10): Montgomery batch affine conversion and
//! batch fixed-base scalar multiplication, both built on one amortized
//! field inversion rather than one inversion per point/scalar.
//!
//! Grounded in the same "Montgomery's trick" batch-normalization pattern
//! widely used for `CurveGroup::batch_normalization` in the pairing/curve
//! example repos in the retrieval pack (e.g. `short_weierstrass_jacobian.rs`'s
//! `batch_normalization`); the fixed-base precompute-table shape mirrors
//! the windowed fixed-base MSM precompute in the pack's `eth-kzg`
//! `fixed_base_msm_window.rs`, adapted here to the signed-digit recoding
//! this crate's MSM engine already implements (§4.5) rather than a
//! booth-encoding scheme.

pub mod fixed_base;
pub mod inversion;

pub use fixed_base::{batch_scalar_multiplication, choose_batch_window_size};
pub use inversion::batch_to_affine;
