//! Parallel Pippenger multi-scalar multiplication over pairing-friendly curves
//!
//! This crate provides elliptic-curve group arithmetic for the BLS12-377,
//! BLS12-381, BN254 and BW6-761 families: points on E(Fp) and its sextic
//! twist E'(Fp2), scalar multiplication, and a multicore multi-scalar
//! multiplication (MSM) engine built on Pippenger's bucket method.
//!
//! The focus is on **throughput on public inputs** (commitments, verifier
//! keys) rather than constant-time execution; see [`msm`] for the
//! concurrency model and [`curve`] for the group law everything else in
//! this crate builds on.
//!
//! # Module overview
//!
//! - `field`
//!   The coordinate field layer (`Fp`, `Fp2`) consumed by everything else in
//!   this crate. Backed by an arbitrary-precision integer reduced modulo the
//!   curve's prime rather than a hand-rolled Montgomery representation; see
//!   the module docs for why.
//!
//! - `scalar`
//!   Fixed-limb scalar type used for windowed/GLV scalar multiplication and
//!   as the storage layout Pippenger's bucket selector scans bit-for-bit.
//!
//! - `curve`
//!   Affine, Jacobian and extended-Jacobian (XYZZ) point representations,
//!   the group law, windowed and GLV scalar multiplication, cofactor
//!   clearing and subgroup membership.
//!
//! - `msm`
//!   The multi-scalar multiplication engine: window-size selection, signed-
//!   digit scalar recoding, the bounded-parallelism `CpuBudget`, per-chunk
//!   bucket accumulation and the cross-chunk fold.
//!
//! - `batch`
//!   Montgomery batch affine inversion and batch fixed-base scalar
//!   multiplication.
//!
//! - `curves`
//!   Concrete parameter tables for the supported curve families.
//!
//! - `error`
//!   Typed errors for the public, caller-facing entry points (`MultiExp`,
//!   batch scalar multiplication). Internal helpers that only ever see
//!   already-validated arguments keep using `debug_assert!` instead.
//!
//! # Design goals
//!
//! - Bit-exact signed-digit recoding and bucket selection, independent of
//!   the field backend's internal representation
//! - No hidden allocation inside the MSM hot loop beyond what each chunk's
//!   bucket array requires
//! - Explicit, total-under-preconditions error handling at the public
//!   boundary; no panics on malformed caller input
//!
//! This crate is not constant-time and is not hardened against side-channel
//! adversaries; it is built for variable-time use on public values such as
//! verifier keys and commitments, never on secret scalars.

pub mod batch;
pub mod curve;
pub mod curves;
pub mod error;
pub mod field;
pub mod msm;
pub mod scalar;

pub use error::MsmError;
