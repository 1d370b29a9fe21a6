//! The coordinate field layer consumed by the group law, scalar
//! multiplication and MSM engine.
//!
//! Per-curve Montgomery limb arithmetic (the representation real pairing
//! libraries hand-roll for speed) is deliberately not reproduced here: this
//! crate treats the field as an external collaborator reached only through
//! the [`Field`] trait, and realizes that trait with an arbitrary-precision
//! integer ([`num_bigint::BigUint`]) reduced modulo the curve's prime after
//! every operation rather than with hand-transcribed reduction constants
//! nobody here can compile-check. Everything above this module — the group
//! law, scalar multiplication, the MSM bucket pipeline — is written purely
//! against [`Field`] and does not know or care which representation backs
//! it.
//!
//! [`fp`] provides the base field `Fp`; [`fp2`] provides the quadratic
//! extension `Fp2` used by the sextic twist for curve families whose G2 is
//! defined over Fp2 (BLS12-377, BLS12-381, BN254). BW6-761's twist is
//! defined directly over Fp, so its G2 simply instantiates the generic
//! curve/point types over `Fp` instead of `Fp2` — no separate field type is
//! needed for that family.

pub mod fp;
pub mod fp2;

pub use fp::{Fp, FpParams};
pub use fp2::{Fp2, Fp2Params};

use std::fmt::Debug;

/// The operation surface the rest of this crate requires from a coordinate
/// field, matching the field layer described in the system overview:
/// `add/sub/mul/square/double/neg/inverse/isZero/equal/setOne/setZero` plus
/// `conjugate` for extension fields.
///
/// `setOne`/`setZero` are realized as the associated functions [`Field::one`]
/// and [`Field::zero`] rather than in-place setters, which is the more
/// idiomatic shape for an immutable value type in Rust.
pub trait Field: Clone + Debug + PartialEq {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Whether `self` is the additive identity.
    fn is_zero(&self) -> bool;

    /// `self + rhs`.
    fn add(&self, rhs: &Self) -> Self;

    /// `self - rhs`.
    fn sub(&self, rhs: &Self) -> Self;

    /// `-self`.
    fn neg(&self) -> Self;

    /// `self + self`. The default is correct for every field; concrete
    /// implementations may override it for a cheaper doubling formula.
    fn double(&self) -> Self {
        self.add(self)
    }

    /// `self * rhs`.
    fn mul(&self, rhs: &Self) -> Self;

    /// `self * self`. The default is correct for every field; concrete
    /// implementations may override it for a cheaper squaring formula.
    fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplicative inverse, or `None` iff `self` is zero.
    fn inverse(&self) -> Option<Self>;

    /// The field automorphism fixing the base field (identity on `Fp`,
    /// negation of the non-trivial component on `Fp2`).
    fn conjugate(&self) -> Self;

    /// Value equality. Implementations must keep internal representations
    /// canonical so this agrees with `PartialEq`.
    fn equal(&self, rhs: &Self) -> bool {
        self == rhs
    }
}
