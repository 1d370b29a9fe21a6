//! Per-curve parameters: the short Weierstrass coefficient, generator,
//! subgroup order, cofactor-clearing recipe and (optionally) the GLV
//! endomorphism data. One [`CurveConfig`] exists per group (G1 or G2) of
//! each supported curve family; see [`crate::curves`].
//!
//! Configuration here is purely in-process and compiled-in, as described in
//! the external interfaces section: there is no file or environment-driven
//! configuration surface in this crate.

use num_bigint::{BigInt, BigUint};

use crate::field::Field;

/// A 2-dimensional lattice basis for GLV scalar decomposition, plus its
/// determinant (precomputed since it is used by every split).
#[derive(Clone, Debug)]
pub struct GlvBasis {
    pub v1: (BigInt, BigInt),
    pub v2: (BigInt, BigInt),
}

impl GlvBasis {
    pub fn new(v1: (BigInt, BigInt), v2: (BigInt, BigInt)) -> Self {
        Self { v1, v2 }
    }

    fn det(&self) -> BigInt {
        &self.v1.0 * &self.v2.1 - &self.v2.0 * &self.v1.1
    }

    /// Babai's rounding algorithm (Guide to Elliptic Curve Cryptography,
    /// Algorithm 3.74): splits `k` into `(k1, k2)` with `k1 + k2*lambda ≡ k
    /// (mod r)` and both roughly half the bit width of `r`.
    pub fn split_scalar(&self, k: &BigUint) -> (BigInt, BigInt) {
        let k = BigInt::from(k.clone());
        let det = self.det();

        let c1 = round_div(&(&self.v2.1 * &k), &det);
        let c2 = round_div(&(-&self.v1.1 * &k), &det);

        let k1 = &k - &c1 * &self.v1.0 - &c2 * &self.v2.0;
        let k2 = -&c1 * &self.v1.1 - &c2 * &self.v2.1;
        (k1, k2)
    }
}

/// Rounds `a / b` to the nearest integer (ties away from zero), for Babai
/// rounding over signed `BigInt`s.
fn round_div(a: &BigInt, b: &BigInt) -> BigInt {
    let two = BigInt::from(2);
    let (q, r) = (a / b, a % b);
    let twice_r = (&r * &two).magnitude().clone();
    if twice_r >= *b.magnitude() {
        if (a.sign() == num_bigint::Sign::Plus) == (b.sign() == num_bigint::Sign::Plus) {
            q + BigInt::from(1)
        } else {
            q - BigInt::from(1)
        }
    } else {
        q
    }
}

/// The GLV endomorphism φ: multiplies the affine X coordinate by a cube
/// root of unity, plus the lattice basis used to split a scalar into the
/// two half-length components `mulGLV` walks in lockstep.
#[derive(Clone)]
pub struct GlvEndomorphism<F: Field> {
    pub cube_root: F,
    pub basis: GlvBasis,
}

/// How `ClearCofactor` projects an arbitrary `E(Fp)` point into the
/// `r`-torsion subgroup.
#[derive(Clone)]
pub enum CofactorClearing {
    /// `P - xGen*P`, the BLS-family characteristic-parameter formula (§4.4),
    /// grounded directly in the curve's own source.
    BlsCharacteristic { x_abs: BigUint, x_negative: bool },
    /// `cofactor * P`, the universally valid (if less optimized) fallback
    /// used for families whose fast endomorphism-based formula this crate
    /// does not reproduce; see DESIGN.md.
    Multiply { cofactor: BigUint },
}

/// The compiled-in constants for one group (G1 or G2) of one curve family.
#[derive(Clone)]
pub struct CurveConfig<F: Field> {
    /// The short Weierstrass `b` coefficient (curves here all have `a = 0`).
    pub b: F,
    pub generator: (F, F),
    pub order_r: BigUint,
    pub cofactor_clearing: CofactorClearing,
    pub glv: Option<GlvEndomorphism<F>>,
}
