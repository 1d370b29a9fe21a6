//! Windowed and GLV scalar multiplication.

use num_bigint::{BigUint, Sign};

use crate::curve::config::GlvEndomorphism;
use crate::curve::jacobian::Jacobian;
use crate::field::Field;
use crate::scalar::Scalar;

/// `mulWindowed`: processes the scalar's big-endian byte serialization with
/// a 2-bit window. The table `{P, 2P, 3P}` is precomputed; the accumulator
/// is doubled twice per window and conditionally incremented. Works for any
/// curve; used as the fallback when no GLV endomorphism is configured.
pub fn mul_windowed<F: Field, const L: usize>(p: &Jacobian<F>, s: &Scalar<L>) -> Jacobian<F> {
    let table = [Jacobian::identity(), p.clone(), p.double(), p.double().add(p)];

    let mut acc = Jacobian::identity();
    for byte in s.to_bytes_be() {
        for shift in [6u32, 4, 2, 0] {
            acc = acc.double().double();
            let window = ((byte >> shift) & 0b11) as usize;
            if window != 0 {
                acc = acc.add(&table[window]);
            }
        }
    }
    acc
}

/// `mulGLV`: decomposes `s` into `(k1, k2)` via the curve's lattice basis,
/// absorbs their signs into a precomputed table `{P, φ(P), P+φ(P)}`, then
/// walks both halves' bits in lockstep, one doubling per bit and one table
/// lookup (index `2*b2 + b1`) when nonzero.
pub fn mul_glv<F: Field, const L: usize>(
    p: &Jacobian<F>,
    s: &Scalar<L>,
    endo: &GlvEndomorphism<F>,
) -> Jacobian<F> {
    let phi_p = phi(p, &endo.cube_root);
    let (mut k1, mut k2) = endo.basis.split_scalar(&s.to_biguint());

    let mut table = [Jacobian::identity(), p.clone(), phi_p.clone(), p.add(&phi_p)];
    if k1.sign() == Sign::Minus {
        k1 = -k1;
        table[1] = table[1].neg();
        table[3] = table[1].add(&table[2]);
    }
    if k2.sign() == Sign::Minus {
        k2 = -k2;
        table[2] = table[2].neg();
        table[3] = table[1].add(&table[2]);
    }

    let k1 = k1.to_biguint().expect("non-negative after sign absorption");
    let k2 = k2.to_biguint().expect("non-negative after sign absorption");
    let nb_bits = k1.bits().max(k2.bits()).max(1);

    let mut acc = Jacobian::identity();
    for i in (0..nb_bits).rev() {
        acc = acc.double();
        let b1 = bigint_bit(&k1, i);
        let b2 = bigint_bit(&k2, i);
        let idx = (2 * b2 + b1) as usize;
        if idx != 0 {
            acc = acc.add(&table[idx]);
        }
    }
    acc
}

fn bigint_bit(v: &BigUint, i: u64) -> u32 {
    if v.bit(i) {
        1
    } else {
        0
    }
}

/// The endomorphism φ: multiplies the affine X coordinate by a cube root of
/// unity, fixing Y. In Jacobian coordinates `X = x*Z^2`, so scaling the
/// affine `x` by `cube_root` is the same as scaling the Jacobian `X` by
/// `cube_root` directly — no re-derivation of `Z` needed.
fn phi<F: Field>(p: &Jacobian<F>, cube_root: &F) -> Jacobian<F> {
    if p.is_infinity() {
        return p.clone();
    }
    Jacobian {
        x: p.x.mul(cube_root),
        y: p.y.clone(),
        z: p.z.clone(),
    }
}

/// `ScalarMul(P, s)` over an arbitrary-width non-negative integer: reduces
/// `s` into the fixed-limb `Scalar<L>` layout `mulWindowed`/`mulGLV` expect,
/// dispatching to GLV when the curve config provides an endomorphism.
pub fn scalar_mul<F: Field, const L: usize>(
    p: &Jacobian<F>,
    s: &BigUint,
    glv: Option<&GlvEndomorphism<F>>,
) -> Jacobian<F> {
    let scalar = Scalar::<L>::from_biguint(s);
    match glv {
        Some(endo) => mul_glv(p, &scalar, endo),
        None => mul_windowed(p, &scalar),
    }
}

/// Used by cofactor clearing: `[x]P` where `x` may be negative (the
/// characteristic parameter's sign for curves whose `x < 0`, e.g.
/// BLS12-381).
pub fn scalar_mul_bigint<F: Field, const L: usize>(
    p: &Jacobian<F>,
    x_abs: &BigUint,
    x_negative: bool,
    glv: Option<&GlvEndomorphism<F>>,
) -> Jacobian<F> {
    let r = scalar_mul::<F, L>(p, x_abs, glv);
    if x_negative {
        r.neg()
    } else {
        r
    }
}

