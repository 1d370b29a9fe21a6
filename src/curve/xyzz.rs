//! Extended Jacobian ("XYZZ") points (X, Y, ZZ, ZZZ ∈ F) with invariant
//! `ZZ³ = ZZZ²`. Used exclusively inside MSM bucket accumulation: mixed
//! addition of an affine point into an XYZZ accumulator is cheaper than into
//! a Jacobian one, and buckets are never compared or output directly — only
//! folded and projected once by [`XyzzPoint::project_unsafe`].
//!
//! `mAdd`/`mSub`/`double`/`doubleNeg` implement madd-2008-s / dbl-2008-s.
//! The identity encoding is `(1, 1, 0, 0)`; per the design notes, the
//! "become an affine point" branches of `mAdd`/`mSub` assign all four
//! coordinates as a single struct literal rather than mutating fields one at
//! a time, so there is never an observable state where the identity's
//! placeholder `X, Y` survive alongside a freshly-set nonzero `ZZ`/`ZZZ`.

use crate::curve::affine::Affine;
use crate::curve::jacobian::Jacobian;
use crate::field::Field;

#[derive(Clone, Debug)]
pub struct XyzzPoint<F: Field> {
    pub x: F,
    pub y: F,
    pub zz: F,
    pub zzz: F,
}

impl<F: Field> XyzzPoint<F> {
    pub fn identity() -> Self {
        Self {
            x: F::one(),
            y: F::one(),
            zz: F::zero(),
            zzz: F::zero(),
        }
    }

    pub fn set_infinity(&mut self) {
        *self = Self::identity();
    }

    pub fn is_infinity(&self) -> bool {
        self.zz.is_zero()
    }

    /// Projects to Jacobian as `(X', Y', Z') = (ZZ²·X, ZZZ²·Y, ZZZ)`,
    /// inversion-free: with `Z' = ZZZ`, `X'/Z'² = ZZ²·X/ZZZ² = X/ZZ` (using
    /// `ZZ³ = ZZZ²`) and `Y'/Z'³ = Y/ZZZ`, matching the XYZZ affine point
    /// exactly. Does not check `ZZ != 0` -- the caller (the bucket-reduction
    /// prefix sum, section 4.7) only calls this once it has already
    /// established the bucket is not the identity.
    pub fn project_unsafe(&self) -> Jacobian<F> {
        let zz2 = self.zz.square();
        let zzz2 = self.zzz.square();
        Jacobian {
            x: self.x.mul(&zz2),
            y: self.y.mul(&zzz2),
            z: self.zzz.clone(),
        }
    }

    /// dbl-2008-s: doubles the affine point `a` directly into an XYZZ
    /// result (used both for genuine doubling and, with `a.y` negated, for
    /// `doubleNeg`).
    fn double_affine(a: &Affine<F>) -> Self {
        let u = a.y.double();
        let v = u.square();
        let w = u.mul(&v);
        let s = a.x.mul(&v);
        let xx = a.x.square();
        let m = xx.double().add(&xx);
        let x3 = m.square().sub(&s.double());
        let y3 = m.mul(&s.sub(&x3)).sub(&w.mul(&a.y));
        Self {
            x: x3,
            y: y3,
            zz: v,
            zzz: w,
        }
    }

    pub fn double(a: &Affine<F>) -> Self {
        Self::double_affine(a)
    }

    pub fn double_neg(a: &Affine<F>) -> Self {
        Self::double_affine(&a.neg())
    }

    /// madd-2008-s with the identity short-circuits and doubling
    /// fallthrough described in §4.1.
    pub fn m_add(&mut self, a: &Affine<F>) {
        if a.is_infinity() {
            return;
        }
        if self.is_infinity() {
            *self = Self {
                x: a.x.clone(),
                y: a.y.clone(),
                zz: F::one(),
                zzz: F::one(),
            };
            return;
        }

        let u2 = a.x.mul(&self.zz);
        let s2 = a.y.mul(&self.zzz);
        let p = u2.sub(&self.x);
        let r = s2.sub(&self.y);

        if p.is_zero() && r.is_zero() {
            *self = Self::double(a);
            return;
        }
        if p.is_zero() {
            self.set_infinity();
            return;
        }

        let pp = p.square();
        let ppp = p.mul(&pp);
        let q = self.x.mul(&pp);
        let x3 = r.square().sub(&ppp).sub(&q.double());
        let y3 = r.mul(&q.sub(&x3)).sub(&self.y.mul(&ppp));
        let zz3 = self.zz.mul(&pp);
        let zzz3 = self.zzz.mul(&ppp);

        self.x = x3;
        self.y = y3;
        self.zz = zz3;
        self.zzz = zzz3;
    }

    /// `mAdd` with the operand negated; falls through to `doubleNeg`.
    pub fn m_sub(&mut self, a: &Affine<F>) {
        if a.is_infinity() {
            return;
        }
        if self.is_infinity() {
            let neg = a.neg();
            *self = Self {
                x: neg.x.clone(),
                y: neg.y.clone(),
                zz: F::one(),
                zzz: F::one(),
            };
            return;
        }

        let u2 = a.x.mul(&self.zz);
        let s2 = a.y.neg().mul(&self.zzz);
        let p = u2.sub(&self.x);
        let r = s2.sub(&self.y);

        if p.is_zero() && r.is_zero() {
            *self = Self::double_neg(a);
            return;
        }
        if p.is_zero() {
            self.set_infinity();
            return;
        }

        let pp = p.square();
        let ppp = p.mul(&pp);
        let q = self.x.mul(&pp);
        let x3 = r.square().sub(&ppp).sub(&q.double());
        let y3 = r.mul(&q.sub(&x3)).sub(&self.y.mul(&ppp));
        let zz3 = self.zz.mul(&pp);
        let zzz3 = self.zzz.mul(&ppp);

        self.x = x3;
        self.y = y3;
        self.zz = zz3;
        self.zzz = zzz3;
    }
}
