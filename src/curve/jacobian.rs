//! Jacobian points (X, Y, Z ∈ F) and the group law over them.
//!
//! Identity is `(1, 1, 0)`; an affine `(x, y)` is represented by any
//! `(λ²x, λ³y, λ)` with `λ ≠ 0`. `AddAssign` uses the add-2007-bl formulas,
//! `AddMixed` uses madd-2007-bl, `DoubleAssign` uses dbl-2007-bl — all three
//! specialized to `a = 0`, which holds for every curve family this crate
//! targets. Each carries the identity short-circuit at both operands and the
//! `(U1=U2 ∧ S1=S2)` equality test falling through to doubling, exactly as
//! the reference formulas require to avoid dividing by zero on like-operand
//! input.

use crate::curve::affine::Affine;
use crate::field::Field;

#[derive(Clone, Debug)]
pub struct Jacobian<F: Field> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Field> Jacobian<F> {
    pub fn identity() -> Self {
        Self {
            x: F::one(),
            y: F::one(),
            z: F::zero(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn from_affine(a: &Affine<F>) -> Self {
        if a.infinity {
            Self::identity()
        } else {
            Self {
                x: a.x.clone(),
                y: a.y.clone(),
                z: F::one(),
            }
        }
    }

    pub fn to_affine(&self) -> Affine<F> {
        if self.is_infinity() {
            return Affine::identity();
        }
        let z_inv = self.z.inverse().expect("nonzero Z checked above");
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        Affine::new(self.x.mul(&z_inv2), self.y.mul(&z_inv3))
    }

    /// Equality of the affine projections, without paying for an inversion:
    /// cross-multiply by both Z powers instead.
    pub fn equal(&self, other: &Self) -> bool {
        match (self.is_infinity(), other.is_infinity()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => {
                let z1z1 = self.z.square();
                let z2z2 = other.z.square();
                let u1 = self.x.mul(&z2z2);
                let u2 = other.x.mul(&z1z1);
                if !u1.equal(&u2) {
                    return false;
                }
                let s1 = self.y.mul(&other.z).mul(&z2z2);
                let s2 = other.y.mul(&self.z).mul(&z1z1);
                s1.equal(&s2)
            }
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            x: self.x.clone(),
            y: self.y.neg(),
            z: self.z.clone(),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// dbl-2007-bl, specialized to `a = 0` (`M = 3*X1^2`).
    pub fn double(&self) -> Self {
        if self.is_infinity() {
            return self.clone();
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let yyyy = yy.square();
        let zz = self.z.square();
        let s = self
            .x
            .add(&yy)
            .square()
            .sub(&xx)
            .sub(&yyyy)
            .double();
        let m = xx.double().add(&xx);
        let t = m.square().sub(&s.double());
        let x3 = t.clone();
        let y3 = m.mul(&s.sub(&t)).sub(&yyyy.double().double().double());
        let z3 = self.y.add(&self.z).square().sub(&yy).sub(&zz);
        Self { x: x3, y: y3, z: z3 }
    }

    /// add-2007-bl: Jacobian + Jacobian, specialized to `a = 0`.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&u1);
        let r = s2.sub(&s1);

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::identity()
            };
        }

        let i = h.double().square();
        let j = h.mul(&i);
        let r2 = r.double();
        let v = u1.mul(&i);
        let x3 = r2.square().sub(&j).sub(&v.double());
        let y3 = r2.mul(&v.sub(&x3)).sub(&s1.mul(&j).double());
        let z3 = self
            .z
            .add(&other.z)
            .square()
            .sub(&z1z1)
            .sub(&z2z2)
            .mul(&h);
        Self { x: x3, y: y3, z: z3 }
    }

    /// madd-2007-bl: Jacobian + Affine, specialized to `a = 0`.
    pub fn add_mixed(&self, other: &Affine<F>) -> Self {
        if other.is_infinity() {
            return self.clone();
        }
        if self.is_infinity() {
            return Self::from_affine(other);
        }

        let z1z1 = self.z.square();
        let u2 = other.x.mul(&z1z1);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        let h = u2.sub(&self.x);
        let r = s2.sub(&self.y);

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::identity()
            };
        }

        let hh = h.square();
        let i = hh.double().double();
        let j = h.mul(&i);
        let r2 = r.double();
        let v = self.x.mul(&i);
        let x3 = r2.square().sub(&j).sub(&v.double());
        let y3 = r2.mul(&v.sub(&x3)).sub(&self.y.mul(&j).double());
        let z3 = self.z.add(&h).square().sub(&z1z1).sub(&hh);
        Self { x: x3, y: y3, z: z3 }
    }
}
