//! The quadratic extension `Fp2 = Fp[u]/(u^2 - non_residue)`, used as the
//! coordinate field of the sextic twist E'(Fp2) for curve families whose G2
//! is defined over a genuine quadratic extension (BLS12-377, BLS12-381,
//! BN254). BW6-761's twist lives directly over `Fp`, so that family simply
//! instantiates [`crate::curve`] over `Fp` for both groups and never uses
//! this module.

use std::fmt;

use crate::field::fp::{Fp, FpParams};
use crate::field::Field;

/// Extends [`FpParams`] with the non-residue `Fp2` is built from.
pub trait Fp2Params: FpParams {
    /// A quadratic non-residue in `Fp`, i.e. `u^2 = non_residue()` has no
    /// solution in `Fp`. Commonly `-1` for the curves this crate targets.
    fn non_residue() -> Fp<Self>;
}

/// An element `c0 + c1*u` of `Fp2`.
#[derive(Clone, PartialEq, Eq)]
pub struct Fp2<P: Fp2Params> {
    pub c0: Fp<P>,
    pub c1: Fp<P>,
}

impl<P: Fp2Params> fmt::Debug for Fp2<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp2({:?} + {:?}*u)", self.c0, self.c1)
    }
}

impl<P: Fp2Params> Fp2<P> {
    pub fn new(c0: Fp<P>, c1: Fp<P>) -> Self {
        Self { c0, c1 }
    }
}

impl<P: Fp2Params> Field for Fp2<P> {
    fn zero() -> Self {
        Self::new(Fp::zero(), Fp::zero())
    }

    fn one() -> Self {
        Self::new(Fp::one(), Fp::zero())
    }

    fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        Self::new(self.c0.add(&rhs.c0), self.c1.add(&rhs.c1))
    }

    fn sub(&self, rhs: &Self) -> Self {
        Self::new(self.c0.sub(&rhs.c0), self.c1.sub(&rhs.c1))
    }

    fn neg(&self) -> Self {
        Self::new(self.c0.neg(), self.c1.neg())
    }

    fn double(&self) -> Self {
        Self::new(self.c0.double(), self.c1.double())
    }

    /// `(a0 + a1*u)(b0 + b1*u) = (a0*b0 + non_residue*a1*b1) + (a0*b1 + a1*b0)*u`
    fn mul(&self, rhs: &Self) -> Self {
        let a0b0 = self.c0.mul(&rhs.c0);
        let a1b1 = self.c1.mul(&rhs.c1);
        let cross = self.c0.add(&self.c1).mul(&rhs.c0.add(&rhs.c1));
        let c0 = a0b0.add(&P::non_residue().mul(&a1b1));
        let c1 = cross.sub(&a0b0).sub(&a1b1);
        Self::new(c0, c1)
    }

    /// `(a0 + a1*u)^2 = (a0^2 + non_residue*a1^2) + 2*a0*a1*u`
    fn square(&self) -> Self {
        let a0a1 = self.c0.mul(&self.c1);
        let c0 = self
            .c0
            .square()
            .add(&P::non_residue().mul(&self.c1.square()));
        let c1 = a0a1.double();
        Self::new(c0, c1)
    }

    /// `(a0 + a1*u)^-1 = (a0 - a1*u) / (a0^2 - non_residue*a1^2)`
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let norm = self
            .c0
            .square()
            .sub(&P::non_residue().mul(&self.c1.square()));
        let norm_inv = norm.inverse()?;
        Some(Self::new(
            self.c0.mul(&norm_inv),
            self.c1.neg().mul(&norm_inv),
        ))
    }

    /// Frobenius conjugation over `Fp`: negates the `u` component.
    fn conjugate(&self) -> Self {
        Self::new(self.c0.clone(), self.c1.neg())
    }
}
