//! The base field `Fp`, a prime field reduced modulo a curve-specific
//! modulus.
//!
//! `Fp<P>` is a thin wrapper around [`BigUint`] carrying a zero-sized marker
//! `P` that names which curve's modulus governs it; `P` is never
//! instantiated, only used at the type level so that, say, a BLS12-377 `Fp`
//! value and a BLS12-381 `Fp` value are different Rust types and cannot be
//! accidentally mixed in an addition. The modulus itself is computed once
//! per `P` and cached behind a `OnceLock`, since `BigUint` has no `const`
//! constructor.

use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::fmt;
use std::marker::PhantomData;

use crate::field::Field;

/// Names a prime modulus for [`Fp`]. Implementors are zero-sized marker
/// types; the modulus itself lives in [`FpParams::modulus`], computed once
/// and cached.
pub trait FpParams: Clone + Copy + fmt::Debug + Send + Sync + Eq + 'static {
    /// The field's prime modulus, as a decimal string. Parsed once and
    /// cached by [`FpParams::modulus`].
    const MODULUS_DEC: &'static str;

    /// The field's prime modulus.
    fn modulus() -> &'static BigUint;
}

/// An element of `Fp`, reduced into `[0, modulus)` after every operation.
#[derive(Clone)]
pub struct Fp<P: FpParams> {
    value: BigUint,
    _marker: PhantomData<P>,
}

impl<P: FpParams> Fp<P> {
    /// Builds an `Fp` element from an already-reduced `BigUint`. Reduces
    /// defensively in case the caller passes an out-of-range value.
    pub fn from_biguint(value: BigUint) -> Self {
        Self {
            value: value % P::modulus(),
            _marker: PhantomData,
        }
    }

    /// Builds an `Fp` element from a non-negative decimal literal.
    pub fn from_dec_str(s: &str) -> Self {
        let v = BigUint::parse_bytes(s.as_bytes(), 10).expect("valid decimal literal");
        Self::from_biguint(v)
    }

    /// The canonical representative in `[0, modulus)`.
    pub fn value(&self) -> &BigUint {
        &self.value
    }
}

impl<P: FpParams> fmt::Debug for Fp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fp({})", self.value)
    }
}

impl<P: FpParams> PartialEq for Fp<P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
impl<P: FpParams> Eq for Fp<P> {}

impl<P: FpParams> Field for Fp<P> {
    fn zero() -> Self {
        Self {
            value: BigUint::zero(),
            _marker: PhantomData,
        }
    }

    fn one() -> Self {
        Self {
            value: BigUint::one(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    fn add(&self, rhs: &Self) -> Self {
        let sum = &self.value + &rhs.value;
        let m = P::modulus();
        Self::from_biguint(if &sum >= m { sum - m } else { sum })
    }

    fn sub(&self, rhs: &Self) -> Self {
        let m = P::modulus();
        let lhs = &self.value;
        if lhs >= &rhs.value {
            Self::from_biguint(lhs - &rhs.value)
        } else {
            Self::from_biguint(m + lhs - &rhs.value)
        }
    }

    fn neg(&self) -> Self {
        if self.is_zero() {
            self.clone()
        } else {
            Self::from_biguint(P::modulus() - &self.value)
        }
    }

    fn mul(&self, rhs: &Self) -> Self {
        Self::from_biguint(&self.value * &rhs.value)
    }

    /// Extended Euclidean algorithm over [`BigInt`], since `num-bigint` has
    /// no built-in modular inverse. `None` iff `self` is zero; the modulus
    /// is prime for every curve this crate supports, so `gcd(self, m) != 1`
    /// cannot otherwise occur for a nonzero element.
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let m = BigInt::from(P::modulus().clone());
        let mut old_r = BigInt::from(self.value.clone());
        let mut r = m.clone();
        let mut old_s = BigInt::one();
        let mut s = BigInt::zero();

        while !r.is_zero() {
            let q = &old_r / &r;
            let new_r = &old_r - &q * &r;
            old_r = r;
            r = new_r;
            let new_s = &old_s - &q * &s;
            old_s = s;
            s = new_s;
        }

        if old_r != BigInt::one() {
            return None;
        }

        let reduced = ((old_s % &m) + &m) % &m;
        Some(Self::from_biguint(
            reduced.to_biguint().expect("reduced into [0, m)"),
        ))
    }

    /// `Fp` has no non-trivial automorphism over itself.
    fn conjugate(&self) -> Self {
        self.clone()
    }
}
