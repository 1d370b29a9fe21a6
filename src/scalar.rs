//! Fixed-limb scalar representation.
//!
//! Per the data model, a scalar is a sequence of `L` 64-bit limbs, stored
//! little-endian by limb with each limb little-endian in bits. Unlike
//! [`crate::field::Fp`], which is free to pick whatever representation is
//! convenient because nothing above it inspects its bit pattern, this type
//! exists precisely because the signed-digit recoder
//! ([`crate::msm::partition`]) and the per-chunk bucket selector
//! (`msmProcessChunk`'s `index`/`shift`/`mask` arithmetic) must scan a
//! scalar's limb layout bit-for-bit. A `BigUint` gives no guarantee about
//! its limb count or limb width, so it cannot stand in here; `Scalar<L>`
//! pins both.

use num_bigint::BigUint;

/// A scalar with a fixed limb count `L`, i.e. a bit width of `64 * L`.
///
/// Recoded scalars (the output of [`crate::msm::partition::partition_scalars`])
/// reuse this exact storage layout: each `c`-bit window is overwritten in
/// place with a signed digit using the `msbWindow` sign-bit convention, so
/// the bucket selector can keep reading a plain `Scalar<L>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar<const L: usize>(pub [u64; L]);

impl<const L: usize> Scalar<L> {
    pub const ZERO: Self = Self([0u64; L]);

    /// Bit width of this scalar representation.
    pub const BITS: u32 = (L as u32) * 64;

    pub fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; L];
        limbs[0] = v;
        Self(limbs)
    }

    /// Truncates `v` to the low `L * 64` bits.
    pub fn from_biguint(v: &BigUint) -> Self {
        let mut limbs = [0u64; L];
        let digits = v.to_u64_digits();
        for (limb, digit) in limbs.iter_mut().zip(digits.into_iter()) {
            *limb = digit;
        }
        Self(limbs)
    }

    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_slice(
            &self
                .0
                .iter()
                .flat_map(|limb| [*limb as u32, (*limb >> 32) as u32])
                .collect::<Vec<u32>>(),
        )
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// The value of bit `i` (`0` = least significant), `false` if `i >= BITS`.
    pub fn bit(&self, i: u32) -> bool {
        if i >= Self::BITS {
            return false;
        }
        let limb = (i / 64) as usize;
        let shift = i % 64;
        (self.0[limb] >> shift) & 1 == 1
    }

    /// Big-endian byte serialization, used by [`crate::curve::scalar_mul::mul_windowed`].
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(L * 8);
        for limb in self.0.iter().rev() {
            out.extend_from_slice(&limb.to_be_bytes());
        }
        out
    }

    /// Numeric comparison (most significant limb first).
    pub fn cmp_numeric(&self, other: &Self) -> std::cmp::Ordering {
        for i in (0..L).rev() {
            match self.0[i].cmp(&other.0[i]) {
                std::cmp::Ordering::Equal => continue,
                ord => return ord,
            }
        }
        std::cmp::Ordering::Equal
    }

    /// Extracts the raw (unsigned) `c`-bit window starting at bit `k * c`,
    /// combining two adjacent limbs when the window straddles a limb
    /// boundary. This is the selector described for `msmProcessChunk`,
    /// exposed here so [`crate::msm::partition`] and the bucket-fill worker
    /// share one implementation.
    pub fn window(&self, k: u32, c: u32) -> u64 {
        let bit_pos = k * c;
        if bit_pos >= Self::BITS {
            return 0;
        }
        let index = (bit_pos / 64) as usize;
        let shift = bit_pos % 64;
        let mask = if c == 64 { u64::MAX } else { (1u64 << c) - 1 };

        let low = self.0[index] >> shift;
        let multi_word_select = shift > 64 - c && index < L - 1;
        if multi_word_select {
            let nb_bits_high = 64 - shift;
            let high = self.0[index + 1] & ((1u64 << (c - nb_bits_high)) - 1);
            (low | (high << nb_bits_high)) & mask
        } else {
            low & mask
        }
    }

    /// Overwrites the `c`-bit window starting at bit `k * c` with `value`'s
    /// low `c` bits, combining two adjacent limbs exactly as [`Self::window`]
    /// reads them. Used by [`crate::msm::partition::partition_scalars`] to
    /// recode a scalar's windows in place.
    pub fn set_window(&mut self, k: u32, c: u32, value: u64) {
        let bit_pos = k * c;
        if bit_pos >= Self::BITS {
            return;
        }
        let index = (bit_pos / 64) as usize;
        let shift = bit_pos % 64;

        let low_bits = (64 - shift).min(c);
        let low_mask = if low_bits == 64 { u64::MAX } else { (1u64 << low_bits) - 1 };
        self.0[index] &= !(low_mask << shift);
        self.0[index] |= (value & low_mask) << shift;

        let multi_word_select = shift > 64 - c && index < L - 1;
        if multi_word_select {
            let high_bits = c - low_bits;
            let high_mask = (1u64 << high_bits) - 1;
            self.0[index + 1] &= !high_mask;
            self.0[index + 1] |= (value >> low_bits) & high_mask;
        }
    }
}
