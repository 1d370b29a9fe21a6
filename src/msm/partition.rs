//! `partitionScalars` (§4.5): rewrites a slice of scalars into signed-digit
//! form over `c`-bit windows.
//!
//! For each scalar, walking chunks least-significant first: `digit := carry
//! + window`; if `digit >= 2^(c-1)`, subtract `2^c` and carry a `1` into the
//! next chunk, otherwise carry `0`; the sign of the (now possibly negative)
//! digit is folded into bit `c-1` of the stored word (`msbWindow`) rather
//! than kept as a separate sign: `digit >= 0` stores `digit` directly,
//! `digit < 0` stores `(-digit - 1) | msbWindow`. The last chunk may be
//! narrower than `c` bits; the encoding is unaffected since the unread high
//! bits are implicitly zero and produce no further carry.
//!
//! Recoding is embarrassingly parallel across scalars and runs over `rayon`,
//! mirroring the reference's `parallel.Execute(n, worker)` partitioning.

use rayon::prelude::*;

use crate::scalar::Scalar;

/// Number of `c`-bit chunks needed to cover a `bits`-bit scalar.
pub fn nb_chunks(bits: u32, c: u32) -> u32 {
    bits.div_ceil(c)
}

/// Recodes every scalar in `scalars` into signed-digit form over `c`-bit
/// windows, returning a freshly allocated vector of the same shape.
pub fn partition_scalars<const L: usize>(scalars: &[Scalar<L>], c: u32) -> Vec<Scalar<L>> {
    scalars.par_iter().map(|s| partition_one(s, c)).collect()
}

fn partition_one<const L: usize>(s: &Scalar<L>, c: u32) -> Scalar<L> {
    let chunks = nb_chunks(Scalar::<L>::BITS, c);
    let msb_window = 1u64 << (c - 1);
    let mut out = *s;
    let mut carry: i64 = 0;

    for k in 0..chunks {
        let raw = s.window(k, c) as i64;
        let mut digit = carry + raw;

        if digit >= msb_window as i64 {
            digit -= 1i64 << c;
            carry = 1;
        } else {
            carry = 0;
        }

        let encoded: u64 = if digit >= 0 {
            digit as u64
        } else {
            ((-digit - 1) as u64) | msb_window
        };

        out.set_window(k, c, encoded);
    }

    out
}

/// The sign bit used inside a recoded window: bit `c - 1`.
pub fn msb_window(c: u32) -> u64 {
    1u64 << (c - 1)
}

/// Splits a recoded digit word into `(bucket_index, subtract)` -- `None`
/// means a zero digit, which the bucket-fill step (§4.7) skips entirely.
/// Positive digits index `bits - 1` (an `mAdd`); negative digits (tagged by
/// the `msbWindow` bit) index the stored magnitude directly (an `mSub`),
/// the asymmetry following from the encoding's range: a stored positive
/// digit is in `[1, 2^(c-1) - 1]` while a stored negative magnitude spans
/// the full `[0, 2^(c-1) - 1]`.
pub fn decode_digit(bits: u64, c: u32) -> Option<(usize, bool)> {
    if bits == 0 {
        return None;
    }
    let msb = msb_window(c);
    if bits & msb == 0 {
        Some(((bits - 1) as usize, false))
    } else {
        Some(((bits & !msb) as usize, true))
    }
}
