//! Batch fixed-base scalar multiplication (§4.9): one base point, many
//! scalars, a single signed-window precompute table reused across all of
//! them.
//!
//! Reuses this crate's own MSM scalar recoding ([`crate::msm::partition`])
//! rather than the booth-encoding scheme the retrieval pack's fixed-base
//! precompute examples (`eth-kzg`'s `fixed_base_msm_window.rs`) use, since
//! this crate already has a signed-digit recoder with the exact bit-layout
//! contract the bucket selector depends on -- introducing a second,
//! differently-shaped recoding for this one routine would be two ways to
//! do the same thing for no benefit.

use crate::curve::affine::Affine;
use crate::curve::jacobian::Jacobian;
use crate::field::Field;
use crate::msm::partition::{decode_digit, nb_chunks, partition_scalars};
use crate::scalar::Scalar;

use super::inversion::batch_to_affine;

/// Minimizes `2^(c-1) + n*(b_bits + ceil(b_bits/c))` over `c in [2, 17]`
/// (§4.9): unlike [`crate::msm::window::choose_window_size`], this table is
/// built once per *base point* rather than once per *input point*, so the
/// cost model trades off table size against number of doublings per
/// scalar rather than against number of points.
pub fn choose_batch_window_size(n: usize, b_bits: u32) -> u32 {
    let n = n as u64;
    let b = b_bits as u64;

    let mut best_c = 2u32;
    let mut best_cost = u64::MAX;
    for c in 2..=17u32 {
        let chunks = (b).div_ceil(c as u64);
        let cost = (1u64 << (c - 1)) + n * (b + chunks);
        if cost < best_cost {
            best_cost = cost;
            best_c = c;
        }
    }
    best_c
}

/// `BatchScalarMultiplication(base, scalars[])`: for each `scalars[i]`,
/// returns `[scalars[i]] * base`, computed by sharing one signed-window
/// table of `base`'s multiples and folding all outputs through a single
/// batch affine conversion (§4.10) at the end.
///
/// Unlike `MultiExp`, this entry point has no array-length precondition to
/// violate -- there is exactly one `scalars` array and the single `base`
/// broadcasts across it by construction, so there is no [`crate::error`]
/// counterpart here; the result is total, matching §7's "core is total
/// under preconditions" for operations that genuinely have none. See
/// DESIGN.md.
pub fn batch_scalar_multiplication<F: Field, const L: usize>(base: &Affine<F>, scalars: &[Scalar<L>]) -> Vec<Affine<F>> {
    if scalars.is_empty() {
        return Vec::new();
    }

    let b_bits = Scalar::<L>::BITS;
    let c = choose_batch_window_size(scalars.len(), b_bits);
    let n_table = 1usize << (c - 1);

    let mut jac_table = Vec::with_capacity(n_table);
    let mut current = Jacobian::from_affine(base);
    for _ in 0..n_table {
        jac_table.push(current.clone());
        current = current.add_mixed(base);
    }
    let table = batch_to_affine(&jac_table);

    let recoded = partition_scalars(scalars, c);
    let n_chunks = nb_chunks(b_bits, c);

    let mut results = Vec::with_capacity(scalars.len());
    for scalar in &recoded {
        let mut acc = Jacobian::identity();
        for (iter, k) in (0..n_chunks).rev().enumerate() {
            if iter != 0 {
                for _ in 0..c {
                    acc = acc.double();
                }
            }
            let bits = scalar.window(k, c);
            if let Some((idx, subtract)) = decode_digit(bits, c) {
                let entry = &table[idx];
                acc = if subtract {
                    acc.add_mixed(&entry.neg())
                } else {
                    acc.add_mixed(entry)
                };
            }
        }
        results.push(acc);
    }

    batch_to_affine(&results)
}
