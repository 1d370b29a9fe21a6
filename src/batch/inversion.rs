//! Montgomery batch affine conversion (§4.10): `n` Jacobian points,
//! possibly some at infinity, converted to affine with one field inversion
//! amortized across all of them instead of one inversion each.
//!
//! The three-pass shape (accumulate products forward, invert once, unwind
//! backward) follows the `batch_normalization` routines in the retrieval
//! pack's short-Weierstrass-Jacobian example repos, generalized here from
//! "skip already-normalized points" to "skip points at infinity", since
//! this crate's [`crate::curve::jacobian::Jacobian`] has no separate
//! already-affine representation to special-case.

use crate::curve::affine::Affine;
use crate::curve::jacobian::Jacobian;
use crate::field::Field;

/// Converts every point in `points` to affine, performing exactly one field
/// inversion regardless of `points.len()`. Points at infinity map to
/// [`Affine::identity`] and never touch the shared inversion.
pub fn batch_to_affine<F: Field>(points: &[Jacobian<F>]) -> Vec<Affine<F>> {
    let n = points.len();
    if n == 0 {
        return Vec::new();
    }

    // Indices of the non-infinity points, compacted so the running-product
    // pass never has to special-case a gap of infinities.
    let live: Vec<usize> = (0..n).filter(|&i| !points[i].is_infinity()).collect();
    if live.is_empty() {
        return points.iter().map(|_| Affine::identity()).collect();
    }

    // First pass: `running[k]` = product of Z over `live[0..=k]`.
    let mut running = Vec::with_capacity(live.len());
    let mut acc = F::one();
    for &i in &live {
        acc = acc.mul(&points[i].z);
        running.push(acc.clone());
    }

    let mut acc_inv = acc.inverse().expect("nonzero product of nonzero Z's");

    // Second pass, backward: peel one Z off `acc_inv` per step, pairing it
    // with the running product *up to the previous* live point (1 for the
    // first live point) to recover that point's individual Z inverse.
    let mut z_inv = vec![None; n];
    for (k, &i) in live.iter().enumerate().rev() {
        let prev_running = if k == 0 { F::one() } else { running[k - 1].clone() };
        z_inv[i] = Some(acc_inv.mul(&prev_running));
        acc_inv = acc_inv.mul(&points[i].z);
    }

    points
        .iter()
        .zip(z_inv)
        .map(|(p, zi)| match zi {
            None => Affine::identity(),
            Some(zi) => {
                let zi2 = zi.square();
                let zi3 = zi2.mul(&zi);
                Affine::new(p.x.mul(&zi2), p.y.mul(&zi3))
            }
        })
        .collect()
}
