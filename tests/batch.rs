use rand::RngCore;

use pippenger_msm::batch::{batch_scalar_multiplication, batch_to_affine};
use pippenger_msm::curve::scalar_mul::mul_windowed;
use pippenger_msm::curve::Jacobian;
use pippenger_msm::curves::bn254;
use pippenger_msm::scalar::Scalar;

const SCALAR_LIMBS: usize = bn254::SCALAR_LIMBS;

fn random_scalar() -> Scalar<SCALAR_LIMBS> {
    let mut limbs = [0u64; SCALAR_LIMBS];
    let mut rng = rand::thread_rng();
    for limb in limbs.iter_mut() {
        *limb = rng.next_u64();
    }
    Scalar(limbs)
}

#[test]
fn batch_to_affine_matches_individual_conversion() {
    let g = Jacobian::from_affine(&bn254::g1_generator());
    let points: Vec<_> = (0..9)
        .map(|_| mul_windowed(&g, &random_scalar()))
        .collect();

    let batched = batch_to_affine(&points);
    for (p, a) in points.iter().zip(batched.iter()) {
        assert!(p.to_affine().equal(a));
    }
}

#[test]
fn batch_to_affine_handles_interior_infinities() {
    let g = Jacobian::from_affine(&bn254::g1_generator());
    let mut points = vec![
        mul_windowed(&g, &random_scalar()),
        Jacobian::identity(),
        mul_windowed(&g, &random_scalar()),
        Jacobian::identity(),
        Jacobian::identity(),
        mul_windowed(&g, &random_scalar()),
    ];
    // A leading infinity too, so the compacted "live" index list does not
    // start at 0.
    points.insert(0, Jacobian::identity());

    let batched = batch_to_affine(&points);
    for (p, a) in points.iter().zip(batched.iter()) {
        if p.is_infinity() {
            assert!(a.is_infinity());
        } else {
            assert!(p.to_affine().equal(a));
        }
    }
}

#[test]
fn batch_to_affine_of_all_infinities_is_all_identity() {
    let points = vec![Jacobian::identity(); 4];
    let batched = batch_to_affine(&points);
    assert!(batched.iter().all(|a| a.is_infinity()));
}

#[test]
fn batch_to_affine_of_empty_slice_is_empty() {
    let points: Vec<Jacobian<pippenger_msm::field::Fp<bn254::Bn254Fp>>> = Vec::new();
    assert!(batch_to_affine(&points).is_empty());
}

#[test]
fn batch_scalar_multiplication_matches_individual_mul_windowed() {
    let base = bn254::g1_generator();
    let base_jac = Jacobian::from_affine(&base);
    let scalars: Vec<_> = (0..11).map(|_| random_scalar()).collect();

    let batched = batch_scalar_multiplication(&base, &scalars);
    for (s, a) in scalars.iter().zip(batched.iter()) {
        let want = mul_windowed(&base_jac, s).to_affine();
        assert!(want.equal(a));
    }
}

#[test]
fn batch_scalar_multiplication_of_empty_scalars_is_empty() {
    let base = bn254::g1_generator();
    let scalars: Vec<Scalar<SCALAR_LIMBS>> = Vec::new();
    assert!(batch_scalar_multiplication(&base, &scalars).is_empty());
}

#[test]
fn batch_scalar_multiplication_zero_scalar_gives_identity() {
    let base = bn254::g1_generator();
    let scalars = vec![Scalar::<SCALAR_LIMBS>::ZERO];
    let result = batch_scalar_multiplication(&base, &scalars);
    assert!(result[0].is_infinity());
}
