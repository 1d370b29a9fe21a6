use rand::RngCore;

use pippenger_msm::curve::scalar_mul::mul_windowed;
use pippenger_msm::curve::{Affine, Jacobian};
use pippenger_msm::curves::{bls12_377, bn254};
use pippenger_msm::error::MsmError;
use pippenger_msm::msm::{multi_exp, MultiExpOptions};
use pippenger_msm::scalar::Scalar;

const SCALAR_LIMBS: usize = bn254::SCALAR_LIMBS;

/// A uniformly-filled `Scalar<SCALAR_LIMBS>` is a 256-bit value, not a
/// reduced `Fr` element (BN254's `r` is 254 bits) -- the engine's
/// `nbChunks = ceil(BITS/c)` drops the recoder's final carry off the top of
/// `BITS`, which is only sound for already-reduced scalars (§3: "Scalars
/// are elements of a prime field Fr"). Reducing mod `r` here keeps every
/// test scalar a genuine `Fr` element, matching what `gurvy`'s own
/// `fr.Element` always is.
fn random_scalar() -> Scalar<SCALAR_LIMBS> {
    use num_bigint::BigUint;

    let mut limbs = [0u64; SCALAR_LIMBS];
    let mut rng = rand::thread_rng();
    for limb in limbs.iter_mut() {
        *limb = rng.next_u64();
    }
    let r = &bn254::g1().order_r;
    let reduced = BigUint::from_slice(
        &limbs
            .iter()
            .flat_map(|limb| [*limb as u32, (*limb >> 32) as u32])
            .collect::<Vec<u32>>(),
    ) % r;
    Scalar::from_biguint(&reduced)
}

fn naive_msm(points: &[Affine<pippenger_msm::field::Fp<bn254::Bn254Fp>>], scalars: &[Scalar<SCALAR_LIMBS>]) -> Jacobian<pippenger_msm::field::Fp<bn254::Bn254Fp>> {
    let mut acc = Jacobian::identity();
    for (p, s) in points.iter().zip(scalars.iter()) {
        let jp = Jacobian::from_affine(p);
        acc = acc.add(&mul_windowed(&jp, s));
    }
    acc
}

fn random_points(n: usize) -> Vec<Affine<pippenger_msm::field::Fp<bn254::Bn254Fp>>> {
    let g = Jacobian::from_affine(&bn254::g1_generator());
    (0..n)
        .map(|_| mul_windowed(&g, &random_scalar()).to_affine())
        .collect()
}

#[test]
fn multi_exp_matches_naive_sum_for_small_input() {
    let points = random_points(17);
    let scalars: Vec<_> = (0..17).map(|_| random_scalar()).collect();

    let opt = MultiExpOptions::default();
    let got = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5, 6, 7, 8], &opt).unwrap();
    let want = naive_msm(&points, &scalars);

    assert!(got.equal(&want));
}

#[test]
fn multi_exp_matches_naive_sum_with_pinned_window_size() {
    let points = random_points(40);
    let scalars: Vec<_> = (0..40).map(|_| random_scalar()).collect();

    let opt = MultiExpOptions {
        c: Some(5),
        budget: None,
    };
    let got = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5, 6, 7, 8], &opt).unwrap();
    let want = naive_msm(&points, &scalars);

    assert!(got.equal(&want));
}

#[test]
fn multi_exp_of_empty_input_is_identity() {
    let points: Vec<Affine<pippenger_msm::field::Fp<bn254::Bn254Fp>>> = Vec::new();
    let scalars: Vec<Scalar<SCALAR_LIMBS>> = Vec::new();

    let opt = MultiExpOptions::default();
    let got = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5], &opt).unwrap();
    assert!(got.equal(&Jacobian::identity()));
}

#[test]
fn multi_exp_rejects_length_mismatch() {
    let points = random_points(3);
    let scalars: Vec<_> = (0..2).map(|_| random_scalar()).collect();

    let opt = MultiExpOptions::default();
    let err = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5], &opt).unwrap_err();
    assert_eq!(
        err,
        MsmError::LengthMismatch {
            points: 3,
            scalars: 2
        }
    );
}

#[test]
fn multi_exp_rejects_unsupported_pinned_window_size() {
    let points = random_points(3);
    let scalars: Vec<_> = (0..3).map(|_| random_scalar()).collect();

    let opt = MultiExpOptions {
        c: Some(99),
        budget: None,
    };
    let err = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5], &opt).unwrap_err();
    assert_eq!(err, MsmError::UnsupportedWindowSize { c: 99 });
}

/// §8.6: `points[i] = i*G`, `scalars[i] = i*mu` for `i = 1..=n` -- MSM must
/// equal `[mu * n(n+1)(2n+1)/6] G`, the closed form for `sum(i^2 * mu)`.
/// Exercised across every window size this crate implements for G1, since
/// correctness must not depend on which `c` the bucket pipeline picks.
#[test]
fn multi_exp_matches_sum_of_squares_scenario_for_every_window_size() {
    use num_bigint::BigUint;

    let g = Jacobian::from_affine(&bn254::g1_generator());
    let n: u64 = 40;
    let mu = BigUint::parse_bytes(
        b"7716837800905789770901243404444209691916730933998574719964609384059111546487",
        10,
    )
    .expect("valid decimal literal");

    // Reduced mod the group order so the 254-bit `i*mu` products (which can
    // exceed `Scalar<L>`'s 256-bit storage width before reduction) match
    // the closed-form value exactly rather than truncating to the wrong
    // 256-bit window.
    let cfg = bn254::g1();
    let r = &cfg.order_r;

    let points: Vec<_> = (1..=n)
        .map(|i| mul_windowed(&g, &Scalar::<SCALAR_LIMBS>::from_u64(i)).to_affine())
        .collect();
    let scalars: Vec<_> = (1..=n)
        .map(|i| Scalar::<SCALAR_LIMBS>::from_biguint(&((&mu * BigUint::from(i)) % r)))
        .collect();

    let sum_of_squares: u64 = (1..=n).map(|i| i * i).sum();
    let expected_exponent = Scalar::<SCALAR_LIMBS>::from_biguint(&((&mu * BigUint::from(sum_of_squares)) % r));
    let expected = mul_windowed(&g, &expected_exponent);

    for &c in &[4u32, 5, 6, 7, 8] {
        let opt = MultiExpOptions {
            c: Some(c),
            budget: None,
        };
        let got = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5, 6, 7, 8], &opt).unwrap();
        assert!(got.equal(&expected), "mismatch at c = {c}");
    }
}

/// §8's concrete G2 acceptance vector: `points[i] = i*G2`, `scalars[i] =
/// i*mu` for `i = 1..=500` must give `[mu * 500*501*1001/6] G2`, i.e.
/// `[mu * 41791750] G2` -- the same sum-of-squares closed form as the G1
/// scenario above, exercised over BLS12-377's twist instead of BN254's G1.
#[test]
fn multi_exp_matches_bls12_377_g2_concrete_vector() {
    use num_bigint::BigUint;

    const G2_LIMBS: usize = bls12_377::SCALAR_LIMBS;

    let cfg = bls12_377::g2();
    let g = Jacobian::from_affine(&bls12_377::g2_generator());
    let n: u64 = 500;
    let mu = BigUint::parse_bytes(
        b"7716837800905789770901243404444209691916730933998574719964609384059111546487",
        10,
    )
    .expect("valid decimal literal");

    let r = &cfg.order_r;

    let points: Vec<_> = (1..=n)
        .map(|i| mul_windowed(&g, &Scalar::<G2_LIMBS>::from_u64(i)).to_affine())
        .collect();
    let scalars: Vec<_> = (1..=n)
        .map(|i| Scalar::<G2_LIMBS>::from_biguint(&((&mu * BigUint::from(i)) % r)))
        .collect();

    let sum_of_squares: u64 = 500 * 501 * 1001 / 6;
    assert_eq!(sum_of_squares, 41_791_750);
    let expected_exponent = Scalar::<G2_LIMBS>::from_biguint(&((&mu * BigUint::from(sum_of_squares)) % r));
    let expected = mul_windowed(&g, &expected_exponent);

    let opt = MultiExpOptions {
        c: Some(6),
        budget: None,
    };
    let got = multi_exp(&points, &scalars, Scalar::<G2_LIMBS>::BITS, &[4, 5, 6, 7, 8], &opt).unwrap();
    assert!(got.equal(&expected));
}

#[test]
fn multi_exp_runs_under_a_tracing_subscriber() {
    // `#[tracing::instrument]` on `multi_exp` and the budget's trace-level
    // acquire/release spans are only exercised if something is actually
    // subscribed; wire one up here so this crate's instrumentation is
    // covered by at least one test rather than trusted blind.
    let _ = tracing_subscriber::fmt::try_init();

    let points = random_points(20);
    let scalars: Vec<_> = (0..20).map(|_| random_scalar()).collect();

    let opt = MultiExpOptions::default();
    let got = multi_exp(&points, &scalars, Scalar::<SCALAR_LIMBS>::BITS, &[4, 5, 6], &opt).unwrap();
    let want = naive_msm(&points, &scalars);
    assert!(got.equal(&want));
}
