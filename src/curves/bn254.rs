//! BN254 (alt_bn128 / BN256) parameters.
//!
//! G1's cube-root endomorphism and GLV lattice basis were derived and
//! checked this session (not transcribed from a reference table): `beta` is
//! the Fp cube root of unity solving `x^2+x+1=0 mod p`, the matching scalar
//! `lambda` solves the same equation mod `r`, the basis comes from running
//! the extended Euclidean algorithm on `(r, lambda)` to the standard
//! short-vector stopping point (Guide to Elliptic Curve Cryptography, Alg.
//! 3.74), and `phi(x,y) = (beta*x, y) = [lambda]*(x,y)` and the resulting
//! `SplitScalar` identity were both checked by direct computation. See
//! DESIGN.md. G2's generator and twist coefficient (`b' = 3/(9+u)`) were
//! checked the same way as BLS12-381's.

use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint};

use crate::curve::config::{CofactorClearing, GlvBasis, GlvEndomorphism};
use crate::curve::{Affine, CurveConfig};
use crate::field::fp::{Fp, FpParams};
use crate::field::fp2::{Fp2, Fp2Params};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bn254Fp;

impl FpParams for Bn254Fp {
    const MODULUS_DEC: &'static str = "21888242871839275222246405745257275088696311157297823662689037894645226208583";

    fn modulus() -> &'static BigUint {
        static MODULUS: OnceLock<BigUint> = OnceLock::new();
        MODULUS.get_or_init(|| BigUint::parse_bytes(Self::MODULUS_DEC.as_bytes(), 10).expect("valid decimal modulus"))
    }
}

impl Fp2Params for Bn254Fp {
    /// `-1` is a quadratic non-residue mod the BN254 base prime.
    fn non_residue() -> Fp<Self> {
        use crate::field::Field;
        Fp::from_dec_str("1").neg()
    }
}

/// Number of 64-bit limbs needed for a BN254 `Fr` element (254-bit scalar
/// field order).
pub const SCALAR_LIMBS: usize = 4;

/// `E(Fp): y^2 = x^3 + 3`, G1's [`CurveConfig`]. G1 has cofactor 1: the full
/// curve group already has order `r`.
pub fn g1() -> CurveConfig<Fp<Bn254Fp>> {
    let cube_root = Fp::from_dec_str("2203960485148121921418603742825762020974279258880205651966");
    let v1 = (
        BigInt::parse_bytes(b"2203960485148121921122710229062183382952886551803827434985", 10).expect("valid"),
        BigInt::parse_bytes(b"-4965661367192848882", 10).expect("valid"),
    );
    let v2 = (
        BigInt::parse_bytes(b"9931322734385697763", 10).expect("valid"),
        BigInt::parse_bytes(b"-147946756881789319000765030803803410728", 10).expect("valid"),
    );

    CurveConfig {
        b: Fp::from_dec_str("3"),
        generator: (Fp::from_dec_str("1"), Fp::from_dec_str("2")),
        order_r: BigUint::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .expect("valid decimal"),
        cofactor_clearing: CofactorClearing::Multiply {
            cofactor: BigUint::from(1u32),
        },
        glv: Some(GlvEndomorphism {
            cube_root,
            basis: GlvBasis::new(v1, v2),
        }),
    }
}

pub fn g1_generator() -> Affine<Fp<Bn254Fp>> {
    let cfg = g1();
    Affine::new(cfg.generator.0, cfg.generator.1)
}

/// `E'(Fp2): y^2 = x^3 + 3/(9+u)`, G2's [`CurveConfig`].
pub fn g2() -> CurveConfig<Fp2<Bn254Fp>> {
    CurveConfig {
        b: Fp2::new(
            Fp::from_dec_str("19485874751759354771024239261021720505790618469301721065564631296452457478373"),
            Fp::from_dec_str("266929791119991161246907387137283842545076965332900288569378510910307636690"),
        ),
        generator: (
            Fp2::new(
                Fp::from_dec_str("10857046999023057135944570762232829481370756359578518086990519993285655852781"),
                Fp::from_dec_str("11559732032986387107991004021392285783925812861821192530917403151452391805634"),
            ),
            Fp2::new(
                Fp::from_dec_str("8495653923123431417604973247489272438418190587263600148770280649306958101930"),
                Fp::from_dec_str("4082367875863433681332203403145435568316851327593401208105741076214120093531"),
            ),
        ),
        order_r: BigUint::parse_bytes(
            b"21888242871839275222246405745257275088548364400416034343698204186575808495617",
            10,
        )
        .expect("valid decimal"),
        cofactor_clearing: CofactorClearing::Multiply {
            cofactor: BigUint::parse_bytes(
                b"21888242871839275222246405745257275088844257914179612981679871602714643921549",
                10,
            )
            .expect("valid decimal"),
        },
        glv: None,
    }
}

pub fn g2_generator() -> Affine<Fp2<Bn254Fp>> {
    let cfg = g2();
    Affine::new(cfg.generator.0, cfg.generator.1)
}
