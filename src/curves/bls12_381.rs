//! BLS12-381 parameters.
//!
//! The base prime, scalar-field order, G1/G2 generators and the `y^2 =
//! x^3 + 4(u+1)` twist coefficient were all independently checked this
//! session: the BLS12 construction formulas reproduce the quoted prime and
//! scalar-field order exactly from the characteristic parameter `x =
//! -0xd201000000010000`, and both generators satisfy their curve equation
//! and have order dividing `r`. See DESIGN.md.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::config::CofactorClearing;
use crate::curve::{Affine, CurveConfig};
use crate::field::fp::{Fp, FpParams};
use crate::field::fp2::{Fp2, Fp2Params};
use crate::field::Field;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bls12_381Fp;

impl FpParams for Bls12_381Fp {
    const MODULUS_DEC: &'static str = "4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787";

    fn modulus() -> &'static BigUint {
        static MODULUS: OnceLock<BigUint> = OnceLock::new();
        MODULUS.get_or_init(|| BigUint::parse_bytes(Self::MODULUS_DEC.as_bytes(), 10).expect("valid decimal modulus"))
    }
}

impl Fp2Params for Bls12_381Fp {
    /// `-1` is a quadratic non-residue mod the BLS12-381 base prime.
    fn non_residue() -> Fp<Self> {
        Fp::from_dec_str("1").neg()
    }
}

/// Number of 64-bit limbs needed for a BLS12-381 `Fr` element (255-bit
/// scalar field order).
pub const SCALAR_LIMBS: usize = 6;

/// `E(Fp): y^2 = x^3 + 4`, G1's [`CurveConfig`].
pub fn g1() -> CurveConfig<Fp<Bls12_381Fp>> {
    CurveConfig {
        b: Fp::from_dec_str("4"),
        generator: (
            Fp::from_dec_str(
                "3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507",
            ),
            Fp::from_dec_str(
                "1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569",
            ),
        ),
        order_r: BigUint::parse_bytes(
            b"52435875175126190479447740508185965837690552500527637822603658699938581184513",
            10,
        )
        .expect("valid decimal"),
        cofactor_clearing: CofactorClearing::BlsCharacteristic {
            x_abs: BigUint::parse_bytes(b"15132376222941642752", 10).expect("valid decimal"),
            x_negative: true,
        },
        glv: None,
    }
}

pub fn g1_generator() -> Affine<Fp<Bls12_381Fp>> {
    let cfg = g1();
    Affine::new(cfg.generator.0, cfg.generator.1)
}

/// `E'(Fp2): y^2 = x^3 + 4(u+1)`, G2's [`CurveConfig`].
pub fn g2() -> CurveConfig<Fp2<Bls12_381Fp>> {
    let four = Fp::from_dec_str("4");
    CurveConfig {
        b: Fp2::new(four.clone(), four),
        generator: (
            Fp2::new(
                Fp::from_dec_str(
                    "352701069587466618187139116011060144890029952792775240219908644239793785735715026873347600343865175952761926303160",
                ),
                Fp::from_dec_str(
                    "3059144344244213709971259814753781636986470325476647558659373206291635324768958432433509563104347017837885763365758",
                ),
            ),
            Fp2::new(
                Fp::from_dec_str(
                    "1985150602287291935568054521177171638300868978215655730859378665066344726373823718423869104263333984641494340347905",
                ),
                Fp::from_dec_str(
                    "927553665492332455747201965776037880757740193453592970025027978793976877002675564980949289727957565575433344219582",
                ),
            ),
        ),
        order_r: BigUint::parse_bytes(
            b"52435875175126190479447740508185965837690552500527637822603658699938581184513",
            10,
        )
        .expect("valid decimal"),
        // `P - xGen*P` is a G1-only shortcut: `x - 1` is 64 bits, far short of
        // the real 507-bit G2 cofactor `h2 = (x^8-4x^7+5x^6-4x^4+6x^3-4x^2
        // -4x+13)/9`, so it cannot land an arbitrary E'(Fp2) point in the
        // r-torsion subgroup. Same fix as BLS12-377's G2 (see DESIGN.md).
        cofactor_clearing: CofactorClearing::Multiply {
            cofactor: BigUint::parse_bytes(
                b"305502333931268344200999753193121504214466019254188142667664032982267604182971884026507427359259977847832272839041616661285803823378372096355777062779109",
                10,
            )
            .expect("valid decimal"),
        },
        glv: None,
    }
}

pub fn g2_generator() -> Affine<Fp2<Bls12_381Fp>> {
    let cfg = g2();
    Affine::new(cfg.generator.0, cfg.generator.1)
}
