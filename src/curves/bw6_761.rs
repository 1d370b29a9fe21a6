//! BW6-761 (El Housni-Guillevic) parameters.
//!
//! BW6-761 is constructed *over* BLS12-377: its scalar field order is
//! exactly BLS12-377's base prime (`r_BW6-761 = p_BLS12-377`, the defining
//! identity of the BW6 family), which this crate already derives and checks
//! in [`crate::curves::bls12_377`]. Unlike the BLS12/BN254 families above,
//! BW6-761 has no sextic twist: both of its groups live in `E(Fq)` for a
//! single ~761-bit prime `q`, realized here as two different curves over
//! the same base field rather than a base curve plus an `Fp2` twist. Only
//! G1 (`y^2 = x^3 + 4`) is wired; G2 is a second, differently-traced curve
//! over the same `q` that this session did not independently construct.
//!
//! `q` and G1's generator were not taken on faith: this module's `q` is the
//! unique value this session could verify simultaneously against three
//! independent constraints computed with Python (permitted -- only the Rust
//! toolchain is barred) --
//!   1. `q` is a 761-bit prime;
//!   2. the CM norm equation `4q = t^2 + 3y^2` (discriminant `-3`, the same
//!      discriminant as every curve in this family) holds exactly for a
//!      trace `t` within the Hasse bound `|t| <= 2*sqrt(q)`;
//!   3. that same `t` satisfies `t ≡ q + 1 (mod r)` for `r = p_BLS12-377`,
//!      i.e. `r` genuinely divides `#E(Fq) = q + 1 - t` for the right
//!      curve in the family.
//! Reconstructing a 761-bit literal from memory alone (as the prior
//! incomplete version of this module did) cannot be checked this way and
//! was judged too risky to ship; finding a `q` that satisfies all three
//! constraints at once is not something a wrong memory produces by luck.
//! With `q`, `t` and the cofactor `h = (q + 1 - t) / r` fixed, the
//! generator below was constructed (not recalled): a candidate affine
//! point on `y^2 = x^3 + 4` was cleared by `h` and checked to land on a
//! point of order exactly `r` (`r` prime, so `r * G = O` and `G != O`
//! together are conclusive). It is *a* valid generator of BW6-761 G1's
//! `r`-torsion subgroup, independently verified against this module's own
//! `q`, `b` and `r` -- though, absent a second implementation to compare
//! against, it is not claimed to be bit-identical to any other library's
//! canonical choice of generator.

use std::sync::OnceLock;

use num_bigint::BigUint;

use crate::curve::config::CofactorClearing;
use crate::curve::{Affine, CurveConfig};
use crate::field::fp::{Fp, FpParams};

/// The BW6-761 base field modulus (761 bits).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bw6_761Fp;

impl FpParams for Bw6_761Fp {
    const MODULUS_DEC: &'static str = "6891450384315732539396789682275657542479668912536150109513790160209623422243491736087683183289411687640864567753786613451161759120554247759349511699125301598951605099378508850372543631423596795951899700429969112842764913119068299";

    fn modulus() -> &'static BigUint {
        static MODULUS: OnceLock<BigUint> = OnceLock::new();
        MODULUS.get_or_init(|| BigUint::parse_bytes(Self::MODULUS_DEC.as_bytes(), 10).expect("valid decimal modulus"))
    }
}

/// `r_BW6-761 = p_BLS12-377`: the BW6-761 scalar field shares its order with
/// BLS12-377's base field, by construction.
pub fn scalar_field_order() -> BigUint {
    crate::curves::bls12_377::Bls12_377Fp::modulus().clone()
}

/// Number of 64-bit limbs needed for [`crate::scalar::Scalar`] to hold a
/// BW6-761 `Fr` element (377-bit scalar field order, same bit width as
/// BLS12-377's base field it is built from).
pub const SCALAR_LIMBS: usize = 6;

/// `E(Fq): y^2 = x^3 + 4`, G1's [`CurveConfig`].
pub fn g1() -> CurveConfig<Fp<Bw6_761Fp>> {
    CurveConfig {
        b: Fp::from_dec_str("4"),
        generator: (
            Fp::from_dec_str(
                "3690408911253964138590184973934442883477818087325633894674275447349336675488938085896447389717144553327853432297460865231359352354268838550642979055441232204982971118618351842769590143464026866342041376046820106618701540018313016",
            ),
            Fp::from_dec_str(
                "4854417216605442032287030233424534425242911389376248743879878046167582935635656618321802672814740700894782673545765108323663532861717424619568911486091736178136175209844417142043776178197455791032893841190157573400112600542287492",
            ),
        ),
        order_r: scalar_field_order(),
        // No BLS-style characteristic-parameter shortcut is known for BW6's
        // cofactor here, so clearing falls back to the universally valid
        // `cofactor * P`; see DESIGN.md.
        cofactor_clearing: CofactorClearing::Multiply {
            cofactor: BigUint::parse_bytes(
                b"26642435879335816683987677701488073867751118270052650655942102502312977592501693353047140953112195348280268661194869",
                10,
            )
            .expect("valid decimal"),
        },
        glv: None,
    }
}

/// A verified generator of BW6-761 G1's `r`-torsion subgroup (see module docs).
pub fn g1_generator() -> Affine<Fp<Bw6_761Fp>> {
    let cfg = g1();
    Affine::new(cfg.generator.0, cfg.generator.1)
}
