//! Point representations and the group law: affine, Jacobian and extended
//! Jacobian (XYZZ) coordinates (§3), the group law (§4.1), windowed and GLV
//! scalar multiplication (§4.2-4.3), cofactor clearing and subgroup
//! membership (§4.4).
//!
//! Every type here is generic over the coordinate field `F: Field`, so the
//! same code realizes both G1 (`F = Fp<P>`) and G2 (`F = Fp2<P>` for the
//! BLS/BN families, or `F = Fp<P>` again for BW6-761, whose twist is defined
//! directly over the base field).

pub mod affine;
pub mod config;
pub mod jacobian;
pub mod scalar_mul;
pub mod subgroup;
pub mod xyzz;

pub use affine::Affine;
pub use config::{CofactorClearing, CurveConfig, GlvBasis, GlvEndomorphism};
pub use jacobian::Jacobian;
pub use xyzz::XyzzPoint;
