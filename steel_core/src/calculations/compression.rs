//! # Compression Members (AISC 360-16 Chapter E)
//!
//! Flexural buckling about each principal axis (E3) and torsional buckling
//! of doubly symmetric members (E4). Both share the critical stress curve
//! of [`crate::equations::buckling::critical_stress`].
//!
//! ## Scope
//!
//! - Members without slender elements only. E7 (slender-element reduction)
//!   is not implemented; callers must not use these functions when the
//!   compression classification has a slender element.
//! - Torsional buckling handles the doubly symmetric case only. A nonzero
//!   shear-center offset returns `UnsupportedCase` rather than being
//!   approximated by the doubly symmetric formula.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::calculations::result::{CapacityDetail, CapacityResult};
use crate::calculations::{Axis, LimitState};
use crate::equations::buckling::{critical_stress, elastic_buckling_stress};
use crate::equations::registry::{Clause, Equation};
use crate::equations::section::polar_radius_squared;
use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

/// Values common to every compression limit state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxialMember {
    pub fy_ksi: f64,
    pub ag_in2: f64,
    pub e_ksi: f64,
    pub phi: f64,
    /// Compressive demand
    pub pu_kip: f64,
}

/// Section and length data for torsional buckling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorsionalProperties {
    pub ixx_in4: f64,
    pub iyy_in4: f64,
    pub j_in4: f64,
    pub cw_in6: f64,
    pub kz: f64,
    pub length_z_in: f64,
    pub g_ksi: f64,
    pub x0_in: f64,
    pub y0_in: f64,
}

impl TorsionalProperties {
    /// True when the shear center coincides with the centroid
    pub fn is_doubly_symmetric(&self) -> bool {
        self.x0_in == 0.0 && self.y0_in == 0.0
    }
}

fn flexural_limit_state(axis: Axis) -> LimitState {
    match axis {
        Axis::X => LimitState::FlexuralBucklingX,
        Axis::Y => LimitState::FlexuralBucklingY,
    }
}

/// Flexural buckling about one axis: Fe (Eq.E3-4), Fcr, Pn = Fcr·Ag (Eq.E3-1)
///
/// # Example
/// ```rust
/// use steel_core::calculations::compression::{flexural_buckling, AxialMember};
/// use steel_core::calculations::Axis;
///
/// let member = AxialMember { fy_ksi: 50.0, ag_in2: 9.13, e_ksi: 29000.0, phi: 0.9, pu_kip: 6.83 };
/// let r = flexural_buckling(Axis::X, 2.0, 102.0, 3.47105, &member).unwrap();
/// assert!((r.nominal_capacity - 354.6).abs() < 0.1);
/// ```
pub fn flexural_buckling(axis: Axis, k: f64, length_in: f64, r_in: f64, member: &AxialMember) -> CalcResult<CapacityResult> {
    let fe = elastic_buckling_stress(k, length_in, r_in, member.e_ksi)?;
    let cs = critical_stress(fe, member.fy_ksi)?;

    CapacityResult::new(
        flexural_limit_state(axis),
        cs.fcr_ksi * member.ag_in2,
        member.phi,
        member.pu_kip,
        Clause::E3,
        Equation::E3_1,
        Unit::Kip,
        CapacityDetail::FlexuralBuckling {
            axis,
            k,
            length_in,
            r_in,
            slenderness: k * length_in / r_in,
            fe_ksi: fe,
            fcr_ksi: cs.fcr_ksi,
            regime: cs.regime,
        },
    )
}

/// Torsional buckling of a doubly symmetric member (Eqs. E4-2, E4-1)
///
/// Fez = (π²E·Cw/Lcz² + G·J) / (Ag·ro²)
pub fn flexural_torsional_buckling(props: &TorsionalProperties, member: &AxialMember) -> CalcResult<CapacityResult> {
    if !props.is_doubly_symmetric() {
        return Err(CalcError::unsupported(
            "Flexural-torsional buckling",
            "shear center offset from centroid; only doubly symmetric members are handled",
        ));
    }

    let lcz = props.kz * props.length_z_in;
    if lcz <= 0.0 {
        return Err(CalcError::domain("Fez", "torsional effective length must be positive"));
    }
    let ro2 = polar_radius_squared(props.ixx_in4, props.iyy_in4, member.ag_in2)?;

    let warping = PI.powi(2) * member.e_ksi * props.cw_in6 / lcz.powi(2);
    let fe = (warping + props.g_ksi * props.j_in4) / (member.ag_in2 * ro2);
    let cs = critical_stress(fe, member.fy_ksi)?;

    CapacityResult::new(
        LimitState::FlexuralTorsionalBuckling,
        cs.fcr_ksi * member.ag_in2,
        member.phi,
        member.pu_kip,
        Clause::E4,
        Equation::E4_1,
        Unit::Kip,
        CapacityDetail::TorsionalBuckling {
            effective_length_in: lcz,
            ro2_in2: ro2,
            g_ksi: props.g_ksi,
            fe_ksi: fe,
            fcr_ksi: cs.fcr_ksi,
            regime: cs.regime,
        },
    )
}

// ============================================================================
// Slenderness (advisory)
// ============================================================================

/// Governing KL/r against the recommended limit of the E2 user note.
///
/// Reported only; it never enters the governing ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlendernessCheck {
    pub kl_r_x: Option<f64>,
    pub kl_r_y: Option<f64>,
    pub governing: f64,
    pub limit: f64,
    pub within_limit: bool,
}

/// Build the advisory record from whichever axis slenderness values are known.
pub fn slenderness_check(kl_r_x: Option<f64>, kl_r_y: Option<f64>, limit: f64) -> Option<SlendernessCheck> {
    let governing = match (kl_r_x, kl_r_y) {
        (Some(x), Some(y)) => x.max(y),
        (Some(v), None) | (None, Some(v)) => v,
        (None, None) => return None,
    };
    Some(SlendernessCheck {
        kl_r_x,
        kl_r_y,
        governing,
        limit,
        within_limit: governing <= limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::buckling::BucklingRegime;

    fn w8x31(pu_kip: f64) -> AxialMember {
        AxialMember {
            fy_ksi: 50.0,
            ag_in2: 9.13,
            e_ksi: 29000.0,
            phi: 0.90,
            pu_kip,
        }
    }

    fn w8x31_torsion() -> TorsionalProperties {
        TorsionalProperties {
            ixx_in4: 110.0,
            iyy_in4: 37.1,
            j_in4: 0.536,
            cw_in6: 531.1,
            kz: 1.0,
            length_z_in: 121.0,
            g_ksi: 29000.0 / 2.6,
            x0_in: 0.0,
            y0_in: 0.0,
        }
    }

    #[test]
    fn test_flexural_buckling_x() {
        let r = flexural_buckling(Axis::X, 2.0, 102.0, 3.471051, &w8x31(6.83)).unwrap();
        match r.detail {
            CapacityDetail::FlexuralBuckling {
                slenderness,
                fe_ksi,
                fcr_ksi,
                regime,
                ..
            } => {
                assert!((slenderness - 58.772).abs() < 0.001);
                assert!((fe_ksi - 82.86).abs() < 0.01);
                assert!((fcr_ksi - 38.84).abs() < 0.01);
                assert_eq!(regime, BucklingRegime::Inelastic);
            }
            other => panic!("unexpected detail {:?}", other),
        }
        assert!((r.nominal_capacity - 354.6).abs() < 0.05);
        assert_eq!(r.limit_state, LimitState::FlexuralBucklingX);
    }

    #[test]
    fn test_flexural_buckling_y() {
        let r = flexural_buckling(Axis::Y, 2.0, 88.0, 2.015819, &w8x31(6.83)).unwrap();
        assert!((r.nominal_capacity - 261.44).abs() < 0.01);
        assert!((r.design_capacity - 235.30).abs() < 0.01);
        assert!((r.ratio - 0.02903).abs() < 1e-4);
    }

    #[test]
    fn test_elastic_regime_for_long_column() {
        let r = flexural_buckling(Axis::Y, 1.0, 500.0, 2.015819, &w8x31(0.0)).unwrap();
        assert_eq!(r.equations()[2], Equation::E3_3);
    }

    #[test]
    fn test_zero_length_is_domain_error() {
        let err = flexural_buckling(Axis::X, 1.0, 0.0, 3.47, &w8x31(0.0)).unwrap_err();
        assert_eq!(err.error_code(), "DOMAIN_ERROR");
    }

    #[test]
    fn test_torsional_buckling_w8x31() {
        let r = flexural_torsional_buckling(&w8x31_torsion(), &w8x31(6.83)).unwrap();
        match r.detail {
            CapacityDetail::TorsionalBuckling { fe_ksi, fcr_ksi, .. } => {
                assert!((fe_ksi - 111.22).abs() < 0.01);
                assert!((fcr_ksi - 41.42).abs() < 0.01);
            }
            other => panic!("unexpected detail {:?}", other),
        }
        assert!((r.design_capacity - 340.38).abs() < 0.01);
        assert_eq!(r.clause, Clause::E4);
    }

    #[test]
    fn test_offset_shear_center_is_unsupported() {
        let props = TorsionalProperties {
            y0_in: 1.2,
            ..w8x31_torsion()
        };
        let err = flexural_torsional_buckling(&props, &w8x31(0.0)).unwrap_err();
        assert!(matches!(err, CalcError::UnsupportedCase { .. }));
    }

    #[test]
    fn test_slenderness_advisory() {
        let s = slenderness_check(Some(58.77), Some(87.31), 200.0).unwrap();
        assert_eq!(s.governing, 87.31);
        assert!(s.within_limit);

        let s = slenderness_check(None, Some(250.0), 200.0).unwrap();
        assert!(!s.within_limit);
        assert!(slenderness_check(None, None, 200.0).is_none());
    }
}
