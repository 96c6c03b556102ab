//! # Flexure (AISC 360-16 Chapter F)
//!
//! Doubly symmetric I-shapes with compact webs:
//!
//! - Strong-axis yielding and lateral-torsional buckling (F2)
//! - Strong-axis compression flange local buckling (F3)
//! - Weak-axis yielding and flange local buckling (F6)
//!
//! ## LTB regimes
//!
//! ```text
//!  Mn
//!  Mp ─────────┐
//!              │ ╲  inelastic (Eq.F2-2)
//!  0.7FySx     │   ╲_____
//!              │         ‾‾‾‾──── elastic (Eq.F2-3)
//!              Lp      Lr            Lb
//! ```
//!
//! Strong-axis checks with a noncompact or slender web (F4, F5) and any
//! slender-flange case return `UnsupportedCase`.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::result::{CapacityDetail, CapacityResult, CbSource, LtbRegime};
use crate::calculations::{Axis, LimitState};
use crate::classification::{ElementClass, ElementClassification};
use crate::equations::registry::{Clause, Equation};
use crate::equations::section::{effective_radius_torsional, flange_distance, radius_of_gyration};
use crate::equations::transition::linear_transition;
use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

/// Section properties used by strong-axis flexure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrongAxisSection {
    pub ag_in2: f64,
    pub iyy_in4: f64,
    pub j_in4: f64,
    pub cw_in6: f64,
    pub sxx_in3: f64,
    pub zxx_in3: f64,
}

/// Moment gradient factor and where it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentGradient {
    pub cb: f64,
    pub source: CbSource,
}

impl MomentGradient {
    /// Supplied Cb, else the configured default
    pub fn resolve(supplied: Option<f64>, default_cb: f64) -> Self {
        match supplied {
            Some(cb) => Self {
                cb,
                source: CbSource::Supplied,
            },
            None => Self {
                cb: default_cb,
                source: CbSource::Default,
            },
        }
    }
}

/// Design parameters for lateral-torsional buckling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LtbParameters {
    pub fy_ksi: f64,
    pub e_ksi: f64,
    /// Coefficient c (Eq.F2-8a)
    pub c: f64,
    pub lb_in: f64,
    pub gradient: MomentGradient,
    pub phi: f64,
}

/// Lp, Lr and the properties behind them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitingLengths {
    pub lp_in: f64,
    pub lr_in: f64,
    pub rts_in: f64,
    pub h0_in: f64,
}

/// Lp (Eq.F2-5) and Lr (Eq.F2-6)
pub fn limiting_lengths(section: &StrongAxisSection, fy_ksi: f64, e_ksi: f64, c: f64) -> CalcResult<LimitingLengths> {
    let ry = radius_of_gyration(section.iyy_in4, section.ag_in2)?;
    let rts = effective_radius_torsional(section.iyy_in4, section.cw_in6, section.sxx_in3)?;
    let h0 = flange_distance(section.cw_in6, section.iyy_in4)?;

    let lp = 1.76 * ry * (e_ksi / fy_ksi).sqrt();

    let jc = section.j_in4 * c / (section.sxx_in3 * h0);
    let stress_term = 6.76 * (0.7 * fy_ksi / e_ksi).powi(2);
    let lr = 1.95 * rts * e_ksi / (0.7 * fy_ksi) * (jc + (jc.powi(2) + stress_term).sqrt()).sqrt();

    Ok(LimitingLengths {
        lp_in: lp,
        lr_in: lr,
        rts_in: rts,
        h0_in: h0,
    })
}

/// Elastic LTB critical stress (Eq.F2-4)
pub fn ltb_critical_stress(section: &StrongAxisSection, params: &LtbParameters, lengths: &LimitingLengths) -> f64 {
    let lb_rts = params.lb_in / lengths.rts_in;
    let jc = section.j_in4 * params.c / (section.sxx_in3 * lengths.h0_in);
    params.gradient.cb * PI.powi(2) * params.e_ksi / lb_rts.powi(2) * (1.0 + 0.078 * jc * lb_rts.powi(2)).sqrt()
}

/// Strong-axis yielding / lateral-torsional buckling
///
/// # Example
/// ```rust
/// use steel_core::calculations::flexure::*;
/// use steel_core::calculations::result::CbSource;
///
/// let section = StrongAxisSection {
///     ag_in2: 9.13, iyy_in4: 37.1, j_in4: 0.536, cw_in6: 531.1, sxx_in3: 27.5, zxx_in3: 30.4,
/// };
/// let params = LtbParameters {
///     fy_ksi: 50.0, e_ksi: 29000.0, c: 1.0, lb_in: 121.0,
///     gradient: MomentGradient { cb: 1.0, source: CbSource::Supplied }, phi: 0.9,
/// };
/// let r = lateral_torsional_buckling(&section, &params, 243.2).unwrap();
/// assert!((r.nominal_capacity - 1426.46).abs() < 0.01);
/// ```
pub fn lateral_torsional_buckling(
    section: &StrongAxisSection,
    params: &LtbParameters,
    mu_kip_in: f64,
) -> CalcResult<CapacityResult> {
    let lengths = limiting_lengths(section, params.fy_ksi, params.e_ksi, params.c)?;
    let mp = params.fy_ksi * section.zxx_in3;
    let lb = params.lb_in;
    let cb = params.gradient.cb;

    let (regime, mn, fcr, clause, equation) = if lb <= lengths.lp_in {
        (LtbRegime::Yielding, mp, None, Clause::F2_1, Equation::F2_1)
    } else if lb <= lengths.lr_in {
        let mr = 0.7 * params.fy_ksi * section.sxx_in3;
        let mn = cb * linear_transition(mp, mr, lb, lengths.lp_in, lengths.lr_in)?;
        (LtbRegime::Inelastic, mn.min(mp), None, Clause::F2_2, Equation::F2_2)
    } else {
        let fcr = ltb_critical_stress(section, params, &lengths);
        let mn = (fcr * section.sxx_in3).min(mp);
        (LtbRegime::Elastic, mn, Some(fcr), Clause::F2_2, Equation::F2_3)
    };
    debug!(lb, lp = lengths.lp_in, lr = lengths.lr_in, regime = ?regime, mn, "lateral-torsional buckling");

    let result = CapacityResult::new(
        LimitState::LateralTorsionalBucklingX,
        mn,
        params.phi,
        mu_kip_in,
        clause,
        equation,
        Unit::KipIn,
        CapacityDetail::LateralTorsionalBuckling {
            lb_in: lb,
            lp_in: lengths.lp_in,
            lr_in: lengths.lr_in,
            rts_in: lengths.rts_in,
            h0_in: lengths.h0_in,
            c: params.c,
            cb,
            cb_source: params.gradient.source,
            mp_kip_in: mp,
            fcr_ksi: fcr,
            regime,
        },
    )?;

    Ok(match params.gradient.source {
        CbSource::Default if regime != LtbRegime::Yielding => {
            result.with_note(format!("Cb not supplied; default Cb = {} used", cb))
        }
        _ => result,
    })
}

/// Weak-axis yielding, Mn = Mp = min(Fy·Zy, 1.6·Fy·Sy) (Eq.F6-1)
pub fn weak_axis_yielding(fy_ksi: f64, zyy_in3: f64, syy_in3: f64, mu_kip_in: f64, phi: f64) -> CalcResult<CapacityResult> {
    let plastic = fy_ksi * zyy_in3;
    let cap = 1.6 * fy_ksi * syy_in3;

    CapacityResult::new(
        LimitState::FlexuralYieldingY,
        plastic.min(cap),
        phi,
        mu_kip_in,
        Clause::F6_1,
        Equation::F6_1,
        Unit::KipIn,
        CapacityDetail::WeakAxisYielding {
            fy_zy_kip_in: plastic,
            yield_cap_kip_in: cap,
        },
    )
}

/// Compression flange local buckling about either axis (Eqs. F3-1, F6-2)
///
/// `mp_kip_in` is the plastic moment about the same axis and `s_in3` the
/// matching elastic section modulus.
pub fn flange_local_buckling(
    axis: Axis,
    fy_ksi: f64,
    mp_kip_in: f64,
    s_in3: f64,
    flange: &ElementClassification,
    mu_kip_in: f64,
    phi: f64,
) -> CalcResult<CapacityResult> {
    let (limit_state, clause, noncompact_eq, compact_eq) = match axis {
        Axis::X => (LimitState::FlangeLocalBucklingX, Clause::F3_1, Equation::F3_1, Equation::F2_1),
        Axis::Y => (LimitState::FlangeLocalBucklingY, Clause::F6_2, Equation::F6_2, Equation::F6_1),
    };
    let mr = 0.7 * fy_ksi * s_in3;

    let (mn, equation) = match flange.class {
        ElementClass::Compact => (mp_kip_in, compact_eq),
        ElementClass::NonCompact => {
            let lambda_p = flange
                .lambda_p
                .ok_or_else(|| CalcError::missing_field("classification.flexure.flange.lambda_p"))?;
            if flange.lambda > flange.lambda_r {
                return Err(CalcError::unsupported(
                    limit_state.display_name(),
                    format!(
                        "flange λ = {} exceeds λr = {}; slender flange (F3.2 / F6.3) not implemented",
                        flange.lambda, flange.lambda_r
                    ),
                ));
            }
            let mn = linear_transition(mp_kip_in, mr, flange.lambda, lambda_p, flange.lambda_r)?;
            (mn.min(mp_kip_in), noncompact_eq)
        }
        ElementClass::Slender => {
            return Err(CalcError::unsupported(
                limit_state.display_name(),
                "slender flange (F3.2 / F6.3) not implemented",
            ))
        }
    };

    CapacityResult::new(
        limit_state,
        mn,
        phi,
        mu_kip_in,
        clause,
        equation,
        Unit::KipIn,
        CapacityDetail::FlangeLocalBuckling {
            axis,
            lambda: flange.lambda,
            lambda_p: flange.lambda_p,
            lambda_r: flange.lambda_r,
            class: flange.class,
            mp_kip_in,
            mr_kip_in: mr,
        },
    )
}

/// Strong-axis flexure here covers compact webs only (F2, F3).
///
/// An unknown web is accepted; the caller notes the assumption.
pub fn require_compact_web(web: Option<&ElementClassification>) -> CalcResult<()> {
    match web.map(|w| w.class) {
        Some(ElementClass::NonCompact) => Err(CalcError::unsupported(
            "Strong-axis flexure",
            "noncompact web (F4) not implemented",
        )),
        Some(ElementClass::Slender) => Err(CalcError::unsupported(
            "Strong-axis flexure",
            "slender web (F5) not implemented",
        )),
        _ => Ok(()),
    }
}
