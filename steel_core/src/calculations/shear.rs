//! # Shear (AISC 360-16 Chapter G)
//!
//! Vn = 0.6·Fy·Aw·Cv. Along Y the web resists shear (Eq.G2-1); along X the
//! flanges do (Eq.G6-1). Both report under Cl.G1.
//!
//! The shear coefficient Cv is supplied by a [`ShearCoefficient`] provider:
//!
//! - [`UnitShearCoefficient`] - Cv = 1.0
//! - [`SlendernessShearCoefficient`] - Cv1 (G2.1(b)) for the web, Cv2 (G2.2)
//!   for the flanges

use tracing::debug;

use crate::calculations::result::{CapacityDetail, CapacityResult};
use crate::calculations::{Axis, LimitState};
use crate::equations::registry::{Clause, Equation};
use crate::errors::CalcResult;
use crate::units::Unit;

/// kv for webs without transverse stiffeners (Eq.G2-5)
pub const KV_WEB: f64 = 5.34;

/// kv for flanges of I-shapes bent about the weak axis (G6)
pub const KV_FLANGE: f64 = 1.2;

/// Shear coefficient with the equation that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShearCoefficientValue {
    pub cv: f64,
    pub kv: Option<f64>,
    pub equation: Option<Equation>,
}

impl ShearCoefficientValue {
    pub const UNITY: ShearCoefficientValue = ShearCoefficientValue {
        cv: 1.0,
        kv: None,
        equation: None,
    };
}

/// Source of the shear coefficient Cv.
pub trait ShearCoefficient: Send + Sync {
    fn coefficient(&self, axis: Axis, fy_ksi: f64, e_ksi: f64) -> ShearCoefficientValue;
}

/// Cv = 1.0 regardless of slenderness.
///
/// Along X the value is reported as Cv2 (Eq.G2-9, kv = 1.2), the way rolled
/// shape reports print weak-axis shear.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitShearCoefficient;

impl ShearCoefficient for UnitShearCoefficient {
    fn coefficient(&self, axis: Axis, _fy_ksi: f64, _e_ksi: f64) -> ShearCoefficientValue {
        match axis {
            Axis::X => ShearCoefficientValue {
                cv: 1.0,
                kv: Some(KV_FLANGE),
                equation: Some(Equation::G2_9),
            },
            Axis::Y => ShearCoefficientValue::UNITY,
        }
    }
}

/// Cv1 from h/tw for the web (G2.1(b), along Y) and Cv2 from bf/2tf for the
/// flanges (G2.2 via G6, along X).
///
/// Either ratio may be absent, in which case that axis uses Cv = 1.0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlendernessShearCoefficient {
    pub h_tw: Option<f64>,
    pub bf_2tf: Option<f64>,
}

/// Cv1, Eqs. G2-3 / G2-4
fn web_coefficient(h_tw: f64, fy_ksi: f64, e_ksi: f64) -> ShearCoefficientValue {
    let limit = 1.10 * (KV_WEB * e_ksi / fy_ksi).sqrt();
    let (cv, equation) = if h_tw <= limit {
        (1.0, Equation::G2_3)
    } else {
        (limit / h_tw, Equation::G2_4)
    };
    ShearCoefficientValue {
        cv,
        kv: Some(KV_WEB),
        equation: Some(equation),
    }
}

/// Cv2, Eqs. G2-9 / G2-10 / G2-11 with b/tf = bf/2tf
fn flange_coefficient(b_tf: f64, fy_ksi: f64, e_ksi: f64) -> ShearCoefficientValue {
    let root = (KV_FLANGE * e_ksi / fy_ksi).sqrt();
    let (cv, equation) = if b_tf <= 1.10 * root {
        (1.0, Equation::G2_9)
    } else if b_tf <= 1.37 * root {
        (1.10 * root / b_tf, Equation::G2_10)
    } else {
        (1.51 * KV_FLANGE * e_ksi / (b_tf.powi(2) * fy_ksi), Equation::G2_11)
    };
    ShearCoefficientValue {
        cv,
        kv: Some(KV_FLANGE),
        equation: Some(equation),
    }
}

impl ShearCoefficient for SlendernessShearCoefficient {
    fn coefficient(&self, axis: Axis, fy_ksi: f64, e_ksi: f64) -> ShearCoefficientValue {
        let value = match (axis, self.bf_2tf, self.h_tw) {
            (Axis::X, Some(ratio), _) => flange_coefficient(ratio, fy_ksi, e_ksi),
            (Axis::Y, _, Some(ratio)) => web_coefficient(ratio, fy_ksi, e_ksi),
            _ => return UnitShearCoefficient.coefficient(axis, fy_ksi, e_ksi),
        };
        debug!(axis = ?axis, cv = value.cv, equation = ?value.equation, "shear coefficient");
        value
    }
}

/// Shear strength along one axis, Vn = 0.6·Fy·Aw·Cv
///
/// # Example
/// ```rust
/// use steel_core::calculations::shear::{shear_capacity, ShearCoefficientValue};
/// use steel_core::calculations::Axis;
///
/// let r = shear_capacity(Axis::Y, 50.0, 2.28, ShearCoefficientValue::UNITY, 0.0, 1.0).unwrap();
/// assert!((r.nominal_capacity - 68.4).abs() < 1e-9);
/// ```
pub fn shear_capacity(
    axis: Axis,
    fy_ksi: f64,
    aw_in2: f64,
    cv: ShearCoefficientValue,
    vu_kip: f64,
    phi: f64,
) -> CalcResult<CapacityResult> {
    let (limit_state, equation) = match axis {
        Axis::X => (LimitState::ShearX, Equation::G6_1),
        Axis::Y => (LimitState::ShearY, Equation::G2_1),
    };

    CapacityResult::new(
        limit_state,
        0.6 * fy_ksi * aw_in2 * cv.cv,
        phi,
        vu_kip,
        Clause::G1,
        equation,
        Unit::Kip,
        CapacityDetail::Shear {
            axis,
            aw_in2,
            cv: cv.cv,
            kv: cv.kv,
            cv_equation: cv.equation,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w8x31_shear_strengths() {
        let x = shear_capacity(Axis::X, 50.0, 6.96, ShearCoefficientValue::UNITY, 0.0, 0.9).unwrap();
        assert!((x.nominal_capacity - 208.8).abs() < 1e-9);
        assert_eq!(x.equation, Equation::G6_1);

        let y = shear_capacity(Axis::Y, 50.0, 2.28, ShearCoefficientValue::UNITY, 3.2, 0.9).unwrap();
        assert!((y.design_capacity - 61.56).abs() < 1e-9);
        assert_eq!(y.clause, Clause::G1);
    }

    #[test]
    fn test_unit_provider() {
        let cv = UnitShearCoefficient.coefficient(Axis::Y, 50.0, 29000.0);
        assert_eq!(cv.cv, 1.0);
        assert!(cv.equation.is_none());

        let flange = UnitShearCoefficient.coefficient(Axis::X, 50.0, 29000.0);
        assert_eq!(flange.cv, 1.0);
        assert_eq!(flange.kv, Some(KV_FLANGE));
        assert_eq!(flange.equation, Some(Equation::G2_9));
    }

    #[test]
    fn test_stocky_web_and_flanges() {
        let provider = SlendernessShearCoefficient {
            h_tw: Some(22.25),
            bf_2tf: Some(9.2),
        };
        let web = provider.coefficient(Axis::Y, 50.0, 29000.0);
        assert_eq!(web.cv, 1.0);
        assert_eq!(web.kv, Some(KV_WEB));
        assert_eq!(web.equation, Some(Equation::G2_3));

        let flange = provider.coefficient(Axis::X, 50.0, 29000.0);
        assert_eq!(flange.kv, Some(KV_FLANGE));
        assert_eq!(flange.cv, 1.0);
        assert_eq!(flange.equation, Some(Equation::G2_9));
    }

    #[test]
    fn test_slender_web_reduces_cv() {
        let provider = SlendernessShearCoefficient {
            h_tw: Some(90.0),
            bf_2tf: None,
        };
        let cv = provider.coefficient(Axis::Y, 50.0, 29000.0);
        // 1.10 * sqrt(5.34 * 29000 / 50) = 61.218
        assert!((cv.cv - 61.2177 / 90.0).abs() < 1e-4);
        assert_eq!(cv.equation, Some(Equation::G2_4));

        let flange = provider.coefficient(Axis::X, 50.0, 29000.0);
        assert_eq!(flange.equation, Some(Equation::G2_9));
        assert_eq!(flange.cv, 1.0);
    }

    #[test]
    fn test_flange_cv2_ranges() {
        // sqrt(1.2 * 29000 / 50) = 26.382; limits 29.02 and 36.14
        let at = |b_tf: f64| {
            SlendernessShearCoefficient {
                h_tw: None,
                bf_2tf: Some(b_tf),
            }
            .coefficient(Axis::X, 50.0, 29000.0)
        };

        let inelastic = at(32.0);
        assert_eq!(inelastic.equation, Some(Equation::G2_10));
        assert!((inelastic.cv - 29.0200 / 32.0).abs() < 1e-4);

        let elastic = at(45.0);
        assert_eq!(elastic.equation, Some(Equation::G2_11));
        assert!((elastic.cv - 0.51899).abs() < 1e-4);
    }

    #[test]
    fn test_flange_cv2_continuous_at_elastic_limit() {
        let limit = 1.37 * (KV_FLANGE * 29000.0 / 50.0).sqrt();
        let provider = |b_tf: f64| SlendernessShearCoefficient {
            h_tw: None,
            bf_2tf: Some(b_tf),
        };
        let below = provider(limit * (1.0 - 1e-9)).coefficient(Axis::X, 50.0, 29000.0);
        let above = provider(limit * (1.0 + 1e-9)).coefficient(Axis::X, 50.0, 29000.0);
        assert_eq!(below.equation, Some(Equation::G2_10));
        assert_eq!(above.equation, Some(Equation::G2_11));
        assert!(((below.cv - above.cv) / below.cv).abs() < 5e-3);
    }
}
