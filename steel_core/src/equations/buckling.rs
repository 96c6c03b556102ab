//! # Column Buckling Formulas
//!
//! Elastic buckling stress and the AISC critical stress curve. Both flexural
//! buckling (E3) and torsional buckling (E4) go through [`critical_stress`];
//! only the elastic buckling stress `Fe` differs between them.
//!
//! ## References
//!
//! - AISC 360-16 Section E3, Eqs. E3-2, E3-3, E3-4

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::registry::Equation;
use crate::errors::{CalcError, CalcResult};

/// Fy/Fe at which the critical stress curve switches from inelastic to elastic
pub const INELASTIC_LIMIT: f64 = 2.25;

/// Which branch of the critical stress curve applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucklingRegime {
    /// Fy/Fe <= 2.25
    Inelastic,
    /// Fy/Fe > 2.25
    Elastic,
}

impl BucklingRegime {
    pub fn equation(&self) -> Equation {
        match self {
            BucklingRegime::Inelastic => Equation::E3_2,
            BucklingRegime::Elastic => Equation::E3_3,
        }
    }
}

/// Critical stress with the branch that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalStress {
    pub fcr_ksi: f64,
    pub regime: BucklingRegime,
}

/// Elastic buckling stress Fe = π²E / (KL/r)² (Eq.E3-4)
///
/// # Example
/// ```rust
/// use steel_core::equations::buckling::elastic_buckling_stress;
///
/// // W8X31 about x, KxLx = 204 in
/// let fe = elastic_buckling_stress(2.0, 102.0, 3.47105, 29000.0).unwrap();
/// assert!((fe - 82.86).abs() < 0.01);
/// ```
pub fn elastic_buckling_stress(k: f64, length_in: f64, r_in: f64, e_ksi: f64) -> CalcResult<f64> {
    if r_in <= 0.0 {
        return Err(CalcError::domain("Fe", "radius of gyration must be positive"));
    }
    let kl = k * length_in;
    if kl <= 0.0 {
        return Err(CalcError::domain("Fe", "effective length KL must be positive"));
    }
    let slenderness = kl / r_in;
    Ok(PI.powi(2) * e_ksi / slenderness.powi(2))
}

/// Critical stress Fcr from Fe and Fy (Eqs. E3-2 / E3-3)
pub fn critical_stress(fe_ksi: f64, fy_ksi: f64) -> CalcResult<CriticalStress> {
    if !(fe_ksi > 0.0) || !fe_ksi.is_finite() {
        return Err(CalcError::domain("Fcr", "elastic buckling stress Fe must be positive"));
    }
    let ratio = fy_ksi / fe_ksi;
    let result = if ratio <= INELASTIC_LIMIT {
        CriticalStress {
            fcr_ksi: 0.658_f64.powf(ratio) * fy_ksi,
            regime: BucklingRegime::Inelastic,
        }
    } else {
        CriticalStress {
            fcr_ksi: 0.877 * fe_ksi,
            regime: BucklingRegime::Elastic,
        }
    };
    debug!(fy_over_fe = ratio, regime = ?result.regime, fcr = result.fcr_ksi, "critical stress");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fe_w8x31_y_axis() {
        // KyLy = 176 in, ry = 2.0158 in
        let fe = elastic_buckling_stress(2.0, 88.0, 2.015819, 29000.0).unwrap();
        assert!((fe - 37.547).abs() < 0.01);
    }

    #[test]
    fn test_fe_domain_errors() {
        assert!(matches!(
            elastic_buckling_stress(1.0, 100.0, 0.0, 29000.0),
            Err(CalcError::Domain { .. })
        ));
        assert!(elastic_buckling_stress(1.0, 0.0, 2.0, 29000.0).is_err());
    }

    #[test]
    fn test_inelastic_branch() {
        let cs = critical_stress(82.863, 50.0).unwrap();
        assert_eq!(cs.regime, BucklingRegime::Inelastic);
        assert!((cs.fcr_ksi - 38.84).abs() < 0.01);
    }

    #[test]
    fn test_elastic_branch() {
        let cs = critical_stress(10.0, 50.0).unwrap();
        assert_eq!(cs.regime, BucklingRegime::Elastic);
        assert!((cs.fcr_ksi - 8.77).abs() < 1e-9);
        assert_eq!(cs.regime.equation(), Equation::E3_3);
    }

    #[test]
    fn test_continuity_at_limit() {
        let fy = 50.0;
        let fe = fy / INELASTIC_LIMIT;
        let inelastic = 0.658_f64.powf(INELASTIC_LIMIT) * fy;
        let elastic = 0.877 * fe;
        assert!(((inelastic - elastic) / inelastic).abs() < 1e-3);

        let above = critical_stress(fe * 1.0001, fy).unwrap();
        let below = critical_stress(fe * 0.9999, fy).unwrap();
        assert_eq!(above.regime, BucklingRegime::Inelastic);
        assert_eq!(below.regime, BucklingRegime::Elastic);
        assert!(((above.fcr_ksi - below.fcr_ksi) / above.fcr_ksi).abs() < 1e-3);
    }

    #[test]
    fn test_fcr_rejects_non_positive_fe() {
        assert!(critical_stress(0.0, 50.0).is_err());
        assert!(critical_stress(-5.0, 50.0).is_err());
    }
}
