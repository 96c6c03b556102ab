//! # Tension Members (AISC 360-16 Chapter D)
//!
//! Tensile yielding on the gross section and tensile rupture on the
//! effective net section.
//!
//! The effective net area Ae depends on the end connection, which the
//! engine does not model. It is either supplied, or approximated as
//! `Ag × NSF × U` with a note on the result.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::tension::tensile_yielding;
//!
//! let result = tensile_yielding(50.0, 9.13, 0.0, 0.90).unwrap();
//! assert!((result.nominal_capacity - 456.5).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::result::{CapacityDetail, CapacityResult, EffectiveAreaSource};
use crate::calculations::LimitState;
use crate::equations::registry::{Clause, Equation};
use crate::errors::CalcResult;
use crate::input::NetAreaInput;
use crate::units::Unit;

/// Effective net area with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveArea {
    pub ae_in2: f64,
    pub source: EffectiveAreaSource,
}

impl EffectiveArea {
    /// Use the supplied Ae, else Ag × NSF × U.
    pub fn resolve(ag_in2: f64, net: &NetAreaInput) -> Self {
        match net.effective_area_in2 {
            Some(ae_in2) => Self {
                ae_in2,
                source: EffectiveAreaSource::Supplied,
            },
            None => Self {
                ae_in2: ag_in2 * net.net_section_factor * net.shear_lag_factor,
                source: EffectiveAreaSource::Factored {
                    net_section_factor: net.net_section_factor,
                    shear_lag_factor: net.shear_lag_factor,
                },
            },
        }
    }

    /// Note describing the approximation, if one was made
    pub fn approximation_note(&self) -> Option<String> {
        match self.source {
            EffectiveAreaSource::Supplied => None,
            EffectiveAreaSource::Factored {
                net_section_factor,
                shear_lag_factor,
            } if net_section_factor == 1.0 && shear_lag_factor == 1.0 => {
                Some("Approximate: Ae = Ag (no net area data supplied)".to_string())
            }
            EffectiveAreaSource::Factored { .. } => Some("Approximate: Ae = Ag x NSF x U".to_string()),
        }
    }
}

/// Tensile yielding, Pn = Fy·Ag (Eq.D2-1)
///
/// `pu_kip` is the tensile demand.
pub fn tensile_yielding(fy_ksi: f64, ag_in2: f64, pu_kip: f64, phi: f64) -> CalcResult<CapacityResult> {
    CapacityResult::new(
        LimitState::TensileYielding,
        fy_ksi * ag_in2,
        phi,
        pu_kip,
        Clause::D2,
        Equation::D2_1,
        Unit::Kip,
        CapacityDetail::TensileYielding { fy_ksi, ag_in2 },
    )
}

/// Tensile rupture, Pn = Fu·Ae (Eq.D2-2)
pub fn tensile_rupture(fu_ksi: f64, ae: EffectiveArea, pu_kip: f64, phi: f64) -> CalcResult<CapacityResult> {
    let result = CapacityResult::new(
        LimitState::TensileRupture,
        fu_ksi * ae.ae_in2,
        phi,
        pu_kip,
        Clause::D2,
        Equation::D2_2,
        Unit::Kip,
        CapacityDetail::TensileRupture {
            fu_ksi,
            ae_in2: ae.ae_in2,
            ae_source: ae.source,
        },
    )?;

    Ok(match ae.approximation_note() {
        Some(note) => result.with_note(note),
        None => result,
    })
}
