//! # Capacity Results
//!
//! The record every limit state produces, plus the typed payload of
//! intermediate quantities behind it.
//!
//! [`CapacityResult::new`] is the only constructor, so the invariants hold
//! everywhere: the nominal capacity is positive and finite,
//! `design_capacity = φ × nominal`, and `ratio = |demand| / design_capacity`.

use serde::{Deserialize, Serialize};

use crate::calculations::{Axis, LimitState};
use crate::classification::ElementClass;
use crate::equations::buckling::BucklingRegime;
use crate::equations::registry::{Clause, Equation, Reference};
use crate::errors::{CalcError, CalcResult};
use crate::units::Unit;

// ============================================================================
// Intermediate rows
// ============================================================================

/// One reported intermediate quantity, ready for any renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intermediate {
    /// Row label (e.g., "Elastic buckling stress")
    pub label: String,
    /// Symbol as printed (e.g., "Fe")
    pub symbol: String,
    pub value: f64,
    pub unit: Unit,
    /// Equation or clause the value comes from, if any
    pub reference: Option<Reference>,
}

impl Intermediate {
    fn new(label: &str, symbol: &str, value: f64, unit: Unit, reference: Option<Reference>) -> Self {
        Self {
            label: label.to_string(),
            symbol: symbol.to_string(),
            value,
            unit,
            reference,
        }
    }
}

// ============================================================================
// Provenance tags
// ============================================================================

/// Where the effective net area came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source")]
pub enum EffectiveAreaSource {
    /// Supplied by the connection design
    Supplied,
    /// Ag × NSF × U
    Factored {
        net_section_factor: f64,
        shear_lag_factor: f64,
    },
}

/// Where Cb came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CbSource {
    Supplied,
    Default,
}

/// Which LTB regime Lb falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LtbRegime {
    /// Lb <= Lp
    Yielding,
    /// Lp < Lb <= Lr
    Inelastic,
    /// Lb > Lr
    Elastic,
}

// ============================================================================
// Typed detail payloads
// ============================================================================

/// Intermediate quantities of one limit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CapacityDetail {
    TensileYielding {
        fy_ksi: f64,
        ag_in2: f64,
    },
    TensileRupture {
        fu_ksi: f64,
        ae_in2: f64,
        ae_source: EffectiveAreaSource,
    },
    FlexuralBuckling {
        axis: Axis,
        k: f64,
        length_in: f64,
        r_in: f64,
        slenderness: f64,
        fe_ksi: f64,
        fcr_ksi: f64,
        regime: BucklingRegime,
    },
    TorsionalBuckling {
        effective_length_in: f64,
        ro2_in2: f64,
        g_ksi: f64,
        fe_ksi: f64,
        fcr_ksi: f64,
        regime: BucklingRegime,
    },
    Shear {
        axis: Axis,
        aw_in2: f64,
        cv: f64,
        kv: Option<f64>,
        cv_equation: Option<Equation>,
    },
    WeakAxisYielding {
        fy_zy_kip_in: f64,
        yield_cap_kip_in: f64,
    },
    LateralTorsionalBuckling {
        lb_in: f64,
        lp_in: f64,
        lr_in: f64,
        rts_in: f64,
        h0_in: f64,
        c: f64,
        cb: f64,
        cb_source: CbSource,
        mp_kip_in: f64,
        fcr_ksi: Option<f64>,
        regime: LtbRegime,
    },
    FlangeLocalBuckling {
        axis: Axis,
        lambda: f64,
        lambda_p: Option<f64>,
        lambda_r: f64,
        class: ElementClass,
        mp_kip_in: f64,
        mr_kip_in: f64,
    },
}

impl CapacityDetail {
    /// Ordered intermediate rows as printed in a report
    pub fn intermediates(&self) -> Vec<Intermediate> {
        use Unit::*;
        let eq = |e: Equation| Some(Reference::Equation(e));

        match *self {
            CapacityDetail::TensileYielding { fy_ksi, ag_in2 } => vec![
                Intermediate::new("Yield stress", "Fy", fy_ksi, Ksi, None),
                Intermediate::new("Gross area", "Ag", ag_in2, SqIn, None),
            ],
            CapacityDetail::TensileRupture { fu_ksi, ae_in2, ae_source } => {
                let ae_ref = match ae_source {
                    EffectiveAreaSource::Supplied => None,
                    EffectiveAreaSource::Factored { .. } => eq(Equation::D3_1),
                };
                let mut rows = vec![Intermediate::new("Tensile strength", "Fu", fu_ksi, Ksi, None)];
                if let EffectiveAreaSource::Factored {
                    net_section_factor,
                    shear_lag_factor,
                } = ae_source
                {
                    rows.push(Intermediate::new("Net section factor", "NSF", net_section_factor, Dimensionless, None));
                    rows.push(Intermediate::new("Shear lag factor", "U", shear_lag_factor, Dimensionless, None));
                }
                rows.push(Intermediate::new("Effective net area", "Ae", ae_in2, SqIn, ae_ref));
                rows
            }
            CapacityDetail::FlexuralBuckling {
                axis,
                k,
                length_in,
                r_in,
                slenderness,
                fe_ksi,
                fcr_ksi,
                regime,
            } => {
                let s = axis.suffix();
                vec![
                    Intermediate::new("Effective length factor", &format!("K{}", s), k, Dimensionless, None),
                    Intermediate::new("Unbraced length", &format!("L{}", s), length_in, Inch, None),
                    Intermediate::new("Radius of gyration", &format!("r{}", s), r_in, Inch, None),
                    Intermediate::new(
                        "Slenderness",
                        &format!("Lc{}/r{}", s, s),
                        slenderness,
                        Dimensionless,
                        Some(Reference::Clause(Clause::E2)),
                    ),
                    Intermediate::new("Elastic buckling stress", "Fe", fe_ksi, Ksi, eq(Equation::E3_4)),
                    Intermediate::new("Critical stress", "Fcr", fcr_ksi, Ksi, eq(regime.equation())),
                ]
            }
            CapacityDetail::TorsionalBuckling {
                effective_length_in,
                ro2_in2,
                g_ksi,
                fe_ksi,
                fcr_ksi,
                regime,
            } => vec![
                Intermediate::new("Torsional effective length", "Lcz", effective_length_in, Inch, None),
                Intermediate::new("Polar radius of gyration squared", "ro^2", ro2_in2, SqIn, None),
                Intermediate::new("Shear modulus", "G", g_ksi, Ksi, None),
                Intermediate::new("Elastic buckling stress", "Fe", fe_ksi, Ksi, eq(Equation::E4_2)),
                Intermediate::new("Critical stress", "Fcr", fcr_ksi, Ksi, eq(regime.equation())),
            ],
            CapacityDetail::Shear {
                axis,
                aw_in2,
                cv,
                kv,
                cv_equation,
            } => {
                let s = axis.suffix();
                let mut rows = vec![Intermediate::new("Shear area", &format!("A{}{}", s, s), aw_in2, SqIn, None)];
                if let Some(kv) = kv {
                    let kv_ref = match axis {
                        Axis::X => Reference::Clause(Clause::G6),
                        Axis::Y => Reference::Equation(Equation::G2_5),
                    };
                    rows.push(Intermediate::new("Shear buckling coefficient", "kv", kv, Dimensionless, Some(kv_ref)));
                }
                let (label, symbol) = match axis {
                    Axis::X => ("Flange shear coefficient", "Cv2"),
                    Axis::Y => ("Web shear coefficient", "Cv1"),
                };
                rows.push(Intermediate::new(
                    label,
                    symbol,
                    cv,
                    Dimensionless,
                    cv_equation.map(Reference::Equation),
                ));
                rows
            }
            CapacityDetail::WeakAxisYielding {
                fy_zy_kip_in,
                yield_cap_kip_in,
            } => vec![
                Intermediate::new("Plastic moment", "Fy*Zy", fy_zy_kip_in, KipIn, None),
                Intermediate::new("Yield moment limit", "1.6*Fy*Sy", yield_cap_kip_in, KipIn, None),
            ],
            CapacityDetail::LateralTorsionalBuckling {
                lb_in,
                lp_in,
                lr_in,
                rts_in,
                h0_in,
                c,
                cb,
                cb_source,
                mp_kip_in,
                fcr_ksi,
                ..
            } => {
                let cb_label = match cb_source {
                    CbSource::Supplied => "Moment gradient factor",
                    CbSource::Default => "Moment gradient factor (default)",
                };
                let mut rows = vec![
                    Intermediate::new("Plastic moment", "Mp", mp_kip_in, KipIn, eq(Equation::F2_1)),
                    Intermediate::new("Unbraced length", "Lb", lb_in, Inch, None),
                    Intermediate::new("Limiting length, yielding", "Lp", lp_in, Inch, eq(Equation::F2_5)),
                    Intermediate::new("Effective radius of gyration", "rts", rts_in, Inch, eq(Equation::F2_7)),
                    Intermediate::new("Distance between flange centroids", "ho", h0_in, Inch, None),
                    Intermediate::new("Coefficient c", "c", c, Dimensionless, eq(Equation::F2_8a)),
                    Intermediate::new("Limiting length, inelastic LTB", "Lr", lr_in, Inch, eq(Equation::F2_6)),
                    Intermediate::new(cb_label, "Cb", cb, Dimensionless, None),
                ];
                if let Some(fcr) = fcr_ksi {
                    rows.push(Intermediate::new("Critical stress", "Fcr", fcr, Ksi, eq(Equation::F2_4)));
                }
                rows
            }
            CapacityDetail::FlangeLocalBuckling {
                axis,
                lambda,
                lambda_p,
                lambda_r,
                mp_kip_in,
                mr_kip_in,
                ..
            } => {
                let mp_ref = match axis {
                    Axis::X => eq(Equation::F2_1),
                    Axis::Y => eq(Equation::F6_1),
                };
                let mut rows = vec![Intermediate::new("Flange slenderness", "bf/2tf", lambda, Dimensionless, None)];
                if let Some(lambda_p) = lambda_p {
                    rows.push(Intermediate::new("Compact limit", "lambda_pf", lambda_p, Dimensionless, None));
                }
                rows.push(Intermediate::new("Noncompact limit", "lambda_rf", lambda_r, Dimensionless, None));
                rows.push(Intermediate::new("Plastic moment", "Mp", mp_kip_in, KipIn, mp_ref));
                rows.push(Intermediate::new("Yield moment", "0.7*Fy*S", mr_kip_in, KipIn, None));
                rows
            }
        }
    }

    /// Equations cited by the intermediate rows
    pub fn equations(&self) -> Vec<Equation> {
        self.intermediates()
            .into_iter()
            .filter_map(|row| match row.reference {
                Some(Reference::Equation(e)) => Some(e),
                _ => None,
            })
            .collect()
    }
}

// ============================================================================
// Capacity Result
// ============================================================================

/// Outcome of one capacity limit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityResult {
    pub limit_state: LimitState,
    /// Nominal strength Pn, Vn or Mn
    pub nominal_capacity: f64,
    pub phi: f64,
    /// φ × nominal
    pub design_capacity: f64,
    /// Magnitude of the factored demand
    pub demand: f64,
    /// demand / design_capacity
    pub ratio: f64,
    /// Governing clause printed in the REFERENCE column
    pub clause: Clause,
    /// Equation giving the nominal strength
    pub equation: Equation,
    pub unit: Unit,
    pub detail: CapacityDetail,
    /// Approximations and defaults applied
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl CapacityResult {
    /// Build a result, rejecting a non-positive or non-finite nominal capacity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        limit_state: LimitState,
        nominal_capacity: f64,
        phi: f64,
        demand: f64,
        clause: Clause,
        equation: Equation,
        unit: Unit,
        detail: CapacityDetail,
    ) -> CalcResult<Self> {
        if !nominal_capacity.is_finite() || nominal_capacity <= 0.0 {
            return Err(CalcError::domain(
                limit_state.display_name(),
                format!("nominal capacity must be positive, got {}", nominal_capacity),
            ));
        }
        let design_capacity = phi * nominal_capacity;
        let demand = demand.abs();
        Ok(Self {
            limit_state,
            nominal_capacity,
            phi,
            design_capacity,
            demand,
            ratio: demand / design_capacity,
            clause,
            equation,
            unit,
            detail,
            notes: Vec::new(),
        })
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn intermediates(&self) -> Vec<Intermediate> {
        self.detail.intermediates()
    }

    /// Nominal equation plus every equation cited by the intermediates
    pub fn equations(&self) -> Vec<Equation> {
        let mut eqs = vec![self.equation];
        eqs.extend(self.detail.equations());
        eqs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yielding(nominal: f64, demand: f64) -> CalcResult<CapacityResult> {
        CapacityResult::new(
            LimitState::TensileYielding,
            nominal,
            0.9,
            demand,
            Clause::D2,
            Equation::D2_1,
            Unit::Kip,
            CapacityDetail::TensileYielding {
                fy_ksi: 50.0,
                ag_in2: 9.13,
            },
        )
    }

    #[test]
    fn test_design_capacity_and_ratio() {
        let r = yielding(456.5, -41.085).unwrap();
        assert!((r.design_capacity - 410.85).abs() < 1e-9);
        assert!((r.demand - 41.085).abs() < 1e-12);
        assert!((r.ratio - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_nominal() {
        assert!(matches!(yielding(0.0, 1.0), Err(CalcError::Domain { .. })));
        assert!(yielding(-3.0, 1.0).is_err());
        assert!(yielding(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_notes_and_json() {
        let r = yielding(456.5, 0.0).unwrap().with_note("check note");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["clause"], "Cl.D2");
        assert_eq!(json["equation"], "Eq.D2-1");
        assert_eq!(json["detail"]["kind"], "TensileYielding");
        assert_eq!(json["notes"][0], "check note");
    }

    #[test]
    fn test_flexural_buckling_rows_cite_equations() {
        let detail = CapacityDetail::FlexuralBuckling {
            axis: Axis::X,
            k: 2.0,
            length_in: 102.0,
            r_in: 3.471,
            slenderness: 58.772,
            fe_ksi: 82.863,
            fcr_ksi: 38.841,
            regime: BucklingRegime::Inelastic,
        };
        let rows = detail.intermediates();
        assert_eq!(rows[3].symbol, "Lcx/rx");
        assert_eq!(rows[4].reference, Some(Reference::Equation(Equation::E3_4)));
        assert_eq!(detail.equations(), vec![Equation::E3_4, Equation::E3_2]);
    }

    #[test]
    fn test_ltb_default_cb_is_labelled() {
        let detail = CapacityDetail::LateralTorsionalBuckling {
            lb_in: 121.0,
            lp_in: 85.44,
            lr_in: 297.35,
            rts_in: 2.259,
            h0_in: 7.567,
            c: 1.0,
            cb: 1.0,
            cb_source: CbSource::Default,
            mp_kip_in: 1520.0,
            fcr_ksi: None,
            regime: LtbRegime::Inelastic,
        };
        let cb_row = detail.intermediates().into_iter().find(|r| r.symbol == "Cb").unwrap();
        assert!(cb_row.label.contains("default"));
    }
}
