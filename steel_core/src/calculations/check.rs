//! # Member Check
//!
//! Runs every limit state for one member, records each as computed or
//! skipped, and finds the governing ratio.
//!
//! A failure inside one limit state never aborts the others: a missing
//! property, a formula precondition or an unsupported case becomes a
//! `Skipped` entry with its reason. Only invalid input aborts the check.
//!
//! ## Example
//!
//! ```rust
//! use steel_core::calculations::check::{check_member, Status};
//! use steel_core::config::DesignConfig;
//! use steel_core::input::*;
//!
//! let input = MemberInput {
//!     label: "T-1".to_string(),
//!     section: SectionProperties { ag_in2: 9.13, ..Default::default() },
//!     material: SteelMaterial { fy_ksi: 50.0, fu_ksi: 62.0 },
//!     geometry: MemberGeometry::pinned(121.0),
//!     net_area: NetAreaInput::default(),
//!     demand: FactoredDemand { pu_kip: -200.0, ..Default::default() },
//!     classification: None,
//! };
//! let results = check_member(&input, &DesignConfig::default()).unwrap();
//! assert_eq!(results.status, Status::Pass);
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculations::compression::{self, AxialMember, SlendernessCheck, TorsionalProperties};
use crate::calculations::flexure::{self, LtbParameters, MomentGradient, StrongAxisSection};
use crate::calculations::interaction::{self, GoverningCapacity, InteractionInput, InteractionResult};
use crate::calculations::result::CapacityResult;
use crate::calculations::shear::{self, ShearCoefficient, SlendernessShearCoefficient, UnitShearCoefficient};
use crate::calculations::tension::{self, EffectiveArea};
use crate::calculations::{Axis, LimitState};
use crate::classification::{self, SectionClassification};
use crate::config::{DesignConfig, ShearCoefficientModel};
use crate::equations::registry::{Clause, Equation, Reference, ALL_EQUATIONS};
use crate::equations::section::radius_of_gyration;
use crate::errors::{CalcError, CalcResult};
use crate::input::{require, MemberInput};

// ============================================================================
// Result types
// ============================================================================

/// A computed limit state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "evaluation", rename_all = "snake_case")]
pub enum Evaluation {
    Capacity(CapacityResult),
    Interaction(InteractionResult),
}

impl Evaluation {
    pub fn ratio(&self) -> f64 {
        match self {
            Evaluation::Capacity(r) => r.ratio,
            Evaluation::Interaction(r) => r.ratio,
        }
    }

    /// REFERENCE column: the clause for capacities, the equation for interaction
    pub fn reference(&self) -> Reference {
        match self {
            Evaluation::Capacity(r) => Reference::Clause(r.clause),
            Evaluation::Interaction(r) => Reference::Equation(r.equation),
        }
    }

    pub fn equations(&self) -> Vec<Equation> {
        match self {
            Evaluation::Capacity(r) => r.equations(),
            Evaluation::Interaction(r) => vec![r.equation],
        }
    }
}

/// Computed or skipped, never silently dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Computed(Evaluation),
    Skipped { reason: CalcError },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitStateCheck {
    pub limit_state: LimitState,
    pub outcome: Outcome,
}

impl LimitStateCheck {
    pub fn evaluation(&self) -> Option<&Evaluation> {
        match &self.outcome {
            Outcome::Computed(e) => Some(e),
            Outcome::Skipped { .. } => None,
        }
    }

    pub fn capacity(&self) -> Option<&CapacityResult> {
        match self.evaluation() {
            Some(Evaluation::Capacity(r)) => Some(r),
            _ => None,
        }
    }
}

/// The limit state with the highest ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Governing {
    pub limit_state: LimitState,
    pub ratio: f64,
    pub reference: Reference,
}

/// Verdict over the computed entries only.
///
/// A skipped entry neither passes nor fails, so PASS can stand beside a
/// skipped interaction or compression check. Read `CheckResults::skipped`
/// alongside the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Fail,
    /// Nothing could be computed
    Indeterminate,
}

impl Status {
    /// PASS at or below unity, INDETERMINATE with nothing computed
    pub fn from_governing(governing: Option<&Governing>) -> Self {
        match governing {
            None => Status::Indeterminate,
            Some(g) if g.ratio <= 1.0 => Status::Pass,
            Some(_) => Status::Fail,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Fail => "FAIL",
            Status::Indeterminate => "INDETERMINATE",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full outcome of one member check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResults {
    pub label: String,
    /// One entry per limit state, in report order
    pub checks: Vec<LimitStateCheck>,
    /// Classification actually used (supplied or derived)
    pub classification: SectionClassification,
    /// Advisory KL/r record, outside the governing ratio
    pub slenderness: Option<SlendernessCheck>,
    pub governing: Option<Governing>,
    pub status: Status,
}

impl CheckResults {
    pub fn get(&self, limit_state: LimitState) -> Option<&LimitStateCheck> {
        self.checks.iter().find(|c| c.limit_state == limit_state)
    }

    pub fn capacity(&self, limit_state: LimitState) -> Option<&CapacityResult> {
        self.get(limit_state).and_then(LimitStateCheck::capacity)
    }

    pub fn interaction(&self) -> Option<&InteractionResult> {
        match self.get(LimitState::Interaction).and_then(LimitStateCheck::evaluation) {
            Some(Evaluation::Interaction(r)) => Some(r),
            _ => None,
        }
    }

    pub fn governing_ratio(&self) -> Option<f64> {
        self.governing.map(|g| g.ratio)
    }

    pub fn computed(&self) -> impl Iterator<Item = (LimitState, &Evaluation)> + '_ {
        self.checks
            .iter()
            .filter_map(|c| c.evaluation().map(|e| (c.limit_state, e)))
    }

    pub fn skipped(&self) -> impl Iterator<Item = (LimitState, &CalcError)> + '_ {
        self.checks.iter().filter_map(|c| match &c.outcome {
            Outcome::Skipped { reason } => Some((c.limit_state, reason)),
            Outcome::Computed(_) => None,
        })
    }

    /// Distinct equations the computed entries relied on, in registry order
    pub fn equations_used(&self) -> Vec<Equation> {
        let used: Vec<Equation> = self.computed().flat_map(|(_, e)| e.equations()).collect();
        ALL_EQUATIONS.iter().filter(|eq| used.contains(eq)).copied().collect()
    }
}

// ============================================================================
// Evaluation
// ============================================================================

struct MemberEvaluator<'a> {
    input: &'a MemberInput,
    config: &'a DesignConfig,
    classification: SectionClassification,
    shear_provider: Box<dyn ShearCoefficient>,
}

impl<'a> MemberEvaluator<'a> {
    fn new(input: &'a MemberInput, config: &'a DesignConfig) -> Self {
        let section = &input.section;
        let classification = classification::resolve(
            input.classification.as_ref(),
            section.bf_2tf,
            section.h_tw,
            config.root_e_over_fy(input.material.fy_ksi),
        );
        let shear_provider: Box<dyn ShearCoefficient> = match config.shear_coefficient {
            ShearCoefficientModel::Unity => Box::new(UnitShearCoefficient),
            ShearCoefficientModel::WebSlenderness => Box::new(SlendernessShearCoefficient {
                h_tw: section.h_tw,
                bf_2tf: section.bf_2tf,
            }),
        };
        Self {
            input,
            config,
            classification,
            shear_provider,
        }
    }

    fn capacity(&self, limit_state: LimitState) -> CalcResult<CapacityResult> {
        match limit_state {
            LimitState::TensileYielding => self.tensile_yielding(),
            LimitState::TensileRupture => self.tensile_rupture(),
            LimitState::FlexuralBucklingX => self.flexural_buckling(Axis::X),
            LimitState::FlexuralBucklingY => self.flexural_buckling(Axis::Y),
            LimitState::FlexuralTorsionalBuckling => self.torsional_buckling(),
            LimitState::ShearX => self.shear(Axis::X),
            LimitState::ShearY => self.shear(Axis::Y),
            LimitState::FlexuralYieldingY => self.weak_axis_yielding(),
            LimitState::LateralTorsionalBucklingX => self.lateral_torsional_buckling(),
            LimitState::FlangeLocalBucklingX => self.flange_local_buckling(Axis::X),
            LimitState::FlangeLocalBucklingY => self.flange_local_buckling(Axis::Y),
            LimitState::Interaction => Err(CalcError::unsupported(
                limit_state.display_name(),
                "interaction is not a capacity limit state",
            )),
        }
    }

    fn tensile_yielding(&self) -> CalcResult<CapacityResult> {
        let m = &self.input.material;
        tension::tensile_yielding(
            m.fy_ksi,
            self.input.section.ag_in2,
            self.input.demand.tension_kip(),
            self.config.resistance.tension_yielding,
        )
    }

    fn tensile_rupture(&self) -> CalcResult<CapacityResult> {
        let ae = EffectiveArea::resolve(self.input.section.ag_in2, &self.input.net_area);
        tension::tensile_rupture(
            self.input.material.fu_ksi,
            ae,
            self.input.demand.tension_kip(),
            self.config.resistance.tension_rupture,
        )
    }

    fn axial_member(&self) -> AxialMember {
        AxialMember {
            fy_ksi: self.input.material.fy_ksi,
            ag_in2: self.input.section.ag_in2,
            e_ksi: self.config.elastic_modulus_ksi,
            phi: self.config.resistance.compression,
            pu_kip: self.input.demand.compression_kip(),
        }
    }

    fn require_nonslender_compression(&self) -> CalcResult<()> {
        if self.classification.compression.has_slender() {
            return Err(CalcError::unsupported(
                "Compression",
                "slender element in compression (E7) not implemented",
            ));
        }
        Ok(())
    }

    fn radius(&self, axis: Axis) -> CalcResult<f64> {
        let s = &self.input.section;
        match axis {
            Axis::X => radius_of_gyration(require(s.ixx_in4, "section.ixx_in4")?, s.ag_in2),
            Axis::Y => radius_of_gyration(require(s.iyy_in4, "section.iyy_in4")?, s.ag_in2),
        }
    }

    fn effective_length(&self, axis: Axis) -> (f64, f64) {
        let g = &self.input.geometry;
        match axis {
            Axis::X => (g.kx, g.length_x()),
            Axis::Y => (g.ky, g.length_y()),
        }
    }

    fn flexural_buckling(&self, axis: Axis) -> CalcResult<CapacityResult> {
        self.require_nonslender_compression()?;
        let r = self.radius(axis)?;
        let (k, length) = self.effective_length(axis);
        compression::flexural_buckling(axis, k, length, r, &self.axial_member())
    }

    fn torsional_buckling(&self) -> CalcResult<CapacityResult> {
        self.require_nonslender_compression()?;
        let s = &self.input.section;
        let props = TorsionalProperties {
            ixx_in4: require(s.ixx_in4, "section.ixx_in4")?,
            iyy_in4: require(s.iyy_in4, "section.iyy_in4")?,
            j_in4: require(s.j_in4, "section.j_in4")?,
            cw_in6: require(s.cw_in6, "section.cw_in6")?,
            kz: self.input.geometry.kz,
            length_z_in: self.input.geometry.length_z(),
            g_ksi: self.config.shear_modulus(),
            x0_in: s.x0_in,
            y0_in: s.y0_in,
        };
        compression::flexural_torsional_buckling(&props, &self.axial_member())
    }

    fn shear(&self, axis: Axis) -> CalcResult<CapacityResult> {
        let s = &self.input.section;
        let d = &self.input.demand;
        let (aw, vu) = match axis {
            Axis::X => (require(s.axx_in2, "section.axx_in2")?, d.vux_kip),
            Axis::Y => (require(s.ayy_in2, "section.ayy_in2")?, d.vuy_kip),
        };
        let fy = self.input.material.fy_ksi;
        let cv = self.shear_provider.coefficient(axis, fy, self.config.elastic_modulus_ksi);
        shear::shear_capacity(axis, fy, aw, cv, vu, self.config.resistance.shear)
    }

    fn weak_axis_plastic_moment(&self) -> CalcResult<(f64, f64)> {
        let s = &self.input.section;
        let zyy = require(s.zyy_in3, "section.zyy_in3")?;
        let syy = require(s.syy_in3, "section.syy_in3")?;
        let fy = self.input.material.fy_ksi;
        Ok(((fy * zyy).min(1.6 * fy * syy), syy))
    }

    fn weak_axis_yielding(&self) -> CalcResult<CapacityResult> {
        let s = &self.input.section;
        flexure::weak_axis_yielding(
            self.input.material.fy_ksi,
            require(s.zyy_in3, "section.zyy_in3")?,
            require(s.syy_in3, "section.syy_in3")?,
            self.input.demand.muy_kip_in,
            self.config.resistance.flexure,
        )
    }

    /// Strong-axis checks need a compact web; unknown webs are assumed compact.
    fn with_web_assumption(&self, result: CapacityResult) -> CapacityResult {
        match self.classification.flexure.web {
            Some(_) => result,
            None => result.with_note("Web slenderness unknown; compact web assumed"),
        }
    }

    fn lateral_torsional_buckling(&self) -> CalcResult<CapacityResult> {
        flexure::require_compact_web(self.classification.flexure.web.as_ref())?;
        let s = &self.input.section;
        let g = &self.input.geometry;
        let section = StrongAxisSection {
            ag_in2: s.ag_in2,
            iyy_in4: require(s.iyy_in4, "section.iyy_in4")?,
            j_in4: require(s.j_in4, "section.j_in4")?,
            cw_in6: require(s.cw_in6, "section.cw_in6")?,
            sxx_in3: require(s.sxx_in3, "section.sxx_in3")?,
            zxx_in3: require(s.zxx_in3, "section.zxx_in3")?,
        };
        let params = LtbParameters {
            fy_ksi: self.input.material.fy_ksi,
            e_ksi: self.config.elastic_modulus_ksi,
            c: self.config.ltb_coefficient_c,
            lb_in: g.unbraced_length(),
            gradient: MomentGradient::resolve(g.cb, self.config.default_cb),
            phi: self.config.resistance.flexure,
        };
        let result = flexure::lateral_torsional_buckling(&section, &params, self.input.demand.mux_kip_in)?;
        Ok(self.with_web_assumption(result))
    }

    fn flange_local_buckling(&self, axis: Axis) -> CalcResult<CapacityResult> {
        let flange = self
            .classification
            .flexure
            .flange
            .ok_or_else(|| CalcError::missing_field("section.bf_2tf"))?;
        let s = &self.input.section;
        let fy = self.input.material.fy_ksi;
        let phi = self.config.resistance.flexure;

        match axis {
            Axis::X => {
                flexure::require_compact_web(self.classification.flexure.web.as_ref())?;
                let mp = fy * require(s.zxx_in3, "section.zxx_in3")?;
                let sxx = require(s.sxx_in3, "section.sxx_in3")?;
                let result =
                    flexure::flange_local_buckling(axis, fy, mp, sxx, &flange, self.input.demand.mux_kip_in, phi)?;
                Ok(self.with_web_assumption(result))
            }
            Axis::Y => {
                let (mp, syy) = self.weak_axis_plastic_moment()?;
                flexure::flange_local_buckling(axis, fy, mp, syy, &flange, self.input.demand.muy_kip_in, phi)
            }
        }
    }

    fn slenderness(&self) -> Option<SlendernessCheck> {
        let ratio = |axis: Axis| {
            self.radius(axis).ok().map(|r| {
                let (k, length) = self.effective_length(axis);
                k * length / r
            })
        };
        compression::slenderness_check(ratio(Axis::X), ratio(Axis::Y), self.config.slenderness_limit)
    }

    fn interaction(&self, checks: &[LimitStateCheck]) -> CalcResult<InteractionResult> {
        let governing = |family: &dyn Fn(LimitState) -> bool| {
            GoverningCapacity::minimum(
                checks
                    .iter()
                    .filter_map(LimitStateCheck::capacity)
                    .filter(|r| family(r.limit_state))
                    .map(|r| (r.limit_state, r.design_capacity)),
            )
        };
        let demand = &self.input.demand;

        let (pc, axial_clause) = if demand.is_tension() {
            (governing(&|ls| ls.is_tension()), Clause::H1_2)
        } else {
            (governing(&|ls| ls.is_compression()), Clause::H1_1)
        };

        interaction::combined_forces(&InteractionInput {
            pr_kip: demand.pu_kip.abs(),
            axial_clause,
            pc,
            mrx_kip_in: demand.mux_kip_in,
            mcx: governing(&|ls| LimitState::flexure_about(Axis::X).contains(&ls)),
            mry_kip_in: demand.muy_kip_in,
            mcy: governing(&|ls| LimitState::flexure_about(Axis::Y).contains(&ls)),
        })
    }
}

fn record(label: &str, limit_state: LimitState, evaluated: CalcResult<Evaluation>) -> LimitStateCheck {
    let outcome = match evaluated {
        Ok(evaluation) => {
            debug!(member = label, limit_state = %limit_state, ratio = evaluation.ratio(), reference = %evaluation.reference(), "computed");
            Outcome::Computed(evaluation)
        }
        Err(reason) => {
            warn!(member = label, limit_state = %limit_state, reason = %reason, "limit state skipped");
            Outcome::Skipped { reason }
        }
    };
    LimitStateCheck { limit_state, outcome }
}

fn find_governing(checks: &[LimitStateCheck]) -> Option<Governing> {
    checks
        .iter()
        .filter_map(|c| c.evaluation().map(|e| (c.limit_state, e)))
        .fold(None, |best: Option<Governing>, (limit_state, e)| match best {
            Some(b) if b.ratio >= e.ratio() => Some(b),
            _ => Some(Governing {
                limit_state,
                ratio: e.ratio(),
                reference: e.reference(),
            }),
        })
}

/// Check one member against every limit state.
///
/// Returns an error only when the configuration or the input is invalid.
pub fn check_member(input: &MemberInput, config: &DesignConfig) -> CalcResult<CheckResults> {
    config.validate()?;
    input.validate()?;

    let evaluator = MemberEvaluator::new(input, config);
    let mut checks: Vec<LimitStateCheck> = LimitState::ALL
        .iter()
        .filter(|ls| **ls != LimitState::Interaction)
        .map(|&ls| record(&input.label, ls, evaluator.capacity(ls).map(Evaluation::Capacity)))
        .collect();

    let interaction = evaluator.interaction(&checks).map(Evaluation::Interaction);
    checks.push(record(&input.label, LimitState::Interaction, interaction));

    let governing = find_governing(&checks);
    let status = Status::from_governing(governing.as_ref());
    info!(
        member = %input.label,
        governing_ratio = governing.map(|g| g.ratio),
        status = %status,
        "member checked"
    );

    Ok(CheckResults {
        label: input.label.clone(),
        checks,
        classification: evaluator.classification,
        slenderness: evaluator.slenderness(),
        governing,
        status,
    })
}

/// Check a batch of members in parallel. Results keep the input order.
pub fn check_members(inputs: &[MemberInput], config: &DesignConfig) -> Vec<CalcResult<CheckResults>> {
    inputs.par_iter().map(|input| check_member(input, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::{ElementClass, ElementClassification, ElementPair};
    use crate::input::*;

    fn w8x31() -> MemberInput {
        MemberInput {
            label: "3 / W8X31".to_string(),
            section: SectionProperties {
                ag_in2: 9.13,
                axx_in2: Some(6.96),
                ayy_in2: Some(2.28),
                ixx_in4: Some(110.0),
                iyy_in4: Some(37.1),
                j_in4: Some(0.536),
                cw_in6: Some(531.1),
                sxx_in3: Some(27.5),
                syy_in3: Some(9.275),
                zxx_in3: Some(30.4),
                zyy_in3: Some(14.1),
                x0_in: 0.0,
                y0_in: 0.0,
                bf_2tf: Some(9.20),
                h_tw: Some(22.25),
            },
            material: SteelMaterial {
                fy_ksi: 50.0,
                fu_ksi: 62.0,
            },
            geometry: MemberGeometry {
                length_in: 121.0,
                kx: 2.0,
                ky: 2.0,
                kz: 1.0,
                length_x_in: Some(102.0),
                length_y_in: Some(88.0),
                length_z_in: None,
                unbraced_length_in: None,
                cb: Some(1.0),
            },
            net_area: NetAreaInput::default(),
            demand: FactoredDemand {
                pu_kip: 6.83,
                vux_kip: 0.0,
                vuy_kip: 3.2,
                mux_kip_in: 243.2,
                muy_kip_in: 9.13,
            },
            classification: None,
        }
    }

    #[test]
    fn test_w8x31_governs_by_interaction() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        assert_eq!(results.checks.len(), 12);
        assert_eq!(results.skipped().count(), 0);

        let governing = results.governing.unwrap();
        assert_eq!(governing.limit_state, LimitState::Interaction);
        assert_eq!(governing.reference, Reference::Equation(Equation::H1_1b));
        assert!((governing.ratio - 0.2184).abs() < 1e-3);
        assert_eq!(results.status, Status::Pass);
    }

    #[test]
    fn test_interaction_uses_minimum_capacities() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        let interaction = results.interaction().unwrap();
        assert_eq!(interaction.pc.unwrap().limit_state, LimitState::FlexuralBucklingY);
        assert_eq!(interaction.mcx.unwrap().limit_state, LimitState::LateralTorsionalBucklingX);
        assert_eq!(interaction.mcy.unwrap().limit_state, LimitState::FlangeLocalBucklingY);
        assert_eq!(interaction.clause, Clause::H1_1);
    }

    #[test]
    fn test_limit_states_in_report_order() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        let order: Vec<LimitState> = results.checks.iter().map(|c| c.limit_state).collect();
        assert_eq!(order, LimitState::ALL.to_vec());
    }

    #[test]
    fn test_missing_warping_constant_skips_only_dependents() {
        let mut input = w8x31();
        input.section.cw_in6 = None;
        let results = check_member(&input, &DesignConfig::default()).unwrap();

        let skipped: Vec<LimitState> = results.skipped().map(|(ls, _)| ls).collect();
        assert_eq!(
            skipped,
            vec![LimitState::FlexuralTorsionalBuckling, LimitState::LateralTorsionalBucklingX]
        );
        match &results.get(LimitState::FlexuralTorsionalBuckling).unwrap().outcome {
            Outcome::Skipped { reason } => assert_eq!(reason, &CalcError::missing_field("section.cw_in6")),
            other => panic!("expected skip, got {:?}", other),
        }
        // FLB x still gives Mcx
        assert_eq!(
            results.interaction().unwrap().mcx.unwrap().limit_state,
            LimitState::FlangeLocalBucklingX
        );
    }

    #[test]
    fn test_slender_compression_element_is_unsupported() {
        let mut input = w8x31();
        input.classification = Some(SectionClassification {
            compression: ElementPair {
                flange: None,
                web: Some(ElementClassification {
                    lambda: 40.0,
                    lambda_p: None,
                    lambda_r: 35.88,
                    class: ElementClass::Slender,
                }),
            },
            flexure: ElementPair::default(),
        });
        let results = check_member(&input, &DesignConfig::default()).unwrap();
        for ls in [
            LimitState::FlexuralBucklingX,
            LimitState::FlexuralBucklingY,
            LimitState::FlexuralTorsionalBuckling,
        ] {
            match &results.get(ls).unwrap().outcome {
                Outcome::Skipped { reason } => assert_eq!(reason.error_code(), "UNSUPPORTED_CASE"),
                other => panic!("expected skip for {:?}, got {:?}", ls, other),
            }
        }
        // no Pc for a nonzero axial demand
        assert!(results.interaction().is_none());
    }

    #[test]
    fn test_noncompact_web_blocks_strong_axis_flexure() {
        let mut input = w8x31();
        input.section.h_tw = Some(100.0);
        let results = check_member(&input, &DesignConfig::default()).unwrap();
        assert!(results.capacity(LimitState::LateralTorsionalBucklingX).is_none());
        assert!(results.capacity(LimitState::FlangeLocalBucklingX).is_none());
        assert!(results.capacity(LimitState::FlangeLocalBucklingY).is_some());
    }

    #[test]
    fn test_unknown_web_is_noted() {
        let mut input = w8x31();
        input.section.h_tw = None;
        let results = check_member(&input, &DesignConfig::default()).unwrap();
        let ltb = results.capacity(LimitState::LateralTorsionalBucklingX).unwrap();
        assert!(ltb.notes.iter().any(|n| n.contains("compact web assumed")));
    }

    #[test]
    fn test_tension_member_uses_h1_2() {
        let mut input = w8x31();
        input.demand.pu_kip = -150.0;
        let results = check_member(&input, &DesignConfig::default()).unwrap();

        let yielding = results.capacity(LimitState::TensileYielding).unwrap();
        assert!((yielding.ratio - 150.0 / 410.85).abs() < 1e-9);
        let buckling = results.capacity(LimitState::FlexuralBucklingY).unwrap();
        assert_eq!(buckling.demand, 0.0);

        let interaction = results.interaction().unwrap();
        assert_eq!(interaction.clause, Clause::H1_2);
        assert_eq!(interaction.pc.unwrap().limit_state, LimitState::TensileYielding);
        assert_eq!(interaction.equation, Equation::H1_1a);
    }

    #[test]
    fn test_overloaded_member_fails() {
        let mut input = w8x31();
        input.demand.mux_kip_in = 1400.0;
        let results = check_member(&input, &DesignConfig::default()).unwrap();
        assert_eq!(results.status, Status::Fail);
        assert!(results.governing_ratio().unwrap() > 1.0);
    }

    #[test]
    fn test_status_from_governing() {
        let skipped_only = vec![LimitStateCheck {
            limit_state: LimitState::ShearX,
            outcome: Outcome::Skipped {
                reason: CalcError::missing_field("section.axx_in2"),
            },
        }];
        let governing = find_governing(&skipped_only);
        assert!(governing.is_none());
        assert_eq!(Status::from_governing(governing.as_ref()), Status::Indeterminate);

        let at_unity = Governing {
            limit_state: LimitState::ShearY,
            ratio: 1.0,
            reference: Reference::Clause(Clause::G1),
        };
        assert_eq!(Status::from_governing(Some(&at_unity)), Status::Pass);
        let over = Governing { ratio: 1.0001, ..at_unity };
        assert_eq!(Status::from_governing(Some(&over)), Status::Fail);
    }

    #[test]
    fn test_invalid_input_is_returned() {
        let mut input = w8x31();
        input.material.fy_ksi = 0.0;
        let err = check_member(&input, &DesignConfig::default()).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_shear_model_from_config() {
        let config = DesignConfig {
            shear_coefficient: ShearCoefficientModel::WebSlenderness,
            ..DesignConfig::default()
        };
        let results = check_member(&w8x31(), &config).unwrap();
        let shear_y = results.capacity(LimitState::ShearY).unwrap();
        assert!(shear_y.equations().contains(&Equation::G2_3));
        let shear_x = results.capacity(LimitState::ShearX).unwrap();
        assert!(shear_x.equations().contains(&Equation::G2_9));
        assert!(!shear_x.equations().contains(&Equation::G2_3));
    }

    #[test]
    fn test_status_covers_computed_entries_only() {
        let mut input = w8x31();
        input.geometry.length_x_in = Some(0.0);
        input.geometry.length_y_in = Some(0.0);
        input.geometry.length_z_in = Some(0.0);
        input.geometry.unbraced_length_in = Some(121.0);

        let results = check_member(&input, &DesignConfig::default()).unwrap();
        let skipped: Vec<LimitState> = results.skipped().map(|(ls, _)| ls).collect();
        assert!(skipped.contains(&LimitState::FlexuralBucklingY));
        assert!(skipped.contains(&LimitState::Interaction));
        assert_eq!(results.status, Status::Pass);
        assert_eq!(results.governing.unwrap().limit_state, LimitState::LateralTorsionalBucklingX);
    }

    #[test]
    fn test_equations_used() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        let used = results.equations_used();
        for eq in [Equation::D2_1, Equation::E3_4, Equation::E4_2, Equation::F2_2, Equation::F6_2, Equation::H1_1b] {
            assert!(used.contains(&eq), "missing {:?}", eq);
        }
        assert!(!used.contains(&Equation::H1_1a));
        assert!(!used.contains(&Equation::F2_3));
    }

    #[test]
    fn test_slenderness_is_advisory() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        let s = results.slenderness.unwrap();
        assert!((s.governing - 87.309).abs() < 0.001);
        assert!(s.within_limit);
    }

    #[test]
    fn test_batch_keeps_order() {
        let mut second = w8x31();
        second.label = "second".to_string();
        let mut bad = w8x31();
        bad.section.ag_in2 = -1.0;
        let results = check_members(&[w8x31(), second, bad], &DesignConfig::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[1].as_ref().unwrap().label, "second");
        assert!(results[2].is_err());
    }

    #[test]
    fn test_results_serialize_with_report_references() {
        let results = check_member(&w8x31(), &DesignConfig::default()).unwrap();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["status"], "PASS");
        assert_eq!(json["governing"]["reference"], "Eq.H1-1b");
        assert_eq!(json["checks"][8]["outcome"]["outcome"], "computed");
        assert_eq!(json["checks"][8]["outcome"]["clause"], "Cl.F2.2");

        let back: CheckResults = serde_json::from_value(json).unwrap();
        assert_eq!(back.checks.len(), results.checks.len());
        assert_eq!(back.status, results.status);
        assert_eq!(back.governing.unwrap().reference, Reference::Equation(Equation::H1_1b));
        assert!((back.governing_ratio().unwrap() - results.governing_ratio().unwrap()).abs() < 1e-12);
    }
}
