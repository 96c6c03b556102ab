//! Reproduces the W8X31 member report end to end.

use steel_core::calculations::{CapacityDetail, Evaluation, LimitState, Outcome};
use steel_core::classification::ElementClass;
use steel_core::equations::{BucklingRegime, Equation, Reference};
use steel_core::{check_member, CheckResults, DesignConfig, MemberInput, Status};

const FIXTURE: &str = include_str!("fixtures/w8x31.json");

fn report() -> CheckResults {
    let input: MemberInput = serde_json::from_str(FIXTURE).unwrap();
    check_member(&input, &DesignConfig::default()).unwrap()
}

fn ratio(results: &CheckResults, limit_state: LimitState) -> f64 {
    match &results.get(limit_state).unwrap().outcome {
        Outcome::Computed(e) => e.ratio(),
        Outcome::Skipped { reason } => panic!("{} skipped: {}", limit_state, reason),
    }
}

#[test]
fn test_verdict() {
    let results = report();
    assert_eq!(results.status, Status::Pass);

    let governing = results.governing.unwrap();
    assert_eq!(governing.limit_state, LimitState::Interaction);
    assert_eq!(governing.reference, Reference::Equation(Equation::H1_1b));
    assert!((governing.ratio - 0.218).abs() < 5e-4);
}

#[test]
fn test_every_limit_state_computed() {
    let results = report();
    assert_eq!(results.checks.len(), 12);
    assert_eq!(results.computed().count(), 12);
}

#[test]
fn test_tension_entries() {
    let results = report();
    let yielding = results.capacity(LimitState::TensileYielding).unwrap();
    assert!((yielding.nominal_capacity - 456.5).abs() < 1e-9);
    assert_eq!(yielding.ratio, 0.0);

    let rupture = results.capacity(LimitState::TensileRupture).unwrap();
    assert!((rupture.nominal_capacity - 566.06).abs() < 1e-9);
    assert!(rupture.notes.iter().any(|n| n.contains("Ae = Ag")));
}

#[test]
fn test_flexural_buckling_x() {
    let results = report();
    let fbx = results.capacity(LimitState::FlexuralBucklingX).unwrap();
    match fbx.detail {
        CapacityDetail::FlexuralBuckling {
            slenderness,
            fe_ksi,
            fcr_ksi,
            regime,
            ..
        } => {
            assert!((slenderness - 58.772).abs() < 1e-3);
            assert!((fe_ksi - 82.86).abs() < 0.01);
            assert!((fcr_ksi - 38.84).abs() < 0.01);
            assert_eq!(regime, BucklingRegime::Inelastic);
        }
        ref other => panic!("unexpected detail {:?}", other),
    }
    assert!((fbx.nominal_capacity - 354.6).abs() < 0.05);
}

#[test]
fn test_flexural_buckling_y_and_torsion() {
    let results = report();
    let fby = results.capacity(LimitState::FlexuralBucklingY).unwrap();
    assert!((fby.design_capacity - 235.30).abs() < 0.01);

    let ftb = results.capacity(LimitState::FlexuralTorsionalBuckling).unwrap();
    assert!((ftb.design_capacity - 340.38).abs() < 0.01);
    assert_eq!(ftb.clause.to_string(), "Cl.E4");
}

#[test]
fn test_shear_entries() {
    let results = report();
    let vx = results.capacity(LimitState::ShearX).unwrap();
    assert!((vx.nominal_capacity - 208.8).abs() < 1e-9);
    let cv2 = vx.intermediates().into_iter().find(|r| r.symbol == "Cv2").unwrap();
    assert_eq!(cv2.reference, Some(Reference::Equation(Equation::G2_9)));
    let vy = results.capacity(LimitState::ShearY).unwrap();
    assert!((vy.nominal_capacity - 68.4).abs() < 1e-9);
    assert!((ratio(&results, LimitState::ShearY) - 3.2 / 61.56).abs() < 1e-9);
}

#[test]
fn test_flexure_entries() {
    let results = report();

    let ltb = results.capacity(LimitState::LateralTorsionalBucklingX).unwrap();
    assert_eq!(ltb.clause.to_string(), "Cl.F2.2");
    assert!((ltb.design_capacity - 1283.81).abs() < 0.01);
    let lp = ltb.intermediates().into_iter().find(|r| r.symbol == "Lp").unwrap();
    assert!((lp.value - 85.443).abs() < 1e-3);

    let flbx = results.capacity(LimitState::FlangeLocalBucklingX).unwrap();
    assert!((flbx.nominal_capacity - 1518.13).abs() < 0.01);

    let yielding_y = results.capacity(LimitState::FlexuralYieldingY).unwrap();
    assert!((yielding_y.nominal_capacity - 705.0).abs() < 1e-9);

    let flby = results.capacity(LimitState::FlangeLocalBucklingY).unwrap();
    assert!((flby.design_capacity - 633.35).abs() < 0.01);
}

#[test]
fn test_reported_classification_is_used() {
    let results = report();
    let flange = results.classification.flexure.flange.unwrap();
    assert_eq!(flange.class, ElementClass::NonCompact);
    assert_eq!(flange.lambda_p, Some(9.15));
    assert!(results.classification.compression.flange.unwrap().lambda_p.is_none());
}

#[test]
fn test_supplied_flange_past_lambda_r_is_not_interpolated() {
    let mut value: serde_json::Value = serde_json::from_str(FIXTURE).unwrap();
    value["classification"]["flexure"]["flange"]["lambda"] = serde_json::json!(30.0);
    let input: MemberInput = serde_json::from_value(value).unwrap();
    let results = check_member(&input, &DesignConfig::default()).unwrap();

    for limit_state in [LimitState::FlangeLocalBucklingX, LimitState::FlangeLocalBucklingY] {
        match &results.get(limit_state).unwrap().outcome {
            Outcome::Skipped { reason } => assert_eq!(reason.error_code(), "UNSUPPORTED_CASE"),
            Outcome::Computed(e) => panic!("{} computed with ratio {}", limit_state, e.ratio()),
        }
    }
    assert!(results.interaction().is_some());
}

#[test]
fn test_interaction_detail() {
    let results = report();
    let interaction = match results.get(LimitState::Interaction).unwrap().evaluation() {
        Some(Evaluation::Interaction(r)) => r.clone(),
        other => panic!("unexpected {:?}", other),
    };
    assert!(interaction.axial_ratio < 0.2);
    assert_eq!(interaction.pc.unwrap().limit_state, LimitState::FlexuralBucklingY);
    assert!(interaction.intermediates().iter().any(|r| r.symbol == "Pr/Pc"));
}

#[test]
fn test_slenderness_advisory() {
    let results = report();
    let s = results.slenderness.unwrap();
    assert!((s.kl_r_x.unwrap() - 58.772).abs() < 1e-3);
    assert!((s.kl_r_y.unwrap() - 87.309).abs() < 1e-3);
    assert!(s.within_limit);
}

#[test]
fn test_same_input_same_results() {
    assert_eq!(report(), report());
}
