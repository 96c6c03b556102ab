//! Property tests over the numeric primitives and the member check.

use proptest::prelude::*;

use steel_core::calculations::flexure::{lateral_torsional_buckling, limiting_lengths, LtbParameters, MomentGradient, StrongAxisSection};
use steel_core::calculations::result::CbSource;
use steel_core::equations::buckling::{critical_stress, BucklingRegime, INELASTIC_LIMIT};
use steel_core::input::{FactoredDemand, MemberGeometry, NetAreaInput, SectionProperties, SteelMaterial};
use steel_core::{check_member, DesignConfig, MemberInput};

fn w8x31_section() -> StrongAxisSection {
    StrongAxisSection {
        ag_in2: 9.13,
        iyy_in4: 37.1,
        j_in4: 0.536,
        cw_in6: 531.1,
        sxx_in3: 27.5,
        zxx_in3: 30.4,
    }
}

fn ltb_params(lb_in: f64) -> LtbParameters {
    LtbParameters {
        fy_ksi: 50.0,
        e_ksi: 29000.0,
        c: 1.0,
        lb_in,
        gradient: MomentGradient {
            cb: 1.0,
            source: CbSource::Supplied,
        },
        phi: 0.9,
    }
}

fn member(pu_kip: f64, mux_kip_in: f64, muy_kip_in: f64, vuy_kip: f64, length_in: f64) -> MemberInput {
    MemberInput {
        label: "prop".to_string(),
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
            bf_2tf: Some(9.2),
            h_tw: Some(22.25),
            ..Default::default()
        },
        material: SteelMaterial {
            fy_ksi: 50.0,
            fu_ksi: 62.0,
        },
        geometry: MemberGeometry::pinned(length_in),
        net_area: NetAreaInput::default(),
        demand: FactoredDemand {
            pu_kip,
            vux_kip: 0.0,
            vuy_kip,
            mux_kip_in,
            muy_kip_in,
        },
        classification: None,
    }
}

proptest! {
    #[test]
    fn critical_stress_never_exceeds_fy(fe in 1.0f64..2000.0, fy in 30.0f64..100.0) {
        let cs = critical_stress(fe, fy).unwrap();
        prop_assert!(cs.fcr_ksi > 0.0);
        prop_assert!(cs.fcr_ksi <= fy);
    }

    #[test]
    fn critical_stress_regime_follows_ratio(fe in 1.0f64..2000.0, fy in 30.0f64..100.0) {
        let cs = critical_stress(fe, fy).unwrap();
        let expected = if fy / fe <= INELASTIC_LIMIT { BucklingRegime::Inelastic } else { BucklingRegime::Elastic };
        prop_assert_eq!(cs.regime, expected);
    }

    #[test]
    fn critical_stress_continuous_at_limit(fy in 30.0f64..100.0) {
        let fe = fy / INELASTIC_LIMIT;
        let above = critical_stress(fe * (1.0 + 1e-9), fy).unwrap().fcr_ksi;
        let below = critical_stress(fe * (1.0 - 1e-9), fy).unwrap().fcr_ksi;
        prop_assert!(((above - below) / above).abs() < 1e-3);
    }

    #[test]
    fn elastic_ltb_decreases_with_length(extra in 1.0f64..500.0, step in 1.0f64..200.0) {
        let section = w8x31_section();
        let lengths = limiting_lengths(&section, 50.0, 29000.0, 1.0).unwrap();
        let lb = lengths.lr_in + extra;
        let shorter = lateral_torsional_buckling(&section, &ltb_params(lb), 0.0).unwrap();
        let longer = lateral_torsional_buckling(&section, &ltb_params(lb + step), 0.0).unwrap();
        prop_assert!(longer.nominal_capacity < shorter.nominal_capacity);
    }

    #[test]
    fn ltb_never_exceeds_plastic_moment(lb in 0.0f64..1000.0) {
        let r = lateral_torsional_buckling(&w8x31_section(), &ltb_params(lb), 0.0).unwrap();
        prop_assert!(r.nominal_capacity <= 50.0 * 30.4 + 1e-9);
    }

    #[test]
    fn member_ratios_are_non_negative(
        pu in -300.0f64..300.0,
        mux in -1200.0f64..1200.0,
        muy in -600.0f64..600.0,
        vuy in -60.0f64..60.0,
        length in 12.0f64..400.0,
    ) {
        let results = check_member(&member(pu, mux, muy, vuy, length), &DesignConfig::default()).unwrap();
        for (_, evaluation) in results.computed() {
            prop_assert!(evaluation.ratio() >= 0.0);
        }
        let governing = results.governing.unwrap();
        for (_, evaluation) in results.computed() {
            prop_assert!(evaluation.ratio() <= governing.ratio);
        }
    }

    #[test]
    fn member_check_is_idempotent(pu in -300.0f64..300.0, mux in 0.0f64..1200.0, length in 12.0f64..400.0) {
        let input = member(pu, mux, 0.0, 0.0, length);
        let config = DesignConfig::default();
        prop_assert_eq!(check_member(&input, &config).unwrap(), check_member(&input, &config).unwrap());
    }
}
