//! 단순 사이클·캐스케이드·냉매 비교 계산 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use hvac_engineering_toolbox::cycle::cascade::{
    calculate_cascade, cascade_overlap_k, DEFAULT_BASE_LOAD_KW,
};
use hvac_engineering_toolbox::cycle::compare::{
    best_by_cop, compare_refrigerants, ComparisonConditions,
};
use hvac_engineering_toolbox::cycle::{
    calculate_cycle, calculate_cycle_checked, calculate_simple_cycle, CycleError, CycleInputs,
    CycleModel,
};

#[test]
fn r134a_reference_scenario() {
    let r = calculate_simple_cycle("R134a", -10.0, 45.0, 5.0, 2.0);
    assert!(r.evaporator_pressure_pa > 0.0);
    assert!(r.condenser_pressure_pa > r.evaporator_pressure_pa);
    assert_eq!(r.liquid_temp_c, 43.0);
    assert_abs_diff_eq!(r.suction_temp_c, -5.0, epsilon = 1e-9);
    assert_relative_eq!(r.pressure_ratio, 8.8721, max_relative = 1e-4);
    assert_relative_eq!(r.cop_cooling, 263.15 / 55.0 * 0.60, max_relative = 1e-12);
    assert_relative_eq!(r.cop_heating, 318.15 / 55.0 * 0.60, max_relative = 1e-12);
    assert_abs_diff_eq!(r.discharge_temp_c, 83.33, epsilon = 0.01);
    assert!(r.is_valid_cycle());
}

#[test]
fn heating_cop_exceeds_cooling_by_efficiency_factor() {
    for (evap, cond) in [(-20.0, 30.0), (0.0, 50.0), (5.0, 40.0)] {
        let r = calculate_simple_cycle("R410A", evap, cond, 5.0, 5.0);
        assert_relative_eq!(r.cop_heating - r.cop_cooling, 0.60, epsilon = 1e-9);
    }
}

#[test]
fn positive_lift_gives_ratio_above_one() {
    for id in ["R134a", "R410A", "R744"] {
        for (evap, cond) in [(-30.0, -20.0), (-10.0, 45.0), (5.0, 6.0)] {
            let r = calculate_simple_cycle(id, evap, cond, 5.0, 5.0);
            assert!(r.pressure_ratio > 1.0, "{id} {evap}/{cond}: {}", r.pressure_ratio);
        }
    }
}

#[test]
fn equal_temperatures_give_non_finite_cop() {
    let r = calculate_simple_cycle("R134a", 10.0, 10.0, 5.0, 5.0);
    assert!(!r.cop_cooling.is_finite());
    assert!(!r.cop_heating.is_finite());
    assert_relative_eq!(r.pressure_ratio, 1.0);
    assert!(!r.is_valid_cycle());
}

#[test]
fn inverted_lift_is_not_rejected_by_permissive_calculator() {
    let r = calculate_simple_cycle("R134a", 40.0, 0.0, 5.0, 5.0);
    assert!(r.cop_cooling < 0.0);
    assert!(r.pressure_ratio < 1.0);
    assert!(!r.is_valid_cycle());
}

#[test]
fn nan_input_propagates() {
    let r = calculate_simple_cycle("R134a", f64::NAN, 45.0, 5.0, 5.0);
    assert!(r.evaporator_pressure_pa.is_nan());
    assert!(r.cop_cooling.is_nan());
}

#[test]
fn unknown_refrigerant_matches_default_in_permissive_mode() {
    let a = calculate_simple_cycle("R9999", -10.0, 45.0, 5.0, 2.0);
    let b = calculate_simple_cycle("R134a", -10.0, 45.0, 5.0, 2.0);
    assert_eq!(a, b);
}

#[test]
fn strict_mode_accepts_valid_inputs_with_same_result() {
    let inputs = CycleInputs::new("R134a", -10.0, 45.0, 5.0, 2.0);
    let model = CycleModel::default();
    let checked = calculate_cycle_checked(&inputs, &model).unwrap();
    assert_eq!(checked, calculate_cycle(&inputs, &model));
}

#[test]
fn strict_mode_rejects_degenerate_inputs() {
    let model = CycleModel::default();
    let check = |inputs: CycleInputs| calculate_cycle_checked(&inputs, &model).unwrap_err();

    assert_eq!(
        check(CycleInputs::new("R9999", -10.0, 45.0, 5.0, 5.0)),
        CycleError::UnknownRefrigerant("R9999".into())
    );
    assert!(matches!(
        check(CycleInputs::new("R134a", 10.0, 10.0, 5.0, 5.0)),
        CycleError::NonPositiveLift { .. }
    ));
    assert!(matches!(
        check(CycleInputs::new("R134a", f64::NAN, 45.0, 5.0, 5.0)),
        CycleError::NonFinite { field: "evaporator_temp_c", .. }
    ));
    assert!(matches!(
        check(CycleInputs::new("R134a", -300.0, 45.0, 5.0, 5.0)),
        CycleError::BelowAbsoluteZero { field: "evaporator", .. }
    ));
    assert!(matches!(
        check(CycleInputs::new("R134a", -10.0, 45.0, -1.0, 5.0)),
        CycleError::Negative { field: "superheat_k", .. }
    ));
}

#[test]
fn strict_mode_allows_zero_superheat_and_subcooling() {
    let inputs = CycleInputs::new("R744", -30.0, 10.0, 0.0, 0.0);
    let r = calculate_cycle_checked(&inputs, &CycleModel::default()).unwrap();
    assert_abs_diff_eq!(r.suction_temp_c, -30.0, epsilon = 1e-9);
    assert_eq!(r.liquid_temp_c, 10.0);
}

#[test]
fn strict_mode_rejects_bad_model() {
    let inputs = CycleInputs::new("R134a", -10.0, 45.0, 5.0, 5.0);
    for model in [
        CycleModel {
            efficiency_factor: 0.0,
            ..CycleModel::default()
        },
        CycleModel {
            efficiency_factor: 1.2,
            ..CycleModel::default()
        },
        CycleModel {
            polytropic_exponent: 1.0,
            ..CycleModel::default()
        },
    ] {
        assert!(matches!(
            calculate_cycle_checked(&inputs, &model),
            Err(CycleError::InvalidModel(_))
        ));
    }
}

#[test]
fn custom_model_scales_cop() {
    let inputs = CycleInputs::new("R134a", -10.0, 45.0, 5.0, 2.0);
    let base = calculate_cycle(&inputs, &CycleModel::default());
    let better = calculate_cycle(
        &inputs,
        &CycleModel {
            efficiency_factor: 0.75,
            ..CycleModel::default()
        },
    );
    assert_relative_eq!(better.cop_cooling / base.cop_cooling, 1.25, epsilon = 1e-12);
    assert_eq!(better.discharge_temp_c, base.discharge_temp_c);
}

#[test]
fn cascade_energy_balance_closes() {
    let lt = CycleInputs::new("R744", -40.0, -5.0, 5.0, 5.0);
    let ht = CycleInputs::new("R134a", -10.0, 40.0, 5.0, 5.0);
    let res = calculate_cascade(&lt, &ht, &CycleModel::default(), DEFAULT_BASE_LOAD_KW);

    assert_eq!(res.cooling_capacity_kw, 10.0);
    assert_relative_eq!(
        res.high_temp.capacity_kw,
        res.low_temp.heat_rejection_kw,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        res.heat_rejection_kw,
        res.cooling_capacity_kw + res.total_work_kw,
        epsilon = 1e-9
    );
    assert_relative_eq!(res.system_cop, 1.5477, max_relative = 1e-4);
    assert!(res.system_cop < res.low_temp.cycle.cop_cooling);
    assert_eq!(cascade_overlap_k(&lt, &ht), 5.0);
}

#[test]
fn comparison_keeps_order_and_picks_best() {
    let conditions = ComparisonConditions {
        evaporator_temp_c: -10.0,
        condenser_temp_c: 45.0,
        superheat_k: 5.0,
        subcooling_k: 5.0,
        load_kw: 10.0,
    };
    let entries = compare_refrigerants(
        &["R744", "R410A", "R134a"],
        &conditions,
        &CycleModel::default(),
    );
    let ids: Vec<&str> = entries.iter().map(|e| e.refrigerant_id.as_str()).collect();
    assert_eq!(ids, ["R744", "R410A", "R134a"]);
    for e in &entries {
        assert_relative_eq!(e.heat_rejection_kw, 10.0 + e.compressor_work_kw, epsilon = 1e-12);
    }
    // COP가 같으면 토출온도가 낮은 냉매
    assert_eq!(best_by_cop(&entries).unwrap().refrigerant_id, "R134a");
}

#[test]
fn comparison_without_valid_entry_has_no_best() {
    let conditions = ComparisonConditions {
        evaporator_temp_c: 20.0,
        condenser_temp_c: 20.0,
        superheat_k: 5.0,
        subcooling_k: 5.0,
        load_kw: 10.0,
    };
    let entries = compare_refrigerants(&["R134a", "R744"], &conditions, &CycleModel::default());
    assert_eq!(entries.len(), 2);
    assert!(best_by_cop(&entries).is_none());
    assert!(best_by_cop(&[]).is_none());
}
