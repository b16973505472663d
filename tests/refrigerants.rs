//! 냉매 카탈로그와 PT 차트 테스트.
use approx::assert_abs_diff_eq;
use hvac_engineering_toolbox::refrigerant::database::{
    flammable_refrigerants, refrigerants, suggested_operating_range,
    validate_operating_conditions,
};
use hvac_engineering_toolbox::refrigerant::pt_chart::{self, GaugeUnit};
use hvac_engineering_toolbox::refrigerant::{constants, find, SafetyClass};

#[test]
fn catalog_covers_every_constant_table_entry() {
    for c in constants::all() {
        assert!(find(c.id).is_some(), "{} missing from catalog", c.id);
    }
    assert_eq!(refrigerants().len(), 7);
    assert_eq!(find("r-32").map(|r| r.id), Some("R32"));
    assert_eq!(find("R32").map(|r| r.safety), Some(SafetyClass::A2L));
}

#[test]
fn flammable_list_has_lfl() {
    let ids: Vec<&str> = flammable_refrigerants().map(|r| r.id).collect();
    assert_eq!(ids, ["R290", "R32", "R717"]);
}

#[test]
fn operating_limits() {
    let ok = validate_operating_conditions("R134a", 5.0, None);
    assert!(ok.valid && ok.errors.is_empty() && ok.warnings.is_empty());

    let cold = validate_operating_conditions("R134a", -150.0, None);
    assert!(!cold.valid);
    assert_eq!(cold.errors.len(), 1);

    let co2 = validate_operating_conditions("R744", 30.979, Some(1.0));
    assert!(co2.valid);
    assert!(co2.warnings.iter().any(|w| w.contains("transcritical")));

    let limited = validate_operating_conditions("R448A", 0.0, None);
    assert!(limited.valid);
    assert_eq!(limited.warnings.len(), 1);

    let unknown = validate_operating_conditions("R9999", 0.0, None);
    assert!(!unknown.valid);
    assert_eq!(unknown.errors, ["Unknown refrigerant: R9999"]);
}

#[test]
fn suggested_range_keeps_margin() {
    let r = suggested_operating_range("R134a").unwrap();
    assert_abs_diff_eq!(r.evaporator.min, 169.85 - 273.15 + 10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(r.condenser.max, 374.21 - 273.15 - 10.0, epsilon = 1e-9);
    assert!(r.evaporator.recommended < r.condenser.recommended);
    assert!(suggested_operating_range("R9999").is_none());
}

#[test]
fn pt_chart_table_and_lookup() {
    assert!(pt_chart::is_supported("R410A"));
    assert!(!pt_chart::is_supported("R744"));

    let rows = pt_chart::pt_table("R410A", 0.0, 100.0, 10.0);
    assert_eq!(rows.len(), 11);
    assert!(rows.windows(2).all(|w| w[1].pressure_psig > w[0].pressure_psig));

    let t = pt_chart::saturation_temperature_f("R410A", rows[4].pressure_psig, GaugeUnit::Psig)
        .unwrap();
    assert_abs_diff_eq!(t, 40.0, epsilon = 1e-6);

    assert!(pt_chart::pt_table("R744", 0.0, 100.0, 10.0).is_empty());
    assert!(pt_chart::pt_table("R410A", 0.0, 100.0, 0.0).is_empty());
    assert!(pt_chart::saturation_temperature_f("R22", -20.0, GaugeUnit::Psig).is_none());
}

#[test]
fn pt_chart_rejects_unbounded_ranges() {
    assert!(pt_chart::pt_table("R410A", 0.0, f64::INFINITY, 1.0).is_empty());
    assert!(pt_chart::pt_table("R410A", f64::NEG_INFINITY, 100.0, 1.0).is_empty());
    assert!(pt_chart::pt_table("R410A", f64::NAN, 100.0, 1.0).is_empty());
    assert!(pt_chart::pt_table("R410A", 0.0, 1.0e6, 0.1).is_empty());

    let dense = pt_chart::pt_table("R410A", 0.0, 99.0, 0.01);
    assert!(!dense.is_empty());
    assert!(dense.len() <= pt_chart::MAX_PT_ROWS);
}
