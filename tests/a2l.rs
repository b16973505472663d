//! A2L 충전량 한계 공식 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use hvac_engineering_toolbox::safety::a2l::lfl_for;
use hvac_engineering_toolbox::safety::{
    a2l_charge_limit, a2l_charge_limit_checked, min_area_for_a2l, min_area_for_a2l_checked,
    A2lChargeInputs, A2lError, InstallHeight,
};

fn inputs(lfl: f64, height: f64, area: f64) -> A2lChargeInputs {
    A2lChargeInputs {
        lfl_kg_per_m3: lfl,
        install_height_m: height,
        room_area_m2: area,
    }
}

#[test]
fn r32_wall_unit_in_twenty_square_meters() {
    let m = a2l_charge_limit(&inputs(0.307, 1.8, 20.0));
    assert_abs_diff_eq!(m, 4.56, epsilon = 0.05);
}

#[test]
fn non_physical_inputs_give_zero() {
    assert_eq!(a2l_charge_limit(&inputs(0.0, 1.8, 20.0)), 0.0);
    assert_eq!(a2l_charge_limit(&inputs(0.307, 0.0, 20.0)), 0.0);
    assert_eq!(a2l_charge_limit(&inputs(-0.1, 1.8, 20.0)), 0.0);
    assert_eq!(a2l_charge_limit(&inputs(0.307, 1.8, -1.0)), 0.0);
    assert_eq!(min_area_for_a2l(0.0, 0.307, 1.8), 0.0);
    assert_eq!(min_area_for_a2l(4.0, 0.0, 1.8), 0.0);
    assert_eq!(min_area_for_a2l(4.0, 0.307, 0.0), 0.0);
}

#[test]
fn charge_is_linear_in_height() {
    let high = a2l_charge_limit(&inputs(0.307, 1.8, 20.0));
    let low = a2l_charge_limit(&inputs(0.307, 0.6, 20.0));
    assert_relative_eq!(high / low, 3.0, epsilon = 1e-9);
}

#[test]
fn min_area_inverts_charge_limit() {
    for (lfl, h, area) in [(0.307, 1.8, 20.0), (0.038, 2.2, 35.0), (0.116, 0.6, 8.5)] {
        let m = a2l_charge_limit(&inputs(lfl, h, area));
        assert_relative_eq!(min_area_for_a2l(m, lfl, h), area, max_relative = 1e-9);
    }
    // 4.56 kg R32, 벽걸이형 → 약 20 m²
    assert_abs_diff_eq!(min_area_for_a2l(4.56, 0.307, 1.8), 20.0, epsilon = 0.5);
}

#[test]
fn install_height_presets() {
    let meters: Vec<f64> = InstallHeight::ALL.iter().map(|h| h.meters()).collect();
    assert_eq!(meters, [0.6, 1.0, 1.8, 2.2]);
    assert_eq!(InstallHeight::parse(" Ceiling "), Some(InstallHeight::Ceiling));
    assert_eq!(InstallHeight::parse("roof"), None);
}

#[test]
fn checked_wrappers_name_the_failure() {
    assert_eq!(
        a2l_charge_limit_checked(&inputs(0.0, 1.8, 20.0)),
        Err(A2lError::NonPositiveLfl(0.0))
    );
    assert_eq!(
        a2l_charge_limit_checked(&inputs(0.307, -1.0, 20.0)),
        Err(A2lError::NonPositiveHeight(-1.0))
    );
    assert_eq!(
        a2l_charge_limit_checked(&inputs(0.307, 1.8, -3.0)),
        Err(A2lError::NegativeArea(-3.0))
    );
    assert!(matches!(
        a2l_charge_limit_checked(&inputs(f64::NAN, 1.8, 20.0)),
        Err(A2lError::NonFinite { field: "lfl_kg_per_m3", .. })
    ));
    assert_eq!(
        min_area_for_a2l_checked(0.0, 0.307, 1.8),
        Err(A2lError::NonPositiveCharge(0.0))
    );
    let ok = min_area_for_a2l_checked(4.56, 0.307, 1.8).unwrap();
    assert_eq!(ok, min_area_for_a2l(4.56, 0.307, 1.8));
}

#[test]
fn lfl_comes_from_catalog() {
    assert_eq!(lfl_for("R32"), Ok(0.307));
    assert_eq!(lfl_for("r290"), Ok(0.038));
    assert_eq!(lfl_for("R717"), Ok(0.116));
    assert_eq!(lfl_for("R134a"), Err(A2lError::NoLfl("R134a".into())));
    assert_eq!(lfl_for("R1"), Err(A2lError::NoLfl("R1".into())));
}
