//! 단위 변환과 문자열 단위 파싱 테스트.
use approx::assert_relative_eq;
use hvac_engineering_toolbox::conversion::{convert, parse_quantity, ConversionError};
use hvac_engineering_toolbox::quantity::QuantityKind;
use hvac_engineering_toolbox::units::mass::kg_to_lb_oz;
use hvac_engineering_toolbox::units::{PressureMode, PressureSpec, PressureUnit};

#[test]
fn temperature_and_difference() {
    let f = convert(QuantityKind::Temperature, 45.0, "C", "°F").unwrap();
    assert_relative_eq!(f, 113.0, epsilon = 1e-9);
    let k = convert(QuantityKind::Temperature, 0.0, "C", "K").unwrap();
    assert_relative_eq!(k, 273.15, epsilon = 1e-9);
    // 온도차는 오프셋 없이 환산
    assert_relative_eq!(
        convert(QuantityKind::TemperatureDifference, 10.0, "K", "F").unwrap(),
        18.0,
        epsilon = 1e-12
    );
}

#[test]
fn gauge_and_absolute_pressure() {
    let kpa_abs = convert(QuantityKind::Pressure, 0.0, "psig", "kPa").unwrap();
    assert_relative_eq!(kpa_abs, 101.325, epsilon = 1e-9);
    let psig = convert(QuantityKind::Pressure, 1.0, "bar", "psig").unwrap();
    assert_relative_eq!(psig, (100_000.0 - 101_325.0) / 6_894.757, epsilon = 1e-6);
    let micron = convert(QuantityKind::Pressure, 500.0, "micron", "Pa").unwrap();
    assert_relative_eq!(micron, 66.661, epsilon = 1e-3);
}

#[test]
fn pressure_spec_labels_round_trip() {
    for label in ["psig", "psia", "kPa(g)", "kPa(a)", "bar(g)", "micron"] {
        let spec: PressureSpec = label.parse().unwrap();
        assert_eq!(spec.label(), label);
    }
    assert_eq!(
        "kPa".parse::<PressureSpec>().unwrap(),
        PressureSpec::new(PressureUnit::KiloPascal, PressureMode::Absolute)
    );
}

#[test]
fn non_physical_values_are_rejected() {
    assert!(matches!(
        convert(QuantityKind::Temperature, -300.0, "C", "K"),
        Err(ConversionError::NonPhysical(_))
    ));
    assert!(matches!(
        convert(QuantityKind::Pressure, -20.0, "psig", "psia"),
        Err(ConversionError::NonPhysical(_))
    ));
    assert!(matches!(
        convert(QuantityKind::Length, 1.0, "furlong", "m"),
        Err(ConversionError::UnknownUnit(_))
    ));
}

#[test]
fn area_length_mass() {
    let ft2 = convert(QuantityKind::Area, 20.0, "m2", "ft2").unwrap();
    assert_relative_eq!(ft2, 215.28, epsilon = 0.01);
    let ft = convert(QuantityKind::Length, 1.8, "m", "ft").unwrap();
    assert_relative_eq!(ft, 5.9055, epsilon = 1e-4);
    let lb = convert(QuantityKind::Mass, 1.0, "kg", "lb").unwrap();
    assert_relative_eq!(lb, 2.20462, epsilon = 1e-5);
    let (lb, oz) = kg_to_lb_oz(2.0);
    assert_eq!(lb, 4);
    assert_relative_eq!(oz, 6.548, epsilon = 1e-3);
}

#[test]
fn quantity_keywords_and_menu_index() {
    assert_eq!(parse_quantity("Pressure"), Some(QuantityKind::Pressure));
    assert_eq!(parse_quantity("charge"), Some(QuantityKind::Mass));
    assert_eq!(parse_quantity("volume"), None);
    assert_eq!(QuantityKind::from_menu_index(1), Some(QuantityKind::Temperature));
    assert_eq!(QuantityKind::from_menu_index(6), Some(QuantityKind::Mass));
    assert_eq!(QuantityKind::from_menu_index(0), None);
    assert_eq!(QuantityKind::from_menu_index(7), None);
}
