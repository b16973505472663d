//! 문자열 단위 표기를 받아 환산하는 변환기. CLI 단위 변환 메뉴에서 사용한다.

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    UnknownUnit(#[from] UnitParseError),
    /// 절대 영도 미만 등 물리적으로 불가능한 값
    #[error("물리적으로 불가능한 값: {0}")]
    NonPhysical(String),
    #[error("알 수 없는 물리량: {0}")]
    UnknownQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시: `C`, `F`, `psig`, `kPa(a)`, `micron`, `ft2`, `lb`.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from: TemperatureUnit = from_unit_str.parse()?;
            let to: TemperatureUnit = to_unit_str.parse()?;
            if temperature::to_kelvin(value, from) < 0.0 {
                return Err(ConversionError::NonPhysical(format!(
                    "{value} {} 는 절대 영도보다 낮습니다.",
                    from.symbol()
                )));
            }
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from: TemperatureDiffUnit = from_unit_str.parse()?;
            let to: TemperatureDiffUnit = to_unit_str.parse()?;
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Pressure => {
            let from: PressureSpec = from_unit_str.parse()?;
            let to: PressureSpec = to_unit_str.parse()?;
            if pressure::to_pascal_abs(value, from) < 0.0 {
                return Err(ConversionError::NonPhysical(format!(
                    "{value} {} 는 완전 진공보다 낮습니다.",
                    from.label()
                )));
            }
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Length => {
            let from: LengthUnit = from_unit_str.parse()?;
            let to: LengthUnit = to_unit_str.parse()?;
            Ok(convert_length(value, from, to))
        }
        QuantityKind::Area => {
            let from: AreaUnit = from_unit_str.parse()?;
            let to: AreaUnit = to_unit_str.parse()?;
            Ok(convert_area(value, from, to))
        }
        QuantityKind::Mass => {
            let from: MassUnit = from_unit_str.parse()?;
            let to: MassUnit = to_unit_str.parse()?;
            Ok(convert_mass(value, from, to))
        }
    }
}

/// 물리량 종류를 키워드(`temp`, `dt`, `pressure` 등)로 찾는다.
pub fn parse_quantity(s: &str) -> Option<QuantityKind> {
    match s.trim().to_lowercase().as_str() {
        "t" | "temp" | "temperature" => Some(QuantityKind::Temperature),
        "dt" | "delta-t" | "temperature-difference" => Some(QuantityKind::TemperatureDifference),
        "p" | "pressure" => Some(QuantityKind::Pressure),
        "l" | "length" | "height" => Some(QuantityKind::Length),
        "a" | "area" => Some(QuantityKind::Area),
        "m" | "mass" | "charge" => Some(QuantityKind::Mass),
        _ => None,
    }
}
