//! 현장·설계 계산에 쓰는 단위 정의 및 변환 모듈 모음.
//!
//! 각 단위 enum은 `FromStr`로 현장 표기(`psig`, `°F`, `ft2` 등)를 파싱할 수 있다.

pub mod area;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;

pub use area::{convert_area, AreaUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureMode, PressureSpec, PressureUnit, ATM_PA};
pub use temperature::{
    convert_temperature, convert_temperature_diff, TemperatureDiffUnit, TemperatureUnit,
};

/// 단위 문자열을 해석하지 못했을 때의 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("알 수 없는 {kind} 단위: {input}")]
pub struct UnitParseError {
    pub kind: &'static str,
    pub input: String,
}

impl UnitParseError {
    pub(crate) fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

/// 비교용으로 단위 문자열을 정규화한다. 공백·도(°) 기호를 제거하고 소문자로 바꾼다.
pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '°' && *c != '²')
        .collect::<String>()
        .to_lowercase()
}
