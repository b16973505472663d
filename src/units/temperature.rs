use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize, UnitParseError};

/// 절대 영도와 섭씨 0도의 차이(K).
pub const KELVIN_OFFSET: f64 = 273.15;

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
    Rankine,
}

/// 온도차 단위. 과열도·과냉도·급기/환기 온도차에 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    /// K 및 °C 차이 (1:1)
    Kelvin,
    /// °F 및 °R 차이 (1.8:1)
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

impl TemperatureDiffUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureDiffUnit::Kelvin => "K",
            TemperatureDiffUnit::Fahrenheit => "°F",
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "c" | "degc" | "celsius" => Ok(TemperatureUnit::Celsius),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            "f" | "degf" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "r" | "rankine" => Ok(TemperatureUnit::Rankine),
            _ => Err(UnitParseError::new("온도", s)),
        }
    }
}

impl FromStr for TemperatureDiffUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "k" | "c" | "dk" | "dc" | "kelvin" | "celsius" => Ok(TemperatureDiffUnit::Kelvin),
            "f" | "r" | "df" | "dr" | "fahrenheit" | "rankine" => {
                Ok(TemperatureDiffUnit::Fahrenheit)
            }
            _ => Err(UnitParseError::new("온도차", s)),
        }
    }
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value + KELVIN_OFFSET,
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_k - KELVIN_OFFSET,
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Fahrenheit => (value_k - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 1.8 + 32.0
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) / 1.8
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_kelvin(to_kelvin(value, from), to)
}

/// 온도차를 변환한다. 기준점 없이 배율만 적용한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    match (from, to) {
        (TemperatureDiffUnit::Kelvin, TemperatureDiffUnit::Fahrenheit) => value * 1.8,
        (TemperatureDiffUnit::Fahrenheit, TemperatureDiffUnit::Kelvin) => value / 1.8,
        _ => value,
    }
}
