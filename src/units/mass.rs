use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize, UnitParseError};

/// 질량 단위. 냉매 충전량 표기(kg, lb-oz)에 맞춘다. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    Ounce,
}

impl MassUnit {
    fn kg_per_unit(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Pound => 0.453_592_37,
            MassUnit::Ounce => 0.028_349_523,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
        }
    }
}

impl FromStr for MassUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "kg" => Ok(MassUnit::Kilogram),
            "g" => Ok(MassUnit::Gram),
            "lb" | "lbs" => Ok(MassUnit::Pound),
            "oz" => Ok(MassUnit::Ounce),
            _ => Err(UnitParseError::new("질량", s)),
        }
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    value * from.kg_per_unit() / to.kg_per_unit()
}

/// kg 값을 현장 표기(lb, oz)로 나눈다. 예: 2.0 kg → (4, 6.5)
pub fn kg_to_lb_oz(kg: f64) -> (u32, f64) {
    let total_oz = convert_mass(kg, MassUnit::Kilogram, MassUnit::Ounce);
    let lb = (total_oz / 16.0).floor().max(0.0);
    (lb as u32, total_oz - lb * 16.0)
}
