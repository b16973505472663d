use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize, UnitParseError};

const M2_PER_FT2: f64 = 0.092_903;

/// 면적 단위. 내부 기준은 제곱미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareFoot,
}

impl AreaUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m²",
            AreaUnit::SquareFoot => "ft²",
        }
    }
}

impl FromStr for AreaUnit {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "m2" | "m" | "sqm" => Ok(AreaUnit::SquareMeter),
            "ft2" | "ft" | "sqft" => Ok(AreaUnit::SquareFoot),
            _ => Err(UnitParseError::new("면적", s)),
        }
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    match (from, to) {
        (AreaUnit::SquareFoot, AreaUnit::SquareMeter) => value * M2_PER_FT2,
        (AreaUnit::SquareMeter, AreaUnit::SquareFoot) => value / M2_PER_FT2,
        _ => value,
    }
}
