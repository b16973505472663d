//! A2L(미연소성) 냉매의 실(room) 면적·설치 높이 기준 최대 충전량.
//!
//! `m_max = 2.5 × LFL^1.25 × h × √A`
//!
//! 잘못된 물리 입력에는 NaN 대신 0(허용 충전량 없음)을 돌려준다.
//! 안전 관련 출력이므로 0이 안전 측 기본값이다. 오류로 받고 싶으면 `*_checked` 함수를 쓴다.

use serde::{Deserialize, Serialize};

use crate::refrigerant::database;

const FORMULA_COEFFICIENT: f64 = 2.5;
const LFL_EXPONENT: f64 = 1.25;

/// 충전량 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct A2lChargeInputs {
    /// 연소하한 LFL (kg/m³)
    pub lfl_kg_per_m3: f64,
    /// 실내기 설치 높이 (m)
    pub install_height_m: f64,
    /// 실 바닥 면적 (m²)
    pub room_area_m2: f64,
}

/// 대표적인 실내기 설치 높이 (m).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InstallHeight {
    Floor,
    Window,
    Wall,
    Ceiling,
}

impl InstallHeight {
    pub const ALL: [InstallHeight; 4] = [
        InstallHeight::Floor,
        InstallHeight::Window,
        InstallHeight::Wall,
        InstallHeight::Ceiling,
    ];

    pub fn meters(self) -> f64 {
        match self {
            InstallHeight::Floor => 0.6,
            InstallHeight::Window => 1.0,
            InstallHeight::Wall => 1.8,
            InstallHeight::Ceiling => 2.2,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "floor" => Some(InstallHeight::Floor),
            "window" => Some(InstallHeight::Window),
            "wall" => Some(InstallHeight::Wall),
            "ceiling" => Some(InstallHeight::Ceiling),
            _ => None,
        }
    }
}

fn lfl_term(lfl_kg_per_m3: f64) -> f64 {
    lfl_kg_per_m3.powf(LFL_EXPONENT)
}

/// 최대 허용 충전량(kg).
///
/// `lfl <= 0`, `height <= 0`, `area < 0` 이면 0을 반환한다.
pub fn a2l_charge_limit(inputs: &A2lChargeInputs) -> f64 {
    let A2lChargeInputs {
        lfl_kg_per_m3: lfl,
        install_height_m: height,
        room_area_m2: area,
    } = *inputs;
    if lfl <= 0.0 || height <= 0.0 || area < 0.0 {
        return 0.0;
    }
    FORMULA_COEFFICIENT * lfl_term(lfl) * height * area.sqrt()
}

/// 주어진 충전량에 필요한 최소 실 면적(m²). `a2l_charge_limit`의 역함수.
///
/// `charge <= 0`, `lfl <= 0`, `height <= 0` 이거나 분모가 정확히 0이면 0을 반환한다.
pub fn min_area_for_a2l(charge_kg: f64, lfl_kg_per_m3: f64, install_height_m: f64) -> f64 {
    if charge_kg <= 0.0 || lfl_kg_per_m3 <= 0.0 || install_height_m <= 0.0 {
        return 0.0;
    }
    let denominator = FORMULA_COEFFICIENT * lfl_term(lfl_kg_per_m3) * install_height_m;
    if denominator == 0.0 {
        return 0.0;
    }
    (charge_kg / denominator).powi(2)
}

/// 검증 계층에서 0 대신 돌려주는 오류.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum A2lError {
    #[error("{field} 값이 유한하지 않습니다: {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("LFL은 0보다 커야 합니다: {0}")]
    NonPositiveLfl(f64),
    #[error("설치 높이는 0보다 커야 합니다: {0}")]
    NonPositiveHeight(f64),
    #[error("실 면적은 음수일 수 없습니다: {0}")]
    NegativeArea(f64),
    #[error("충전량은 0보다 커야 합니다: {0}")]
    NonPositiveCharge(f64),
    #[error("LFL 정보가 없는 냉매: {0}")]
    NoLfl(String),
    #[error("LFL·설치 높이 항이 0이 되어 면적을 계산할 수 없습니다.")]
    ZeroDenominator,
}

fn ensure_finite(field: &'static str, value: f64) -> Result<(), A2lError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(A2lError::NonFinite { field, value })
    }
}

/// `a2l_charge_limit`과 같은 공식이되, 0을 반환하는 경우를 오류로 구분한다.
pub fn a2l_charge_limit_checked(inputs: &A2lChargeInputs) -> Result<f64, A2lError> {
    ensure_finite("lfl_kg_per_m3", inputs.lfl_kg_per_m3)?;
    ensure_finite("install_height_m", inputs.install_height_m)?;
    ensure_finite("room_area_m2", inputs.room_area_m2)?;
    if inputs.lfl_kg_per_m3 <= 0.0 {
        return Err(A2lError::NonPositiveLfl(inputs.lfl_kg_per_m3));
    }
    if inputs.install_height_m <= 0.0 {
        return Err(A2lError::NonPositiveHeight(inputs.install_height_m));
    }
    if inputs.room_area_m2 < 0.0 {
        return Err(A2lError::NegativeArea(inputs.room_area_m2));
    }
    Ok(a2l_charge_limit(inputs))
}

/// `min_area_for_a2l`과 같은 공식이되, 0을 반환하는 경우를 오류로 구분한다.
pub fn min_area_for_a2l_checked(
    charge_kg: f64,
    lfl_kg_per_m3: f64,
    install_height_m: f64,
) -> Result<f64, A2lError> {
    ensure_finite("charge_kg", charge_kg)?;
    ensure_finite("lfl_kg_per_m3", lfl_kg_per_m3)?;
    ensure_finite("install_height_m", install_height_m)?;
    if charge_kg <= 0.0 {
        return Err(A2lError::NonPositiveCharge(charge_kg));
    }
    if lfl_kg_per_m3 <= 0.0 {
        return Err(A2lError::NonPositiveLfl(lfl_kg_per_m3));
    }
    if install_height_m <= 0.0 {
        return Err(A2lError::NonPositiveHeight(install_height_m));
    }
    if FORMULA_COEFFICIENT * lfl_term(lfl_kg_per_m3) * install_height_m == 0.0 {
        return Err(A2lError::ZeroDenominator);
    }
    Ok(min_area_for_a2l(charge_kg, lfl_kg_per_m3, install_height_m))
}

/// 냉매 카탈로그에서 LFL(kg/m³)을 가져온다.
pub fn lfl_for(refrigerant_id: &str) -> Result<f64, A2lError> {
    database::find(refrigerant_id)
        .and_then(|r| r.lfl_kg_per_m3)
        .ok_or_else(|| A2lError::NoLfl(refrigerant_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_area_gives_zero_charge_not_sentinel_error() {
        let inputs = A2lChargeInputs {
            lfl_kg_per_m3: 0.307,
            install_height_m: 1.8,
            room_area_m2: 0.0,
        };
        assert_eq!(a2l_charge_limit(&inputs), 0.0);
        assert_eq!(a2l_charge_limit_checked(&inputs), Ok(0.0));
    }

    #[test]
    fn underflowing_denominator_is_reported() {
        // LFL^1.25 가 0으로 언더플로되는 극단값
        assert_eq!(min_area_for_a2l(1.0, 1e-300, 1.0), 0.0);
        assert_eq!(
            min_area_for_a2l_checked(1.0, 1e-300, 1.0),
            Err(A2lError::ZeroDenominator)
        );
    }
}
