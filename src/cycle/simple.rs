//! 단순 증기압축 사이클의 압력·COP·토출온도 추정.
//!
//! 카르노 COP에 고정 효율계수를 곱하고, 토출온도는 폴리트로픽 압축으로 근사한다.
//! 냉매별 물성을 쓰지 않는 간이 모델이다.

use serde::{Deserialize, Serialize};

use crate::refrigerant::{constants, saturation_pressure};
use crate::units::temperature::KELVIN_OFFSET;

/// 사이클 계산 입력.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleInputs {
    pub refrigerant_id: String,
    /// 증발 온도(°C)
    pub evaporator_temp_c: f64,
    /// 응축 온도(°C)
    pub condenser_temp_c: f64,
    /// 과열도(K)
    pub superheat_k: f64,
    /// 과냉도(K)
    pub subcooling_k: f64,
}

impl CycleInputs {
    pub fn new(
        refrigerant_id: impl Into<String>,
        evaporator_temp_c: f64,
        condenser_temp_c: f64,
        superheat_k: f64,
        subcooling_k: f64,
    ) -> Self {
        Self {
            refrigerant_id: refrigerant_id.into(),
            evaporator_temp_c,
            condenser_temp_c,
            superheat_k,
            subcooling_k,
        }
    }
}

/// 간이 모델의 조정 가능한 계수.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleModel {
    /// 실제 사이클이 달성하는 카르노 COP의 비율. 물성에서 유도한 값이 아닌 설계 파라미터다.
    pub efficiency_factor: f64,
    /// 토출온도 근사에 쓰는 폴리트로픽 지수 k. 냉매 증기 일반값.
    pub polytropic_exponent: f64,
}

impl Default for CycleModel {
    fn default() -> Self {
        Self {
            efficiency_factor: 0.60,
            polytropic_exponent: 1.15,
        }
    }
}

/// 사이클 계산 결과. 압력은 Pa(절대), 온도는 °C.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleResult {
    pub evaporator_pressure_pa: f64,
    pub condenser_pressure_pa: f64,
    pub pressure_ratio: f64,
    pub cop_cooling: f64,
    pub cop_heating: f64,
    pub discharge_temp_c: f64,
    pub suction_temp_c: f64,
    pub liquid_temp_c: f64,
}

impl CycleResult {
    /// 두 COP가 모두 유한한 양수인지. 아니면 유효한 사이클이 아니다
    /// (응축 온도 ≤ 증발 온도 등).
    pub fn is_valid_cycle(&self) -> bool {
        [self.cop_cooling, self.cop_heating]
            .iter()
            .all(|c| c.is_finite() && *c > 0.0)
    }
}

/// 엄격 모드에서 입력·결과를 거부한 사유.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CycleError {
    #[error("알 수 없는 냉매: {0}")]
    UnknownRefrigerant(String),
    #[error("{field} 값이 유한하지 않습니다: {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} 온도 {value_c}°C 는 절대 영도 이하입니다.")]
    BelowAbsoluteZero { field: &'static str, value_c: f64 },
    #[error("응축 온도({condenser_c}°C)는 증발 온도({evaporator_c}°C)보다 높아야 합니다.")]
    NonPositiveLift { evaporator_c: f64, condenser_c: f64 },
    #[error("{field} 는 음수일 수 없습니다: {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("모델 계수가 범위를 벗어남: {0}")]
    InvalidModel(&'static str),
    #[error("계산 결과 {field} 가 유효하지 않습니다: {value}")]
    InvalidResult { field: &'static str, value: f64 },
}

/// 기본 모델로 단순 사이클을 계산한다.
///
/// 오류를 내지 않는다. 응축 온도 ≤ 증발 온도 같은 퇴화 입력은 결과에
/// ∞/NaN/음수로 그대로 나타나므로 호출자가 `CycleResult::is_valid_cycle`로 확인해야 한다.
pub fn calculate_simple_cycle(
    refrigerant_id: &str,
    evaporator_temp_c: f64,
    condenser_temp_c: f64,
    superheat_k: f64,
    subcooling_k: f64,
) -> CycleResult {
    let inputs = CycleInputs::new(
        refrigerant_id,
        evaporator_temp_c,
        condenser_temp_c,
        superheat_k,
        subcooling_k,
    );
    calculate_cycle(&inputs, &CycleModel::default())
}

/// 주어진 모델 계수로 단순 사이클을 계산한다. 입력 검증은 하지 않는다.
pub fn calculate_cycle(inputs: &CycleInputs, model: &CycleModel) -> CycleResult {
    let evap_k = inputs.evaporator_temp_c + KELVIN_OFFSET;
    let cond_k = inputs.condenser_temp_c + KELVIN_OFFSET;

    let evap_p = saturation_pressure(&inputs.refrigerant_id, inputs.evaporator_temp_c);
    let cond_p = saturation_pressure(&inputs.refrigerant_id, inputs.condenser_temp_c);
    let pressure_ratio = cond_p / evap_p;

    // cond_k == evap_k 이면 ∞, cond_k < evap_k 이면 음수
    let lift_k = cond_k - evap_k;
    let carnot_cooling = evap_k / lift_k;
    let carnot_heating = cond_k / lift_k;

    let k = model.polytropic_exponent;
    let suction_k = evap_k + inputs.superheat_k;
    let discharge_k = suction_k * pressure_ratio.powf((k - 1.0) / k);

    CycleResult {
        evaporator_pressure_pa: evap_p,
        condenser_pressure_pa: cond_p,
        pressure_ratio,
        cop_cooling: carnot_cooling * model.efficiency_factor,
        cop_heating: carnot_heating * model.efficiency_factor,
        discharge_temp_c: discharge_k - KELVIN_OFFSET,
        suction_temp_c: suction_k - KELVIN_OFFSET,
        liquid_temp_c: inputs.condenser_temp_c - inputs.subcooling_k,
    }
}

/// 입력과 결과를 검증하는 엄격 모드 계산. 공식은 `calculate_cycle`과 같다.
pub fn calculate_cycle_checked(
    inputs: &CycleInputs,
    model: &CycleModel,
) -> Result<CycleResult, CycleError> {
    validate_model(model)?;
    if !constants::is_known(&inputs.refrigerant_id) {
        return Err(CycleError::UnknownRefrigerant(inputs.refrigerant_id.clone()));
    }
    let fields = [
        ("evaporator_temp_c", inputs.evaporator_temp_c),
        ("condenser_temp_c", inputs.condenser_temp_c),
        ("superheat_k", inputs.superheat_k),
        ("subcooling_k", inputs.subcooling_k),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CycleError::NonFinite { field, value });
        }
    }
    for (field, value_c) in [
        ("evaporator", inputs.evaporator_temp_c),
        ("condenser", inputs.condenser_temp_c),
    ] {
        if value_c + KELVIN_OFFSET <= 0.0 {
            return Err(CycleError::BelowAbsoluteZero { field, value_c });
        }
    }
    if inputs.condenser_temp_c <= inputs.evaporator_temp_c {
        return Err(CycleError::NonPositiveLift {
            evaporator_c: inputs.evaporator_temp_c,
            condenser_c: inputs.condenser_temp_c,
        });
    }
    for (field, value) in [
        ("superheat_k", inputs.superheat_k),
        ("subcooling_k", inputs.subcooling_k),
    ] {
        if value < 0.0 {
            return Err(CycleError::Negative { field, value });
        }
    }

    let result = calculate_cycle(inputs, model);

    let positive = [
        ("evaporator_pressure_pa", result.evaporator_pressure_pa),
        ("condenser_pressure_pa", result.condenser_pressure_pa),
        ("pressure_ratio", result.pressure_ratio),
        ("cop_cooling", result.cop_cooling),
        ("cop_heating", result.cop_heating),
    ];
    for (field, value) in positive {
        if !value.is_finite() || value <= 0.0 {
            return Err(CycleError::InvalidResult { field, value });
        }
    }
    if !result.discharge_temp_c.is_finite() {
        return Err(CycleError::InvalidResult {
            field: "discharge_temp_c",
            value: result.discharge_temp_c,
        });
    }
    tracing::debug!(
        refrigerant = %inputs.refrigerant_id,
        cop = result.cop_cooling,
        ratio = result.pressure_ratio,
        "cycle calculated (strict)"
    );
    Ok(result)
}

/// 효율계수는 (0, 1], 폴리트로픽 지수는 1보다 커야 한다.
pub fn validate_model(model: &CycleModel) -> Result<(), CycleError> {
    let eta = model.efficiency_factor;
    if !eta.is_finite() || eta <= 0.0 || eta > 1.0 {
        return Err(CycleError::InvalidModel("efficiency_factor 는 0 초과 1 이하"));
    }
    let k = model.polytropic_exponent;
    if !k.is_finite() || k <= 1.0 {
        return Err(CycleError::InvalidModel("polytropic_exponent 는 1 초과"));
    }
    Ok(())
}
