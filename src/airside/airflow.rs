/// 표준 공기 상수 (밀도 × 비열 × 60), Btu/h·CFM·°F.
pub const STANDARD_AIR_FACTOR: f64 = 1.08;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AirsideError {
    #[error("{field} 값이 유한하지 않습니다: {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("온도차가 0이면 풍량을 계산할 수 없습니다.")]
    ZeroDeltaT,
}

/// 현열 부하와 온도차로부터 풍량(CFM)을 구한다. `CFM = Q / (1.08 × ΔT)`
pub fn airflow_cfm(sensible_heat_btuh: f64, delta_t_f: f64) -> Result<f64, AirsideError> {
    for (field, value) in [
        ("sensible_heat_btuh", sensible_heat_btuh),
        ("delta_t_f", delta_t_f),
    ] {
        if !value.is_finite() {
            return Err(AirsideError::NonFinite { field, value });
        }
    }
    if delta_t_f == 0.0 {
        return Err(AirsideError::ZeroDeltaT);
    }
    Ok(sensible_heat_btuh / (STANDARD_AIR_FACTOR * delta_t_f))
}
