//! 같은 운전 조건에서 여러 냉매의 성능을 비교한다.

use serde::Serialize;

use super::simple::{calculate_cycle, CycleInputs, CycleModel, CycleResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonEntry {
    pub refrigerant_id: String,
    pub cycle: CycleResult,
    /// 기준 부하에서의 압축기 동력(kW)
    pub compressor_work_kw: f64,
    /// 기준 부하에서의 방열량(kW)
    pub heat_rejection_kw: f64,
}

/// 비교 조건. 냉매만 바꿔 가며 같은 온도 조건을 적용한다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonConditions {
    pub evaporator_temp_c: f64,
    pub condenser_temp_c: f64,
    pub superheat_k: f64,
    pub subcooling_k: f64,
    pub load_kw: f64,
}

/// 입력 순서를 유지한 채 냉매별 결과를 반환한다.
pub fn compare_refrigerants<S: AsRef<str>>(
    refrigerant_ids: &[S],
    conditions: &ComparisonConditions,
    model: &CycleModel,
) -> Vec<ComparisonEntry> {
    refrigerant_ids
        .iter()
        .map(|id| {
            let inputs = CycleInputs::new(
                id.as_ref(),
                conditions.evaporator_temp_c,
                conditions.condenser_temp_c,
                conditions.superheat_k,
                conditions.subcooling_k,
            );
            let cycle = calculate_cycle(&inputs, model);
            let compressor_work_kw = conditions.load_kw / cycle.cop_cooling;
            ComparisonEntry {
                refrigerant_id: inputs.refrigerant_id,
                cycle,
                compressor_work_kw,
                heat_rejection_kw: conditions.load_kw + compressor_work_kw,
            }
        })
        .collect()
}

/// 유한한 냉방 COP가 가장 높은 항목. 모두 유효하지 않으면 `None`.
///
/// COP는 온도 조건만으로 정해지므로 같은 조건에서는 동률이 흔하다.
/// 동률이면 토출온도가 낮은 쪽을 고른다.
pub fn best_by_cop(entries: &[ComparisonEntry]) -> Option<&ComparisonEntry> {
    entries
        .iter()
        .filter(|e| e.cycle.cop_cooling.is_finite() && e.cycle.cop_cooling > 0.0)
        .max_by(|a, b| {
            a.cycle
                .cop_cooling
                .total_cmp(&b.cycle.cop_cooling)
                .then(b.cycle.discharge_temp_c.total_cmp(&a.cycle.discharge_temp_c))
        })
}
