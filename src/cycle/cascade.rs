//! 2원 캐스케이드 사이클 열수지.
//!
//! 저온(LT) 사이클의 응축열이 고온(HT) 사이클의 증발 부하가 된다.

use serde::Serialize;

use super::simple::{calculate_cycle, CycleInputs, CycleModel, CycleResult};

/// 한 단(stage)의 열수지. 단위는 kW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageBalance {
    pub cycle: CycleResult,
    pub capacity_kw: f64,
    pub work_kw: f64,
    pub heat_rejection_kw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CascadeResult {
    pub low_temp: StageBalance,
    pub high_temp: StageBalance,
    /// 시스템 냉동능력(= LT 증발 부하, kW)
    pub cooling_capacity_kw: f64,
    pub total_work_kw: f64,
    /// 최종 방열량(= HT 응축 열량, kW)
    pub heat_rejection_kw: f64,
    pub system_cop: f64,
}

/// 캐스케이드 계산의 기준 냉동부하(kW).
pub const DEFAULT_BASE_LOAD_KW: f64 = 10.0;

/// LT/HT 사이클을 각각 계산하고 기준 부하로 열수지를 맞춘다.
///
/// 단일 사이클과 마찬가지로 검증하지 않으며, 퇴화 입력은 ∞/NaN으로 전파된다.
pub fn calculate_cascade(
    low_temp: &CycleInputs,
    high_temp: &CycleInputs,
    model: &CycleModel,
    base_load_kw: f64,
) -> CascadeResult {
    let lt = calculate_cycle(low_temp, model);
    let ht = calculate_cycle(high_temp, model);

    let w_lt = base_load_kw / lt.cop_cooling;
    let q_cond_lt = base_load_kw + w_lt;

    let q_evap_ht = q_cond_lt;
    let w_ht = q_evap_ht / ht.cop_cooling;
    let q_cond_ht = q_evap_ht + w_ht;

    let total_work_kw = w_lt + w_ht;
    tracing::debug!(
        lt = %low_temp.refrigerant_id,
        ht = %high_temp.refrigerant_id,
        total_work_kw,
        "cascade balance"
    );

    CascadeResult {
        low_temp: StageBalance {
            cycle: lt,
            capacity_kw: base_load_kw,
            work_kw: w_lt,
            heat_rejection_kw: q_cond_lt,
        },
        high_temp: StageBalance {
            cycle: ht,
            capacity_kw: q_evap_ht,
            work_kw: w_ht,
            heat_rejection_kw: q_cond_ht,
        },
        cooling_capacity_kw: base_load_kw,
        total_work_kw,
        heat_rejection_kw: q_cond_ht,
        system_cop: base_load_kw / total_work_kw,
    }
}

/// LT 응축 온도와 HT 증발 온도의 중첩(K). 캐스케이드 열교환기 온도차이며 양수여야 한다.
pub fn cascade_overlap_k(low_temp: &CycleInputs, high_temp: &CycleInputs) -> f64 {
    low_temp.condenser_temp_c - high_temp.evaporator_temp_c
}
