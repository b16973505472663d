use serde::Serialize;

/// 냉방 시 정상으로 보는 급기/환기 온도차 범위 (°F).
const LOW_LIMIT_F: f64 = 15.0;
const HIGH_LIMIT_F: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeltaTStatus {
    Normal,
    /// 풍량 과다 또는 냉매 부족 의심
    Low,
    /// 풍량 부족(필터·덕트 막힘) 의심
    High,
}

impl DeltaTStatus {
    pub fn description(self) -> &'static str {
        match self {
            DeltaTStatus::Normal => "Normal",
            DeltaTStatus::Low => "Low Delta T (Possible Airflow Issue or Low Charge)",
            DeltaTStatus::High => "High Delta T (Possible Airflow Restriction)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeltaTReading {
    pub return_temp_f: f64,
    pub supply_temp_f: f64,
    pub delta_t_f: f64,
    pub status: DeltaTStatus,
}

/// 환기·급기 온도로 증발기 코일 온도차를 진단한다.
pub fn diagnose_delta_t(return_temp_f: f64, supply_temp_f: f64) -> DeltaTReading {
    let delta_t_f = return_temp_f - supply_temp_f;
    let status = if delta_t_f < LOW_LIMIT_F {
        DeltaTStatus::Low
    } else if delta_t_f > HIGH_LIMIT_F {
        DeltaTStatus::High
    } else {
        DeltaTStatus::Normal
    };
    DeltaTReading {
        return_temp_f,
        supply_temp_f,
        delta_t_f,
        status,
    }
}
