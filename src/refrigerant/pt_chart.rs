//! 현장용 PT 차트. 게이지 압력(psig, kPa g)과 포화온도(°F)를 상호 환산한다.
//!
//! 계수는 냉매마다 기준이 다르다(`ln`/`log10`, kPa/bar, K/°C).
//! 식: `log(P) = A - B / (T + C)`, P는 절대압.

use serde::Serialize;

use crate::units::temperature::{celsius_to_fahrenheit, fahrenheit_to_celsius, KELVIN_OFFSET};

const ATM_PSI: f64 = 14.696;
const ATM_KPA: f64 = 101.325;
const PSI_PER_KPA: f64 = 0.145_038;
const KPA_PER_PSI: f64 = 6.894_76;
const BAR_PER_PSI: f64 = 0.068_947_6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogBase {
    Natural,
    Ten,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoefPressure {
    KiloPascal,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoefTemperature {
    Kelvin,
    Celsius,
}

#[derive(Debug, Clone, Copy)]
struct PtCoefficients {
    id: &'static str,
    base: LogBase,
    a: f64,
    b: f64,
    c: f64,
    pressure: CoefPressure,
    temperature: CoefTemperature,
}

static PT_TABLE: [PtCoefficients; 5] = [
    // Stull (1947), 232~358 K
    PtCoefficients {
        id: "R22",
        base: LogBase::Ten,
        a: 4.36567,
        b: 947.577,
        c: -14.964,
        pressure: CoefPressure::Bar,
        temperature: CoefTemperature::Kelvin,
    },
    PtCoefficients {
        id: "R134a",
        base: LogBase::Natural,
        a: 14.41,
        b: 2094.0,
        c: -33.06,
        pressure: CoefPressure::KiloPascal,
        temperature: CoefTemperature::Kelvin,
    },
    PtCoefficients {
        id: "R290",
        base: LogBase::Natural,
        a: 13.71,
        b: 1873.0,
        c: -25.10,
        pressure: CoefPressure::KiloPascal,
        temperature: CoefTemperature::Kelvin,
    },
    // 이슬점 기준
    PtCoefficients {
        id: "R410A",
        base: LogBase::Natural,
        a: 14.97,
        b: 2118.0,
        c: -17.27,
        pressure: CoefPressure::KiloPascal,
        temperature: CoefTemperature::Kelvin,
    },
    // 0~50°C 구간에서 검증
    PtCoefficients {
        id: "R32",
        base: LogBase::Natural,
        a: 10.271,
        b: 2059.6,
        c: 252.1,
        pressure: CoefPressure::Bar,
        temperature: CoefTemperature::Celsius,
    },
];

/// 게이지 압력 입력 단위.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GaugeUnit {
    #[default]
    Psig,
    KpaGauge,
}

fn coefficients(refrigerant_id: &str) -> Option<&'static PtCoefficients> {
    PT_TABLE.iter().find(|c| c.id == refrigerant_id)
}

/// PT 차트 계수가 있는 냉매인지 확인한다.
pub fn is_supported(refrigerant_id: &str) -> bool {
    coefficients(refrigerant_id).is_some()
}

pub fn supported_refrigerants() -> impl Iterator<Item = &'static str> {
    PT_TABLE.iter().map(|c| c.id)
}

/// 게이지 압력으로부터 포화온도(°F)를 구한다.
///
/// 계수가 없는 냉매이거나 절대압이 0 이하이면 `None`.
pub fn saturation_temperature_f(
    refrigerant_id: &str,
    gauge_pressure: f64,
    unit: GaugeUnit,
) -> Option<f64> {
    let coef = coefficients(refrigerant_id)?;
    let psia = match unit {
        GaugeUnit::Psig => gauge_pressure + ATM_PSI,
        GaugeUnit::KpaGauge => (gauge_pressure + ATM_KPA) * PSI_PER_KPA,
    };
    if psia <= 0.0 {
        return None;
    }
    let p = match coef.pressure {
        CoefPressure::KiloPascal => psia * KPA_PER_PSI,
        CoefPressure::Bar => psia * BAR_PER_PSI,
    };
    let log_p = match coef.base {
        LogBase::Natural => p.ln(),
        LogBase::Ten => p.log10(),
    };
    let t = coef.b / (coef.a - log_p) - coef.c;
    let t_c = match coef.temperature {
        CoefTemperature::Kelvin => t - KELVIN_OFFSET,
        CoefTemperature::Celsius => t,
    };
    Some(celsius_to_fahrenheit(t_c))
}

/// 포화온도(°F)에서의 게이지 압력(psig). 진공 영역에서는 음수가 된다.
pub fn saturation_pressure_psig(refrigerant_id: &str, temp_f: f64) -> Option<f64> {
    let coef = coefficients(refrigerant_id)?;
    let t_c = fahrenheit_to_celsius(temp_f);
    let t = match coef.temperature {
        CoefTemperature::Kelvin => t_c + KELVIN_OFFSET,
        CoefTemperature::Celsius => t_c,
    };
    let log_p = coef.a - coef.b / (t + coef.c);
    let p = match coef.base {
        LogBase::Natural => log_p.exp(),
        LogBase::Ten => 10_f64.powf(log_p),
    };
    let psia = match coef.pressure {
        CoefPressure::KiloPascal => p / KPA_PER_PSI,
        CoefPressure::Bar => p / BAR_PER_PSI,
    };
    Some(psia - ATM_PSI)
}

/// PT 차트 한 줄.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PtRow {
    pub temp_f: f64,
    pub pressure_psig: f64,
}

/// PT 차트 한 장의 최대 행 수.
pub const MAX_PT_ROWS: usize = 10_000;

/// `from_f`부터 `to_f`까지 `step_f` 간격의 PT 차트를 만든다.
///
/// 지원하지 않는 냉매, 유한하지 않은 범위, 0 이하 간격, 또는 `MAX_PT_ROWS`를
/// 넘는 범위면 빈 목록을 반환한다.
pub fn pt_table(refrigerant_id: &str, from_f: f64, to_f: f64, step_f: f64) -> Vec<PtRow> {
    if !is_supported(refrigerant_id)
        || !from_f.is_finite()
        || !to_f.is_finite()
        || !step_f.is_finite()
        || step_f <= 0.0
        || to_f < from_f
    {
        return Vec::new();
    }
    let span = ((to_f - from_f) / step_f).floor();
    if !(span < MAX_PT_ROWS as f64) {
        tracing::warn!(from_f, to_f, step_f, max = MAX_PT_ROWS, "PT chart range too large");
        return Vec::new();
    }
    let steps = span as usize;
    (0..=steps)
        .filter_map(|i| {
            let temp_f = from_f + i as f64 * step_f;
            saturation_pressure_psig(refrigerant_id, temp_f).map(|pressure_psig| PtRow {
                temp_f,
                pressure_psig,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_inverse_agree() {
        for id in supported_refrigerants() {
            let psig = saturation_pressure_psig(id, 40.0).unwrap();
            let back = saturation_temperature_f(id, psig, GaugeUnit::Psig).unwrap();
            assert!((back - 40.0).abs() < 1e-6, "{id}: {back}");
        }
    }

    #[test]
    fn kpa_gauge_matches_psig() {
        let from_psig = saturation_temperature_f("R410A", 118.0, GaugeUnit::Psig).unwrap();
        let kpa_g = (118.0 + ATM_PSI) * KPA_PER_PSI - ATM_KPA;
        let from_kpa = saturation_temperature_f("R410A", kpa_g, GaugeUnit::KpaGauge).unwrap();
        assert!((from_psig - from_kpa).abs() < 0.05);
    }
}
