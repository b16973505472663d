//! Antoine 형식 곡선맞춤을 이용한 포화압력 추정.
//!
//! 곡선맞춤은 국소적으로만 유효하다. 입력 온도의 범위를 검사하지 않으므로
//! 임계 온도 이상 등 유효 범위 밖의 입력에도 오류 없이 값이 반환된다.
//! 결과 해석은 호출자의 몫이다.

use super::constants::lookup;
use crate::units::temperature::KELVIN_OFFSET;

const PA_PER_BAR: f64 = 100_000.0;

/// 포화압력(Pa, 절대)을 추정한다. 입력 온도는 °C.
///
/// 알 수 없는 냉매는 기본 냉매(R134a) 계수로 계산한다.
pub fn saturation_pressure(refrigerant_id: &str, temp_c: f64) -> f64 {
    let r = lookup(refrigerant_id);
    let temp_k = temp_c + KELVIN_OFFSET;
    let log_p_bar = r.antoine_a - r.antoine_b / (temp_k + r.antoine_c);
    10_f64.powf(log_p_bar) * PA_PER_BAR
}

/// 포화온도(°C)를 추정한다. 입력 압력은 Pa(절대).
///
/// `saturation_pressure`의 역함수. 0 이하의 압력은 NaN을 반환한다.
pub fn saturation_temperature_c(refrigerant_id: &str, pressure_pa: f64) -> f64 {
    if pressure_pa <= 0.0 {
        return f64::NAN;
    }
    let r = lookup(refrigerant_id);
    let log_p_bar = (pressure_pa / PA_PER_BAR).log10();
    r.antoine_b / (r.antoine_a - log_p_bar) - r.antoine_c - KELVIN_OFFSET
}
