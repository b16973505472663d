/// 포화압력 추정에 쓰는 냉매별 상수.
///
/// Antoine 계수는 `log10(P[bar]) = A - B / (T[K] + C)` 형식이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefrigerantConstants {
    pub id: &'static str,
    pub name: &'static str,
    /// 임계 온도(K)
    pub critical_temperature_k: f64,
    /// 임계 압력(Pa)
    pub critical_pressure_pa: f64,
    pub antoine_a: f64,
    pub antoine_b: f64,
    pub antoine_c: f64,
}

/// 알 수 없는 식별자에 대해 사용하는 기본 냉매.
pub const DEFAULT_REFRIGERANT: &str = "R134a";

// 계수는 근사값이다. 임계점 부근에서는 맞지 않는다.
static REFRIGERANTS: [RefrigerantConstants; 3] = [
    RefrigerantConstants {
        id: "R134a",
        name: "R134a",
        critical_temperature_k: 374.2,
        critical_pressure_pa: 4_059_000.0,
        antoine_a: 4.06406,
        antoine_b: 1013.60,
        antoine_c: -46.6,
    },
    RefrigerantConstants {
        id: "R410A",
        name: "R410A",
        critical_temperature_k: 344.5,
        critical_pressure_pa: 4_901_000.0,
        antoine_a: 4.2596,
        antoine_b: 1125.5,
        antoine_c: -35.2,
    },
    // 표준 운전 범위에서만 유효
    RefrigerantConstants {
        id: "R744",
        name: "CO2",
        critical_temperature_k: 304.1,
        critical_pressure_pa: 7_377_000.0,
        antoine_a: 6.518,
        antoine_b: 1636.5,
        antoine_c: -5.3,
    },
];

/// 지원하는 냉매 상수 전체.
pub fn all() -> &'static [RefrigerantConstants] {
    &REFRIGERANTS
}

/// 식별자가 정확히 일치하는 냉매 상수를 찾는다. 없으면 `None`.
pub fn try_lookup(refrigerant_id: &str) -> Option<&'static RefrigerantConstants> {
    REFRIGERANTS.iter().find(|r| r.id == refrigerant_id)
}

/// 냉매 상수를 찾는다. 알 수 없는 식별자는 오류 없이 기본 냉매(R134a)로 대체한다.
pub fn lookup(refrigerant_id: &str) -> &'static RefrigerantConstants {
    match try_lookup(refrigerant_id) {
        Some(r) => r,
        None => {
            tracing::warn!(
                refrigerant = refrigerant_id,
                fallback = DEFAULT_REFRIGERANT,
                "unknown refrigerant, falling back to default constants"
            );
            &REFRIGERANTS[0]
        }
    }
}

/// 식별자가 상수 테이블에 있는지 확인한다.
pub fn is_known(refrigerant_id: &str) -> bool {
    try_lookup(refrigerant_id).is_some()
}
