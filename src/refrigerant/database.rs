//! 냉매 카탈로그. 안전등급, 환경지표, 운전 한계, 연소하한(LFL)을 담는다.
//! 값은 참고용이며 설계 시 최신 표준(ASHRAE 34, IEC 60335-2-40 등)으로 검증해야 한다.

use serde::Serialize;

use crate::units::temperature::KELVIN_OFFSET;

/// ASHRAE 34 안전등급.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SafetyClass {
    A1,
    A2,
    A2L,
    A3,
    B1,
    B2,
    B2L,
    B3,
}

impl SafetyClass {
    /// 가연성 등급(2, 2L, 3) 여부.
    pub fn is_flammable(self) -> bool {
        !matches!(self, SafetyClass::A1 | SafetyClass::B1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SafetyClass::A1 => "A1",
            SafetyClass::A2 => "A2",
            SafetyClass::A2L => "A2L",
            SafetyClass::A3 => "A3",
            SafetyClass::B1 => "B1",
            SafetyClass::B2 => "B2",
            SafetyClass::B2L => "B2L",
            SafetyClass::B3 => "B3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Hfc,
    Hfo,
    Co2,
    Hydrocarbon,
    Ammonia,
}

/// 물성 라이브러리 지원 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertySupport {
    Full,
    Limited,
    None,
}

/// 운전 한계. 온도는 K, 압력은 Pa.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperatingLimits {
    pub min_temp_k: f64,
    pub max_temp_k: f64,
    pub min_pressure_pa: f64,
    pub max_pressure_pa: f64,
    pub critical_temp_k: f64,
    pub critical_pressure_pa: f64,
    pub normal_boiling_point_k: f64,
}

#[derive(Debug, Serialize)]
pub struct RefrigerantProperties {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub category: Category,
    pub odp: f64,
    pub gwp: f64,
    pub safety: SafetyClass,
    pub applications: &'static [&'static str],
    pub limits: OperatingLimits,
    pub support: PropertySupport,
    /// 연소하한(kg/m³). 가연성 냉매에만 있다.
    pub lfl_kg_per_m3: Option<f64>,
}

static DATABASE: &[RefrigerantProperties] = &[
    RefrigerantProperties {
        id: "R134a",
        name: "R-134a",
        full_name: "Tetrafluoroethane",
        category: Category::Hfc,
        odp: 0.0,
        gwp: 1430.0,
        safety: SafetyClass::A1,
        applications: &["Air Conditioning", "Commercial Refrigeration", "Automotive AC"],
        limits: OperatingLimits {
            min_temp_k: 169.85,
            max_temp_k: 455.0,
            min_pressure_pa: 389.6,
            max_pressure_pa: 7_000_000.0,
            critical_temp_k: 374.21,
            critical_pressure_pa: 4_059_280.0,
            normal_boiling_point_k: 247.08,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: None,
    },
    RefrigerantProperties {
        id: "R410A",
        name: "R-410A",
        full_name: "Difluoromethane/Pentafluoroethane",
        category: Category::Hfc,
        odp: 0.0,
        gwp: 2088.0,
        safety: SafetyClass::A1,
        applications: &["Air Conditioning", "Heat Pumps", "Residential HVAC"],
        limits: OperatingLimits {
            min_temp_k: 200.0,
            max_temp_k: 450.0,
            min_pressure_pa: 5_000.0,
            max_pressure_pa: 6_000_000.0,
            critical_temp_k: 344.49,
            critical_pressure_pa: 4_901_200.0,
            normal_boiling_point_k: 221.71,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: None,
    },
    RefrigerantProperties {
        id: "R744",
        name: "R-744",
        full_name: "Carbon Dioxide",
        category: Category::Co2,
        odp: 0.0,
        gwp: 1.0,
        safety: SafetyClass::A1,
        applications: &["Transcritical Systems", "Cascade Systems", "Commercial Refrigeration"],
        // 최대 온도는 임계 온도. 그 이상은 초임계 운전이다.
        limits: OperatingLimits {
            min_temp_k: 216.58,
            max_temp_k: 304.13,
            min_pressure_pa: 517_950.0,
            max_pressure_pa: 15_000_000.0,
            critical_temp_k: 304.1282,
            critical_pressure_pa: 7_377_300.0,
            normal_boiling_point_k: 194.69,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: None,
    },
    RefrigerantProperties {
        id: "R290",
        name: "R-290",
        full_name: "Propane",
        category: Category::Hydrocarbon,
        odp: 0.0,
        gwp: 3.0,
        safety: SafetyClass::A3,
        applications: &["Domestic Refrigeration", "Commercial Freezers", "Heat Pumps"],
        limits: OperatingLimits {
            min_temp_k: 85.48,
            max_temp_k: 396.0,
            min_pressure_pa: 0.00017,
            max_pressure_pa: 4_251_200.0,
            critical_temp_k: 369.89,
            critical_pressure_pa: 4_251_200.0,
            normal_boiling_point_k: 231.04,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: Some(0.038),
    },
    RefrigerantProperties {
        id: "R32",
        name: "R-32",
        full_name: "Difluoromethane",
        category: Category::Hfc,
        odp: 0.0,
        gwp: 675.0,
        safety: SafetyClass::A2L,
        applications: &["Air Conditioning", "Heat Pumps", "Split Systems"],
        limits: OperatingLimits {
            min_temp_k: 136.34,
            max_temp_k: 435.0,
            min_pressure_pa: 0.478,
            max_pressure_pa: 5_782_000.0,
            critical_temp_k: 351.26,
            critical_pressure_pa: 5_782_000.0,
            normal_boiling_point_k: 221.499,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: Some(0.307),
    },
    // 임계점·비점은 구성 성분으로부터 추정한 값
    RefrigerantProperties {
        id: "R448A",
        name: "R-448A",
        full_name: "Solstice N40",
        category: Category::Hfo,
        odp: 0.0,
        gwp: 1387.0,
        safety: SafetyClass::A1,
        applications: &["Commercial Refrigeration", "Transport Refrigeration"],
        limits: OperatingLimits {
            min_temp_k: 180.0,
            max_temp_k: 400.0,
            min_pressure_pa: 1_000.0,
            max_pressure_pa: 4_000_000.0,
            critical_temp_k: 356.0,
            critical_pressure_pa: 3_900_000.0,
            normal_boiling_point_k: 228.0,
        },
        support: PropertySupport::Limited,
        lfl_kg_per_m3: None,
    },
    RefrigerantProperties {
        id: "R717",
        name: "R-717",
        full_name: "Ammonia",
        category: Category::Ammonia,
        odp: 0.0,
        gwp: 0.0,
        safety: SafetyClass::B2L,
        applications: &["Industrial Refrigeration", "Large Cold Storage", "Ice Rinks"],
        limits: OperatingLimits {
            min_temp_k: 195.495,
            max_temp_k: 700.0,
            min_pressure_pa: 6_090.0,
            max_pressure_pa: 11_333_000.0,
            critical_temp_k: 405.4,
            critical_pressure_pa: 11_333_000.0,
            normal_boiling_point_k: 239.823,
        },
        support: PropertySupport::Full,
        lfl_kg_per_m3: Some(0.116),
    },
];

pub fn refrigerants() -> &'static [RefrigerantProperties] {
    DATABASE
}

/// 식별자(`R32`) 또는 표시명(`R-32`)으로 냉매를 찾는다. 대소문자를 구분하지 않는다.
pub fn find(id: &str) -> Option<&'static RefrigerantProperties> {
    let id = id.trim();
    DATABASE
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(id) || r.name.eq_ignore_ascii_case(id))
}

/// LFL이 정의된 가연성 냉매 목록. A2L 충전량 계산기의 선택지로 쓴다.
pub fn flammable_refrigerants() -> impl Iterator<Item = &'static RefrigerantProperties> {
    DATABASE
        .iter()
        .filter(|r| r.safety.is_flammable() && r.lfl_kg_per_m3.is_some())
}

/// 운전 조건 점검 결과.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperatingCheck {
    pub valid: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

/// 주어진 온도(°C)가 냉매의 운전 한계 안에 있는지 점검한다.
///
/// `quality`(건도)가 주어지면 R744의 초임계 운전 여부도 경고한다.
pub fn validate_operating_conditions(
    refrigerant_id: &str,
    temp_c: f64,
    quality: Option<f64>,
) -> OperatingCheck {
    let Some(r) = find(refrigerant_id) else {
        return OperatingCheck {
            valid: false,
            warnings: Vec::new(),
            errors: vec![format!("Unknown refrigerant: {refrigerant_id}")],
        };
    };

    let temp_k = temp_c + KELVIN_OFFSET;
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    if temp_k < r.limits.min_temp_k {
        errors.push(format!(
            "Temperature {temp_c}°C ({temp_k:.2}K) is below minimum limit {:.2}°C ({:.2}K)",
            r.limits.min_temp_k - KELVIN_OFFSET,
            r.limits.min_temp_k
        ));
    }
    if temp_k > r.limits.max_temp_k {
        errors.push(format!(
            "Temperature {temp_c}°C ({temp_k:.2}K) is above maximum limit {:.2}°C ({:.2}K)",
            r.limits.max_temp_k - KELVIN_OFFSET,
            r.limits.max_temp_k
        ));
    }
    if r.category == Category::Co2 && temp_k > r.limits.critical_temp_k && quality.is_some() {
        warnings.push(format!(
            "{} above critical temperature {:.2}°C. Operating in transcritical mode.",
            r.name,
            r.limits.critical_temp_k - KELVIN_OFFSET
        ));
    }
    match r.support {
        PropertySupport::Full => {}
        PropertySupport::Limited => warnings.push(format!(
            "{} has limited property support. Some properties may not be available.",
            r.name
        )),
        PropertySupport::None => errors.push(format!(
            "{} is not supported by the property library. Calculations may fail.",
            r.name
        )),
    }

    OperatingCheck {
        valid: errors.is_empty(),
        warnings,
        errors,
    }
}

/// 권장 온도 범위(°C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TempRange {
    pub min: f64,
    pub max: f64,
    pub recommended: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperatingRange {
    pub evaporator: TempRange,
    pub condenser: TempRange,
}

const RANGE_SAFETY_MARGIN_K: f64 = 10.0;

/// 증발/응축 온도의 권장 범위를 정상 비점과 임계 온도로부터 제안한다.
pub fn suggested_operating_range(refrigerant_id: &str) -> Option<OperatingRange> {
    let r = find(refrigerant_id)?;
    let min_c = r.limits.min_temp_k - KELVIN_OFFSET;
    let nbp_c = r.limits.normal_boiling_point_k - KELVIN_OFFSET;
    let crit_c = r.limits.critical_temp_k - KELVIN_OFFSET;
    Some(OperatingRange {
        evaporator: TempRange {
            min: min_c + RANGE_SAFETY_MARGIN_K,
            max: nbp_c - RANGE_SAFETY_MARGIN_K,
            recommended: nbp_c - 20.0,
        },
        condenser: TempRange {
            min: nbp_c + RANGE_SAFETY_MARGIN_K,
            max: crit_c - RANGE_SAFETY_MARGIN_K,
            recommended: nbp_c + 40.0,
        },
    })
}
