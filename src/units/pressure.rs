use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{normalize, UnitParseError};

/// 표준 대기압(Pa).
pub const ATM_PA: f64 = 101_325.0;
const PA_PER_PSI: f64 = 6_894.757;
const PA_PER_MICRON: f64 = 0.133_322;

/// 압력 단위. 내부 기준은 항상 Pa(절대압)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    Psi,
    /// 진공 작업용 micron(µmHg). 항상 절대압으로 취급한다.
    Micron,
}

/// 게이지/절대압 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureMode {
    Absolute,
    Gauge,
}

/// 단위와 게이지/절대 모드를 함께 묶은 압력 표기 (`psig`, `kPa(a)` 등).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressureSpec {
    pub unit: PressureUnit,
    pub mode: PressureMode,
}

impl PressureSpec {
    pub const fn new(unit: PressureUnit, mode: PressureMode) -> Self {
        Self { unit, mode }
    }

    pub fn label(self) -> String {
        let base = match self.unit {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
            PressureUnit::Micron => return "micron".to_string(),
        };
        match self.mode {
            PressureMode::Gauge if self.unit == PressureUnit::Psi => "psig".to_string(),
            PressureMode::Absolute if self.unit == PressureUnit::Psi => "psia".to_string(),
            PressureMode::Gauge => format!("{base}(g)"),
            PressureMode::Absolute => format!("{base}(a)"),
        }
    }
}

/// 접미사 `g`/`a` 또는 `(g)`/`(a)`로 게이지/절대를 지정한다. 접미사가 없으면 절대압이다.
impl FromStr for PressureSpec {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use PressureMode::{Absolute, Gauge};
        use PressureUnit::*;

        let norm = normalize(s).replace(['(', ')'], "");
        let (unit, mode) = match norm.as_str() {
            "pa" | "paa" => (Pascal, Absolute),
            "pag" => (Pascal, Gauge),
            "kpa" | "kpaa" => (KiloPascal, Absolute),
            "kpag" => (KiloPascal, Gauge),
            "mpa" | "mpaa" => (MegaPascal, Absolute),
            "mpag" => (MegaPascal, Gauge),
            "bar" | "bara" => (Bar, Absolute),
            "barg" => (Bar, Gauge),
            "psi" | "psia" => (Psi, Absolute),
            "psig" => (Psi, Gauge),
            "micron" | "microns" | "umhg" => (Micron, Absolute),
            _ => return Err(UnitParseError::new("압력", s)),
        };
        Ok(PressureSpec { unit, mode })
    }
}

fn unit_factor_pa(unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => 1.0,
        PressureUnit::KiloPascal => 1_000.0,
        PressureUnit::MegaPascal => 1_000_000.0,
        PressureUnit::Bar => 100_000.0,
        PressureUnit::Psi => PA_PER_PSI,
        PressureUnit::Micron => PA_PER_MICRON,
    }
}

/// 주어진 압력을 Pa(절대)로 변환한다.
pub fn to_pascal_abs(value: f64, spec: PressureSpec) -> f64 {
    let pa = value * unit_factor_pa(spec.unit);
    match spec.mode {
        PressureMode::Gauge => pa + ATM_PA,
        PressureMode::Absolute => pa,
    }
}

/// Pa(절대) 값을 원하는 단위/모드로 변환한다.
pub fn from_pascal_abs(pa_abs: f64, spec: PressureSpec) -> f64 {
    let pa = match spec.mode {
        PressureMode::Gauge => pa_abs - ATM_PA,
        PressureMode::Absolute => pa_abs,
    };
    pa / unit_factor_pa(spec.unit)
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureSpec, to: PressureSpec) -> f64 {
    from_pascal_abs(to_pascal_abs(value, from), to)
}
