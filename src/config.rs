use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cycle::simple::{validate_model, CycleError, CycleModel};

/// 설정 파일 기본 경로 (작업 디렉터리 기준).
pub const DEFAULT_CONFIG_PATH: &str = "hvac_toolbox.toml";

/// 표시 단위 체계 프리셋.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// °C, kPa, m, m², kg
    SI,
    /// °F, psig, ft, ft², lb
    Imperial,
}

/// 사이클 계산 관련 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleSettings {
    pub efficiency_factor: f64,
    pub polytropic_exponent: f64,
    /// true면 입력 검증을 하는 엄격 모드로 계산한다.
    pub strict: bool,
    /// 요청에 과열도가 없거나 0일 때 쓰는 값(K)
    pub default_superheat_k: f64,
    /// 요청에 과냉도가 없거나 0일 때 쓰는 값(K)
    pub default_subcooling_k: f64,
    /// 성능 환산에 쓰는 기준 냉동부하(kW)
    pub reference_load_kw: f64,
    /// 토출온도 경고 기준(°C)
    pub discharge_limit_c: f64,
}

impl Default for CycleSettings {
    fn default() -> Self {
        let model = CycleModel::default();
        Self {
            efficiency_factor: model.efficiency_factor,
            polytropic_exponent: model.polytropic_exponent,
            strict: false,
            default_superheat_k: 5.0,
            default_subcooling_k: 5.0,
            reference_load_kw: 10.0,
            discharge_limit_c: 135.0,
        }
    }
}

impl CycleSettings {
    pub fn model(&self) -> CycleModel {
        CycleModel {
            efficiency_factor: self.efficiency_factor,
            polytropic_exponent: self.polytropic_exponent,
        }
    }
}

/// A2L 계산 관련 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct A2lSettings {
    /// 높이 미지정 시 사용하는 설치 높이(m). 기본은 벽걸이형 1.8 m.
    pub default_install_height_m: f64,
}

impl Default for A2lSettings {
    fn default() -> Self {
        Self {
            default_install_height_m: 1.8,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    /// `auto`, `ko`, `en`
    pub language: String,
    pub cycle: CycleSettings,
    pub a2l: A2lSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::SI,
            language: "auto".to_string(),
            cycle: CycleSettings::default(),
            a2l: A2lSettings::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("설정 값 오류: {0}")]
    Invalid(String),
}

impl From<CycleError> for ConfigError {
    fn from(value: CycleError) -> Self {
        ConfigError::Invalid(value.to_string())
    }
}

/// 설정 파일을 로드하거나, 없으면 기본 설정을 생성해 저장한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        tracing::info!(path = %path.display(), "default config written");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 TOML로 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// 모델 계수와 기본값이 물리적으로 말이 되는지 확인한다.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_model(&self.cycle.model())?;
        let c = &self.cycle;
        if !(c.default_superheat_k >= 0.0) || !(c.default_subcooling_k >= 0.0) {
            return Err(ConfigError::Invalid(
                "default_superheat_k / default_subcooling_k 는 음수일 수 없습니다.".into(),
            ));
        }
        if !(c.reference_load_kw > 0.0) {
            return Err(ConfigError::Invalid("reference_load_kw 는 0보다 커야 합니다.".into()));
        }
        if !(self.a2l.default_install_height_m > 0.0) {
            return Err(ConfigError::Invalid(
                "default_install_height_m 는 0보다 커야 합니다.".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            unit_system = "Imperial"
            [cycle]
            strict = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.unit_system, UnitSystem::Imperial);
        assert!(cfg.cycle.strict);
        assert_eq!(cfg.cycle.efficiency_factor, 0.60);
        assert_eq!(cfg.a2l.default_install_height_m, 1.8);
        cfg.validate().unwrap();
    }

    #[test]
    fn efficiency_above_one_is_rejected() {
        let mut cfg = Config::default();
        cfg.cycle.efficiency_factor = 1.4;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn nan_default_superheat_is_rejected() {
        let mut cfg = Config::default();
        cfg.cycle.default_superheat_k = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
        cfg.cycle.default_superheat_k = 5.0;
        cfg.cycle.default_subcooling_k = f64::NAN;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = std::env::temp_dir().join(format!("hvac_cfg_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("cfg.toml");
        let mut cfg = Config::default();
        cfg.language = "en".into();
        cfg.cycle.reference_load_kw = 3.5;
        cfg.save(&path).unwrap();

        let loaded = load_or_default(&path).unwrap();
        assert_eq!(loaded.language, "en");
        assert_eq!(loaded.cycle.reference_load_kw, 3.5);
        fs::remove_dir_all(&dir).unwrap();
    }
}
