use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SATURATION: &str = "main_menu.saturation";
    pub const MAIN_MENU_PT_CHART: &str = "main_menu.pt_chart";
    pub const MAIN_MENU_CYCLE: &str = "main_menu.cycle";
    pub const MAIN_MENU_CASCADE: &str = "main_menu.cascade";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_A2L: &str = "main_menu.a2l";
    pub const MAIN_MENU_AIRSIDE: &str = "main_menu.airside";
    pub const MAIN_MENU_REFRIGERANTS: &str = "main_menu.refrigerants";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const PROMPT_REFRIGERANT: &str = "prompt.refrigerant";
    pub const WARN_UNKNOWN_REFRIGERANT: &str = "warn.unknown_refrigerant";

    pub const SATURATION_HEADING: &str = "saturation.heading";
    pub const SATURATION_OPTIONS: &str = "saturation.options";
    pub const PROMPT_TEMPERATURE_C: &str = "prompt.temperature_c";
    pub const PROMPT_PRESSURE_KPA_ABS: &str = "prompt.pressure_kpa_abs";
    pub const RESULT_SAT_PRESSURE: &str = "result.saturation_pressure";
    pub const RESULT_SAT_TEMPERATURE: &str = "result.saturation_temperature";

    pub const PT_CHART_HEADING: &str = "pt_chart.heading";
    pub const PT_CHART_PROMPT_FROM_F: &str = "pt_chart.prompt_from_f";
    pub const PT_CHART_PROMPT_TO_F: &str = "pt_chart.prompt_to_f";
    pub const PT_CHART_PROMPT_STEP_F: &str = "pt_chart.prompt_step_f";
    pub const PT_CHART_UNSUPPORTED: &str = "pt_chart.unsupported";

    pub const CYCLE_HEADING: &str = "cycle.heading";
    pub const PROMPT_EVAP_C: &str = "prompt.evaporator_c";
    pub const PROMPT_COND_C: &str = "prompt.condenser_c";
    pub const PROMPT_SUPERHEAT_K: &str = "prompt.superheat_k";
    pub const PROMPT_SUBCOOLING_K: &str = "prompt.subcooling_k";
    pub const RESULT_EVAP_PRESSURE: &str = "result.evaporator_pressure";
    pub const RESULT_COND_PRESSURE: &str = "result.condenser_pressure";
    pub const RESULT_PRESSURE_RATIO: &str = "result.pressure_ratio";
    pub const RESULT_COP_COOLING: &str = "result.cop_cooling";
    pub const RESULT_COP_HEATING: &str = "result.cop_heating";
    pub const RESULT_DISCHARGE_TEMP: &str = "result.discharge_temperature";
    pub const RESULT_INVALID_CYCLE: &str = "result.invalid_cycle";
    pub const WARN_DISCHARGE_LIMIT: &str = "warn.discharge_limit";

    pub const CASCADE_HEADING: &str = "cascade.heading";
    pub const CASCADE_LT_STAGE: &str = "cascade.lt_stage";
    pub const CASCADE_HT_STAGE: &str = "cascade.ht_stage";
    pub const RESULT_SYSTEM_COP: &str = "result.system_cop";
    pub const RESULT_OVERLAP: &str = "result.overlap";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_PROMPT_LIST: &str = "compare.prompt_list";
    pub const RESULT_BEST: &str = "result.best";

    pub const A2L_HEADING: &str = "a2l.heading";
    pub const A2L_OPTIONS: &str = "a2l.options";
    pub const A2L_PROMPT_SOURCE: &str = "a2l.prompt_source";
    pub const A2L_HEIGHT_OPTIONS: &str = "a2l.height_options";
    pub const PROMPT_AREA_M2: &str = "prompt.area_m2";
    pub const PROMPT_CHARGE_KG: &str = "prompt.charge_kg";
    pub const RESULT_MAX_CHARGE: &str = "result.max_charge";
    pub const RESULT_MIN_AREA: &str = "result.min_area";
    pub const A2L_NOT_ALLOWED: &str = "a2l.not_allowed";

    pub const AIRSIDE_HEADING: &str = "airside.heading";
    pub const AIRSIDE_OPTIONS: &str = "airside.options";
    pub const PROMPT_SENSIBLE_BTUH: &str = "prompt.sensible_btuh";
    pub const PROMPT_DELTA_T_F: &str = "prompt.delta_t_f";
    pub const PROMPT_RETURN_F: &str = "prompt.return_f";
    pub const PROMPT_SUPPLY_F: &str = "prompt.supply_f";
    pub const RESULT_AIRFLOW: &str = "result.airflow";
    pub const RESULT_DELTA_T: &str = "result.delta_t";

    pub const REFRIGERANTS_HEADING: &str = "refrigerants.heading";
    pub const REFRIGERANTS_PROMPT_DETAIL: &str = "refrigerants.prompt_detail";
    pub const REFRIGERANTS_NOT_FOUND: &str = "refrigerants.not_found";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_CURRENT_STRICT: &str = "settings.current_strict";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "locale overrides loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// TOML 문자열에서 덮어쓸 문자열을 읽는다.
    pub fn with_overrides_from_str(mut self, src: &str) -> Self {
        self.overrides = parse_toml_to_map(src);
        self
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 번역을 가져온다. 언어팩 > 선택 언어 > 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(lang) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&lang) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 맵(테이블은 점으로 이어 붙인다).
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let content = fs::read_to_string(dir.join(format!("{code}.toml"))).ok()?;
        parse_toml_to_map(&content)
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // ko-kr -> ko
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in &value {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== HVAC Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_SATURATION => "2) 냉매 포화 압력/온도",
        MAIN_MENU_PT_CHART => "3) PT 차트",
        MAIN_MENU_CYCLE => "4) 냉동 사이클",
        MAIN_MENU_CASCADE => "5) 캐스케이드 사이클",
        MAIN_MENU_COMPARE => "6) 냉매 비교",
        MAIN_MENU_A2L => "7) A2L 충전량 한계",
        MAIN_MENU_AIRSIDE => "8) 풍량 / 온도차 진단",
        MAIN_MENU_REFRIGERANTS => "9) 냉매 정보",
        MAIN_MENU_SETTINGS => "10) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        PROMPT_SELECT => "선택: ",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 압력  4) 길이  5) 면적  6) 질량",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, psig, m2): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: F, kPa, ft2): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        PROMPT_REFRIGERANT => "냉매 (R134a, R410A, R744): ",
        WARN_UNKNOWN_REFRIGERANT => "알 수 없는 냉매이므로 R134a 상수로 계산합니다.",
        SATURATION_HEADING => "\n-- 냉매 포화 상태 --",
        SATURATION_OPTIONS => "1) 온도 → 포화 압력  2) 압력 → 포화 온도",
        PROMPT_TEMPERATURE_C => "온도 [°C]: ",
        PROMPT_PRESSURE_KPA_ABS => "절대 압력 [kPa(a)]: ",
        RESULT_SAT_PRESSURE => "포화 압력:",
        RESULT_SAT_TEMPERATURE => "포화 온도:",
        PT_CHART_HEADING => "\n-- PT 차트 (°F / psig) --",
        PT_CHART_PROMPT_FROM_F => "시작 온도 [°F]: ",
        PT_CHART_PROMPT_TO_F => "끝 온도 [°F]: ",
        PT_CHART_PROMPT_STEP_F => "간격 [°F]: ",
        PT_CHART_UNSUPPORTED => "PT 차트 계수가 없는 냉매입니다. 지원:",
        CYCLE_HEADING => "\n-- 단순 증기압축 사이클 --",
        PROMPT_EVAP_C => "증발 온도 [°C]: ",
        PROMPT_COND_C => "응축 온도 [°C]: ",
        PROMPT_SUPERHEAT_K => "과열도 [K]: ",
        PROMPT_SUBCOOLING_K => "과냉도 [K]: ",
        RESULT_EVAP_PRESSURE => "증발 압력:",
        RESULT_COND_PRESSURE => "응축 압력:",
        RESULT_PRESSURE_RATIO => "압축비:",
        RESULT_COP_COOLING => "냉방 COP:",
        RESULT_COP_HEATING => "난방 COP:",
        RESULT_DISCHARGE_TEMP => "토출 온도:",
        RESULT_INVALID_CYCLE => "유효하지 않은 사이클입니다 (응축 온도가 증발 온도보다 높아야 함).",
        WARN_DISCHARGE_LIMIT => "경고: 토출 온도가 한계를 넘습니다.",
        CASCADE_HEADING => "\n-- 캐스케이드 사이클 --",
        CASCADE_LT_STAGE => "[저온단]",
        CASCADE_HT_STAGE => "[고온단]",
        RESULT_SYSTEM_COP => "시스템 COP:",
        RESULT_OVERLAP => "캐스케이드 열교환기 온도 중첩:",
        COMPARE_HEADING => "\n-- 냉매 비교 --",
        COMPARE_PROMPT_LIST => "냉매 목록 (쉼표 구분): ",
        RESULT_BEST => "최고 COP 냉매:",
        A2L_HEADING => "\n-- A2L 충전량 한계 --",
        A2L_OPTIONS => "1) 최대 충전량  2) 최소 실 면적",
        A2L_PROMPT_SOURCE => "냉매 ID 또는 LFL [kg/m³]: ",
        A2L_HEIGHT_OPTIONS => "설치 높이: 1=바닥(0.6 m) 2=창문(1.0 m) 3=벽(1.8 m) 4=천장(2.2 m)",
        PROMPT_AREA_M2 => "실 면적 [m²]: ",
        PROMPT_CHARGE_KG => "충전량 [kg]: ",
        RESULT_MAX_CHARGE => "최대 충전량:",
        RESULT_MIN_AREA => "최소 실 면적:",
        A2L_NOT_ALLOWED => "허용 충전량이 없습니다 (입력값 확인).",
        AIRSIDE_HEADING => "\n-- 공기측 계산 --",
        AIRSIDE_OPTIONS => "1) 현열 부하 → 풍량(CFM)  2) 급기/환기 ΔT 진단",
        PROMPT_SENSIBLE_BTUH => "현열 부하 [Btu/h]: ",
        PROMPT_DELTA_T_F => "온도차 [°F]: ",
        PROMPT_RETURN_F => "환기 온도 [°F]: ",
        PROMPT_SUPPLY_F => "급기 온도 [°F]: ",
        RESULT_AIRFLOW => "필요 풍량:",
        RESULT_DELTA_T => "온도차:",
        REFRIGERANTS_HEADING => "\n-- 냉매 정보 --",
        REFRIGERANTS_PROMPT_DETAIL => "상세 조회할 냉매 (엔터: 건너뛰기): ",
        REFRIGERANTS_NOT_FOUND => "목록에 없는 냉매입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_CURRENT_STRICT => "엄격 모드:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial  3) 엄격 모드 전환",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== HVAC Engineering Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_SATURATION => "2) Refrigerant Saturation",
        MAIN_MENU_PT_CHART => "3) PT Chart",
        MAIN_MENU_CYCLE => "4) Refrigeration Cycle",
        MAIN_MENU_CASCADE => "5) Cascade Cycle",
        MAIN_MENU_COMPARE => "6) Compare Refrigerants",
        MAIN_MENU_A2L => "7) A2L Charge Limit",
        MAIN_MENU_AIRSIDE => "8) Airflow / Delta-T",
        MAIN_MENU_REFRIGERANTS => "9) Refrigerant Info",
        MAIN_MENU_SETTINGS => "10) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please select again.",
        PROMPT_SELECT => "Select: ",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) Temp. difference  3) Pressure  4) Length  5) Area  6) Mass"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, psig, m2): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: F, kPa, ft2): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported number.",
        PROMPT_REFRIGERANT => "Refrigerant (R134a, R410A, R744): ",
        WARN_UNKNOWN_REFRIGERANT => "Unknown refrigerant; using R134a constants.",
        SATURATION_HEADING => "\n-- Refrigerant Saturation --",
        SATURATION_OPTIONS => "1) Temperature -> pressure  2) Pressure -> temperature",
        PROMPT_TEMPERATURE_C => "Temperature [°C]: ",
        PROMPT_PRESSURE_KPA_ABS => "Absolute pressure [kPa(a)]: ",
        RESULT_SAT_PRESSURE => "Saturation pressure:",
        RESULT_SAT_TEMPERATURE => "Saturation temperature:",
        PT_CHART_HEADING => "\n-- PT Chart (°F / psig) --",
        PT_CHART_PROMPT_FROM_F => "From [°F]: ",
        PT_CHART_PROMPT_TO_F => "To [°F]: ",
        PT_CHART_PROMPT_STEP_F => "Step [°F]: ",
        PT_CHART_UNSUPPORTED => "No PT chart coefficients for this refrigerant. Supported:",
        CYCLE_HEADING => "\n-- Simple Vapor-Compression Cycle --",
        PROMPT_EVAP_C => "Evaporating temperature [°C]: ",
        PROMPT_COND_C => "Condensing temperature [°C]: ",
        PROMPT_SUPERHEAT_K => "Superheat [K]: ",
        PROMPT_SUBCOOLING_K => "Subcooling [K]: ",
        RESULT_EVAP_PRESSURE => "Evaporator pressure:",
        RESULT_COND_PRESSURE => "Condenser pressure:",
        RESULT_PRESSURE_RATIO => "Pressure ratio:",
        RESULT_COP_COOLING => "Cooling COP:",
        RESULT_COP_HEATING => "Heating COP:",
        RESULT_DISCHARGE_TEMP => "Discharge temperature:",
        RESULT_INVALID_CYCLE => "Invalid cycle (condensing must be above evaporating).",
        WARN_DISCHARGE_LIMIT => "Warning: discharge temperature exceeds the limit.",
        CASCADE_HEADING => "\n-- Cascade Cycle --",
        CASCADE_LT_STAGE => "[Low-temperature stage]",
        CASCADE_HT_STAGE => "[High-temperature stage]",
        RESULT_SYSTEM_COP => "System COP:",
        RESULT_OVERLAP => "Cascade heat exchanger overlap:",
        COMPARE_HEADING => "\n-- Refrigerant Comparison --",
        COMPARE_PROMPT_LIST => "Refrigerants (comma separated): ",
        RESULT_BEST => "Best COP:",
        A2L_HEADING => "\n-- A2L Charge Limit --",
        A2L_OPTIONS => "1) Maximum charge  2) Minimum room area",
        A2L_PROMPT_SOURCE => "Refrigerant id or LFL [kg/m³]: ",
        A2L_HEIGHT_OPTIONS => {
            "Install height: 1=floor(0.6 m) 2=window(1.0 m) 3=wall(1.8 m) 4=ceiling(2.2 m)"
        }
        PROMPT_AREA_M2 => "Room area [m²]: ",
        PROMPT_CHARGE_KG => "Charge [kg]: ",
        RESULT_MAX_CHARGE => "Maximum charge:",
        RESULT_MIN_AREA => "Minimum room area:",
        A2L_NOT_ALLOWED => "No charge allowed (check inputs).",
        AIRSIDE_HEADING => "\n-- Airside --",
        AIRSIDE_OPTIONS => "1) Sensible load -> airflow (CFM)  2) Supply/return ΔT diagnosis",
        PROMPT_SENSIBLE_BTUH => "Sensible load [Btu/h]: ",
        PROMPT_DELTA_T_F => "Delta T [°F]: ",
        PROMPT_RETURN_F => "Return air [°F]: ",
        PROMPT_SUPPLY_F => "Supply air [°F]: ",
        RESULT_AIRFLOW => "Required airflow:",
        RESULT_DELTA_T => "Delta T:",
        REFRIGERANTS_HEADING => "\n-- Refrigerants --",
        REFRIGERANTS_PROMPT_DETAIL => "Refrigerant for details (Enter to skip): ",
        REFRIGERANTS_NOT_FOUND => "Refrigerant not in catalog.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_CURRENT_STRICT => "Strict mode:",
        SETTINGS_OPTIONS => "1) SI  2) Imperial  3) Toggle strict mode",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_and_korean_tables_differ() {
        let ko = Translator::new("ko");
        let en = Translator::new("en-US");
        assert_eq!(en.language(), Language::En);
        assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
        assert_eq!(en.t(keys::APP_EXIT), "Exiting application.");
    }

    #[test]
    fn overrides_take_precedence() {
        let tr = Translator::new("en").with_overrides_from_str(
            r#"
            [general]
            app_exit = "Bye"
            "#,
        );
        assert_eq!(tr.t(keys::APP_EXIT), "Bye");
        assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
    }

    #[test]
    fn explicit_language_beats_config() {
        assert_eq!(resolve_language(Some("en"), Some("ko")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ko-KR")), "ko");
        assert_eq!(resolve_language(None, Some("en_GB")), "en");
    }
}
