use std::io::{self, BufRead, Write};

use crate::airside::{airflow_cfm, diagnose_delta_t};
use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::cycle::cascade::{calculate_cascade, cascade_overlap_k, CascadeResult};
use crate::cycle::compare::{
    best_by_cop, compare_refrigerants, ComparisonConditions, ComparisonEntry,
};
use crate::cycle::{calculate_cycle, calculate_cycle_checked, CycleInputs, CycleResult};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::refrigerant::database::{self, suggested_operating_range, RefrigerantProperties};
use crate::refrigerant::{constants, pt_chart, saturation_pressure, saturation_temperature_c};
use crate::safety::a2l::{
    a2l_charge_limit, lfl_for, min_area_for_a2l, A2lChargeInputs, InstallHeight,
};
use crate::units::pressure::from_pascal_abs;
use crate::units::{
    convert_area, convert_mass, convert_temperature, convert_temperature_diff, AreaUnit, MassUnit,
    PressureMode, PressureSpec, PressureUnit, TemperatureDiffUnit, TemperatureUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    Saturation,
    PtChart,
    Cycle,
    Cascade,
    Compare,
    A2l,
    Airside,
    Refrigerants,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_UNIT_CONVERSION,
        keys::MAIN_MENU_SATURATION,
        keys::MAIN_MENU_PT_CHART,
        keys::MAIN_MENU_CYCLE,
        keys::MAIN_MENU_CASCADE,
        keys::MAIN_MENU_COMPARE,
        keys::MAIN_MENU_A2L,
        keys::MAIN_MENU_AIRSIDE,
        keys::MAIN_MENU_REFRIGERANTS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::Saturation),
            "3" => return Ok(MenuChoice::PtChart),
            "4" => return Ok(MenuChoice::Cycle),
            "5" => return Ok(MenuChoice::Cascade),
            "6" => return Ok(MenuChoice::Compare),
            "7" => return Ok(MenuChoice::A2l),
            "8" => return Ok(MenuChoice::Airside),
            "9" => return Ok(MenuChoice::Refrigerants),
            "10" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(QuantityKind::from_menu_index)
        {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!("{} {result:.4} {}", tr.t(keys::UNIT_CONVERSION_RESULT), to_unit.trim());
    Ok(())
}

/// 냉매 포화 압력/온도 메뉴.
pub fn handle_saturation(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SATURATION_HEADING));
    let id = read_refrigerant(tr)?;
    println!("{}", tr.t(keys::SATURATION_OPTIONS));
    match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => {
            let t = read_f64(tr, tr.t(keys::PROMPT_TEMPERATURE_C))?;
            let p = saturation_pressure(&id, t);
            println!("{} {}", tr.t(keys::RESULT_SAT_PRESSURE), pressure_summary(p));
        }
        "2" => {
            let kpa = read_f64(tr, tr.t(keys::PROMPT_PRESSURE_KPA_ABS))?;
            let t = saturation_temperature_c(&id, kpa * 1000.0);
            println!("{} {t:.2} °C", tr.t(keys::RESULT_SAT_TEMPERATURE));
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// PT 차트 메뉴.
pub fn handle_pt_chart(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PT_CHART_HEADING));
    let id = read_line(tr.t(keys::PROMPT_REFRIGERANT))?.trim().to_string();
    if !pt_chart::is_supported(&id) {
        let supported: Vec<&str> = pt_chart::supported_refrigerants().collect();
        println!("{} {}", tr.t(keys::PT_CHART_UNSUPPORTED), supported.join(", "));
        return Ok(());
    }
    let from_f = read_f64(tr, tr.t(keys::PT_CHART_PROMPT_FROM_F))?;
    let to_f = read_f64(tr, tr.t(keys::PT_CHART_PROMPT_TO_F))?;
    let step_f = read_f64(tr, tr.t(keys::PT_CHART_PROMPT_STEP_F))?;
    print_pt_table(&pt_chart::pt_table(&id, from_f, to_f, step_f));
    Ok(())
}

/// 단순 사이클 메뉴.
pub fn handle_cycle(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CYCLE_HEADING));
    let inputs = read_cycle_inputs(tr)?;
    let result = run_cycle(&inputs, cfg)?;
    print_cycle(tr, cfg, &result);
    Ok(())
}

/// 캐스케이드 메뉴.
pub fn handle_cascade(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CASCADE_HEADING));
    println!("{}", tr.t(keys::CASCADE_LT_STAGE));
    let lt = read_cycle_inputs(tr)?;
    println!("{}", tr.t(keys::CASCADE_HT_STAGE));
    let ht = read_cycle_inputs(tr)?;
    if cfg.cycle.strict {
        calculate_cycle_checked(&lt, &cfg.cycle.model())?;
        calculate_cycle_checked(&ht, &cfg.cycle.model())?;
    }
    let result = calculate_cascade(&lt, &ht, &cfg.cycle.model(), cfg.cycle.reference_load_kw);
    print_cascade(tr, cfg, &result, cascade_overlap_k(&lt, &ht));
    Ok(())
}

/// 냉매 비교 메뉴. 목록을 비우면 상수가 있는 모든 냉매를 비교한다.
pub fn handle_compare(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    let list = read_line(tr.t(keys::COMPARE_PROMPT_LIST))?;
    let mut ids: Vec<String> = list
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if ids.is_empty() {
        ids = constants::all().iter().map(|c| c.id.to_string()).collect();
    }
    let conditions = ComparisonConditions {
        evaporator_temp_c: read_f64(tr, tr.t(keys::PROMPT_EVAP_C))?,
        condenser_temp_c: read_f64(tr, tr.t(keys::PROMPT_COND_C))?,
        superheat_k: read_f64(tr, tr.t(keys::PROMPT_SUPERHEAT_K))?,
        subcooling_k: read_f64(tr, tr.t(keys::PROMPT_SUBCOOLING_K))?,
        load_kw: cfg.cycle.reference_load_kw,
    };
    let entries = compare_refrigerants(&ids, &conditions, &cfg.cycle.model());
    print_comparison(tr, cfg, &entries);
    Ok(())
}

/// A2L 충전량 메뉴.
pub fn handle_a2l(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::A2L_HEADING));
    println!("{}", tr.t(keys::A2L_OPTIONS));
    let choice = read_line(tr.t(keys::PROMPT_SELECT))?;
    let source = read_line(tr.t(keys::A2L_PROMPT_SOURCE))?;
    let lfl = match source.trim().parse::<f64>() {
        Ok(v) => v,
        Err(_) => lfl_for(source.trim())?,
    };
    println!("{}", tr.t(keys::A2L_HEIGHT_OPTIONS));
    let height = read_line(tr.t(keys::PROMPT_SELECT))?
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| InstallHeight::ALL.get(i).copied())
        .map(InstallHeight::meters)
        .unwrap_or(cfg.a2l.default_install_height_m);

    match choice.trim() {
        "1" => {
            let area = read_f64(tr, tr.t(keys::PROMPT_AREA_M2))?;
            let charge = a2l_charge_limit(&A2lChargeInputs {
                lfl_kg_per_m3: lfl,
                install_height_m: height,
                room_area_m2: area,
            });
            if charge > 0.0 {
                println!("{} {}", tr.t(keys::RESULT_MAX_CHARGE), mass_summary(charge));
            } else {
                println!("{}", tr.t(keys::A2L_NOT_ALLOWED));
            }
        }
        "2" => {
            let charge = read_f64(tr, tr.t(keys::PROMPT_CHARGE_KG))?;
            let area = min_area_for_a2l(charge, lfl, height);
            if area > 0.0 {
                println!("{} {}", tr.t(keys::RESULT_MIN_AREA), area_summary(area));
            } else {
                println!("{}", tr.t(keys::A2L_NOT_ALLOWED));
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 풍량 / ΔT 진단 메뉴.
pub fn handle_airside(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::AIRSIDE_HEADING));
    println!("{}", tr.t(keys::AIRSIDE_OPTIONS));
    match read_line(tr.t(keys::PROMPT_SELECT))?.trim() {
        "1" => {
            let q = read_f64(tr, tr.t(keys::PROMPT_SENSIBLE_BTUH))?;
            let dt = read_f64(tr, tr.t(keys::PROMPT_DELTA_T_F))?;
            let cfm = airflow_cfm(q, dt)?;
            println!("{} {cfm:.0} CFM", tr.t(keys::RESULT_AIRFLOW));
        }
        "2" => {
            let ret = read_f64(tr, tr.t(keys::PROMPT_RETURN_F))?;
            let sup = read_f64(tr, tr.t(keys::PROMPT_SUPPLY_F))?;
            let reading = diagnose_delta_t(ret, sup);
            println!(
                "{} {:.1} °F ({:.1} K) - {}",
                tr.t(keys::RESULT_DELTA_T),
                reading.delta_t_f,
                convert_temperature_diff(
                    reading.delta_t_f,
                    TemperatureDiffUnit::Fahrenheit,
                    TemperatureDiffUnit::Kelvin
                ),
                reading.status.description()
            );
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

/// 냉매 카탈로그 메뉴.
pub fn handle_refrigerants(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::REFRIGERANTS_HEADING));
    print_refrigerant_list();
    let id = read_line(tr.t(keys::REFRIGERANTS_PROMPT_DETAIL))?;
    if id.trim().is_empty() {
        return Ok(());
    }
    match database::find(id.trim()) {
        Some(r) => print_refrigerant(r),
        None => println!("{}", tr.t(keys::REFRIGERANTS_NOT_FOUND)),
    }
    Ok(())
}

/// 설정 메뉴. 값이 바뀌었으면 true를 반환한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {:?}", tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM), cfg.unit_system);
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_STRICT), cfg.cycle.strict);
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(false),
        "1" => cfg.unit_system = UnitSystem::SI,
        "2" => cfg.unit_system = UnitSystem::Imperial,
        "3" => cfg.cycle.strict = !cfg.cycle.strict,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(false);
        }
    }
    Ok(true)
}

/// 설정의 엄격 모드에 따라 검증 여부를 골라 사이클을 계산한다.
pub fn run_cycle(inputs: &CycleInputs, cfg: &Config) -> Result<CycleResult, AppError> {
    let model = cfg.cycle.model();
    if cfg.cycle.strict {
        Ok(calculate_cycle_checked(inputs, &model)?)
    } else {
        Ok(calculate_cycle(inputs, &model))
    }
}

const GAUGE_PSI: PressureSpec = PressureSpec::new(PressureUnit::Psi, PressureMode::Gauge);
const ABS_KPA: PressureSpec = PressureSpec::new(PressureUnit::KiloPascal, PressureMode::Absolute);

/// 단위 체계에 맞춰 절대압(Pa)을 표시한다.
pub fn format_pressure(pa_abs: f64, units: UnitSystem) -> String {
    match units {
        UnitSystem::SI => format!("{:.1} {}", from_pascal_abs(pa_abs, ABS_KPA), ABS_KPA.label()),
        UnitSystem::Imperial => {
            format!("{:.1} {}", from_pascal_abs(pa_abs, GAUGE_PSI), GAUGE_PSI.label())
        }
    }
}

/// 단위 체계에 맞춰 온도(°C)를 표시한다.
pub fn format_temperature(temp_c: f64, units: UnitSystem) -> String {
    let unit = match units {
        UnitSystem::SI => TemperatureUnit::Celsius,
        UnitSystem::Imperial => TemperatureUnit::Fahrenheit,
    };
    format!(
        "{:.1} {}",
        convert_temperature(temp_c, TemperatureUnit::Celsius, unit),
        unit.symbol()
    )
}

fn pressure_summary(pa_abs: f64) -> String {
    format!(
        "{} / {}",
        format_pressure(pa_abs, UnitSystem::SI),
        format_pressure(pa_abs, UnitSystem::Imperial)
    )
}

fn mass_summary(kg: f64) -> String {
    format!(
        "{kg:.2} {} ({:.2} {})",
        MassUnit::Kilogram.symbol(),
        convert_mass(kg, MassUnit::Kilogram, MassUnit::Pound),
        MassUnit::Pound.symbol()
    )
}

fn area_summary(m2: f64) -> String {
    format!(
        "{m2:.2} {} ({:.1} {})",
        AreaUnit::SquareMeter.symbol(),
        convert_area(m2, AreaUnit::SquareMeter, AreaUnit::SquareFoot),
        AreaUnit::SquareFoot.symbol()
    )
}

pub fn print_cycle(tr: &Translator, cfg: &Config, r: &CycleResult) {
    let units = cfg.unit_system;
    if !r.is_valid_cycle() {
        println!("{}", tr.t(keys::RESULT_INVALID_CYCLE));
    }
    println!(
        "{} {}",
        tr.t(keys::RESULT_EVAP_PRESSURE),
        format_pressure(r.evaporator_pressure_pa, units)
    );
    println!(
        "{} {}",
        tr.t(keys::RESULT_COND_PRESSURE),
        format_pressure(r.condenser_pressure_pa, units)
    );
    println!("{} {:.2}", tr.t(keys::RESULT_PRESSURE_RATIO), r.pressure_ratio);
    println!("{} {:.2}", tr.t(keys::RESULT_COP_COOLING), r.cop_cooling);
    println!("{} {:.2}", tr.t(keys::RESULT_COP_HEATING), r.cop_heating);
    println!(
        "{} {}",
        tr.t(keys::RESULT_DISCHARGE_TEMP),
        format_temperature(r.discharge_temp_c, units)
    );
    if r.discharge_temp_c > cfg.cycle.discharge_limit_c {
        println!("{}", tr.t(keys::WARN_DISCHARGE_LIMIT));
    }
}

pub fn print_cascade(tr: &Translator, cfg: &Config, r: &CascadeResult, overlap_k: f64) {
    println!("{}", tr.t(keys::CASCADE_LT_STAGE));
    print_cycle(tr, cfg, &r.low_temp.cycle);
    println!("{}", tr.t(keys::CASCADE_HT_STAGE));
    print_cycle(tr, cfg, &r.high_temp.cycle);
    println!(
        "Q_evap={:.2} kW  W={:.2} kW  Q_rej={:.2} kW",
        r.cooling_capacity_kw, r.total_work_kw, r.heat_rejection_kw
    );
    println!("{} {:.2}", tr.t(keys::RESULT_SYSTEM_COP), r.system_cop);
    println!("{} {overlap_k:.1} K", tr.t(keys::RESULT_OVERLAP));
}

pub fn print_comparison(tr: &Translator, cfg: &Config, entries: &[ComparisonEntry]) {
    println!(
        "{:<8} {:>8} {:>8} {:>16} {:>16} {:>12}",
        "ID", "COP", "PR", "P_evap", "P_cond", "T_disch"
    );
    for e in entries {
        println!(
            "{:<8} {:>8.2} {:>8.2} {:>16} {:>16} {:>12}",
            e.refrigerant_id,
            e.cycle.cop_cooling,
            e.cycle.pressure_ratio,
            format_pressure(e.cycle.evaporator_pressure_pa, cfg.unit_system),
            format_pressure(e.cycle.condenser_pressure_pa, cfg.unit_system),
            format_temperature(e.cycle.discharge_temp_c, cfg.unit_system)
        );
    }
    if let Some(best) = best_by_cop(entries) {
        println!("{} {}", tr.t(keys::RESULT_BEST), best.refrigerant_id);
    }
}

pub fn print_pt_table(rows: &[pt_chart::PtRow]) {
    println!("{:>8} {:>10}", "°F", "psig");
    for row in rows {
        println!("{:>8.1} {:>10.1}", row.temp_f, row.pressure_psig);
    }
}

pub fn print_refrigerant_list() {
    println!("{:<8} {:<8} {:<6} {:>6}  {}", "ID", "Name", "Class", "GWP", "Full name");
    for r in database::refrigerants() {
        println!(
            "{:<8} {:<8} {:<6} {:>6.0}  {}",
            r.id,
            r.name,
            r.safety.as_str(),
            r.gwp,
            r.full_name
        );
    }
}

pub fn print_refrigerant(r: &RefrigerantProperties) {
    println!("{} ({}) - {:?}", r.name, r.full_name, r.category);
    println!("  Safety {}  ODP {}  GWP {}", r.safety.as_str(), r.odp, r.gwp);
    println!("  {}", r.applications.join(", "));
    println!(
        "  Tc {:.2} K  Pc {:.0} kPa  NBP {:.2} K",
        r.limits.critical_temp_k,
        r.limits.critical_pressure_pa / 1000.0,
        r.limits.normal_boiling_point_k
    );
    if let Some(lfl) = r.lfl_kg_per_m3 {
        println!("  LFL {lfl} kg/m³");
    }
    if let Some(range) = suggested_operating_range(r.id) {
        println!(
            "  Evap {:.1}..{:.1} °C (rec. {:.1})  Cond {:.1}..{:.1} °C (rec. {:.1})",
            range.evaporator.min,
            range.evaporator.max,
            range.evaporator.recommended,
            range.condenser.min,
            range.condenser.max,
            range.condenser.recommended
        );
    }
}

fn read_refrigerant(tr: &Translator) -> Result<String, AppError> {
    let id = read_line(tr.t(keys::PROMPT_REFRIGERANT))?;
    let id = match id.trim() {
        "" => constants::DEFAULT_REFRIGERANT.to_string(),
        other => other.to_string(),
    };
    if !constants::is_known(&id) {
        println!("{}", tr.t(keys::WARN_UNKNOWN_REFRIGERANT));
    }
    Ok(id)
}

fn read_cycle_inputs(tr: &Translator) -> Result<CycleInputs, AppError> {
    let id = read_refrigerant(tr)?;
    Ok(CycleInputs::new(
        id,
        read_f64(tr, tr.t(keys::PROMPT_EVAP_C))?,
        read_f64(tr, tr.t(keys::PROMPT_COND_C))?,
        read_f64(tr, tr.t(keys::PROMPT_SUPERHEAT_K))?,
        read_f64(tr, tr.t(keys::PROMPT_SUBCOOLING_K))?,
    ))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    read_answer(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 닫혔으면 빈 답 대신 `UnexpectedEof`를 돌려 메뉴 루프를 끝낸다.
fn read_answer(input: &mut impl BufRead) -> Result<String, AppError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atmospheric_pressure_reads_zero_psig() {
        let s = format_pressure(101_325.0, UnitSystem::Imperial);
        assert_eq!(s, "0.0 psig");
        assert_eq!(format_pressure(101_325.0, UnitSystem::SI), "101.3 kPa(a)");
    }

    #[test]
    fn closed_input_ends_instead_of_repeating() {
        let mut empty: &[u8] = b"";
        match read_answer(&mut empty) {
            Err(AppError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected: {other:?}"),
        }

        let mut blank_then_eof: &[u8] = b"\n";
        assert_eq!(read_answer(&mut blank_then_eof).unwrap(), "\n");
        assert!(read_answer(&mut blank_then_eof).is_err());
    }

    #[test]
    fn imperial_temperature_uses_fahrenheit() {
        assert_eq!(format_temperature(100.0, UnitSystem::Imperial), "212.0 °F");
    }
}
