use std::io::Read;

use clap::Parser;
use serde::Serialize;
use serde_json::json;

use hvac_engineering_toolbox::app::{self, AppError};
use hvac_engineering_toolbox::cli::{A2lCommands, A2lSite, Cli, Commands};
use hvac_engineering_toolbox::config::{self, Config};
use hvac_engineering_toolbox::conversion;
use hvac_engineering_toolbox::cycle::cascade::{calculate_cascade, cascade_overlap_k};
use hvac_engineering_toolbox::cycle::compare::{compare_refrigerants, ComparisonConditions};
use hvac_engineering_toolbox::cycle::CycleInputs;
use hvac_engineering_toolbox::i18n::{self, Translator};
use hvac_engineering_toolbox::refrigerant::{database, pt_chart};
use hvac_engineering_toolbox::refrigerant::{saturation_pressure, saturation_temperature_c};
use hvac_engineering_toolbox::safety::a2l::{
    a2l_charge_limit_checked, lfl_for, min_area_for_a2l_checked, A2lChargeInputs, A2lError,
};
use hvac_engineering_toolbox::{airside, api, logging, ui_cli};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let mut cfg = config::load_or_default(&cli.config)?;
    let lang = i18n::resolve_language(cli.lang.as_deref(), Some(&cfg.language));
    let tr = Translator::new_with_pack(&lang, None);
    tracing::debug!(lang = tr.language_code(), "translator ready");

    let Some(command) = cli.command else {
        return app::run(&mut cfg, &tr, &cli.config);
    };
    let json_out = cli.json;

    match command {
        Commands::Psat {
            refrigerant,
            temp_c,
        } => {
            let pa = saturation_pressure(&refrigerant, temp_c);
            if json_out {
                emit(&json!({ "refrigerant": refrigerant, "temp_c": temp_c, "pressure_pa": pa }))?;
            } else {
                println!(
                    "{refrigerant} @ {temp_c} °C: {}",
                    ui_cli::format_pressure(pa, cfg.unit_system)
                );
            }
        }
        Commands::Tsat {
            refrigerant,
            pressure_kpa,
        } => {
            let t = saturation_temperature_c(&refrigerant, pressure_kpa * 1000.0);
            if json_out {
                emit(&json!({
                    "refrigerant": refrigerant,
                    "pressure_kpa": pressure_kpa,
                    "temp_c": t
                }))?;
            } else {
                println!(
                    "{refrigerant} @ {pressure_kpa} kPa(a): {}",
                    ui_cli::format_temperature(t, cfg.unit_system)
                );
            }
        }
        Commands::Cycle { cycle, strict } => {
            cfg.cycle.strict |= strict;
            let inputs = CycleInputs::new(
                cycle.refrigerant,
                cycle.evap,
                cycle.cond,
                cycle.superheat,
                cycle.subcooling,
            );
            let result = ui_cli::run_cycle(&inputs, &cfg)?;
            if json_out {
                emit(&json!({ "inputs": inputs, "result": result }))?;
            } else {
                ui_cli::print_cycle(&tr, &cfg, &result);
            }
        }
        Commands::Cascade {
            lt_refrigerant,
            lt_evap,
            lt_cond,
            ht_refrigerant,
            ht_evap,
            ht_cond,
            superheat,
            subcooling,
            load_kw,
        } => {
            let lt = CycleInputs::new(lt_refrigerant, lt_evap, lt_cond, superheat, subcooling);
            let ht = CycleInputs::new(ht_refrigerant, ht_evap, ht_cond, superheat, subcooling);
            if cfg.cycle.strict {
                ui_cli::run_cycle(&lt, &cfg)?;
                ui_cli::run_cycle(&ht, &cfg)?;
            }
            let load = load_kw.unwrap_or(cfg.cycle.reference_load_kw);
            let result = calculate_cascade(&lt, &ht, &cfg.cycle.model(), load);
            let overlap = cascade_overlap_k(&lt, &ht);
            if json_out {
                emit(&json!({ "result": result, "overlap_k": overlap }))?;
            } else {
                ui_cli::print_cascade(&tr, &cfg, &result, overlap);
            }
        }
        Commands::Compare {
            refrigerants,
            evap,
            cond,
            superheat,
            subcooling,
        } => {
            let conditions = ComparisonConditions {
                evaporator_temp_c: evap,
                condenser_temp_c: cond,
                superheat_k: superheat,
                subcooling_k: subcooling,
                load_kw: cfg.cycle.reference_load_kw,
            };
            let entries = compare_refrigerants(&refrigerants, &conditions, &cfg.cycle.model());
            if json_out {
                emit(&entries)?;
            } else {
                ui_cli::print_comparison(&tr, &cfg, &entries);
            }
        }
        Commands::A2l { command } => run_a2l(command, &cfg, json_out)?,
        Commands::Pt {
            refrigerant,
            psig,
            from,
            to,
            step,
        } => {
            if let Some(psig) = psig {
                let t = pt_chart::saturation_temperature_f(
                    &refrigerant,
                    psig,
                    pt_chart::GaugeUnit::Psig,
                );
                if json_out {
                    emit(&json!({
                        "refrigerant": refrigerant,
                        "pressure_psig": psig,
                        "temp_f": t
                    }))?;
                } else {
                    match t {
                        Some(t) => println!("{refrigerant} @ {psig} psig: {t:.1} °F"),
                        None => println!("{refrigerant}: -"),
                    }
                }
            } else {
                let rows = pt_chart::pt_table(&refrigerant, from, to, step);
                if json_out {
                    emit(&rows)?;
                } else {
                    ui_cli::print_pt_table(&rows);
                }
            }
        }
        Commands::Airflow {
            sensible_heat_btuh,
            delta_t_f,
        } => {
            let cfm = airside::airflow_cfm(sensible_heat_btuh, delta_t_f)?;
            if json_out {
                emit(&json!({ "airflow_cfm": cfm }))?;
            } else {
                println!("{cfm:.0} CFM");
            }
        }
        Commands::DeltaT {
            return_temp_f,
            supply_temp_f,
        } => {
            let reading = airside::diagnose_delta_t(return_temp_f, supply_temp_f);
            if json_out {
                emit(&reading)?;
            } else {
                println!(
                    "ΔT {:.1} °F - {}",
                    reading.delta_t_f,
                    reading.status.description()
                );
            }
        }
        Commands::Refrigerants { id } => match id {
            Some(id) => match database::find(&id) {
                Some(r) if json_out => emit(r)?,
                Some(r) => ui_cli::print_refrigerant(r),
                None => println!("{}", tr.t(i18n::keys::REFRIGERANTS_NOT_FOUND)),
            },
            None if json_out => emit(database::refrigerants())?,
            None => ui_cli::print_refrigerant_list(),
        },
        Commands::Convert {
            quantity,
            value,
            from,
            to,
        } => {
            let kind = conversion::parse_quantity(&quantity)
                .ok_or(conversion::ConversionError::UnknownQuantity(quantity))?;
            let result = conversion::convert(kind, value, &from, &to)?;
            println!("{result} {to}");
        }
        Commands::Api { endpoint, body } => {
            let raw = match body {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            let response = api::dispatch_str(&endpoint, &raw, &cfg);
            emit(&response.body)?;
            if !response.is_success() {
                return Err(AppError::Api {
                    status: response.status,
                    message: response.body["error"].as_str().unwrap_or_default().to_string(),
                });
            }
        }
    }
    Ok(())
}

fn resolve_site(site: &A2lSite, cfg: &Config) -> Result<(f64, f64), AppError> {
    let lfl = match (site.lfl, site.refrigerant.as_deref()) {
        (Some(lfl), _) => lfl,
        (None, Some(id)) => lfl_for(id)?,
        (None, None) => return Err(A2lError::NoLfl(String::new()).into()),
    };
    let height = site
        .height
        .or(site.location.map(|l| l.meters()))
        .unwrap_or(cfg.a2l.default_install_height_m);
    Ok((lfl, height))
}

fn run_a2l(command: A2lCommands, cfg: &Config, json_out: bool) -> Result<(), AppError> {
    match command {
        A2lCommands::Charge { site, area } => {
            let (lfl, height) = resolve_site(&site, cfg)?;
            let charge = a2l_charge_limit_checked(&A2lChargeInputs {
                lfl_kg_per_m3: lfl,
                install_height_m: height,
                room_area_m2: area,
            })?;
            if json_out {
                emit(&json!({
                    "lfl_kg_m3": lfl,
                    "install_height_m": height,
                    "max_charge_kg": charge
                }))?;
            } else {
                println!("LFL {lfl} kg/m³, h {height} m, A {area} m²: {charge:.2} kg");
            }
        }
        A2lCommands::Area { site, charge } => {
            let (lfl, height) = resolve_site(&site, cfg)?;
            let area = min_area_for_a2l_checked(charge, lfl, height)?;
            if json_out {
                emit(&json!({
                    "lfl_kg_m3": lfl,
                    "install_height_m": height,
                    "min_area_m2": area
                }))?;
            } else {
                println!("LFL {lfl} kg/m³, h {height} m, m {charge} kg: {area:.2} m²");
            }
        }
    }
    Ok(())
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
