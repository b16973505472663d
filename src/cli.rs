//! 명령행 인자 정의. 하위 명령 없이 실행하면 대화형 메뉴로 들어간다.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::DEFAULT_CONFIG_PATH;
use crate::refrigerant::DEFAULT_REFRIGERANT;
use crate::safety::InstallHeight;

#[derive(Parser, Debug)]
#[command(
    name = "hvac_engineering_toolbox",
    version,
    about = "Refrigeration cycle, A2L charge limit and airside calculators"
)]
pub struct Cli {
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH, help = "Config file path")]
    pub config: PathBuf,
    #[arg(long, global = true, help = "UI language (ko, en, auto)")]
    pub lang: Option<String>,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity"
    )]
    pub verbose: u8,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// 사이클 한 개의 운전 조건.
#[derive(Args, Debug, Clone)]
pub struct CycleArgs {
    #[arg(long, default_value = DEFAULT_REFRIGERANT)]
    pub refrigerant: String,
    /// 증발 온도 (°C)
    #[arg(long, allow_negative_numbers = true)]
    pub evap: f64,
    /// 응축 온도 (°C)
    #[arg(long, allow_negative_numbers = true)]
    pub cond: f64,
    #[arg(long, default_value_t = 5.0)]
    pub superheat: f64,
    #[arg(long, default_value_t = 5.0)]
    pub subcooling: f64,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 포화 압력
    Psat {
        refrigerant: String,
        #[arg(allow_negative_numbers = true)]
        temp_c: f64,
    },
    /// 포화 온도 (절대압 kPa 입력)
    Tsat {
        refrigerant: String,
        pressure_kpa: f64,
    },
    Cycle {
        #[command(flatten)]
        cycle: CycleArgs,
        #[arg(long, help = "Reject non-physical inputs instead of propagating NaN")]
        strict: bool,
    },
    Cascade {
        #[arg(long)]
        lt_refrigerant: String,
        #[arg(long, allow_negative_numbers = true)]
        lt_evap: f64,
        #[arg(long, allow_negative_numbers = true)]
        lt_cond: f64,
        #[arg(long)]
        ht_refrigerant: String,
        #[arg(long, allow_negative_numbers = true)]
        ht_evap: f64,
        #[arg(long, allow_negative_numbers = true)]
        ht_cond: f64,
        #[arg(long, default_value_t = 5.0)]
        superheat: f64,
        #[arg(long, default_value_t = 5.0)]
        subcooling: f64,
        /// 저온단 냉동부하 (kW). 없으면 설정값.
        #[arg(long)]
        load_kw: Option<f64>,
    },
    Compare {
        #[arg(long, value_delimiter = ',', default_value = "R134a,R410A,R744")]
        refrigerants: Vec<String>,
        #[arg(long, allow_negative_numbers = true)]
        evap: f64,
        #[arg(long, allow_negative_numbers = true)]
        cond: f64,
        #[arg(long, default_value_t = 5.0)]
        superheat: f64,
        #[arg(long, default_value_t = 5.0)]
        subcooling: f64,
    },
    A2l {
        #[command(subcommand)]
        command: A2lCommands,
    },
    /// PT 차트 (°F / psig)
    Pt {
        refrigerant: String,
        /// 게이지 압력 하나의 포화온도만 조회
        #[arg(long, allow_negative_numbers = true)]
        psig: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,
        #[arg(long, default_value_t = 120.0, allow_negative_numbers = true)]
        to: f64,
        #[arg(long, default_value_t = 10.0)]
        step: f64,
    },
    Airflow {
        sensible_heat_btuh: f64,
        delta_t_f: f64,
    },
    DeltaT {
        return_temp_f: f64,
        supply_temp_f: f64,
    },
    Refrigerants {
        id: Option<String>,
    },
    /// 단위 변환 (예: convert pressure 120 psig kPa)
    Convert {
        quantity: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// JSON 핸들러 호출. 본문은 --body 파일 또는 stdin.
    Api {
        endpoint: String,
        #[arg(long)]
        body: Option<PathBuf>,
    },
}

/// LFL과 설치 높이 지정.
#[derive(Args, Debug, Clone)]
pub struct A2lSite {
    #[arg(long, conflicts_with = "lfl", required_unless_present = "lfl")]
    pub refrigerant: Option<String>,
    /// 연소하한 (kg/m³)
    #[arg(long)]
    pub lfl: Option<f64>,
    /// 설치 높이 (m)
    #[arg(long, conflicts_with = "location")]
    pub height: Option<f64>,
    /// floor, window, wall, ceiling
    #[arg(long, value_parser = parse_install_height)]
    pub location: Option<InstallHeight>,
}

#[derive(Subcommand, Debug)]
pub enum A2lCommands {
    /// 최대 충전량
    Charge {
        #[command(flatten)]
        site: A2lSite,
        /// 실 면적 (m²)
        #[arg(long)]
        area: f64,
    },
    /// 최소 실 면적
    Area {
        #[command(flatten)]
        site: A2lSite,
        /// 충전량 (kg)
        #[arg(long)]
        charge: f64,
    },
}

fn parse_install_height(s: &str) -> Result<InstallHeight, String> {
    InstallHeight::parse(s).ok_or_else(|| format!("unknown install location: {s}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_accepts_negative_evaporator() {
        let cli = Cli::try_parse_from([
            "hvac_engineering_toolbox",
            "cycle",
            "--evap",
            "-10",
            "--cond",
            "45",
            "--strict",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Cycle { cycle, strict }) => {
                assert_eq!(cycle.refrigerant, "R134a");
                assert_eq!(cycle.evap, -10.0);
                assert!(strict);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn a2l_location_is_parsed() {
        let cli = Cli::try_parse_from([
            "hvac_engineering_toolbox",
            "a2l",
            "charge",
            "--refrigerant",
            "R32",
            "--location",
            "ceiling",
            "--area",
            "20",
        ])
        .unwrap();
        let Some(Commands::A2l {
            command: A2lCommands::Charge { site, area },
        }) = cli.command
        else {
            panic!("expected a2l charge");
        };
        assert_eq!(site.location, Some(InstallHeight::Ceiling));
        assert_eq!(area, 20.0);
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["hvac_engineering_toolbox", "-vv"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }
}
