use std::path::Path;

use crate::config::Config;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] crate::conversion::ConversionError),
    #[error("사이클 계산 오류: {0}")]
    Cycle(#[from] crate::cycle::CycleError),
    #[error("A2L 계산 오류: {0}")]
    A2l(#[from] crate::safety::A2lError),
    #[error("공기측 계산 오류: {0}")]
    Airside(#[from] crate::airside::AirsideError),
    #[error("JSON 오류: {0}")]
    Json(#[from] serde_json::Error),
    /// API 핸들러가 실패 상태를 돌려준 경우
    #[error("API 오류 ({status}): {message}")]
    Api { status: u16, message: String },
}

/// 대화형 메뉴의 메인 루프를 실행한다. 설정 변경은 `config_path`에 저장한다.
///
/// 계산 오류는 출력하고 메뉴로 돌아간다. 입출력 오류만 루프를 끝낸다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    loop {
        let choice = ui_cli::main_menu(tr)?;
        let outcome = match choice {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr),
            MenuChoice::Saturation => ui_cli::handle_saturation(tr),
            MenuChoice::PtChart => ui_cli::handle_pt_chart(tr),
            MenuChoice::Cycle => ui_cli::handle_cycle(tr, config),
            MenuChoice::Cascade => ui_cli::handle_cascade(tr, config),
            MenuChoice::Compare => ui_cli::handle_compare(tr, config),
            MenuChoice::A2l => ui_cli::handle_a2l(tr, config),
            MenuChoice::Airside => ui_cli::handle_airside(tr),
            MenuChoice::Refrigerants => ui_cli::handle_refrigerants(tr),
            MenuChoice::Settings => save_settings(config, tr, config_path),
            MenuChoice::Exit => {
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(AppError::Io(e)) => return Err(AppError::Io(e)),
            Err(err) => {
                tracing::warn!(?choice, error = %err, "menu action failed");
                println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            Ok(()) => {}
        }
    }
    Ok(())
}

fn save_settings(config: &mut Config, tr: &Translator, path: &Path) -> Result<(), AppError> {
    if ui_cli::handle_settings(tr, config)? {
        config.validate()?;
        config.save(path)?;
        println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
    }
    Ok(())
}
