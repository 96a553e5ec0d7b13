use std::io::{self, BufRead, Write};
use std::path::Path;

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 입력이 끝났는데 응답이 더 필요한 경우
    #[error("input closed")]
    InputClosed,
}

/// 표준 입출력으로 대화형 메뉴 루프를 실행한다.
pub fn run(config: &mut Config, config_path: &Path) -> Result<(), AppError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, config_path, &mut stdin.lock(), &mut stdout.lock())
}

/// 메인 루프. 입력 스트림이 끝나면 설정을 저장하고 종료한다.
pub fn run_with<R: BufRead, W: Write>(
    config: &mut Config,
    config_path: &Path,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    loop {
        let choice = match ui_cli::main_menu(input, out) {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => MenuChoice::Exit,
            Err(e) => return Err(e),
        };
        match choice {
            MenuChoice::UnitConversion => match ui_cli::handle_unit_conversion(input, out, config) {
                Err(AppError::InputClosed) => break,
                other => other?,
            },
            MenuChoice::ListUnits => ui_cli::handle_list_units(out, None)?,
            MenuChoice::Settings => match ui_cli::handle_settings(input, out, config) {
                Ok(()) => config.save_to(config_path)?,
                Err(AppError::InputClosed) => break,
                Err(e) => return Err(e),
            },
            MenuChoice::Exit => break,
        }
    }
    config.save_to(config_path)?;
    writeln!(out, "Bye.")?;
    Ok(())
}
