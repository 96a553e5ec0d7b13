use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use engineering_unit_converter::{
    app, config, conversion::ConversionRequest, logging, quantity::QuantityKind, ui_cli,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Engineering unit converter")]
struct Cli {
    /// Path to the settings file.
    #[arg(long, global = true, default_value = config::CONFIG_FILE)]
    config: PathBuf,

    /// Log filter used when RUST_LOG is not set (overrides the config file).
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a value between two units of the same quantity.
    Convert {
        /// Quantity kind (length, mass, temperature, force, pressure, energy, power, torque).
        kind: QuantityKind,
        /// Value to convert.
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Source unit label, e.g. `m`, `kWh`, `C`.
        from: String,
        /// Target unit label.
        to: String,
    },
    /// List the unit labels of one or all quantities.
    Units {
        kind: Option<QuantityKind>,
    },
    /// Menu-driven session (default).
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default_at(&cli.config)
        .with_context(|| format!("failed to load settings from {}", cli.config.display()))?;
    let level = cli.log_level.clone().unwrap_or_else(|| cfg.log_level.clone());
    logging::init_tracing(&level);

    match cli.command.unwrap_or(Command::Interactive) {
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let line = ConversionRequest::new(kind, value, &from, &to).evaluate()?;
            println!("{line}");
        }
        Command::Units { kind } => {
            ui_cli::handle_list_units(&mut std::io::stdout().lock(), kind)?;
        }
        Command::Interactive => app::run(&mut cfg, &cli.config)?,
    }
    Ok(())
}
