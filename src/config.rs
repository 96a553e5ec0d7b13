use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 기본 설정 파일 이름. 작업 디렉터리 기준이다.
pub const CONFIG_FILE: &str = "config.toml";

/// 각 물리량별 기본 단위 설정을 담는다. 입력 화면의 초기 선택값으로 쓰인다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub length: LengthUnit,
    pub mass: MassUnit,
    pub temperature: TemperatureUnit,
    pub force: ForceUnit,
    pub pressure: PressureUnit,
    pub energy: EnergyUnit,
    pub power: PowerUnit,
    pub torque: TorqueUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self {
            length: LengthUnit::Meter,
            mass: MassUnit::Kilogram,
            temperature: TemperatureUnit::Celsius,
            force: ForceUnit::Newton,
            pressure: PressureUnit::Pascal,
            energy: EnergyUnit::Joule,
            power: PowerUnit::Watt,
            torque: TorqueUnit::NewtonMeter,
        }
    }
}

impl DefaultUnits {
    /// 해당 물리량의 기본 단위 기호.
    pub fn label_for(&self, kind: QuantityKind) -> &'static str {
        match kind {
            QuantityKind::Length => self.length.label(),
            QuantityKind::Mass => self.mass.label(),
            QuantityKind::Temperature => self.temperature.label(),
            QuantityKind::Force => self.force.label(),
            QuantityKind::Pressure => self.pressure.label(),
            QuantityKind::Energy => self.energy.label(),
            QuantityKind::Power => self.power.label(),
            QuantityKind::Torque => self.torque.label(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_quantity: QuantityKind,
    pub default_value: f64,
    /// `RUST_LOG`이 없을 때 적용되는 로그 필터
    pub log_level: String,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_quantity: QuantityKind::Length,
            default_value: 1.0,
            log_level: "warn".to_string(),
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("default_value must be a finite number, got {0}")]
    InvalidDefaultValue(f64),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_value.is_finite() {
            return Err(ConfigError::InvalidDefaultValue(self.default_value));
        }
        Ok(())
    }

    /// 설정을 지정한 경로에 저장한다.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(Path::new(CONFIG_FILE))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 기록한 뒤 반환한다.
pub fn load_or_default_at(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        cfg.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "default config created");
        Ok(cfg)
    }
}
