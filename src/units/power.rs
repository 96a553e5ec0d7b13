use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 동력 단위. 내부 기준은 W이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    /// 기계식 마력 (745.7 W)
    Horsepower,
}

impl Unit for PowerUnit {
    const ALL: &'static [Self] = &[
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::Megawatt,
        PowerUnit::Horsepower,
    ];

    fn label(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::Horsepower => "hp",
        }
    }
}

impl ScaledUnit for PowerUnit {
    fn factor(self) -> f64 {
        match self {
            PowerUnit::Watt => 1.0,
            PowerUnit::Kilowatt => 1000.0,
            PowerUnit::Megawatt => 1e6,
            PowerUnit::Horsepower => 745.7,
        }
    }
}

pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    convert_scaled(value, from, to)
}
