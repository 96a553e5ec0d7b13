use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    /// 열화학 칼로리 (4.184 J)
    Calorie,
    KilowattHour,
    Btu,
}

impl Unit for EnergyUnit {
    const ALL: &'static [Self] = &[
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Calorie,
        EnergyUnit::KilowattHour,
        EnergyUnit::Btu,
    ];

    fn label(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Calorie => "cal",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Btu => "BTU",
        }
    }
}

impl ScaledUnit for EnergyUnit {
    fn factor(self) -> f64 {
        match self {
            EnergyUnit::Joule => 1.0,
            EnergyUnit::Kilojoule => 1000.0,
            EnergyUnit::Calorie => 4.184,
            EnergyUnit::KilowattHour => 3.6e6,
            EnergyUnit::Btu => 1055.06,
        }
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    convert_scaled(value, from, to)
}
