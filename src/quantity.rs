use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::ConversionError;
use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Length,
    Mass,
    Temperature,
    Force,
    Pressure,
    Energy,
    Power,
    Torque,
}

impl QuantityKind {
    /// 입력 화면에 나열되는 순서.
    pub const ALL: [QuantityKind; 8] = [
        QuantityKind::Length,
        QuantityKind::Mass,
        QuantityKind::Temperature,
        QuantityKind::Force,
        QuantityKind::Pressure,
        QuantityKind::Energy,
        QuantityKind::Power,
        QuantityKind::Torque,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Mass => "Mass",
            QuantityKind::Temperature => "Temperature",
            QuantityKind::Force => "Force",
            QuantityKind::Pressure => "Pressure",
            QuantityKind::Energy => "Energy",
            QuantityKind::Power => "Power",
            QuantityKind::Torque => "Torque",
        }
    }

    /// 해당 물리량에서 허용되는 단위 기호 목록(표시 순서).
    pub fn unit_labels(self) -> Vec<&'static str> {
        match self {
            QuantityKind::Length => LengthUnit::labels(),
            QuantityKind::Mass => MassUnit::labels(),
            QuantityKind::Temperature => TemperatureUnit::labels(),
            QuantityKind::Force => ForceUnit::labels(),
            QuantityKind::Pressure => PressureUnit::labels(),
            QuantityKind::Energy => EnergyUnit::labels(),
            QuantityKind::Power => PowerUnit::labels(),
            QuantityKind::Torque => TorqueUnit::labels(),
        }
    }

    pub fn accepts(self, label: &str) -> bool {
        self.unit_labels().iter().any(|l| *l == label)
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = ConversionError;

    /// 물리량 이름은 대소문자를 구분하지 않는다 (`length`, `Torque`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        QuantityKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ConversionError::UnknownQuantity(s.to_string()))
    }
}
