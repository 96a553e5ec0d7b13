use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 토크 단위. 내부 기준은 N·m이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TorqueUnit {
    NewtonMeter,
    KilonewtonMeter,
    PoundFoot,
}

impl Unit for TorqueUnit {
    const ALL: &'static [Self] = &[
        TorqueUnit::NewtonMeter,
        TorqueUnit::KilonewtonMeter,
        TorqueUnit::PoundFoot,
    ];

    fn label(self) -> &'static str {
        match self {
            TorqueUnit::NewtonMeter => "Nm",
            TorqueUnit::KilonewtonMeter => "kNm",
            TorqueUnit::PoundFoot => "lbft",
        }
    }
}

impl ScaledUnit for TorqueUnit {
    fn factor(self) -> f64 {
        match self {
            TorqueUnit::NewtonMeter => 1.0,
            TorqueUnit::KilonewtonMeter => 1000.0,
            TorqueUnit::PoundFoot => 1.35582,
        }
    }
}

/// 토크를 변환한다.
pub fn convert_torque(value: f64, from: TorqueUnit, to: TorqueUnit) -> f64 {
    convert_scaled(value, from, to)
}
