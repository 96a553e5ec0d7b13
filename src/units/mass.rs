use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    /// 미터톤 (1000 kg)
    Ton,
}

impl Unit for MassUnit {
    const ALL: &'static [Self] = &[
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Pound,
        MassUnit::Ton,
    ];

    fn label(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lb",
            MassUnit::Ton => "ton",
        }
    }
}

impl ScaledUnit for MassUnit {
    fn factor(self) -> f64 {
        match self {
            MassUnit::Kilogram => 1.0,
            MassUnit::Gram => 0.001,
            MassUnit::Pound => 0.453592,
            MassUnit::Ton => 1000.0,
        }
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    convert_scaled(value, from, to)
}
