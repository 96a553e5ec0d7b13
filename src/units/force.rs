use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 힘 단위. 내부 기준은 N이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
    PoundForce,
}

impl Unit for ForceUnit {
    const ALL: &'static [Self] = &[ForceUnit::Newton, ForceUnit::Kilonewton, ForceUnit::PoundForce];

    fn label(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

impl ScaledUnit for ForceUnit {
    fn factor(self) -> f64 {
        match self {
            ForceUnit::Newton => 1.0,
            ForceUnit::Kilonewton => 1000.0,
            ForceUnit::PoundForce => 4.44822,
        }
    }
}

pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    convert_scaled(value, from, to)
}
