use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 압력 단위. 내부 기준은 Pa이며 게이지/절대압 구분 없이 배율만 적용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    Bar,
    Atm,
    Psi,
}

const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_PSI: f64 = 6894.76;

impl Unit for PressureUnit {
    const ALL: &'static [Self] = &[
        PressureUnit::Pascal,
        PressureUnit::Bar,
        PressureUnit::Atm,
        PressureUnit::Psi,
    ];

    fn label(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::Psi => "psi",
        }
    }
}

impl ScaledUnit for PressureUnit {
    fn factor(self) -> f64 {
        match self {
            PressureUnit::Pascal => 1.0,
            PressureUnit::Bar => PA_PER_BAR,
            PressureUnit::Atm => PA_PER_ATM,
            PressureUnit::Psi => PA_PER_PSI,
        }
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    convert_scaled(value, from, to)
}
