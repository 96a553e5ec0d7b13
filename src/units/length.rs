use serde::{Deserialize, Serialize};

use super::{convert_scaled, ScaledUnit, Unit};

/// 길이 단위. 내부 기준은 미터이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Millimeter,
    Inch,
    Foot,
}

impl Unit for LengthUnit {
    const ALL: &'static [Self] = &[
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Inch,
        LengthUnit::Foot,
    ];

    fn label(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Millimeter => "mm",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
        }
    }
}

impl ScaledUnit for LengthUnit {
    fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

/// 길이를 다른 단위로 변환한다.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert_scaled(value, from, to)
}
