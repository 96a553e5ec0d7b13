use serde::{Deserialize, Serialize};

use super::Unit;

/// 온도 단위를 정의한다.
///
/// 셀시우스/켈빈/화씨는 공통 배율 체계가 아니므로 배율 대신
/// 단위 쌍마다 [`TemperatureRule`]을 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl Unit for TemperatureUnit {
    const ALL: &'static [Self] = &[
        TemperatureUnit::Celsius,
        TemperatureUnit::Kelvin,
        TemperatureUnit::Fahrenheit,
    ];

    fn label(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "F",
        }
    }
}

const KELVIN_OFFSET: f64 = 273.15;
const F_PER_C: f64 = 9.0 / 5.0;
const C_PER_F: f64 = 5.0 / 9.0;

/// 한 방향 온도 변환식 `to = value * scale + offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRule {
    pub scale: f64,
    pub offset: f64,
}

impl TemperatureRule {
    pub const IDENTITY: TemperatureRule = TemperatureRule {
        scale: 1.0,
        offset: 0.0,
    };

    /// (from, to) 쌍에 해당하는 변환식. 같은 단위끼리는 항등 변환이다.
    pub fn between(from: TemperatureUnit, to: TemperatureUnit) -> TemperatureRule {
        use TemperatureUnit::*;
        let (scale, offset) = match (from, to) {
            (Celsius, Kelvin) => (1.0, KELVIN_OFFSET),
            (Kelvin, Celsius) => (1.0, -KELVIN_OFFSET),
            (Celsius, Fahrenheit) => (F_PER_C, 32.0),
            (Fahrenheit, Celsius) => (C_PER_F, -32.0 * C_PER_F),
            // (K - 273.15) * 9/5 + 32
            (Kelvin, Fahrenheit) => (F_PER_C, 32.0 - KELVIN_OFFSET * F_PER_C),
            // (F - 32) * 5/9 + 273.15
            (Fahrenheit, Kelvin) => (C_PER_F, KELVIN_OFFSET - 32.0 * C_PER_F),
            (Celsius, Celsius) | (Kelvin, Kelvin) | (Fahrenheit, Fahrenheit) => {
                return TemperatureRule::IDENTITY
            }
        };
        TemperatureRule { scale, offset }
    }

    pub fn apply(self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    TemperatureRule::between(from, to).apply(value)
}
