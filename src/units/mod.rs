//! 단위 정의 및 변환 모듈 모음.

pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod temperature;
pub mod torque;

pub use energy::{convert_energy, EnergyUnit};
pub use force::{convert_force, ForceUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureRule, TemperatureUnit};
pub use torque::{convert_torque, TorqueUnit};

/// 물리량별 단위 enum이 공통으로 구현하는 트레이트.
///
/// `ALL`은 화면에 표시되는 순서를 따른다.
pub trait Unit: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    /// 화면/CLI에 표시되는 단위 기호.
    fn label(self) -> &'static str;

    /// 단위 기호를 정확히 일치하는 경우에만 enum으로 변환한다.
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|u| u.label() == label)
    }

    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|u| u.label()).collect()
    }
}

/// 기준 단위에 대한 배율 하나로 환산되는 단위.
pub trait ScaledUnit: Unit {
    /// 1 단위 = factor 기준 단위.
    fn factor(self) -> f64;
}

/// `value * factor[from] / factor[to]`. 같은 단위끼리는 값을 그대로 돌려준다.
pub fn convert_scaled<U: ScaledUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    value * from.factor() / to.factor()
}
