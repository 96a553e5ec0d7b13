use thiserror::Error;
use tracing::{debug, warn};

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// 해당 물리량에 없는 단위 기호
    #[error("unknown {kind} unit: {unit:?} (expected one of {})", .kind.unit_labels().join(", "))]
    InvalidUnit { kind: QuantityKind, unit: String },
    /// NaN 또는 무한대 입력
    #[error("value must be a finite number, got {value}")]
    InvalidValue { value: f64 },
    /// 지원하지 않는 물리량 이름
    #[error("unknown quantity: {0}")]
    UnknownQuantity(String),
}

/// 변환 요청 한 건. UI가 선택한 값을 그대로 담는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub kind: QuantityKind,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionRequest {
    pub fn new(kind: QuantityKind, value: f64, from_unit: &str, to_unit: &str) -> Self {
        Self {
            kind,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
        }
    }

    /// 변환 후 화면 표시용 문자열을 만든다.
    pub fn evaluate(&self) -> Result<String, ConversionError> {
        let result = convert(self.kind, self.value, &self.from_unit, &self.to_unit)?;
        Ok(format_result(self.value, &self.from_unit, result, &self.to_unit))
    }
}

/// 단위 기호 문자열을 해당 물리량의 enum으로 바꾼 뒤 환산한다.
///
/// 단위 기호는 정확히 일치해야 한다 (`m`, `kWh`, `BTU`, `C` 등).
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let outcome = convert_inner(kind, value, from_unit, to_unit);
    match &outcome {
        Ok(result) => debug!(%kind, value, from_unit, to_unit, result, "converted"),
        Err(err) => warn!(%kind, value, from_unit, to_unit, "conversion rejected: {err}"),
    }
    outcome
}

fn convert_inner(
    kind: QuantityKind,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    // 단위 검증이 값 검증보다 먼저다
    let result = match kind {
        QuantityKind::Length => {
            let (from, to) = parse_pair::<LengthUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_length(value, from, to)
        }
        QuantityKind::Mass => {
            let (from, to) = parse_pair::<MassUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_mass(value, from, to)
        }
        QuantityKind::Temperature => {
            let (from, to) = parse_pair::<TemperatureUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_temperature(value, from, to)
        }
        QuantityKind::Force => {
            let (from, to) = parse_pair::<ForceUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_force(value, from, to)
        }
        QuantityKind::Pressure => {
            let (from, to) = parse_pair::<PressureUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_pressure(value, from, to)
        }
        QuantityKind::Energy => {
            let (from, to) = parse_pair::<EnergyUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_energy(value, from, to)
        }
        QuantityKind::Power => {
            let (from, to) = parse_pair::<PowerUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_power(value, from, to)
        }
        QuantityKind::Torque => {
            let (from, to) = parse_pair::<TorqueUnit>(kind, from_unit, to_unit)?;
            check_value(value)?;
            convert_torque(value, from, to)
        }
    };
    Ok(result)
}

fn parse_unit<U: Unit>(kind: QuantityKind, label: &str) -> Result<U, ConversionError> {
    U::from_label(label).ok_or_else(|| ConversionError::InvalidUnit {
        kind,
        unit: label.to_string(),
    })
}

fn parse_pair<U: Unit>(
    kind: QuantityKind,
    from_unit: &str,
    to_unit: &str,
) -> Result<(U, U), ConversionError> {
    Ok((parse_unit(kind, from_unit)?, parse_unit(kind, to_unit)?))
}

fn check_value(value: f64) -> Result<(), ConversionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConversionError::InvalidValue { value })
    }
}

/// `"{value} {from} = {result:.3} {to}"` 형식의 결과 문자열.
///
/// 입력값은 항상 소수부를 포함해 표시한다 (`1.0`, `-40.0`, `1e+16`, `1e-05`).
pub fn format_result(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{} {from_unit} = {result:.3} {to_unit}", render_value(value))
}

/// 입력값 표기. 1e-4 미만 또는 1e16 이상은 지수 표기이며
/// 지수에는 부호와 최소 두 자리를 붙인다.
fn render_value(value: f64) -> String {
    let shortest = format!("{value:?}");
    match shortest.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_rendering_keeps_fraction_and_signed_exponent() {
        assert_eq!(render_value(123.0), "123.0");
        assert_eq!(render_value(0.0001), "0.0001");
        assert_eq!(render_value(1e16), "1e+16");
        assert_eq!(render_value(1e-5), "1e-05");
        assert_eq!(render_value(-2.5e-7), "-2.5e-07");
        assert_eq!(render_value(1.5e300), "1.5e+300");
    }

    #[test]
    fn unit_error_wins_over_value_error() {
        let err = convert(QuantityKind::Mass, f64::NAN, "stone", "kg").unwrap_err();
        assert!(matches!(err, ConversionError::InvalidUnit { .. }));
    }

    #[test]
    fn invalid_unit_message_lists_choices() {
        let err = convert(QuantityKind::Force, 1.0, "N", "dyn").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown Force unit: \"dyn\" (expected one of N, kN, lbf)"
        );
    }
}
