//! 변환표 성질(항등, 왕복, 선형성)과 대표 값 회귀 테스트.
use engineering_unit_converter::conversion::{convert, format_result, ConversionError, ConversionRequest};
use engineering_unit_converter::quantity::QuantityKind;
use engineering_unit_converter::units::{convert_length, convert_temperature, LengthUnit, TemperatureUnit};

const SCALED_KINDS: [QuantityKind; 7] = [
    QuantityKind::Length,
    QuantityKind::Mass,
    QuantityKind::Force,
    QuantityKind::Pressure,
    QuantityKind::Energy,
    QuantityKind::Power,
    QuantityKind::Torque,
];

fn assert_close(actual: f64, expected: f64) {
    let tol = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn same_unit_is_identity_for_every_kind() {
    for kind in QuantityKind::ALL {
        for unit in kind.unit_labels() {
            for v in [0.0, 1.0, -3.75, 1234.5678] {
                assert_eq!(convert(kind, v, unit, unit).unwrap(), v, "{kind} {unit}");
            }
        }
    }
}

#[test]
fn round_trip_returns_original_value() {
    for kind in SCALED_KINDS {
        let labels = kind.unit_labels();
        for a in &labels {
            for b in &labels {
                let there = convert(kind, 42.5, a, b).unwrap();
                let back = convert(kind, there, b, a).unwrap();
                assert_close(back, 42.5);
            }
        }
    }
}

#[test]
fn scaled_conversion_is_linear() {
    for kind in SCALED_KINDS {
        let labels = kind.unit_labels();
        for a in &labels {
            for b in &labels {
                let once = convert(kind, 3.0, a, b).unwrap();
                let scaled = convert(kind, 7.0 * 3.0, a, b).unwrap();
                assert_close(scaled, 7.0 * once);
            }
        }
    }
}

#[test]
fn temperature_reference_points() {
    let t = |v, from, to| convert(QuantityKind::Temperature, v, from, to).unwrap();
    assert_close(t(0.0, "C", "K"), 273.15);
    assert_close(t(100.0, "C", "F"), 212.0);
    assert_close(t(32.0, "F", "C"), 0.0);
    assert_close(t(0.0, "K", "C"), -273.15);
    assert_close(t(-40.0, "C", "F"), -40.0);
    assert_close(t(212.0, "F", "K"), 373.15);
    assert_close(t(373.15, "K", "F"), 212.0);
}

#[test]
fn temperature_same_unit_is_identity() {
    for unit in ["C", "K", "F"] {
        assert_eq!(convert(QuantityKind::Temperature, 12.34, unit, unit).unwrap(), 12.34);
    }
}

#[test]
fn typed_operations_match_dispatcher() {
    assert_close(convert_length(1.0, LengthUnit::Meter, LengthUnit::Centimeter), 100.0);
    assert_close(
        convert_temperature(100.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        373.15,
    );
}

#[test]
fn named_values() {
    assert_close(convert(QuantityKind::Length, 1.0, "m", "cm").unwrap(), 100.0);
    assert_close(convert(QuantityKind::Length, 12.0, "in", "ft").unwrap(), 1.0);
    assert_close(convert(QuantityKind::Energy, 1.0, "kWh", "J").unwrap(), 3.6e6);
    assert_close(convert(QuantityKind::Mass, 2.0, "ton", "kg").unwrap(), 2000.0);
    assert_close(convert(QuantityKind::Pressure, 1.0, "atm", "Pa").unwrap(), 101_325.0);
    assert_close(convert(QuantityKind::Power, 1.0, "hp", "W").unwrap(), 745.7);
    assert_close(convert(QuantityKind::Force, 1.0, "kN", "N").unwrap(), 1000.0);
    assert_close(convert(QuantityKind::Torque, 1.0, "lbft", "Nm").unwrap(), 1.35582);
}

#[test]
fn unknown_unit_is_rejected_for_every_kind() {
    for kind in QuantityKind::ALL {
        let valid = kind.unit_labels()[0];
        for (from, to) in [("bogus", valid), (valid, "bogus")] {
            let err = convert(kind, 1.0, from, to).unwrap_err();
            assert_eq!(
                err,
                ConversionError::InvalidUnit {
                    kind,
                    unit: "bogus".to_string()
                }
            );
        }
    }
}

#[test]
fn labels_are_case_sensitive_and_not_shared_between_kinds() {
    assert!(convert(QuantityKind::Length, 1.0, "M", "cm").is_err());
    assert!(convert(QuantityKind::Temperature, 1.0, "c", "K").is_err());
    assert!(convert(QuantityKind::Length, 1.0, "kg", "m").is_err());
    assert!(convert(QuantityKind::Temperature, 1.0, "R", "R").is_err());
}

#[test]
fn non_finite_values_are_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for kind in QuantityKind::ALL {
            let unit = kind.unit_labels()[0];
            let err = convert(kind, v, unit, unit).unwrap_err();
            assert!(matches!(err, ConversionError::InvalidValue { .. }), "{kind}: {err}");
        }
    }
}

#[test]
fn quantity_names_parse_case_insensitively() {
    assert_eq!("length".parse::<QuantityKind>().unwrap(), QuantityKind::Length);
    assert_eq!("TORQUE".parse::<QuantityKind>().unwrap(), QuantityKind::Torque);
    assert_eq!(
        "volume".parse::<QuantityKind>().unwrap_err(),
        ConversionError::UnknownQuantity("volume".to_string())
    );
}

#[test]
fn unit_labels_follow_form_order() {
    assert_eq!(QuantityKind::Length.unit_labels(), ["m", "cm", "mm", "in", "ft"]);
    assert_eq!(QuantityKind::Energy.unit_labels(), ["J", "kJ", "cal", "kWh", "BTU"]);
    assert_eq!(QuantityKind::Temperature.unit_labels(), ["C", "K", "F"]);
    assert!(QuantityKind::Power.accepts("MW"));
    assert!(!QuantityKind::Power.accepts("GW"));
}

#[test]
fn result_string_uses_three_decimals() {
    assert_eq!(format_result(1.0, "m", 100.0, "cm"), "1.0 m = 100.000 cm");
    assert_eq!(format_result(2.5, "kg", 5.51156, "lb"), "2.5 kg = 5.512 lb");
    let line = ConversionRequest::new(QuantityKind::Temperature, -40.0, "C", "F")
        .evaluate()
        .unwrap();
    assert_eq!(line, "-40.0 C = -40.000 F");
}

#[test]
fn result_string_renders_extreme_inputs_with_signed_exponent() {
    assert_eq!(
        format_result(1e16, "m", 1e16, "m"),
        "1e+16 m = 10000000000000000.000 m"
    );
    assert_eq!(format_result(1e-5, "m", 1e-5, "m"), "1e-05 m = 0.000 m");
    assert_eq!(format_result(123.0, "J", 0.123, "kJ"), "123.0 J = 0.123 kJ");
}
