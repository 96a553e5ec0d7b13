use std::io::{BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::conversion::ConversionRequest;
use crate::quantity::QuantityKind;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    ListUnits,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<MenuChoice, AppError> {
    writeln!(out, "\n=== Engineering Unit Converter ===")?;
    writeln!(out, "1) Convert")?;
    writeln!(out, "2) List units")?;
    writeln!(out, "3) Settings")?;
    writeln!(out, "0) Exit")?;
    loop {
        let sel = read_line(input, out, "Select: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::ListUnits),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => writeln!(out, "Invalid choice, try again.")?,
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 변환 오류는 결과 대신 메시지로 보여준다.
pub fn handle_unit_conversion<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &Config,
) -> Result<(), AppError> {
    writeln!(out, "\n-- Convert --")?;
    let kind = read_quantity(input, out, cfg.default_quantity)?;
    let value = read_f64(input, out, "Value", cfg.default_value)?;
    let default_unit = cfg.default_units.label_for(kind);
    writeln!(out, "Units: {}", kind.unit_labels().join(", "))?;
    let from_unit = read_unit(input, out, kind, "From unit", default_unit)?;
    let to_unit = read_unit(input, out, kind, "To unit", default_unit)?;

    match ConversionRequest::new(kind, value, &from_unit, &to_unit).evaluate() {
        Ok(line) => writeln!(out, "{line}")?,
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}

/// 물리량별 단위 목록을 출력한다. `kind`가 없으면 전체를 출력한다.
pub fn handle_list_units<W: Write>(out: &mut W, kind: Option<QuantityKind>) -> Result<(), AppError> {
    let kinds: Vec<QuantityKind> = match kind {
        Some(k) => vec![k],
        None => QuantityKind::ALL.to_vec(),
    };
    for k in kinds {
        writeln!(out, "{:<12} {}", k.name(), k.unit_labels().join(", "))?;
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    cfg: &mut Config,
) -> Result<(), AppError> {
    writeln!(out, "\n-- Settings --")?;
    writeln!(
        out,
        "Current: quantity={}, value={:?}",
        cfg.default_quantity, cfg.default_value
    )?;
    // 두 항목을 모두 읽은 뒤에만 반영한다
    let quantity = read_quantity(input, out, cfg.default_quantity)?;
    let value = read_f64(input, out, "Default value", cfg.default_value)?;
    cfg.default_quantity = quantity;
    cfg.default_value = value;
    writeln!(
        out,
        "Saved: quantity={}, value={:?}",
        cfg.default_quantity, cfg.default_value
    )?;
    Ok(())
}

fn read_quantity<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default: QuantityKind,
) -> Result<QuantityKind, AppError> {
    for (i, k) in QuantityKind::ALL.iter().enumerate() {
        write!(out, "{}) {}  ", i + 1, k)?;
    }
    writeln!(out)?;
    loop {
        let sel = read_line(input, out, &format!("Quantity [{default}]: "))?;
        let sel = sel.trim();
        if sel.is_empty() {
            return Ok(default);
        }
        if let Some(kind) = map_quantity(sel) {
            return Ok(kind);
        }
        writeln!(out, "Unsupported quantity.")?;
    }
}

/// 번호(1부터) 또는 이름으로 물리량을 고른다.
fn map_quantity(sel: &str) -> Option<QuantityKind> {
    match sel.parse::<usize>() {
        Ok(n) if n >= 1 => QuantityKind::ALL.get(n - 1).copied(),
        Ok(_) => None,
        Err(_) => sel.parse().ok(),
    }
}

fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

fn read_with_default<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: &str,
) -> Result<String, AppError> {
    let s = read_line(input, out, &format!("{prompt} [{default}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() { default.to_string() } else { s.to_string() })
}

/// 해당 물리량의 단위 기호가 입력될 때까지 다시 묻는다.
fn read_unit<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    kind: QuantityKind,
    prompt: &str,
    default: &str,
) -> Result<String, AppError> {
    loop {
        let label = read_with_default(input, out, prompt, default)?;
        if kind.accepts(&label) {
            return Ok(label);
        }
        writeln!(
            out,
            "Unknown {kind} unit {label:?}, choose one of {}.",
            kind.unit_labels().join(", ")
        )?;
    }
}

fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: f64,
) -> Result<f64, AppError> {
    loop {
        let s = read_line(input, out, &format!("{prompt} [{default:?}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => writeln!(out, "Enter a finite number.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn map_quantity_accepts_numbers_and_names() {
        assert_eq!(map_quantity("1"), Some(QuantityKind::Length));
        assert_eq!(map_quantity("8"), Some(QuantityKind::Torque));
        assert_eq!(map_quantity("pressure"), Some(QuantityKind::Pressure));
        assert_eq!(map_quantity("0"), None);
        assert_eq!(map_quantity("9"), None);
        assert_eq!(map_quantity("volume"), None);
    }

    #[test]
    fn conversion_menu_prints_formatted_result() {
        let cfg = Config::default();
        let mut input = Cursor::new("3\n100\nC\nF\n");
        let mut out = Vec::new();
        handle_unit_conversion(&mut input, &mut out, &cfg).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("100.0 C = 212.000 F"), "{text}");
    }

    #[test]
    fn conversion_menu_uses_defaults_on_empty_input() {
        let cfg = Config::default();
        let mut input = Cursor::new("\n\n\ncm\n");
        let mut out = Vec::new();
        handle_unit_conversion(&mut input, &mut out, &cfg).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1.0 m = 100.000 cm"), "{text}");
    }

    #[test]
    fn conversion_menu_reprompts_for_unknown_unit() {
        let cfg = Config::default();
        let mut input = Cursor::new("1\n5\nyd\nm\nft\n");
        let mut out = Vec::new();
        handle_unit_conversion(&mut input, &mut out, &cfg).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unknown Length unit \"yd\""), "{text}");
        assert!(text.contains("5.0 m = 16.404 ft"), "{text}");
    }

    #[test]
    fn settings_left_untouched_when_input_ends_early() {
        let mut cfg = Config::default();
        let mut input = Cursor::new("torque\n");
        let mut out = Vec::new();
        assert!(matches!(
            handle_settings(&mut input, &mut out, &mut cfg),
            Err(AppError::InputClosed)
        ));
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn settings_update_defaults() {
        let mut cfg = Config::default();
        let mut input = Cursor::new("energy\n2.5\n");
        let mut out = Vec::new();
        handle_settings(&mut input, &mut out, &mut cfg).unwrap();
        assert_eq!(cfg.default_quantity, QuantityKind::Energy);
        assert_eq!(cfg.default_value, 2.5);
    }

    #[test]
    fn closed_input_is_reported() {
        let mut input = Cursor::new("");
        let mut out = Vec::new();
        assert!(matches!(
            main_menu(&mut input, &mut out),
            Err(AppError::InputClosed)
        ));
    }
}
