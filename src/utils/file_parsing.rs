const TRUE_SPELLINGS: [&str; 3] = ["True", "TRUE", "true"];
const FALSE_SPELLINGS: [&str; 3] = ["False", "FALSE", "false"];

/// Coerces a table cell to `i32` the way a numeric column cast would.
///
/// Accepts plain integers, integral floats (`"1"`, `" 0 "`, `"1.0"`,
/// `"1e0"`) and boolean spellings (`True` is 1, `false` is 0). Returns `None`
/// for empty, non-numeric, fractional, or out-of-range cells.
pub fn parse_integer_cell(cell: &str) -> Option<i32> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    if TRUE_SPELLINGS.contains(&s) {
        return Some(1);
    }
    if FALSE_SPELLINGS.contains(&s) {
        return Some(0);
    }
    if let Ok(v) = s.parse::<i32>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 {
        Some(f as i32)
    } else {
        None
    }
}

/// Renders a score with the shortest round-trip digits.
///
/// Integral values keep a fractional part (`1.0`, not `1`), NaN is `nan`, and
/// magnitudes below `1e-4` or from `1e16` up switch to exponent form with a
/// signed, two-digit exponent (`1e-05`, `2.5e+16`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        return format_exponent(value);
    }
    let s = value.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

fn format_exponent(value: f64) -> String {
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_cells_parse() {
        assert_eq!(parse_integer_cell("1"), Some(1));
        assert_eq!(parse_integer_cell(" 0 "), Some(0));
        assert_eq!(parse_integer_cell("-3"), Some(-3));
    }

    #[test]
    fn integral_floats_parse() {
        assert_eq!(parse_integer_cell("1.0"), Some(1));
        assert_eq!(parse_integer_cell("0.0"), Some(0));
        assert_eq!(parse_integer_cell("1e0"), Some(1));
    }

    #[test]
    fn rejects_non_integers() {
        assert_eq!(parse_integer_cell(""), None);
        assert_eq!(parse_integer_cell("yes"), None);
        assert_eq!(parse_integer_cell("1.5"), None);
        assert_eq!(parse_integer_cell("nan"), None);
        assert_eq!(parse_integer_cell("1e20"), None);
        assert_eq!(parse_integer_cell("T"), None);
    }

    #[test]
    fn boolean_spellings_parse_as_labels() {
        for t in ["True", "TRUE", "true", " True "] {
            assert_eq!(parse_integer_cell(t), Some(1), "{t}");
        }
        for f in ["False", "FALSE", "false"] {
            assert_eq!(parse_integer_cell(f), Some(0), "{f}");
        }
        assert_eq!(parse_integer_cell("tRuE"), None);
    }

    #[test]
    fn scores_keep_a_fractional_part() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(0.5), "0.5");
        assert_eq!(format_float(2.0 / 3.0), "0.6666666666666666");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn tiny_and_huge_scores_use_exponent_form() {
        assert_eq!(format_float(1e-5), "1e-05");
        assert_eq!(format_float(1.0 / 100000.0), "1e-05");
        assert_eq!(format_float(2.5e-7), "2.5e-07");
        assert_eq!(format_float(1e-123), "1e-123");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00012), "0.00012");
        assert_eq!(format_float(1e15), "1000000000000000.0");
    }
}
