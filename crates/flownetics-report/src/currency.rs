//! Currency conversion and number formatting.
//!
//! Calculator amounts are carried in INR. Display converts with a fixed
//! multiplier per currency code; any code outside the table passes through
//! unchanged.

/// Multiplier from the INR base unit into `code`.
///
/// `USD` and `EUR` have fixed rates; every other code (including the empty
/// string and lowercase variants) yields `1.0`.
pub fn conversion_rate(code: &str) -> f64 {
    match code {
        "USD" => 0.012,
        "EUR" => 0.011,
        _ => 1.0,
    }
}

/// Format `value` with exactly `digits` decimals. NaN renders as `"NaN"`.
///
/// Rounding follows the exact binary value, so `1.45` (stored as
/// `1.4499999…`) gives `"1.4"`. Only a value that sits exactly halfway, like
/// `0.25`, rounds away from zero.
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let prec = digits as usize;
    let factor = 10f64.powi(digits as i32);
    let scaled = value * factor;
    // The product is exact when the fused residual vanishes.
    let exact_tie = scaled.fract().abs() == 0.5 && value.mul_add(factor, -scaled) == 0.0;
    if exact_tie {
        format!("{:.prec$}", scaled.round() / factor)
    } else {
        format!("{value:.prec$}")
    }
}

/// Round to a whole number and group thousands with commas (`1234567.6` →
/// `"1,234,568"`).
pub fn group_thousands(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.0}", value.round());
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let len = digits.len();
    let mut out = String::with_capacity(sign.len() + len + len / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Render a plain (non-monetary) number the way the calculator shows it:
/// integers without a fraction, absent values as `0`.
pub fn display_number(value: Option<f64>) -> String {
    match value {
        None => "0".to_string(),
        Some(v) if v == 0.0 => "0".to_string(),
        Some(v) if v.is_nan() => "NaN".to_string(),
        Some(v) if v.is_infinite() => (if v > 0.0 { "Infinity" } else { "-Infinity" }).to_string(),
        Some(v) => format!("{v}"),
    }
}
