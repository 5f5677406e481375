// Shared numeric helpers: string->number and number->string with ECMAScript
// semantics, plus the 53-bit range/integrality check every entry point runs.

/// Largest integer exactly representable in an f64: 2^53 - 1.
pub const INT53_MAX: i64 = 9_007_199_254_740_991;
/// Smallest safe integer; symmetric with [`INT53_MAX`].
pub const INT53_MIN: i64 = -INT53_MAX;

/// Outcome of validating a canonical number against the 53-bit contract.
///
/// Integrality is checked before range, so `0.1` classifies as `NonInteger`
/// even though it is also inside the bound, while `1e100` (integral but
/// astronomically large) classifies as `OutOfRange`. `OutOfRange` subsumes
/// NaN and ±Infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Int53Check {
    Ok(i64),
    NonInteger,
    OutOfRange,
}

pub(crate) fn check_int53(n: f64) -> Int53Check {
    if !n.is_finite() {
        return Int53Check::OutOfRange;
    }
    if n.fract() != 0.0 {
        return Int53Check::NonInteger;
    }
    if n.abs() > INT53_MAX as f64 {
        return Int53Check::OutOfRange;
    }
    // Exact: |n| <= 2^53 - 1 fits i64 with no rounding.
    Int53Check::Ok(n as i64)
}

/// ECMAScript whitespace (broader than Rust's `.trim()`).
fn is_es_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}' | '\u{000A}' | '\u{000B}' | '\u{000C}' | '\u{000D}' | '\u{0020}' | '\u{00A0}' | '\u{1680}' | '\u{2000}'
            ..='\u{200A}' | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn es_trim(s: &str) -> &str {
    let start = s.find(|c: char| !is_es_whitespace(c)).unwrap_or(s.len());
    let end = s
        .rfind(|c: char| !is_es_whitespace(c))
        .map_or(start, |i| i + s[i..].chars().next().unwrap().len_utf8());
    &s[start..end]
}

/// ECMAScript `ToNumber` on a string: trimmed empty -> 0, radix prefixes,
/// exact `Infinity` word forms, otherwise decimal parse. Callers special-case
/// the truly empty string before reaching here.
pub(crate) fn string_to_number(s: &str) -> f64 {
    let trimmed = es_trim(s);
    if trimmed.is_empty() {
        return 0.0;
    }
    for (prefix_lower, prefix_upper, radix) in [("0x", "0X", 16), ("0b", "0B", 2), ("0o", "0O", 8)] {
        if let Some(digits) = trimmed.strip_prefix(prefix_lower).or_else(|| trimmed.strip_prefix(prefix_upper)) {
            return i64::from_str_radix(digits, radix).map(|v| v as f64).unwrap_or(f64::NAN);
        }
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let parsed = trimmed.parse::<f64>().unwrap_or(f64::NAN);
    if parsed.is_infinite() {
        // Rust's parser accepts word forms like "inf" and "infinity"; only
        // explicit numeric overflow (e.g. "10e10000") may produce Infinity.
        let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
        if unsigned.starts_with(|c: char| c.is_alphabetic()) {
            return f64::NAN;
        }
    }
    parsed
}

/// ECMAScript `ToString(Number)`, which is how diagnostics render numeric
/// inputs: `NaN`, `Infinity`, `1e+100` (not `1e100`), `-0` as `0`, no
/// trailing zeros.
pub(crate) fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n.is_sign_negative() { "-Infinity" } else { "Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        // Plain decimal, with any trailing fractional zeros dropped.
        let mut s = format!("{n}");
        if s.contains('.') {
            s = s.trim_end_matches('0').trim_end_matches('.').to_string();
        }
        return s;
    }
    // Exponential form with an explicit exponent sign. Extra precision for
    // very large magnitudes so no significant digit is lost before trimming.
    let precision = if abs >= 1e21 { 16 } else { 15 };
    let formatted = format!("{:.*e}", precision, n);
    if let Some((mantissa, exp)) = formatted.split_once('e') {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        if let Ok(exp) = exp.parse::<i32>() {
            return format!("{mantissa}e{exp:+}");
        }
    }
    formatted
}
