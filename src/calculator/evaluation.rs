//! Conversions between computed values and operand text.

/// Format a computed value as the text a new operand starts from.
///
/// Finite values use the shortest decimal form that reads back to the same
/// `f64`, without a trailing `.0` on integral values. Negative zero reads
/// as `0`. Non-finite values use `Infinity`, `-Infinity` and `NaN`, which
/// [`parse_number`] accepts back.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}

/// Read operand text as a number.
///
/// Accepts an optional leading `-`, digits with at most one decimal point
/// (either side of the point may be empty, but not both), and the
/// non-finite forms produced by [`format_result`].
pub fn parse_number(text: &str) -> Option<f64> {
    match text {
        "Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        "NaN" => return Some(f64::NAN),
        _ => {}
    }

    let unsigned = text.strip_prefix('-').unwrap_or(text);
    let mut digits = 0;
    let mut points = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return None,
        }
    }
    if digits == 0 || points > 1 {
        return None;
    }

    text.parse().ok()
}

/// Insert thousands separators into the integer part of operand text.
///
/// Text that is not a plain decimal number (empty, a lone sign, `Infinity`)
/// is returned unchanged.
pub fn group_digits(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    if int_part.is_empty() || !int_part.chars().all(|c| c.is_ascii_digit()) {
        return text.to_string();
    }

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    format!("{}{}{}", sign, grouped, frac_part)
}
