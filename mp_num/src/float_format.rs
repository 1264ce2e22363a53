//! Decimal rendering of floats.
//!
//! Picks the shortest digit string that parses back to the very same value at
//! the value's own precision, then places the point: plain notation inside
//! the configured exponent window, `d.ddde+N` outside it.

use rug::Float;

use crate::config::FloatConfig;
use crate::digit_cache::digits_for_bits;

pub fn format_decimal(value: &Float, config: &FloatConfig) -> String {
    if value.is_zero() {
        return if value.is_sign_negative() { "-0.0".into() } else { "0.0".into() };
    }
    if !value.is_finite() {
        // not reachable through the facades, kept total for raw values
        return value.to_string();
    }
    let (negative, digits, exp) = shortest_digits(value);
    let exp10 = exp - 1;

    let mut s = String::with_capacity(digits.len() + 8);
    if negative {
        s.push('-');
    }
    if config.is_plain(exp10) {
        if exp <= 0 {
            s.push_str("0.");
            for _ in 0..-exp {
                s.push('0');
            }
            s.push_str(&digits);
        } else if exp as usize >= digits.len() {
            s.push_str(&digits);
            for _ in digits.len()..exp as usize {
                s.push('0');
            }
            s.push_str(".0");
        } else {
            let (int_part, frac_part) = digits.split_at(exp as usize);
            s.push_str(int_part);
            s.push('.');
            s.push_str(frac_part);
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        s.push_str(lead);
        s.push('.');
        s.push_str(if rest.is_empty() { "0" } else { rest });
        s.push_str(&format!("e{:+}", exp10));
    }
    s
}

/// `(negative, digits, exp)` with `|value| == 0.digits * 10^exp`, no trailing zeros.
fn shortest_digits(value: &Float) -> (bool, String, i32) {
    let prec = value.prec();
    let round_trips = |n: usize| -> Option<(bool, String, i32)> {
        let (negative, digits, exp) = value.to_sign_string_exp(10, Some(n));
        let exp = exp?;
        let literal = format!("{}0.{}e{}", if negative { "-" } else { "" }, digits, exp);
        let parsed = Float::parse(&literal).ok()?;
        if Float::with_val(prec, parsed) == *value {
            Some((negative, digits, exp))
        } else {
            None
        }
    };

    // the upper bound always round-trips for a correctly rounded backend
    let mut hi = digits_for_bits(prec, 10) + 1;
    let mut best = round_trips(hi);
    let mut lo = 2;
    while lo < hi {
        let mid = (lo + hi) / 2;
        match round_trips(mid) {
            Some(found) => {
                best = Some(found);
                hi = mid;
            }
            None => lo = mid + 1,
        }
    }

    let (negative, mut digits, exp) = best.unwrap_or_else(|| {
        let (negative, digits, exp) = value.to_sign_string_exp(10, None);
        (negative, digits, exp.unwrap_or(0))
    });
    let trimmed = digits.trim_end_matches('0').len().max(1);
    digits.truncate(trimmed);
    (negative, digits, exp)
}

#[cfg(test)]
fn render(val: f64, prec: u32) -> String {
    format_decimal(&Float::with_val(prec, val), &FloatConfig::default())
}

#[test]
fn test_plain() {
    assert_eq!(render(1.5, 64), "1.5");
    assert_eq!(render(-2.5, 64), "-2.5");
    assert_eq!(render(123.0, 64), "123.0");
    assert_eq!(render(0.0001, 53), "0.0001");
    assert_eq!(render(0.1, 53), "0.1");
    assert_eq!(render(0.0, 64), "0.0");
    assert_eq!(render(-0.0, 64), "-0.0");
    assert_eq!(render(1234567890123456.0, 64), "1234567890123456.0");
}

#[test]
fn test_exponential() {
    assert_eq!(render(1e20, 64), "1.0e+20");
    assert_eq!(render(1.25e-5, 53), "1.25e-5");
    assert_eq!(render(-3e16, 64), "-3.0e+16");
}

#[test]
fn test_window() {
    let value = Float::with_val(64, 12345.0);
    let config = FloatConfig::new().with_plain_window(-2, 3);
    assert_eq!(format_decimal(&value, &config), "1.2345e+4");
    let value = Float::with_val(64, 0.5);
    assert_eq!(format_decimal(&value, &config), "0.5");
}

#[test]
fn test_precision_shapes_digits() {
    // 0.1 rounded to 10 bits is 0.0999755859375, which still reads back from "0.1"
    assert_eq!(render(0.1, 10), "0.1");
    let third = Float::with_val(128, 1) / 3;
    let s = format_decimal(&Float::with_val(128, third), &FloatConfig::default());
    assert!(s.starts_with("0.3333333333333333333333333333333333333"), "{}", s);
    let parsed = Float::with_val(128, Float::parse(&s).unwrap());
    assert_eq!(parsed, Float::with_val(128, Float::with_val(128, 1) / 3));
}
