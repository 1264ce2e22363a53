//! # Radix
//! Text conversion for integers in bases 2 to 36 and 62.
//!
//! `rug` only renders bases up to 36, so the digits come straight from GMP's
//! `mpz_get_str` / `mpz_set_str`. Both are handed buffers owned on the Rust
//! side, nothing allocated by GMP ever crosses back.

use std::os::raw::{c_char, c_int};

use gmp_mpfr_sys::gmp;
use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::digit_cache::digit_value;
use crate::error::{Error, Result};

/// How an integer is rendered as text.
///
/// ```
/// use mp_num::{MpZ, RadixFormat};
///
/// let z = MpZ::from(-255);
/// let format = RadixFormat::new(16).with_min_digits(4).with_uppercase(true);
/// assert_eq!(z.to_string_with(&format).unwrap(), "-00FF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadixFormat {
    pub base: u32,
    /// Left zero-padding target, the sign is not counted.
    pub min_digits: usize,
    pub uppercase: bool,
}

impl Default for RadixFormat {
    fn default() -> Self {
        RadixFormat { base: 10, min_digits: 0, uppercase: false }
    }
}

impl RadixFormat {
    pub fn new(base: u32) -> Self {
        RadixFormat { base, ..Default::default() }
    }
    pub fn with_min_digits(mut self, min_digits: usize) -> Self {
        self.min_digits = min_digits;
        self
    }
    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
    pub fn validate(&self) -> Result<()> {
        check_base(self.base)?;
        if self.uppercase && self.base == BASE_62 {
            return Err(Error::UppercaseBase62);
        }
        Ok(())
    }
}

pub fn check_base(base: u32) -> Result<()> {
    if (MIN_BASE..=MAX_CASELESS_BASE).contains(&base) || base == BASE_62 {
        Ok(())
    } else {
        Err(Error::InvalidBase(base))
    }
}

// 实现打印
pub fn format_integer(value: &Integer, format: &RadixFormat) -> Result<String> {
    format.validate()?;
    let base = format.base as c_int;
    let gmp_base = if format.uppercase { -base } else { base };

    // sizeinbase may overshoot by one, plus room for '-' and NUL
    let size = unsafe { gmp::mpz_sizeinbase(value.as_raw(), base) } + 2;
    let mut buf = vec![0u8; size];
    unsafe {
        gmp::mpz_get_str(buf.as_mut_ptr() as *mut c_char, gmp_base, value.as_raw());
    }
    let len = buf.iter().position(|b| *b == 0).unwrap_or(size);
    buf.truncate(len);

    let (sign, digits) = match buf.split_first() {
        Some((b'-', digits)) => ("-", digits),
        _ => ("", &buf[..]),
    };
    let mut s = String::with_capacity(sign.len() + format.min_digits.max(digits.len()));
    s.push_str(sign);
    for _ in digits.len()..format.min_digits {
        s.push('0');
    }
    s.extend(digits.iter().map(|b| *b as char));
    Ok(s)
}

// 实现解析
pub fn parse_integer(val: &str, base: u32) -> Result<Integer> {
    check_base(base)?;
    if val.is_empty() {
        return Err(Error::Empty);
    }

    let (negative, cursor) = match val.as_bytes()[0] {
        b'-' => (true, 1),
        b'+' => (false, 1),
        _ => (false, 0),
    };
    let digits = &val[cursor..];
    if digits.is_empty() {
        return Err(Error::Empty);
    }
    for (offset, c) in digits.char_indices() {
        if digit_value(c, base).is_none() {
            return Err(Error::InvalidDigit { digit: c, position: cursor + offset, base });
        }
    }

    let mut c_digits = Vec::with_capacity(digits.len() + 1);
    c_digits.extend_from_slice(digits.as_bytes());
    c_digits.push(0);
    let mut result = Integer::new();
    let rc = unsafe { gmp::mpz_set_str(result.as_raw_mut(), c_digits.as_ptr() as *const c_char, base as c_int) };
    if rc != 0 {
        return Err(Error::Unparsable { text: val.to_string(), base });
    }
    if negative {
        result = -result;
    }
    Ok(result)
}

#[test]
fn test_format_integer() {
    let v = Integer::from(-255);
    assert_eq!(format_integer(&v, &RadixFormat::new(16)).unwrap(), "-ff");
    assert_eq!(format_integer(&v, &RadixFormat::new(16).with_uppercase(true)).unwrap(), "-FF");
    assert_eq!(format_integer(&v, &RadixFormat::new(2).with_min_digits(10)).unwrap(), "-0011111111");
    assert_eq!(format_integer(&Integer::new(), &RadixFormat::new(10)).unwrap(), "0");
    assert_eq!(format_integer(&Integer::from(61), &RadixFormat::new(62)).unwrap(), "z");
    assert_eq!(format_integer(&Integer::from(62), &RadixFormat::new(62)).unwrap(), "10");
    assert_eq!(format_integer(&Integer::from(35), &RadixFormat::new(62)).unwrap(), "Z");
}

#[test]
fn test_format_rejects() {
    let v = Integer::from(7);
    assert_eq!(format_integer(&v, &RadixFormat::new(1)), Err(Error::InvalidBase(1)));
    assert_eq!(format_integer(&v, &RadixFormat::new(40)), Err(Error::InvalidBase(40)));
    assert_eq!(
        format_integer(&v, &RadixFormat::new(62).with_uppercase(true)),
        Err(Error::UppercaseBase62)
    );
}

#[test]
fn test_parse_integer() {
    assert_eq!(parse_integer("-ff", 16).unwrap(), -255);
    assert_eq!(parse_integer("+FF", 16).unwrap(), 255);
    assert_eq!(parse_integer("000123", 10).unwrap(), 123);
    assert_eq!(parse_integer("z", 62).unwrap(), 61);
    assert_eq!(parse_integer("Z", 62).unwrap(), 35);
    assert_eq!(parse_integer("", 10), Err(Error::Empty));
    assert_eq!(parse_integer("-", 10), Err(Error::Empty));
    assert_eq!(
        parse_integer("12a", 10),
        Err(Error::InvalidDigit { digit: 'a', position: 2, base: 10 })
    );
    assert_eq!(
        parse_integer("1 2", 10),
        Err(Error::InvalidDigit { digit: ' ', position: 1, base: 10 })
    );
    assert_eq!(parse_integer("12", 37), Err(Error::InvalidBase(37)));
    assert_eq!(
        parse_integer("1\02", 10),
        Err(Error::InvalidDigit { digit: '\0', position: 1, base: 10 })
    );
    assert_eq!(
        parse_integer("-9\u{e9}", 16),
        Err(Error::InvalidDigit { digit: '\u{e9}', position: 2, base: 16 })
    );
}

#[test]
fn test_format_serde() {
    let format: RadixFormat = serde_json::from_str(r#"{"base": 16, "uppercase": true}"#).unwrap();
    assert_eq!(format, RadixFormat::new(16).with_uppercase(true));
    let back = serde_json::to_string(&format).unwrap();
    assert_eq!(serde_json::from_str::<RadixFormat>(&back).unwrap(), format);
}
