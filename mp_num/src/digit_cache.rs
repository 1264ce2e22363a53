use lazy_static::*;

use crate::constants::*;

lazy_static! {
    /// ASCII -> digit value for bases up to 36, letters in either case.
    pub static ref CASELESS_DIGIT_VALUE: [u8; 128] = {
        let mut table = [NOT_A_DIGIT; 128];
        for (value, c) in ('0'..='9').enumerate() {
            table[c as usize] = value as u8;
        }
        for (value, c) in ('a'..='z').enumerate() {
            table[c as usize] = value as u8 + 10;
            table[c.to_ascii_uppercase() as usize] = value as u8 + 10;
        }
        table
    };
    /// ASCII -> digit value for base 62, `A-Z` before `a-z`.
    pub static ref BASE_62_DIGIT_VALUE: [u8; 128] = {
        let mut table = [NOT_A_DIGIT; 128];
        for (value, c) in DIGITS_62.iter().enumerate() {
            table[*c as usize] = value as u8;
        }
        table
    };
    /// `LOG_CACHE[r] == ln(r)` for every radix the crate prints in.
    pub static ref LOG_CACHE: [f64; BASE_62 as usize + 1] = {
        let mut log_cache = [0_f64; BASE_62 as usize + 1];
        for i in MIN_BASE as usize..=BASE_62 as usize {
            log_cache[i] = (i as f64).ln();
        }
        log_cache
    };
}

/// Value of `c` as a digit of `base`, if it is one.
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    let table = if base <= MAX_CASELESS_BASE {
        &*CASELESS_DIGIT_VALUE
    } else {
        &*BASE_62_DIGIT_VALUE
    };
    match table[c as usize] {
        NOT_A_DIGIT => None,
        v if (v as u32) < base => Some(v as u32),
        _ => None,
    }
}

/// Upper bound on the number of `radix` digits needed for `bits` bits.
pub fn digits_for_bits(bits: u32, radix: u32) -> usize {
    (bits as f64 * LOG_CACHE[2] / LOG_CACHE[radix as usize]).ceil() as usize + 1
}

#[test]
fn test_digit_value() {
    assert_eq!(digit_value('7', 8), Some(7));
    assert_eq!(digit_value('8', 8), None);
    assert_eq!(digit_value('f', 16), Some(15));
    assert_eq!(digit_value('F', 16), Some(15));
    assert_eq!(digit_value('Z', 36), Some(35));
    assert_eq!(digit_value('Z', 62), Some(35));
    assert_eq!(digit_value('a', 62), Some(36));
    assert_eq!(digit_value('z', 62), Some(61));
    assert_eq!(digit_value('-', 10), None);
    assert_eq!(digit_value('é', 62), None);
}

#[test]
fn test_digits_for_bits() {
    // 2^64 - 1 has 20 decimal digits
    assert!(digits_for_bits(64, 10) >= 20);
    assert_eq!(digits_for_bits(8, 2), 9);
}
