/// Digits used by GMP for every base above 36: `0-9`, then `A-Z`, then `a-z`.
pub const DIGITS_62: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J',
    'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T',
    'U', 'V', 'W', 'X', 'Y', 'Z',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j',
    'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z'
];

pub const MIN_BASE: u32 = 2;

/// Largest base with case-insensitive digits.
pub const MAX_CASELESS_BASE: u32 = 36;

pub const BASE_62: u32 = 62;

/// Marks a byte that is not a digit in the lookup tables.
pub const NOT_A_DIGIT: u8 = u8::MAX;

/// Precision of a float built from `FloatConfig::default()`, in bits.
pub const DEFAULT_PRECISION: u32 = 64;

/// Decimal exponents in `PLAIN_EXP_MIN..PLAIN_EXP_MAX` print without an exponent.
pub const PLAIN_EXP_MIN: i32 = -4;

pub const PLAIN_EXP_MAX: i32 = 16;

/// Miller-Rabin rounds used when the caller does not pick a count.
pub const DEFAULT_PRIME_REPS: u32 = 25;
