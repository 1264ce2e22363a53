//! Error taxonomy shared by the three facades.
//!
//! Every fallible in-place operation validates its input before touching the
//! receiver, so an `Err` always leaves the receiver exactly as it was.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("empty numeric string")]
    Empty,
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit { digit: char, position: usize, base: u32 },
    #[error("unsupported base {0}, expected 2..=36 or 62")]
    InvalidBase(u32),
    #[error("upper-case digits are not available in base 62")]
    UppercaseBase62,
    #[error("non-finite value {0} has no arbitrary-precision representation")]
    NonFinite(f64),
    #[error("invalid float literal {0:?}")]
    InvalidFloat(String),
    #[error("precision {0} is outside the supported range")]
    InvalidPrecision(u32),
    #[error("{text:?} was rejected by the backend in base {base}")]
    Unparsable { text: String, base: u32 },
    #[error("comparison with NaN")]
    NanComparison,
    #[error("division by zero")]
    DivisionByZero,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("value does not fit in {target}")]
    Overflow { target: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("negative exponent")]
    NegativeExponent,
    #[error("square root of a negative number")]
    NegativeSqrt,
    #[error("even root of a negative number")]
    EvenRootOfNegative,
    #[error("zeroth root")]
    ZeroRootDegree,
    #[error("zero raised to a negative power")]
    ZeroToNegativePower,
    #[error("result is not a real number")]
    ComplexResult,
    #[error("no inverse exists for the given modulus")]
    NotInvertible,
    #[error("divisor does not divide the dividend exactly")]
    InexactDivision,
}

/// Coarse classification of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
    Domain,
    Overflow,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Empty
            | Error::InvalidDigit { .. }
            | Error::InvalidBase(_)
            | Error::UppercaseBase62
            | Error::NonFinite(_)
            | Error::InvalidFloat(_)
            | Error::InvalidPrecision(_)
            | Error::Unparsable { .. }
            | Error::NanComparison => ErrorKind::InvalidInput,
            Error::DivisionByZero => ErrorKind::DivisionByZero,
            Error::Domain(_) => ErrorKind::Domain,
            Error::Overflow { .. } => ErrorKind::Overflow,
        }
    }
}

#[test]
fn test_kind() {
    assert_eq!(Error::InvalidBase(40).kind(), ErrorKind::InvalidInput);
    assert_eq!(Error::NonFinite(f64::NAN).kind(), ErrorKind::InvalidInput);
    assert_eq!(Error::Unparsable { text: "1".into(), base: 10 }.kind(), ErrorKind::InvalidInput);
    assert_eq!(Error::DivisionByZero.kind(), ErrorKind::DivisionByZero);
    assert_eq!(Error::from(DomainError::NegativeSqrt).kind(), ErrorKind::Domain);
    assert_eq!(Error::Overflow { target: "i64" }.kind(), ErrorKind::Overflow);
}

#[test]
fn test_display() {
    let err = Error::InvalidDigit { digit: 'z', position: 3, base: 10 };
    assert_eq!(err.to_string(), "invalid digit 'z' at position 3 for base 10");
    assert_eq!(Error::from(DomainError::NegativeExponent).to_string(), "negative exponent");
}
