//! MP Num \
//! Mutable arbitrary-precision numbers backed by GMP and MPFR.
//! This crate provides:
//! - [`MpZ`]: integers. Every in-place operation overwrites the receiver and returns it, so calls chain.
//! - [`MpQ`]: rationals, always kept in lowest terms with a positive denominator.
//! - [`MpF`]: binary floats, each carrying its own precision (see [`FloatConfig`]).
//!
//! Operands are accepted through the [`IntegerOperand`], [`RationalOperand`] and
//! [`FloatOperand`] traits: another facade value, the backend type, a
//! `num-bigint`/`num-rational`/`bigdecimal` value, or a native number.
//! Failures are reported as [`Error`] and never leave a receiver half-updated.

mod config;
mod constants;
mod digit_cache;
mod error;
mod float_format;
mod mpf;
mod mpq;
mod mpz;
mod radix;

pub use config::FloatConfig;
pub use constants::{DEFAULT_PRECISION, PLAIN_EXP_MAX, PLAIN_EXP_MIN};
pub use error::{DomainError, Error, ErrorKind, Result};
pub use mpf::{FloatOperand, MpF};
pub use mpq::{MpQ, RationalArg, RationalOperand};
pub use mpz::{IntegerArg, IntegerOperand, MpZ, Primality};
pub use radix::RadixFormat;

#[cfg(test)]
mod tests {
    use crate::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn it_works() {
        init();
        let mut z = MpZ::from(10);
        z.add_mut(5);
        assert_eq!(z, 15);
        z.sub_mut(3);
        assert_eq!(z, 12);
        z.mul_mut(2);
        assert_eq!(z, 24);
        z.div_mut(3).unwrap();
        assert_eq!(z, 8);
        z.neg_mut();
        assert_eq!(z, -8);
        z.abs_mut();
        assert_eq!(z, 8);
        assert_eq!(z.to_string(), "8");
    }

    #[test]
    fn test_mixed_operands() {
        init();
        let big = num_bigint::BigInt::from(1u64 << 40);
        let mut z = MpZ::from(3);
        z.mul_mut(&big).add_mut(u64::MAX).sub_mut(-1i8);
        let expected = MpZ::from(3u128 * (1u128 << 40) + u128::from(u64::MAX) + 1);
        assert_eq!(z, expected);

        let mut q = MpQ::from_ratio(1, 3).unwrap();
        q.add_mut(MpQ::from_ratio(1, 6).unwrap());
        assert_eq!(q, MpQ::from_ratio(1, 2).unwrap());
        q.mul_mut(&z);
        assert!(q.is_integer() == z.is_even());

        let mut f = MpF::with_prec(100).unwrap();
        f.add_mut(&q).unwrap().add_mut(&z).unwrap();
        assert_eq!(f.prec(), 100);
    }

    #[test]
    fn test_number_theory() {
        let mut g = MpZ::from(48);
        g.gcd_mut(18);
        assert_eq!(g, 6);
        let mut l = MpZ::from(12);
        l.lcm_mut(18);
        assert_eq!(l, 36);
        let mut p = MpZ::from(2);
        p.pow_mut(100).unwrap();
        assert_eq!(p.to_string(), "1267650600228229401496703205376");
        assert_eq!(p.bit_length(), 101);
    }

    #[test]
    fn test_errors_leave_receiver() {
        init();
        let mut z = MpZ::from(7);
        assert_eq!(z.div_mut(0).unwrap_err().kind(), ErrorKind::DivisionByZero);
        assert_eq!(z, 7);
        let mut q = MpQ::from_ratio(2, 3).unwrap();
        assert_eq!(q.div_mut(MpZ::new()).unwrap_err(), Error::DivisionByZero);
        assert_eq!(q, MpQ::from_ratio(2, 3).unwrap());
        let mut f = MpF::from_value(-1, 64).unwrap();
        assert_eq!(f.sqrt_mut().unwrap_err().kind(), ErrorKind::Domain);
        assert_eq!(f, -1);
    }

    #[test]
    fn test_strings() {
        assert!("-ff".parse::<MpZ>().is_err());
        let z = MpZ::from_str_radix("-ff", 16).unwrap();
        assert_eq!(z, -255);
        assert_eq!(z.to_string_with(&RadixFormat::new(16).with_uppercase(true)).unwrap(), "-FF");
        let q = MpQ::from_str_radix("-a/14", 16).unwrap();
        assert_eq!(q.to_string(), "-1/2");
        let f = MpF::parse("0.1", DEFAULT_PRECISION).unwrap();
        assert_eq!(f.to_string(), "0.1");
    }
}
