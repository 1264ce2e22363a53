//! # MpQ
//! Mutable arbitrary-precision rationals, always kept in lowest terms with a
//! positive denominator.
//!
//! # Example
//! ```
//! use mp_num::MpQ;
//!
//! let mut q = MpQ::from_ratio(1, 3).unwrap();
//! q.add_mut(&MpQ::from_ratio(1, 6).unwrap());
//! assert_eq!(q.to_string(), "1/2");
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{AddAssign, MulAssign, Neg, SubAssign};
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use rug::ops::{NegAssign, PowAssign};
use rug::{Integer, Rational};

use crate::error::{Error, Result};
use crate::mpz::{bigint_to_integer, integer_to_bigint, IntegerOperand, MpZ};
use crate::radix::{check_base, format_integer, parse_integer, RadixFormat};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MpQ {
    inner: Rational,
}

pub enum RationalArg<'a> {
    Ratio(Cow<'a, Rational>),
    Int(Cow<'a, Integer>),
}

/// Anything an [`MpQ`] can be combined with: another `MpQ`, or any
/// [`IntegerOperand`].
pub trait RationalOperand {
    fn to_rational_arg(&self) -> RationalArg<'_>;
}

impl RationalOperand for MpQ {
    fn to_rational_arg(&self) -> RationalArg<'_> {
        RationalArg::Ratio(Cow::Borrowed(&self.inner))
    }
}

impl RationalOperand for Rational {
    fn to_rational_arg(&self) -> RationalArg<'_> {
        RationalArg::Ratio(Cow::Borrowed(self))
    }
}

impl<T: RationalOperand + ?Sized> RationalOperand for &T {
    fn to_rational_arg(&self) -> RationalArg<'_> {
        (**self).to_rational_arg()
    }
}

macro_rules! impl_integer_rational_operand {
    ($($t: ty),*) => {
    $(
    impl RationalOperand for $t {
        fn to_rational_arg(&self) -> RationalArg<'_> {
            RationalArg::Int(self.to_integer_arg().into_big())
        }
    }
    )*
    };
}
impl_integer_rational_operand!(
    MpZ, Integer, BigInt,
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

fn reject(op: &str, err: Error) -> Error {
    debug!("MpQ::{} rejected: {}", op, err);
    err
}

// 实现构造
impl MpQ {
    pub fn new() -> Self {
        MpQ { inner: Rational::new() }
    }
    /// Canonicalizes `num / den`. A zero denominator is a division by zero.
    pub fn from_ratio<N: IntegerOperand, D: IntegerOperand>(num: N, den: D) -> Result<Self> {
        let num = num.to_integer_arg().into_big().into_owned();
        let den = den.to_integer_arg().into_big().into_owned();
        if den.cmp0() == Ordering::Equal {
            return Err(reject("from_ratio", Error::DivisionByZero));
        }
        Ok(MpQ { inner: Rational::from((num, den)) })
    }
    /// Exact: every finite `f64` is a dyadic rational.
    pub fn from_f64(val: f64) -> Result<Self> {
        Rational::from_f64(val)
            .map(MpQ::from)
            .ok_or(Error::NonFinite(val))
    }
    /// Parses `"n"` or `"n/d"`, both parts in `base`.
    pub fn from_str_radix(val: &str, base: u32) -> Result<Self> {
        check_base(base)?;
        match val.split_once('/') {
            Some((num, den)) => {
                let num = parse_integer(num, base)?;
                let den = match den.as_bytes().first() {
                    Some(b'+') | Some(b'-') => {
                        let digit = den.chars().next().unwrap_or('/');
                        return Err(Error::InvalidDigit { digit, position: val.len() - den.len(), base });
                    }
                    _ => parse_integer(den, base).map_err(|err| match err {
                        Error::InvalidDigit { digit, position, base } => Error::InvalidDigit {
                            digit,
                            position: position + val.len() - den.len(),
                            base,
                        },
                        other => other,
                    })?,
                };
                MpQ::from_ratio(num, den)
            }
            None => parse_integer(val, base).map(MpQ::from),
        }
    }
    pub fn as_rational(&self) -> &Rational {
        &self.inner
    }
    pub fn into_rational(self) -> Rational {
        self.inner
    }
    pub fn to_big_rational(&self) -> BigRational {
        let (num, den) = (self.inner.numer(), self.inner.denom());
        // already in lowest terms
        BigRational::new_raw(integer_to_bigint(num), integer_to_bigint(den))
    }
}

impl From<Rational> for MpQ {
    fn from(inner: Rational) -> Self {
        MpQ { inner }
    }
}

impl From<&MpZ> for MpQ {
    fn from(val: &MpZ) -> Self {
        MpQ { inner: Rational::from(val.as_integer()) }
    }
}

impl From<MpZ> for MpQ {
    fn from(val: MpZ) -> Self {
        MpQ { inner: Rational::from(val.into_integer()) }
    }
}

impl From<Integer> for MpQ {
    fn from(val: Integer) -> Self {
        MpQ { inner: Rational::from(val) }
    }
}

macro_rules! impl_primitive_to_mpq {
    ($($t: ty),*) => {
    $(
    impl From<$t> for MpQ {
        fn from(val: $t) -> Self {
            MpQ { inner: Rational::from(val) }
        }
    }
    )*
    };
}
impl_primitive_to_mpq!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl TryFrom<&BigRational> for MpQ {
    type Error = Error;

    fn try_from(val: &BigRational) -> Result<Self> {
        if val.denom().is_zero() {
            return Err(Error::DivisionByZero);
        }
        let num = bigint_to_integer(val.numer());
        let den = bigint_to_integer(val.denom());
        Ok(MpQ { inner: Rational::from((num, den)) })
    }
}

impl TryFrom<BigRational> for MpQ {
    type Error = Error;

    fn try_from(val: BigRational) -> Result<Self> {
        MpQ::try_from(&val)
    }
}

impl From<&MpQ> for BigRational {
    fn from(val: &MpQ) -> Self {
        val.to_big_rational()
    }
}

impl From<MpQ> for BigRational {
    fn from(val: MpQ) -> Self {
        val.to_big_rational()
    }
}

impl FromStr for MpQ {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MpQ::from_str_radix(s, 10)
    }
}

// 实现四则运算
impl MpQ {
    pub fn add_mut<T: RationalOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_rational_arg() {
            RationalArg::Ratio(v) => self.inner += &*v,
            RationalArg::Int(v) => self.inner += &*v,
        }
        self
    }
    pub fn sub_mut<T: RationalOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_rational_arg() {
            RationalArg::Ratio(v) => self.inner -= &*v,
            RationalArg::Int(v) => self.inner -= &*v,
        }
        self
    }
    pub fn mul_mut<T: RationalOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_rational_arg() {
            RationalArg::Ratio(v) => self.inner *= &*v,
            RationalArg::Int(v) => self.inner *= &*v,
        }
        self
    }
    pub fn div_mut<T: RationalOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        match rhs.to_rational_arg() {
            RationalArg::Ratio(v) if v.cmp0() == Ordering::Equal => {
                return Err(reject("div_mut", Error::DivisionByZero));
            }
            RationalArg::Int(v) if v.cmp0() == Ordering::Equal => {
                return Err(reject("div_mut", Error::DivisionByZero));
            }
            RationalArg::Ratio(v) => self.inner /= &*v,
            RationalArg::Int(v) => self.inner /= &*v,
        }
        Ok(self)
    }
    pub fn neg_mut(&mut self) -> &mut Self {
        self.inner.neg_assign();
        self
    }
    pub fn abs_mut(&mut self) -> &mut Self {
        self.inner.abs_mut();
        self
    }
    /// Reciprocal. Zero has none and fails with a division by zero.
    pub fn inv_mut(&mut self) -> Result<&mut Self> {
        if self.is_zero() {
            return Err(reject("inv_mut", Error::DivisionByZero));
        }
        self.inner.recip_mut();
        Ok(self)
    }
    pub fn pow_mut(&mut self, exp: i32) -> Result<&mut Self> {
        if exp < 0 && self.is_zero() {
            return Err(reject("pow_mut", Error::DivisionByZero));
        }
        self.inner.pow_assign(exp);
        Ok(self)
    }
    pub fn floor_mut(&mut self) -> &mut Self {
        self.inner.floor_mut();
        self
    }
    pub fn ceil_mut(&mut self) -> &mut Self {
        self.inner.ceil_mut();
        self
    }
    pub fn trunc_mut(&mut self) -> &mut Self {
        self.inner.trunc_mut();
        self
    }
}

// 杂项查询
impl MpQ {
    /// A fresh copy, later changes to `self` do not show through.
    pub fn numerator(&self) -> MpZ {
        MpZ::from(self.inner.numer().clone())
    }
    pub fn denominator(&self) -> MpZ {
        MpZ::from(self.inner.denom().clone())
    }
    pub fn sign(&self) -> Ordering {
        self.inner.cmp0()
    }
    pub fn is_zero(&self) -> bool {
        self.inner.cmp0() == Ordering::Equal
    }
    pub fn is_integer(&self) -> bool {
        *self.inner.denom() == 1
    }
    pub fn to_f64(&self) -> f64 {
        self.inner.to_f64()
    }
}

// 实现打印
impl MpQ {
    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        self.to_string_with(&RadixFormat::new(base))
    }
    /// `min_digits` pads the numerator only.
    pub fn to_string_with(&self, format: &RadixFormat) -> Result<String> {
        let mut s = format_integer(self.inner.numer(), format)?;
        if !self.is_integer() {
            s.push('/');
            let den_format = format.with_min_digits(0);
            s.push_str(&format_integer(self.inner.denom(), &den_format)?);
        }
        Ok(s)
    }
}

impl fmt::Display for MpQ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.to_string_radix(10).map_err(|_| fmt::Error)?;
        f.pad(&s)
    }
}

// 实现运算符
impl<T: RationalOperand> AddAssign<T> for MpQ {
    fn add_assign(&mut self, rhs: T) {
        self.add_mut(rhs);
    }
}

impl<T: RationalOperand> SubAssign<T> for MpQ {
    fn sub_assign(&mut self, rhs: T) {
        self.sub_mut(rhs);
    }
}

impl<T: RationalOperand> MulAssign<T> for MpQ {
    fn mul_assign(&mut self, rhs: T) {
        self.mul_mut(rhs);
    }
}

impl Neg for MpQ {
    type Output = MpQ;

    fn neg(mut self) -> MpQ {
        self.neg_mut();
        self
    }
}

// 实现大小比较
impl MpQ {
    pub fn cmp_with<T: RationalOperand>(&self, rhs: T) -> Ordering {
        match rhs.to_rational_arg() {
            RationalArg::Ratio(v) => self.inner.cmp(&*v),
            RationalArg::Int(v) => self.inner.partial_cmp(&*v).unwrap_or(Ordering::Equal),
        }
    }
}

macro_rules! impl_cmp_primitive {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for MpQ {
        fn eq(&self, other: &$t) -> bool {
            self.inner == *other
        }
    }
    impl PartialEq<MpQ> for $t {
        fn eq(&self, other: &MpQ) -> bool {
            other.inner == *self
        }
    }
    impl PartialOrd<$t> for MpQ {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            self.inner.partial_cmp(other)
        }
    }
    impl PartialOrd<MpQ> for $t {
        fn partial_cmp(&self, other: &MpQ) -> Option<Ordering> {
            other.inner.partial_cmp(self).map(Ordering::reverse)
        }
    }
    )*
    };
}
impl_cmp_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_cmp_operand {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for MpQ {
        fn eq(&self, other: &$t) -> bool {
            self.cmp_with(other) == Ordering::Equal
        }
    }
    impl PartialOrd<$t> for MpQ {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            Some(self.cmp_with(other))
        }
    }
    impl PartialEq<MpQ> for $t {
        fn eq(&self, other: &MpQ) -> bool {
            other.cmp_with(self) == Ordering::Equal
        }
    }
    impl PartialOrd<MpQ> for $t {
        fn partial_cmp(&self, other: &MpQ) -> Option<Ordering> {
            Some(other.cmp_with(self).reverse())
        }
    }
    )*
    };
}
impl_cmp_operand!(MpZ, BigInt);

// a BigRational built with `new_raw(_, 0)` is unordered
impl PartialEq<BigRational> for MpQ {
    fn eq(&self, other: &BigRational) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd<BigRational> for MpQ {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> {
        MpQ::try_from(other).ok().map(|other| self.inner.cmp(&other.inner))
    }
}

impl PartialEq<MpQ> for BigRational {
    fn eq(&self, other: &MpQ) -> bool {
        other == self
    }
}

impl PartialOrd<MpQ> for BigRational {
    fn partial_cmp(&self, other: &MpQ) -> Option<Ordering> {
        other.partial_cmp(self).map(Ordering::reverse)
    }
}

#[cfg(test)]
fn q(num: i64, den: i64) -> MpQ {
    MpQ::from_ratio(num, den).unwrap()
}

#[cfg(test)]
fn assert_canonical(val: &MpQ) {
    let mut gcd = val.numerator();
    gcd.gcd_mut(&val.denominator());
    assert!(val.is_zero() || gcd == 1, "{} is not reduced", val);
    assert!(val.denominator() > 0, "{} has a non-positive denominator", val);
}

#[test]
fn test_construct() {
    assert_eq!(q(6, -4).to_string(), "-3/2");
    assert_eq!(q(0, -4).to_string(), "0");
    assert_eq!(MpQ::from(7).to_string(), "7");
    assert_eq!(MpQ::from_ratio(1, 0), Err(Error::DivisionByZero));
    assert_eq!(MpQ::from_ratio(&MpZ::from(10), &MpZ::from(4)).unwrap(), q(5, 2));
    assert_eq!(MpQ::from_f64(0.375).unwrap(), q(3, 8));
    assert_eq!(MpQ::from_f64(f64::NAN).unwrap_err().kind(), crate::ErrorKind::InvalidInput);
    assert_canonical(&q(6, -4));
}

#[test]
fn test_arithmetic_stays_canonical() {
    let mut val = q(1, 3);
    assert_eq!(val.add_mut(&q(1, 6)), &q(1, 2));
    assert_canonical(&val);
    val.sub_mut(&q(5, 6));
    assert_eq!(val, q(-1, 3));
    assert_canonical(&val);
    val.mul_mut(-6);
    assert_eq!(val, 2);
    assert!(val.is_integer());
    val.div_mut(&MpZ::from(8)).unwrap();
    assert_eq!(val, q(1, 4));
    val.add_mut(BigInt::from(1)).neg_mut();
    assert_eq!(val, q(-5, 4));
    assert_canonical(&val);
    val.abs_mut().inv_mut().unwrap();
    assert_eq!(val, q(4, 5));
    val.pow_mut(-2).unwrap();
    assert_eq!(val, q(25, 16));
    assert_canonical(&val);
}

#[test]
fn test_zero_divisors() {
    let mut val = q(3, 7);
    assert_eq!(val.div_mut(&MpQ::new()), Err(Error::DivisionByZero));
    assert_eq!(val.div_mut(0), Err(Error::DivisionByZero));
    assert_eq!(val, q(3, 7));
    let mut zero = MpQ::new();
    assert_eq!(zero.inv_mut(), Err(Error::DivisionByZero));
    assert_eq!(zero.pow_mut(-1), Err(Error::DivisionByZero));
    assert_eq!(zero.pow_mut(0).unwrap(), &1);
}

#[test]
fn test_rounding() {
    let mut val = q(-7, 2);
    assert_eq!(val.clone().floor_mut(), &-4);
    assert_eq!(val.clone().ceil_mut(), &-3);
    assert_eq!(val.trunc_mut(), &-3);
}

#[test]
fn test_parts_are_copies() {
    let mut val = q(3, 4);
    let mut num = val.numerator();
    num.add_mut(100);
    assert_eq!(val.numerator(), 3);
    val.mul_mut(2);
    assert_eq!(num, 103);
    assert_eq!(val.denominator(), 2);
}

#[test]
fn test_strings() {
    assert_eq!("-10/4".parse::<MpQ>().unwrap(), q(-5, 2));
    assert_eq!(MpQ::from_str_radix("ff/10", 16).unwrap(), q(255, 16));
    assert_eq!(q(-255, 16).to_string_radix(16).unwrap(), "-ff/10");
    assert_eq!(q(61, 62).to_string_radix(62).unwrap(), "z/10");
    assert_eq!(MpQ::from_str_radix("1/0", 10), Err(Error::DivisionByZero));
    assert_eq!(
        MpQ::from_str_radix("1/-2", 10),
        Err(Error::InvalidDigit { digit: '-', position: 2, base: 10 })
    );
    assert_eq!(
        MpQ::from_str_radix("12/3x", 10),
        Err(Error::InvalidDigit { digit: 'x', position: 4, base: 10 })
    );
    assert_eq!(format!("{:>6}", q(1, 2)), "   1/2");
}

#[test]
fn test_big_rational() {
    let big = BigRational::new(BigInt::from(-6), BigInt::from(8));
    let val = MpQ::try_from(&big).unwrap();
    assert_eq!(val, q(-3, 4));
    assert_eq!(val.to_big_rational(), big);
    assert_eq!(val, big);
    let broken = BigRational::new_raw(BigInt::from(1), BigInt::from(0));
    assert_eq!(MpQ::try_from(&broken), Err(Error::DivisionByZero));
    assert_eq!(val.partial_cmp(&broken), None);
}

#[test]
fn test_comparison() {
    let val = q(7, 2);
    assert!(val > 3);
    assert!(val < 4u8);
    assert!(val > MpZ::from(3));
    assert!(BigInt::from(4) > val);
    assert!(val < BigRational::new(BigInt::from(15), BigInt::from(4)));
    assert_eq!(val.cmp_with(&q(14, 4)), Ordering::Equal);
    assert_eq!(q(6, 3), MpZ::from(2));
}

#[test]
fn test_operators() {
    let mut val = q(1, 2);
    val += &q(1, 3);
    val -= 1;
    val *= &MpZ::from(6);
    assert_eq!(val, -1);
    assert_eq!(-val, 1);
}
