//! # MpF
//! Mutable arbitrary-precision binary floats.
//!
//! Each value carries its own precision, there is no global default to race
//! on. Operands of another kind are promoted to a temporary float first:
//! integers exactly, everything else rounded to the receiver's precision.
//! NaN and infinities are never stored.
//!
//! # Example
//! ```
//! use mp_num::{FloatConfig, MpF};
//!
//! let config = FloatConfig::new().with_precision(128);
//! let mut f = MpF::new(&config).unwrap();
//! f.add_mut(1).unwrap().div_mut(3).unwrap();
//! assert_eq!(f.prec(), 128);
//! assert!(f.to_string().starts_with("0.3333333333"));
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use log::{debug, trace};
use num_bigint::BigInt;
use num_traits::Zero;
use rug::float::Round;
use rug::ops::{NegAssign, Pow};
use rug::{Float, Integer, Rational};

use crate::config::{check_precision, FloatConfig};
use crate::constants::*;
use crate::error::{DomainError, Error, Result};
use crate::float_format::format_decimal;
use crate::mpq::MpQ;
use crate::mpz::{bigint_to_integer, integer_to_bigint, MpZ};

#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub struct MpF {
    inner: Float,
}

/// Anything an [`MpF`] can be combined with.
pub trait FloatOperand {
    /// `prec` is the receiver's precision, used for operands that are not
    /// exactly representable.
    fn to_float(&self, prec: u32) -> Result<Cow<'_, Float>>;
}

impl FloatOperand for MpF {
    fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Borrowed(&self.inner))
    }
}

impl FloatOperand for Float {
    fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
        if !self.is_finite() {
            return Err(Error::NonFinite(self.to_f64()));
        }
        Ok(Cow::Borrowed(self))
    }
}

impl FloatOperand for Integer {
    fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Owned(exact_float(self)))
    }
}

impl FloatOperand for MpZ {
    fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Owned(exact_float(self.as_integer())))
    }
}

impl FloatOperand for BigInt {
    fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Owned(exact_float(&bigint_to_integer(self))))
    }
}

impl FloatOperand for Rational {
    fn to_float(&self, prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Owned(Float::with_val(prec, self)))
    }
}

impl FloatOperand for MpQ {
    fn to_float(&self, prec: u32) -> Result<Cow<'_, Float>> {
        Ok(Cow::Owned(Float::with_val(prec, self.as_rational())))
    }
}

impl FloatOperand for BigDecimal {
    fn to_float(&self, prec: u32) -> Result<Cow<'_, Float>> {
        decimal_to_float(self, prec).map(Cow::Owned)
    }
}

impl<T: FloatOperand + ?Sized> FloatOperand for &T {
    fn to_float(&self, prec: u32) -> Result<Cow<'_, Float>> {
        (**self).to_float(prec)
    }
}

macro_rules! impl_native_operand {
    ($bits: expr => $($t: ty),*) => {
    $(
    impl FloatOperand for $t {
        fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
            Ok(Cow::Owned(Float::with_val($bits, *self)))
        }
    }
    )*
    };
}
impl_native_operand!(64 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_native_operand!(128 => i128, u128);

macro_rules! impl_native_float_operand {
    ($($t: ty => $bits: expr),*) => {
    $(
    impl FloatOperand for $t {
        fn to_float(&self, _prec: u32) -> Result<Cow<'_, Float>> {
            if !self.is_finite() {
                return Err(Error::NonFinite(f64::from(*self)));
            }
            Ok(Cow::Owned(Float::with_val($bits, *self)))
        }
    }
    )*
    };
}
impl_native_float_operand!(f32 => 24, f64 => 53);

/// A float wide enough to hold `val` without rounding.
fn exact_float(val: &Integer) -> Float {
    Float::with_val(val.significant_bits().max(rug::float::prec_min()), val)
}

fn decimal_to_float(val: &BigDecimal, prec: u32) -> Result<Float> {
    // val == digits * 10^-scale
    let (digits, scale) = val.as_bigint_and_exponent();
    let digits = bigint_to_integer(&digits);
    let power = u32::try_from(scale.unsigned_abs()).map_err(|_| Error::Overflow { target: "MpF" })?;
    let power = Integer::from(Integer::u_pow_u(10, power));
    if scale <= 0 {
        Ok(Float::with_val(prec, &(digits * power)))
    } else {
        Ok(Float::with_val(prec, &Rational::from((digits, power))))
    }
}

fn reject(op: &str, err: Error) -> Error {
    debug!("MpF::{} rejected: {}", op, err);
    err
}

fn operand<'a, T: FloatOperand + ?Sized>(op: &str, rhs: &'a T, prec: u32) -> Result<Cow<'a, Float>> {
    let val = rhs.to_float(prec).map_err(|err| reject(op, err))?;
    if let Cow::Owned(ref promoted) = val {
        trace!("MpF::{} promoted operand to {} bits", op, promoted.prec());
    }
    Ok(val)
}

// 实现构造
impl MpF {
    /// Zero at the configured precision.
    pub fn new(config: &FloatConfig) -> Result<Self> {
        MpF::with_prec(config.precision)
    }
    pub fn with_prec(prec: u32) -> Result<Self> {
        check_precision(prec)?;
        Ok(MpF { inner: Float::new(prec) })
    }
    /// Rounds `val` to `prec` bits. Fails for non-finite inputs.
    pub fn from_value<T: FloatOperand>(val: T, prec: u32) -> Result<Self> {
        check_precision(prec)?;
        let val = val.to_float(prec)?;
        let inner = Float::with_val(prec, &*val);
        if !inner.is_finite() {
            return Err(Error::Overflow { target: "MpF" });
        }
        Ok(MpF { inner })
    }
    pub fn parse(val: &str, prec: u32) -> Result<Self> {
        MpF::parse_radix(val, 10, prec)
    }
    /// Accepts the digits of `radix` (2 to 36), a point and an exponent.
    pub fn parse_radix(val: &str, radix: u32, prec: u32) -> Result<Self> {
        check_precision(prec)?;
        if !(MIN_BASE..=MAX_CASELESS_BASE).contains(&radix) {
            return Err(Error::InvalidBase(radix));
        }
        let parsed = Float::parse_radix(val, radix as i32).map_err(|_| Error::InvalidFloat(val.to_string()))?;
        let inner = Float::with_val(prec, parsed);
        if !inner.is_finite() {
            return Err(Error::InvalidFloat(val.to_string()));
        }
        Ok(MpF { inner })
    }
    pub fn as_float(&self) -> &Float {
        &self.inner
    }
    pub fn into_float(self) -> Float {
        self.inner
    }
}

impl Default for MpF {
    fn default() -> Self {
        MpF { inner: Float::new(DEFAULT_PRECISION) }
    }
}

impl TryFrom<Float> for MpF {
    type Error = Error;

    fn try_from(inner: Float) -> Result<Self> {
        if !inner.is_finite() {
            return Err(Error::NonFinite(inner.to_f64()));
        }
        Ok(MpF { inner })
    }
}

impl TryFrom<f64> for MpF {
    type Error = Error;

    fn try_from(val: f64) -> Result<Self> {
        MpF::from_value(val, DEFAULT_PRECISION)
    }
}

impl FromStr for MpF {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MpF::parse(s, DEFAULT_PRECISION)
    }
}

// 实现精度
impl MpF {
    pub fn prec(&self) -> u32 {
        self.inner.prec()
    }
    /// Reallocates and rounds to nearest. Rounding up past the largest
    /// exponent is an overflow.
    pub fn set_prec(&mut self, prec: u32) -> Result<&mut Self> {
        check_precision(prec).map_err(|err| reject("set_prec", err))?;
        trace!("MpF precision {} -> {} bits", self.inner.prec(), prec);
        let mut result = self.inner.clone();
        result.set_prec(prec);
        self.store("set_prec", result)
    }
}

// 实现四则运算
//
// Results are computed into a fresh float at the receiver's precision and
// only stored when finite, so an overflow leaves the receiver as it was.
// Underflow rounds toward zero and is kept.
impl MpF {
    fn store(&mut self, op: &str, result: Float) -> Result<&mut Self> {
        if !result.is_finite() {
            return Err(reject(op, Error::Overflow { target: "MpF" }));
        }
        self.inner = result;
        Ok(self)
    }
    pub fn add_mut<T: FloatOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let rhs = operand("add_mut", &rhs, self.prec())?;
        let result = Float::with_val(self.prec(), &self.inner + &*rhs);
        self.store("add_mut", result)
    }
    pub fn sub_mut<T: FloatOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let rhs = operand("sub_mut", &rhs, self.prec())?;
        let result = Float::with_val(self.prec(), &self.inner - &*rhs);
        self.store("sub_mut", result)
    }
    pub fn mul_mut<T: FloatOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let rhs = operand("mul_mut", &rhs, self.prec())?;
        let result = Float::with_val(self.prec(), &self.inner * &*rhs);
        self.store("mul_mut", result)
    }
    pub fn div_mut<T: FloatOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let rhs = operand("div_mut", &rhs, self.prec())?;
        if rhs.is_zero() {
            return Err(reject("div_mut", Error::DivisionByZero));
        }
        let result = Float::with_val(self.prec(), &self.inner / &*rhs);
        self.store("div_mut", result)
    }
    pub fn pow_mut<T: FloatOperand>(&mut self, exp: T) -> Result<&mut Self> {
        let exp = operand("pow_mut", &exp, self.prec())?;
        if self.inner.is_zero() && exp.cmp0() == Some(Ordering::Less) {
            return Err(reject("pow_mut", DomainError::ZeroToNegativePower.into()));
        }
        if self.inner.cmp0() == Some(Ordering::Less) && !exp.is_integer() {
            return Err(reject("pow_mut", DomainError::ComplexResult.into()));
        }
        let result = Float::with_val(self.prec(), (&self.inner).pow(&*exp));
        self.store("pow_mut", result)
    }
    pub fn sqrt_mut(&mut self) -> Result<&mut Self> {
        if self.inner.cmp0() == Some(Ordering::Less) {
            return Err(reject("sqrt_mut", DomainError::NegativeSqrt.into()));
        }
        self.inner.sqrt_mut();
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
    /// Halfway cases round away from zero.
    pub fn round_mut(&mut self) -> &mut Self {
        self.inner.round_mut();
        self
    }
    /// Multiplies by `2^n`. Values pushed below the exponent range become zero.
    pub fn scale_2exp_mut(&mut self, n: i32) -> Result<&mut Self> {
        if let Some(exp) = self.inner.get_exp() {
            if i64::from(exp) + i64::from(n) > i64::from(rug::float::exp_max()) {
                return Err(reject("scale_2exp_mut", Error::Overflow { target: "MpF" }));
            }
        }
        self.inner <<= n;
        Ok(self)
    }
}

// 杂项查询
impl MpF {
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
    pub fn is_integer(&self) -> bool {
        self.inner.is_integer()
    }
    pub fn sign(&self) -> Ordering {
        self.inner.cmp0().unwrap_or(Ordering::Equal)
    }
}

// 实现类型转换
impl MpF {
    fn trunc_integer(&self, target: &'static str) -> Result<Integer> {
        self.inner
            .to_integer_round(Round::Zero)
            .map(|(i, _)| i)
            .ok_or(Error::Overflow { target })
    }
    /// Truncates toward zero.
    pub fn to_i64(&self) -> Result<i64> {
        self.trunc_integer("i64")?.to_i64().ok_or(Error::Overflow { target: "i64" })
    }
    pub fn to_u64(&self) -> Result<u64> {
        self.trunc_integer("u64")?.to_u64().ok_or(Error::Overflow { target: "u64" })
    }
    /// Truncates toward zero and keeps the low 64 bits.
    pub fn to_i64_unchecked(&self) -> i64 {
        self.to_mpz().to_i64_wrapping()
    }
    pub fn to_u64_unchecked(&self) -> u64 {
        self.to_mpz().to_u64_wrapping()
    }
    pub fn to_f64(&self) -> f64 {
        self.inner.to_f64()
    }
    /// Truncates toward zero.
    pub fn to_mpz(&self) -> MpZ {
        // every stored value is finite, so the conversion always succeeds
        let int = self.inner.to_integer_round(Round::Zero).map(|(i, _)| i);
        MpZ::from(int.unwrap_or_default())
    }
    /// Exact, a binary float is always a dyadic rational.
    pub fn to_mpq(&self) -> MpQ {
        let mut ratio = Rational::new();
        if let Some((mantissa, exp)) = self.inner.to_integer_exp() {
            ratio = Rational::from(mantissa);
            ratio <<= exp;
        }
        MpQ::from(ratio)
    }
    /// Exact, every binary fraction has a finite decimal expansion.
    pub fn to_big_decimal(&self) -> BigDecimal {
        let (mantissa, exp) = match self.inner.to_integer_exp() {
            Some(parts) if !self.inner.is_zero() => parts,
            _ => return BigDecimal::zero(),
        };
        if exp >= 0 {
            BigDecimal::new(integer_to_bigint(&(mantissa << exp as u32)), 0)
        } else {
            // m * 2^-k == m * 5^k / 10^k
            let k = exp.unsigned_abs();
            let scaled = mantissa * Integer::from(Integer::u_pow_u(5, k));
            BigDecimal::new(integer_to_bigint(&scaled), i64::from(k))
        }
    }
}

impl From<&MpF> for MpQ {
    fn from(val: &MpF) -> Self {
        val.to_mpq()
    }
}

// 实现打印
impl MpF {
    pub fn to_string_with(&self, config: &FloatConfig) -> String {
        format_decimal(&self.inner, config)
    }
    /// Raw digits in `radix` with an `@`/`e` exponent, `num_digits` of `None`
    /// prints enough digits to round-trip.
    pub fn to_string_radix(&self, radix: u32, num_digits: Option<usize>) -> Result<String> {
        if !(MIN_BASE..=MAX_CASELESS_BASE).contains(&radix) {
            return Err(Error::InvalidBase(radix));
        }
        Ok(self.inner.to_string_radix(radix as i32, num_digits))
    }
}

impl fmt::Display for MpF {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format_decimal(&self.inner, &FloatConfig::default()))
    }
}

// 实现大小比较
macro_rules! impl_cmp_float {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for MpF {
        fn eq(&self, other: &$t) -> bool {
            self.inner == *other
        }
    }
    impl PartialEq<MpF> for $t {
        fn eq(&self, other: &MpF) -> bool {
            other.inner == *self
        }
    }
    impl PartialOrd<$t> for MpF {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            self.inner.partial_cmp(other)
        }
    }
    impl PartialOrd<MpF> for $t {
        fn partial_cmp(&self, other: &MpF) -> Option<Ordering> {
            other.inner.partial_cmp(self).map(Ordering::reverse)
        }
    }
    )*
    };
}
impl_cmp_float!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl PartialEq<MpZ> for MpF {
    fn eq(&self, other: &MpZ) -> bool {
        self.inner == *other.as_integer()
    }
}

impl PartialOrd<MpZ> for MpF {
    fn partial_cmp(&self, other: &MpZ) -> Option<Ordering> {
        self.inner.partial_cmp(other.as_integer())
    }
}

impl PartialEq<MpQ> for MpF {
    fn eq(&self, other: &MpQ) -> bool {
        self.inner == *other.as_rational()
    }
}

impl PartialOrd<MpQ> for MpF {
    fn partial_cmp(&self, other: &MpQ) -> Option<Ordering> {
        self.inner.partial_cmp(other.as_rational())
    }
}

#[cfg(test)]
fn f(val: f64) -> MpF {
    MpF::from_value(val, 64).unwrap()
}

#[test]
fn test_construct() {
    let zero = MpF::new(&FloatConfig::default()).unwrap();
    assert!(zero.is_zero());
    assert_eq!(zero.prec(), DEFAULT_PRECISION);
    assert_eq!(MpF::with_prec(0).unwrap_err(), Error::InvalidPrecision(0));
    assert_eq!(MpF::new(&FloatConfig::new().with_precision(0)).unwrap_err(), Error::InvalidPrecision(0));
    assert_eq!(MpF::from_value(f64::NAN, 64).unwrap_err().kind(), crate::ErrorKind::InvalidInput);
    assert_eq!(MpF::from_value(f64::INFINITY, 64).unwrap_err(), Error::NonFinite(f64::INFINITY));
    assert_eq!(MpF::from_value(&MpZ::from(7), 8).unwrap(), 7);
    assert_eq!(MpF::from_value(&MpQ::from_ratio(1, 4).unwrap(), 8).unwrap(), 0.25);
    assert_eq!(MpF::from_value(u64::MAX, 8).unwrap(), 2f64.powi(64));
    assert!(MpF::try_from(Float::with_val(53, f64::NAN)).is_err());
}

#[test]
fn test_parse() {
    assert_eq!(MpF::parse("1.5e3", 64).unwrap(), 1500);
    assert_eq!("-0.25".parse::<MpF>().unwrap(), -0.25);
    assert_eq!(MpF::parse_radix("ff.8", 16, 64).unwrap(), 255.5);
    assert_eq!(MpF::parse("inf", 64).unwrap_err(), Error::InvalidFloat("inf".into()));
    assert_eq!(MpF::parse("nan", 64).unwrap_err(), Error::InvalidFloat("nan".into()));
    assert_eq!(MpF::parse("1.2.3", 64).unwrap_err(), Error::InvalidFloat("1.2.3".into()));
    assert_eq!(MpF::parse_radix("1", 62, 64).unwrap_err(), Error::InvalidBase(62));
}

#[test]
fn test_precision() {
    let mut val = MpF::from_value(1, 128).unwrap();
    val.div_mut(3).unwrap();
    let wide = val.clone();
    val.set_prec(24).unwrap();
    assert_eq!(val.prec(), 24);
    assert_eq!(val, 1f32 / 3f32);
    assert_ne!(val, wide);
    assert_eq!(val.set_prec(0).unwrap_err(), Error::InvalidPrecision(0));
    assert_eq!(val.prec(), 24);
}

#[test]
fn test_arithmetic() {
    let mut val = f(1.5);
    val.add_mut(2).unwrap()
        .mul_mut(&MpZ::from(4)).unwrap()
        .sub_mut(0.5).unwrap()
        .div_mut(&MpQ::from_ratio(1, 2).unwrap()).unwrap();
    assert_eq!(val, 27);
    val.add_mut(&BigInt::from(3)).unwrap();
    assert_eq!(val, 30);
    val.sub_mut("0.5".parse::<BigDecimal>().unwrap()).unwrap();
    assert_eq!(val, 29.5);
    val.neg_mut();
    assert_eq!(val, -29.5);
    val.abs_mut().sqrt_mut().unwrap();
    assert!((val.to_f64() - 29.5f64.sqrt()).abs() < 1e-15);
}

#[test]
fn test_failures_keep_receiver() {
    let mut val = f(2.0);
    assert_eq!(val.div_mut(0).unwrap_err(), Error::DivisionByZero);
    assert_eq!(val.div_mut(&MpF::default()).unwrap_err(), Error::DivisionByZero);
    assert!(matches!(val.add_mut(f64::NAN).unwrap_err(), Error::NonFinite(x) if x.is_nan()));
    assert_eq!(val.mul_mut(f64::INFINITY).unwrap_err(), Error::NonFinite(f64::INFINITY));
    assert_eq!(val, 2);
    let mut neg = f(-8.0);
    assert_eq!(neg.sqrt_mut().unwrap_err(), Error::Domain(DomainError::NegativeSqrt));
    assert_eq!(neg.pow_mut(0.5).unwrap_err(), Error::Domain(DomainError::ComplexResult));
    assert_eq!(neg, -8);
    let mut zero = MpF::default();
    assert_eq!(zero.pow_mut(-1).unwrap_err(), Error::Domain(DomainError::ZeroToNegativePower));
    assert!(zero.is_zero());
}

#[cfg(test)]
fn huge() -> MpF {
    // 2^(emax - 1), one doubling away from the top of the exponent range
    let mut val = f(1.0);
    val.scale_2exp_mut(rug::float::exp_max() - 1).unwrap();
    val
}

#[cfg(test)]
fn tiny() -> MpF {
    // 2^(emin - 1), the smallest positive value
    let mut val = f(1.0);
    val.scale_2exp_mut(rug::float::exp_min() - 1).unwrap();
    val
}

#[test]
fn test_overflow_keeps_receiver() {
    let mut val = huge();
    let before = val.clone();
    assert_eq!(val.mul_mut(&before).unwrap_err(), Error::Overflow { target: "MpF" });
    assert_eq!(val.add_mut(&before).unwrap_err(), Error::Overflow { target: "MpF" });
    let mut negated = before.clone();
    negated.neg_mut();
    assert_eq!(val.sub_mut(&negated).unwrap_err(), Error::Overflow { target: "MpF" });
    assert_eq!(val.div_mut(0.5).unwrap_err(), Error::Overflow { target: "MpF" });
    assert_eq!(val, before);
    assert!(val.as_float().is_finite());

    let mut one = f(1.0);
    assert_eq!(one.div_mut(&tiny()).unwrap_err(), Error::Overflow { target: "MpF" });
    assert_eq!(one, 1);

    // halving stays in range
    val.div_mut(2).unwrap();
    assert!(val.as_float().is_finite());
    assert!(val < before);
}

#[test]
fn test_underflow_rounds_to_zero() {
    let mut val = tiny();
    val.mul_mut(&tiny()).unwrap();
    assert!(val.as_float().is_finite());
    assert!(val.is_zero() || val <= tiny());
    let mut val = tiny();
    val.div_mut(&huge()).unwrap();
    assert!(val.as_float().is_finite());
    assert!(val.sign() != Ordering::Less);
}

#[test]
fn test_conversions_of_extremes() {
    let val = huge();
    assert_eq!(val.to_i64(), Err(Error::Overflow { target: "i64" }));
    assert_eq!(val.to_u64(), Err(Error::Overflow { target: "u64" }));
    let mut neg = huge();
    neg.neg_mut();
    assert_eq!(neg.to_i64(), Err(Error::Overflow { target: "i64" }));
    assert_eq!(tiny().to_mpz(), 0);
    assert_eq!(tiny().to_i64(), Ok(0));
    assert_eq!(f(-6.75).to_mpq(), MpQ::from_ratio(-27, 4).unwrap());
    assert_eq!(f(-6.75).to_mpz(), -6);
}

#[test]
fn test_pow() {
    let mut val = f(-2.0);
    assert_eq!(val.pow_mut(3).unwrap(), &-8);
    let mut val = f(4.0);
    assert_eq!(val.pow_mut(-0.5).unwrap(), &0.5);
    let mut val = f(1e300);
    assert_eq!(val.pow_mut(i64::MAX).unwrap_err(), Error::Overflow { target: "MpF" });
    assert_eq!(val, 1e300);
}

#[test]
fn test_rounding() {
    assert_eq!(f(-2.5).floor_mut(), &-3);
    assert_eq!(f(-2.5).ceil_mut(), &-2);
    assert_eq!(f(-2.5).trunc_mut(), &-2);
    assert_eq!(f(-2.5).round_mut(), &-3);
    assert_eq!(f(3.0).scale_2exp_mut(4).unwrap(), &48);
    assert_eq!(f(3.0).scale_2exp_mut(-1).unwrap(), &1.5);
    assert_eq!(f(3.0).scale_2exp_mut(i32::MAX).unwrap_err(), Error::Overflow { target: "MpF" });
}

#[test]
fn test_conversions() {
    assert_eq!(f(-7.9).to_i64(), Ok(-7));
    assert_eq!(f(-7.9).to_u64(), Err(Error::Overflow { target: "u64" }));
    assert_eq!(f(-1.0).to_u64_unchecked(), u64::MAX);
    let huge = MpF::from_value(2, 64).unwrap().pow_mut(70).unwrap().clone();
    assert_eq!(huge.to_i64(), Err(Error::Overflow { target: "i64" }));
    assert_eq!(huge.to_i64_unchecked(), 0);
    assert_eq!(f(6.75).to_mpz(), 6);
    assert_eq!(f(6.75).to_mpq(), MpQ::from_ratio(27, 4).unwrap());
    assert_eq!(MpQ::from(&f(-0.5)), MpQ::from_ratio(-1, 2).unwrap());
    assert_eq!(f(6.75).to_big_decimal(), "6.75".parse::<BigDecimal>().unwrap());
    assert_eq!(f(1024.0).to_big_decimal(), BigDecimal::from(1024));
    assert_eq!(f(0.0).to_big_decimal(), BigDecimal::zero());
    assert_eq!(f(0.1).to_f64(), 0.1);
}

#[test]
fn test_display() {
    assert_eq!(f(1.5).to_string(), "1.5");
    assert_eq!(f(1e20).to_string(), "1.0e+20");
    assert!(f(255.5).to_string_radix(16, None).unwrap().starts_with("ff.8"));
    assert_eq!(f(0.75).to_string_radix(2, Some(2)).unwrap(), "0.11");
    assert_eq!(f(1.0).to_string_radix(37, None), Err(Error::InvalidBase(37)));
    let config = FloatConfig::new().with_plain_window(0, 2);
    assert_eq!(f(150.0).to_string_with(&config), "1.5e+2");
}

#[test]
fn test_comparison() {
    let val = f(2.5);
    assert!(val > 2);
    assert!(val < 3u8);
    assert!(val > MpZ::from(2));
    assert!(val < MpQ::from_ratio(5, 1).unwrap());
    assert_eq!(val.partial_cmp(&f64::NAN), None);
    assert!(f(1.0) < f(2.0));
}
