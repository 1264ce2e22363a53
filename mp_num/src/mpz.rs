//! # MpZ
//! Mutable arbitrary-precision integers.
//!
//! Every `*_mut` method overwrites the receiver in place and hands it back so
//! calls chain. Methods that can fail return `Result<&mut MpZ>` and check
//! their input before writing, an `Err` never leaves a half-updated value.
//!
//! # Example
//! ```
//! use mp_num::MpZ;
//!
//! let mut z = MpZ::from(10);
//! z.add_mut(5).sub_mut(3).mul_mut(2);
//! assert_eq!(z, 24);
//! z.div_mut(3).unwrap().neg_mut();
//! assert_eq!(z, -8);
//! assert_eq!(z.abs_mut(), &8);
//! ```

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};
use std::str::FromStr;

use log::debug;
use num_bigint::{BigInt, Sign};
use rug::integer::{IsPrime, Order};
use rug::ops::{DivRoundingAssign, NegAssign, NotAssign, PowAssign, RemRoundingAssign};
use rug::Integer;

use crate::constants::DEFAULT_PRIME_REPS;
use crate::error::{DomainError, Error, Result};
use crate::radix::{format_integer, parse_integer, RadixFormat};

#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MpZ {
    inner: Integer,
}

/// Result of a probabilistic primality test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    Composite,
    ProbablyPrime,
    Prime,
}

/// A right-hand operand of an integer operation.
///
/// Native integers stay native so that `+`, `-` and `*` do not allocate,
/// everything else is viewed as a backend integer.
pub enum IntegerArg<'a> {
    Big(Cow<'a, Integer>),
    Signed(i64),
    Unsigned(u64),
}

impl<'a> IntegerArg<'a> {
    pub(crate) fn into_big(self) -> Cow<'a, Integer> {
        match self {
            IntegerArg::Big(v) => v,
            IntegerArg::Signed(v) => Cow::Owned(Integer::from(v)),
            IntegerArg::Unsigned(v) => Cow::Owned(Integer::from(v)),
        }
    }
}

/// Anything an [`MpZ`] can be combined with: another `MpZ`, a
/// [`num_bigint::BigInt`], or a native integer.
pub trait IntegerOperand {
    fn to_integer_arg(&self) -> IntegerArg<'_>;
}

impl IntegerOperand for MpZ {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        IntegerArg::Big(Cow::Borrowed(&self.inner))
    }
}

impl IntegerOperand for Integer {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        IntegerArg::Big(Cow::Borrowed(self))
    }
}

impl IntegerOperand for BigInt {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        IntegerArg::Big(Cow::Owned(bigint_to_integer(self)))
    }
}

impl<T: IntegerOperand + ?Sized> IntegerOperand for &T {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        (**self).to_integer_arg()
    }
}

macro_rules! impl_signed_operand {
    ($($i: ty),*) => {
    $(
    impl IntegerOperand for $i {
        fn to_integer_arg(&self) -> IntegerArg<'_> {
            IntegerArg::Signed(*self as i64)
        }
    }
    )*
    };
}

macro_rules! impl_unsigned_operand {
    ($($u: ty),*) => {
    $(
    impl IntegerOperand for $u {
        fn to_integer_arg(&self) -> IntegerArg<'_> {
            IntegerArg::Unsigned(*self as u64)
        }
    }
    )*
    };
}

impl_signed_operand!(i8, i16, i32, i64, isize);
impl_unsigned_operand!(u8, u16, u32, u64, usize);

impl IntegerOperand for i128 {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        IntegerArg::Big(Cow::Owned(Integer::from(*self)))
    }
}

impl IntegerOperand for u128 {
    fn to_integer_arg(&self) -> IntegerArg<'_> {
        IntegerArg::Big(Cow::Owned(Integer::from(*self)))
    }
}

pub(crate) fn bigint_to_integer(val: &BigInt) -> Integer {
    let (sign, bytes) = val.to_bytes_le();
    let magnitude = Integer::from_digits(&bytes, Order::Lsf);
    match sign {
        Sign::Minus => -magnitude,
        _ => magnitude,
    }
}

pub(crate) fn integer_to_bigint(val: &Integer) -> BigInt {
    let bytes = val.to_digits::<u8>(Order::Lsf);
    let sign = match val.cmp0() {
        Ordering::Less => Sign::Minus,
        Ordering::Equal => Sign::NoSign,
        Ordering::Greater => Sign::Plus,
    };
    BigInt::from_bytes_le(sign, &bytes)
}

fn reject(op: &str, err: Error) -> Error {
    debug!("MpZ::{} rejected: {}", op, err);
    err
}

fn nonzero_divisor<'a>(op: &str, divisor: IntegerArg<'a>) -> Result<Cow<'a, Integer>> {
    let divisor = divisor.into_big();
    if divisor.cmp0() == Ordering::Equal {
        return Err(reject(op, Error::DivisionByZero));
    }
    Ok(divisor)
}

// 实现构造
impl MpZ {
    pub fn new() -> Self {
        MpZ { inner: Integer::new() }
    }
    /// Truncates toward zero. Fails for NaN and infinities.
    pub fn from_f64(val: f64) -> Result<Self> {
        Integer::from_f64(val)
            .map(MpZ::from)
            .ok_or(Error::NonFinite(val))
    }
    pub fn from_str_radix(val: &str, base: u32) -> Result<Self> {
        parse_integer(val, base).map(MpZ::from)
    }
    pub fn factorial(n: u32) -> Self {
        MpZ::from(Integer::from(Integer::factorial(n)))
    }
    pub fn fibonacci(n: u32) -> Self {
        MpZ::from(Integer::from(Integer::fibonacci(n)))
    }
    pub fn binomial(n: u32, k: u32) -> Self {
        MpZ::from(Integer::from(Integer::binomial_u(n, k)))
    }
    pub fn as_integer(&self) -> &Integer {
        &self.inner
    }
    pub fn into_integer(self) -> Integer {
        self.inner
    }
    pub fn to_bigint(&self) -> BigInt {
        integer_to_bigint(&self.inner)
    }
}

impl From<Integer> for MpZ {
    fn from(inner: Integer) -> Self {
        MpZ { inner }
    }
}

impl From<&BigInt> for MpZ {
    fn from(val: &BigInt) -> Self {
        MpZ::from(bigint_to_integer(val))
    }
}

impl From<BigInt> for MpZ {
    fn from(val: BigInt) -> Self {
        MpZ::from(&val)
    }
}

impl From<&MpZ> for BigInt {
    fn from(val: &MpZ) -> Self {
        val.to_bigint()
    }
}

impl From<MpZ> for BigInt {
    fn from(val: MpZ) -> Self {
        val.to_bigint()
    }
}

macro_rules! impl_primitive_to_mpz {
    ($($t: ty),*) => {
    $(
    impl From<$t> for MpZ {
        fn from(val: $t) -> Self {
            MpZ { inner: Integer::from(val) }
        }
    }
    )*
    };
}
impl_primitive_to_mpz!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FromStr for MpZ {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MpZ::from_str_radix(s, 10)
    }
}

// 实现加减乘
impl MpZ {
    pub fn add_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_integer_arg() {
            IntegerArg::Big(v) => self.inner += &*v,
            IntegerArg::Signed(v) => self.inner += v,
            IntegerArg::Unsigned(v) => self.inner += v,
        }
        self
    }
    pub fn sub_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_integer_arg() {
            IntegerArg::Big(v) => self.inner -= &*v,
            IntegerArg::Signed(v) => self.inner -= v,
            IntegerArg::Unsigned(v) => self.inner -= v,
        }
        self
    }
    pub fn mul_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        match rhs.to_integer_arg() {
            IntegerArg::Big(v) => self.inner *= &*v,
            IntegerArg::Signed(v) => self.inner *= v,
            IntegerArg::Unsigned(v) => self.inner *= v,
        }
        self
    }
    pub fn neg_mut(&mut self) -> &mut Self {
        self.inner.neg_assign();
        self
    }
    pub fn abs_mut(&mut self) -> &mut Self {
        self.inner.abs_mut();
        self
    }
}

// 实现除法
impl MpZ {
    /// Floored quotient: rounds toward negative infinity.
    pub fn div_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("div_mut", rhs.to_integer_arg())?;
        self.inner.div_floor_assign(&*divisor);
        Ok(self)
    }
    /// Floored modulo: the result takes the sign of the divisor.
    pub fn rem_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("rem_mut", rhs.to_integer_arg())?;
        self.inner.rem_floor_assign(&*divisor);
        Ok(self)
    }
    pub fn div_trunc_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("div_trunc_mut", rhs.to_integer_arg())?;
        self.inner.div_trunc_assign(&*divisor);
        Ok(self)
    }
    /// Truncated remainder: the result takes the sign of the dividend.
    pub fn rem_trunc_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("rem_trunc_mut", rhs.to_integer_arg())?;
        self.inner.rem_trunc_assign(&*divisor);
        Ok(self)
    }
    pub fn div_ceil_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("div_ceil_mut", rhs.to_integer_arg())?;
        self.inner.div_ceil_assign(&*divisor);
        Ok(self)
    }
    pub fn rem_ceil_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("rem_ceil_mut", rhs.to_integer_arg())?;
        self.inner.rem_ceil_assign(&*divisor);
        Ok(self)
    }
    /// Replaces `self` with the floored quotient and returns the remainder.
    pub fn div_rem_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<MpZ> {
        let mut rem = nonzero_divisor("div_rem_mut", rhs.to_integer_arg())?.into_owned();
        self.inner.div_rem_floor_mut(&mut rem);
        Ok(MpZ::from(rem))
    }
    /// Division that is known to be exact, faster than `div_mut`.
    pub fn div_exact_mut<T: IntegerOperand>(&mut self, rhs: T) -> Result<&mut Self> {
        let divisor = nonzero_divisor("div_exact_mut", rhs.to_integer_arg())?;
        if !self.inner.is_divisible(&divisor) {
            return Err(reject("div_exact_mut", DomainError::InexactDivision.into()));
        }
        self.inner.div_exact_mut(&divisor);
        Ok(self)
    }
}

// 实现幂与根
impl MpZ {
    pub fn pow_mut(&mut self, exp: i64) -> Result<&mut Self> {
        if exp < 0 {
            return Err(reject("pow_mut", DomainError::NegativeExponent.into()));
        }
        let exp = u32::try_from(exp).map_err(|_| reject("pow_mut", Error::Overflow { target: "u32" }))?;
        self.inner.pow_assign(exp);
        Ok(self)
    }
    /// `self = self^exp mod modulus`, the result lies in `0..|modulus|`.
    ///
    /// A negative exponent works when `self` is invertible modulo `modulus`.
    pub fn pow_mod_mut<E: IntegerOperand, M: IntegerOperand>(&mut self, exp: E, modulus: M) -> Result<&mut Self> {
        let modulus = nonzero_divisor("pow_mod_mut", modulus.to_integer_arg())?;
        let exp = exp.to_integer_arg().into_big();
        self.inner
            .pow_mod_mut(&exp, &modulus)
            .map_err(|_| reject("pow_mod_mut", DomainError::NotInvertible.into()))?;
        Ok(self)
    }
    pub fn invert_mut<M: IntegerOperand>(&mut self, modulus: M) -> Result<&mut Self> {
        let modulus = nonzero_divisor("invert_mut", modulus.to_integer_arg())?;
        self.inner
            .invert_mut(&modulus)
            .map_err(|_| reject("invert_mut", DomainError::NotInvertible.into()))?;
        Ok(self)
    }
    /// Integer square root, truncated.
    pub fn sqrt_mut(&mut self) -> Result<&mut Self> {
        if self.inner.cmp0() == Ordering::Less {
            return Err(reject("sqrt_mut", DomainError::NegativeSqrt.into()));
        }
        self.inner.sqrt_mut();
        Ok(self)
    }
    /// Integer `n`-th root, truncated toward zero.
    pub fn root_mut(&mut self, n: u32) -> Result<&mut Self> {
        if n == 0 {
            return Err(reject("root_mut", DomainError::ZeroRootDegree.into()));
        }
        if n % 2 == 0 && self.inner.cmp0() == Ordering::Less {
            return Err(reject("root_mut", DomainError::EvenRootOfNegative.into()));
        }
        self.inner.root_mut(n);
        Ok(self)
    }
    pub fn gcd_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        let rhs = rhs.to_integer_arg().into_big();
        self.inner.gcd_mut(&rhs);
        self
    }
    pub fn lcm_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        let rhs = rhs.to_integer_arg().into_big();
        self.inner.lcm_mut(&rhs);
        self
    }
    pub fn next_prime_mut(&mut self) -> &mut Self {
        self.inner.next_prime_mut();
        self
    }
}

// 实现位运算
impl MpZ {
    pub fn shl_mut(&mut self, bits: u32) -> &mut Self {
        self.inner <<= bits;
        self
    }
    /// Arithmetic shift, rounds toward negative infinity.
    pub fn shr_mut(&mut self, bits: u32) -> &mut Self {
        self.inner >>= bits;
        self
    }
    pub fn and_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        self.inner &= &*rhs.to_integer_arg().into_big();
        self
    }
    pub fn or_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        self.inner |= &*rhs.to_integer_arg().into_big();
        self
    }
    pub fn xor_mut<T: IntegerOperand>(&mut self, rhs: T) -> &mut Self {
        self.inner ^= &*rhs.to_integer_arg().into_big();
        self
    }
    /// Ones' complement, `!x == -x - 1`.
    pub fn not_mut(&mut self) -> &mut Self {
        self.inner.not_assign();
        self
    }
    pub fn set_bit(&mut self, index: u32, val: bool) -> &mut Self {
        self.inner.set_bit(index, val);
        self
    }
}

// 杂项查询
impl MpZ {
    pub fn get_bit(&self, index: u32) -> bool {
        self.inner.get_bit(index)
    }
    /// Population count. Negative values have infinitely many one bits.
    pub fn count_ones(&self) -> Option<u32> {
        self.inner.count_ones()
    }
    /// Index of the lowest set bit, `None` for zero.
    pub fn trailing_zeros(&self) -> Option<u32> {
        self.inner.find_one(0)
    }
    /// Bits needed for the absolute value, zero for zero.
    pub fn bit_length(&self) -> u32 {
        self.inner.significant_bits()
    }
    pub fn sign(&self) -> Ordering {
        self.inner.cmp0()
    }
    pub fn is_zero(&self) -> bool {
        self.inner.cmp0() == Ordering::Equal
    }
    pub fn is_even(&self) -> bool {
        self.inner.is_even()
    }
    pub fn is_odd(&self) -> bool {
        self.inner.is_odd()
    }
    pub fn is_perfect_square(&self) -> bool {
        self.inner.is_perfect_square()
    }
    pub fn is_divisible_by<T: IntegerOperand>(&self, rhs: T) -> bool {
        self.inner.is_divisible(&rhs.to_integer_arg().into_big())
    }
    /// Miller-Rabin with `reps` rounds, see also [`MpZ::is_prime`].
    pub fn is_probably_prime(&self, reps: u32) -> Primality {
        match self.inner.is_probably_prime(reps) {
            IsPrime::No => Primality::Composite,
            IsPrime::Probably => Primality::ProbablyPrime,
            IsPrime::Yes => Primality::Prime,
        }
    }
    pub fn is_prime(&self) -> bool {
        self.is_probably_prime(DEFAULT_PRIME_REPS) != Primality::Composite
    }
}

// 实现类型转换
impl MpZ {
    pub fn to_i64(&self) -> Result<i64> {
        self.inner.to_i64().ok_or(Error::Overflow { target: "i64" })
    }
    pub fn to_u64(&self) -> Result<u64> {
        self.inner.to_u64().ok_or(Error::Overflow { target: "u64" })
    }
    pub fn to_i32(&self) -> Result<i32> {
        self.inner.to_i32().ok_or(Error::Overflow { target: "i32" })
    }
    pub fn to_u32(&self) -> Result<u32> {
        self.inner.to_u32().ok_or(Error::Overflow { target: "u32" })
    }
    /// Keeps the low 64 bits in two's complement.
    pub fn to_i64_wrapping(&self) -> i64 {
        self.inner.to_i64_wrapping()
    }
    pub fn to_u64_wrapping(&self) -> u64 {
        self.inner.to_u64_wrapping()
    }
    /// Rounds toward zero.
    pub fn to_f64(&self) -> f64 {
        self.inner.to_f64()
    }
}

// 实现打印
impl MpZ {
    pub fn to_string_radix(&self, base: u32) -> Result<String> {
        format_integer(&self.inner, &RadixFormat::new(base))
    }
    pub fn to_string_with(&self, format: &RadixFormat) -> Result<String> {
        format_integer(&self.inner, format)
    }
}

impl fmt::Display for MpZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl fmt::LowerHex for MpZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.inner, f)
    }
}

impl fmt::UpperHex for MpZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.inner, f)
    }
}

impl fmt::Binary for MpZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.inner, f)
    }
}

impl fmt::Octal for MpZ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Octal::fmt(&self.inner, f)
    }
}

// 实现运算符
macro_rules! impl_integer_op {
    ($($op: ident $op_fn: ident $assign: ident $assign_fn: ident => $inherent: ident),*) => {
    $(
    impl<T: IntegerOperand> $assign<T> for MpZ {
        fn $assign_fn(&mut self, rhs: T) {
            self.$inherent(rhs);
        }
    }
    impl<T: IntegerOperand> $op<T> for MpZ {
        type Output = MpZ;

        fn $op_fn(mut self, rhs: T) -> MpZ {
            self.$inherent(rhs);
            self
        }
    }
    )*
    };
}
impl_integer_op!(
    Add add AddAssign add_assign => add_mut,
    Sub sub SubAssign sub_assign => sub_mut,
    Mul mul MulAssign mul_assign => mul_mut,
    BitAnd bitand BitAndAssign bitand_assign => and_mut,
    BitOr bitor BitOrAssign bitor_assign => or_mut,
    BitXor bitxor BitXorAssign bitxor_assign => xor_mut
);

impl ShlAssign<u32> for MpZ {
    fn shl_assign(&mut self, bits: u32) {
        self.shl_mut(bits);
    }
}

impl Shl<u32> for MpZ {
    type Output = MpZ;

    fn shl(mut self, bits: u32) -> MpZ {
        self.shl_mut(bits);
        self
    }
}

impl ShrAssign<u32> for MpZ {
    fn shr_assign(&mut self, bits: u32) {
        self.shr_mut(bits);
    }
}

impl Shr<u32> for MpZ {
    type Output = MpZ;

    fn shr(mut self, bits: u32) -> MpZ {
        self.shr_mut(bits);
        self
    }
}

impl Neg for MpZ {
    type Output = MpZ;

    fn neg(mut self) -> MpZ {
        self.neg_mut();
        self
    }
}

impl Not for MpZ {
    type Output = MpZ;

    fn not(mut self) -> MpZ {
        self.not_mut();
        self
    }
}

// 实现大小比较
impl MpZ {
    /// Total order against any integer operand.
    pub fn cmp_with<T: IntegerOperand>(&self, rhs: T) -> Ordering {
        match rhs.to_integer_arg() {
            IntegerArg::Big(v) => self.inner.cmp(&*v),
            IntegerArg::Signed(v) => self.inner.partial_cmp(&v).unwrap_or(Ordering::Equal),
            IntegerArg::Unsigned(v) => self.inner.partial_cmp(&v).unwrap_or(Ordering::Equal),
        }
    }
    /// Fails for NaN, infinities order as expected.
    pub fn cmp_f64(&self, rhs: f64) -> Result<Ordering> {
        self.inner.partial_cmp(&rhs).ok_or(Error::NanComparison)
    }
}

macro_rules! impl_cmp_primitive {
    ($($t: ty),*) => {
    $(
    impl PartialEq<$t> for MpZ {
        fn eq(&self, other: &$t) -> bool {
            self.inner == *other
        }
    }
    impl PartialEq<MpZ> for $t {
        fn eq(&self, other: &MpZ) -> bool {
            other.inner == *self
        }
    }
    impl PartialOrd<$t> for MpZ {
        fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
            self.inner.partial_cmp(other)
        }
    }
    impl PartialOrd<MpZ> for $t {
        fn partial_cmp(&self, other: &MpZ) -> Option<Ordering> {
            other.inner.partial_cmp(self).map(Ordering::reverse)
        }
    }
    )*
    };
}
impl_cmp_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl PartialEq<BigInt> for MpZ {
    fn eq(&self, other: &BigInt) -> bool {
        self.cmp_with(other) == Ordering::Equal
    }
}

impl PartialOrd<BigInt> for MpZ {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp_with(other))
    }
}

impl PartialEq<MpZ> for BigInt {
    fn eq(&self, other: &MpZ) -> bool {
        other == self
    }
}

impl PartialOrd<MpZ> for BigInt {
    fn partial_cmp(&self, other: &MpZ) -> Option<Ordering> {
        Some(other.cmp_with(self).reverse())
    }
}

#[test]
fn test_chain() {
    let mut z = MpZ::from(10);
    assert_eq!(z.add_mut(5), &15);
    assert_eq!(z.sub_mut(3), &12);
    assert_eq!(z.mul_mut(2), &24);
    assert_eq!(z.div_mut(3).unwrap(), &8);
    assert_eq!(z.neg_mut(), &-8);
    assert_eq!(z.abs_mut(), &8);
}

#[test]
fn test_mixed_operands() {
    let mut z = MpZ::from(1);
    let big = BigInt::from(-100);
    z.add_mut(&big).mul_mut(&MpZ::from(2)).sub_mut(u64::MAX).add_mut(i128::MAX);
    let expected = (BigInt::from(-99) * 2 - BigInt::from(u64::MAX)) + BigInt::from(i128::MAX);
    assert_eq!(z, expected);
    assert_eq!(z.to_bigint(), expected);
}

#[test]
fn test_floored_division() {
    let cases = [(7, 2, 3, 1), (-7, 2, -4, 1), (7, -2, -4, -1), (-7, -2, 3, -1)];
    for (a, b, q, r) in cases {
        let mut quot = MpZ::from(a);
        quot.div_mut(b).unwrap();
        let mut rem = MpZ::from(a);
        rem.rem_mut(b).unwrap();
        assert_eq!((quot.to_i64().unwrap(), rem.to_i64().unwrap()), (q, r), "{} / {}", a, b);

        let mut quot = MpZ::from(a);
        let rem = quot.div_rem_mut(b).unwrap();
        assert_eq!((quot, rem), (MpZ::from(q), MpZ::from(r)));
    }
}

#[test]
fn test_other_roundings() {
    let mut z = MpZ::from(-7);
    z.div_trunc_mut(2).unwrap();
    assert_eq!(z, -3);
    let mut z = MpZ::from(-7);
    z.rem_trunc_mut(2).unwrap();
    assert_eq!(z, -1);
    let mut z = MpZ::from(7);
    z.div_ceil_mut(2).unwrap();
    assert_eq!(z, 4);
    let mut z = MpZ::from(7);
    z.rem_ceil_mut(2).unwrap();
    assert_eq!(z, -1);
    let mut z = MpZ::from(91);
    z.div_exact_mut(7).unwrap();
    assert_eq!(z, 13);
    assert_eq!(z.div_exact_mut(5), Err(Error::Domain(DomainError::InexactDivision)));
    assert_eq!(z, 13);
}

#[test]
fn test_division_by_zero_keeps_receiver() {
    let mut z = MpZ::from(42);
    assert_eq!(z.div_mut(0), Err(Error::DivisionByZero));
    assert_eq!(z.rem_mut(&MpZ::new()), Err(Error::DivisionByZero));
    assert_eq!(z.div_rem_mut(BigInt::from(0)).unwrap_err(), Error::DivisionByZero);
    assert_eq!(z.invert_mut(0), Err(Error::DivisionByZero));
    assert_eq!(z, 42);
}

#[test]
fn test_pow() {
    let mut z = MpZ::from(2);
    assert_eq!(z.pow_mut(10).unwrap(), &1024);
    let mut z = MpZ::from(-1);
    assert_eq!(z.pow_mut(-1), Err(Error::Domain(DomainError::NegativeExponent)));
    assert_eq!(z, -1);
    assert_eq!(z.pow_mut(1 << 40), Err(Error::Overflow { target: "u32" }));
    let mut z = MpZ::from(4);
    z.pow_mod_mut(13, 497).unwrap();
    assert_eq!(z, 445);
    let mut z = MpZ::from(3);
    z.pow_mod_mut(-1, 7).unwrap();
    assert_eq!(z, 5);
    let mut z = MpZ::from(2);
    assert_eq!(z.pow_mod_mut(-1, 4), Err(Error::Domain(DomainError::NotInvertible)));
    assert_eq!(z, 2);
}

#[test]
fn test_gcd_lcm() {
    let mut z = MpZ::from(48);
    assert_eq!(z.gcd_mut(&MpZ::from(18)), &6);
    let mut z = MpZ::from(12);
    assert_eq!(z.lcm_mut(&MpZ::from(18)), &36);
    let mut z = MpZ::from(-12);
    assert_eq!(z.gcd_mut(-18), &6);
}

#[test]
fn test_roots() {
    let mut z = MpZ::from(17);
    assert_eq!(z.sqrt_mut().unwrap(), &4);
    let mut z = MpZ::from(-4);
    assert_eq!(z.sqrt_mut(), Err(Error::Domain(DomainError::NegativeSqrt)));
    assert_eq!(z.root_mut(2), Err(Error::Domain(DomainError::EvenRootOfNegative)));
    assert_eq!(z.root_mut(0), Err(Error::Domain(DomainError::ZeroRootDegree)));
    assert_eq!(z, -4);
    let mut z = MpZ::from(-30);
    assert_eq!(z.root_mut(3).unwrap(), &-3);
}

#[test]
fn test_bits() {
    let mut z = MpZ::from(0b1011_0000);
    assert_eq!(z.count_ones(), Some(3));
    assert_eq!(z.trailing_zeros(), Some(4));
    assert_eq!(z.bit_length(), 8);
    assert!(z.get_bit(5));
    assert!(!z.get_bit(6));
    z.set_bit(6, true).shr_mut(4);
    assert_eq!(z, 0b1111);
    z.and_mut(0b0110).or_mut(0b1000_0000).xor_mut(&MpZ::from(1));
    assert_eq!(z, 0b1000_0111);
    z.not_mut();
    assert_eq!(z, -0b1000_1000);
    assert_eq!(z.count_ones(), None);
    assert_eq!(MpZ::new().trailing_zeros(), None);
    let mut z = MpZ::from(-5);
    assert_eq!(z.shr_mut(1), &-3);
    assert_eq!(z.shl_mut(3), &-24);
}

#[test]
fn test_conversions() {
    let z = MpZ::from(u64::MAX);
    assert_eq!(z.to_u64(), Ok(u64::MAX));
    assert_eq!(z.to_i64(), Err(Error::Overflow { target: "i64" }));
    assert_eq!(z.to_i64_wrapping(), -1);
    assert_eq!(MpZ::from(-1).to_u64_wrapping(), u64::MAX);
    assert_eq!(MpZ::from(-1).to_u32(), Err(Error::Overflow { target: "u32" }));
    assert_eq!(MpZ::from_f64(-2.9).unwrap(), -2);
    assert_eq!(MpZ::from_f64(f64::INFINITY), Err(Error::NonFinite(f64::INFINITY)));
    assert!(MpZ::from_f64(f64::NAN).is_err());
    assert_eq!(MpZ::from(1u64 << 53).to_f64(), 9007199254740992.0);
}

#[test]
fn test_strings() {
    let z: MpZ = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(z.to_string(), "-123456789012345678901234567890");
    assert_eq!(MpZ::from(255).to_string_radix(2).unwrap(), "11111111");
    assert_eq!(format!("{:x} {:X} {:o} {:b}", MpZ::from(255), MpZ::from(255), MpZ::from(8), MpZ::from(5)), "ff FF 10 101");
    assert_eq!(MpZ::from_str_radix("zz", 36).unwrap(), 36 * 36 - 1);
    assert_eq!(MpZ::from_str_radix("zz", 62).unwrap(), 62 * 62 - 1);
    assert_eq!(MpZ::from(3843).to_string_radix(62).unwrap(), "zz");
    assert_eq!(MpZ::from(1).to_string_radix(63), Err(Error::InvalidBase(63)));
}

#[test]
fn test_comparison() {
    let z = MpZ::from(5);
    assert!(z > 4);
    assert!(z < 5.5);
    assert!(4u8 < z);
    assert!(z > BigInt::from(-10));
    assert!(BigInt::from(10) > z);
    assert_eq!(z.cmp_with(&MpZ::from(5)), Ordering::Equal);
    assert_eq!(z.cmp_f64(f64::INFINITY), Ok(Ordering::Less));
    assert_eq!(z.cmp_f64(f64::NAN), Err(Error::NanComparison));
    assert_eq!(z.partial_cmp(&f64::NAN), None);
}

#[test]
fn test_number_theory() {
    assert_eq!(MpZ::factorial(20), 2432902008176640000u64);
    assert_eq!(MpZ::fibonacci(10), 55);
    assert_eq!(MpZ::binomial(10, 3), 120);
    assert!(MpZ::from(97).is_prime());
    assert_eq!(MpZ::from(91).is_probably_prime(15), Primality::Composite);
    let mut z = MpZ::from(90);
    assert_eq!(z.next_prime_mut(), &97);
    assert!(MpZ::from(49).is_perfect_square());
    assert!(MpZ::from(49).is_divisible_by(7));
    let mut z = MpZ::from(3);
    z.invert_mut(&MpZ::from(11)).unwrap();
    assert_eq!(z, 4);
}

#[test]
fn test_operators() {
    let mut z = MpZ::from(6);
    z += 4;
    z *= &MpZ::from(3);
    z -= BigInt::from(5);
    z <<= 2;
    z >>= 1;
    assert_eq!(z, 50);
    let z = -(z + 1) ^ 3;
    assert_eq!(z, -51 ^ 3);
    assert_eq!(!MpZ::new(), -1);
}
