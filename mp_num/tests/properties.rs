use mp_num::{Error, FloatConfig, MpF, MpQ, MpZ, RadixFormat};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn wide(a: i64, b: i64) -> MpZ {
    let mut z = MpZ::from(a);
    z.shl_mut(64).add_mut(b);
    z
}

#[quickcheck]
fn add_then_sub_restores(a: i64, b: i64, c: i128) -> bool {
    let start = wide(a, b);
    let mut z = start.clone();
    z.add_mut(c).sub_mut(c);
    z == start
}

#[quickcheck]
fn floored_division_identity(a: i64, b: i64, d: i64) -> TestResult {
    if d == 0 {
        return TestResult::discard();
    }
    let n = wide(a, b);
    let mut q = n.clone();
    let r = q.div_rem_mut(d).unwrap();
    let mut back = q.clone();
    back.mul_mut(d).add_mut(&r);
    // remainder takes the sign of the divisor
    let sign_ok = r.is_zero() || (r > 0) == (d > 0);
    let mut abs_r = r.clone();
    abs_r.abs_mut();
    TestResult::from_bool(back == n && sign_ok && abs_r < MpZ::from(d).abs_mut().clone())
}

#[quickcheck]
fn radix_round_trip(a: i64, b: i64, base: u8, uppercase: bool) -> TestResult {
    let base = match base % 36 {
        35 => 62,
        n => u32::from(n) + 2,
    };
    if base == 62 && uppercase {
        return TestResult::discard();
    }
    let z = wide(a, b);
    let format = RadixFormat::new(base).with_uppercase(uppercase);
    let s = z.to_string_with(&format).unwrap();
    TestResult::from_bool(MpZ::from_str_radix(&s, base).unwrap() == z)
}

#[quickcheck]
fn min_digits_pads_without_changing_value(a: i32, width: u8) -> bool {
    let z = MpZ::from(a);
    let s = z.to_string_with(&RadixFormat::new(10).with_min_digits(usize::from(width))).unwrap();
    let digits = s.trim_start_matches('-').len();
    digits >= usize::from(width) && s.parse::<MpZ>().unwrap() == z
}

#[quickcheck]
fn rational_stays_canonical(n: i64, d: i64, m: i32, k: i32) -> TestResult {
    if d == 0 || k == 0 {
        return TestResult::discard();
    }
    let mut q = MpQ::from_ratio(n, d).unwrap();
    q.add_mut(m).mul_mut(MpQ::from_ratio(m, k).unwrap());
    q.div_mut(k).unwrap().sub_mut(1);
    let num = q.numerator();
    let den = q.denominator();
    let mut g = num.clone();
    g.gcd_mut(&den);
    TestResult::from_bool(den > 0 && g == 1 && MpQ::from_ratio(&num, &den).unwrap() == q)
}

#[quickcheck]
fn division_by_zero_keeps_receiver(a: i64, num: i32, den: i32, x: f64) -> TestResult {
    init();
    if den == 0 || !x.is_finite() {
        return TestResult::discard();
    }
    let mut z = MpZ::from(a);
    let mut q = MpQ::from_ratio(num, den).unwrap();
    let mut f = MpF::from_value(x, 64).unwrap();
    let (z0, q0, f0) = (z.clone(), q.clone(), f.clone());
    let all_failed = z.div_mut(0).unwrap_err() == Error::DivisionByZero
        && z.rem_mut(MpZ::new()).unwrap_err() == Error::DivisionByZero
        && q.div_mut(0u8).unwrap_err() == Error::DivisionByZero
        && f.div_mut(0.0).unwrap_err() == Error::DivisionByZero;
    TestResult::from_bool(all_failed && z == z0 && q == q0 && f == f0)
}

#[quickcheck]
fn float_text_round_trip(x: f64, prec: u8) -> TestResult {
    if !x.is_finite() {
        return TestResult::discard();
    }
    let prec = u32::from(prec) + 2;
    let f = MpF::from_value(x, prec).unwrap();
    let config = FloatConfig::new().with_precision(prec);
    let back = MpF::parse(&f.to_string_with(&config), prec).unwrap();
    TestResult::from_bool(back == f)
}

#[quickcheck]
fn float_to_rational_is_exact(x: f64) -> TestResult {
    if !x.is_finite() {
        return TestResult::discard();
    }
    let f = MpF::from_value(x, 53).unwrap();
    TestResult::from_bool(f.to_mpq() == MpQ::from_f64(x).unwrap() && f == x)
}

#[quickcheck]
fn float_ops_store_only_finite_values(a: f64, b: f64, shift_a: i32, shift_b: i32, op: u8) -> TestResult {
    init();
    if !a.is_finite() || !b.is_finite() {
        return TestResult::discard();
    }
    // push both operands anywhere in the exponent range, extremes included
    let range = rug::float::exp_max();
    let mut lhs = MpF::from_value(a, 64).unwrap();
    let mut rhs = MpF::from_value(b, 64).unwrap();
    for (val, shift) in [(&mut lhs, shift_a), (&mut rhs, shift_b)] {
        match val.scale_2exp_mut(shift % range) {
            Ok(_) | Err(Error::Overflow { .. }) => {}
            Err(err) => return TestResult::error(err.to_string()),
        }
        if !val.as_float().is_finite() {
            return TestResult::failed();
        }
    }

    let before = lhs.clone();
    let outcome = match op % 5 {
        0 => lhs.add_mut(&rhs).map(|_| ()),
        1 => lhs.sub_mut(&rhs).map(|_| ()),
        2 => lhs.mul_mut(&rhs).map(|_| ()),
        3 => lhs.div_mut(&rhs).map(|_| ()),
        _ => lhs.pow_mut(&rhs).map(|_| ()),
    };
    let kept = match outcome {
        Ok(()) => true,
        Err(_) => lhs == before,
    };
    TestResult::from_bool(kept && lhs.as_float().is_finite())
}
