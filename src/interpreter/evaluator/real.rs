use crate::{
    ast::Domain,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::real::RealNumber},
    util::{
        angle::{to_degrees, to_radians},
        combinatorics,
        trigonometry::real as trig,
    },
};

/// Generates handlers that cannot fail.
///
/// Each entry names the handler, its operand and the expression computing the
/// result.
macro_rules! real_handlers {
    ($($name:ident($x:ident) => $body:expr;)*) => {
        $(
            pub fn $name($x: &RealNumber) -> EvalResult<RealNumber> {
                Ok($body)
            }
        )*
    };
}

real_handlers! {
    factorial(x) => combinatorics::factorial(x);
    absolute(x) => x.abs();
    floor(x) => x.floor();
    ceiling(x) => x.ceil();
    sine(x) => to_radians(x).sin();
    cosine(x) => to_radians(x).cos();
    inverse_sine(x) => to_degrees(&x.asin());
    inverse_cosine(x) => to_degrees(&x.acos());
    inverse_tangent(x) => to_degrees(&x.atan());
    inverse_cotangent(x) => to_degrees(&trig::acot(x));
    inverse_cosecant(x) => to_degrees(&trig::acsc(x));
    inverse_secant(x) => to_degrees(&trig::asec(x));
    hyp_sine(x) => x.sinh();
    hyp_cosine(x) => x.cosh();
    hyp_tangent(x) => x.tanh();
    hyp_cotangent(x) => trig::coth(x);
    hyp_cosecant(x) => trig::csch(x);
    hyp_secant(x) => trig::sech(x);
    inverse_hyp_sine(x) => x.asinh();
    inverse_hyp_cosine(x) => x.acosh();
    inverse_hyp_tangent(x) => x.atanh();
    inverse_hyp_cotangent(x) => trig::acoth(x);
    inverse_hyp_cosecant(x) => trig::acsch(x);
    inverse_hyp_secant(x) => trig::asech(x);
}

const RIGHT_ANGLE: i64 = 90;

fn infinity(x: &RealNumber) -> RealNumber {
    RealNumber::infinity(false, x.precision())
}

/// Tangent of an angle in degrees; `inf` at exactly 90.
pub fn tangent(x: &RealNumber) -> EvalResult<RealNumber> {
    if *x == RIGHT_ANGLE {
        return Ok(infinity(x));
    }
    Ok(to_radians(x).tan())
}

/// Cotangent of an angle in degrees; `0` at exactly 90 and `inf` at 0.
pub fn cotangent(x: &RealNumber) -> EvalResult<RealNumber> {
    if *x == RIGHT_ANGLE {
        return Ok(RealNumber::zero(x.precision()));
    }
    if x.is_zero() {
        return Ok(infinity(x));
    }
    Ok(trig::cot(&to_radians(x)))
}

/// Cosecant of an angle in degrees; `inf` at 0.
pub fn cosecant(x: &RealNumber) -> EvalResult<RealNumber> {
    if x.is_zero() {
        return Ok(infinity(x));
    }
    Ok(trig::csc(&to_radians(x)))
}

/// Secant of an angle in degrees; `inf` at exactly 90.
pub fn secant(x: &RealNumber) -> EvalResult<RealNumber> {
    if *x == RIGHT_ANGLE {
        return Ok(infinity(x));
    }
    Ok(trig::sec(&to_radians(x)))
}

fn logarithm_of(x: &RealNumber, log: fn(&RealNumber) -> RealNumber) -> EvalResult<RealNumber> {
    if x.is_zero() {
        return Err(RuntimeError::LogarithmOfZero { domain: Domain::Real });
    }
    Ok(log(x))
}

pub fn natural_logarithm(x: &RealNumber) -> EvalResult<RealNumber> {
    logarithm_of(x, RealNumber::ln)
}

pub fn binary_logarithm(x: &RealNumber) -> EvalResult<RealNumber> {
    logarithm_of(x, RealNumber::log2)
}

pub fn common_logarithm(x: &RealNumber) -> EvalResult<RealNumber> {
    logarithm_of(x, RealNumber::log10)
}

pub fn add(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    Ok(a + b)
}

pub fn subtract(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    Ok(a - b)
}

pub fn multiply(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    Ok(a * b)
}

pub fn divide(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero { domain: Domain::Real });
    }
    Ok(a / b)
}

pub fn power(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    Ok(a.pow(b))
}

/// The `index`-th root of `a`. Cube roots of negative numbers are real.
pub fn root(a: &RealNumber, index: &RealNumber) -> EvalResult<RealNumber> {
    if index.is_zero() {
        return Err(RuntimeError::ZerothRoot { domain: Domain::Real });
    }
    Ok(match index.to_i64() {
        Some(1) => a.clone(),
        Some(2) => a.sqrt(),
        Some(3) => a.cbrt(),
        _ => a.pow(&index.recip()),
    })
}

/// `log_b(a)`, by change of base.
pub fn logarithm(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    Ok(&a.log10() / &b.log10())
}

pub fn permutation(n: &RealNumber, r: &RealNumber) -> EvalResult<RealNumber> {
    Ok(combinatorics::permutation(n, r))
}

pub fn combination(n: &RealNumber, r: &RealNumber) -> EvalResult<RealNumber> {
    Ok(combinatorics::combination(n, r))
}

/// Remainder with the sign of the dividend.
pub fn modulo(a: &RealNumber, b: &RealNumber) -> EvalResult<RealNumber> {
    if b.is_zero() {
        return Err(RuntimeError::ModuloByZero);
    }
    Ok(a.fmod(b))
}
