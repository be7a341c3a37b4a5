//! The gamma function, which the floating point backend lacks.
//!
//! Positive integers up to [`EXACT_FACTORIAL_LIMIT`] are exact products.
//! Everything else goes through Spouge's approximation, evaluated at twice the
//! working digits because its sum cancels heavily; arguments below one half
//! are reflected first.

use num_bigint::BigUint;

use crate::{config::Precision, interpreter::value::real::RealNumber};

/// Largest integer whose gamma value is computed as an exact product.
const EXACT_FACTORIAL_LIMIT: i64 = 10_000;

pub(crate) fn gamma(x: &RealNumber) -> RealNumber {
    let precision = x.precision();
    if x.is_zero() {
        return RealNumber::infinity(false, precision);
    }
    if x.is_negative() && (x.is_integer() || x.is_infinite()) {
        return RealNumber::nan(precision);
    }
    if !x.is_finite() {
        return x.clone();
    }
    if let Some(n) = x.to_i64().filter(|n| (1..=EXACT_FACTORIAL_LIMIT).contains(n)) {
        let product: BigUint = (2..n.unsigned_abs()).map(BigUint::from).product();
        return RealNumber::from_integer(&product, precision);
    }

    let terms = precision.working_digits() * 126 / 100 + 3;
    let x = x.with_precision(Precision::new(2 * precision.working_digits()));
    let half = &RealNumber::one(x.precision()) / &RealNumber::from_i64(2, x.precision());
    let result = if x < half { reflected(&x, terms) } else { spouge(&x, terms) };
    result.with_precision(precision)
}

/// `Γ(x) = π / (sin(πx) · Γ(1 - x))`.
fn reflected(x: &RealNumber, terms: u64) -> RealNumber {
    let pi = RealNumber::pi(x.precision());
    let mirror = spouge(&(&RealNumber::one(x.precision()) - x), terms);
    &pi / &(&(&pi * x).sin() * &mirror)
}

/// Spouge's approximation with parameter `a = terms`, for `x >= 1/2`.
///
/// Γ(z+1) = (z+a)^(z+1/2) · e^-(z+a) · (c₀ + Σ c_k/(z+k)), with
/// c₀ = √(2π) and c_k = (-1)^(k-1) (a-k)^(k-1/2) e^(a-k) / (k-1)!.
fn spouge(x: &RealNumber, terms: u64) -> RealNumber {
    let precision = x.precision();
    let number = |value: u64| RealNumber::from_i64(i64::try_from(value).unwrap_or(i64::MAX),
                                                   precision);
    let one = RealNumber::one(precision);
    let z = x - &one;

    let e = one.exp();
    let mut power_of_e = number(terms - 1).exp();
    let mut factorial = one.clone();
    let mut sum = (&RealNumber::pi(precision) * &number(2)).sqrt();
    for k in 1..terms {
        if k > 1 {
            factorial = &factorial * &number(k - 1);
            power_of_e = &power_of_e / &e;
        }
        let base = number(terms - k);
        let coefficient = &(&(&base.pow(&number(k)) / &base.sqrt()) * &power_of_e) / &factorial;
        let coefficient = if k % 2 == 0 { -coefficient } else { coefficient };
        sum = &sum + &(&coefficient / &(&z + &number(k)));
    }

    let shifted = &z + &number(terms);
    let half = &one / &number(2);
    let exponent = &(&(&z + &half) * &shifted.ln()) - &shifted;
    &exponent.exp() * &sum
}
