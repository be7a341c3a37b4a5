use crate::interpreter::value::real::RealNumber;

/// `n!`, extended to non-integers as `Γ(n + 1)`.
///
/// # Example
/// ```
/// use numq::{config::Precision, interpreter::value::real::RealNumber, util::combinatorics};
///
/// let precision = Precision::new(20);
/// let n = RealNumber::from_i64(20, precision);
/// assert_eq!(combinatorics::factorial(&n).to_string(), "2432902008176640000");
/// ```
#[must_use]
pub fn factorial(n: &RealNumber) -> RealNumber {
    (n + &RealNumber::one(n.precision())).gamma()
}

/// Ordered selections of `r` items out of `n`: `n! / (n - r)!`.
#[must_use]
pub fn permutation(n: &RealNumber, r: &RealNumber) -> RealNumber {
    &factorial(n) / &factorial(&(n - r))
}

/// Unordered selections of `r` items out of `n`: `nPr / r!`.
#[must_use]
pub fn combination(n: &RealNumber, r: &RealNumber) -> RealNumber {
    &factorial(r).recip() * &permutation(n, r)
}
