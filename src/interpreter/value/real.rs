use std::{cell::RefCell, cmp::Ordering, fmt::Display, ops};

use astro_float::{BigFloat, Consts, INF_NEG, INF_POS, NAN, Radix, RoundingMode};
use num_bigint::BigUint;

use crate::{config::Precision, error::ParseError, interpreter::value::gamma, util::num};

const ROUNDING: RoundingMode = RoundingMode::ToEven;

/// Largest power of ten a literal's exponent may name.
const MAX_EXPONENT: i64 = 100_000_000;

/// Largest integer exponent raised by repeated squaring; larger exponents go
/// through `exp(y · ln x)`.
const POWI_LIMIT: i64 = 1_000_000_000;

/// Angles with a binary exponent beyond this are not reduced.
const REDUCTION_LIMIT: i32 = 100_000;

thread_local! {
    static CONSTS: RefCell<Option<Consts>> = RefCell::new(Consts::new().ok());
}

/// Runs `compute` with the constants cache, or gives `None` if the cache could
/// not be built. `compute` must not call back into this function.
fn with_consts<T>(compute: impl FnOnce(&mut Consts) -> T) -> Option<T> {
    CONSTS.with(|cell| cell.borrow_mut().as_mut().map(compute))
}

/// Normalizes a signed decimal without exponent, such as `-0012.50` or `.5`,
/// to `sign integer.fraction`.
fn plain_decimal(text: &str) -> Option<String> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let all_digits = integer.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit());
    if integer.len() + fraction.len() == 0 || !all_digits {
        return None;
    }
    let sign = if text.starts_with('-') { "-" } else { "" };
    let integer = if integer.is_empty() { "0" } else { integer };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    Some(format!("{sign}{integer}.{fraction}"))
}

enum Kind {
    Finite,
    Infinite { negative: bool },
    NaN,
}

/// An arbitrary-precision real number.
///
/// Values are binary floating point numbers with the mantissa width of their
/// [`Precision`], guard digits included; they render to the precision's
/// digits. Operations outside a function's real domain give `nan` rather than
/// failing; division of a non-zero value by zero gives a signed infinity.
/// Binary operations take the precision of their left operand.
///
/// # Example
/// ```
/// use numq::{config::Precision, interpreter::value::real::RealNumber};
///
/// let precision = Precision::new(20);
/// let a = RealNumber::parse("1.5", precision).unwrap();
/// let b = RealNumber::parse("2.25e+1", precision).unwrap();
/// assert_eq!((&a * &b).to_string(), "33.75");
/// assert_eq!((&a / &RealNumber::zero(precision)).to_string(), "inf");
/// assert_eq!(RealNumber::from_i64(-4, precision).sqrt().to_string(), "nan");
/// ```
#[derive(Debug, Clone)]
pub struct RealNumber {
    value:     BigFloat,
    precision: Precision,
}

impl Display for RealNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", num::render(&self.value, self.precision.digits()))
    }
}

impl RealNumber {
    /// Wraps a value; negative zero becomes zero.
    fn wrap(value: BigFloat, precision: Precision) -> Self {
        let value = if value.is_zero() { BigFloat::new(precision.bits()) } else { value };
        Self { value, precision }
    }

    #[must_use]
    pub fn zero(precision: Precision) -> Self {
        Self::wrap(BigFloat::new(precision.bits()), precision)
    }

    #[must_use]
    pub fn one(precision: Precision) -> Self {
        Self::from_i64(1, precision)
    }

    #[must_use]
    pub fn from_i64(value: i64, precision: Precision) -> Self {
        Self::wrap(BigFloat::from_i64(value, precision.bits()), precision)
    }

    /// An integer, rounded to the working digits of `precision`.
    #[must_use]
    pub fn from_integer(value: &BigUint, precision: Precision) -> Self {
        let literal = value.to_str_radix(10);
        Self::from_literal(&literal, precision).unwrap_or_else(|| Self::nan(precision))
    }

    /// Positive or negative infinity.
    #[must_use]
    pub fn infinity(negative: bool, precision: Precision) -> Self {
        Self::wrap(if negative { INF_NEG } else { INF_POS }, precision)
    }

    /// Not a number.
    #[must_use]
    pub fn nan(precision: Precision) -> Self {
        Self::wrap(NAN, precision)
    }

    /// π to the working digits of `precision`.
    #[must_use]
    pub fn pi(precision: Precision) -> Self {
        let pi = with_consts(|consts| consts.pi(precision.bits(), ROUNDING));
        Self::wrap(pi.unwrap_or(NAN), precision)
    }

    /// Parses a real literal such as `-12.5`, `3E-4` or `2e+1.5`.
    ///
    /// An exponent with a fractional part scales the mantissa by the
    /// corresponding real power of ten.
    ///
    /// # Errors
    /// `ParseError::InvalidLiteral` when the text is not a real literal or its
    /// exponent lies beyond the representable range.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::real::RealNumber};
    ///
    /// let precision = Precision::new(12);
    /// let parse = |text| RealNumber::parse(text, precision).unwrap().to_string();
    /// assert_eq!(parse("0012.500"), "12.5");
    /// assert_eq!(parse("-3e+2"), "-300");
    /// assert_eq!(parse("1e+0.5"), "3.16227766017");
    /// ```
    pub fn parse(literal: &str, precision: Precision) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidLiteral { literal: literal.to_string() };
        let (mantissa, exponent) = match literal.find(['e', 'E']) {
            Some(at) => (&literal[..at], Some(&literal[at + 1..])),
            None => (literal, None),
        };
        let mantissa = plain_decimal(mantissa).ok_or_else(invalid)?;
        let Some(exponent) = exponent else {
            return Self::from_literal(&mantissa, precision).ok_or_else(invalid);
        };

        let exponent = plain_decimal(exponent).and_then(|text| Self::from_literal(&text, precision))
                                              .ok_or_else(invalid)?;
        if exponent.abs() > Self::from_i64(MAX_EXPONENT, precision) {
            return Err(invalid());
        }
        match exponent.to_i64() {
            Some(places) => {
                Self::from_literal(&format!("{mantissa}e{places}"), precision).ok_or_else(invalid)
            },
            None => {
                let mantissa = Self::from_literal(&mantissa, precision).ok_or_else(invalid)?;
                Ok(&mantissa * &Self::from_i64(10, precision).pow(&exponent))
            },
        }
    }

    fn from_literal(text: &str, precision: Precision) -> Option<Self> {
        let bits = precision.bits();
        let parsed = with_consts(|consts| BigFloat::parse(text, Radix::Dec, bits, ROUNDING, consts))?;
        (!parsed.is_nan()).then(|| Self::wrap(parsed, precision))
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// The same value carried at another precision.
    #[must_use]
    pub fn with_precision(&self, precision: Precision) -> Self {
        let mut value = self.value.clone();
        match value.set_precision(precision.bits(), ROUNDING) {
            Ok(()) => Self::wrap(value, precision),
            Err(_) => Self::nan(precision),
        }
    }

    fn bits(&self) -> usize {
        self.precision.bits()
    }

    fn with(&self, value: BigFloat) -> Self {
        Self::wrap(value, self.precision)
    }

    fn with_nan(&self) -> Self {
        Self::nan(self.precision)
    }

    fn with_infinity(&self, negative: bool) -> Self {
        Self::infinity(negative, self.precision)
    }

    /// Applies a function needing the constants cache at this precision.
    fn compute(&self, function: impl FnOnce(&BigFloat, usize, &mut Consts) -> BigFloat) -> Self {
        let bits = self.bits();
        self.with(with_consts(|consts| function(&self.value, bits, consts)).unwrap_or(NAN))
    }

    fn kind(&self) -> Kind {
        if self.value.is_nan() {
            Kind::NaN
        } else if self.value.is_inf() {
            Kind::Infinite { negative: self.value.is_inf_neg() }
        } else {
            Kind::Finite
        }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.value.is_inf()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        matches!(self.kind(), Kind::Finite)
    }

    /// Whether the value is below zero. `nan` is neither sign.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.value.is_negative()
    }

    /// Whether the value is a finite integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.value.is_int()
    }

    /// The value as an `i64`, if it is an integer in range.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        num::to_i64(&self.value)
    }

    fn plus(&self, rhs: &Self) -> Self {
        match (self.kind(), rhs.kind()) {
            (Kind::Finite, Kind::Finite) => {
                self.with(self.value.add(&rhs.value, self.bits(), ROUNDING))
            },
            (Kind::NaN, _) | (_, Kind::NaN) => self.with_nan(),
            (Kind::Infinite { negative: a }, Kind::Infinite { negative: b }) if a != b => {
                self.with_nan()
            },
            (Kind::Infinite { negative }, _) | (_, Kind::Infinite { negative }) => {
                self.with_infinity(negative)
            },
        }
    }

    fn minus(&self, rhs: &Self) -> Self {
        self.plus(&-rhs)
    }

    fn times(&self, rhs: &Self) -> Self {
        match (self.kind(), rhs.kind()) {
            (Kind::Finite, Kind::Finite) => {
                self.with(self.value.mul(&rhs.value, self.bits(), ROUNDING))
            },
            (Kind::NaN, _) | (_, Kind::NaN) => self.with_nan(),
            _ if self.is_zero() || rhs.is_zero() => self.with_nan(),
            _ => self.with_infinity(self.is_negative() != rhs.is_negative()),
        }
    }

    fn divided_by(&self, rhs: &Self) -> Self {
        match (self.kind(), rhs.kind()) {
            (Kind::NaN, _) | (_, Kind::NaN) => self.with_nan(),
            (Kind::Infinite { .. }, Kind::Infinite { .. }) => self.with_nan(),
            (Kind::Finite, Kind::Infinite { .. }) => Self::zero(self.precision),
            (Kind::Infinite { negative }, Kind::Finite) => {
                self.with_infinity(negative != rhs.is_negative())
            },
            (Kind::Finite, Kind::Finite) => {
                if !rhs.is_zero() {
                    self.with(self.value.div(&rhs.value, self.bits(), ROUNDING))
                } else if self.is_zero() {
                    self.with_nan()
                } else {
                    self.with_infinity(self.is_negative())
                }
            },
        }
    }

    /// Applies `function` to a finite value; `nan` and infinities are kept.
    fn map_finite(&self, function: impl FnOnce(&BigFloat) -> BigFloat) -> Self {
        match self.kind() {
            Kind::Finite => self.with(function(&self.value)),
            _ => self.clone(),
        }
    }

    #[must_use]
    pub fn abs(&self) -> Self {
        self.with(self.value.abs())
    }

    #[must_use]
    pub fn floor(&self) -> Self {
        self.map_finite(BigFloat::floor)
    }

    #[must_use]
    pub fn ceil(&self) -> Self {
        self.map_finite(BigFloat::ceil)
    }

    #[must_use]
    pub fn trunc(&self) -> Self {
        self.map_finite(BigFloat::int)
    }

    /// Remainder of truncated division, with the sign of `self`; a zero
    /// divisor gives `nan`.
    #[must_use]
    pub fn fmod(&self, divisor: &Self) -> Self {
        match (self.kind(), divisor.kind()) {
            (Kind::Finite, Kind::Finite) if divisor.is_zero() => self.with_nan(),
            (Kind::Finite, Kind::Finite) => self.with(self.value.rem(&divisor.value)),
            (Kind::Finite, Kind::Infinite { .. }) => self.clone(),
            _ => self.with_nan(),
        }
    }

    /// `1 / self`.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::one(self.precision).divided_by(self)
    }

    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.is_negative() {
            return self.with_nan();
        }
        self.with(self.value.sqrt(self.bits(), ROUNDING))
    }

    #[must_use]
    pub fn cbrt(&self) -> Self {
        self.with(self.value.cbrt(self.bits(), ROUNDING))
    }

    /// `sqrt(self² + other²)`.
    #[must_use]
    pub fn hypot(&self, other: &Self) -> Self {
        if self.is_infinite() || other.is_infinite() {
            return self.with_infinity(false);
        }
        (&(self * self) + &(other * other)).sqrt()
    }

    #[must_use]
    pub fn exp(&self) -> Self {
        self.compute(|value, bits, consts| value.exp(bits, ROUNDING, consts))
    }

    /// Natural logarithm. Zero gives `-inf`, negative values `nan`.
    #[must_use]
    pub fn ln(&self) -> Self {
        if self.is_negative() {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.ln(bits, ROUNDING, consts))
    }

    #[must_use]
    pub fn log2(&self) -> Self {
        if self.is_negative() {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.log2(bits, ROUNDING, consts))
    }

    #[must_use]
    pub fn log10(&self) -> Self {
        if self.is_negative() {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.log10(bits, ROUNDING, consts))
    }

    fn is_odd_integer(&self) -> bool {
        let two = BigFloat::from_i64(2, self.bits());
        self.is_integer() && self.value.rem(&two).abs() == BigFloat::from_i64(1, self.bits())
    }

    /// `self` raised to `exponent`.
    ///
    /// Integer exponents are evaluated by repeated squaring and accept any
    /// base; otherwise a negative base gives `nan`.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::real::RealNumber};
    ///
    /// let precision = Precision::new(20);
    /// let number = |value| RealNumber::from_i64(value, precision);
    /// assert_eq!(number(-2).pow(&number(3)).to_string(), "-8");
    /// assert_eq!(number(2).pow(&number(-2)).to_string(), "0.25");
    /// assert_eq!(number(0).pow(&number(-1)).to_string(), "inf");
    /// ```
    #[must_use]
    pub fn pow(&self, exponent: &Self) -> Self {
        let one = Self::one(self.precision);
        if exponent.is_zero() || *self == one {
            return one;
        }
        if self.is_nan() || exponent.is_nan() {
            return self.with_nan();
        }
        if exponent.is_infinite() {
            let grows = self.abs() > one;
            return match (self.abs() == one, grows == exponent.is_negative()) {
                (true, _) => one,
                (false, true) => Self::zero(self.precision),
                (false, false) => self.with_infinity(false),
            };
        }

        let odd_integer = exponent.is_odd_integer();
        if self.is_zero() || self.is_infinite() {
            let negative = self.is_negative() && odd_integer;
            return if exponent.is_negative() == self.is_zero() {
                self.with_infinity(negative)
            } else {
                Self::zero(self.precision)
            };
        }

        if let Some(n) = exponent.to_i64().filter(|n| n.abs() <= POWI_LIMIT) {
            let power = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
            let raised = self.with(self.value.powi(power, self.bits(), ROUNDING));
            return if n < 0 { raised.recip() } else { raised };
        }
        if self.is_negative() && !exponent.is_integer() {
            return self.with_nan();
        }
        let magnitude = self.abs().compute(|value, bits, consts| {
                                      value.pow(&exponent.value, bits, ROUNDING, consts)
                                  });
        if self.is_negative() && odd_integer { -magnitude } else { magnitude }
    }

    /// Sine of an angle in radians.
    #[must_use]
    pub fn sin(&self) -> Self {
        self.sin_cos().0
    }

    /// Cosine of an angle in radians.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.sin_cos().1
    }

    /// Sine and cosine of an angle in radians; `nan` for infinite angles and
    /// for angles too large to reduce.
    #[must_use]
    pub fn sin_cos(&self) -> (Self, Self) {
        let reducible = self.value.exponent().is_some_and(|exponent| exponent <= REDUCTION_LIMIT);
        if !reducible {
            return (self.with_nan(), self.with_nan());
        }
        let bits = self.bits();
        let pair = with_consts(|consts| {
            (self.value.sin(bits, ROUNDING, consts), self.value.cos(bits, ROUNDING, consts))
        });
        match pair {
            Some((sine, cosine)) => (self.with(sine), self.with(cosine)),
            None => (self.with_nan(), self.with_nan()),
        }
    }

    #[must_use]
    pub fn tan(&self) -> Self {
        let (sine, cosine) = self.sin_cos();
        sine.divided_by(&cosine)
    }

    /// Arcsine in radians; `nan` outside `[-1, 1]`.
    #[must_use]
    pub fn asin(&self) -> Self {
        if self.abs() > Self::one(self.precision) {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.asin(bits, ROUNDING, consts))
    }

    /// Arccosine in radians; `nan` outside `[-1, 1]`.
    #[must_use]
    pub fn acos(&self) -> Self {
        if self.abs() > Self::one(self.precision) {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.acos(bits, ROUNDING, consts))
    }

    /// Arctangent in radians; `±π/2` at the infinities.
    #[must_use]
    pub fn atan(&self) -> Self {
        self.compute(|value, bits, consts| value.atan(bits, ROUNDING, consts))
    }

    /// Angle of the point `(x, self)` in radians, in `(-π, π]`.
    #[must_use]
    pub fn atan2(&self, x: &Self) -> Self {
        if self.is_nan() || x.is_nan() {
            return self.with_nan();
        }
        if x.is_zero() {
            if self.is_zero() {
                return Self::zero(self.precision);
            }
            let quarter_turn = &Self::pi(self.precision) / &Self::from_i64(2, self.precision);
            return if self.is_negative() { -quarter_turn } else { quarter_turn };
        }
        let angle = self.divided_by(x).atan();
        if !x.is_negative() {
            return angle;
        }
        let pi = Self::pi(self.precision);
        if self.is_negative() { &angle - &pi } else { &angle + &pi }
    }

    #[must_use]
    pub fn sinh(&self) -> Self {
        self.compute(|value, bits, consts| value.sinh(bits, ROUNDING, consts))
    }

    #[must_use]
    pub fn cosh(&self) -> Self {
        self.compute(|value, bits, consts| value.cosh(bits, ROUNDING, consts))
    }

    /// Hyperbolic tangent; `±1` at the infinities.
    #[must_use]
    pub fn tanh(&self) -> Self {
        self.compute(|value, bits, consts| value.tanh(bits, ROUNDING, consts))
    }

    #[must_use]
    pub fn asinh(&self) -> Self {
        self.compute(|value, bits, consts| value.asinh(bits, ROUNDING, consts))
    }

    /// Inverse hyperbolic cosine; `nan` below one.
    #[must_use]
    pub fn acosh(&self) -> Self {
        if *self < Self::one(self.precision) {
            return self.with_nan();
        }
        self.compute(|value, bits, consts| value.acosh(bits, ROUNDING, consts))
    }

    /// Inverse hyperbolic tangent; `±inf` at `±1`, `nan` beyond.
    #[must_use]
    pub fn atanh(&self) -> Self {
        let one = Self::one(self.precision);
        match self.abs().partial_cmp(&one) {
            Some(Ordering::Less) => {
                self.compute(|value, bits, consts| value.atanh(bits, ROUNDING, consts))
            },
            Some(Ordering::Equal) => self.with_infinity(self.is_negative()),
            _ => self.with_nan(),
        }
    }

    /// The gamma function.
    ///
    /// Positive integers are computed exactly, zero gives `inf` and negative
    /// integers give `nan`.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::real::RealNumber};
    ///
    /// let precision = Precision::new(20);
    /// assert_eq!(RealNumber::from_i64(5, precision).gamma().to_string(), "24");
    /// assert_eq!(RealNumber::from_i64(-2, precision).gamma().to_string(), "nan");
    /// ```
    #[must_use]
    pub fn gamma(&self) -> Self {
        gamma::gamma(self)
    }
}

impl ops::Neg for &RealNumber {
    type Output = RealNumber;

    fn neg(self) -> Self::Output {
        self.with(-&self.value)
    }
}

impl ops::Neg for RealNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        -&self
    }
}

arithmetic_operators! {
    RealNumber;
    Add, add => plus;
    Sub, sub => minus;
    Mul, mul => times;
    Div, div => divided_by;
}

impl PartialEq for RealNumber {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialEq<i64> for RealNumber {
    fn eq(&self, other: &i64) -> bool {
        self.value == BigFloat::from_i64(*other, self.bits())
    }
}

impl PartialOrd for RealNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(text: &str) -> RealNumber {
        RealNumber::parse(text, Precision::new(30)).unwrap()
    }

    #[test]
    fn special_values_propagate() {
        let zero = number("0");
        let one = number("1");
        assert_eq!((&one / &zero).to_string(), "inf");
        assert_eq!((&-&one / &zero).to_string(), "-inf");
        assert!((&zero / &zero).is_nan());
        let infinity = &one / &zero;
        assert!((&infinity - &infinity).is_nan());
        assert!((&infinity * &zero).is_nan());
        assert_eq!((&one / &infinity).to_string(), "0");
        assert!(number("2").partial_cmp(&number("0").ln().sqrt()).is_none());
        assert!(!(&zero * &number("-1")).is_negative());
    }

    #[test]
    fn out_of_domain_is_nan() {
        assert!(number("-1").sqrt().is_nan());
        assert!(number("2").asin().is_nan());
        assert!(number("0.5").acosh().is_nan());
        assert!(number("-8").pow(&number("0.5")).is_nan());
        assert!(number("-3").gamma().is_nan());
        assert!(number("-2").log10().is_nan());
        assert_eq!(number("1").atanh().to_string(), "inf");
        assert_eq!(number("0").ln().to_string(), "-inf");
        assert!(number("1e+50000").sin().is_nan());
    }

    #[test]
    fn fmod_keeps_dividend_sign() {
        assert_eq!(number("7").fmod(&number("3")).to_string(), "1");
        assert_eq!(number("-7").fmod(&number("3")).to_string(), "-1");
        assert_eq!(number("5.5").fmod(&number("-2")).to_string(), "1.5");
        assert!(number("5").fmod(&number("0")).is_nan());
    }

    #[test]
    fn powers() {
        assert_eq!(number("2").pow(&number("10")).to_string(), "1024");
        assert_eq!(number("4").pow(&number("0.5")).to_string(), "2");
        assert_eq!(number("-2").pow(&number("-3")).to_string(), "-0.125");
        assert_eq!(number("-2").pow(&number("3e+9")).to_string(), "inf");
        assert_eq!(number("10").pow(&number("1e30")).to_string(), "inf");
    }

    #[test]
    fn literals() {
        assert_eq!(number(".5").to_string(), "0.5");
        assert_eq!(number("-0").to_string(), "0");
        assert_eq!(number("2.5e-3").to_string(), "0.0025");
        assert!(RealNumber::parse("1.2.3", Precision::new(30)).is_err());
        assert!(RealNumber::parse("1e+99999999999999999", Precision::new(30)).is_err());
    }

    #[test]
    fn exact_integers() {
        let factorial: BigUint = (1..=30u32).map(BigUint::from).product();
        let exact = RealNumber::from_integer(&factorial, Precision::new(40));
        assert_eq!(exact.to_string(), "265252859812191058636308480000000");
        assert_eq!(exact.with_precision(Precision::new(5)).to_string(), "2.6525e+32");
        assert_eq!(number("-12").to_i64(), Some(-12));
        assert_eq!(number("12.5").to_i64(), None);
    }

    #[test]
    fn atan2_quadrants() {
        let degrees = |y: &str, x: &str| {
            let radians = number(y).atan2(&number(x));
            (&(&radians * &number("180")) / &RealNumber::pi(Precision::new(30))).to_string()
        };
        assert_eq!(degrees("1", "1"), "45");
        assert_eq!(degrees("1", "-1"), "135");
        assert_eq!(degrees("-1", "-1"), "-135");
        assert_eq!(degrees("-1", "0"), "-90");
    }
}
