use std::{fmt::Display, ops};

use crate::{config::Precision, error::ParseError, interpreter::value::real::RealNumber};

/// Largest integer exponent `pow` evaluates by repeated multiplication.
const POWI_LIMIT: i64 = 1_000_000;

/// Represents a complex number with real and imaginary parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexNumber {
    /// The real part of the number.
    pub real:      RealNumber,
    /// The imaginary part of the number.
    pub imaginary: RealNumber,
}

impl Display for ComplexNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let imaginary = self.imaginary.to_string();
        if self.real.is_zero() {
            return write!(f, "{imaginary}i");
        }
        let sign = if imaginary.starts_with('-') { "" } else { "+" };
        write!(f, "{}{sign}{imaginary}i", self.real)
    }
}

impl ComplexNumber {
    /// Constructs a new complex number from real and imaginary components.
    ///
    /// # Example
    /// ```
    /// use numq::{
    ///     config::Precision,
    ///     interpreter::value::{complex::ComplexNumber, real::RealNumber},
    /// };
    ///
    /// let precision = Precision::new(10);
    /// let c = ComplexNumber::new(RealNumber::from_i64(5, precision),
    ///                            RealNumber::from_i64(-1, precision));
    /// assert_eq!(c.to_string(), "5-1i");
    /// assert_eq!(c.conj().to_string(), "5+1i");
    /// ```
    #[must_use]
    pub const fn new(real: RealNumber, imaginary: RealNumber) -> Self {
        Self { real, imaginary }
    }

    /// `0`, used as the unused second operand of single-operand queries.
    #[must_use]
    pub fn zero(precision: Precision) -> Self {
        Self::new(RealNumber::zero(precision), RealNumber::zero(precision))
    }

    #[must_use]
    pub fn one(precision: Precision) -> Self {
        Self::new(RealNumber::one(precision), RealNumber::zero(precision))
    }

    /// A real value with no imaginary part.
    #[must_use]
    pub fn from_real(real: RealNumber) -> Self {
        let precision = real.precision();
        Self::new(real, RealNumber::zero(precision))
    }

    /// The imaginary unit scaled by `imaginary`.
    fn from_imaginary(imaginary: RealNumber) -> Self {
        let precision = imaginary.precision();
        Self::new(RealNumber::zero(precision), imaginary)
    }

    /// Parses a complex literal such as `3+4i`, `-2.5e-1-1i` or `7i`.
    ///
    /// The imaginary part starts at the last sign that is not part of an
    /// exponent; without such a sign the whole literal is imaginary.
    ///
    /// # Errors
    /// `ParseError::InvalidLiteral` when either part has an exponent out of
    /// range.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::complex::ComplexNumber};
    ///
    /// let precision = Precision::new(10);
    /// let z = ComplexNumber::parse("1e+1-2.5i", precision).unwrap();
    /// assert_eq!(z.real.to_string(), "10");
    /// assert_eq!(z.imaginary.to_string(), "-2.5");
    /// assert_eq!(ComplexNumber::parse("12i", precision).unwrap().to_string(), "12i");
    /// ```
    pub fn parse(literal: &str, precision: Precision) -> Result<Self, ParseError> {
        let body = literal.strip_suffix('i').unwrap_or(literal);
        let split = body.char_indices()
                        .skip(1)
                        .filter(|&(at, c)| {
                            matches!(c, '+' | '-') && !body[..at].ends_with(['e', 'E'])
                        })
                        .map(|(at, _)| at)
                        .last();
        match split {
            Some(at) => Ok(Self::new(RealNumber::parse(&body[..at], precision)?,
                                     RealNumber::parse(&body[at..], precision)?)),
            None => Ok(Self::from_imaginary(RealNumber::parse(body, precision)?)),
        }
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.real.precision()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }

    /// Returns the absolute value (modulus) of the complex number.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::complex::ComplexNumber};
    ///
    /// let c = ComplexNumber::parse("3+4i", Precision::new(10)).unwrap();
    /// assert_eq!(c.abs().to_string(), "5");
    /// ```
    #[must_use]
    pub fn abs(&self) -> RealNumber {
        self.real.hypot(&self.imaginary)
    }

    /// Returns the complex conjugate of the number.
    #[must_use]
    pub fn conj(&self) -> Self {
        Self::new(self.real.clone(), -&self.imaginary)
    }

    /// Returns the reciprocal (1/z) of the complex number.
    #[must_use]
    pub fn recip(&self) -> Self {
        Self::one(self.precision()).divided_by(self)
    }

    /// Returns the argument (phase angle) in radians, in `(-π, π]`.
    #[must_use]
    pub fn arg(&self) -> RealNumber {
        self.imaginary.atan2(&self.real)
    }

    /// `i · self`.
    #[must_use]
    pub fn times_i(&self) -> Self {
        Self::new(-&self.imaginary, self.real.clone())
    }

    /// Raises the complex number to an integer power by repeated squaring.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::complex::ComplexNumber};
    ///
    /// let c = ComplexNumber::parse("1+1i", Precision::new(10)).unwrap();
    /// assert_eq!(c.powi(2).to_string(), "2i");
    /// assert_eq!(c.powi(-1).to_string(), "0.5-0.5i");
    /// ```
    #[must_use]
    pub fn powi(&self, exp: i64) -> Self {
        let mut base = self.clone();
        let mut result = Self::one(self.precision());
        let mut n = exp.unsigned_abs();

        while n > 0 {
            if n % 2 == 1 {
                result = &result * &base;
            }
            n /= 2;
            if n > 0 {
                base = &base * &base;
            }
        }

        if exp < 0 { result.recip() } else { result }
    }

    /// Raises the complex number to a complex power, `exp(w · ln z)`.
    ///
    /// Real integer exponents are evaluated exactly through [`Self::powi`].
    #[must_use]
    pub fn pow(&self, exponent: &Self) -> Self {
        if exponent.is_zero() {
            return Self::one(self.precision());
        }
        if exponent.imaginary.is_zero()
           && let Some(n) = exponent.real.to_i64().filter(|n| n.abs() <= POWI_LIMIT)
        {
            return self.powi(n);
        }
        if self.is_zero() {
            return if exponent.real.is_negative() || exponent.real.is_zero() {
                Self::new(RealNumber::nan(self.precision()), RealNumber::nan(self.precision()))
            } else {
                Self::zero(self.precision())
            };
        }
        (exponent * &self.ln()).exp()
    }

    /// Returns the principal square root of the complex number.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::complex::ComplexNumber};
    ///
    /// let c = ComplexNumber::parse("-4+0i", Precision::new(10)).unwrap();
    /// assert_eq!(c.sqrt().to_string(), "2i");
    /// ```
    #[must_use]
    pub fn sqrt(&self) -> Self {
        if self.is_zero() {
            return Self::zero(self.precision());
        }
        let two = RealNumber::from_i64(2, self.precision());
        let modulus = self.abs();
        if self.real.is_negative() {
            let t = (&(&modulus - &self.real) / &two).sqrt();
            let real = &self.imaginary.abs() / &(&two * &t);
            let imaginary = if self.imaginary.is_negative() { -t } else { t };
            Self::new(real, imaginary)
        } else {
            let t = (&(&modulus + &self.real) / &two).sqrt();
            let imaginary = &self.imaginary / &(&two * &t);
            Self::new(t, imaginary)
        }
    }

    /// Returns the sine of the complex number.
    #[must_use]
    pub fn sin(&self) -> Self {
        let (sine, cosine) = self.real.sin_cos();
        Self::new(&sine * &self.imaginary.cosh(), &cosine * &self.imaginary.sinh())
    }

    /// Returns the cosine of the complex number.
    #[must_use]
    pub fn cos(&self) -> Self {
        let (sine, cosine) = self.real.sin_cos();
        Self::new(&cosine * &self.imaginary.cosh(), -(&sine * &self.imaginary.sinh()))
    }

    /// Returns the tangent of the complex number.
    #[must_use]
    pub fn tan(&self) -> Self {
        &self.sin() / &self.cos()
    }

    /// Returns the hyperbolic sine of the complex number.
    #[must_use]
    pub fn sinh(&self) -> Self {
        let (sine, cosine) = self.imaginary.sin_cos();
        Self::new(&self.real.sinh() * &cosine, &self.real.cosh() * &sine)
    }

    /// Returns the hyperbolic cosine of the complex number.
    #[must_use]
    pub fn cosh(&self) -> Self {
        let (sine, cosine) = self.imaginary.sin_cos();
        Self::new(&self.real.cosh() * &cosine, &self.real.sinh() * &sine)
    }

    /// Returns the hyperbolic tangent of the complex number.
    #[must_use]
    pub fn tanh(&self) -> Self {
        &self.sinh() / &self.cosh()
    }

    /// Returns the exponential of the complex number.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::value::complex::ComplexNumber};
    ///
    /// let z = ComplexNumber::zero(Precision::new(10));
    /// assert_eq!(z.exp().to_string(), "1+0i");
    /// ```
    #[must_use]
    pub fn exp(&self) -> Self {
        let magnitude = self.real.exp();
        if self.imaginary.is_zero() {
            return Self::from_real(magnitude);
        }
        let (sine, cosine) = self.imaginary.sin_cos();
        Self::new(&magnitude * &cosine, &magnitude * &sine)
    }

    /// Returns the natural logarithm (ln) of the complex number, with the
    /// imaginary part in `(-π, π]`.
    #[must_use]
    pub fn ln(&self) -> Self {
        Self::new(self.abs().ln(), self.arg())
    }

    /// `asin(z) = -i · ln(iz + sqrt(1 - z²))`
    #[must_use]
    pub fn asin(&self) -> Self {
        let one = Self::one(self.precision());
        let root = (&one - &(self * self)).sqrt();
        -(&self.times_i() + &root).ln().times_i()
    }

    /// `acos(z) = π/2 - asin(z)`
    #[must_use]
    pub fn acos(&self) -> Self {
        let quarter_turn = &RealNumber::pi(self.precision())
                           / &RealNumber::from_i64(2, self.precision());
        &Self::from_real(quarter_turn) - &self.asin()
    }

    /// `atan(z) = (i/2) · (ln(1 - iz) - ln(1 + iz))`
    #[must_use]
    pub fn atan(&self) -> Self {
        let one = Self::one(self.precision());
        let rotated = self.times_i();
        let difference = &(&one - &rotated).ln() - &(&one + &rotated).ln();
        difference.times_i().halved()
    }

    /// `asinh(z) = ln(z + sqrt(z² + 1))`
    #[must_use]
    pub fn asinh(&self) -> Self {
        let one = Self::one(self.precision());
        (self + &(&(self * self) + &one).sqrt()).ln()
    }

    /// `acosh(z) = ln(z + sqrt(z + 1) · sqrt(z - 1))`
    #[must_use]
    pub fn acosh(&self) -> Self {
        let one = Self::one(self.precision());
        let root = &(self + &one).sqrt() * &(self - &one).sqrt();
        (self + &root).ln()
    }

    /// `atanh(z) = (ln(1 + z) - ln(1 - z)) / 2`
    #[must_use]
    pub fn atanh(&self) -> Self {
        let one = Self::one(self.precision());
        (&(&one + self).ln() - &(&one - self).ln()).halved()
    }

    fn halved(&self) -> Self {
        let two = RealNumber::from_i64(2, self.precision());
        Self::new(&self.real / &two, &self.imaginary / &two)
    }

    fn plus(&self, rhs: &Self) -> Self {
        Self::new(&self.real + &rhs.real, &self.imaginary + &rhs.imaginary)
    }

    fn minus(&self, rhs: &Self) -> Self {
        Self::new(&self.real - &rhs.real, &self.imaginary - &rhs.imaginary)
    }

    fn times(&self, rhs: &Self) -> Self {
        Self::new(&(&self.real * &rhs.real) - &(&self.imaginary * &rhs.imaginary),
                  &(&self.real * &rhs.imaginary) + &(&self.imaginary * &rhs.real))
    }

    fn divided_by(&self, rhs: &Self) -> Self {
        let denom = &(&rhs.real * &rhs.real) + &(&rhs.imaginary * &rhs.imaginary);
        let real = &(&self.real * &rhs.real) + &(&self.imaginary * &rhs.imaginary);
        let imaginary = &(&self.imaginary * &rhs.real) - &(&self.real * &rhs.imaginary);
        Self::new(&real / &denom, &imaginary / &denom)
    }
}

impl ops::Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.imaginary)
    }
}

impl ops::Neg for &ComplexNumber {
    type Output = ComplexNumber;

    fn neg(self) -> Self::Output {
        ComplexNumber::new(-&self.real, -&self.imaginary)
    }
}

arithmetic_operators! {
    ComplexNumber;
    Add, add => plus;
    Sub, sub => minus;
    Mul, mul => times;
    Div, div => divided_by;
}
