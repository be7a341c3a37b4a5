use crate::{
    ast::Domain,
    interpreter::value::{complex::ComplexNumber, real::RealNumber},
};

/// The result of evaluating a query.
///
/// Real queries always produce `Real`; complex queries produce `Complex`
/// except for the few opcodes (such as `MODULUS`) whose answer is real.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A real number.
    Real(RealNumber),
    /// A complex number (with real and imaginary parts).
    Complex(ComplexNumber),
}

impl From<RealNumber> for Value {
    fn from(r: RealNumber) -> Self {
        Self::Real(r)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Self::Complex(c)
    }
}

impl Value {
    /// The domain the value belongs to.
    ///
    /// # Example
    /// ```
    /// use numq::{
    ///     ast::Domain,
    ///     config::Precision,
    ///     interpreter::value::{complex::ComplexNumber, core::Value},
    /// };
    ///
    /// let value = Value::from(ComplexNumber::zero(Precision::default()));
    /// assert_eq!(value.domain(), Domain::Complex);
    /// ```
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Real(_) => Domain::Real,
            Self::Complex(_) => Domain::Complex,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(r) => write!(f, "{r}"),
            Self::Complex(c) => write!(f, "{c}"),
        }
    }
}
