use crate::{
    config::Precision,
    interpreter::{
        grammar,
        value::{complex::ComplexNumber, real::RealNumber},
    },
};

/// Numeric domain of a query, decided by whether its literals carry a
/// trailing `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Real operands.
    Real,
    /// Complex operands.
    Complex,
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => write!(f, "real"),
            Self::Complex => write!(f, "complex"),
        }
    }
}

/// Number of operands a query names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// `OPCODE x`
    Single,
    /// `OPCODE x,y`
    Double,
}

/// The two operands of a query, both of one domain.
///
/// Single-operand queries carry the domain's zero as their second operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Operands {
    /// Real operands.
    Real(RealNumber, RealNumber),
    /// Complex operands.
    Complex(ComplexNumber, ComplexNumber),
}

impl Operands {
    /// The domain the operands belong to.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        match self {
            Self::Real(..) => Domain::Real,
            Self::Complex(..) => Domain::Complex,
        }
    }
}

/// A classified and parsed query, ready for evaluation.
///
/// For an echo query (`get NAME = VALUE`) the opcode holds the whole echo text
/// and the operands are real zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Operation name, or the echo text of a `get` query.
    pub opcode:   String,
    /// The operands, in source order.
    pub operands: Operands,
}

impl ParsedQuery {
    /// Builds the query produced by `get NAME`, whose result is its own text.
    ///
    /// # Example
    /// ```
    /// use numq::{ast::ParsedQuery, config::Precision};
    ///
    /// let query = ParsedQuery::echo("get x = 5", Precision::default());
    /// assert!(query.is_echo());
    /// ```
    #[must_use]
    pub fn echo(text: &str, precision: Precision) -> Self {
        Self { opcode:   text.to_string(),
               operands: Operands::Real(RealNumber::zero(precision),
                                        RealNumber::zero(precision)), }
    }

    /// Whether the query only echoes its text.
    #[must_use]
    pub fn is_echo(&self) -> bool {
        grammar::GET_ECHO.is_match(&self.opcode)
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.operands.domain()
    }
}
