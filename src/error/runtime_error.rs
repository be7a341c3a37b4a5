use crate::ast::Domain;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating a batch of queries.
pub enum RuntimeError {
    /// `DIVIDE` with a zero divisor.
    DivisionByZero {
        /// Domain of the failing query.
        domain: Domain,
    },
    /// `MOD` with a zero divisor.
    ModuloByZero,
    /// `ROOT` with a zero index.
    ZerothRoot {
        /// Domain of the failing query.
        domain: Domain,
    },
    /// A logarithm of zero.
    LogarithmOfZero {
        /// Domain of the failing query.
        domain: Domain,
    },
    /// No handler exists for the opcode in the query's domain.
    SyntaxFault {
        /// The unknown opcode.
        opcode: String,
    },
    /// One or more syntax faults collected over a batch; the batch produced no
    /// results.
    Aggregate {
        /// Fault messages, sorted and without duplicates.
        faults: Vec<String>,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { domain: Domain::Real } => {
                write!(f, "Division by zero is undefined.")
            },
            Self::DivisionByZero { domain: Domain::Complex } => {
                write!(f, "Cannot divide complex number by zero.")
            },
            Self::ModuloByZero => write!(f, "Cannot divide by zero."),
            Self::ZerothRoot { domain: Domain::Real } => write!(f, "Zeroth root is undefined."),
            Self::ZerothRoot { domain: Domain::Complex } => {
                write!(f, "Zeroth root of complex number is undefined.")
            },
            Self::LogarithmOfZero { domain: Domain::Real } => write!(f, "Cannot take log of zero."),
            Self::LogarithmOfZero { domain: Domain::Complex } => {
                write!(f, "Cannot take log of complex zero.")
            },
            Self::SyntaxFault { opcode } => write!(f, "Syntax Fault: failed to process {opcode}"),
            Self::Aggregate { faults } => write!(f, "{}", faults.join("\n")),
        }
    }
}

impl std::error::Error for RuntimeError {}
