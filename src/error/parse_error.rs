#[derive(Debug)]
/// Represents all errors that can occur before a query is evaluated.
pub enum ParseError {
    /// The line matches none of the query shapes.
    SyntaxFault {
        /// The offending line, after variable substitution.
        line: String,
    },
    /// A literal matched the grammar but its value cannot be represented.
    InvalidLiteral {
        /// The literal as written.
        literal: String,
    },
    /// A `set` line matches none of the assignment forms.
    VariableRuleViolation {
        /// The offending line.
        line: String,
    },
    /// A `set` query answered `inf`, `-inf` or `nan`, which no later query
    /// could read back as a literal.
    NonFiniteValue {
        /// The variable being bound.
        name:  String,
        /// The rendered answer.
        value: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyntaxFault { line } => write!(f, "Syntax Fault: failed to process {line}"),
            Self::InvalidLiteral { literal } => {
                write!(f, "Invalid literal '{literal}': exponent is out of range.")
            },
            Self::VariableRuleViolation { line } => write!(f,
                                                           "Variable Rule Violation: '{line}' is not a valid assignment."),
            Self::NonFiniteValue { name, value } => {
                write!(f, "Variable Rule Violation: '{name}' cannot hold {value}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
