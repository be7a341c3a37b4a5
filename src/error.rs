use std::fmt;

/// Lexing, classification and assignment errors.
///
/// Raised before any query is evaluated: a line that fits none of the query
/// shapes, a literal that cannot be represented, or a `set` line that fits none
/// of the assignment forms.
pub mod parse_error;
/// Evaluation errors.
///
/// Domain errors (division by zero and friends) abort a batch immediately;
/// syntax faults are collected and reported together once the batch is done.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while processing a line.
#[derive(Debug)]
pub enum Error {
    /// The line could not be classified, parsed or assigned.
    Parse(ParseError),
    /// The line was understood but could not be evaluated.
    Runtime(RuntimeError),
}

/// Result of processing a line from start to finish.
pub type QueryResult<T> = Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Runtime(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
