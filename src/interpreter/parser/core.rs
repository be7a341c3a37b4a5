use log::debug;

use crate::{
    ast::{Arity, Domain, Operands, ParsedQuery},
    config::Precision,
    error::ParseError,
    interpreter::{
        grammar,
        tokenizer::{ClassifiedLine, Shape},
        value::{complex::ComplexNumber, real::RealNumber},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds the query a classified line describes.
///
/// A single-operand query gets its domain's zero as second operand. An echo
/// line becomes an echo query carrying the whole line as its opcode.
///
/// # Errors
/// - `ParseError::SyntaxFault` if the text does not fit its recorded shape.
/// - `ParseError::InvalidLiteral` for an operand that cannot be represented.
///
/// # Example
/// ```
/// use numq::{
///     ast::Operands,
///     config::Precision,
///     interpreter::{parser::core::parse, tokenizer::classify, variables::VariableTable},
/// };
///
/// let precision = Precision::new(20);
/// let line = classify("SINE 30", &VariableTable::new()).unwrap();
/// let query = parse(&line, precision).unwrap();
///
/// assert_eq!(query.opcode, "SINE");
/// let Operands::Real(x, y) = query.operands else { panic!("expected reals") };
/// assert_eq!((x.to_string(), y.to_string()), ("30".to_string(), "0".to_string()));
/// ```
pub fn parse(line: &ClassifiedLine, precision: Precision) -> ParseResult<ParsedQuery> {
    let Shape::Query { domain, arity } = line.shape else {
        return Ok(ParsedQuery::echo(&line.text, precision));
    };

    let syntax_fault = || ParseError::SyntaxFault { line: line.text.clone() };
    let captures = grammar::query(domain, arity).captures(&line.text)
                                                .ok_or_else(syntax_fault)?;
    let opcode = captures[1].to_string();
    let first = &captures[2];
    let second = match arity {
        Arity::Single => None,
        Arity::Double => Some(captures.get(3).ok_or_else(syntax_fault)?.as_str()),
    };

    let operands = match domain {
        Domain::Real => {
            let second = match second {
                Some(text) => RealNumber::parse(text, precision)?,
                None => RealNumber::zero(precision),
            };
            Operands::Real(RealNumber::parse(first, precision)?, second)
        },
        Domain::Complex => {
            let second = match second {
                Some(text) => ComplexNumber::parse(text, precision)?,
                None => ComplexNumber::zero(precision),
            };
            Operands::Complex(ComplexNumber::parse(first, precision)?, second)
        },
    };

    debug!("parsed {opcode} with {operands:?}");
    Ok(ParsedQuery { opcode, operands })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{tokenizer::classify, variables::VariableTable};

    fn parsed(line: &str) -> ParsedQuery {
        let classified = classify(line, &VariableTable::new()).unwrap();
        parse(&classified, Precision::new(20)).unwrap()
    }

    #[test]
    fn complex_operands() {
        let query = parsed("MULTIPLY 1+2i, -3i");
        assert_eq!(query.opcode, "MULTIPLY");
        let Operands::Complex(a, b) = query.operands else {
            panic!("expected complex operands");
        };
        assert_eq!(a.to_string(), "1+2i");
        assert_eq!(b.to_string(), "-3i");
    }

    #[test]
    fn echo_keeps_its_text() {
        let mut variables = VariableTable::new();
        variables.insert("x", "2.50");
        let classified = classify("get x", &variables).unwrap();
        let query = parse(&classified, Precision::new(20)).unwrap();
        assert!(query.is_echo());
        assert_eq!(query.opcode, "get x = 2.50");
        assert_eq!(query.domain(), Domain::Real);
    }

    #[test]
    fn oversized_exponent_is_rejected() {
        let classified = classify("ADD 1e+99999999999999999,1", &VariableTable::new()).unwrap();
        assert!(matches!(parse(&classified, Precision::new(20)),
                         Err(ParseError::InvalidLiteral { .. })));
    }
}
