use log::{debug, trace};

use crate::{
    ast::{Arity, Domain},
    error::ParseError,
    interpreter::{
        grammar,
        lexer::{Word, words},
        parser::core::ParseResult,
        variables::VariableTable,
    },
};

/// What a line turned out to be once classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An `OPCODE operand[,operand]` query.
    Query {
        /// Domain of the operands.
        domain: Domain,
        /// Number of operands.
        arity:  Arity,
    },
    /// A `get` query rewritten to `get NAME = VALUE`.
    Echo,
}

/// A line after variable substitution, tagged with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    /// The line text with every variable replaced by its value.
    pub text:  String,
    /// The shape the text matched.
    pub shape: Shape,
}

/// Replaces every variable named in `line` with its stored value.
///
/// A `get NAME` line becomes `get NAME = VALUE` when `NAME` is bound and is
/// otherwise left alone. In any other line, each identifier that names a
/// variable is replaced, except the first word of the line, which is the
/// opcode. Letters inside numeric literals are never identifiers.
///
/// # Example
/// ```
/// use numq::interpreter::{tokenizer::substitute, variables::VariableTable};
///
/// let mut variables = VariableTable::new();
/// variables.insert("x", "5");
/// variables.insert("e", "0");
/// assert_eq!(substitute("ADD x,2e+1", &variables), "ADD 5,2e+1");
/// assert_eq!(substitute("get x", &variables), "get x = 5");
/// assert_eq!(substitute("get y", &variables), "get y");
/// ```
#[must_use]
pub fn substitute(line: &str, variables: &VariableTable) -> String {
    if let Some(captures) = grammar::GET.captures(line) {
        let name = &captures[1];
        return match variables.get(name) {
            Some(value) => format!("get {name} = {value}"),
            None => line.to_string(),
        };
    }

    let mut output = String::with_capacity(line.len());
    let mut opcode_seen = false;
    for (word, text) in words(line) {
        match word {
            Some(Word::Whitespace) => {},
            Some(Word::Identifier) if opcode_seen => {
                if let Some(value) = variables.get(text) {
                    trace!("substituting {text} -> {value}");
                    output.push_str(value);
                    continue;
                }
            },
            _ => opcode_seen = true,
        }
        output.push_str(text);
    }
    output
}

/// Substitutes variables into `line` and classifies the result.
///
/// Shapes are tried in a fixed order: complex with two operands, complex with
/// one, real with two, real with one, then the `get` echo form.
///
/// # Errors
/// `ParseError::SyntaxFault` when the substituted line fits no shape.
pub fn classify(line: &str, variables: &VariableTable) -> ParseResult<ClassifiedLine> {
    let text = substitute(line, variables);
    let queries = [(Domain::Complex, Arity::Double),
                   (Domain::Complex, Arity::Single),
                   (Domain::Real, Arity::Double),
                   (Domain::Real, Arity::Single)];

    let shape = queries.into_iter()
                       .find(|&(domain, arity)| grammar::query(domain, arity).is_match(&text))
                       .map(|(domain, arity)| Shape::Query { domain, arity })
                       .or_else(|| grammar::GET_ECHO.is_match(&text).then_some(Shape::Echo));
    let Some(shape) = shape else {
        return Err(ParseError::SyntaxFault { line: text });
    };
    debug!("classified '{text}' as {shape:?}");
    Ok(ClassifiedLine { text, shape })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &str)]) -> VariableTable {
        let mut variables = VariableTable::new();
        for (name, value) in entries {
            variables.insert(name, value);
        }
        variables
    }

    #[test]
    fn opcode_is_never_substituted() {
        let variables = table(&[("ADD", "1"), ("x", "2")]);
        assert_eq!(substitute("ADD ADD,x", &variables), "ADD 1,2");
    }

    #[test]
    fn literal_letters_are_not_identifiers() {
        let variables = table(&[("i", "9"), ("E", "9")]);
        assert_eq!(substitute("MULTIPLY 3i,1E+2i", &variables), "MULTIPLY 3i,1E+2i");
    }

    #[test]
    fn classification_order() {
        let variables = table(&[("z", "1+1i")]);
        let shape = |line: &str| classify(line, &variables).map(|classified| classified.shape);
        assert_eq!(shape("ADD z,2i").unwrap(),
                   Shape::Query { domain: Domain::Complex,
                                  arity:  Arity::Double, });
        assert_eq!(shape("SINE 30").unwrap(),
                   Shape::Query { domain: Domain::Real,
                                  arity:  Arity::Single, });
        assert_eq!(shape("get z").unwrap(), Shape::Echo);
        assert!(matches!(shape("ADD z,2"),
                         Err(ParseError::SyntaxFault { line }) if line == "ADD 1+1i,2"));
        assert!(shape("get w").is_err());
    }
}
