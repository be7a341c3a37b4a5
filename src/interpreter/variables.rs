use std::collections::HashMap;

use log::info;

use crate::{
    error::{ParseError, QueryResult},
    interpreter::{
        evaluator::core::{Engine, answer},
        grammar,
    },
};

/// Named values bound with `set`.
///
/// Values are kept as the text that gets substituted into later queries:
/// literals as they were written, computed values as they were rendered.
///
/// # Example
/// ```
/// use numq::interpreter::variables::VariableTable;
///
/// let mut variables = VariableTable::new();
/// variables.insert("x", "5");
/// variables.insert("x", "6");
/// assert_eq!(variables.get("x"), Some("6"));
/// assert_eq!(variables.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: HashMap<String, String>,
}

impl VariableTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored text of `name`, if bound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Binds `name` to `value`, returning the previous value.
    pub fn insert(&mut self, name: &str, value: &str) -> Option<String> {
        self.entries.insert(name.to_string(), value.to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every binding.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Bindings in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

/// A binding produced by a `set` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The variable being bound.
    pub name:  String,
    /// The text it is bound to.
    pub value: String,
}

/// Works out what a `set` line binds, without touching `variables`.
///
/// The assignment forms are tried in order. A literal right-hand side is
/// stored exactly as written; anything else is evaluated as a query of its own
/// against `variables` as they stand, and the rendered answer is stored.
///
/// # Errors
/// - `ParseError::VariableRuleViolation` when the line fits no assignment
///   form.
/// - `ParseError::NonFiniteValue` when the right-hand side answers `inf`,
///   `-inf` or `nan`, or a complex value with such a part.
/// - Any error raised while evaluating the right-hand side.
///
/// # Example
/// ```
/// use numq::{
///     config::Precision,
///     interpreter::{
///         evaluator::core::Engine,
///         variables::{VariableTable, resolve},
///     },
/// };
///
/// let engine = Engine::new(Precision::new(20));
/// let mut variables = VariableTable::new();
/// variables.insert("y", "4");
///
/// let assignment = resolve("set x = ROOT y,2", &variables, &engine).unwrap();
/// assert_eq!((assignment.name.as_str(), assignment.value.as_str()), ("x", "2"));
/// assert!(resolve("set x = 1 + 2", &variables, &engine).is_err());
/// ```
pub fn resolve(line: &str, variables: &VariableTable, engine: &Engine) -> QueryResult<Assignment> {
    let Some((form, captures)) = grammar::SET_FORMS.iter()
                                                   .find_map(|(form, pattern)| {
                                                       pattern.captures(line)
                                                              .map(|captures| (*form, captures))
                                                   })
    else {
        return Err(ParseError::VariableRuleViolation { line: line.to_string() }.into());
    };

    let name = captures[1].to_string();
    let rhs = &captures[2];
    let value = if form.is_literal() {
        rhs.to_string()
    } else {
        answer(&engine.evaluate_one(rhs, variables)?).to_string()
    };
    if !grammar::REAL_LITERAL.is_match(&value) && !grammar::COMPLEX_LITERAL.is_match(&value) {
        return Err(ParseError::NonFiniteValue { name, value }.into());
    }

    info!("{name} = {value} ({form:?})");
    Ok(Assignment { name, value })
}
