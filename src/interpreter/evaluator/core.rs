use log::debug;

use crate::{
    ast::ParsedQuery,
    config::Precision,
    error::{QueryResult, RuntimeError},
    interpreter::{
        evaluator::dispatch,
        parser::core::{ParseResult, parse},
        tokenizer::classify,
        variables::{self, VariableTable},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The answers and faults of one batch.
///
/// Answers keep the order their queries were given in. Faults are only
/// reported once the whole batch has been seen.
#[derive(Debug, Default)]
pub struct Batch {
    results: Vec<String>,
    faults:  Vec<String>,
}

impl Batch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer line of a query.
    pub fn push(&mut self, line: String) {
        self.results.push(line);
    }

    /// Records a fault to be reported when the batch finishes.
    pub fn fault(&mut self, error: &RuntimeError) {
        debug!("collected fault: {error}");
        self.faults.push(error.to_string());
    }

    /// Closes the batch.
    ///
    /// # Errors
    /// `RuntimeError::Aggregate` with every distinct fault, sorted, when any
    /// fault was recorded. The answers are dropped in that case.
    pub fn finish(mut self) -> EvalResult<Vec<String>> {
        if self.faults.is_empty() {
            return Ok(self.results);
        }
        self.faults.sort();
        self.faults.dedup();
        Err(RuntimeError::Aggregate { faults: self.faults })
    }
}

/// Evaluates query lines at a fixed precision.
///
/// The engine holds no state between calls; variables are passed in by the
/// caller.
///
/// # Example
/// ```
/// use numq::{
///     config::Precision,
///     interpreter::{evaluator::core::Engine, variables::VariableTable},
/// };
///
/// let engine = Engine::new(Precision::new(20));
/// let mut variables = VariableTable::new();
/// variables.insert("x", "5");
///
/// assert_eq!(engine.evaluate_line("ADD x,1", &variables).unwrap(), ["ADD 5,1 = 6\n"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    precision: Precision,
}

impl Engine {
    #[must_use]
    pub const fn new(precision: Precision) -> Self {
        Self { precision }
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// Substitutes, classifies and parses one line without evaluating it.
    ///
    /// # Errors
    /// Any classification or parsing error of the line.
    pub fn prepare(&self, line: &str, variables: &VariableTable) -> ParseResult<ParsedQuery> {
        parse(&classify(line, variables)?, self.precision)
    }

    /// Evaluates a batch of parsed queries, one answer line per query.
    ///
    /// Echo queries answer with their own text. Every other query is looked up
    /// in the tables of its domain; an unknown opcode is recorded as a fault
    /// and evaluation goes on with the next query.
    ///
    /// # Errors
    /// - The first domain error raised by a handler, which stops the batch.
    /// - `RuntimeError::Aggregate` when any opcode was unknown.
    pub fn evaluate(&self, queries: &[ParsedQuery]) -> EvalResult<Vec<String>> {
        let mut batch = Batch::new();

        for query in queries {
            if query.is_echo() {
                batch.push(format!("{}\n", query.opcode));
                continue;
            }
            match dispatch::apply(query) {
                Some(answer) => batch.push(answer?),
                None => batch.fault(&RuntimeError::SyntaxFault { opcode: query.opcode.clone() }),
            }
        }

        batch.finish()
    }

    /// Prepares and evaluates a single line as a batch of its own.
    ///
    /// # Errors
    /// Any error raised while preparing or evaluating the line.
    pub fn evaluate_line(&self,
                         line: &str,
                         variables: &VariableTable)
                         -> QueryResult<Vec<String>> {
        let query = self.prepare(line, variables)?;
        Ok(self.evaluate(&[query])?)
    }

    /// Like [`Self::evaluate_line`], returning the one answer line.
    ///
    /// # Errors
    /// Any error raised while preparing or evaluating the line.
    pub fn evaluate_one(&self, line: &str, variables: &VariableTable) -> QueryResult<String> {
        Ok(self.evaluate_line(line, variables)?
               .into_iter()
               .next()
               .unwrap_or_default())
    }

    /// Applies a `set` line, returning the updated table.
    ///
    /// `variables` is left untouched whatever happens.
    ///
    /// # Errors
    /// `ParseError::VariableRuleViolation` when the line is not an assignment,
    /// or any error raised while evaluating its right-hand side.
    ///
    /// # Example
    /// ```
    /// use numq::{
    ///     config::Precision,
    ///     interpreter::{evaluator::core::Engine, variables::VariableTable},
    /// };
    ///
    /// let engine = Engine::new(Precision::new(20));
    /// let variables = engine.resolve_set_line("set x = 5", &VariableTable::new()).unwrap();
    /// let variables = engine.resolve_set_line("set y = MULTIPLY x,x", &variables).unwrap();
    /// assert_eq!(variables.get("y"), Some("25"));
    /// ```
    pub fn resolve_set_line(&self,
                            line: &str,
                            variables: &VariableTable)
                            -> QueryResult<VariableTable> {
        let assignment = variables::resolve(line, variables, self)?;
        let mut updated = variables.clone();
        updated.insert(&assignment.name, &assignment.value);
        Ok(updated)
    }
}

/// The value part of an answer line: the text after the first `= `, without
/// the line break.
///
/// # Example
/// ```
/// use numq::interpreter::evaluator::core::answer;
///
/// assert_eq!(answer("ADD 2,3 = 5\n"), "5");
/// assert_eq!(answer("get z = 1-1i\n"), "1-1i");
/// ```
#[must_use]
pub fn answer(line: &str) -> &str {
    line.split_once("= ")
        .map_or(line, |(_, value)| value)
        .trim_end_matches('\n')
}
