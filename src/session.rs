use log::debug;

use crate::{
    error::QueryResult,
    interpreter::{
        evaluator::core::Engine,
        variables::{self, VariableTable},
    },
};

/// Lines starting with this marker are comments.
pub const COMMENT_MARKER: &str = "%%";

/// What submitting a line did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The line was blank or a comment.
    Skipped,
    /// A `set` line bound a variable.
    Assigned {
        /// The variable that was bound.
        name:  String,
        /// Its new value.
        value: String,
    },
    /// A query line was answered.
    Answered(Vec<String>),
}

/// An engine together with the variables bound so far.
///
/// # Example
/// ```
/// use numq::{
///     config::Precision,
///     interpreter::evaluator::core::Engine,
///     session::{Outcome, Session},
/// };
///
/// let mut session = Session::new(Engine::new(Precision::new(20)));
/// session.submit("set x = 5").unwrap();
///
/// assert_eq!(session.submit("ADD x,1").unwrap(),
///            Outcome::Answered(vec!["ADD 5,1 = 6\n".to_string()]));
/// assert_eq!(session.submit("%% a comment").unwrap(), Outcome::Skipped);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    engine:    Engine,
    variables: VariableTable,
}

/// Whether the first word of `line` is exactly `set`.
fn is_declaration(line: &str) -> bool {
    line.split_whitespace().next() == Some("set")
}

fn is_ignored(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with(COMMENT_MARKER)
}

impl Session {
    #[must_use]
    pub fn new(engine: Engine) -> Self {
        Self { engine,
               variables: VariableTable::new() }
    }

    #[must_use]
    pub const fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Handles one line: skips blanks and comments, applies `set` lines and
    /// evaluates anything else as a batch of its own.
    ///
    /// # Errors
    /// Any error raised by the line. The variables are unchanged when a `set`
    /// line fails.
    pub fn submit(&mut self, line: &str) -> QueryResult<Outcome> {
        if is_ignored(line) {
            return Ok(Outcome::Skipped);
        }
        if is_declaration(line) {
            let assignment = variables::resolve(line, &self.variables, &self.engine)?;
            self.variables.insert(&assignment.name, &assignment.value);
            return Ok(Outcome::Assigned { name:  assignment.name,
                                          value: assignment.value, });
        }
        Ok(Outcome::Answered(self.engine.evaluate_line(line, &self.variables)?))
    }

    /// Runs a whole script.
    ///
    /// `set` lines take effect as they are met, so a query sees the variables
    /// bound above it. Queries are prepared line by line and evaluated
    /// together at the end as one batch.
    ///
    /// # Errors
    /// The first error raised while preparing a line or applying a `set` line,
    /// otherwise any error of the batch. Variables bound before the failure
    /// stay bound.
    ///
    /// # Example
    /// ```
    /// use numq::{config::Precision, interpreter::evaluator::core::Engine, session::Session};
    ///
    /// let mut session = Session::new(Engine::new(Precision::new(20)));
    /// let answers = session.run_script("set r = 2\nMULTIPLY r,r\n%% done\nSUBTRACT r,3")
    ///                      .unwrap();
    /// assert_eq!(answers, ["MULTIPLY 2,2 = 4\n", "SUBTRACT 2,3 = -1\n"]);
    /// ```
    pub fn run_script(&mut self, script: &str) -> QueryResult<Vec<String>> {
        let mut queries = Vec::new();

        for line in script.lines().filter(|line| !is_ignored(line)) {
            if is_declaration(line) {
                let assignment = variables::resolve(line, &self.variables, &self.engine)?;
                self.variables.insert(&assignment.name, &assignment.value);
            } else {
                queries.push(self.engine.prepare(line, &self.variables)?);
            }
        }

        debug!("evaluating a batch of {} queries", queries.len());
        Ok(self.engine.evaluate(&queries)?)
    }

    /// Forgets every variable.
    pub fn reset(&mut self) {
        self.variables.clear();
    }
}
