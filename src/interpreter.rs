/// The evaluator module executes parsed queries and formats their answers.
///
/// It looks opcodes up in per-domain tables, runs the matching handler and
/// collects answers and faults batch by batch.
///
/// # Responsibilities
/// - Dispatches each query to its real or complex handler.
/// - Raises domain errors such as division by zero immediately.
/// - Collects unknown opcodes and reports them together once a batch ends.
pub mod evaluator;
/// Whole-line patterns for literals, queries and assignments.
pub mod grammar;
/// The lexer splits a line into words so that variables can be found.
///
/// Numeric literals are lexed as single words, so that the `e` of an exponent
/// or the `i` of an imaginary part is never taken for a variable.
pub mod lexer;
/// The parser turns classified lines into queries.
pub mod parser;
/// Variable substitution and line classification.
///
/// # Responsibilities
/// - Replaces variable names with their stored values.
/// - Rewrites `get NAME` into its echo form.
/// - Decides the domain and arity of a line, or rejects it.
pub mod tokenizer;
/// The value module defines the numbers queries work on.
///
/// Real numbers carry a configurable number of significant digits; complex
/// numbers are pairs of them. Both provide the elementary functions the
/// opcodes need.
pub mod value;
/// The variable table and the resolution of `set` lines.
pub mod variables;
