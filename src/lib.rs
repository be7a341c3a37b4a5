//! # numq
//!
//! numq evaluates arithmetic queries such as `ADD 2,3` or `SINE 30` over real
//! and complex numbers, carrying up to a thousand significant digits by
//! default. Values can be bound to names with `set` and read back with `get`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    config::Precision, error::QueryResult, interpreter::evaluator::core::Engine, session::Session,
};

/// Defines the structure of parsed queries.
///
/// This module declares `ParsedQuery` and the small enums describing a query:
/// its numeric domain, its arity and its operands.
pub mod ast;
/// Numeric precision settings.
///
/// Declares `Precision`, the number of significant digits every value is
/// computed and displayed with, and its default.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while classifying,
/// parsing, assigning or evaluating a line.
///
/// # Responsibilities
/// - Defines one error enum per phase plus a wrapper for the whole pipeline.
/// - Renders every error as the message shown to the user.
pub mod error;
/// Orchestrates the evaluation of query lines.
///
/// This module ties together substitution, classification, parsing, value
/// representations and evaluation.
///
/// # Responsibilities
/// - Coordinates the tokenizer, parser and evaluator.
/// - Provides entry points for evaluating lines and resolving assignments.
pub mod interpreter;
/// Interactive and scripted use of an engine with its variables.
pub mod session;
/// General numeric utilities.
///
/// Decimal rendering of binary floats plus the angle conversions, reciprocal
/// trigonometric functions and combinatorics shared by the opcode handlers.
pub mod util;

/// Runs a script and returns its answer lines.
///
/// Lines are handled as in [`Session::run_script`], starting from an empty set
/// of variables.
///
/// # Errors
/// Returns an error if any line cannot be classified, parsed or assigned, or if
/// evaluating the batch fails.
///
/// # Examples
/// ```
/// use numq::{config::Precision, run};
///
/// let answers = run("set x = 2i\nMULTIPLY x,x", Precision::new(20)).unwrap();
/// assert_eq!(answers, ["MULTIPLY 2i,2i = -4+0i\n"]);
///
/// // Unknown opcodes fail the whole batch.
/// assert!(run("ADD 2,3\nFOO 1,2", Precision::new(20)).is_err());
/// ```
pub fn run(script: &str, precision: Precision) -> QueryResult<Vec<String>> {
    Session::new(Engine::new(precision)).run_script(script)
}
