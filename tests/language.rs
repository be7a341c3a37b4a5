use std::fs::{self};

use numq::{
    config::Precision,
    interpreter::evaluator::core::{Engine, answer},
    run,
    session::{Outcome, Session},
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// Precision used by the book runner; every documented answer is exact.
const BOOK_DIGITS: u64 = 100;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_numq_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = check_block(&code) {
                panic!("numq example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No numq examples found in book/src");
}

fn extract_numq_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```numq") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// The last query of a block and what it gave.
struct Submitted<'a> {
    query:   &'a str,
    outcome: Result<Outcome, String>,
    checked: bool,
}

impl Submitted<'_> {
    fn unexpected_failure(&self) -> Option<String> {
        match &self.outcome {
            Err(message) if !self.checked => Some(format!("'{}' failed: {message}", self.query)),
            _ => None,
        }
    }
}

/// Submits every line of a block to one session. A `=> ANSWER` line checks
/// the answer of the query above it, a `!! MESSAGE` line checks that the query
/// above it failed with an error containing `MESSAGE`.
fn check_block(code: &str) -> Result<(), String> {
    let mut session = Session::new(Engine::new(Precision::new(BOOK_DIGITS)));
    let mut last: Option<Submitted> = None;

    for line in code.lines() {
        if let Some(expected) = line.strip_prefix("=> ") {
            let Some(submitted) = &last else {
                return Err(format!("answer '{expected}' follows no query"));
            };
            match &submitted.outcome {
                Ok(Outcome::Answered(answers)) if answers.len() == 1 => {
                    let actual = answer(&answers[0]);
                    if actual != expected {
                        return Err(format!("'{}': expected '{expected}', got '{actual}'",
                                           submitted.query));
                    }
                },
                outcome => {
                    return Err(format!("'{}' gave {outcome:?}, expected '{expected}'",
                                       submitted.query));
                },
            }
        } else if let Some(expected) = line.strip_prefix("!! ") {
            let Some(submitted) = &mut last else {
                return Err(format!("error '{expected}' follows no query"));
            };
            match &submitted.outcome {
                Err(message) if message.contains(expected) => submitted.checked = true,
                outcome => {
                    return Err(format!("'{}' gave {outcome:?}, expected error '{expected}'",
                                       submitted.query));
                },
            }
        } else {
            if let Some(failure) = last.as_ref().and_then(Submitted::unexpected_failure) {
                return Err(failure);
            }
            last = Some(Submitted { query:   line,
                                    outcome: session.submit(line).map_err(|e| e.to_string()),
                                    checked: false, });
        }
    }

    match last.as_ref().and_then(Submitted::unexpected_failure) {
        Some(failure) => Err(failure),
        None => Ok(()),
    }
}

fn digits(value: u64) -> Precision {
    Precision::new(value)
}

fn answers(script: &str) -> Vec<String> {
    run(script, digits(30)).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn failure(script: &str) -> String {
    match run(script, digits(30)) {
        Ok(answers) => panic!("Script succeeded with {answers:?} but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn answer_lines_repeat_the_query() {
    assert_eq!(answers("ADD 2,3"), ["ADD 2,3 = 5\n"]);
    assert_eq!(answers("SUBTRACT 2, 3.50"), ["SUBTRACT 2,3.5 = -1.5\n"]);
    assert_eq!(answers("ADD 2i,3i"), ["ADD 2i,3i = 5i\n"]);
    assert_eq!(answers("MULTIPLY 1+2i,3-1i"), ["MULTIPLY 1+2i,3-1i = 5+5i\n"]);
}

#[test]
fn single_shape_reaching_a_double_handler() {
    assert_eq!(answers("ADD 5"), ["ADD 5,0 = 5\n"]);
    assert_eq!(answers("FLOOR 2.5,9"), ["FLOOR 2.5 = 2\n"]);
}

#[test]
fn degree_trigonometry() {
    assert_eq!(answers("TANGENT 90"), ["TANGENT 90 = inf\n"]);
    assert_eq!(answers("SINE 30"), ["SINE 30 = 0.5\n"]);
    assert_eq!(answers("INVERSE_SINE 1"), ["INVERSE_SINE 1 = 90\n"]);
}

#[test]
fn complex_results_that_are_real() {
    assert_eq!(answers("MODULUS 3+4i"), ["MODULUS 3+4i = 5\n"]);
    assert_eq!(answers("ARGUMENT -1+0i"), ["ARGUMENT -1+0i = 180\n"]);
}

#[test]
fn domain_errors() {
    assert!(failure("DIVIDE 5,0").contains("Division by zero is undefined"));
    assert_eq!(failure("DIVIDE 1i,0i"), "Cannot divide complex number by zero.");
    assert_eq!(failure("ROOT 1i,0i"), "Zeroth root of complex number is undefined.");
    assert_eq!(failure("NATURAL_LOGARITHM 0i"), "Cannot take log of complex zero.");
    assert_eq!(failure("COMMON_LOGARITHM 0"), "Cannot take log of zero.");
}

#[test]
fn unknown_opcodes_fail_the_whole_batch() {
    assert_eq!(failure("FOO 1,2\nADD 2,3"), "Syntax Fault: failed to process FOO");
    assert_eq!(failure("ZED 1\nFOO 1,2\nFOO 3\nBAR 1i"),
               "Syntax Fault: failed to process BAR\nSyntax Fault: failed to process FOO\nSyntax \
                Fault: failed to process ZED");
}

#[test]
fn complex_only_opcodes_reject_reals() {
    assert_eq!(failure("CONJUGATE 3"), "Syntax Fault: failed to process CONJUGATE");
    assert_eq!(failure("MOD 1i,2i"), "Syntax Fault: failed to process MOD");
}

#[test]
fn malformed_lines() {
    assert_eq!(failure("ADD 1,2i"), "Syntax Fault: failed to process ADD 1,2i");
    assert_eq!(failure("ADD 1 + 2"), "Syntax Fault: failed to process ADD 1 + 2");
    assert!(failure("ADD .5,1").starts_with("Syntax Fault"));
}

#[test]
fn results_keep_input_order() {
    assert_eq!(answers("ADD 1i,1i\nADD 1,1\nCONJUGATE 1-1i"),
               ["ADD 1i,1i = 2i\n", "ADD 1,1 = 2\n", "CONJUGATE 1-1i = 1+1i\n"]);
}

#[test]
fn literals_render_canonically() {
    for (literal, canonical) in [("0012.500", "12.5"),
                                 ("-0", "0"),
                                 ("1e+3", "1000"),
                                 ("2.5E-2", "0.025"),
                                 ("-7.000", "-7")]
    {
        assert_eq!(answers(&format!("ABSOLUTE {literal}")),
                   [format!("ABSOLUTE {canonical} = {}\n", canonical.trim_start_matches('-'))]);
    }
}
