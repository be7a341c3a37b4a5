use numq::{
    config::Precision,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Engine, variables::VariableTable},
};
use pretty_assertions::assert_eq;

fn engine() -> Engine {
    Engine::new(Precision::new(30))
}

fn bind(lines: &[&str]) -> VariableTable {
    let engine = engine();
    lines.iter().fold(VariableTable::new(), |variables, line| {
                    engine.resolve_set_line(line, &variables)
                          .unwrap_or_else(|e| panic!("'{line}' failed: {e}"))
                })
}

#[test]
fn literals_are_stored_verbatim() {
    let variables = bind(&["set x = 007.50", "set z=1-2i", "set big = 1e+3"]);
    assert_eq!(variables.get("x"), Some("007.50"));
    assert_eq!(variables.get("z"), Some("1-2i"));
    assert_eq!(variables.get("big"), Some("1e+3"));
}

#[test]
fn queries_are_stored_by_their_answer() {
    let variables = bind(&["set a = ROOT 16,2",
                           "set b = CONJUGATE 3+4i",
                           "set c = ADD a,a",
                           "set d = FLOOR c",
                           "set e = get a"]);
    assert_eq!(variables.get("a"), Some("4"));
    assert_eq!(variables.get("b"), Some("3-4i"));
    assert_eq!(variables.get("c"), Some("8"));
    assert_eq!(variables.get("d"), Some("8"));
    assert_eq!(variables.get("e"), Some("4"));
}

#[test]
fn rebinding_replaces_the_value() {
    let variables = bind(&["set x = 5", "set x = 5"]);
    assert_eq!(variables.len(), 1);

    let variables = bind(&["set x = 5", "set x = MULTIPLY x,2"]);
    assert_eq!(variables.get("x"), Some("10"));
}

#[test]
fn substitution_uses_stored_text() {
    let variables = bind(&["set x = 007.50"]);
    let answers = engine().evaluate_line("ADD x,1", &variables).unwrap();
    assert_eq!(answers, ["ADD 7.5,1 = 8.5\n"]);
    let echo = engine().evaluate_line("get x", &variables).unwrap();
    assert_eq!(echo, ["get x = 007.50\n"]);
}

#[test]
fn invalid_assignments() {
    let variables = VariableTable::new();
    for line in ["set x = 1 + 2", "set 1x = 5", "set x = ADD 1.5,y", "set x"] {
        let result = engine().resolve_set_line(line, &variables);
        assert!(matches!(result, Err(Error::Parse(ParseError::VariableRuleViolation { .. }))),
                "{line}");
    }
}

#[test]
fn failing_right_hand_side_leaves_table_alone() {
    let variables = bind(&["set x = 1"]);
    let engine = engine();
    assert!(engine.resolve_set_line("set y = DIVIDE x,0", &variables).is_err());
    assert!(engine.resolve_set_line("set y = ADD w,1", &variables).is_err());
    assert!(engine.resolve_set_line("set y = NOPE 1,2", &variables).is_err());
    assert_eq!(variables.len(), 1);
    assert_eq!(variables.get("y"), None);
}

#[test]
fn non_finite_answers_are_not_bound() {
    let variables = bind(&["set t = 1"]);
    let engine = engine();
    for line in ["set t = TANGENT 90", "set t = LOGARITHM 0,2", "set t = INVERSE_SINE 2"] {
        let result = engine.resolve_set_line(line, &variables);
        assert!(matches!(&result,
                         Err(Error::Parse(ParseError::NonFiniteValue { name, .. })) if name == "t"),
                "{line}");
    }
    assert_eq!(variables.get("t"), Some("1"));

    let answers = engine.evaluate_line("ADD t,1", &variables).unwrap();
    assert_eq!(answers, ["ADD 1,1 = 2\n"]);
}

#[test]
fn opcodes_are_not_substituted() {
    let variables = bind(&["set ADD = 3"]);
    let answers = engine().evaluate_line("ADD ADD,ADD", &variables).unwrap();
    assert_eq!(answers, ["ADD 3,3 = 6\n"]);
}
