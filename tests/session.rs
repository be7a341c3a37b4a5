use numq::{
    config::Precision,
    interpreter::evaluator::core::Engine,
    session::{Outcome, Session},
};
use pretty_assertions::assert_eq;

fn session() -> Session {
    Session::new(Engine::new(Precision::new(30)))
}

#[test]
fn submit_reports_assignments() {
    let mut session = session();
    assert_eq!(session.submit("set x = ADD 2,3").unwrap(),
               Outcome::Assigned { name:  "x".to_string(),
                                   value: "5".to_string(), });
    assert_eq!(session.submit("get x").unwrap(),
               Outcome::Answered(vec!["get x = 5\n".to_string()]));
}

#[test]
fn blank_lines_and_comments_are_skipped() {
    let mut session = session();
    for line in ["", "   ", "%% comment", "  %% indented comment"] {
        assert_eq!(session.submit(line).unwrap(), Outcome::Skipped, "{line:?}");
    }
}

#[test]
fn scripts_bind_as_they_go() {
    let mut session = session();
    let script = "\
set x = 2
POWER x,10
set x = 3
POWER x,2
%% done";
    assert_eq!(session.run_script(script).unwrap(),
               ["POWER 2,10 = 1024\n", "POWER 3,2 = 9\n"]);
    assert_eq!(session.variables().get("x"), Some("3"));
}

#[test]
fn scripts_are_all_or_nothing() {
    let mut session = session();
    let error = session.run_script("ADD 1,1\nFOO 2,2\nBAR 3").unwrap_err();
    assert_eq!(error.to_string(),
               "Syntax Fault: failed to process BAR\nSyntax Fault: failed to process FOO");
}

#[test]
fn unparsable_script_line_stops_the_script() {
    let mut session = session();
    let error = session.run_script("ADD 1,1\nADD 1 ,1\nset y = 2").unwrap_err();
    assert_eq!(error.to_string(), "Syntax Fault: failed to process ADD 1 ,1");
    assert!(session.variables().is_empty());
}

#[test]
fn flushing_forgets_everything() {
    let mut session = session();
    session.submit("set x = 1").unwrap();
    session.submit("set y = 2i").unwrap();
    session.reset();
    assert!(session.variables().is_empty());
}
