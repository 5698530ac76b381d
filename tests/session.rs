use calcpad::calculator::{Calculator, History};
use calcpad::display::{JsonProjector, TextProjector};
use calcpad::session::Session;
use serde_json::Value;

fn run_json(input: &str) -> Vec<Value> {
    let mut session = Session::new(Calculator::new(), JsonProjector::new(Vec::new()));
    session.run(input.as_bytes()).unwrap();

    let output = String::from_utf8(session.into_projector().into_inner()).unwrap();
    output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn last_display(events: &[Value]) -> &Value {
    events
        .iter()
        .rev()
        .find(|event| event["type"] == "display")
        .expect("at least one display event")
}

#[test]
fn test_addition_then_fresh_entry() {
    let events = run_json("7 + 3 Enter\n9\n");
    let display = last_display(&events);

    assert_eq!(display["current"], "9");
    assert_eq!(display["previous"], Value::Null);
    assert_eq!(display["history"][0]["expression"], "7 + 3");
    assert_eq!(display["history"][0]["result"], "10");
}

#[test]
fn test_chained_operators() {
    let events = run_json("2+3-\n");
    let display = last_display(&events);

    assert_eq!(display["previous"], "5");
    assert_eq!(display["operator"], "subtract");
    assert_eq!(display["current"], "");
}

#[test]
fn test_division_by_zero_is_reported() {
    let events = run_json("5/0=\n");

    let notices: Vec<&Value> = events
        .iter()
        .filter(|event| event["type"] == "notice")
        .collect();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0]["message"], "Cannot divide by zero!");

    let display = last_display(&events);
    assert_eq!(display["previous"], "5");
    assert_eq!(display["operator"], "divide");
    assert_eq!(display["current"], "0");
    assert_eq!(display["history"], Value::Array(Vec::new()));
}

#[test]
fn test_recall_and_clear_history() {
    let events = run_json("1/8=\n2*2=\nrecall 1\n");
    let display = last_display(&events);
    assert_eq!(display["current"], "0.125");
    assert_eq!(display["history"][0]["expression"], "2 × 2");
    assert_eq!(display["history"][1]["expression"], "1 ÷ 8");

    let events = run_json("1/8=\nch\n");
    assert_eq!(last_display(&events)["history"], Value::Array(Vec::new()));
}

#[test]
fn test_editing_keys() {
    let events = run_json("123 Backspace neg .5.\n");
    assert_eq!(last_display(&events)["current"], "-12.5");

    let events = run_json("9*8 Escape\n");
    let display = last_display(&events);
    assert_eq!(display["current"], "0");
    assert_eq!(display["previous"], Value::Null);
}

#[test]
fn test_history_capacity_is_bounded() {
    let input: String = (1..=12).map(|i| format!("{}+0=\n", i)).collect();
    let mut session = Session::new(
        Calculator::with_history(History::with_capacity(3)),
        JsonProjector::new(Vec::new()),
    );
    session.run(input.as_bytes()).unwrap();

    let results: Vec<String> = session
        .calculator()
        .history()
        .iter()
        .map(|record| record.result_text())
        .collect();
    assert_eq!(results, vec!["12", "11", "10"]);
}

#[test]
fn test_text_display() {
    let mut session = Session::new(Calculator::new(), TextProjector::new(Vec::new(), true));
    session.run("1500*2=\nquit\n".as_bytes()).unwrap();

    let output = String::from_utf8(session.into_projector().into_inner()).unwrap();
    assert!(output.ends_with("  \n  3,000\n  history:\n  [0] 1500 × 2 = 3,000\n"));
}
