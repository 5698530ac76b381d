//! Display projection.
//!
//! After input is applied the host captures a [`DisplaySnapshot`] and hands
//! it to a [`DisplayProjector`]. Projectors own the output surface; the
//! calculator never writes anywhere itself.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::calculator::{CalcError, Calculator, Operator, group_digits};

/// Everything a display needs to redraw.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    /// Current operand text.
    pub current: String,
    /// Previous operand, present only while an operator is pending.
    pub previous: Option<String>,
    /// The pending operator.
    pub operator: Option<Operator>,
    /// History entries, newest first.
    pub history: Vec<HistoryLine>,
}

/// One rendered history entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistoryLine {
    pub expression: String,
    /// The result as operand text.
    pub result: String,
}

impl DisplaySnapshot {
    pub fn capture(calc: &Calculator) -> Self {
        let operator = calc.pending_operator();
        let previous = operator
            .and(calc.previous_operand())
            .map(|operand| operand.as_str().to_string());

        Self {
            current: calc.current_operand().as_str().to_string(),
            previous,
            operator,
            history: calc
                .history()
                .iter()
                .map(|record| HistoryLine {
                    expression: record.expression.clone(),
                    result: record.result_text(),
                })
                .collect(),
        }
    }
}

/// An output surface for calculator state.
pub trait DisplayProjector {
    /// Redraw from a snapshot.
    fn render(&mut self, snapshot: &DisplaySnapshot) -> Result<()>;

    /// Present a failure the user has to see.
    fn notify(&mut self, error: &CalcError) -> Result<()>;
}

/// Human-readable projector for terminals.
pub struct TextProjector<W: Write> {
    out: W,
    group_digits: bool,
}

impl<W: Write> TextProjector<W> {
    pub fn new(out: W, group_digits: bool) -> Self {
        Self { out, group_digits }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn number(&self, text: &str) -> String {
        if self.group_digits {
            group_digits(text)
        } else {
            text.to_string()
        }
    }
}

impl<W: Write> DisplayProjector for TextProjector<W> {
    fn render(&mut self, snapshot: &DisplaySnapshot) -> Result<()> {
        let previous = match (&snapshot.previous, snapshot.operator) {
            (Some(previous), Some(operator)) => format!("{} {}", self.number(previous), operator),
            _ => String::new(),
        };
        let current = self.number(&snapshot.current);

        writeln!(self.out, "  {}", previous).context("Failed to write display")?;
        writeln!(self.out, "  {}", current).context("Failed to write display")?;

        if !snapshot.history.is_empty() {
            writeln!(self.out, "  history:").context("Failed to write display")?;
            for (index, line) in snapshot.history.iter().enumerate() {
                let result = self.number(&line.result);
                writeln!(self.out, "  [{}] {} = {}", index, line.expression, result)
                    .context("Failed to write display")?;
            }
        }

        self.out.flush().context("Failed to flush display")
    }

    fn notify(&mut self, error: &CalcError) -> Result<()> {
        writeln!(self.out, "! {}", error).context("Failed to write notice")?;
        self.out.flush().context("Failed to flush display")
    }
}

/// Machine-readable projector: one JSON object per line.
pub struct JsonProjector<W: Write> {
    out: W,
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum JsonEvent<'a> {
    Display(&'a DisplaySnapshot),
    Notice { message: String },
}

impl<W: Write> JsonProjector<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: &JsonEvent<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, event).context("Failed to encode display event")?;
        writeln!(self.out).context("Failed to write display event")?;
        self.out.flush().context("Failed to flush display")
    }
}

impl<W: Write> DisplayProjector for JsonProjector<W> {
    fn render(&mut self, snapshot: &DisplaySnapshot) -> Result<()> {
        self.emit(&JsonEvent::Display(snapshot))
    }

    fn notify(&mut self, error: &CalcError) -> Result<()> {
        self.emit(&JsonEvent::Notice {
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Action, Token};

    fn calculator_with(actions: &[Action]) -> Calculator {
        let mut calc = Calculator::new();
        for &action in actions {
            calc.apply(action).unwrap();
        }
        calc
    }

    fn digit(value: u8) -> Action {
        Action::Append(Token::digit(value).unwrap())
    }

    #[test]
    fn test_capture_pending_operator() {
        let calc = calculator_with(&[digit(4), Action::Operator(Operator::Divide), digit(2)]);
        let snapshot = DisplaySnapshot::capture(&calc);

        assert_eq!(snapshot.current, "2");
        assert_eq!(snapshot.previous.as_deref(), Some("4"));
        assert_eq!(snapshot.operator, Some(Operator::Divide));
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_capture_after_compute() {
        let calc = calculator_with(&[
            digit(7),
            Action::Operator(Operator::Add),
            digit(3),
            Action::Compute,
        ]);
        let snapshot = DisplaySnapshot::capture(&calc);

        assert_eq!(snapshot.current, "10");
        assert_eq!(snapshot.previous, None);
        assert_eq!(
            snapshot.history,
            vec![HistoryLine {
                expression: "7 + 3".to_string(),
                result: "10".to_string(),
            }]
        );
    }

    #[test]
    fn test_text_projector_layout() {
        let calc = calculator_with(&[
            digit(9),
            digit(9),
            digit(9),
            digit(9),
            Action::Operator(Operator::Multiply),
            digit(2),
        ]);
        let mut projector = TextProjector::new(Vec::new(), true);
        projector.render(&DisplaySnapshot::capture(&calc)).unwrap();
        projector.notify(&CalcError::DivisionByZero).unwrap();

        let output = String::from_utf8(projector.into_inner()).unwrap();
        assert_eq!(output, "  9,999 ×\n  2\n! Cannot divide by zero!\n");
    }

    #[test]
    fn test_text_projector_history() {
        let calc = calculator_with(&[
            digit(5),
            Action::Operator(Operator::Subtract),
            digit(8),
            Action::Compute,
        ]);
        let mut projector = TextProjector::new(Vec::new(), false);
        projector.render(&DisplaySnapshot::capture(&calc)).unwrap();

        let output = String::from_utf8(projector.into_inner()).unwrap();
        assert_eq!(output, "  \n  -3\n  history:\n  [0] 5 - 8 = -3\n");
    }

    #[test]
    fn test_json_projector_events() {
        let calc = calculator_with(&[digit(6), Action::Operator(Operator::Multiply)]);
        let mut projector = JsonProjector::new(Vec::new());
        projector.render(&DisplaySnapshot::capture(&calc)).unwrap();
        projector.notify(&CalcError::DivisionByZero).unwrap();

        let output = String::from_utf8(projector.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(
            lines[0],
            serde_json::json!({
                "type": "display",
                "current": "",
                "previous": "6",
                "operator": "multiply",
                "history": []
            })
        );
        assert_eq!(
            lines[1],
            serde_json::json!({ "type": "notice", "message": "Cannot divide by zero!" })
        );
    }
}
