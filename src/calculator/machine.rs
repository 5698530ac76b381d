//! The calculator state machine.
//!
//! Operators execute immediately: choosing a second operator while one is
//! pending folds the pending pair first, so `2 + 3 -` leaves `5 -` behind.
//! There is no precedence.

use tracing::debug;

use super::error::{CalcError, InvalidInput};
use super::evaluation::format_result;
use super::history::{History, HistoryRecord};
use super::operand::Operand;
use super::operator::Operator;

/// A character that can be appended to the current operand: a digit or `.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token(char);

impl Token {
    pub const POINT: Token = Token('.');

    pub fn from_char(c: char) -> Option<Self> {
        (c.is_ascii_digit() || c == '.').then_some(Self(c))
    }

    /// Token for a decimal digit, `None` above 9.
    pub fn digit(value: u8) -> Option<Self> {
        char::from_digit(u32::from(value), 10).map(Self)
    }

    pub fn is_point(&self) -> bool {
        self.0 == '.'
    }

    pub fn as_char(&self) -> char {
        self.0
    }
}

/// Everything the input surface can ask the calculator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Append(Token),
    Operator(Operator),
    Compute,
    Delete,
    Clear,
    ToggleSign,
    ClearHistory,
    /// Select a history entry; 0 is the newest.
    RecallHistory(usize),
}

/// Two-operand running calculation plus its history ledger.
#[derive(Clone, Debug)]
pub struct Calculator {
    current: Operand,
    previous: Option<Operand>,
    operator: Option<Operator>,
    awaiting_fresh_input: bool,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_history(History::default())
    }

    /// Create a calculator around an existing (usually empty) ledger.
    pub fn with_history(history: History) -> Self {
        Self {
            current: Operand::zero(),
            previous: None,
            operator: None,
            awaiting_fresh_input: false,
            history,
        }
    }

    pub fn current_operand(&self) -> &Operand {
        &self.current
    }

    pub fn previous_operand(&self) -> Option<&Operand> {
        self.previous.as_ref()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit starts a new operand instead of extending a result.
    pub fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The previous operand with its pending operator, e.g. `12 ×`.
    /// Empty when no operator is pending.
    pub fn previous_line(&self) -> String {
        match (&self.previous, self.operator) {
            (Some(previous), Some(operator)) => format!("{} {}", previous, operator),
            _ => String::new(),
        }
    }

    /// Run one action.
    ///
    /// Rejected edits are absorbed here; the only error that comes back is
    /// [`CalcError::DivisionByZero`].
    pub fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        let outcome = match action {
            Action::Append(token) => self.append(token),
            Action::Operator(operator) => self.choose_operator(operator),
            Action::Compute => self.compute().map(|_| ()),
            Action::Delete => {
                self.delete_last_char();
                Ok(())
            }
            Action::Clear => {
                self.reset();
                Ok(())
            }
            Action::ToggleSign => {
                self.toggle_sign();
                Ok(())
            }
            Action::ClearHistory => {
                self.clear_history();
                Ok(())
            }
            Action::RecallHistory(index) => self.recall_history(index),
        };

        match outcome {
            Err(err) if !err.is_user_visible() => {
                debug!(?action, %err, "Input ignored");
                Ok(())
            }
            other => other,
        }
    }

    /// Clear both operands and the pending operator. History is kept.
    pub fn reset(&mut self) {
        self.current = Operand::zero();
        self.previous = None;
        self.operator = None;
        self.awaiting_fresh_input = false;
    }

    /// Remove the last character; an operand that would be left without a
    /// digit becomes `0`.
    pub fn delete_last_char(&mut self) {
        let len = self.current.len();
        if len <= 1 || (len == 2 && self.current.is_negative()) {
            self.current = Operand::zero();
        } else {
            self.current.pop();
        }
    }

    /// Append a digit or decimal point to the current operand.
    pub fn append(&mut self, token: Token) -> Result<(), CalcError> {
        if token.is_point() && self.current.has_point() {
            return Err(InvalidInput::DuplicatePoint.into());
        }

        if self.awaiting_fresh_input {
            self.current.clear();
            self.awaiting_fresh_input = false;
        }

        if self.current.is_zero_text() && !token.is_point() {
            self.current.clear();
        }
        self.current.push(token.as_char());

        Ok(())
    }

    /// Make `operator` pending, folding any pair already pending.
    ///
    /// A fold that fails silently is skipped and the operator is still
    /// taken. Division by zero cancels the choice so the divisor can be
    /// corrected.
    pub fn choose_operator(&mut self, operator: Operator) -> Result<(), CalcError> {
        if self.current.is_empty() {
            return Err(InvalidInput::MissingOperand.into());
        }

        if self.previous.is_some()
            && let Err(err) = self.compute()
        {
            if err.is_user_visible() {
                return Err(err);
            }
            debug!(%err, "Pending pair not folded");
        }

        self.operator = Some(operator);
        self.previous = Some(std::mem::take(&mut self.current));
        self.awaiting_fresh_input = false;

        Ok(())
    }

    /// Apply the pending operator to both operands and record the result.
    ///
    /// On any error the state and history are left untouched.
    pub fn compute(&mut self) -> Result<f64, CalcError> {
        let previous = self
            .previous
            .as_ref()
            .ok_or_else(|| CalcError::UnparsableOperand {
                text: String::new(),
            })?;
        let lhs = previous.value()?;
        let operator = self.operator.ok_or(InvalidInput::NoPendingOperator)?;
        let rhs = self.current.value()?;

        if operator == Operator::Divide && rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        let result = operator.apply(lhs, rhs);
        let expression = format!("{} {} {}", previous, operator, self.current);
        debug!(%expression, result, "Computed");

        self.history.record(HistoryRecord::new(expression, result));
        self.current = Operand::from(format_result(result));
        self.previous = None;
        self.operator = None;
        self.awaiting_fresh_input = true;

        Ok(result)
    }

    /// Add or strip a leading `-`. Does nothing on `0`.
    pub fn toggle_sign(&mut self) {
        if !self.current.is_zero_text() {
            self.current.toggle_sign();
        }
    }

    /// Load a history result into the current operand.
    pub fn recall_history(&mut self, index: usize) -> Result<(), CalcError> {
        let record = self
            .history
            .get(index)
            .ok_or(InvalidInput::HistoryIndexOutOfRange { index })?;
        self.current = Operand::from(record.result_text());
        Ok(())
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
