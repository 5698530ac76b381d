//! Failure conditions raised by the calculator state machine.
//!
//! Only [`CalcError::DivisionByZero`] is meant to reach the user. Every
//! other variant describes an edit that was absorbed as a no-op; callers
//! that go through [`Calculator::apply`](super::Calculator::apply) never
//! see them.

use thiserror::Error;

/// Why an operation left the calculator untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A malformed edit, such as a second decimal point.
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInput),

    /// An operand that does not read as a number at compute time.
    #[error("operand {text:?} is not a number")]
    UnparsableOperand { text: String },

    /// The pending operator is a division and the divisor is zero.
    #[error("Cannot divide by zero!")]
    DivisionByZero,
}

impl CalcError {
    /// Whether the host must present this failure to the user.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}

/// Kinds of edits that are rejected silently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("operand already contains a decimal point")]
    DuplicatePoint,

    #[error("no operand has been entered")]
    MissingOperand,

    #[error("no operator is pending")]
    NoPendingOperator,

    #[error("history entry {index} does not exist")]
    HistoryIndexOutOfRange { index: usize },
}

impl From<InvalidInput> for CalcError {
    fn from(kind: InvalidInput) -> Self {
        Self::InvalidInput(kind)
    }
}
