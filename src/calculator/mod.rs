//! Calculator core.
//!
//! This module provides:
//! - The immediate-execution state machine driven by [`Action`]s
//! - Operand text with on-demand parsing
//! - A bounded, newest-first history of computations
//! - Formatting helpers shared with the display layer

mod error;
mod evaluation;
mod history;
mod machine;
mod operand;
mod operator;

pub use error::{CalcError, InvalidInput};
pub use evaluation::{format_result, group_digits, parse_number};
pub use history::{DEFAULT_HISTORY_CAPACITY, History, HistoryRecord};
pub use machine::{Action, Calculator, Token};
pub use operand::Operand;
pub use operator::Operator;
