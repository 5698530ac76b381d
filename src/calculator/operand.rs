//! Editable operand text.

use std::fmt;

use super::error::CalcError;
use super::evaluation::parse_number;

/// A number as typed: raw text that is parsed only when a value is needed.
///
/// The text may be empty (right after an operator is chosen) or hold a lone
/// `-` (sign toggled before any digit). Both fail to parse.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operand {
    text: String,
}

impl Operand {
    /// The operand shown on a cleared calculator.
    pub fn zero() -> Self {
        Self::from("0")
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the text is exactly `0`.
    pub fn is_zero_text(&self) -> bool {
        self.text == "0"
    }

    pub fn has_point(&self) -> bool {
        self.text.contains('.')
    }

    pub fn is_negative(&self) -> bool {
        self.text.starts_with('-')
    }

    /// Number of characters in the text.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Parse the text as a number.
    pub fn value(&self) -> Result<f64, CalcError> {
        parse_number(&self.text).ok_or_else(|| CalcError::UnparsableOperand {
            text: self.text.clone(),
        })
    }

    pub(crate) fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub(crate) fn pop(&mut self) {
        self.text.pop();
    }

    pub(crate) fn clear(&mut self) {
        self.text.clear();
    }

    pub(crate) fn toggle_sign(&mut self) {
        match self.text.strip_prefix('-') {
            Some(rest) => self.text = rest.to_string(),
            None => self.text.insert(0, '-'),
        }
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
