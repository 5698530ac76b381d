//! Input surface: key mapping and line parsing.
//!
//! Every physical input ends up as an [`Action`]. Keys go through the fixed
//! keyboard mapping in [`Key::action`]; button names that have no key
//! (sign toggle, clear history, history select) are recognised as words.

use tracing::warn;

use crate::calculator::{Action, Operator, Token};

/// A key press as the host reports it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Look up a named (non-character) key.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" | "return" => Some(Self::Enter),
            "backspace" => Some(Self::Backspace),
            "escape" | "esc" => Some(Self::Escape),
            _ => None,
        }
    }

    /// The action bound to this key, if any.
    pub fn action(&self) -> Option<Action> {
        match *self {
            Self::Char('=') | Self::Enter => Some(Action::Compute),
            Self::Backspace => Some(Action::Delete),
            Self::Escape => Some(Action::Clear),
            Self::Char(c) => Token::from_char(c)
                .map(Action::Append)
                .or_else(|| Operator::from_char(c).map(Action::Operator)),
        }
    }
}

/// One thing the session should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Forward to the calculator.
    Action(Action),
    /// Copy the current operand to the clipboard.
    Copy,
    /// End the session.
    Quit,
}

impl From<Action> for Command {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

/// Parse one input line into commands.
///
/// Words are separated by whitespace. Named keys and button names are
/// matched whole; any other word is read as a run of single key presses.
/// Unmapped input is reported and skipped.
pub fn parse_line(line: &str) -> Vec<Command> {
    let mut commands = Vec::new();
    let mut words = line.split_whitespace();

    while let Some(word) = words.next() {
        if let Some(command) = named_command(word) {
            commands.push(command);
            continue;
        }

        if let Some(key) = Key::from_name(word) {
            commands.extend(key.action().map(Command::from));
            continue;
        }

        if word.eq_ignore_ascii_case("recall") {
            match words.next().map(str::parse::<usize>) {
                Some(Ok(index)) => commands.push(Action::RecallHistory(index).into()),
                _ => warn!("recall needs a history index"),
            }
            continue;
        }

        for c in word.chars() {
            match Key::Char(c).action() {
                Some(action) => commands.push(action.into()),
                None => warn!(key = %c, "No action mapped to key"),
            }
        }
    }

    commands
}

/// Words for buttons and session controls.
fn named_command(word: &str) -> Option<Command> {
    let command = match word.to_ascii_lowercase().as_str() {
        "neg" | "±" => Action::ToggleSign.into(),
        "del" => Action::Delete.into(),
        "clear" | "ac" => Action::Clear.into(),
        "ch" | "clear-history" => Action::ClearHistory.into(),
        "copy" => Command::Copy,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}
