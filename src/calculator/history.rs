//! Bounded ledger of past computations, newest first.

use std::collections::VecDeque;

use super::evaluation::format_result;

/// Number of records kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One completed computation.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoryRecord {
    /// The computation as entered, e.g. `7 + 3`.
    pub expression: String,
    /// The numeric result.
    pub result: f64,
}

impl HistoryRecord {
    pub fn new(expression: impl Into<String>, result: f64) -> Self {
        Self {
            expression: expression.into(),
            result,
        }
    }

    /// The result as operand text, exactly as a recall would enter it.
    pub fn result_text(&self) -> String {
        format_result(self.result)
    }
}

/// Newest-first sequence of [`HistoryRecord`]s with a fixed capacity.
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<HistoryRecord>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl History {
    /// Create an empty ledger. A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend a record, evicting the oldest past capacity.
    pub fn record(&mut self, entry: HistoryRecord) {
        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Record at `index`, where 0 is the newest.
    pub fn get(&self, index: usize) -> Option<&HistoryRecord> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
