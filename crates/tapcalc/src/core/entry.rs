//! Entry log: the ordered record of everything the user pressed
//!
//! The log is the single source of truth. It only grows by appending and
//! only shrinks by dropping its newest entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single operand or operator, in the order it was issued
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Entry {
    /// A finished number handed over by the keypad
    Number(f64),
    /// A named slot resolved against the bindings at evaluation time
    Variable(String),
    /// An operator symbol; unknown symbols are kept and skipped on replay
    Operator(String),
}

impl Entry {
    /// Short lowercase name of the entry kind, for logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Variable(_) => "variable",
            Self::Operator(_) => "operator",
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(v) => write!(f, "{v}"),
            Self::Variable(name) | Self::Operator(name) => f.write_str(name),
        }
    }
}

/// Append-only entry log with undo of the newest entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryLog {
    entries: Vec<Entry>,
}

impl EntryLog {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Removes and returns the newest entry; `None` on an empty log
    pub fn pop(&mut self) -> Option<Entry> {
        self.entries.pop()
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been entered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in input order
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }
}

impl FromIterator<Entry> for EntryLog {
    fn from_iter<T: IntoIterator<Item = Entry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EntryLog {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
