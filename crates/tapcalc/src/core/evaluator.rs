//! The calculator brain: entry log plus replay
//!
//! Appending never evaluates. Every read folds the whole log from scratch
//! through [`Replay`], so undo is just dropping the newest entry.
//!
//! Description rules worth knowing:
//! - a constant or variable operand is echoed by its symbol, anything else
//!   by its formatted value;
//! - a unary operation wraps the whole description, unless a binary
//!   operation is pending, in which case it wraps only the operand it was
//!   applied to and that operand is not echoed again on resolution.

use crate::core::format::format_number;
use crate::core::operations::Operation;
use crate::core::random::{RandomSource, ThreadRandom};
use crate::core::{Entry, EntryLog, Variables};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Description shown before anything describable has been entered
pub const NO_INPUT_DESCRIPTION: &str = "start typing some operations...";

const PENDING_SUFFIX: &str = " ...";
const COMPLETE_SUFFIX: &str = " =";

/// The three outputs a display reads after every key press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Current value; `None` when nothing has been computed, or while a
    /// binary operation waits for its second operand
    pub result: Option<f64>,
    /// True while a binary operation is waiting to be resolved
    pub is_pending: bool,
    /// Human-readable form of what has been entered
    pub description: String,
}

/// Keypad calculator engine
#[derive(Debug)]
pub struct CalculatorBrain {
    log: EntryLog,
    random: Box<dyn RandomSource>,
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBrain {
    /// Creates an empty brain drawing `rand` from the thread generator
    #[must_use]
    pub fn new() -> Self {
        Self::with_random(ThreadRandom)
    }

    /// Creates an empty brain with the given `rand` source
    #[must_use]
    pub fn with_random(source: impl RandomSource + 'static) -> Self {
        Self {
            log: EntryLog::new(),
            random: Box::new(source),
        }
    }

    /// Rebuilds a brain around an existing log
    #[must_use]
    pub fn from_log(log: EntryLog, source: impl RandomSource + 'static) -> Self {
        Self {
            log,
            random: Box::new(source),
        }
    }

    /// Appends a number operand
    pub fn set_operand(&mut self, value: f64) {
        self.push(Entry::Number(value));
    }

    /// Appends a variable operand, resolved at evaluation time
    pub fn set_variable_operand(&mut self, name: impl Into<String>) {
        self.push(Entry::Variable(name.into()));
    }

    /// Appends an operator; unknown symbols are kept and ignored on replay
    pub fn apply_operator(&mut self, symbol: impl Into<String>) {
        self.push(Entry::Operator(symbol.into()));
    }

    /// Drops the newest entry; does nothing on an empty log
    pub fn undo_last(&mut self) -> Option<Entry> {
        let removed = self.log.pop();
        debug!(
            removed = removed.as_ref().map(Entry::kind),
            len = self.log.len(),
            "undo"
        );
        removed
    }

    fn push(&mut self, entry: Entry) {
        debug!(kind = entry.kind(), entry = %entry, len = self.log.len() + 1, "append");
        self.log.push(entry);
    }

    /// The entries entered so far
    #[must_use]
    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    /// Replays the log with optional variable bindings
    #[must_use]
    pub fn evaluate(&self, variables: Option<&Variables>) -> Evaluation {
        let mut replay = Replay::default();
        for entry in &self.log {
            trace!(entry = %entry, "replay");
            replay.apply(entry, variables, self.random.as_ref());
        }
        let evaluation = replay.finish();
        debug!(
            entries = self.log.len(),
            result = evaluation.result,
            pending = evaluation.is_pending,
            description = %evaluation.description,
            "evaluated"
        );
        evaluation
    }

    /// Current value with no bindings
    #[must_use]
    pub fn result(&self) -> Option<f64> {
        self.evaluate(None).result
    }

    /// Whether a binary operation is pending
    #[must_use]
    pub fn result_is_pending(&self) -> bool {
        self.evaluate(None).is_pending
    }

    /// Description with no bindings
    #[must_use]
    pub fn description(&self) -> String {
        self.evaluate(None).description
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingBinary {
    function: fn(f64, f64) -> f64,
    first_operand: f64,
}

impl PendingBinary {
    fn perform(&self, second_operand: f64) -> f64 {
        (self.function)(self.first_operand, second_operand)
    }
}

/// Fold state for one pass over the log
#[derive(Debug, Default)]
struct Replay {
    result: Option<f64>,
    description: Option<String>,
    pending: Option<PendingBinary>,
    constant_symbol: Option<String>,
    unary_after_binary: bool,
}

impl Replay {
    fn apply(&mut self, entry: &Entry, variables: Option<&Variables>, random: &dyn RandomSource) {
        match entry {
            Entry::Number(value) => {
                self.result = Some(*value);
                self.constant_symbol = None;
            }
            Entry::Variable(name) => {
                self.result = Some(variables.and_then(|v| v.get(name)).unwrap_or(0.0));
                self.constant_symbol = Some(name.clone());
            }
            Entry::Operator(symbol) => {
                if let Some(operation) = Operation::lookup(symbol) {
                    self.perform(symbol, operation, random);
                }
            }
        }
    }

    fn perform(&mut self, symbol: &str, operation: Operation, random: &dyn RandomSource) {
        match operation {
            Operation::Constant(value) => {
                self.result = Some(value);
                self.constant_symbol = Some(symbol.to_string());
            }
            Operation::Unary(function) => {
                let Some(value) = self.result else { return };
                let operand = self.symbolic(value);
                self.description = Some(match self.description.take() {
                    None => format!("{symbol}({operand})"),
                    Some(text) if self.pending.is_some() => {
                        self.unary_after_binary = true;
                        format!("{text} {symbol}({operand})")
                    }
                    Some(text) => format!("{symbol}({text})"),
                });
                self.result = Some(function(value));
            }
            Operation::Binary(function) => {
                self.resolve_pending();
                let Some(value) = self.result else { return };
                self.description = Some(match self.description.take() {
                    Some(text) => format!("{text} {symbol}"),
                    None => format!("{} {symbol}", self.symbolic(value)),
                });
                self.pending = Some(PendingBinary {
                    function,
                    first_operand: value,
                });
                self.result = None;
            }
            Operation::Equals => self.resolve_pending(),
            Operation::Random => self.result = Some(random.next_unit()),
            Operation::Reset => {
                self.result = Some(0.0);
                self.description = None;
                self.pending = None;
            }
        }
    }

    /// Echoes the second operand, then combines
    fn resolve_pending(&mut self) {
        let (Some(pending), Some(value)) = (self.pending, self.result) else {
            return;
        };
        if self.description.is_none() {
            return;
        }

        if self.unary_after_binary {
            self.unary_after_binary = false;
        } else {
            let operand = self.symbolic(value);
            if let Some(text) = self.description.as_mut() {
                text.push(' ');
                text.push_str(&operand);
            }
        }
        self.result = Some(pending.perform(value));
        self.pending = None;
    }

    fn symbolic(&self, value: f64) -> String {
        self.constant_symbol
            .clone()
            .unwrap_or_else(|| format_number(value))
    }

    fn finish(self) -> Evaluation {
        let is_pending = self.pending.is_some();
        let description = match self.description {
            None => NO_INPUT_DESCRIPTION.to_string(),
            Some(text) if is_pending => text + PENDING_SUFFIX,
            Some(text) => text + COMPLETE_SUFFIX,
        };
        Evaluation {
            result: self.result,
            is_pending,
            description,
        }
    }
}
