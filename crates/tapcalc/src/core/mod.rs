//! Core calculator engine
//!
//! The engine keeps an append-only log of operands and operators and
//! rebuilds every output by replaying that log. Nothing in here fails:
//! errors only exist at the edges (parsing bindings and typed numbers,
//! building plot ranges).

pub mod entry;
pub mod evaluator;
pub mod format;
pub mod operations;
pub mod random;

pub use entry::{Entry, EntryLog};
pub use evaluator::{CalculatorBrain, Evaluation, NO_INPUT_DESCRIPTION};
pub use format::NumberFormat;
pub use operations::{Operation, OPERATIONS};
pub use random::{FixedRandom, RandomSource, SeededRandom, ThreadRandom};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for the fallible edges of the calculator
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised while turning user text into engine input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A `NAME=VALUE` binding could not be parsed
    #[error("Invalid variable binding: {input}")]
    InvalidBinding {
        /// The rejected text
        input: String,
    },

    /// Text that should hold a finite decimal number does not
    #[error("Invalid number: {input}")]
    InvalidNumber {
        /// The rejected text
        input: String,
    },

    /// A plot range asks for more samples than can be produced
    #[error("Too many samples: {steps} (at most {max})")]
    TooManySamples {
        /// Requested sample count
        steps: usize,
        /// Largest accepted sample count
        max: usize,
    },
}

impl CalcError {
    /// Create an invalid binding error
    #[must_use]
    pub fn invalid_binding(input: impl Into<String>) -> Self {
        Self::InvalidBinding {
            input: input.into(),
        }
    }

    /// Create an invalid number error
    #[must_use]
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }
}

/// Parses a decimal literal, rejecting NaN and infinities
pub fn parse_number(input: &str) -> CalcResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CalcError::invalid_number(input))
}

/// Named values substituted for variable operands during evaluation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, f64>,
}

impl Variables {
    /// Creates an empty binding table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Returns the bound value, if any
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Removes every binding
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of bound names
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when nothing is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Parses a `NAME=VALUE` binding
    pub fn parse_binding(input: &str) -> CalcResult<(String, f64)> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| CalcError::invalid_binding(input))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CalcError::invalid_binding(input));
        }
        let value = parse_number(value).map_err(|_| CalcError::invalid_binding(input))?;
        Ok((name.to_string(), value))
    }

    /// Builds a table from `NAME=VALUE` bindings; later bindings win
    pub fn from_bindings<I, S>(bindings: I) -> CalcResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vars = Self::new();
        for binding in bindings {
            let (name, value) = Self::parse_binding(binding.as_ref())?;
            vars.set(name, value);
        }
        Ok(vars)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Variables {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
