//! tapcalc - keypad calculator engine
//!
//! The engine records what the user presses (numbers, variables, operator
//! symbols) in an append-only log and rebuilds its three outputs by
//! replaying that log on every read:
//!
//! - the current result,
//! - whether a binary operation is still pending,
//! - a human-readable description such as `3 + √(4) ...`.
//!
//! Because state is always derived from the log, undo is exact and a
//! variable can be rebound after the fact.
//!
//! # Example
//!
//! ```rust
//! use tapcalc::prelude::*;
//!
//! let mut brain = CalculatorBrain::with_random(FixedRandom(0.5));
//! brain.set_operand(2.0);
//! brain.apply_operator("×");
//! brain.set_operand(5.0);
//! brain.apply_operator("=");
//!
//! let evaluation = brain.evaluate(None);
//! assert_eq!(evaluation.result, Some(10.0));
//! assert!(!evaluation.is_pending);
//! assert_eq!(evaluation.description, "2 × 5 =");
//!
//! // Keys, as a display would send them
//! let mut session = KeypadSession::new();
//! session.press_line("M + 1 = 7 →M").unwrap();
//! assert_eq!(session.display(), "8");
//! assert_eq!(session.description(), "M + 1 =");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod keypad;
pub mod plot;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::format::{format_number, NumberFormat};
    pub use crate::core::{
        CalcError, CalcResult, CalculatorBrain, Entry, EntryLog, Evaluation, FixedRandom,
        Operation, RandomSource, SeededRandom, ThreadRandom, Variables, NO_INPUT_DESCRIPTION,
        OPERATIONS,
    };
    pub use crate::keypad::{KeypadAction, KeypadSession, MEMORY_VARIABLE};
    pub use crate::plot::{sample, PlotPoint, PlotRange};
}
