//! Property-based tests for the calculator brain
//!
//! Replay makes every output a pure function of the log, so these
//! properties are checked over arbitrary logs rather than hand-picked ones.

#![allow(clippy::unreachable, clippy::float_cmp)]

use proptest::prelude::*;
use tapcalc::prelude::*;

// ===== Strategy definitions =====

fn operand_strategy() -> impl Strategy<Value = f64> {
    -1000.0f64..1000.0f64
}

fn binary_symbol_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("×"), Just("÷"), Just("−"), Just("+")]
}

/// Every table symbol plus one the table does not know
fn symbol_strategy() -> impl Strategy<Value = String> {
    let mut symbols: Vec<&'static str> = OPERATIONS.iter().map(|(s, _)| *s).collect();
    symbols.push("%");
    prop::sample::select(symbols).prop_map(str::to_string)
}

fn entry_strategy() -> impl Strategy<Value = Entry> {
    prop_oneof![
        operand_strategy().prop_map(Entry::Number),
        prop_oneof![Just("M"), Just("x")].prop_map(|n| Entry::Variable(n.to_string())),
        symbol_strategy().prop_map(Entry::Operator),
    ]
}

fn log_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..24)
}

fn brain_from(entries: &[Entry]) -> CalculatorBrain {
    let log: EntryLog = entries.iter().cloned().collect();
    CalculatorBrain::from_log(log, FixedRandom(0.375))
}

fn bindings() -> Variables {
    [("M", 7.0), ("x", -2.5)].into_iter().collect()
}

/// Equality that treats NaN results as equal to themselves
fn same(a: &Evaluation, b: &Evaluation) -> bool {
    a.result.map(f64::to_bits) == b.result.map(f64::to_bits)
        && a.is_pending == b.is_pending
        && a.description == b.description
}

fn apply(symbol: &str, a: f64, b: f64) -> f64 {
    match symbol {
        "×" => a * b,
        "÷" => a / b,
        "−" => a - b,
        "+" => a + b,
        other => unreachable!("not a binary symbol: {other}"),
    }
}

// ===== Binary operations =====

proptest! {
    /// A single binary operation followed by `=` is exact
    #[test]
    fn prop_binary_operation_is_exact(
        a in operand_strategy(),
        b in operand_strategy(),
        symbol in binary_symbol_strategy(),
    ) {
        let mut brain = CalculatorBrain::with_random(FixedRandom(0.0));
        brain.set_operand(a);
        brain.apply_operator(symbol);
        brain.set_operand(b);
        brain.apply_operator("=");

        let evaluation = brain.evaluate(None);
        let expected = apply(symbol, a, b);
        prop_assert_eq!(evaluation.result.map(f64::to_bits), Some(expected.to_bits()));
        prop_assert!(!evaluation.is_pending);
        let suffix = format!(" {} {} =", symbol, format_number(b));
        prop_assert!(evaluation.description.ends_with(&suffix));
    }

    /// A variable operand is echoed by name whatever it is bound to
    #[test]
    fn prop_variable_echoed_by_name(value in operand_strategy(), b in operand_strategy()) {
        let mut brain = CalculatorBrain::with_random(FixedRandom(0.0));
        brain.set_variable_operand("M");
        brain.apply_operator("+");
        brain.set_operand(b);
        brain.apply_operator("=");

        let vars: Variables = [("M", value)].into_iter().collect();
        let evaluation = brain.evaluate(Some(&vars));
        prop_assert_eq!(evaluation.result, Some(value + b));
        prop_assert_eq!(evaluation.description, format!("M + {} =", format_number(b)));
    }
}

// ===== Whole-log properties =====

proptest! {
    /// `AC` always lands on the same cleared state
    #[test]
    fn prop_reset_clears(entries in log_strategy()) {
        let mut brain = brain_from(&entries);
        brain.apply_operator("AC");
        let evaluation = brain.evaluate(Some(&bindings()));
        prop_assert_eq!(evaluation.result, Some(0.0));
        prop_assert!(!evaluation.is_pending);
        prop_assert_eq!(evaluation.description, NO_INPUT_DESCRIPTION);
    }

    /// Undo is the exact inverse of the last append
    #[test]
    fn prop_undo_inverts_append(entries in log_strategy(), extra in entry_strategy()) {
        let before = brain_from(&entries).evaluate(Some(&bindings()));

        let mut longer = entries.clone();
        longer.push(extra);
        let mut brain = brain_from(&longer);
        let removed = brain.undo_last();
        prop_assert!(removed.is_some());

        let after = brain.evaluate(Some(&bindings()));
        prop_assert!(same(&before, &after), "{:?} != {:?}", before, after);
    }

    /// A second `=` right after a first one changes nothing
    #[test]
    fn prop_repeated_equals_is_idempotent(entries in log_strategy()) {
        let mut brain = brain_from(&entries);
        brain.apply_operator("=");
        let once = brain.evaluate(Some(&bindings()));
        brain.apply_operator("=");
        let twice = brain.evaluate(Some(&bindings()));
        prop_assert!(same(&once, &twice), "{:?} != {:?}", once, twice);
    }

    /// The pending flag agrees with the description's ellipsis
    #[test]
    fn prop_pending_matches_description(entries in log_strategy()) {
        let evaluation = brain_from(&entries).evaluate(Some(&bindings()));
        if evaluation.is_pending {
            prop_assert!(evaluation.description.ends_with(" ..."));
        } else {
            prop_assert!(
                evaluation.description.ends_with(" =")
                    || evaluation.description == NO_INPUT_DESCRIPTION
            );
        }
    }

    /// Evaluation never mutates the log
    #[test]
    fn prop_evaluate_is_pure(entries in log_strategy()) {
        let brain = brain_from(&entries);
        let first = brain.evaluate(Some(&bindings()));
        let second = brain.evaluate(Some(&bindings()));
        prop_assert!(same(&first, &second));
        prop_assert_eq!(brain.log().len(), entries.len());
    }
}

// ===== Formatting =====

proptest! {
    /// At most six fraction digits and never a trailing zero after the point
    #[test]
    fn prop_format_bounds(value in -1.0e9f64..1.0e9f64) {
        let text = format_number(value);
        if let Some((_, fraction)) = text.split_once('.') {
            prop_assert!(!fraction.is_empty() && fraction.len() <= 6, "{}", text);
            prop_assert!(!fraction.ends_with('0'), "{}", text);
        }
        prop_assert!(text != "-0");
    }
}
