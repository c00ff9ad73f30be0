//! Operation table: what each operator symbol does
//!
//! The table is fixed at compile time. Symbols outside it are accepted
//! into the log and ignored when the log is replayed.

use std::f64::consts::{E, PI};

/// What pressing an operator symbol does to the running state
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Replaces the running value with a fixed value
    Constant(f64),
    /// Transforms the running value
    Unary(fn(f64) -> f64),
    /// Combines a held first operand with a later second operand
    Binary(fn(f64, f64) -> f64),
    /// Resolves any pending binary operation
    Equals,
    /// Replaces the running value with a uniform sample in [0, 1)
    Random,
    /// Clears the running state
    Reset,
}

fn negate(x: f64) -> f64 {
    -x
}

fn square(x: f64) -> f64 {
    x * x
}

fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

fn divide(a: f64, b: f64) -> f64 {
    a / b
}

fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Every recognized symbol, in keypad order
pub const OPERATIONS: &[(&str, Operation)] = &[
    ("π", Operation::Constant(PI)),
    ("e", Operation::Constant(E)),
    ("√", Operation::Unary(f64::sqrt)),
    ("sin", Operation::Unary(f64::sin)),
    ("cos", Operation::Unary(f64::cos)),
    ("tan", Operation::Unary(f64::tan)),
    ("±", Operation::Unary(negate)),
    ("x²", Operation::Unary(square)),
    ("×", Operation::Binary(multiply)),
    ("÷", Operation::Binary(divide)),
    ("−", Operation::Binary(subtract)),
    ("+", Operation::Binary(add)),
    ("=", Operation::Equals),
    ("AC", Operation::Reset),
    ("rand", Operation::Random),
];

impl Operation {
    /// Looks up the operation bound to `symbol`
    #[must_use]
    pub fn lookup(symbol: &str) -> Option<Self> {
        OPERATIONS
            .iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, op)| *op)
    }

    /// Short name of the operation kind, for listings
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Unary(_) => "unary",
            Self::Binary(_) => "binary",
            Self::Equals => "equals",
            Self::Random => "random",
            Self::Reset => "reset",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unary(symbol: &str) -> fn(f64) -> f64 {
        match Operation::lookup(symbol) {
            Some(Operation::Unary(f)) => f,
            other => panic!("{symbol} is not unary: {other:?}"),
        }
    }

    fn binary(symbol: &str) -> fn(f64, f64) -> f64 {
        match Operation::lookup(symbol) {
            Some(Operation::Binary(f)) => f,
            other => panic!("{symbol} is not binary: {other:?}"),
        }
    }

    // ===== Table shape =====

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for (symbol, _) in OPERATIONS {
            assert!(seen.insert(*symbol), "duplicate symbol {symbol}");
        }
        assert_eq!(seen.len(), 15);
    }

    #[test]
    fn test_unknown_symbol() {
        assert!(Operation::lookup("%").is_none());
        assert!(Operation::lookup("x^2").is_none());
        assert!(matches!(Operation::lookup("x²"), Some(Operation::Unary(_))));
    }

    // ===== Constants =====

    #[test]
    fn test_constants() {
        assert!(matches!(Operation::lookup("π"), Some(Operation::Constant(v)) if v == PI));
        assert!(matches!(Operation::lookup("e"), Some(Operation::Constant(v)) if v == E));
    }

    // ===== Unary =====

    #[test]
    fn test_unary_functions() {
        assert_eq!(unary("√")(16.0), 4.0);
        assert_eq!(unary("±")(3.0), -3.0);
        assert_eq!(unary("x²")(-3.0), 9.0);
        assert_eq!(unary("sin")(0.0), 0.0);
        assert_eq!(unary("cos")(0.0), 1.0);
        assert_eq!(unary("tan")(0.0), 0.0);
    }

    #[test]
    fn test_sqrt_of_negative_is_nan() {
        assert!(unary("√")(-1.0).is_nan());
    }

    // ===== Binary =====

    #[test]
    fn test_binary_functions() {
        assert_eq!(binary("×")(6.0, 7.0), 42.0);
        assert_eq!(binary("÷")(20.0, 4.0), 5.0);
        assert_eq!(binary("−")(10.0, 4.0), 6.0);
        assert_eq!(binary("+")(2.0, 3.0), 5.0);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        assert_eq!(binary("÷")(1.0, 0.0), f64::INFINITY);
        assert!(binary("÷")(0.0, 0.0).is_nan());
    }

    // ===== Kinds =====

    #[test]
    fn test_kind_names() {
        let kinds: Vec<_> = ["π", "√", "+", "=", "rand", "AC"]
            .iter()
            .filter_map(|s| Operation::lookup(s))
            .map(|op| op.kind())
            .collect();
        assert_eq!(
            kinds,
            vec!["constant", "unary", "binary", "equals", "random", "reset"]
        );
    }
}
