//! Keypad session: turns key presses into brain entries
//!
//! Digits are assembled into a display string here and only handed to the
//! brain as a finished number when an operation key is pressed. The undo
//! key erases typed digits first and reaches the brain's log only when
//! nothing is being typed.

use crate::core::format::NumberFormat;
use crate::core::{
    parse_number, CalcResult, CalculatorBrain, Evaluation, Variables, NO_INPUT_DESCRIPTION,
};
use std::fmt;
use tracing::debug;

/// Name of the memory slot behind the `M` and `→M` keys
pub const MEMORY_VARIABLE: &str = "M";

/// A single key on the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadAction {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// An operator key; the symbol is passed through untouched
    Operation(String),
    /// Use a variable as the next operand
    Recall(String),
    /// Bind a variable to the displayed value
    Store(String),
    /// Forget every variable binding
    ClearVariables,
    /// Erase the last typed digit, or the last entry
    Undo,
}

impl KeypadAction {
    /// Expands a textual token into the keys that type it
    ///
    /// A decimal literal becomes its digit and point keys, `M` recalls the
    /// memory slot, `→NAME` or `->NAME` stores into `NAME`, `undo` or `⌫`
    /// undoes, `C` clears variables. Anything else is an operator symbol.
    #[must_use]
    pub fn from_token(token: &str) -> Vec<Self> {
        let token = token.trim();
        if is_decimal_literal(token) {
            return token
                .chars()
                .filter_map(|c| match c {
                    '.' => Some(Self::Decimal),
                    _ => c.to_digit(10).map(|d| Self::Digit(d as u8)),
                })
                .collect();
        }

        if let Some(name) = token
            .strip_prefix('→')
            .or_else(|| token.strip_prefix("->"))
            .filter(|name| !name.is_empty())
        {
            return vec![Self::Store(name.to_string())];
        }

        let action = match token {
            MEMORY_VARIABLE => Self::Recall(MEMORY_VARIABLE.to_string()),
            "undo" | "⌫" => Self::Undo,
            "C" => Self::ClearVariables,
            _ => Self::Operation(token.to_string()),
        };
        vec![action]
    }

    /// Expands whitespace-separated tokens
    #[must_use]
    pub fn parse_line(line: &str) -> Vec<Self> {
        line.split_whitespace().flat_map(Self::from_token).collect()
    }
}

fn is_decimal_literal(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
}

impl fmt::Display for KeypadAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operation(symbol) => f.write_str(symbol),
            Self::Recall(name) => f.write_str(name),
            Self::Store(name) => write!(f, "→{name}"),
            Self::ClearVariables => f.write_str("C"),
            Self::Undo => f.write_str("⌫"),
        }
    }
}

/// Calculator state as the keypad and display see it
#[derive(Debug)]
pub struct KeypadSession {
    brain: CalculatorBrain,
    variables: Variables,
    format: NumberFormat,
    display: String,
    description: String,
    typing: bool,
    typing_fraction: bool,
}

impl Default for KeypadSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KeypadSession {
    /// Creates a session around a fresh brain
    #[must_use]
    pub fn new() -> Self {
        Self::with_brain(CalculatorBrain::new())
    }

    /// Creates a session around the given brain
    #[must_use]
    pub fn with_brain(brain: CalculatorBrain) -> Self {
        let format = NumberFormat::default();
        Self {
            brain,
            variables: Variables::new(),
            display: format.format(0.0),
            format,
            description: NO_INPUT_DESCRIPTION.to_string(),
            typing: false,
            typing_fraction: false,
        }
    }

    /// Sets how results are rendered on the display
    #[must_use]
    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Starts with the given bindings
    #[must_use]
    pub fn with_variables(mut self, variables: Variables) -> Self {
        self.variables = variables;
        self
    }

    /// Text on the main display
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Text on the description line
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// True while digits are being typed
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Current bindings
    #[must_use]
    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// The brain being fed
    #[must_use]
    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    /// Numeric value of the display
    pub fn display_value(&self) -> CalcResult<f64> {
        parse_number(&self.display)
    }

    /// Full evaluation with the current bindings
    #[must_use]
    pub fn evaluation(&self) -> Evaluation {
        self.brain.evaluate(Some(&self.variables))
    }

    /// Dispatches one key
    pub fn press(&mut self, action: &KeypadAction) -> CalcResult<()> {
        debug!(key = %action, typing = self.typing, "press");
        match action {
            KeypadAction::Digit(d) => self.press_digit(*d),
            KeypadAction::Decimal => self.press_decimal(),
            KeypadAction::Operation(symbol) => {
                self.press_operation(symbol)?;
            }
            KeypadAction::Recall(name) => self.recall_variable(name),
            KeypadAction::Store(name) => self.store_variable(name)?,
            KeypadAction::ClearVariables => self.clear_variables(),
            KeypadAction::Undo => self.undo(),
        }
        Ok(())
    }

    /// Dispatches every key typed by a line of tokens
    pub fn press_line(&mut self, line: &str) -> CalcResult<()> {
        for action in KeypadAction::parse_line(line) {
            self.press(&action)?;
        }
        Ok(())
    }

    /// Types a digit; values above 9 are ignored
    pub fn press_digit(&mut self, digit: u8) {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return;
        };
        if self.typing {
            self.display.push(c);
        } else {
            self.display = c.to_string();
            self.typing = true;
        }
    }

    /// Types the decimal point; ignored before the first digit and after
    /// a point already typed
    pub fn press_decimal(&mut self) {
        if self.typing && !self.typing_fraction {
            self.display.push('.');
            self.typing_fraction = true;
        }
    }

    /// Hands any typed number to the brain, then applies `symbol`
    pub fn press_operation(&mut self, symbol: &str) -> CalcResult<Evaluation> {
        if self.typing {
            let value = self.display_value()?;
            self.brain.set_operand(value);
            self.stop_typing();
        }
        self.brain.apply_operator(symbol);
        Ok(self.refresh())
    }

    /// Uses `name` as the next operand; ignored while typing
    pub fn recall_variable(&mut self, name: &str) {
        if !self.typing {
            self.brain.set_variable_operand(name);
            self.refresh();
        }
    }

    /// Binds `name` to the displayed value and re-evaluates
    pub fn store_variable(&mut self, name: &str) -> CalcResult<()> {
        let value = self.display_value()?;
        self.variables.set(name, value);
        self.stop_typing();
        self.refresh();
        Ok(())
    }

    /// Forgets every binding; the display is left alone
    pub fn clear_variables(&mut self) {
        self.variables.clear();
    }

    /// Erases the last typed character, or drops the newest brain entry
    pub fn undo(&mut self) {
        if !self.typing {
            self.brain.undo_last();
            self.refresh();
            return;
        }

        if self.display.chars().count() > 1 {
            if self.display.pop() == Some('.') {
                self.typing_fraction = false;
            }
        } else {
            self.display = self.format.format(0.0);
            self.stop_typing();
        }
    }

    fn stop_typing(&mut self) {
        self.typing = false;
        self.typing_fraction = false;
    }

    fn refresh(&mut self) -> Evaluation {
        let evaluation = self.evaluation();
        if let Some(result) = evaluation.result {
            self.display = self.format.format(result);
        }
        self.description.clone_from(&evaluation.description);
        evaluation
    }
}
