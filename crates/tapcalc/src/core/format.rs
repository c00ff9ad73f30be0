//! Number formatting for descriptions and the display
//!
//! Locale-invariant: `.` as the decimal separator, no grouping. Values are
//! rounded to `max_significant_digits` significant digits and then to at
//! most `max_fraction_digits` digits after the point, trailing zeros dropped.

use serde::{Deserialize, Serialize};

/// Formatting rules for rendering a value as text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Maximum digits kept after the decimal point
    pub max_fraction_digits: usize,
    /// Maximum significant digits kept overall
    pub max_significant_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::with_max_fraction_digits(Self::DEFAULT_MAX_FRACTION_DIGITS)
    }
}

impl NumberFormat {
    /// Fraction digits used by descriptions
    pub const DEFAULT_MAX_FRACTION_DIGITS: usize = 6;

    /// Significant digits used by descriptions
    pub const DEFAULT_MAX_SIGNIFICANT_DIGITS: usize = 6;

    /// Creates a format with the given fraction digit limit
    #[must_use]
    pub const fn with_max_fraction_digits(max_fraction_digits: usize) -> Self {
        Self {
            max_fraction_digits,
            max_significant_digits: Self::DEFAULT_MAX_SIGNIFICANT_DIGITS,
        }
    }

    /// Sets the significant digit limit; zero is treated as one
    #[must_use]
    pub const fn significant_digits(mut self, max_significant_digits: usize) -> Self {
        self.max_significant_digits = max_significant_digits;
        self
    }

    /// Renders `value`
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value > 0.0 { "+∞" } else { "-∞" }.to_string();
        }

        // `{:e}` rounds to the significant digits and reports the exponent
        let significant = self.max_significant_digits.max(1);
        let scientific = format!("{value:.prec$e}", prec = significant - 1);
        let rounded = scientific.parse::<f64>().unwrap_or(value);
        let exponent = scientific
            .split_once('e')
            .and_then(|(_, exp)| exp.parse::<i64>().ok())
            .unwrap_or(0);
        let wanted = i64::try_from(significant - 1)
            .unwrap_or(i64::MAX)
            .saturating_sub(exponent);
        let fraction_digits = usize::try_from(wanted)
            .unwrap_or(0)
            .min(self.max_fraction_digits);

        let mut text = format!("{rounded:.fraction_digits$}");
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        // Rounding can leave a negative zero behind, e.g. -0.0000001
        if text == "-0" {
            text.remove(0);
        }
        text
    }
}

/// Formats with the default description rules
#[must_use]
pub fn format_number(value: f64) -> String {
    NumberFormat::default().format(value)
}
