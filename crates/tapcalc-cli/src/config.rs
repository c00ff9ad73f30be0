//! CLI configuration

use serde::{Deserialize, Serialize};
use tapcalc::core::{CalculatorBrain, NumberFormat, SeededRandom};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - engine activity
    Verbose,
    /// Debug - every replayed entry
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default `tracing` filter directive for this level
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "debug",
            Self::Debug => "trace",
        }
    }
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output, one object per state
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Output format
    pub format: OutputFormat,
    /// Fraction digits on the display
    pub max_fraction_digits: usize,
    /// Seed for `rand`; the thread generator is used when absent
    pub seed: Option<u64>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            format: OutputFormat::Text,
            max_fraction_digits: NumberFormat::DEFAULT_MAX_FRACTION_DIGITS,
            seed: None,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set display fraction digits
    #[must_use]
    pub const fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    /// Set the `rand` seed
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number format for the display
    #[must_use]
    pub const fn number_format(&self) -> NumberFormat {
        NumberFormat::with_max_fraction_digits(self.max_fraction_digits)
    }

    /// Fresh brain drawing `rand` from the configured source
    #[must_use]
    pub fn brain(&self) -> CalculatorBrain {
        match self.seed {
            Some(seed) => CalculatorBrain::with_random(SeededRandom::new(seed)),
            None => CalculatorBrain::new(),
        }
    }
}
