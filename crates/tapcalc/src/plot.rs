//! Sampling the entered program as a function of one variable
//!
//! The brain's log is read as `y = f(x)` with `x` bound to a named slot.
//! Drawing axes and curves is left to whoever consumes the points.

use crate::core::{CalcError, CalcResult, CalculatorBrain, Variables};
use serde::{Deserialize, Serialize};

/// Evenly spaced sample positions from `start` to `end`, both included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRange {
    /// First x
    pub start: f64,
    /// Last x
    pub end: f64,
    /// Number of samples
    pub steps: usize,
}

impl PlotRange {
    /// Largest accepted sample count
    pub const MAX_STEPS: usize = 1_000_000;

    /// Creates a range, rejecting non-finite bounds and oversized sample counts
    pub fn new(start: f64, end: f64, steps: usize) -> CalcResult<Self> {
        for bound in [start, end] {
            if !bound.is_finite() {
                return Err(CalcError::invalid_number(bound.to_string()));
            }
        }
        if steps > Self::MAX_STEPS {
            return Err(CalcError::TooManySamples {
                steps,
                max: Self::MAX_STEPS,
            });
        }
        Ok(Self { start, end, steps })
    }

    /// The x positions of every sample
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        let step = if self.steps > 1 {
            (self.end - self.start) / (self.steps - 1) as f64
        } else {
            0.0
        };
        (0..self.steps).map(move |i| self.start + step * i as f64)
    }
}

/// One sampled point; `y` is `None` where the program has no finite value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// Input value
    pub x: f64,
    /// Output value
    pub y: Option<f64>,
}

impl CalculatorBrain {
    /// The log as a function of `name`, other names bound from `base`
    pub fn function_of<'a>(
        &'a self,
        name: &'a str,
        base: &'a Variables,
    ) -> impl Fn(f64) -> Option<f64> + 'a {
        move |x| {
            let mut variables = base.clone();
            variables.set(name, x);
            self.evaluate(Some(&variables)).result
        }
    }
}

/// Samples the brain over `range` with `name` as the free variable
#[must_use]
pub fn sample(
    brain: &CalculatorBrain,
    name: &str,
    base: &Variables,
    range: &PlotRange,
) -> Vec<PlotPoint> {
    let f = brain.function_of(name, base);
    range
        .xs()
        .map(|x| PlotPoint {
            x,
            y: f(x).filter(|y| y.is_finite()),
        })
        .collect()
}
