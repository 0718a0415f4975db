//! Piecewise-linear interpolation over fixed breakpoint tables

use thiserror::Error;

/// Errors raised when an interpolation table or layout is malformed.
#[derive(Debug, Error, PartialEq)]
pub enum MotionError {
    #[error("interpolation needs at least two breakpoints, got {0}")]
    TooFewBreakpoints(usize),
    #[error("input and output ranges differ in length ({input} vs {output})")]
    RangeLengthMismatch { input: usize, output: usize },
    #[error("input breakpoints must be strictly increasing")]
    NonMonotonicInput,
}

/// A fixed mapping from an input range to an output range, linear between
/// breakpoints and clamped to the endpoint outputs outside the input span.
#[derive(Debug, Clone, PartialEq)]
pub struct Interpolation {
    input: Vec<f64>,
    output: Vec<f64>,
}

impl Interpolation {
    /// Builds a table from matching breakpoint lists. The input list must be
    /// strictly increasing so every segment has a nonzero span.
    pub fn new(input: Vec<f64>, output: Vec<f64>) -> Result<Self, MotionError> {
        if input.len() < 2 {
            return Err(MotionError::TooFewBreakpoints(input.len()));
        }
        if input.len() != output.len() {
            return Err(MotionError::RangeLengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        if input.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(MotionError::NonMonotonicInput);
        }
        Ok(Self { input, output })
    }

    /// Evaluates the table at `x`, clamping outside the breakpoint span.
    pub fn sample(&self, x: f64) -> f64 {
        let last = self.input.len() - 1;
        if x <= self.input[0] {
            return self.output[0];
        }
        if x >= self.input[last] {
            return self.output[last];
        }
        for i in 0..last {
            let (x0, x1) = (self.input[i], self.input[i + 1]);
            if x <= x1 {
                let fraction = (x - x0) / (x1 - x0);
                return self.output[i] + (self.output[i + 1] - self.output[i]) * fraction;
            }
        }
        self.output[last]
    }
}
