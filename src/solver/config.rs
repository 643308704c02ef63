//! Step-off configuration
//!
//! The defaults are the reference constants of the construction and should
//! only be changed for experimentation: stage counts are compared against
//! runs made with exactly these values.

use crate::error::EngineError;

/// Default iteration cap of the step-off
pub const MAX_ITERATIONS: usize = 200;

/// Default absolute tolerance on `x ≤ xb` for the termination test
pub const TERMINATION_TOLERANCE: f64 = 1e-3;

/// Configuration for the stage stepper
///
/// # Example
///
/// ```rust
/// use mccabe_rs::solver::StepperConfiguration;
///
/// let config = StepperConfiguration::default();
/// assert_eq!(config.max_iterations, 200);
///
/// let coarse = StepperConfiguration::new(50, 1e-2);
/// assert!(coarse.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepperConfiguration {
    /// Maximum number of step-off iterations (one stage each)
    pub max_iterations: usize,

    /// Absolute tolerance added to xb in the termination test
    pub termination_tolerance: f64,
}

impl Default for StepperConfiguration {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            termination_tolerance: TERMINATION_TOLERANCE,
        }
    }
}

impl StepperConfiguration {
    /// Create a configuration
    pub fn new(max_iterations: usize, termination_tolerance: f64) -> Self {
        Self { max_iterations, termination_tolerance }
    }

    /// Builder pattern: set iteration cap
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_iterations == 0 {
            return Err(EngineError::InvalidConfiguration(
                "Maximum iterations must be positive".to_string(),
            ));
        }

        if !self.termination_tolerance.is_finite() || self.termination_tolerance <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "Termination tolerance must be a positive finite number, got {}",
                self.termination_tolerance
            )));
        }

        Ok(())
    }
}
