//! Error types for the stage-construction engine
//!
//! Every geometric failure is reported as its own variant so that callers
//! can decide on recovery (re-prompt, abort, render the partial staircase)
//! without parsing messages.

use thiserror::Error;

use crate::solver::StageResult;

/// Threshold under which a denominator or slope difference is treated as zero
pub const GEOMETRY_EPSILON: f64 = 1e-12;

/// Errors raised while building or stepping the McCabe-Thiele construction
///
/// # Variants
///
/// - `InvalidParameters`: input outside the physical domain (raised by
///   [`ColumnParameters::validate`](crate::physics::ColumnParameters::validate),
///   never by the engine itself)
/// - `InvalidConfiguration`: stepper configuration is unusable
/// - `DegenerateCurve`: equilibrium inverse hit a zero denominator
/// - `NoIntersection`: rectifying and feed lines are parallel
/// - `DegenerateStrippingLine`: intersection lies on the bottoms composition
/// - `NonConvergent`: the iteration cap was exhausted before reaching `xb`
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Parameters violate the physical domain
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Stepper configuration violates its own constraints
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// `alpha - y*(alpha - 1)` is numerically zero
    #[error("Degenerate equilibrium curve: inverse undefined at y = {y}")]
    DegenerateCurve {
        /// Vapor composition at which the inverse was requested
        y: f64,
    },

    /// Rectifying line and feed line have the same slope
    #[error("Rectifying and feed lines are parallel (slope {slope}), no intersection")]
    NoIntersection {
        /// Shared slope of both lines
        slope: f64,
    },

    /// Intersection x-coordinate coincides with the bottoms composition
    #[error("Degenerate stripping line: intersection x = {x} equals the bottoms composition")]
    DegenerateStrippingLine {
        /// Intersection x-coordinate
        x: f64,
    },

    /// Iteration cap reached before the bottoms composition
    #[error(
        "Step-off did not reach the bottoms composition after {} iterations ({} stages stepped)",
        .partial.iterations,
        .partial.stage_count
    )]
    NonConvergent {
        /// Construction as far as it got
        partial: Box<StageResult>,
    },
}

impl EngineError {
    /// Partial construction carried by a `NonConvergent` error
    pub fn partial_result(&self) -> Option<&StageResult> {
        match self {
            EngineError::NonConvergent { partial } => Some(partial),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::DegenerateStrippingLine { x: 0.05 };
        assert!(err.to_string().contains("bottoms composition"));

        let err = EngineError::NoIntersection { slope: 0.0 };
        assert!(err.to_string().contains("parallel"));

        let err = EngineError::InvalidParameters("alpha".to_string());
        assert_eq!(err.to_string(), "Invalid parameters: alpha");
    }

    #[test]
    fn test_partial_result_only_on_non_convergence() {
        let err = EngineError::DegenerateCurve { y: 2.0 };
        assert!(err.partial_result().is_none());

        let partial = StageResult {
            stage_count: 3,
            points: Vec::new(),
            reboiler_reached: false,
            feed_stage: None,
            iterations: 3,
            distillate_composition: 0.9,
        };
        let err = EngineError::NonConvergent { partial: Box::new(partial) };
        assert_eq!(err.partial_result().map(|r| r.stage_count), Some(3));
        assert!(err.to_string().contains("3 iterations"));
    }
}
