//! Helper functions for integration tests

#![allow(dead_code)]

use mccabe_rs::physics::ColumnParameters;
use mccabe_rs::solver::{compute_stages, StepPoint};
use mccabe_rs::EngineError;

/// alpha = 2.5, R = 2, saturated liquid feed; converges in 13 stages
pub fn converging_parameters() -> ColumnParameters {
    ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95)
}

/// alpha = 2, R = 2, saturated liquid feed; the equilibrium curve passes
/// through the operating-line intersection, so the step-off pinches
pub fn pinched_parameters() -> ColumnParameters {
    ColumnParameters::new(2.0, 2.0, 1.0, 0.5, 0.05, 0.95)
}

/// Stage count of a run, using the partial count for a non-convergent one
pub fn stage_count_or_cap(params: ColumnParameters) -> u32 {
    match compute_stages(params) {
        Ok(result) => result.stage_count,
        Err(EngineError::NonConvergent { partial }) => partial.stage_count,
        Err(e) => panic!("unexpected construction error: {}", e),
    }
}

/// Assert that a point lies on the y = x diagonal
pub fn assert_on_diagonal(point: &StepPoint, tolerance: f64, message: &str) {
    let diff = (point.x - point.y).abs();
    assert!(
        diff < tolerance,
        "{}: ({}, {}) is {} off the diagonal (tolerance {})",
        message, point.x, point.y, diff, tolerance
    );
}
