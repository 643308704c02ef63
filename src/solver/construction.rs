//! Assembled McCabe-Thiele construction
//!
//! Ties the physics and the line builders together:
//!
//! ```text
//! ColumnParameters ─┬─> EquilibriumCurve ─────────────────────────────┐
//!                   └─> OperatingLineBuilder ─> intersection          │
//!                                          └─> StrippingLineBuilder ──┴─> StageStepper ─> StageResult
//! ```

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::models::{DiagramPoint, FeedLine, Line, OperatingLineBuilder, StrippingLineBuilder};
use crate::physics::{ColumnParameters, EquilibriumCurve};
use crate::solver::config::StepperConfiguration;
use crate::solver::stepper::{StageResult, StageStepper};

/// Geometry of a McCabe-Thiele diagram for one parameter set
///
/// Everything a renderer needs besides the staircase itself.
///
/// # Example
///
/// ```rust
/// use mccabe_rs::physics::ColumnParameters;
/// use mccabe_rs::solver::{McCabeThiele, StepperConfiguration};
///
/// let params = ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95);
/// let construction = McCabeThiele::build(&params)?;
/// assert!(construction.feed_line().is_vertical());
///
/// let result = construction.step_off(&StepperConfiguration::default())?;
/// assert_eq!(result.stage_count, 13);
/// # Ok::<(), mccabe_rs::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct McCabeThiele {
    parameters: ColumnParameters,
    curve: EquilibriumCurve,
    rectifying: Line,
    feed: FeedLine,
    intersection: DiagramPoint,
    stripping: Line,
}

impl McCabeThiele {
    /// Derive the full geometry from parameters
    ///
    /// Parameters are assumed validated; see [`ColumnParameters::validate`].
    ///
    /// # Errors
    ///
    /// - `EngineError::NoIntersection` for parallel rectifying and feed lines
    /// - `EngineError::DegenerateStrippingLine` when the intersection lies at xb
    pub fn build(parameters: &ColumnParameters) -> Result<Self, EngineError> {
        let curve = EquilibriumCurve::new(parameters.alpha);

        let operating = OperatingLineBuilder::new();
        let rectifying = operating.rectifying(parameters.reflux_ratio);
        let feed = operating.feed_line(parameters.feed_quality, parameters.feed_composition);
        let intersection = operating.intersection(&rectifying, &feed)?;

        let stripping = StrippingLineBuilder::new().build(&intersection, parameters.bottoms_composition)?;

        debug!(
            rect_slope = rectifying.slope,
            rect_intercept = rectifying.intercept,
            strip_slope = stripping.slope,
            strip_intercept = stripping.intercept,
            "construction geometry derived"
        );

        Ok(Self {
            parameters: *parameters,
            curve,
            rectifying,
            feed,
            intersection,
            stripping,
        })
    }

    pub fn parameters(&self) -> &ColumnParameters {
        &self.parameters
    }

    pub fn curve(&self) -> &EquilibriumCurve {
        &self.curve
    }

    pub fn rectifying(&self) -> &Line {
        &self.rectifying
    }

    pub fn feed_line(&self) -> &FeedLine {
        &self.feed
    }

    pub fn intersection(&self) -> &DiagramPoint {
        &self.intersection
    }

    pub fn stripping(&self) -> &Line {
        &self.stripping
    }

    /// Liquid composition separating the rectifying and stripping sections
    pub fn section_boundary(&self) -> f64 {
        match self.feed {
            FeedLine::Vertical { x } => x,
            FeedLine::Sloped(_) => self.intersection.x,
        }
    }

    /// Stepper over this construction's curve and operating lines
    pub fn stepper(&self) -> StageStepper {
        StageStepper::new(self.curve, self.rectifying, self.stripping, self.section_boundary())
    }

    /// Step off stages from xd to xb
    ///
    /// # Errors
    ///
    /// `EngineError::NonConvergent` when the iteration cap is exhausted; the
    /// partial staircase travels with the error. Stepper errors propagate as-is.
    pub fn step_off(&self, config: &StepperConfiguration) -> Result<StageResult, EngineError> {
        let result = self.stepper().run(
            self.parameters.distillate_composition,
            self.parameters.bottoms_composition,
            config,
        )?;

        if !result.reboiler_reached {
            warn!(
                iterations = result.iterations,
                stages = result.stage_count,
                "bottoms composition not reached, possible pinch point"
            );
            return Err(EngineError::NonConvergent { partial: Box::new(result) });
        }

        Ok(result)
    }
}

/// Count theoretical stages with the reference configuration
///
/// # Errors
///
/// Any of the geometric errors of [`McCabeThiele::build`] and
/// [`McCabeThiele::step_off`].
pub fn compute_stages(parameters: ColumnParameters) -> Result<StageResult, EngineError> {
    compute_stages_with(parameters, &StepperConfiguration::default())
}

/// Count theoretical stages with an explicit stepper configuration
pub fn compute_stages_with(
    parameters: ColumnParameters,
    config: &StepperConfiguration,
) -> Result<StageResult, EngineError> {
    McCabeThiele::build(&parameters)?.step_off(config)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertical_feed_geometry() {
        let params = ColumnParameters::new(2.0, 2.0, 1.0, 0.5, 0.05, 0.95);
        let construction = McCabeThiele::build(&params).unwrap();

        assert_eq!(*construction.feed_line(), FeedLine::Vertical { x: 0.5 });
        assert_eq!(construction.section_boundary(), 0.5);
        assert_relative_eq!(construction.rectifying().slope, 2.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(construction.rectifying().intercept, 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(construction.intersection().y, 2.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(construction.stripping().y_at(0.05), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_sloped_feed_boundary_is_intersection() {
        let params = ColumnParameters::new(2.5, 3.0, 0.5, 0.5, 0.05, 0.95);
        let construction = McCabeThiele::build(&params).unwrap();

        assert!(!construction.feed_line().is_vertical());
        assert_relative_eq!(construction.section_boundary(), 3.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_converging_stage_count() {
        let params = ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95);
        let result = compute_stages(params).unwrap();
        assert!(result.reboiler_reached);
        assert_eq!(result.stage_count, 13);
        assert_eq!(result.feed_stage, Some(7));
    }

    #[test]
    fn test_pinch_reports_non_convergence() {
        // Equilibrium curve passes exactly through the intersection (0.5, 2/3)
        let params = ColumnParameters::new(2.0, 2.0, 1.0, 0.5, 0.05, 0.95);
        match compute_stages(params) {
            Err(EngineError::NonConvergent { partial }) => {
                assert!(!partial.reboiler_reached);
                assert_eq!(partial.iterations, 200);
                assert_eq!(partial.stage_count, 200);
            }
            other => panic!("expected NonConvergent, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_configuration_is_used() {
        let params = ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95);
        let config = StepperConfiguration::default().max_iterations(5);
        let err = compute_stages_with(params, &config).unwrap_err();
        assert_eq!(err.partial_result().map(|r| r.iterations), Some(5));
    }
}
