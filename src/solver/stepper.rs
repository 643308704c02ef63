//! Graphical step-off between the equilibrium curve and the operating lines
//!
//! # Algorithm
//!
//! Starting from the distillate vapor composition `y = xd`, each iteration
//! steps off one theoretical stage in two legs:
//!
//! ```text
//! 1. horizontal: x_eq = x_from_y(y)                  (operating line → curve)
//! 2. vertical:   y'   = op(x_eq)                      (curve → operating line)
//!                op = rectifying if x_eq ≥ x_switch, stripping otherwise
//! 3. stop if x_eq ≤ xb + tolerance
//! ```
//!
//! Each leg counts half a stage. The loop is bounded by the configured
//! iteration cap; exhausting it is reported through `reboiler_reached = false`.
//!
//! # Recorded points
//!
//! Each iteration appends two points, the staircase corner `(x_eq, y)` and the
//! end of the vertical leg `(x_eq, y')`. The first horizontal leg starts at
//! `(xd, xd)`, which is not part of `points` but is prepended by
//! [`StageResult::staircase`].

use tracing::{debug, trace};

use crate::error::EngineError;
use crate::models::{DiagramPoint, Line};
use crate::physics::EquilibriumCurve;
use crate::solver::config::StepperConfiguration;

/// A vertex of the stage staircase
pub type StepPoint = DiagramPoint;

/// Column section whose operating line governs a vertical leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSection {
    /// Above the feed stage
    Rectifying,

    /// Below the feed stage
    Stripping,
}

/// Outcome of a step-off
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult {
    /// Theoretical stages, rounded up from the half-stage total
    pub stage_count: u32,

    /// Staircase vertices in drawing order
    pub points: Vec<StepPoint>,

    /// `true` if the bottoms composition was reached, `false` if the
    /// iteration cap ran out first
    pub reboiler_reached: bool,

    /// First stage whose vertical leg lands on the stripping line
    pub feed_stage: Option<u32>,

    /// Step-off iterations performed
    pub iterations: usize,

    /// Distillate composition the staircase is anchored at
    pub distillate_composition: f64,
}

impl StageResult {
    /// Staircase polyline including the `(xd, xd)` anchor
    pub fn staircase(&self) -> Vec<StepPoint> {
        let anchor = StepPoint::new(self.distillate_composition, self.distillate_composition);
        std::iter::once(anchor).chain(self.points.iter().copied()).collect()
    }

    /// Whether the construction terminated at the bottoms composition
    pub fn is_converged(&self) -> bool {
        self.reboiler_reached
    }
}

/// Stage stepper over one equilibrium curve and two operating lines
///
/// # Example
///
/// ```rust
/// use mccabe_rs::models::Line;
/// use mccabe_rs::physics::EquilibriumCurve;
/// use mccabe_rs::solver::{StageStepper, StepperConfiguration};
///
/// let stepper = StageStepper::new(
///     EquilibriumCurve::new(2.5),
///     Line::new(2.0 / 3.0, 1.0 / 3.0),
///     Line::new(1.3703703703703702, -0.01851851851851849),
///     0.5,
/// );
///
/// let result = stepper.run(0.95, 0.05, &StepperConfiguration::default())?;
/// assert!(result.reboiler_reached);
/// assert_eq!(result.stage_count, 13);
/// # Ok::<(), mccabe_rs::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StageStepper {
    curve: EquilibriumCurve,
    rectifying: Line,
    stripping: Line,
    section_boundary: f64,
}

impl StageStepper {
    /// Create a stepper
    ///
    /// `section_boundary` is the liquid composition at and above which the
    /// rectifying line governs (intersection x, or zf for a vertical feed line).
    pub fn new(curve: EquilibriumCurve, rectifying: Line, stripping: Line, section_boundary: f64) -> Self {
        Self {
            curve,
            rectifying,
            stripping,
            section_boundary,
        }
    }

    /// Section governing the vertical leg at liquid composition `x`
    pub fn section_at(&self, x: f64) -> OperatingSection {
        if x >= self.section_boundary {
            OperatingSection::Rectifying
        } else {
            OperatingSection::Stripping
        }
    }

    fn operating_line(&self, section: OperatingSection) -> &Line {
        match section {
            OperatingSection::Rectifying => &self.rectifying,
            OperatingSection::Stripping => &self.stripping,
        }
    }

    /// Step off stages from `distillate_composition` down to `bottoms_composition`
    ///
    /// Exhausting the iteration cap is not an error here: the result comes
    /// back with `reboiler_reached = false` and the caller decides.
    ///
    /// # Errors
    ///
    /// - `EngineError::InvalidConfiguration` if `config` fails validation
    /// - `EngineError::DegenerateCurve` if a vapor composition leaves the
    ///   domain of the equilibrium inverse
    pub fn run(
        &self,
        distillate_composition: f64,
        bottoms_composition: f64,
        config: &StepperConfiguration,
    ) -> Result<StageResult, EngineError> {
        config.validate()?;

        let mut points = Vec::with_capacity(2 * config.max_iterations);
        let mut half_stages: u32 = 0;
        let mut feed_stage = None;
        let mut reboiler_reached = false;
        let mut iterations = 0;

        let mut y_current = distillate_composition;
        let termination_x = bottoms_composition + config.termination_tolerance;

        for iteration in 0..config.max_iterations {
            iterations = iteration + 1;

            // ====== Horizontal leg ======
            let x_eq = self.curve.x_from_y(y_current)?;
            points.push(StepPoint::new(x_eq, y_current));
            half_stages += 1;

            // ====== Vertical leg ======
            let section = self.section_at(x_eq);
            if section == OperatingSection::Stripping && feed_stage.is_none() {
                feed_stage = Some(iterations as u32);
            }

            let y_next = self.operating_line(section).y_at(x_eq);
            points.push(StepPoint::new(x_eq, y_next));
            half_stages += 1;

            trace!(stage = iterations, x = x_eq, y = y_current, y_next, ?section, "stage stepped");
            y_current = y_next;

            // ====== Termination ======
            if x_eq <= termination_x {
                reboiler_reached = true;
                break;
            }
        }

        let stage_count = half_stages.div_ceil(2);
        debug!(stage_count, iterations, reboiler_reached, ?feed_stage, "step-off finished");

        Ok(StageResult {
            stage_count,
            points,
            reboiler_reached,
            feed_stage,
            iterations,
            distillate_composition,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================
