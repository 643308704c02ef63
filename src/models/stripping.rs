//! Stripping-section operating line
//!
//! The stripping line is the line through the rectifying/feed intersection
//! and the bottoms point (xb, xb) on the diagonal.

use tracing::debug;

use crate::error::{EngineError, GEOMETRY_EPSILON};
use crate::models::line::{DiagramPoint, Line};

/// Builds the lower-section operating line
#[derive(Debug, Clone, Copy, Default)]
pub struct StrippingLineBuilder;

impl StrippingLineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Line through `intersection` and `(bottoms_composition, bottoms_composition)`
    ///
    /// # Errors
    ///
    /// `EngineError::DegenerateStrippingLine` when the intersection
    /// x-coordinate equals `bottoms_composition` (within `GEOMETRY_EPSILON`),
    /// where the two points do not define a unique non-vertical line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mccabe_rs::models::{DiagramPoint, StrippingLineBuilder};
    ///
    /// let strip = StrippingLineBuilder::new()
    ///     .build(&DiagramPoint::new(0.5, 2.0 / 3.0), 0.05)?;
    /// assert!((strip.y_at(0.05) - 0.05).abs() < 1e-12);
    /// # Ok::<(), mccabe_rs::EngineError>(())
    /// ```
    pub fn build(&self, intersection: &DiagramPoint, bottoms_composition: f64) -> Result<Line, EngineError> {
        let run = intersection.x - bottoms_composition;
        if run.abs() < GEOMETRY_EPSILON {
            return Err(EngineError::DegenerateStrippingLine { x: intersection.x });
        }

        let slope = (intersection.y - bottoms_composition) / run;
        let intercept = intersection.y - slope * intersection.x;

        debug!(slope, intercept, "stripping line built");

        Ok(Line::new(slope, intercept))
    }
}
