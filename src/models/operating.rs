//! Rectifying line, feed line and their intersection
//!
//! # Rectifying line
//!
//! ```text
//! y = R/(R+1)·x + 1/(R+1)
//! ```
//!
//! The intercept is `1/(R+1)`, not the textbook `xd/(R+1)`: the line passes
//! through (1, 1) and the step-off is anchored at (xd, xd) by its starting
//! vapor composition instead. Both must change together or the stage count
//! drifts from the reference construction.
//!
//! # Feed line
//!
//! ```text
//! y = q/(q-1)·x - zf/(q-1)      (q ≠ 1)
//! x = zf                        (q = 1)
//! ```

use tracing::debug;

use crate::error::{EngineError, GEOMETRY_EPSILON};
use crate::models::line::{DiagramPoint, FeedLine, Line};

/// Tolerance on |q - 1| under which the feed is treated as saturated liquid
pub const VERTICAL_FEED_TOLERANCE: f64 = 1e-6;

/// Builds the upper-section operating geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatingLineBuilder;

impl OperatingLineBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Rectifying-section operating line for reflux ratio `reflux_ratio`
    ///
    /// # Example
    ///
    /// ```rust
    /// use mccabe_rs::models::OperatingLineBuilder;
    ///
    /// let rect = OperatingLineBuilder::new().rectifying(2.0);
    /// assert!((rect.slope - 2.0 / 3.0).abs() < 1e-15);
    /// assert!((rect.intercept - 1.0 / 3.0).abs() < 1e-15);
    /// ```
    pub fn rectifying(&self, reflux_ratio: f64) -> Line {
        Line::new(
            reflux_ratio / (reflux_ratio + 1.0),
            1.0 / (reflux_ratio + 1.0),
        )
    }

    /// Feed line for feed quality `feed_quality` and feed composition `feed_composition`
    pub fn feed_line(&self, feed_quality: f64, feed_composition: f64) -> FeedLine {
        if (feed_quality - 1.0).abs() < VERTICAL_FEED_TOLERANCE {
            return FeedLine::Vertical { x: feed_composition };
        }

        FeedLine::Sloped(Line::new(
            feed_quality / (feed_quality - 1.0),
            -feed_composition / (feed_quality - 1.0),
        ))
    }

    /// Point where the rectifying line meets the feed line
    ///
    /// # Errors
    ///
    /// `EngineError::NoIntersection` when both lines have the same slope
    /// (within `GEOMETRY_EPSILON`). Within the validated range this only
    /// happens for R = 0 together with q = 0.
    pub fn intersection(&self, rectifying: &Line, feed: &FeedLine) -> Result<DiagramPoint, EngineError> {
        let x = match feed {
            FeedLine::Vertical { x } => *x,
            FeedLine::Sloped(feed) => {
                let slope_gap = rectifying.slope - feed.slope;
                if slope_gap.abs() < GEOMETRY_EPSILON {
                    return Err(EngineError::NoIntersection { slope: rectifying.slope });
                }
                (feed.intercept - rectifying.intercept) / slope_gap
            }
        };

        let point = DiagramPoint::new(x, rectifying.y_at(x));
        debug!(x = point.x, y = point.y, vertical_feed = feed.is_vertical(), "operating lines intersect");

        Ok(point)
    }
}

// =================================================================================================
// Tests
// =================================================================================================
