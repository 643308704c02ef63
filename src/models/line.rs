//! Straight-line geometry of the construction
//!
//! Operating lines are plain value types: a slope and an intercept. The feed
//! line may additionally be vertical (q = 1), which has no slope-intercept form.

use nalgebra::Point2;

/// A point of the x-y diagram (liquid composition, vapor composition)
pub type DiagramPoint = Point2<f64>;

/// Line `y = slope·x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    /// Create a line from slope and intercept
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluate the line at `x`
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Feed line (q-line)
///
/// # Variants
///
/// - `Sloped`: ordinary line, for any q ≠ 1
/// - `Vertical`: x = zf, for a saturated-liquid feed (q = 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedLine {
    Sloped(Line),
    Vertical { x: f64 },
}

impl FeedLine {
    /// Whether the feed line is parallel to the y-axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, FeedLine::Vertical { .. })
    }

    /// Evaluate the feed line at `x`
    ///
    /// A vertical line has no single y value and returns `None`.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        match self {
            FeedLine::Sloped(line) => Some(line.y_at(x)),
            FeedLine::Vertical { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_evaluation() {
        let line = Line::new(2.0 / 3.0, 1.0 / 3.0);
        assert_eq!(line.y_at(0.0), 1.0 / 3.0);
        assert!((line.y_at(1.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_vertical_feed_line_has_no_value() {
        let feed = FeedLine::Vertical { x: 0.5 };
        assert!(feed.is_vertical());
        assert_eq!(feed.y_at(0.5), None);

        let feed = FeedLine::Sloped(Line::new(-1.0, 1.0));
        assert!(!feed.is_vertical());
        assert_eq!(feed.y_at(0.25), Some(0.75));
    }
}
