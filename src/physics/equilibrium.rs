//! Vapor-liquid equilibrium at constant relative volatility
//!
//! ```text
//! y_eq(x)   = α·x / (1 + (α - 1)·x)
//! x_from_y  = y / (α - y·(α - 1))
//! ```

use crate::error::{EngineError, GEOMETRY_EPSILON};

/// Equilibrium curve of a binary mixture with constant relative volatility
///
/// Pure and stateless apart from `alpha`. Defined for `alpha > 1`, which is
/// guaranteed by parameter validation.
///
/// # Example
///
/// ```rust
/// use mccabe_rs::physics::EquilibriumCurve;
///
/// let curve = EquilibriumCurve::new(2.0);
/// assert_eq!(curve.y_eq(0.5), 2.0 / 3.0);
/// assert!((curve.x_from_y(2.0 / 3.0).unwrap() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumCurve {
    alpha: f64,
}

impl EquilibriumCurve {
    /// Create the curve for a relative volatility
    pub fn new(alpha: f64) -> Self {
        Self { alpha }
    }

    /// Relative volatility
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Vapor composition in equilibrium with liquid composition `x`
    pub fn y_eq(&self, x: f64) -> f64 {
        self.alpha * x / (1.0 + (self.alpha - 1.0) * x)
    }

    /// Liquid composition in equilibrium with vapor composition `y`
    ///
    /// # Errors
    ///
    /// `EngineError::DegenerateCurve` when the denominator
    /// `alpha - y*(alpha - 1)` is numerically zero. Inside [0, 1] the
    /// denominator never drops below 1, so this only fires for vapor
    /// compositions pushed above 1 by a degenerate operating line.
    pub fn x_from_y(&self, y: f64) -> Result<f64, EngineError> {
        let denominator = self.alpha - y * (self.alpha - 1.0);

        if denominator.abs() < GEOMETRY_EPSILON || !denominator.is_finite() {
            return Err(EngineError::DegenerateCurve { y });
        }

        Ok(y / denominator)
    }

    /// Sample the curve on `n` evenly spaced liquid compositions in [0, 1]
    ///
    /// Returns `(x, y)` pairs, used for rendering.
    pub fn sample(&self, n: usize) -> Vec<(f64, f64)> {
        if n < 2 {
            return vec![(0.0, self.y_eq(0.0))];
        }

        (0..n)
            .map(|i| {
                let x = i as f64 / (n - 1) as f64;
                (x, self.y_eq(x))
            })
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
