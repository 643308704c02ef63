//! Column operating parameters
//!
//! The six numbers that fully define a binary McCabe-Thiele problem.
//! They are validated once, at the boundary, before the engine sees them.

use std::fmt;

use crate::error::EngineError;

/// Operating parameters of a binary distillation column
///
/// # Fields
///
/// - `alpha`: relative volatility of the light component (> 1)
/// - `reflux_ratio`: molar reflux ratio R = L/D (≥ 0)
/// - `feed_quality`: thermal condition q of the feed, in [0, 2]
///   (1 = saturated liquid, 0 = saturated vapor)
/// - `feed_composition`: light-component mole fraction of the feed (zf)
/// - `bottoms_composition`: light-component mole fraction of the bottoms (xb)
/// - `distillate_composition`: light-component mole fraction of the distillate (xd)
///
/// Compositions must satisfy `0 ≤ xb < zf < xd ≤ 1`.
///
/// # Example
///
/// ```rust
/// use mccabe_rs::physics::ColumnParameters;
///
/// let params = ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnParameters {
    /// Relative volatility (light / heavy)
    pub alpha: f64,

    /// Molar reflux ratio R = L/D
    pub reflux_ratio: f64,

    /// Feed thermal condition q
    pub feed_quality: f64,

    /// Feed composition zf
    pub feed_composition: f64,

    /// Bottoms composition xb
    pub bottoms_composition: f64,

    /// Distillate composition xd
    pub distillate_composition: f64,
}

impl ColumnParameters {
    /// Create a new parameter set (not validated)
    pub fn new(
        alpha: f64,
        reflux_ratio: f64,
        feed_quality: f64,
        feed_composition: f64,
        bottoms_composition: f64,
        distillate_composition: f64,
    ) -> Self {
        Self {
            alpha,
            reflux_ratio,
            feed_quality,
            feed_composition,
            bottoms_composition,
            distillate_composition,
        }
    }

    /// Same parameters with another reflux ratio
    pub fn with_reflux_ratio(mut self, reflux_ratio: f64) -> Self {
        self.reflux_ratio = reflux_ratio;
        self
    }

    /// Same parameters with another feed quality
    pub fn with_feed_quality(mut self, feed_quality: f64) -> Self {
        self.feed_quality = feed_quality;
        self
    }

    /// Check that parameters are physically meaningful
    ///
    /// Checks are applied in input order and the first violation is reported.
    ///
    /// # Errors
    ///
    /// `EngineError::InvalidParameters` when:
    /// - any value is NaN or infinite
    /// - `alpha <= 1`
    /// - `reflux_ratio < 0`
    /// - `feed_quality` outside [0, 2]
    /// - compositions do not satisfy `0 ≤ xb < zf < xd ≤ 1`
    pub fn validate(&self) -> Result<(), EngineError> {
        let values = [
            ("alpha", self.alpha),
            ("reflux ratio", self.reflux_ratio),
            ("feed quality", self.feed_quality),
            ("feed composition", self.feed_composition),
            ("bottoms composition", self.bottoms_composition),
            ("distillate composition", self.distillate_composition),
        ];

        for (name, value) in values {
            if !value.is_finite() {
                return Err(EngineError::InvalidParameters(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if self.alpha <= 1.0 {
            return Err(EngineError::InvalidParameters(
                "Relative volatility (alpha) must be greater than 1.".to_string(),
            ));
        }

        if self.reflux_ratio < 0.0 {
            return Err(EngineError::InvalidParameters(
                "Molar reflux ratio must be non-negative.".to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.feed_quality) {
            return Err(EngineError::InvalidParameters(
                "Feed thermal condition (q) must be between 0 and 2.".to_string(),
            ));
        }

        let (xb, zf, xd) = (
            self.bottoms_composition,
            self.feed_composition,
            self.distillate_composition,
        );
        if !(0.0 <= xb && xb < zf && zf < xd && xd <= 1.0) {
            return Err(EngineError::InvalidParameters(
                "Must satisfy 0 ≤ xb < zf < xd ≤ 1 for valid compositions.".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ColumnParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Alpha = {}", self.alpha)?;
        writeln!(f, "Molar Reflux Ratio = {}", self.reflux_ratio)?;
        writeln!(f, "Feed Thermal Condition (q) = {}", self.feed_quality)?;
        writeln!(f, "Feed Composition (zf) = {}", self.feed_composition)?;
        writeln!(f, "Bottoms Composition (xb) = {}", self.bottoms_composition)?;
        write!(f, "Distillate Composition (xd) = {}", self.distillate_composition)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ColumnParameters {
        ColumnParameters::new(2.0, 2.0, 1.0, 0.5, 0.05, 0.95)
    }

    fn message(params: ColumnParameters) -> String {
        match params.validate() {
            Err(EngineError::InvalidParameters(msg)) => msg,
            other => panic!("expected InvalidParameters, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_parameters_are_valid() {
        assert!(reference().validate().is_ok());
    }

    #[test]
    fn test_alpha_must_exceed_one() {
        let mut params = reference();
        params.alpha = 1.0;
        assert!(message(params).contains("alpha"));
    }

    #[test]
    fn test_negative_reflux_rejected() {
        let params = reference().with_reflux_ratio(-0.1);
        assert!(message(params).contains("non-negative"));

        // Zero reflux is allowed
        assert!(reference().with_reflux_ratio(0.0).validate().is_ok());
    }

    #[test]
    fn test_feed_quality_bounds() {
        assert!(reference().with_feed_quality(0.0).validate().is_ok());
        assert!(reference().with_feed_quality(2.0).validate().is_ok());
        assert!(message(reference().with_feed_quality(2.1)).contains("(q)"));
        assert!(message(reference().with_feed_quality(-0.1)).contains("(q)"));
    }

    #[test]
    fn test_composition_ordering() {
        let mut params = reference();
        params.feed_composition = 0.05;
        assert!(message(params).contains("xb < zf < xd"));

        let mut params = reference();
        params.distillate_composition = 1.01;
        assert!(message(params).contains("xb < zf < xd"));

        let mut params = reference();
        params.bottoms_composition = 0.0;
        params.distillate_composition = 1.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut params = reference();
        params.feed_composition = f64::NAN;
        assert!(message(params).contains("finite"));
    }

    #[test]
    fn test_display_echoes_inputs() {
        let text = reference().to_string();
        assert!(text.contains("Alpha = 2"));
        assert!(text.contains("Distillate Composition (xd) = 0.95"));
    }
}
