//! Plot configuration for McCabe-Thiele diagrams

use plotters::prelude::*;

/// Configuration for customizing diagrams
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels (square by default)
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `*_color`: One color per drawn element
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
/// - `curve_samples`: Points used to draw the equilibrium curve
///
/// # Example
///
/// ```rust,ignore
/// use mccabe_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::diagram("Benzene / Toluene");
/// config.staircase_color = BLACK;
/// config.width = 1200;
/// config.height = 1200;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 800)
    pub width: u32,

    /// Image height in pixels (default: 800)
    pub height: u32,

    /// Plot title (default: "McCabe-Thiele Diagram")
    pub title: String,

    /// X-axis label
    pub xlabel: String,

    /// Y-axis label
    pub ylabel: String,

    /// y = x diagonal (default: BLUE)
    pub diagonal_color: RGBColor,

    /// Equilibrium curve (default: orange)
    pub equilibrium_color: RGBColor,

    /// Rectifying line (default: GREEN)
    pub rectifying_color: RGBColor,

    /// Stripping line (default: RED)
    pub stripping_color: RGBColor,

    /// Feed line (default: gray)
    pub feed_color: RGBColor,

    /// Stage staircase (default: purple)
    pub staircase_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,

    /// Equilibrium curve resolution (default: 500)
    pub curve_samples: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "McCabe-Thiele Diagram".to_string(),
            xlabel: "x (Liquid Mole Fraction)".to_string(),
            ylabel: "y (Vapor Mole Fraction)".to_string(),
            diagonal_color: BLUE,
            equilibrium_color: RGBColor(255, 165, 0),
            rectifying_color: GREEN,
            stripping_color: RED,
            feed_color: RGBColor(128, 128, 128),
            staircase_color: RGBColor(128, 0, 128),
            background: WHITE,
            line_width: 2,
            show_grid: true,
            curve_samples: 500,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create a diagram config with optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::diagram("Methanol / Water");
    /// let config = PlotConfig::diagram(format!("R = {}", reflux_ratio));
    /// let config = PlotConfig::diagram(NO_TITLE);
    /// ```
    pub fn diagram(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }
}
