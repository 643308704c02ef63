//! McCabe-Thiele diagram rendering
//!
//! Draws, on square unit axes:
//! - the y = x diagonal and the equilibrium curve
//! - the rectifying, stripping and feed lines
//! - the stage staircase, anchored at (xd, xd)
//! - markers at (zf, zf), (xd, xd) and (xb, xb)
//!
//! # Usage
//!
//! ```rust,ignore
//! use mccabe_rs::output::visualization::{plot_mccabe_thiele, DEFAULT_DIAGRAM_PATH};
//!
//! let construction = McCabeThiele::build(&params)?;
//! let result = construction.step_off(&StepperConfiguration::default())?;
//! plot_mccabe_thiele(&construction, &result, DEFAULT_DIAGRAM_PATH, None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use crate::models::{FeedLine, Line};
use crate::solver::{McCabeThiele, StageResult};
use super::config::{PlotConfig, NO_TITLE};

/// File name used when the user asks to save the diagram
pub const DEFAULT_DIAGRAM_PATH: &str = "mccabe_thiele_diagram.png";

/// Number of dashes drawn for the feed line
const FEED_DASHES: usize = 40;

// =================================================================================================
// Geometry Helpers
// =================================================================================================

/// Portion of `line` inside the unit square, as its two end points
///
/// Returns `None` when the line does not cross the square.
pub fn clip_to_unit_square(line: &Line) -> Option<((f64, f64), (f64, f64))> {
    let (x_lo, x_hi) = if line.slope == 0.0 {
        if !(0.0..=1.0).contains(&line.intercept) {
            return None;
        }
        (0.0, 1.0)
    } else {
        let x_at_bottom = -line.intercept / line.slope;
        let x_at_top = (1.0 - line.intercept) / line.slope;
        (
            x_at_bottom.min(x_at_top).max(0.0),
            x_at_bottom.max(x_at_top).min(1.0),
        )
    };

    if x_lo > x_hi {
        return None;
    }

    Some(((x_lo, line.y_at(x_lo)), (x_hi, line.y_at(x_hi))))
}

/// Split the segment `from → to` into `dashes` visible pieces with gaps between
fn dashed_segments(from: (f64, f64), to: (f64, f64), dashes: usize) -> Vec<[(f64, f64); 2]> {
    let pieces = 2 * dashes.max(1) - 1;
    let lerp = |t: f64| (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);

    (0..pieces)
        .step_by(2)
        .map(|i| {
            let t0 = i as f64 / pieces as f64;
            let t1 = (i + 1) as f64 / pieces as f64;
            [lerp(t0), lerp(t1)]
        })
        .collect()
}

/// End points of the feed line inside the unit square
fn feed_line_extent(feed: &FeedLine) -> Option<((f64, f64), (f64, f64))> {
    match feed {
        FeedLine::Vertical { x } => Some(((*x, 0.0), (*x, 1.0))),
        FeedLine::Sloped(line) => clip_to_unit_square(line),
    }
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot a complete McCabe-Thiele diagram
///
/// The backend is chosen from the file extension: `.svg` renders SVG,
/// anything else renders a bitmap (PNG).
///
/// # Arguments
///
/// * `construction` - Curve and operating lines
/// * `result` - Step-off result (a partial, non-converged result is drawn as is)
/// * `output_path` - Path to save the plot (PNG or SVG)
/// * `config` - Optional plot configuration
pub fn plot_mccabe_thiele(
    construction: &McCabeThiele,
    result: &StageResult,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    // Create default config if needed (avoid temporary value)
    let default_config = PlotConfig::diagram(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_diagram_impl(backend, construction, result, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_diagram_impl(backend, construction, result, config)
        }
    }
}

/// Implementation for diagram plotting with concrete backend
fn plot_diagram_impl<DB: DrawingBackend>(
    backend: DB,
    construction: &McCabeThiele,
    result: &StageResult,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let params = construction.parameters();
    let stroke = config.line_width;

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..1.0, 0.0..1.0)?;

    let mut mesh = chart.configure_mesh();
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&|x| format!("{:.1}", x))
        .y_label_formatter(&|y| format!("{:.1}", y))
        .draw()?;

    // ====== Diagonal and equilibrium curve ======

    let color = config.diagonal_color;
    chart
        .draw_series(LineSeries::new(
            vec![(0.0, 0.0), (1.0, 1.0)],
            ShapeStyle::from(&color).stroke_width(stroke),
        ))?
        .label("y = x (Diagonal)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    let color = config.equilibrium_color;
    chart
        .draw_series(LineSeries::new(
            construction.curve().sample(config.curve_samples),
            ShapeStyle::from(&color).stroke_width(stroke),
        ))?
        .label("Equilibrium Curve")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    // ====== Operating lines ======

    let operating = [
        ("Rectifying Line", construction.rectifying(), config.rectifying_color),
        ("Stripping Line", construction.stripping(), config.stripping_color),
    ];
    for (label, line, color) in operating {
        if let Some((start, end)) = clip_to_unit_square(line) {
            chart
                .draw_series(LineSeries::new(
                    vec![start, end],
                    ShapeStyle::from(&color).stroke_width(stroke),
                ))?
                .label(label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
        }
    }

    // ====== Feed line (dashed) ======

    if let Some((start, end)) = feed_line_extent(construction.feed_line()) {
        let color = config.feed_color;
        let label = if construction.feed_line().is_vertical() {
            "q-line (vertical)"
        } else {
            "q-line"
        };

        chart
            .draw_series(
                dashed_segments(start, end, FEED_DASHES)
                    .into_iter()
                    .map(move |segment| {
                        PathElement::new(segment.to_vec(), ShapeStyle::from(&color).stroke_width(stroke))
                    }),
            )?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    // ====== Stages ======

    let color = config.staircase_color;
    let staircase: Vec<(f64, f64)> = result.staircase().iter().map(|p| (p.x, p.y)).collect();
    chart
        .draw_series(LineSeries::new(
            staircase,
            ShapeStyle::from(&color).stroke_width(stroke),
        ))?
        .label(format!("Stages ({})", result.stage_count))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    // ====== Markers ======

    let zf = params.feed_composition;
    chart
        .draw_series(std::iter::once(Cross::new(
            (zf, zf),
            8,
            ShapeStyle::from(&RED).stroke_width(3),
        )))?
        .label("Feed (zf)")
        .legend(|(x, y)| Cross::new((x + 10, y), 6, ShapeStyle::from(&RED).stroke_width(2)));

    let xd = params.distillate_composition;
    chart
        .draw_series(std::iter::once(Circle::new((xd, xd), 7, GREEN.filled())))?
        .label("Distillate (xd)")
        .legend(|(x, y)| Circle::new((x + 10, y), 5, GREEN.filled()));

    let xb = params.bottoms_composition;
    chart
        .draw_series(std::iter::once(
            EmptyElement::at((xb, xb)) + Rectangle::new([(-7, -7), (7, 7)], BLUE.filled()),
        ))?
        .label("Bottoms (xb)")
        .legend(|(x, y)| Rectangle::new([(x + 5, y - 5), (x + 15, y + 5)], BLUE.filled()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
