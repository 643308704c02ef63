//! CSV export of the stage staircase
//!
//! Writes the staircase vertices to CSV, readable by spreadsheets, pandas,
//! MATLAB, and most plotting tools.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use mccabe_rs::output::export::export_staircase_csv;
//!
//! export_staircase_csv(&result, "stages.csv", None)?;
//! ```
//!
//! **Output** (`stages.csv`):
//! ```csv
//! Point,x (liquid),y (vapor)
//! 0,0.950000,0.950000
//! 1,0.883721,0.950000
//! 2,0.883721,0.922481
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use mccabe_rs::output::export::{export_staircase_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_parameters(&params));
//!
//! export_staircase_csv(&result, "stages.csv", Some(&config))?;
//! ```
//!
//! **Output** (`stages.csv`):
//! ```csv
//! # McCabe-Thiele Construction
//! # Generated: 2026-10-18T15:30:00Z
//! # Alpha: 2.5
//! # Reflux Ratio: 2
//! ...
//! # Stages: 13
//! # Reboiler Reached: true
//! #
//! Point,x (liquid),y (vapor)
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::physics::ColumnParameters;
use crate::solver::StageResult;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Whether to start with the (xd, xd) anchor (default: true)
    pub include_anchor: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            include_anchor: true,
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    pub alpha: Option<f64>,
    pub reflux_ratio: Option<f64>,
    pub feed_quality: Option<f64>,
    pub feed_composition: Option<f64>,
    pub bottoms_composition: Option<f64>,
    pub distillate_composition: Option<f64>,

    /// Free-form `key: value` lines
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata holding every column parameter
    pub fn from_parameters(params: &ColumnParameters) -> Self {
        Self {
            alpha: Some(params.alpha),
            reflux_ratio: Some(params.reflux_ratio),
            feed_quality: Some(params.feed_quality),
            feed_composition: Some(params.feed_composition),
            bottoms_composition: Some(params.bottoms_composition),
            distillate_composition: Some(params.distillate_composition),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(
    file: &mut impl Write,
    metadata: &CsvMetadata,
    result: &StageResult,
) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# McCabe-Thiele Construction")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    let fields = [
        ("Alpha", metadata.alpha),
        ("Reflux Ratio", metadata.reflux_ratio),
        ("Feed Quality (q)", metadata.feed_quality),
        ("Feed Composition (zf)", metadata.feed_composition),
        ("Bottoms Composition (xb)", metadata.bottoms_composition),
        ("Distillate Composition (xd)", metadata.distillate_composition),
    ];
    for (name, value) in fields {
        if let Some(value) = value {
            writeln!(file, "# {}: {}", name, value)?;
        }
    }

    writeln!(file, "# Stages: {}", result.stage_count)?;
    if let Some(feed_stage) = result.feed_stage {
        writeln!(file, "# Feed Stage: {}", feed_stage)?;
    }
    writeln!(file, "# Reboiler Reached: {}", result.reboiler_reached)?;

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the stage staircase to CSV
///
/// One row per vertex: index, liquid composition, vapor composition.
///
/// # Errors
///
/// - Empty staircase
/// - NaN or Inf coordinates
/// - File creation/write errors
pub fn export_staircase_csv(
    result: &StageResult,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let points = if configuration.include_anchor {
        result.staircase()
    } else {
        result.points.clone()
    };

    // ============================= Validation =============================

    if points.is_empty() {
        return Err("Empty data: staircase has no points".into());
    }

    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in staircase".into());
    }

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut file, metadata, result)?;
    }

    // ============================= Write Header ===========================

    let delimiter = configuration.delimiter;
    writeln!(file, "Point{}x (liquid){}y (vapor)", delimiter, delimiter)?;

    // ============================= Write Data =============================

    for (index, point) in points.iter().enumerate() {
        writeln!(
            file,
            "{}{}{}{}{}",
            index,
            delimiter,
            format_number(point.x, configuration),
            delimiter,
            format_number(point.y, configuration)
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
