//! Export of construction results
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use mccabe_rs::output::export::{export_staircase_csv, CsvConfig, CsvMetadata};
//!
//! export_staircase_csv(&result, "stages.csv", None)?;
//!
//! let config = CsvConfig::european()
//!     .with_metadata(CsvMetadata::from_parameters(&params));
//! export_staircase_csv(&result, "stages_eu.csv", Some(&config))?;
//! ```

pub mod csv;

pub use csv::{export_staircase_csv, CsvConfig, CsvMetadata};
