//! Output module for construction results
//!
//! This module turns a construction into something a person or a program can
//! consume:
//! - **Visualization**: PNG/SVG McCabe-Thiele diagrams using plotters
//! - **Export**: CSV staircase data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Diagrams
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── diagram.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mccabe_rs::output::{plot_mccabe_thiele, export_staircase_csv};
//!
//! plot_mccabe_thiele(&construction, &result, "mccabe_thiele_diagram.png", None)?;
//! export_staircase_csv(&result, "stages.csv", None)?;
//! ```

pub mod visualization;
pub mod export;

pub use visualization::{
    plot_mccabe_thiele,
    PlotConfig,
    DEFAULT_DIAGRAM_PATH,
};

pub use export::{
    export_staircase_csv,
    CsvConfig,
    CsvMetadata,
};
