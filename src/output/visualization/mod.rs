//! Visualization of McCabe-Thiele constructions
//!
//! This module draws diagrams using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Plot configuration (`PlotConfig`)
//! - **diagram**: The full x-y diagram (`plot_mccabe_thiele`)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mccabe_rs::output::visualization::{plot_mccabe_thiele, PlotConfig};
//!
//! let construction = McCabeThiele::build(&params)?;
//! let result = construction.step_off(&StepperConfiguration::default())?;
//!
//! // Default config
//! plot_mccabe_thiele(&construction, &result, "diagram.png", None)?;
//!
//! // Custom title, SVG output
//! let config = PlotConfig::diagram("Benzene / Toluene");
//! plot_mccabe_thiele(&construction, &result, "diagram.svg", Some(&config))?;
//! ```

pub mod config;
pub mod diagram;

pub use config::{PlotConfig, NO_TITLE};

pub use diagram::{clip_to_unit_square, plot_mccabe_thiele, DEFAULT_DIAGRAM_PATH};
