//! mccabe-rs: McCabe-Thiele Stage Construction
//!
//! Counts the theoretical equilibrium stages of a binary distillation column
//! with the McCabe-Thiele graphical method, and exposes the geometry
//! (equilibrium curve, operating lines, feed line, staircase) needed to draw it.
//!
//! # Architecture
//!
//! mccabe-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Construction**
//!    - Physics defines the relations (equilibrium, parameters)
//!    - Models define the operating geometry (lines)
//!    - The solver steps off stages on that geometry
//!
//! 2. **Explicit failure**
//!    - Every degenerate configuration is a distinct `EngineError` variant
//!    - Non-convergence is reported, never passed off as a stage count
//!
//! # Quick Start
//!
//! ```rust
//! use mccabe_rs::prelude::*;
//!
//! # fn main() -> Result<(), EngineError> {
//! // 1. Describe the column
//! let params = ColumnParameters::new(
//!     2.5,   // relative volatility
//!     2.0,   // reflux ratio
//!     1.0,   // saturated liquid feed
//!     0.5,   // zf
//!     0.05,  // xb
//!     0.95,  // xd
//! );
//! params.validate()?;
//!
//! // 2. Build the geometry and step off
//! let construction = McCabeThiele::build(&params)?;
//! let result = construction.step_off(&StepperConfiguration::default())?;
//!
//! // 3. Read results
//! println!("Number of stages required: {}", result.stage_count);
//! println!("Feed stage: {:?}", result.feed_stage);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Parameters and equilibrium curve
//! - [`models`]: Operating, feed and stripping lines
//! - [`solver`]: Stage stepper and assembled construction
//! - [`output`]: Diagram rendering and CSV export

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod solver;

pub mod output;

pub use error::EngineError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use mccabe_rs::prelude::*;
    //! ```
    pub use crate::error::EngineError;
    pub use crate::models::{DiagramPoint,
                            FeedLine,
                            Line};
    pub use crate::physics::{ColumnParameters,
                             EquilibriumCurve};
    pub use crate::solver::{compute_stages,
                            McCabeThiele,
                            StageResult,
                            StepPoint,
                            StepperConfiguration};
}
