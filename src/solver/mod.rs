//! Stage construction
//!
//! This module counts theoretical stages by stepping off between the
//! equilibrium curve and the operating lines.
//!
//! # Core Concepts
//!
//! The construction separates concerns into three layers:
//!
//! 1. **Construction** (`McCabeThiele`) - WHAT to step on
//!    - Equilibrium curve
//!    - Rectifying, feed and stripping lines
//!    - Section boundary
//!
//! 2. **Configuration** (`StepperConfiguration`) - HOW to step
//!    - Iteration cap
//!    - Termination tolerance
//!
//! 3. **Stepper** (`StageStepper`) - The method
//!    - Alternating horizontal/vertical legs
//!    - Half-stage accounting
//!    - Termination at the bottoms composition
//!
//! # Module Organization
//!
//! - **`config`**: `StepperConfiguration` and the reference constants
//! - **`stepper`**: `StageStepper`, `StageResult`, `StepPoint`
//! - **`construction`**: `McCabeThiele`, `compute_stages`
//!
//! # Quick Start Example
//!
//! ```rust
//! use mccabe_rs::physics::ColumnParameters;
//! use mccabe_rs::solver::compute_stages;
//!
//! let params = ColumnParameters::new(2.5, 3.0, 0.5, 0.5, 0.05, 0.95);
//! let result = compute_stages(params)?;
//!
//! println!("Number of stages required: {}", result.stage_count);
//! # Ok::<(), mccabe_rs::EngineError>(())
//! ```
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌───────────────────┐
//! │ ColumnParameters  │  (validated by the caller)
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ McCabeThiele      │ ← curve + lines + intersection
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼────────────┐
//! │ StepperConfiguration │ ← cap + tolerance
//! └─────────┬────────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ StageStepper      │ ← step-off loop
//! └─────────┬─────────┘
//!           │
//! ┌─────────▼─────────┐
//! │ StageResult       │ ← stage count + staircase
//! └───────────────────┘
//! ```
//!
//! # Error Handling
//!
//! All entry points return `Result<T, EngineError>`:
//!
//! ```rust
//! use mccabe_rs::{EngineError, physics::ColumnParameters, solver::compute_stages};
//!
//! let params = ColumnParameters::new(2.0, 2.0, 1.0, 0.5, 0.05, 0.95);
//! match compute_stages(params) {
//!     Ok(result) => println!("{} stages", result.stage_count),
//!     Err(EngineError::NonConvergent { partial }) => {
//!         eprintln!("pinch: stopped after {} stages", partial.stage_count);
//!     }
//!     Err(e) => eprintln!("construction failed: {}", e),
//! }
//! ```

pub mod config;
pub mod construction;
pub mod stepper;

pub use config::{StepperConfiguration, MAX_ITERATIONS, TERMINATION_TOLERANCE};
pub use construction::{compute_stages, compute_stages_with, McCabeThiele};
pub use stepper::{OperatingSection, StageResult, StageStepper, StepPoint};
