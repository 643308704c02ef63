//! Physical description of the column
//!
//! This module holds what is known about the mixture and the column before
//! any construction happens:
//!
//! - **`ColumnParameters`**: the six operating parameters (α, R, q, zf, xb, xd)
//! - **`EquilibriumCurve`**: constant-relative-volatility VLE and its inverse
//!
//! # Architecture
//!
//! Physics is kept apart from the construction:
//! - The physics provides the **relations** (equilibrium, compositions)
//! - The solver provides the **method** (graphical step-off)
//!
//! # Example
//!
//! ```rust
//! use mccabe_rs::physics::{ColumnParameters, EquilibriumCurve};
//!
//! let params = ColumnParameters::new(2.5, 2.0, 1.0, 0.5, 0.05, 0.95);
//! params.validate()?;
//!
//! let curve = EquilibriumCurve::new(params.alpha);
//! let x = curve.x_from_y(params.distillate_composition)?;
//! assert!(x < params.distillate_composition);
//! # Ok::<(), mccabe_rs::EngineError>(())
//! ```

pub mod equilibrium;
pub mod parameters;

pub use equilibrium::EquilibriumCurve;
pub use parameters::ColumnParameters;
