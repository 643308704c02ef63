//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
pub use test_helpers::{
    assert_on_diagonal,
    converging_parameters,
    pinched_parameters,
    stage_count_or_cap,
};
