//! Operating-line geometry
//!
//! Line types and the builders that derive them from column parameters:
//!
//! - **`line`**: `Line`, `FeedLine`, `DiagramPoint`
//! - **`operating`**: rectifying line, feed line, intersection
//! - **`stripping`**: stripping line through the intersection and (xb, xb)

pub mod line;
pub mod operating;
pub mod stripping;

pub use line::{DiagramPoint, FeedLine, Line};
pub use operating::{OperatingLineBuilder, VERTICAL_FEED_TOLERANCE};
pub use stripping::StrippingLineBuilder;
