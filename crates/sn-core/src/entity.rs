//! The `Entity` trait — identity and location shared by every simulated
//! object.

use crate::Point;

/// Anything that occupies a named position on the chart.
///
/// Names are unique across the whole world (ports and vessels share one
/// namespace) and never change after creation.  The world hands out
/// `&dyn Entity` lists to renderers that only need a label and a position.
pub trait Entity {
    fn name(&self) -> &str;

    fn location(&self) -> Point;
}
