//! Planar sea-chart coordinates and compass arithmetic.
//!
//! The chart is a flat plane measured in nautical miles: `x` grows to the
//! east and `y` grows to the north.  Headings are compass bearings in
//! degrees, 0° = north, increasing clockwise (90° = east).
//!
//! All arithmetic is plain `f64` with no fused or reordered operations so a
//! replayed command sequence reproduces positions bit for bit.

use crate::{CoreError, CoreResult};

/// A position on the chart, in nautical miles.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Like [`Point::new`] but rejects NaN and infinite components.
    pub fn checked(x: f64, y: f64) -> CoreResult<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(CoreError::NonFiniteCoordinate { x, y })
        }
    }

    /// Straight-line distance to `other` in nautical miles.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Compass bearing from `self` to `other`, normalised into `[0, 360)`.
    ///
    /// Note the argument order: `atan2(dx, dy)`, east over north, which
    /// yields a bearing rather than a mathematical angle.
    pub fn bearing_to(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        normalize_heading(dx.atan2(dy).to_degrees())
    }

    /// The point `distance` nm away along compass `heading` (degrees).
    pub fn advanced(self, heading: f64, distance: f64) -> Point {
        let rad = heading.to_radians();
        Point {
            x: self.x + distance * rad.sin(),
            y: self.y + distance * rad.cos(),
        }
    }

    /// `true` if `other` lies within `tolerance` nm of `self`.
    #[inline]
    pub fn within(self, other: Point, tolerance: f64) -> bool {
        self.distance_to(other) <= tolerance
    }
}

/// Validate a heading in degrees and fold it into `[0, 360)`.
pub fn checked_heading(degrees: f64) -> CoreResult<f64> {
    if degrees.is_finite() {
        Ok(normalize_heading(degrees))
    } else {
        Err(CoreError::NonFiniteHeading(degrees))
    }
}

/// Fold any heading in degrees into `[0, 360)`.
pub fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
