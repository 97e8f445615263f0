//! Shared types for the nazoru tracing engine.

use serde::{Deserialize, Serialize};

/// A 2D point in either path-author coordinates or canvas pixel
/// coordinates, depending on context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (units or pixels from the left edge).
    pub x: f64,
    /// Vertical position (units or pixels from the top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Avoids the square root for comparison purposes.
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.mul_add(dx, dy * dy)
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangular coordinate space, in author units or device pixels.
///
/// Used both for the fixed author space a path was designed in
/// (e.g. 100×120 units) and for the drawing surface the samples are
/// scaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    /// Width in units/pixels.
    pub width: f64,
    /// Height in units/pixels.
    pub height: f64,
}

impl CanvasSize {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The centre point of the space.
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Returns `true` if the space can be drawn into: both extents are
    /// finite and strictly positive.
    ///
    /// A detached or zero-size surface fails this check; scaling into
    /// such a space is undefined and callers must no-op instead.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn point_distance_squared() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_squared(b) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance(b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn point_distance_to_self_is_zero() {
        let p = Point::new(7.0, 11.0);
        assert!(p.distance(p).abs() < f64::EPSILON);
    }

    #[test]
    fn point_finiteness() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn canvas_center() {
        let c = CanvasSize::new(100.0, 120.0);
        assert_eq!(c.center(), Point::new(50.0, 60.0));
    }

    #[test]
    fn canvas_usability() {
        assert!(CanvasSize::new(300.0, 300.0).is_usable());
        assert!(!CanvasSize::new(0.0, 300.0).is_usable());
        assert!(!CanvasSize::new(300.0, 0.0).is_usable());
        assert!(!CanvasSize::new(-1.0, 300.0).is_usable());
        assert!(!CanvasSize::new(f64::NAN, 300.0).is_usable());
    }

    #[test]
    fn point_serde_round_trip() {
        let p = Point::new(3.25, -2.5);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
