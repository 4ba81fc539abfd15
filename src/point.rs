//! Geometric sample points.

/// A single 2-D sample belonging to one stroke of a gesture.
///
/// `stroke_id` groups the points of one continuous pen-down motion; ids are
/// expected to be non-decreasing in capture order, increasing only at a new
/// stroke boundary. Id `0` is reserved for synthetic points such as centroids
/// and never denotes a real stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Id of the stroke this point belongs to.
    pub stroke_id: u32,
}

/// The geometric origin; canonical clouds are centered here.
pub const ORIGIN: Point = Point {
    x: 0.0,
    y: 0.0,
    stroke_id: 0,
};

impl Point {
    /// Creates a point on the given stroke.
    pub const fn new(x: f64, y: f64, stroke_id: u32) -> Self {
        Self { x, y, stroke_id }
    }
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::{distance, Point};

    #[test]
    fn distance_matches_pythagoras() {
        let a = Point::new(0.0, 0.0, 1);
        let b = Point::new(3.0, 4.0, 1);
        assert!((distance(a, b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(-1.5, 2.0, 1);
        let b = Point::new(4.0, -0.5, 2);
        assert!((distance(a, b) - distance(b, a)).abs() < 1e-12);
    }
}
