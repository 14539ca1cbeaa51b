use crate::geometry::Polygon;
use crate::math::distance_2d::point_to_ring_dist;
use crate::math::winding::winding_number;
use crate::math::Point2;

/// Tests whether a point lies inside a polygon or within a margin of its edges.
///
/// Inside means a nonzero winding number, so stitched holes are outside.
pub struct ContainsPoint<'a> {
    polygon: &'a Polygon,
    point: Point2,
    margin: f64,
}

impl<'a> ContainsPoint<'a> {
    /// Creates a new containment query with no margin.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2) -> Self {
        Self {
            polygon,
            point,
            margin: 0.0,
        }
    }

    /// Also accepts points at most `margin` away from an edge.
    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let points = &self.polygon.points;
        if winding_number(&self.point, points) != 0 {
            return true;
        }
        self.margin > 0.0 && point_to_ring_dist(&self.point, points) <= self.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn inside_outside_and_margin() {
        let square = Polygon::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
        assert!(ContainsPoint::new(&square, p(5.0, 5.0)).execute());
        assert!(!ContainsPoint::new(&square, p(11.0, 5.0)).execute());
        assert!(ContainsPoint::new(&square, p(11.0, 5.0)).with_margin(1.5).execute());
        assert!(!ContainsPoint::new(&square, p(13.0, 5.0)).with_margin(1.5).execute());
    }

    #[test]
    fn stitched_hole_is_outside() {
        let room = Polygon::from_xy(&[
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [0.0, 3.0],
            [0.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [2.0, 2.0],
            [2.0, 1.0],
            [0.0, 1.0],
        ]);
        assert!(!ContainsPoint::new(&room, p(1.5, 1.5)).execute());
        assert!(ContainsPoint::new(&room, p(2.5, 2.5)).execute());
    }
}
