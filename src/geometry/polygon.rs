use crate::math::polygon_2d::{bounds_center, is_clockwise, signed_area_2d};
use crate::math::Point2;
use crate::operations::query::{Area, IsSingular};

/// An implicitly closed sequence of plan points.
///
/// Insertion order defines the edges and therefore the orientation. A single
/// sequence may stitch several loops together by revisiting a vertex.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    pub points: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a polygon from `[x, y]` pairs.
    #[must_use]
    pub fn from_xy(points: &[[f64; 2]]) -> Self {
        Self {
            points: points.iter().map(|&[x, y]| Point2::new(x, y)).collect(),
        }
    }

    /// Creates a polygon from single-precision `[x, y]` pairs, widening to `f64`.
    #[must_use]
    pub fn from_f32_points(points: &[[f32; 2]]) -> Self {
        Self {
            points: points
                .iter()
                .map(|&[x, y]| Point2::new(f64::from(x), f64::from(y)))
                .collect(),
        }
    }

    /// Returns the points rounded to single precision.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32_points(&self) -> Vec<[f32; 2]> {
        self.points.iter().map(|p| [p.x as f32, p.y as f32]).collect()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the polygon has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the edges, closing edge included.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.points.len();
        let count = if n < 2 { 0 } else { n };
        (0..count).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Returns a new polygon with the points in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Shoelace area, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Enclosed area under the nonzero winding rule.
    #[must_use]
    pub fn area(&self) -> f64 {
        Area::new(self).execute()
    }

    /// Returns `true` for a simple, hole-free closed loop.
    #[must_use]
    pub fn is_singular(&self) -> bool {
        IsSingular::new(self).execute()
    }

    /// Returns `true` if the points wind clockwise.
    #[must_use]
    pub fn is_clockwise(&self) -> bool {
        is_clockwise(&self.points)
    }

    /// Center of the polygon's bounds.
    #[must_use]
    pub fn center(&self) -> Option<Point2> {
        bounds_center(&self.points)
    }

    /// Moves every point by `(dx, dy)`.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        for p in &mut self.points {
            p.x += dx;
            p.y += dy;
        }
    }
}

impl AsRef<[Point2]> for Polygon {
    fn as_ref(&self) -> &[Point2] {
        &self.points
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn edges_include_closing_edge() {
        let poly = Polygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]);
        let edges: Vec<_> = poly.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].1, Point2::new(0.0, 0.0));
        assert_eq!(Polygon::from_xy(&[[0.0, 0.0]]).edges().count(), 0);
    }

    #[test]
    fn f32_round_trip_widening() {
        let poly = Polygon::from_f32_points(&[[0.5, 0.25], [795.857_9, 990.0]]);
        assert!((poly.points[1].x - f64::from(795.857_9_f32)).abs() < 1e-12);
        assert_eq!(poly.to_f32_points()[0], [0.5, 0.25]);
    }

    #[test]
    fn reversed_flips_orientation() {
        let poly = Polygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        assert!(!poly.is_clockwise());
        assert!(poly.reversed().is_clockwise());
    }

    #[test]
    fn translate_and_center() {
        let mut poly = Polygon::from_xy(&[[0.0, 0.0], [2.0, 0.0], [2.0, 4.0]]);
        poly.translate(1.0, -1.0);
        let c = poly.center().unwrap();
        assert!((c.x - 2.0).abs() < 1e-12);
        assert!((c.y - 1.0).abs() < 1e-12);
    }
}
