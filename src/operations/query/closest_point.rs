use crate::geometry::Polygon;
use crate::math::distance_2d::closest_point_on_segment;
use crate::math::Point2;

/// Nearest point found on a polygon edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHit {
    /// Index of the edge, which starts at the vertex with the same index.
    pub index: usize,
    /// The closest point on the edge.
    pub point: Point2,
    /// The distance from the query point to `point`.
    pub distance: f64,
}

/// Finds the polygon vertex closest to a point, within a margin.
pub struct ClosestVertex<'a> {
    polygon: &'a Polygon,
    point: Point2,
    margin: f64,
}

impl<'a> ClosestVertex<'a> {
    /// Creates a new query accepting vertices at most `margin` away.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2, margin: f64) -> Self {
        Self {
            polygon,
            point,
            margin,
        }
    }

    /// Returns the index of the closest vertex, or `None` if every vertex is
    /// farther than the margin.
    #[must_use]
    pub fn execute(&self) -> Option<usize> {
        self.polygon
            .points
            .iter()
            .enumerate()
            .map(|(i, v)| (i, (v - self.point).norm()))
            .filter(|&(_, d)| d <= self.margin)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }
}

/// Finds the polygon edge closest to a point.
pub struct ClosestEdge<'a> {
    polygon: &'a Polygon,
    point: Point2,
}

impl<'a> ClosestEdge<'a> {
    /// Creates a new `ClosestEdge` query.
    #[must_use]
    pub fn new(polygon: &'a Polygon, point: Point2) -> Self {
        Self { polygon, point }
    }

    /// Returns `None` for polygons with fewer than two points.
    #[must_use]
    pub fn execute(&self) -> Option<EdgeHit> {
        self.polygon
            .edges()
            .enumerate()
            .map(|(index, (a, b))| {
                let point = closest_point_on_segment(&self.point, &a, &b);
                EdgeHit {
                    index,
                    point,
                    distance: (self.point - point).norm(),
                }
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Polygon {
        Polygon::from_xy(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]])
    }

    #[test]
    fn closest_vertex_within_margin() {
        let poly = square();
        assert_eq!(
            ClosestVertex::new(&poly, Point2::new(9.0, 9.5), 2.0).execute(),
            Some(2)
        );
        assert_eq!(
            ClosestVertex::new(&poly, Point2::new(5.0, 5.0), 2.0).execute(),
            None
        );
    }

    #[test]
    fn closest_edge_projects_onto_segment() {
        let poly = square();
        let hit = ClosestEdge::new(&poly, Point2::new(4.0, 12.0)).execute().unwrap();
        assert_eq!(hit.index, 2);
        assert_relative_eq!(hit.point.x, 4.0);
        assert_relative_eq!(hit.point.y, 10.0);
        assert_relative_eq!(hit.distance, 2.0);
    }

    #[test]
    fn closest_edge_of_empty_polygon() {
        assert!(ClosestEdge::new(&Polygon::default(), Point2::new(0.0, 0.0))
            .execute()
            .is_none());
    }
}
