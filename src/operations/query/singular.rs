use crate::geometry::Polygon;
use crate::math::intersect_2d::segment_contacts;
use crate::math::polygon_2d::dedup_consecutive;
use crate::math::GeometryParams;

/// Tests whether a polygon is a single simple closed loop.
///
/// Consecutive duplicate points are ignored. The polygon is not singular if
/// any vertex is visited twice or if two non-adjacent edges touch, cross or
/// overlap.
pub struct IsSingular<'a> {
    polygon: &'a Polygon,
    params: GeometryParams,
}

impl<'a> IsSingular<'a> {
    /// Creates a new `IsSingular` query with default tolerances.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            params: GeometryParams::default(),
        }
    }

    /// Sets the tolerance under which points coincide.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        let eps = self.params.epsilon;
        let pts = dedup_consecutive(&self.polygon.points, eps);
        let n = pts.len();
        if n < 3 {
            return true;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                if (pts[i] - pts[j]).norm() < eps {
                    return false;
                }
            }
        }

        for i in 0..n {
            let (a0, a1) = (pts[i], pts[(i + 1) % n]);
            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (b0, b1) = (pts[j], pts[(j + 1) % n]);
                if !segment_contacts(&a0, &a1, &b0, &b1, eps).is_empty() {
                    return false;
                }
            }
        }

        true
    }
}
