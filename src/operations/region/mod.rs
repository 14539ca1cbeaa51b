mod classify;
mod decompose;
mod trace;

use tracing::trace;

use crate::geometry::Polygon;
use crate::math::polygon_2d::{remove_collinear, signed_area_2d};
use crate::math::winding::winding_number_rings;
use crate::math::{GeometryParams, Point2};

/// The area filled by a set of rings under the nonzero winding rule.
///
/// Stored as boundary loops: outer loops counter-clockwise, holes clockwise,
/// so the filled side of every loop edge is on its left.
#[derive(Debug, Clone, Default)]
pub struct FillRegion {
    loops: Vec<Vec<Point2>>,
}

impl FillRegion {
    /// Builds the fill region of `rings`.
    ///
    /// Rings may overlap, self-intersect and stitch several loops through a
    /// repeated vertex.
    #[must_use]
    pub fn from_rings<R: AsRef<[Point2]>>(rings: &[R], params: GeometryParams) -> Self {
        let arrangement = decompose::decompose(rings, params.epsilon);
        let edges = classify::boundary_edges(&arrangement, rings, params.sample_offset);
        let loops: Vec<Vec<Point2>> = trace::trace_loops(&arrangement.points, &edges)
            .into_iter()
            .map(|l| remove_collinear(&l, params.epsilon))
            .filter(|l| !l.is_empty())
            .collect();
        trace!(
            sub_edges = arrangement.edges.len(),
            boundary_edges = edges.len(),
            loops = loops.len(),
            "built fill region"
        );
        Self { loops }
    }

    /// Builds the fill region of a single polygon.
    #[must_use]
    pub fn from_polygon(polygon: &Polygon, params: GeometryParams) -> Self {
        Self::from_rings(&[polygon.points.as_slice()], params)
    }

    /// Every boundary loop.
    #[must_use]
    pub fn loops(&self) -> &[Vec<Point2>] {
        &self.loops
    }

    /// Counter-clockwise loops enclosing filled space.
    pub fn outer_loops(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        self.loops
            .iter()
            .filter(|l| signed_area_2d(l) > 0.0)
            .map(Vec::as_slice)
    }

    /// Clockwise loops enclosing empty space.
    pub fn holes(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        self.loops
            .iter()
            .filter(|l| signed_area_2d(l) < 0.0)
            .map(Vec::as_slice)
    }

    /// Filled area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.loops.iter().map(|l| signed_area_2d(l)).sum()
    }

    /// Returns `true` if the region has no loops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loops.is_empty()
    }

    /// Returns `true` if `point` lies in the filled area.
    #[must_use]
    pub fn contains(&self, point: &Point2) -> bool {
        winding_number_rings(point, &self.loops) != 0
    }
}
