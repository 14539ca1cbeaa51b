use std::collections::HashMap;

use spade::{ConstrainedDelaunayTriangulation, Point2 as SpadePoint2, Triangulation};
use tracing::{debug, trace};

use crate::error::{Result, TessellationError};
use crate::geometry::Polygon;
use crate::math::{cross, GeometryParams, Point2};
use crate::operations::region::FillRegion;

use super::FloorMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Triangulates the filled area of a room polygon.
///
/// The boundary loops of the polygon's fill region become constraints of a
/// constrained Delaunay triangulation. No triangle crosses a loop, so each one
/// is kept or dropped by testing its centroid against the region; stitched
/// holes stay empty.
pub struct TessellateFloor<'a> {
    polygon: &'a Polygon,
    params: GeometryParams,
}

impl<'a> TessellateFloor<'a> {
    /// Creates a new floor tessellation of `polygon` with default parameters.
    #[must_use]
    pub fn new(polygon: &'a Polygon) -> Self {
        Self {
            polygon,
            params: GeometryParams::default(),
        }
    }

    /// Sets the parameters used to build the fill region.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the tessellation.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::Failed` if a point cannot be inserted into
    /// the triangulation.
    pub fn execute(&self) -> Result<FloorMesh> {
        let region = FillRegion::from_polygon(self.polygon, self.params);
        if region.is_empty() {
            return Ok(FloorMesh::default());
        }

        let mut cdt = Cdt::new();
        for ring in region.loops() {
            constrain_ring(&mut cdt, ring)?;
        }

        let mut mesh = FloorMesh::default();
        let mut index_of: HashMap<usize, u32> = HashMap::new();
        let mut dropped = 0usize;

        for face in cdt.inner_faces() {
            let corners = face.vertices();
            let [a, b, c] = corners.map(|v| Point2::new(v.position().x, v.position().y));
            let centroid = Point2::from((a.coords + b.coords + c.coords) / 3.0);
            if !region.contains(&centroid) {
                dropped += 1;
                continue;
            }

            let mut tri = corners.map(|v| {
                *index_of.entry(v.fix().index()).or_insert_with(|| {
                    mesh.vertices.push(Point2::new(v.position().x, v.position().y));
                    u32::try_from(mesh.vertices.len() - 1).unwrap_or(u32::MAX)
                })
            });
            if cross(&(b - a), &(c - a)) < 0.0 {
                tri.swap(1, 2);
            }
            mesh.indices.push(tri);
        }

        trace!(dropped, "faces outside the fill region");
        debug!(
            triangles = mesh.indices.len(),
            vertices = mesh.vertices.len(),
            "tessellated floor"
        );
        Ok(mesh)
    }
}

/// Inserts the ring's points and constrains each of its edges.
fn constrain_ring(cdt: &mut Cdt, ring: &[Point2]) -> Result<()> {
    let handles = ring
        .iter()
        .map(|p| {
            cdt.insert(SpadePoint2::new(p.x, p.y))
                .map_err(|e| TessellationError::Failed(format!("CDT insert: {e}")).into())
        })
        .collect::<Result<Vec<_>>>()?;

    for (i, &from) in handles.iter().enumerate() {
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn square_produces_two_triangles() {
        let square = Polygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let mesh = TessellateFloor::new(&square).execute().unwrap();
        assert_eq!(mesh.indices.len(), 2);
        assert_eq!(mesh.vertices.len(), 4);
        assert_relative_eq!(mesh.area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn clockwise_l_shape() {
        let l_shape = Polygon::from_xy(&[
            [0.0, 0.0],
            [0.0, 2.0],
            [1.0, 2.0],
            [1.0, 1.0],
            [2.0, 1.0],
            [2.0, 0.0],
        ]);
        let mesh = TessellateFloor::new(&l_shape).execute().unwrap();
        assert_eq!(mesh.indices.len(), 4);
        assert_relative_eq!(mesh.area(), 3.0, epsilon = 1e-9);
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            assert!(cross(&(b - a), &(c - a)) > 0.0);
        }
    }

    #[test]
    fn stitched_hole_stays_empty() {
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
        let mesh = TessellateFloor::new(&room).execute().unwrap();
        assert_relative_eq!(mesh.area(), 8.0, epsilon = 1e-9);
    }

    #[test]
    fn overlapping_loops_fill_their_union() {
        let room = Polygon::from_xy(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 2.0],
            [0.0, 2.0],
            [0.0, 0.0],
            [1.0, 1.0],
            [3.0, 1.0],
            [3.0, 3.0],
            [1.0, 3.0],
            [1.0, 1.0],
        ]);
        let mesh = TessellateFloor::new(&room).execute().unwrap();
        let region = FillRegion::from_polygon(&room, GeometryParams::default());
        assert_relative_eq!(mesh.area(), 7.0, epsilon = 1e-9);
        assert_relative_eq!(mesh.area(), region.area(), epsilon = 1e-9);
    }

    #[test]
    fn flat_polygon_gives_empty_mesh() {
        let flat = Polygon::from_xy(&[[0.0, 0.0], [1.0, 0.0], [0.5, 0.0]]);
        assert!(TessellateFloor::new(&flat).execute().unwrap().is_empty());
    }
}
