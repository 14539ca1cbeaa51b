mod tessellate_floor;

pub use tessellate_floor::TessellateFloor;

use crate::math::{cross, Point2};

/// A triangle mesh of a room floor.
#[derive(Debug, Clone, Default)]
pub struct FloorMesh {
    /// Vertex positions.
    pub vertices: Vec<Point2>,
    /// Triangle indices, counter-clockwise.
    pub indices: Vec<[u32; 3]>,
}

impl FloorMesh {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Sum of the triangle areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|tri| {
                let a = self.vertices[tri[0] as usize];
                let b = self.vertices[tri[1] as usize];
                let c = self.vertices[tri[2] as usize];
                cross(&(b - a), &(c - a)).abs() * 0.5
            })
            .sum()
    }
}
