use crate::math::polygon_2d::left_normal;
use crate::math::winding::is_filled;
use crate::math::{Point2, TOLERANCE};

use super::decompose::Arrangement;

/// Keeps the sub-edges that separate filled from empty space.
///
/// Each edge is sampled `offset` to either side of its midpoint under the
/// nonzero winding rule of `rings`. Returned edges are directed so the filled
/// side lies on their left.
pub fn boundary_edges<R: AsRef<[Point2]>>(
    arrangement: &Arrangement,
    rings: &[R],
    offset: f64,
) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    for &(a, b) in &arrangement.edges {
        let pa = arrangement.points[a];
        let pb = arrangement.points[b];
        let d = pb - pa;
        let len = d.norm();
        if len < TOLERANCE {
            continue;
        }
        let mid = nalgebra::center(&pa, &pb);
        let n = left_normal(d / len) * offset;
        match (is_filled(&(mid + n), rings), is_filled(&(mid - n), rings)) {
            (true, false) => result.push((a, b)),
            (false, true) => result.push((b, a)),
            _ => {}
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::region::decompose::decompose;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn clockwise_square_edges_are_flipped() {
        let ring = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        let arr = decompose(&[ring.clone()], 1e-4);
        let edges = boundary_edges(&arr, &[ring], 1e-3);
        assert_eq!(edges.len(), 4);
        for (a, b) in edges {
            let d = arr.points[b] - arr.points[a];
            let mid = nalgebra::center(&arr.points[a], &arr.points[b]);
            let inward = p(0.5, 0.5) - mid;
            assert!(d.x * inward.y - d.y * inward.x > 0.0);
        }
    }

    #[test]
    fn shared_interior_edge_is_dropped() {
        let a = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let b = vec![p(1.0, 0.0), p(2.0, 0.0), p(2.0, 1.0), p(1.0, 1.0)];
        let rings = [a, b];
        let arr = decompose(&rings, 1e-4);
        assert_eq!(boundary_edges(&arr, &rings, 1e-3).len(), 6);
    }
}
