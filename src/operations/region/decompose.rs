use crate::math::intersect_2d::segment_contacts;
use crate::math::polygon_2d::dedup_consecutive;
use crate::math::Point2;

/// Planar graph built from the edges of a set of rings.
///
/// Every edge is split wherever it meets another edge, so sub-edges only
/// touch at shared vertices.
#[derive(Debug, Default)]
pub struct Arrangement {
    pub points: Vec<Point2>,
    /// Undirected sub-edges as point index pairs.
    pub edges: Vec<(usize, usize)>,
}

/// Splits the edges of `rings` at every mutual contact.
///
/// Points closer than `eps` share one index. Ring vertices are registered
/// before any intersection point so they win the snapping.
pub fn decompose<R: AsRef<[Point2]>>(rings: &[R], eps: f64) -> Arrangement {
    let segments = collect_segments(rings, eps);
    let mut arrangement = Arrangement::default();
    if segments.is_empty() {
        return arrangement;
    }

    for (a, _) in &segments {
        ensure_point(&mut arrangement.points, *a, eps);
    }

    let mut seen = std::collections::HashSet::new();
    for (i, (a0, a1)) in segments.iter().enumerate() {
        let mut cuts = vec![0.0, 1.0];
        for (j, (b0, b1)) in segments.iter().enumerate() {
            if i != j {
                cuts.extend(
                    segment_contacts(a0, a1, b0, b1, eps)
                        .into_iter()
                        .map(|(t, _)| t),
                );
            }
        }
        cuts.sort_by(f64::total_cmp);

        let mut prev: Option<usize> = None;
        for t in cuts {
            let idx = ensure_point(&mut arrangement.points, a0 + (a1 - a0) * t, eps);
            if let Some(p) = prev.filter(|&p| p != idx) {
                let key = (p.min(idx), p.max(idx));
                if seen.insert(key) {
                    arrangement.edges.push(key);
                }
            }
            prev = Some(idx);
        }
    }

    arrangement
}

fn collect_segments<R: AsRef<[Point2]>>(rings: &[R], eps: f64) -> Vec<(Point2, Point2)> {
    let mut segments = Vec::new();
    for ring in rings {
        let pts = dedup_consecutive(ring.as_ref(), eps);
        let n = pts.len();
        if n < 2 {
            continue;
        }
        for i in 0..n {
            segments.push((pts[i], pts[(i + 1) % n]));
        }
    }
    segments
}

/// Finds or inserts a point, returning its index.
fn ensure_point(points: &mut Vec<Point2>, p: Point2, eps: f64) -> usize {
    let eps_sq = eps * eps;
    if let Some(i) = points.iter().position(|q| (q - p).norm_squared() < eps_sq) {
        return i;
    }
    points.push(p);
    points.len() - 1
}
