use super::intersect_2d::project_parameter;
use super::Point2;

/// Returns the point of segment `a→b` closest to `p`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let t = project_parameter(p, a, b);
    a + (b - a) * t
}

/// Returns the minimum distance from `p` to the segment `a→b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}

/// Returns the minimum distance from `p` to the closed ring through `points`.
#[must_use]
pub fn point_to_ring_dist(p: &Point2, points: &[Point2]) -> f64 {
    let n = points.len();
    match n {
        0 => f64::INFINITY,
        1 => (p - points[0]).norm(),
        _ => (0..n)
            .map(|i| point_to_segment_dist(p, &points[i], &points[(i + 1) % n]))
            .fold(f64::INFINITY, f64::min),
    }
}
