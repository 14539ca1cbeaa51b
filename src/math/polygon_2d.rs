use super::{cross, Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a closed point sequence (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. Stitched loops
/// contribute their own signed share.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if the sequence winds clockwise.
#[must_use]
pub fn is_clockwise(points: &[Point2]) -> bool {
    signed_area_2d(points) < 0.0
}

/// Rotates a closed polygon so it starts at the lowest vertex (smallest y),
/// breaking ties by largest x.
#[must_use]
pub fn rotate_to_lowest_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.y < b.y - TOLERANCE || ((pt.y - b.y).abs() <= TOLERANCE && pt.x > b.x) {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Drops consecutive points closer than `epsilon`, including a closing point
/// equal to the first one.
#[must_use]
pub fn dedup_consecutive(points: &[Point2], epsilon: f64) -> Vec<Point2> {
    let mut result: Vec<Point2> = Vec::with_capacity(points.len());
    for &p in points {
        if result
            .last()
            .is_none_or(|last| (p - *last).norm() >= epsilon)
        {
            result.push(p);
        }
    }
    while result.len() > 1 && (result[result.len() - 1] - result[0]).norm() < epsilon {
        result.pop();
    }
    result
}

/// Removes vertices lying on the straight line through their neighbours.
///
/// Runs until stable; a loop that collapses below 3 points is returned empty.
#[must_use]
pub fn remove_collinear(points: &[Point2], epsilon: f64) -> Vec<Point2> {
    let mut pts = dedup_consecutive(points, epsilon);
    loop {
        let n = pts.len();
        if n < 3 {
            return Vec::new();
        }
        let removable = (0..n).find(|&i| {
            let prev = pts[(i + n - 1) % n];
            let next = pts[(i + 1) % n];
            let chord = next - prev;
            let len = chord.norm();
            if len < epsilon {
                return true;
            }
            (cross(&chord, &(pts[i] - prev)) / len).abs() < epsilon
        });
        match removable {
            Some(i) => {
                pts.remove(i);
            }
            None => return pts,
        }
    }
}

/// Returns the center of the axis-aligned bounds of the points.
#[must_use]
pub fn bounds_center(points: &[Point2]) -> Option<Point2> {
    let first = points.first()?;
    let (mut min, mut max) = (*first, *first);
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some(Point2::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5))
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length segment between ({}, {}) and ({}, {})",
            a.x, a.y, b.x, b.y
        ))
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area_2d(&pts) - 1.0).abs() < TOLERANCE);
        assert!(!is_clockwise(&pts));
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area_2d(&pts) + 1.0).abs() < TOLERANCE);
        assert!(is_clockwise(&pts));
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area_2d(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn lowest_start_prefers_rightmost_tie() {
        let pts = vec![p(10.0, 395.0), p(10.0, 10.0), p(495.0, 10.0), p(495.0, 395.0)];
        let rotated = rotate_to_lowest_start(&pts);
        assert_eq!(rotated[0], p(495.0, 10.0));
        assert_eq!(rotated[1], p(495.0, 395.0));
    }

    #[test]
    fn dedup_drops_repeats_and_closing_point() {
        let pts = vec![p(0.0, 0.0), p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)];
        let cleaned = dedup_consecutive(&pts, 1e-9);
        assert_eq!(cleaned.len(), 3);
    }

    #[test]
    fn collinear_midpoints_removed() {
        let pts = vec![
            p(0.0, 0.0),
            p(5.0, 0.0),
            p(10.0, 0.0),
            p(10.0, 10.0),
            p(0.0, 10.0),
            p(0.0, 5.0),
        ];
        let cleaned = remove_collinear(&pts, 1e-9);
        assert_eq!(cleaned.len(), 4);
    }

    #[test]
    fn flat_polygon_collapses() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.5, 0.0)];
        assert!(remove_collinear(&pts, 1e-9).is_empty());
    }

    #[test]
    fn bounds_center_basic() {
        let c = bounds_center(&[p(0.0, 0.0), p(4.0, 1.0), p(2.0, 6.0)]).unwrap();
        assert!((c.x - 2.0).abs() < TOLERANCE);
        assert!((c.y - 3.0).abs() < TOLERANCE);
        assert!(bounds_center(&[]).is_none());
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&p(0.0, 0.0), &p(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        assert!(segment_direction(&p(1.0, 1.0), &p(1.0, 1.0)).is_err());
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert!(n.x.abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
