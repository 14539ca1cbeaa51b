use super::{cross, Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let denom = cross(d1, d2);
    if denom.abs() < TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }
    let w = p2 - p1;
    let t = cross(&w, d2) / denom;
    let u = cross(&w, d1) / denom;
    Some((t, u))
}

/// Finds every contact between segments `a0→a1` and `b0→b1`.
///
/// Returns `(t, u)` parameter pairs in `[0, 1]` on each segment: one pair for a
/// crossing or touch, the two ends of the shared run for a collinear overlap,
/// nothing when the segments are apart by more than `eps`.
#[must_use]
pub fn segment_contacts(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Vec<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let la = da.norm();
    let lb = db.norm();

    if la < eps || lb < eps {
        return degenerate_contacts(a0, a1, b0, b1, eps);
    }

    let w = b0 - a0;
    let denom = cross(&da, &db);

    if denom.abs() < TOLERANCE * la * lb {
        // Parallel: only collinear runs can touch.
        if (cross(&da, &w) / la).abs() > eps {
            return Vec::new();
        }
        let la_sq = la * la;
        let tb0 = w.dot(&da) / la_sq;
        let tb1 = (b1 - a0).dot(&da) / la_sq;
        let lo = tb0.min(tb1).max(0.0);
        let hi = tb0.max(tb1).min(1.0);
        let slack = eps / la;
        if lo > hi + slack {
            return Vec::new();
        }
        let lb_sq = lb * lb;
        let mut contacts: Vec<(f64, f64)> = Vec::with_capacity(2);
        for t in [lo, hi] {
            let t = t.clamp(0.0, 1.0);
            if contacts.iter().any(|&(prev, _)| (prev - t).abs() * la < eps) {
                continue;
            }
            let pt = a0 + da * t;
            let u = ((pt - b0).dot(&db) / lb_sq).clamp(0.0, 1.0);
            contacts.push((t, u));
        }
        return contacts;
    }

    let t = cross(&w, &db) / denom;
    let u = cross(&w, &da) / denom;
    let slack_a = eps / la;
    let slack_b = eps / lb;
    if t >= -slack_a && t <= 1.0 + slack_a && u >= -slack_b && u <= 1.0 + slack_b {
        vec![(t.clamp(0.0, 1.0), u.clamp(0.0, 1.0))]
    } else {
        Vec::new()
    }
}

/// Contacts when at least one segment collapses to a point.
fn degenerate_contacts(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Vec<(f64, f64)> {
    let a_is_point = (a1 - a0).norm() < eps;
    let b_is_point = (b1 - b0).norm() < eps;
    match (a_is_point, b_is_point) {
        (true, true) => {
            if (b0 - a0).norm() < eps {
                vec![(0.0, 0.0)]
            } else {
                Vec::new()
            }
        }
        (true, false) => {
            let u = project_parameter(a0, b0, b1);
            let foot = b0 + (b1 - b0) * u;
            if (a0 - foot).norm() < eps {
                vec![(0.0, u)]
            } else {
                Vec::new()
            }
        }
        _ => {
            let t = project_parameter(b0, a0, a1);
            let foot = a0 + (a1 - a0) * t;
            if (b0 - foot).norm() < eps {
                vec![(t, 0.0)]
            } else {
                Vec::new()
            }
        }
    }
}

/// Projects `p` onto segment `a→b`, returning the clamped parameter in `[0, 1]`.
#[must_use]
pub fn project_parameter(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return 0.0;
    }
    ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    const EPS: f64 = 1e-6;

    #[test]
    fn line_line_perpendicular() {
        let (t, u) = line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(0.5, -1.0),
            &Vector2::new(0.0, 1.0),
        )
        .unwrap();
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn line_line_parallel_returns_none() {
        assert!(line_line_intersect_2d(
            &p(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &p(0.0, 1.0),
            &Vector2::new(2.0, 0.0),
        )
        .is_none());
    }

    #[test]
    fn crossing_segments() {
        let hits = segment_contacts(&p(0.0, 0.0), &p(2.0, 2.0), &p(0.0, 2.0), &p(2.0, 0.0), EPS);
        assert_eq!(hits.len(), 1);
        let (t, u) = hits[0];
        assert!((t - 0.5).abs() < TOLERANCE);
        assert!((u - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn separate_segments() {
        let hits = segment_contacts(&p(0.0, 0.0), &p(1.0, 0.0), &p(0.0, 1.0), &p(1.0, 1.0), EPS);
        assert!(hits.is_empty());
    }

    #[test]
    fn touching_at_endpoint() {
        let hits = segment_contacts(&p(0.0, 0.0), &p(1.0, 0.0), &p(1.0, 0.0), &p(1.0, 1.0), EPS);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].0 - 1.0).abs() < TOLERANCE);
        assert!(hits[0].1.abs() < TOLERANCE);
    }

    #[test]
    fn t_junction() {
        let hits = segment_contacts(&p(0.0, 0.0), &p(4.0, 0.0), &p(1.0, 0.0), &p(1.0, 3.0), EPS);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].0 - 0.25).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_overlap_reports_both_ends() {
        let hits = segment_contacts(&p(0.0, 1.0), &p(1.0, 1.0), &p(2.0, 1.0), &p(0.0, 1.0), EPS);
        assert_eq!(hits.len(), 2);
        assert!(hits[0].0.abs() < TOLERANCE);
        assert!((hits[0].1 - 1.0).abs() < TOLERANCE);
        assert!((hits[1].0 - 1.0).abs() < TOLERANCE);
        assert!((hits[1].1 - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn collinear_disjoint() {
        let hits = segment_contacts(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0), &p(3.0, 0.0), EPS);
        assert!(hits.is_empty());
    }

    #[test]
    fn point_segment_on_line() {
        let hits = segment_contacts(&p(1.0, 0.0), &p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0), EPS);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].1 - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn project_parameter_clamps() {
        assert!((project_parameter(&p(-1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0))).abs() < TOLERANCE);
        assert!((project_parameter(&p(1.0, 1.0), &p(0.0, 0.0), &p(2.0, 0.0)) - 0.5).abs() < TOLERANCE);
    }
}
