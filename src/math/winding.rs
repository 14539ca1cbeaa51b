use super::{cross, Point2};

/// Winding number of `ring` around `point`.
///
/// Counter-clockwise turns count positive. Points exactly on an edge get the
/// value of whichever side the half-open crossing rule assigns them.
#[must_use]
pub fn winding_number(point: &Point2, ring: &[Point2]) -> i32 {
    let n = ring.len();
    if n < 3 {
        return 0;
    }
    let mut wn = 0;
    for i in 0..n {
        let a = &ring[i];
        let b = &ring[(i + 1) % n];
        let side = cross(&(b - a), &(point - a));
        if a.y <= point.y {
            if b.y > point.y && side > 0.0 {
                wn += 1;
            }
        } else if b.y <= point.y && side < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Sum of the winding numbers of every ring around `point`.
#[must_use]
pub fn winding_number_rings<R: AsRef<[Point2]>>(point: &Point2, rings: &[R]) -> i32 {
    rings
        .iter()
        .map(|ring| winding_number(point, ring.as_ref()))
        .sum()
}

/// Returns `true` if `point` is filled under the nonzero winding rule.
#[must_use]
pub fn is_filled<R: AsRef<[Point2]>>(point: &Point2, rings: &[R]) -> bool {
    winding_number_rings(point, rings) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn ccw_square_winds_once() {
        let square = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert_eq!(winding_number(&p(0.5, 0.5), &square), 1);
        assert_eq!(winding_number(&p(1.5, 0.5), &square), 0);
    }

    #[test]
    fn cw_square_winds_negative() {
        let square = [p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert_eq!(winding_number(&p(0.5, 0.5), &square), -1);
    }

    #[test]
    fn stitched_hole_is_empty() {
        let ring = [
            p(0.0, 0.0),
            p(3.0, 0.0),
            p(3.0, 3.0),
            p(0.0, 3.0),
            p(0.0, 1.0),
            p(1.0, 1.0),
            p(1.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 1.0),
            p(0.0, 1.0),
        ];
        assert_eq!(winding_number(&p(1.5, 1.5), &ring), 0);
        assert_eq!(winding_number(&p(0.5, 2.5), &ring), 1);
    }

    #[test]
    fn rings_sum_up() {
        let a = vec![p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)];
        let b = vec![p(1.0, 1.0), p(3.0, 1.0), p(3.0, 3.0), p(1.0, 3.0)];
        let rings = [a, b];
        assert_eq!(winding_number_rings(&p(1.5, 1.5), &rings), 2);
        assert!(is_filled(&p(2.5, 2.5), &rings));
        assert!(!is_filled(&p(2.5, 0.5), &rings));
    }
}
