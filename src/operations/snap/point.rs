use crate::math::Point2;

/// Snaps a point onto the closest of a set of candidate points.
#[derive(Debug)]
pub struct PointMagnetism<'a> {
    candidates: &'a [Point2],
    margin: f64,
}

impl<'a> PointMagnetism<'a> {
    /// Creates a point magnetism over `candidates` with a capture radius of `margin`.
    #[must_use]
    pub fn new(candidates: &'a [Point2], margin: f64) -> Self {
        Self { candidates, margin }
    }

    /// Returns the closest candidate within the margin, or `point` itself.
    #[must_use]
    pub fn execute(&self, point: Point2) -> Point2 {
        self.candidates
            .iter()
            .map(|c| (c, (c - point).norm()))
            .filter(|&(_, d)| d <= self.margin)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map_or(point, |(c, _)| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_closest_within_margin() {
        let candidates = [Point2::new(0.0, 0.0), Point2::new(10.0, 0.0), Point2::new(10.5, 0.5)];
        let snap = PointMagnetism::new(&candidates, 2.0);
        assert_eq!(snap.execute(Point2::new(10.4, 0.6)), candidates[2]);
        assert_eq!(snap.execute(Point2::new(1.0, 1.0)), candidates[0]);
        let far = Point2::new(5.0, 5.0);
        assert_eq!(snap.execute(far), far);
    }
}
