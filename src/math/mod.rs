pub mod distance_2d;
pub mod intersect_2d;
pub mod polygon_2d;
pub mod winding;

/// 2D point type, in plan units (centimeters).
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Distance under which two plan points are the same point.
pub const COINCIDENCE_EPSILON: f64 = 1e-4;

/// Tolerances shared by the region, detection and split operations.
#[derive(Debug, Clone, Copy)]
pub struct GeometryParams {
    /// Distance under which two points are merged or a point lies on an edge.
    pub epsilon: f64,
    /// Distance at which each side of a boundary edge is sampled.
    pub sample_offset: f64,
    /// Longest allowed miter, as a multiple of half the wall thickness.
    pub miter_limit: f64,
}

impl Default for GeometryParams {
    fn default() -> Self {
        Self {
            epsilon: COINCIDENCE_EPSILON,
            sample_offset: 1e-3,
            miter_limit: 10.0,
        }
    }
}

impl GeometryParams {
    /// Sets the coincidence epsilon.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the miter limit.
    #[must_use]
    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        self.miter_limit = miter_limit;
        self
    }
}

/// 2D cross product of `a` and `b`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}
