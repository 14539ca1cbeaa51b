use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

slotmap::new_key_type! {
    /// Unique identifier for a wall in the plan.
    pub struct WallId;
}

/// A straight wall described by its centerline and thickness.
///
/// Joins are directional: `wall_at_end` of one wall is usually the wall whose
/// `wall_at_start` points back to it. Only reciprocal joins produce mitered
/// corners.
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    pub start: Point2,
    pub end: Point2,
    pub thickness: f64,
    pub height: Option<f64>,
    pub wall_at_start: Option<WallId>,
    pub wall_at_end: Option<WallId>,
}

impl Wall {
    /// Creates an unjoined wall.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `thickness` is negative
    /// or not finite.
    pub fn new(start: Point2, end: Point2, thickness: f64) -> Result<Self> {
        if !thickness.is_finite() || thickness < 0.0 {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "thickness",
                value: thickness,
                min: 0.0,
                max: f64::MAX,
            }
            .into());
        }
        Ok(Self {
            start,
            end,
            thickness,
            height: None,
            wall_at_start: None,
            wall_at_end: None,
        })
    }

    /// Sets the wall height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Centerline length.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    /// Centerline vector from start to end.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns `true` if the wall is joined to `other` at either end.
    #[must_use]
    pub fn is_joined_to(&self, other: WallId) -> bool {
        self.wall_at_start == Some(other) || self.wall_at_end == Some(other)
    }
}
