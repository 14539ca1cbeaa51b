use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Step sizes used by [`AngleMagnetism`].
#[derive(Debug, Clone, Copy)]
pub struct MagnetismParams {
    /// Angle step in radians.
    pub angle_step: f64,
    /// Length step in plan units.
    pub length_step: f64,
}

impl Default for MagnetismParams {
    fn default() -> Self {
        Self {
            angle_step: PI / 12.0,
            length_step: 1.0,
        }
    }
}

impl MagnetismParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if a step is not a
    /// positive finite number.
    pub fn new(angle_step: f64, length_step: f64) -> Result<Self> {
        for (parameter, value) in [("angle_step", angle_step), ("length_step", length_step)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: f64::MIN_POSITIVE,
                    max: f64::MAX,
                }
                .into());
            }
        }
        Ok(Self {
            angle_step,
            length_step,
        })
    }
}

/// Snaps a point drawn from an anchor to round angles and lengths.
#[derive(Debug)]
pub struct AngleMagnetism {
    anchor: Point2,
    params: MagnetismParams,
}

impl AngleMagnetism {
    /// Creates an angle magnetism around `anchor` with default steps.
    #[must_use]
    pub fn new(anchor: Point2) -> Self {
        Self {
            anchor,
            params: MagnetismParams::default(),
        }
    }

    /// Sets the angle and length steps.
    #[must_use]
    pub fn with_params(mut self, params: MagnetismParams) -> Self {
        self.params = params;
        self
    }

    /// Returns `point` moved so the segment from the anchor has an angle that
    /// is a multiple of the angle step and a length that is a multiple of the
    /// length step. A point on the anchor is returned unchanged.
    #[must_use]
    pub fn execute(&self, point: Point2) -> Point2 {
        let v = point - self.anchor;
        let length = v.norm();
        if length < TOLERANCE {
            return point;
        }
        let step = self.params.angle_step;
        let angle = (v.y.atan2(v.x) / step).round() * step;
        let snapped_length = (length / self.params.length_step).round() * self.params.length_step;
        self.anchor + Vector2::new(angle.cos(), angle.sin()) * snapped_length
    }
}
