use tracing::debug;

use crate::geometry::Polygon;
use crate::math::polygon_2d::{remove_collinear, rotate_to_lowest_start, signed_area_2d};
use crate::math::winding::winding_number;
use crate::math::{GeometryParams, Point2};
use crate::operations::offset::outline_points;
use crate::operations::region::FillRegion;
use crate::plan::Plan;

/// Finds the room enclosed by walls around a point.
///
/// The wall footprints are merged into one fill region; the room is the
/// smallest hole of that region containing the point. The returned polygon
/// is counter-clockwise, has no collinear vertices and starts at its lowest
/// vertex (largest x on ties).
#[derive(Debug)]
pub struct DetectRoom {
    point: Point2,
    params: GeometryParams,
}

impl DetectRoom {
    /// Creates a new room detection from a point inside the room.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self {
            point,
            params: GeometryParams::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Returns `None` when the point lies in a wall or no walls enclose it.
    #[must_use]
    pub fn execute(&self, plan: &Plan) -> Option<Polygon> {
        let footprints: Vec<Vec<Point2>> = plan
            .walls()
            .filter_map(|(id, wall)| outline_points(id, wall, plan, &self.params))
            .collect();
        if footprints.is_empty() {
            debug!("no walls to detect a room from");
            return None;
        }

        let region = FillRegion::from_rings(&footprints, self.params);
        if region.contains(&self.point) {
            debug!(x = self.point.x, y = self.point.y, "point lies inside a wall");
            return None;
        }

        let Some(hole) = region
            .holes()
            .filter(|hole| winding_number(&self.point, hole) != 0)
            .min_by(|a, b| signed_area_2d(a).abs().total_cmp(&signed_area_2d(b).abs()))
        else {
            debug!(x = self.point.x, y = self.point.y, "point is not enclosed by walls");
            return None;
        };

        let counter_clockwise: Vec<Point2> = hole.iter().rev().copied().collect();
        let points = rotate_to_lowest_start(&remove_collinear(
            &counter_clockwise,
            self.params.epsilon,
        ));
        debug!(vertices = points.len(), "detected room");
        Some(Polygon::new(points))
    }
}
