use tracing::{debug, trace};

use crate::geometry::Polygon;
use crate::math::distance_2d::{point_to_ring_dist, point_to_segment_dist};
use crate::math::intersect_2d::project_parameter;
use crate::math::winding::winding_number;
use crate::math::{GeometryParams, Point2};
use crate::operations::offset::outline_points;
use crate::plan::{Plan, Wall, WallId};

/// One piece of a split wall centerline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallSegment {
    pub start: Point2,
    pub end: Point2,
}

impl WallSegment {
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// A wall to be replaced by consecutive pieces.
#[derive(Debug, Clone, PartialEq)]
pub struct WallSplit {
    pub wall: WallId,
    /// The wall as it was when the split was computed.
    pub original: Wall,
    /// At least two pieces, ordered from the wall start to its end.
    pub pieces: Vec<WallSegment>,
}

/// Finds the walls that must be split so each side of a room boundary gets
/// its own wall.
///
/// A room vertex lying on a wall side splits that wall at the vertex's
/// projection on the centerline, unless the projection is a wall end, the
/// vertex is a footprint corner, or the cut-off run towards the nearer wall
/// end is covered by another wall.
#[derive(Debug)]
pub struct SplitWallsAroundRoom<'a> {
    room: &'a Polygon,
    params: GeometryParams,
}

struct Footprint {
    id: WallId,
    points: Vec<Point2>,
}

impl<'a> SplitWallsAroundRoom<'a> {
    /// Creates a new split query for the boundary of `room`.
    #[must_use]
    pub fn new(room: &'a Polygon) -> Self {
        Self {
            room,
            params: GeometryParams::default(),
        }
    }

    /// Sets the tolerance used to match room vertices to wall sides.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Returns `true` if at least one wall needs splitting.
    #[must_use]
    pub fn is_needed(&self, plan: &Plan) -> bool {
        !self.execute(plan).is_empty()
    }

    /// Computes the splits, in plan wall order.
    #[must_use]
    pub fn execute(&self, plan: &Plan) -> Vec<WallSplit> {
        let footprints: Vec<Footprint> = plan
            .walls()
            .filter_map(|(id, wall)| {
                outline_points(id, wall, plan, &self.params).map(|points| Footprint { id, points })
            })
            .collect();

        let mut splits = Vec::new();
        for footprint in &footprints {
            let Ok(wall) = plan.wall(footprint.id) else {
                continue;
            };
            let cuts = self.split_parameters(wall, footprint, &footprints);
            if cuts.is_empty() {
                continue;
            }
            let pieces = pieces_at(wall, &cuts);
            trace!(pieces = pieces.len(), "wall crosses room boundary");
            splits.push(WallSplit {
                wall: footprint.id,
                original: wall.clone(),
                pieces,
            });
        }
        debug!(walls = splits.len(), "computed wall splits around room");
        splits
    }

    /// Sorted, distinct centerline parameters where `wall` must be cut.
    fn split_parameters(&self, wall: &Wall, own: &Footprint, all: &[Footprint]) -> Vec<f64> {
        let eps = self.params.epsilon;
        let f = &own.points;
        let sides = [(f[0], f[1]), (f[3], f[2])];
        let length = wall.length();

        let mut cuts: Vec<f64> = Vec::new();
        for vertex in &self.room.points {
            if !sides
                .iter()
                .any(|(a, b)| point_to_segment_dist(vertex, a, b) <= eps)
            {
                continue;
            }
            if f.iter().any(|corner| (corner - vertex).norm() <= eps) {
                continue;
            }
            let t = project_parameter(vertex, &wall.start, &wall.end);
            let projection = wall.start + wall.direction() * t;
            if (projection - wall.start).norm() <= eps || (projection - wall.end).norm() <= eps {
                continue;
            }
            let nearer_end = if t < 0.5 { wall.start } else { wall.end };
            let run_middle = nalgebra::center(&projection, &nearer_end);
            if all
                .iter()
                .filter(|other| other.id != own.id)
                .any(|other| covers(&other.points, &run_middle, eps))
            {
                continue;
            }
            cuts.push(t);
        }

        cuts.sort_by(f64::total_cmp);
        cuts.dedup_by(|a, b| (*a - *b).abs() * length <= eps);
        cuts
    }
}

fn covers(footprint: &[Point2], point: &Point2, eps: f64) -> bool {
    winding_number(point, footprint) != 0 || point_to_ring_dist(point, footprint) <= eps
}

fn pieces_at(wall: &Wall, cuts: &[f64]) -> Vec<WallSegment> {
    let d = wall.direction();
    let mut points = Vec::with_capacity(cuts.len() + 2);
    points.push(wall.start);
    points.extend(cuts.iter().map(|&t| wall.start + d * t));
    points.push(wall.end);
    points
        .windows(2)
        .map(|w| WallSegment {
            start: w[0],
            end: w[1],
        })
        .collect()
}
