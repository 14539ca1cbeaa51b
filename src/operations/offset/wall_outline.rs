use crate::error::Result;
use crate::math::intersect_2d::line_line_intersect_2d;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{GeometryParams, Point2, Vector2};
use crate::plan::{Plan, Wall, WallId};

/// Computes the footprint of a wall on the plan.
///
/// The footprint has four points `[right_start, right_end, left_end,
/// left_start]`, counter-clockwise, with the sides offset by half the wall
/// thickness. A side meeting a reciprocally joined neighbour is extended or
/// cut to the neighbour's matching side line.
#[derive(Debug)]
pub struct WallOutline {
    wall: WallId,
    params: GeometryParams,
}

impl WallOutline {
    /// Creates a new outline query for `wall`.
    #[must_use]
    pub fn new(wall: WallId) -> Self {
        Self {
            wall,
            params: GeometryParams::default(),
        }
    }

    /// Sets custom tolerances.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the outline computation.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan, or
    /// `GeometryError::Degenerate` if the wall has zero length.
    pub fn execute(&self, plan: &Plan) -> Result<Vec<Point2>> {
        let wall = plan.wall(self.wall)?;
        let sides = SideLines::new(wall)?;
        Ok(mitered(self.wall, wall, &sides, plan, &self.params))
    }
}

/// Footprint of an attached wall, `None` for zero-length walls.
pub(crate) fn outline_points(
    id: WallId,
    wall: &Wall,
    plan: &Plan,
    params: &GeometryParams,
) -> Option<Vec<Point2>> {
    let sides = SideLines::new(wall).ok()?;
    Some(mitered(id, wall, &sides, plan, params))
}

/// The two side lines of a wall with their square end points.
struct SideLines {
    dir: Vector2,
    half: f64,
    right_start: Point2,
    right_end: Point2,
    left_start: Point2,
    left_end: Point2,
}

impl SideLines {
    fn new(wall: &Wall) -> Result<Self> {
        let dir = segment_direction(&wall.start, &wall.end)?;
        let half = wall.thickness * 0.5;
        let left = left_normal(dir) * half;
        Ok(Self {
            dir,
            half,
            right_start: wall.start - left,
            right_end: wall.end - left,
            left_start: wall.start + left,
            left_end: wall.end + left,
        })
    }

    fn origin(&self, side: Side) -> Point2 {
        match side {
            Side::Left => self.left_start,
            Side::Right => self.right_start,
        }
    }
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

fn mitered(
    id: WallId,
    wall: &Wall,
    sides: &SideLines,
    plan: &Plan,
    params: &GeometryParams,
) -> Vec<Point2> {
    let mut right_start = sides.right_start;
    let mut right_end = sides.right_end;
    let mut left_end = sides.left_end;
    let mut left_start = sides.left_start;
    let limit = params.miter_limit * sides.half;

    if let Some((neighbour, same_side)) =
        joined_neighbour(plan, wall.wall_at_start, id, JoinEnd::Start)
    {
        let flip = |side: Side| if same_side { side } else { side.opposite() };
        right_start = miter(sides, Side::Right, &neighbour, flip(Side::Right), right_start, limit);
        left_start = miter(sides, Side::Left, &neighbour, flip(Side::Left), left_start, limit);
    }
    if let Some((neighbour, same_side)) =
        joined_neighbour(plan, wall.wall_at_end, id, JoinEnd::End)
    {
        let flip = |side: Side| if same_side { side } else { side.opposite() };
        right_end = miter(sides, Side::Right, &neighbour, flip(Side::Right), right_end, limit);
        left_end = miter(sides, Side::Left, &neighbour, flip(Side::Left), left_end, limit);
    }

    vec![right_start, right_end, left_end, left_start]
}

#[derive(Clone, Copy)]
enum JoinEnd {
    Start,
    End,
}

/// Side lines of the neighbour joined at one end, and whether its sides
/// continue ours (`true`) or are swapped because it runs the other way.
fn joined_neighbour(
    plan: &Plan,
    neighbour: Option<WallId>,
    id: WallId,
    end: JoinEnd,
) -> Option<(SideLines, bool)> {
    let other = plan.wall(neighbour?).ok()?;
    let (continues, reverses) = match end {
        JoinEnd::Start => (other.wall_at_end, other.wall_at_start),
        JoinEnd::End => (other.wall_at_start, other.wall_at_end),
    };
    let same_side = if continues == Some(id) {
        true
    } else if reverses == Some(id) {
        false
    } else {
        return None;
    };
    Some((SideLines::new(other).ok()?, same_side))
}

/// Intersects one of our side lines with a side line of the neighbour.
///
/// Keeps `current` when the lines are parallel or the miter is too long.
fn miter(
    ours: &SideLines,
    our_side: Side,
    theirs: &SideLines,
    their_side: Side,
    current: Point2,
    limit: f64,
) -> Point2 {
    let origin = ours.origin(our_side);
    let Some((t, _)) =
        line_line_intersect_2d(&origin, &ours.dir, &theirs.origin(their_side), &theirs.dir)
    else {
        return current;
    };
    let joint = origin + ours.dir * t;
    if (joint - current).norm() > limit {
        current
    } else {
        joint
    }
}
