use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::GeometryParams;
use crate::operations::modification::SplitWallsAroundRoom;
use crate::plan::{Plan, PlanEdit, Room, RoomId, Transaction};

/// Adds a room to a plan, optionally splitting the walls around it.
///
/// The room and every wall split form one [`PlanEdit`], so a single undo
/// reverts the whole operation.
#[derive(Debug)]
pub struct CreateRoom {
    polygon: Polygon,
    name: Option<String>,
    split_walls: bool,
    params: GeometryParams,
}

impl CreateRoom {
    /// Creates a room operation for `polygon`, without splitting walls.
    #[must_use]
    pub fn new(polygon: Polygon) -> Self {
        Self {
            polygon,
            name: None,
            split_walls: false,
            params: GeometryParams::default(),
        }
    }

    /// Names the room.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Splits walls crossing the room boundary so each side gets its own wall.
    #[must_use]
    pub fn split_surrounding_walls(mut self, split: bool) -> Self {
        self.split_walls = split;
        self
    }

    /// Sets custom tolerances for the wall split.
    #[must_use]
    pub fn with_params(mut self, params: GeometryParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the new room and the recorded edit.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polygon has fewer than
    /// 3 points. Errors while splitting walls roll the plan back first.
    pub fn execute(&self, plan: &mut Plan) -> Result<(RoomId, PlanEdit)> {
        if self.polygon.len() < 3 {
            return Err(OperationError::InvalidInput(
                "a room needs at least 3 points".to_owned(),
            )
            .into());
        }

        let splits = if self.split_walls {
            SplitWallsAroundRoom::new(&self.polygon)
                .with_params(self.params)
                .execute(plan)
        } else {
            Vec::new()
        };

        let mut tx = Transaction::new(plan, "create room");
        for split in &splits {
            if let Err(err) = tx.split_wall(split) {
                tx.rollback()?;
                return Err(err);
            }
        }

        let mut room = Room::new(self.polygon.clone());
        room.name.clone_from(&self.name);
        let id = tx.add_room(room);
        debug!(split_walls = splits.len(), "created room");
        Ok((id, tx.commit()))
    }
}
