use tracing::{debug, warn};

use super::{Plan, Room, RoomId, Wall, WallId};
use crate::error::{OperationError, PlanError, Result};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;
use crate::operations::modification::{WallSegment, WallSplit};

/// One reversible change recorded by a [`Transaction`].
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    WallAdded(WallId),
    WallRemoved(WallId),
    WallUpdated { id: WallId, before: Wall, after: Wall },
    RoomAdded(RoomId),
    RoomRemoved(RoomId),
    RoomUpdated { id: RoomId, before: Room, after: Room },
}

impl Change {
    fn redo(&self, plan: &mut Plan) -> std::result::Result<(), PlanError> {
        match self {
            Self::WallAdded(id) => plan.restore_wall(*id),
            Self::WallRemoved(id) => plan.remove_wall(*id).map(drop),
            Self::WallUpdated { id, after, .. } => plan.set_wall(*id, after.clone()).map(drop),
            Self::RoomAdded(id) => plan.restore_room(*id),
            Self::RoomRemoved(id) => plan.remove_room(*id).map(drop),
            Self::RoomUpdated { id, after, .. } => plan.set_room(*id, after.clone()).map(drop),
        }
    }

    fn wall_id(&self) -> Option<WallId> {
        match self {
            Self::WallAdded(id) | Self::WallRemoved(id) | Self::WallUpdated { id, .. } => Some(*id),
            _ => None,
        }
    }

    fn room_id(&self) -> Option<RoomId> {
        match self {
            Self::RoomAdded(id) | Self::RoomRemoved(id) | Self::RoomUpdated { id, .. } => Some(*id),
            _ => None,
        }
    }

    fn undo(&self, plan: &mut Plan) -> std::result::Result<(), PlanError> {
        match self {
            Self::WallAdded(id) => plan.remove_wall(*id).map(drop),
            Self::WallRemoved(id) => plan.restore_wall(*id),
            Self::WallUpdated { id, before, .. } => plan.set_wall(*id, before.clone()).map(drop),
            Self::RoomAdded(id) => plan.remove_room(*id).map(drop),
            Self::RoomRemoved(id) => plan.restore_room(*id),
            Self::RoomUpdated { id, before, .. } => plan.set_room(*id, before.clone()).map(drop),
        }
    }
}

/// A committed group of changes that undoes and redoes as one step.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEdit {
    label: String,
    changes: Vec<Change>,
}

impl PlanEdit {
    /// Human-readable name of the edit.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The recorded changes, in application order.
    #[must_use]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Returns `true` if the edit changed nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Reverts the edit.
    ///
    /// Either every change is reverted or none is: on failure the changes
    /// already reverted are re-applied before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` if the plan no longer matches the state the edit
    /// left it in.
    pub fn undo(&self, plan: &mut Plan) -> Result<()> {
        for (i, change) in self.changes.iter().enumerate().rev() {
            if let Err(err) = change.undo(plan) {
                for reverted in &self.changes[i + 1..] {
                    if let Err(restore) = reverted.redo(plan) {
                        warn!(
                            label = %self.label,
                            error = %restore,
                            "could not restore partially undone edit"
                        );
                    }
                }
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Re-applies the edit after an undo.
    ///
    /// Like [`PlanEdit::undo`], a failure leaves the plan as it was.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` if the plan no longer matches the state the edit
    /// was undone to.
    pub fn redo(&self, plan: &mut Plan) -> Result<()> {
        for (i, change) in self.changes.iter().enumerate() {
            if let Err(err) = change.redo(plan) {
                for applied in self.changes[..i].iter().rev() {
                    if let Err(restore) = applied.undo(plan) {
                        warn!(
                            label = %self.label,
                            error = %restore,
                            "could not restore partially redone edit"
                        );
                    }
                }
                return Err(err.into());
            }
        }
        Ok(())
    }

    /// Walls this edit refers to.
    pub(crate) fn wall_ids(&self) -> impl Iterator<Item = WallId> + '_ {
        self.changes.iter().filter_map(Change::wall_id)
    }

    /// Rooms this edit refers to.
    pub(crate) fn room_ids(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.changes.iter().filter_map(Change::room_id)
    }
}

/// Applies changes to a plan while recording them for undo.
///
/// Changes take effect immediately; `commit` packages them into a
/// [`PlanEdit`], `rollback` reverts them.
#[derive(Debug)]
pub struct Transaction<'a> {
    plan: &'a mut Plan,
    label: String,
    changes: Vec<Change>,
}

impl<'a> Transaction<'a> {
    /// Starts a transaction on `plan`.
    pub fn new(plan: &'a mut Plan, label: impl Into<String>) -> Self {
        Self {
            plan,
            label: label.into(),
            changes: Vec::new(),
        }
    }

    /// Read access to the plan in its current, partially edited state.
    #[must_use]
    pub fn plan(&self) -> &Plan {
        self.plan
    }

    /// Adds a wall.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        let id = self.plan.add_wall(wall);
        self.changes.push(Change::WallAdded(id));
        id
    }

    /// Removes a wall and clears the joins of walls that referenced it.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn remove_wall(&mut self, id: WallId) -> Result<Wall> {
        self.plan.wall(id)?;
        let neighbours: Vec<WallId> = self
            .plan
            .walls()
            .filter(|&(other, w)| other != id && w.is_joined_to(id))
            .map(|(other, _)| other)
            .collect();
        for other in neighbours {
            self.update_wall(other, |w| {
                if w.wall_at_start == Some(id) {
                    w.wall_at_start = None;
                }
                if w.wall_at_end == Some(id) {
                    w.wall_at_end = None;
                }
            })?;
        }
        self.detach_wall(id)
    }

    fn detach_wall(&mut self, id: WallId) -> Result<Wall> {
        let wall = self.plan.remove_wall(id)?;
        self.changes.push(Change::WallRemoved(id));
        Ok(wall)
    }

    /// Modifies a wall in place.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn update_wall(&mut self, id: WallId, modify: impl FnOnce(&mut Wall)) -> Result<()> {
        let before = self.plan.wall(id)?.clone();
        let mut after = before.clone();
        modify(&mut after);
        if after == before {
            return Ok(());
        }
        self.plan.set_wall(id, after.clone())?;
        self.changes.push(Change::WallUpdated { id, before, after });
        Ok(())
    }

    /// Adds a room.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = self.plan.add_room(room);
        self.changes.push(Change::RoomAdded(id));
        id
    }

    /// Removes a room.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the room is not in the plan.
    pub fn remove_room(&mut self, id: RoomId) -> Result<Room> {
        let room = self.plan.remove_room(id)?;
        self.changes.push(Change::RoomRemoved(id));
        Ok(room)
    }

    /// Modifies a room in place.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the room is not in the plan.
    pub fn update_room(&mut self, id: RoomId, modify: impl FnOnce(&mut Room)) -> Result<()> {
        let before = self.plan.room(id)?.clone();
        let mut after = before.clone();
        modify(&mut after);
        if after == before {
            return Ok(());
        }
        self.plan.set_room(id, after.clone())?;
        self.changes.push(Change::RoomUpdated { id, before, after });
        Ok(())
    }

    /// Replaces a wall by the pieces of `split`, chained end to start.
    ///
    /// The first piece inherits the original start join and the last piece the
    /// original end join. Every wall joined to the original, reciprocally or
    /// not, is redirected to the piece nearest its joined end. Returns the
    /// piece ids in order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` for fewer than two pieces, or
    /// `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn split_wall(&mut self, split: &WallSplit) -> Result<Vec<WallId>> {
        let original = self.plan.wall(split.wall)?.clone();
        let n = split.pieces.len();
        if n < 2 {
            return Err(
                OperationError::InvalidInput("a wall split needs at least two pieces".into())
                    .into(),
            );
        }

        let ids: Vec<WallId> = split
            .pieces
            .iter()
            .map(|segment| {
                let mut piece = original.clone();
                piece.start = segment.start;
                piece.end = segment.end;
                piece.wall_at_start = None;
                piece.wall_at_end = None;
                self.add_wall(piece)
            })
            .collect();

        for k in 0..n {
            let at_start = if k == 0 {
                original.wall_at_start
            } else {
                Some(ids[k - 1])
            };
            let at_end = if k == n - 1 {
                original.wall_at_end
            } else {
                Some(ids[k + 1])
            };
            self.update_wall(ids[k], |w| {
                w.wall_at_start = at_start;
                w.wall_at_end = at_end;
            })?;
        }

        let old = split.wall;
        let neighbours: Vec<(WallId, Wall)> = self
            .plan
            .walls()
            .filter(|&(other, w)| other != old && w.is_joined_to(old))
            .map(|(other, w)| (other, w.clone()))
            .collect();
        for (other, wall) in neighbours {
            let at_start = (wall.wall_at_start == Some(old))
                .then(|| piece_touching(&split.pieces, &ids, &wall.start));
            let at_end = (wall.wall_at_end == Some(old))
                .then(|| piece_touching(&split.pieces, &ids, &wall.end));
            self.update_wall(other, |w| {
                if let Some(piece) = at_start {
                    w.wall_at_start = Some(piece);
                }
                if let Some(piece) = at_end {
                    w.wall_at_end = Some(piece);
                }
            })?;
        }

        self.detach_wall(split.wall)?;
        debug!(pieces = n, "split wall");
        Ok(ids)
    }

    /// Finishes the transaction, returning the recorded edit.
    #[must_use]
    pub fn commit(self) -> PlanEdit {
        debug!(label = %self.label, changes = self.changes.len(), "commit plan edit");
        PlanEdit {
            label: self.label,
            changes: self.changes,
        }
    }

    /// Reverts every change made so far and frees the entities it added.
    ///
    /// # Errors
    ///
    /// Returns `PlanError` if the plan was modified outside the transaction.
    pub fn rollback(self) -> Result<()> {
        for change in self.changes.iter().rev() {
            change.undo(self.plan)?;
        }
        for change in &self.changes {
            match *change {
                Change::WallAdded(id) => {
                    self.plan.purge_wall(id);
                }
                Change::RoomAdded(id) => {
                    self.plan.purge_room(id);
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// The piece whose centerline passes closest to `point`; the first wins ties.
fn piece_touching(pieces: &[WallSegment], ids: &[WallId], point: &Point2) -> WallId {
    pieces
        .iter()
        .zip(ids)
        .map(|(segment, &id)| (point_to_segment_dist(point, &segment.start, &segment.end), id))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map_or(ids[0], |(_, id)| id)
}
