pub mod edit;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod history;
pub mod room;
pub mod wall;

pub use edit::{Change, PlanEdit, Transaction};
pub use history::History;
pub use room::{Room, RoomId};
pub use wall::{Wall, WallId};

use crossbeam_channel::{Receiver, Sender};
use slotmap::SlotMap;

use crate::error::PlanError;

/// A change notification published by a [`Plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanEvent {
    WallAdded(WallId),
    WallRemoved(WallId),
    WallChanged(WallId),
    RoomAdded(RoomId),
    RoomRemoved(RoomId),
    RoomChanged(RoomId),
}

#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    attached: bool,
}

/// Central arena that owns the walls and rooms of a floor plan.
///
/// Removing an entity detaches it without freeing its key, so an undone
/// removal restores the entity under the same id and every join that
/// referenced it stays valid. Detached entities are invisible to lookups and
/// iteration. [`History`] frees them once no recorded edit can bring them
/// back.
#[derive(Debug, Default)]
pub struct Plan {
    walls: SlotMap<WallId, Slot<Wall>>,
    rooms: SlotMap<RoomId, Slot<Room>>,
    subscribers: Vec<Sender<PlanEvent>>,
}

impl Plan {
    /// Creates a new, empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a receiver for every event published after this call.
    pub fn subscribe(&mut self) -> Receiver<PlanEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn emit(&mut self, event: PlanEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, wall: Wall) -> WallId {
        let id = self.walls.insert(Slot {
            item: wall,
            attached: true,
        });
        self.emit(PlanEvent::WallAdded(id));
        id
    }

    /// Returns the wall, or an error if it is unknown or detached.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn wall(&self, id: WallId) -> Result<&Wall, PlanError> {
        self.walls
            .get(id)
            .filter(|slot| slot.attached)
            .map(|slot| &slot.item)
            .ok_or(PlanError::EntityNotFound("wall"))
    }

    /// Replaces a wall, returning its previous value.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn set_wall(&mut self, id: WallId, wall: Wall) -> Result<Wall, PlanError> {
        let slot = self
            .walls
            .get_mut(id)
            .filter(|slot| slot.attached)
            .ok_or(PlanError::EntityNotFound("wall"))?;
        let previous = std::mem::replace(&mut slot.item, wall);
        self.emit(PlanEvent::WallChanged(id));
        Ok(previous)
    }

    /// Detaches a wall and returns a copy of it.
    ///
    /// Joins of neighbouring walls are left untouched; use
    /// [`Transaction::remove_wall`] to unjoin them as part of an edit.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the wall is not in the plan.
    pub fn remove_wall(&mut self, id: WallId) -> Result<Wall, PlanError> {
        let slot = self
            .walls
            .get_mut(id)
            .filter(|slot| slot.attached)
            .ok_or(PlanError::EntityNotFound("wall"))?;
        slot.attached = false;
        let wall = slot.item.clone();
        self.emit(PlanEvent::WallRemoved(id));
        Ok(wall)
    }

    /// Re-attaches a detached wall under its original id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the key was never issued, or
    /// `PlanError::AlreadyAttached` if the wall is in the plan.
    pub fn restore_wall(&mut self, id: WallId) -> Result<(), PlanError> {
        let slot = self
            .walls
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("wall"))?;
        if slot.attached {
            return Err(PlanError::AlreadyAttached("wall"));
        }
        slot.attached = true;
        self.emit(PlanEvent::WallAdded(id));
        Ok(())
    }

    /// Frees the slot of a detached wall for good. Returns `false` if the wall
    /// is attached or unknown.
    pub(crate) fn purge_wall(&mut self, id: WallId) -> bool {
        if self.walls.get(id).is_some_and(|slot| !slot.attached) {
            self.walls.remove(id);
            return true;
        }
        false
    }

    /// Returns `true` if the wall is attached to the plan.
    #[must_use]
    pub fn contains_wall(&self, id: WallId) -> bool {
        self.walls.get(id).is_some_and(|slot| slot.attached)
    }

    /// Iterates over attached walls in slot order, which is insertion order
    /// until purged slots get reused.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &Wall)> + '_ {
        self.walls
            .iter()
            .filter(|(_, slot)| slot.attached)
            .map(|(id, slot)| (id, &slot.item))
    }

    /// Number of attached walls.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.values().filter(|slot| slot.attached).count()
    }

    /// Joins the end of `first` to the start of `second`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if either wall is not in the plan.
    pub fn join_walls(&mut self, first: WallId, second: WallId) -> Result<(), PlanError> {
        let mut a = self.wall(first)?.clone();
        let mut b = self.wall(second)?.clone();
        a.wall_at_end = Some(second);
        b.wall_at_start = Some(first);
        self.set_wall(first, a)?;
        self.set_wall(second, b)?;
        Ok(())
    }

    // --- Room operations ---

    /// Inserts a room and returns its ID.
    pub fn add_room(&mut self, room: Room) -> RoomId {
        let id = self.rooms.insert(Slot {
            item: room,
            attached: true,
        });
        self.emit(PlanEvent::RoomAdded(id));
        id
    }

    /// Returns the room, or an error if it is unknown or detached.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the room is not in the plan.
    pub fn room(&self, id: RoomId) -> Result<&Room, PlanError> {
        self.rooms
            .get(id)
            .filter(|slot| slot.attached)
            .map(|slot| &slot.item)
            .ok_or(PlanError::EntityNotFound("room"))
    }

    /// Replaces a room, returning its previous value.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the room is not in the plan.
    pub fn set_room(&mut self, id: RoomId, room: Room) -> Result<Room, PlanError> {
        let slot = self
            .rooms
            .get_mut(id)
            .filter(|slot| slot.attached)
            .ok_or(PlanError::EntityNotFound("room"))?;
        let previous = std::mem::replace(&mut slot.item, room);
        self.emit(PlanEvent::RoomChanged(id));
        Ok(previous)
    }

    /// Detaches a room and returns a copy of it.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the room is not in the plan.
    pub fn remove_room(&mut self, id: RoomId) -> Result<Room, PlanError> {
        let slot = self
            .rooms
            .get_mut(id)
            .filter(|slot| slot.attached)
            .ok_or(PlanError::EntityNotFound("room"))?;
        slot.attached = false;
        let room = slot.item.clone();
        self.emit(PlanEvent::RoomRemoved(id));
        Ok(room)
    }

    /// Re-attaches a detached room under its original id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if the key was never issued, or
    /// `PlanError::AlreadyAttached` if the room is in the plan.
    pub fn restore_room(&mut self, id: RoomId) -> Result<(), PlanError> {
        let slot = self
            .rooms
            .get_mut(id)
            .ok_or(PlanError::EntityNotFound("room"))?;
        if slot.attached {
            return Err(PlanError::AlreadyAttached("room"));
        }
        slot.attached = true;
        self.emit(PlanEvent::RoomAdded(id));
        Ok(())
    }

    /// Frees the slot of a detached room for good. Returns `false` if the room
    /// is attached or unknown.
    pub(crate) fn purge_room(&mut self, id: RoomId) -> bool {
        if self.rooms.get(id).is_some_and(|slot| !slot.attached) {
            self.rooms.remove(id);
            return true;
        }
        false
    }

    /// Iterates over attached rooms in slot order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> + '_ {
        self.rooms
            .iter()
            .filter(|(_, slot)| slot.attached)
            .map(|(id, slot)| (id, &slot.item))
    }

    /// Number of attached rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.values().filter(|slot| slot.attached).count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polygon;
    use crate::math::Point2;

    fn wall(x0: f64, y0: f64, x1: f64, y1: f64) -> Wall {
        Wall::new(Point2::new(x0, y0), Point2::new(x1, y1), 10.0).unwrap()
    }

    #[test]
    fn removed_wall_keeps_its_id() {
        let mut plan = Plan::new();
        let id = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        plan.remove_wall(id).unwrap();
        assert_eq!(plan.wall_count(), 0);
        assert!(plan.wall(id).is_err());
        plan.restore_wall(id).unwrap();
        assert_eq!(plan.wall_count(), 1);
        assert!((plan.wall(id).unwrap().length() - 100.0).abs() < 1e-12);
        assert!(matches!(
            plan.restore_wall(id),
            Err(PlanError::AlreadyAttached(_))
        ));
    }

    #[test]
    fn join_walls_links_both_ends() {
        let mut plan = Plan::new();
        let a = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let b = plan.add_wall(wall(100.0, 0.0, 100.0, 100.0));
        plan.join_walls(a, b).unwrap();
        assert_eq!(plan.wall(a).unwrap().wall_at_end, Some(b));
        assert_eq!(plan.wall(b).unwrap().wall_at_start, Some(a));
    }

    #[test]
    fn events_are_published_to_subscribers() {
        let mut plan = Plan::new();
        let rx = plan.subscribe();
        let w = plan.add_wall(wall(0.0, 0.0, 100.0, 0.0));
        let r = plan.add_room(Room::new(Polygon::from_xy(&[
            [0.0, 0.0],
            [1.0, 0.0],
            [1.0, 1.0],
        ])));
        plan.remove_room(r).unwrap();
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                PlanEvent::WallAdded(w),
                PlanEvent::RoomAdded(r),
                PlanEvent::RoomRemoved(r)
            ]
        );
    }

    #[test]
    fn dropped_receiver_is_pruned() {
        let mut plan = Plan::new();
        drop(plan.subscribe());
        plan.add_wall(wall(0.0, 0.0, 1.0, 0.0));
        assert!(plan.subscribers.is_empty());
    }
}
