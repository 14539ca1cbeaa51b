use std::collections::HashSet;

use tracing::{debug, trace};

use super::{Plan, PlanEdit};
use crate::error::Result;

/// Undo and redo stacks of committed plan edits.
///
/// Edits that leave the history, by falling off a bounded undo stack or by
/// being discarded from the redo stack, free the detached walls and rooms
/// that no remaining edit refers to.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<PlanEdit>,
    redo: Vec<PlanEdit>,
    limit: Option<usize>,
}

impl History {
    /// Creates an unbounded history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` undoable edits, dropping the oldest.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    /// Records an edit already applied to `plan`. Clears the redo stack.
    pub fn push(&mut self, plan: &mut Plan, edit: PlanEdit) {
        if edit.is_empty() {
            return;
        }
        let mut discarded: Vec<PlanEdit> = self.redo.drain(..).collect();
        self.undo.push(edit);
        if let Some(limit) = self.limit {
            let excess = self.undo.len().saturating_sub(limit);
            discarded.extend(self.undo.drain(..excess));
        }
        self.purge(plan, &discarded);
    }

    /// Frees detached entities of `discarded` edits not referenced by the
    /// undo stack.
    fn purge(&self, plan: &mut Plan, discarded: &[PlanEdit]) {
        if discarded.is_empty() {
            return;
        }
        let live_walls: HashSet<_> = self.undo.iter().flat_map(PlanEdit::wall_ids).collect();
        let live_rooms: HashSet<_> = self.undo.iter().flat_map(PlanEdit::room_ids).collect();

        let mut freed = 0usize;
        for edit in discarded {
            for id in edit.wall_ids().filter(|id| !live_walls.contains(id)) {
                freed += usize::from(plan.purge_wall(id));
            }
            for id in edit.room_ids().filter(|id| !live_rooms.contains(id)) {
                freed += usize::from(plan.purge_room(id));
            }
        }
        trace!(edits = discarded.len(), freed, "purged discarded edits");
    }

    /// Undoes the most recent edit. Returns `false` if there was nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PlanEdit::undo`]; the plan and the stacks are
    /// left unchanged.
    pub fn undo(&mut self, plan: &mut Plan) -> Result<bool> {
        let Some(edit) = self.undo.pop() else {
            return Ok(false);
        };
        debug!(label = edit.label(), "undo");
        if let Err(err) = edit.undo(plan) {
            self.undo.push(edit);
            return Err(err);
        }
        self.redo.push(edit);
        Ok(true)
    }

    /// Redoes the most recently undone edit. Returns `false` if there was
    /// nothing to redo.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`PlanEdit::redo`]; the plan and the stacks are
    /// left unchanged.
    pub fn redo(&mut self, plan: &mut Plan) -> Result<bool> {
        let Some(edit) = self.redo.pop() else {
            return Ok(false);
        };
        debug!(label = edit.label(), "redo");
        if let Err(err) = edit.redo(plan) {
            self.redo.push(edit);
            return Err(err);
        }
        self.undo.push(edit);
        Ok(true)
    }

    /// Returns `true` if there is an edit to undo.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Returns `true` if there is an edit to redo.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Label of the edit the next undo would revert.
    #[must_use]
    pub fn undo_label(&self) -> Option<&str> {
        self.undo.last().map(PlanEdit::label)
    }
}
