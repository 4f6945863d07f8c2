//! Drag state machine
//!
//! ```text
//! Idle --press on table (admin)--> Dragging(id, grab_offset)
//! Dragging --move--> Dragging          store.move(id, pointer - grab_offset)
//! Dragging --release | leave--> Idle
//! ```
//!
//! Pointers arrive here already mapped to logical space. The grab offset is
//! captured once at press time so the table keeps its position relative to
//! the cursor instead of jumping to it. Role gating happens in the session:
//! guests never reach [`DragController::begin`].

use shared::models::{FloorTable, Point, TableId};

use crate::store::EntityStore;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        table_id: TableId,
        /// Pointer minus table position at press time (logical units)
        grab_offset: Point,
        /// At least one move event changed the position
        moved: bool,
        /// The table was already selected before the press, so a release
        /// without movement counts as a click that deselects it
        release_deselects: bool,
    },
}

/// What a finished drag looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub table_id: TableId,
    pub moved: bool,
    pub release_deselects: bool,
}

impl DragOutcome {
    /// Press and release with no movement
    pub fn is_click(&self) -> bool {
        !self.moved
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn dragged_id(&self) -> Option<TableId> {
        match self.state {
            DragState::Dragging { table_id, .. } => Some(table_id),
            DragState::Idle => None,
        }
    }

    /// Start dragging `table` from a press at `pointer` (logical).
    ///
    /// A press while already dragging (a release got lost) restarts the
    /// drag on the new table.
    pub fn begin(&mut self, table: &FloorTable, pointer: Point, release_deselects: bool) {
        if let Some(previous) = self.dragged_id() {
            tracing::debug!(table_id = previous, "Dangling drag replaced");
        }
        let grab_offset = pointer - table.position;
        self.state = DragState::Dragging {
            table_id: table.id,
            grab_offset,
            moved: false,
            release_deselects,
        };
        tracing::debug!(
            table_id = table.id,
            offset_x = grab_offset.x,
            offset_y = grab_offset.y,
            "Drag started"
        );
    }

    /// Apply a pointer move (logical). Returns the table's new position, or
    /// `None` when idle.
    ///
    /// If the dragged table vanished from the store the drag ends silently.
    pub fn drag_to(&mut self, pointer: Point, store: &mut EntityStore) -> Option<Point> {
        let DragState::Dragging {
            table_id,
            grab_offset,
            moved,
            ..
        } = &mut self.state
        else {
            return None;
        };

        let target = pointer - *grab_offset;
        match store.move_table(*table_id, target) {
            Ok(_) => {
                *moved = true;
                Some(target)
            }
            Err(_) => {
                tracing::debug!(table_id = *table_id, "Dragged table disappeared, drag ended");
                self.state = DragState::Idle;
                None
            }
        }
    }

    /// Release (or pointer left the surface). Returns what was dragged.
    pub fn end(&mut self) -> Option<DragOutcome> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                table_id,
                moved,
                release_deselects,
                ..
            } => {
                tracing::debug!(table_id, moved, "Drag ended");
                Some(DragOutcome {
                    table_id,
                    moved,
                    release_deselects,
                })
            }
            DragState::Idle => None,
        }
    }

    /// Drop the drag without a release (role switch, delete). The table
    /// keeps its last dragged position.
    pub fn cancel(&mut self) -> bool {
        self.end().is_some()
    }
}
