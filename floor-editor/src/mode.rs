//! Role and transient UI state
//!
//! Two orthogonal pieces of state: the [`Role`] and the transient flags
//! (`is_adding_table`, `selected_id`). Switching role resets the transient
//! flags; the drag state lives in [`DragController`](crate::drag::DragController)
//! and is reset by the session alongside.

use shared::error::ErrorCode;
use shared::models::{Role, TableId};

use crate::error::{EditorError, EditorResult};

/// Actions checked against the role's permissions
pub mod actions {
    pub const TABLE_CREATE: &str = "tables:create";
    pub const TABLE_UPDATE: &str = "tables:update";
    pub const TABLE_DELETE: &str = "tables:delete";
    pub const TABLE_MOVE: &str = "tables:move";
    pub const LAYOUT_SAVE: &str = "layout:save";
    pub const LAYOUT_BACKGROUND: &str = "layout:background";
    pub const RESERVATION_CREATE: &str = "reservations:create";
    pub const RESERVATION_CANCEL: &str = "reservations:cancel";
}

#[derive(Debug, Clone, Default)]
pub struct ModeController {
    role: Role,
    is_adding_table: bool,
    selected_id: Option<TableId>,
}

impl ModeController {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    #[inline]
    pub fn role(&self) -> Role {
        self.role
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    #[inline]
    pub fn is_adding_table(&self) -> bool {
        self.is_adding_table
    }

    #[inline]
    pub fn selected_id(&self) -> Option<TableId> {
        self.selected_id
    }

    /// Permission check for `action` in the current role
    pub fn require(&self, action: &'static str) -> EditorResult<()> {
        if self.role.can(action) {
            Ok(())
        } else {
            tracing::warn!(role = %self.role, action, "Action rejected for role");
            Err(EditorError::NotPermitted {
                action,
                role: self.role,
            })
        }
    }

    /// Switch role. Selection and add-intent never survive a switch.
    ///
    /// Returns false when `role` is already active (nothing is reset).
    pub fn set_role(&mut self, role: Role) -> bool {
        if self.role == role {
            return false;
        }
        self.role = role;
        self.is_adding_table = false;
        self.selected_id = None;
        tracing::info!(role = %role, "Role switched");
        true
    }

    /// Flip between admin and guest
    pub fn toggle_role(&mut self) -> Role {
        self.set_role(self.role.toggled());
        self.role
    }

    /// Arm a single table placement. Needs the admin role and a background
    /// to place onto.
    pub fn begin_add_table(&mut self, has_background: bool) -> EditorResult<()> {
        self.require(actions::TABLE_CREATE)?;
        if !has_background {
            return Err(EditorError::rejected(
                ErrorCode::NoBackgroundImage,
                "load a background image before adding tables",
            ));
        }
        self.is_adding_table = true;
        Ok(())
    }

    pub fn cancel_add_table(&mut self) {
        self.is_adding_table = false;
    }

    /// Consume the add-intent; true when one was armed
    pub fn take_add_intent(&mut self) -> bool {
        std::mem::take(&mut self.is_adding_table)
    }

    /// Select `id`, or deselect when it is already selected.
    ///
    /// Returns the new selection.
    pub fn toggle_selection(&mut self, id: TableId) -> Option<TableId> {
        self.selected_id = if self.selected_id == Some(id) {
            None
        } else {
            Some(id)
        };
        self.selected_id
    }

    /// Select `id` unconditionally
    pub fn select(&mut self, id: TableId) {
        self.selected_id = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Drop the selection if it pointed at `id`. Returns true when cleared.
    pub fn forget_table(&mut self, id: TableId) -> bool {
        if self.selected_id == Some(id) {
            self.selected_id = None;
            true
        } else {
            false
        }
    }
}
