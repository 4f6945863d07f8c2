//! Reservation rules
//!
//! Per-table lifecycle, driven by role and selection:
//!
//! ```text
//! Unreserved --guest fills name/time/phone, confirms--> Reserved
//! Reserved   --guest requests cancel, confirms-------> Unreserved
//! Reserved   --admin cancels--------------------------> Unreserved
//! ```
//!
//! The guest confirmation gate is a trust-only step, not an access check.

use serde::{Deserialize, Serialize};
use shared::error::ErrorCode;
use shared::models::{FloorTable, Reservation, ReservationState, Role, TableId};

use crate::error::{EditorError, EditorResult};
use crate::mode::{ModeController, actions};
use crate::store::EntityStore;

/// Fields of the reservation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    GuestName,
    Time,
    Phone,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::GuestName => "name",
            FormField::Time => "time",
            FormField::Phone => "phone",
        }
    }
}

/// Reservation form as shown next to the selected table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationForm {
    pub guest_name: String,
    pub time: String,
    pub phone: String,
    /// Showing an existing reservation; edits are refused
    pub read_only: bool,
}

impl ReservationForm {
    fn showing(reservation: &Reservation) -> Self {
        Self {
            guest_name: reservation.guest_name.clone(),
            time: reservation.time.clone(),
            phone: reservation.phone.clone(),
            read_only: true,
        }
    }

    /// Fields that are empty or whitespace only
    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            (FormField::GuestName, &self.guest_name),
            (FormField::Time, &self.time),
            (FormField::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Result of asking to cancel a reservation
#[derive(Debug, Clone, PartialEq)]
pub enum CancelRequest {
    /// Cancelled immediately (admin)
    Cancelled(FloorTable),
    /// Guest must confirm before anything changes
    AwaitingConfirmation(TableId),
}

#[derive(Debug, Clone, Default)]
pub struct ReservationManager {
    form: ReservationForm,
    pending_cancel: Option<TableId>,
}

impl ReservationManager {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn form(&self) -> &ReservationForm {
        &self.form
    }

    #[inline]
    pub fn pending_cancel(&self) -> Option<TableId> {
        self.pending_cancel
    }

    /// Whether the confirm action should be enabled
    pub fn can_confirm(&self) -> bool {
        !self.form.read_only && self.form.is_complete()
    }

    /// Refresh the form after the selection changed.
    ///
    /// Guests selecting a reserved table see its details read-only; any
    /// other selection starts from an empty form. A pending cancellation
    /// never carries over to a different selection.
    pub fn sync_selection(&mut self, selected: Option<&FloorTable>, role: Role) {
        if self.pending_cancel.is_some() && self.pending_cancel != selected.map(|t| t.id) {
            self.pending_cancel = None;
        }
        self.form = match (selected, role) {
            (Some(table), Role::Guest) => match &table.reservation {
                ReservationState::Reserved(r) => ReservationForm::showing(r),
                ReservationState::Unreserved => ReservationForm::default(),
            },
            _ => ReservationForm::default(),
        };
    }

    pub fn reset(&mut self) {
        self.form = ReservationForm::default();
        self.pending_cancel = None;
    }

    /// Edit one form field
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> EditorResult<()> {
        if self.form.read_only {
            return Err(EditorError::rejected(
                ErrorCode::TableAlreadyReserved,
                "existing reservation details are read-only",
            ));
        }
        let value = value.into();
        match field {
            FormField::GuestName => self.form.guest_name = value,
            FormField::Time => self.form.time = value,
            FormField::Phone => self.form.phone = value,
        }
        Ok(())
    }

    /// Book the selected table with the form contents.
    ///
    /// All three fields are required; on any rejection the table is left
    /// untouched. On success the form and selection are cleared.
    pub fn confirm(
        &mut self,
        store: &mut EntityStore,
        mode: &mut ModeController,
    ) -> EditorResult<FloorTable> {
        mode.require(actions::RESERVATION_CREATE)?;
        let id = selected_table(mode)?;
        let table = store.get(id).ok_or(EditorError::NotFound(id))?;
        if table.is_reserved() {
            return Err(EditorError::rejected(
                ErrorCode::TableAlreadyReserved,
                format!("table {} is already reserved", table.display_number),
            ));
        }

        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(FormField::as_str).collect();
            return Err(EditorError::rejected(
                ErrorCode::ReservationIncomplete,
                format!("missing {}", names.join(", ")),
            ));
        }

        let reservation = Reservation::new(
            self.form.guest_name.clone(),
            self.form.time.clone(),
            self.form.phone.clone(),
        );
        let table = store
            .set_reservation(id, ReservationState::Reserved(reservation))?
            .clone();
        tracing::info!(table_id = id, number = table.display_number, "Table reserved");

        mode.clear_selection();
        self.reset();
        Ok(table)
    }

    /// Start cancelling the selected table's reservation.
    ///
    /// Admins cancel immediately; guests get [`CancelRequest::AwaitingConfirmation`]
    /// and must call [`confirm_cancel`](Self::confirm_cancel).
    pub fn request_cancel(
        &mut self,
        store: &mut EntityStore,
        mode: &mut ModeController,
    ) -> EditorResult<CancelRequest> {
        mode.require(actions::RESERVATION_CANCEL)?;
        let id = reserved_selection(store, mode)?;

        match mode.role() {
            Role::Admin => {
                let table = self.cancel(store, mode, id)?;
                Ok(CancelRequest::Cancelled(table))
            }
            Role::Guest => {
                self.pending_cancel = Some(id);
                tracing::debug!(table_id = id, "Cancellation awaiting confirmation");
                Ok(CancelRequest::AwaitingConfirmation(id))
            }
        }
    }

    /// Confirm a pending guest cancellation
    pub fn confirm_cancel(
        &mut self,
        store: &mut EntityStore,
        mode: &mut ModeController,
    ) -> EditorResult<FloorTable> {
        mode.require(actions::RESERVATION_CANCEL)?;
        let Some(pending) = self.pending_cancel else {
            return Err(EditorError::rejected(
                ErrorCode::InvalidRequest,
                "no cancellation awaiting confirmation",
            ));
        };
        let id = reserved_selection(store, mode)?;
        if id != pending {
            return Err(EditorError::rejected(
                ErrorCode::InvalidRequest,
                "selection changed since cancellation was requested",
            ));
        }
        self.pending_cancel = None;
        self.cancel(store, mode, id)
    }

    /// Back out of a pending guest cancellation
    pub fn dismiss_cancel(&mut self) -> bool {
        self.pending_cancel.take().is_some()
    }

    fn cancel(
        &mut self,
        store: &mut EntityStore,
        mode: &mut ModeController,
        id: TableId,
    ) -> EditorResult<FloorTable> {
        let table = store
            .set_reservation(id, ReservationState::Unreserved)?
            .clone();
        tracing::info!(table_id = id, role = %mode.role(), "Reservation cancelled");

        if mode.role() == Role::Guest {
            mode.clear_selection();
            self.reset();
        } else {
            self.pending_cancel = None;
        }
        Ok(table)
    }
}

fn selected_table(mode: &ModeController) -> EditorResult<TableId> {
    mode.selected_id().ok_or_else(|| {
        EditorError::rejected(ErrorCode::InvalidRequest, "no table selected")
    })
}

fn reserved_selection(store: &EntityStore, mode: &ModeController) -> EditorResult<TableId> {
    let id = selected_table(mode)?;
    let table = store.get(id).ok_or(EditorError::NotFound(id))?;
    if !table.is_reserved() {
        return Err(EditorError::rejected(
            ErrorCode::TableNotReserved,
            format!("table {} has no reservation", table.display_number),
        ));
    }
    Ok(id)
}
