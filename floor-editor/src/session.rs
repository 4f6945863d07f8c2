//! Editor session
//!
//! Owns every piece of editor state and is the only thing the render layer
//! talks to. Inbound calls mirror the host events (pointer, viewport,
//! background, form input); after each mutation subscribed listeners receive
//! a [`ChangeEvent`] together with a fresh [`EditorSnapshot`].
//!
//! Everything runs synchronously on the caller's thread. There is no
//! locking: one session, one event at a time.

use std::path::Path;

use serde::Serialize;
use shared::models::{FloorTable, Layout, Point, Rect, Role, TableId, TableUpdate};

use crate::background;
use crate::config::EditorConfig;
use crate::coords::CoordinateMapper;
use crate::drag::DragController;
use crate::error::{EditorError, EditorResult};
use crate::mode::{ModeController, actions};
use crate::persistence::{KeyValueStore, LoadWarning, PersistenceGateway, RedbStorage};
use crate::reservation::{CancelRequest, FormField, ReservationForm, ReservationManager};
use crate::store::{EntityStore, LayoutStats};

/// What changed in the last operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChangeEvent {
    TableCreated { id: TableId },
    TableUpdated { id: TableId },
    TableMoved { id: TableId, position: Point },
    TableDeleted { id: TableId },
    ReservationChanged { id: TableId, reserved: bool },
    SelectionChanged { selected_id: Option<TableId> },
    ModeChanged { role: Role, is_adding_table: bool },
    BackgroundChanged,
    LayoutLoaded { tables: usize, repairs: usize },
    LayoutSaved,
    ViewportChanged { viewport: Rect },
}

impl ChangeEvent {
    /// Whether the event changes what `save_layout` would write
    pub fn touches_layout(&self) -> bool {
        matches!(
            self,
            ChangeEvent::TableCreated { .. }
                | ChangeEvent::TableUpdated { .. }
                | ChangeEvent::TableMoved { .. }
                | ChangeEvent::TableDeleted { .. }
                | ChangeEvent::ReservationChanged { .. }
                | ChangeEvent::BackgroundChanged
        )
    }
}

/// A table plus where to paint it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableView {
    pub table: FloorTable,
    pub screen_rect: Rect,
}

/// Read-only view for the render layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub tables: Vec<TableView>,
    pub selected_id: Option<TableId>,
    pub is_dragging: bool,
    pub is_adding_table: bool,
    pub role: Role,
    pub has_background: bool,
    pub reservation_form: ReservationForm,
    pub pending_cancel: Option<TableId>,
}

impl EditorSnapshot {
    pub fn table(&self, id: TableId) -> Option<&TableView> {
        self.tables.iter().find(|v| v.table.id == id)
    }
}

type Listener = Box<dyn FnMut(&ChangeEvent, &EditorSnapshot)>;

pub struct EditorSession {
    config: EditorConfig,
    mapper: CoordinateMapper,
    viewport: Rect,
    store: EntityStore,
    mode: ModeController,
    drag: DragController,
    reservations: ReservationManager,
    background_ref: Option<String>,
    gateway: PersistenceGateway,
    listeners: Vec<Listener>,
    dirty: bool,
}

impl EditorSession {
    /// Start a session on `storage`, loading the stored layout once.
    ///
    /// The viewport starts out identical to the logical canvas until the
    /// host reports its real size.
    pub fn open(config: EditorConfig, storage: Box<dyn KeyValueStore>) -> EditorResult<Self> {
        config.validate()?;
        let gateway = PersistenceGateway::new(storage, config.storage_key.clone())
            .with_bounds(config.size_bounds);
        let mut session = Self {
            mapper: CoordinateMapper::new(config.canvas_size),
            viewport: Rect::from_parts(Point::ORIGIN, config.canvas_size),
            store: EntityStore::new(config.size_bounds),
            mode: ModeController::default(),
            drag: DragController::new(),
            reservations: ReservationManager::new(),
            background_ref: None,
            gateway,
            listeners: Vec::new(),
            dirty: false,
            config,
        };
        session.load_layout();
        tracing::info!(
            role = %session.mode.role(),
            tables = session.store.len(),
            "Editor session opened"
        );
        Ok(session)
    }

    /// Start a session on the storage named by the config: a redb file when
    /// `data_path` is set, an in-memory redb database otherwise.
    pub fn open_with_config(config: EditorConfig) -> EditorResult<Self> {
        let storage: Box<dyn KeyValueStore> = match &config.data_path {
            Some(path) => Box::new(RedbStorage::open(path)?),
            None => Box::new(RedbStorage::open_in_memory()?),
        };
        Self::open(config, storage)
    }

    // ========== Read side ==========

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn role(&self) -> Role {
        self.mode.role()
    }

    pub fn selected_id(&self) -> Option<TableId> {
        self.mode.selected_id()
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn table(&self, id: TableId) -> Option<&FloorTable> {
        self.store.get(id)
    }

    pub fn background_ref(&self) -> Option<&str> {
        self.background_ref.as_deref()
    }

    pub fn reservation_form(&self) -> &ReservationForm {
        self.reservations.form()
    }

    pub fn stats(&self) -> LayoutStats {
        self.store.stats()
    }

    /// Unreserved tables in insertion order (guest table list)
    pub fn available_tables(&self) -> Vec<FloorTable> {
        self.store.available().cloned().collect()
    }

    /// Layout-affecting changes since the last successful save or load
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The persistable aggregate
    pub fn layout(&self) -> Layout {
        Layout {
            tables: self.store.to_vec(),
            background_ref: self.background_ref.clone(),
        }
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        let tables = self
            .store
            .list()
            .map(|table| TableView {
                screen_rect: self.mapper.rect_to_screen(table.bounds(), self.viewport),
                table: table.clone(),
            })
            .collect();
        EditorSnapshot {
            tables,
            selected_id: self.mode.selected_id(),
            is_dragging: self.drag.is_dragging(),
            is_adding_table: self.mode.is_adding_table(),
            role: self.mode.role(),
            has_background: self.background_ref.is_some(),
            reservation_form: self.reservations.form().clone(),
            pending_cancel: self.reservations.pending_cancel(),
        }
    }

    /// Register a listener called after every change
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ChangeEvent, &EditorSnapshot) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ========== Host events ==========

    /// The host finished decoding an uploaded background.
    pub fn on_background_image_ready(&mut self, opaque_ref: impl Into<String>) -> EditorResult<()> {
        self.mode.require(actions::LAYOUT_BACKGROUND)?;
        self.background_ref = Some(opaque_ref.into());
        tracing::info!("Background image set");
        self.emit(ChangeEvent::BackgroundChanged);
        Ok(())
    }

    /// Read an image file and use it as the background
    pub fn load_background_file(&mut self, path: impl AsRef<Path>) -> EditorResult<()> {
        self.mode.require(actions::LAYOUT_BACKGROUND)?;
        let uri = background::data_uri_from_path(path)?;
        self.on_background_image_ready(uri)
    }

    pub fn on_viewport_resized(&mut self, viewport: Rect) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            "Viewport resized"
        );
        self.emit(ChangeEvent::ViewportChanged { viewport });
    }

    /// Pointer pressed at `screen`, on table `target` or on the background.
    pub fn on_pointer_down(&mut self, screen: Point, target: Option<TableId>) {
        let logical = self.mapper.to_logical(screen, self.viewport);
        match target {
            Some(id) => self.press_table(id, logical),
            None => self.press_background(logical),
        }
    }

    pub fn on_pointer_move(&mut self, screen: Point) {
        let Some(id) = self.drag.dragged_id() else {
            return;
        };
        let logical = self.mapper.to_logical(screen, self.viewport);
        if let Some(position) = self.drag.drag_to(logical, &mut self.store) {
            self.emit(ChangeEvent::TableMoved { id, position });
        }
    }

    /// Pointer released. A press-release on an already selected table
    /// without movement deselects it.
    pub fn on_pointer_up(&mut self, _screen: Point) {
        let Some(outcome) = self.drag.end() else {
            return;
        };
        let deselect = outcome.is_click() && outcome.release_deselects;
        if deselect && self.mode.forget_table(outcome.table_id) {
            self.after_selection_change();
        }
    }

    /// Pointer left the surface: ends a drag like a release, never a click
    pub fn on_pointer_leave(&mut self) {
        self.drag.cancel();
    }

    fn press_table(&mut self, id: TableId, logical: Point) {
        let Some(table) = self.store.get(id) else {
            tracing::debug!(table_id = id, "Press on missing table ignored");
            return;
        };

        match self.mode.role() {
            Role::Guest => {
                self.mode.toggle_selection(id);
                self.after_selection_change();
            }
            Role::Admin => {
                if self.mode.require(actions::TABLE_MOVE).is_err() {
                    return;
                }
                let was_selected = self.mode.selected_id() == Some(id);
                self.drag.begin(table, logical, was_selected);
                if !was_selected {
                    self.mode.select(id);
                    self.after_selection_change();
                }
            }
        }
    }

    fn press_background(&mut self, logical: Point) {
        if self.drag.is_dragging() {
            tracing::debug!("Background press during drag suppressed");
            return;
        }
        if !self.mode.is_adding_table() {
            return;
        }
        if self.background_ref.is_none() || self.mode.require(actions::TABLE_CREATE).is_err() {
            self.mode.cancel_add_table();
            self.emit_mode_changed();
            return;
        }

        self.mode.take_add_intent();
        let id = self
            .store
            .create(
                logical,
                self.config.default_table_size,
                self.config.default_shape,
                self.config.default_seats,
            )
            .id;
        self.emit(ChangeEvent::TableCreated { id });
    }

    // ========== Mode ==========

    /// Switch role. Selection, add-intent, the drag and the form are reset;
    /// a dragged table keeps its last position.
    pub fn switch_role(&mut self, role: Role) {
        if !self.mode.set_role(role) {
            return;
        }
        self.drag.cancel();
        self.reservations.reset();
        self.emit_mode_changed();
    }

    pub fn toggle_role(&mut self) -> Role {
        self.switch_role(self.mode.role().toggled());
        self.mode.role()
    }

    /// Arm placement of one table on the next background press
    pub fn begin_add_table(&mut self) -> EditorResult<()> {
        self.mode.begin_add_table(self.background_ref.is_some())?;
        self.emit_mode_changed();
        Ok(())
    }

    pub fn cancel_add_table(&mut self) {
        if self.mode.is_adding_table() {
            self.mode.cancel_add_table();
            self.emit_mode_changed();
        }
    }

    /// Select a table from outside the canvas (e.g. a table list)
    pub fn select(&mut self, id: TableId) -> EditorResult<()> {
        if !self.store.contains(id) {
            return Err(EditorError::NotFound(id));
        }
        if self.mode.selected_id() != Some(id) {
            if self.drag.dragged_id().is_some_and(|dragged| dragged != id) {
                self.drag.cancel();
            }
            self.mode.select(id);
            self.after_selection_change();
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.mode.selected_id().is_some() {
            self.drag.cancel();
            self.mode.clear_selection();
            self.after_selection_change();
        }
    }

    // ========== Table edits ==========

    /// Merge property edits into a table (admin only)
    pub fn update_table(&mut self, id: TableId, update: &TableUpdate) -> EditorResult<FloorTable> {
        self.mode.require(actions::TABLE_UPDATE)?;
        if update.position.is_some() {
            self.mode.require(actions::TABLE_MOVE)?;
        }
        let table = self.store.update(id, update)?.clone();
        self.emit(ChangeEvent::TableUpdated { id });
        Ok(table)
    }

    /// Delete a table (admin only). Selection and drag pointing at it are
    /// cleared; other selections are left alone.
    pub fn delete_table(&mut self, id: TableId) -> EditorResult<bool> {
        self.mode.require(actions::TABLE_DELETE)?;
        if !self.store.delete(id) {
            return Ok(false);
        }
        if self.drag.dragged_id() == Some(id) {
            self.drag.cancel();
        }
        if self.mode.forget_table(id) {
            self.reservations.reset();
            self.emit(ChangeEvent::SelectionChanged { selected_id: None });
        }
        self.emit(ChangeEvent::TableDeleted { id });
        Ok(true)
    }

    pub fn delete_selected(&mut self) -> EditorResult<bool> {
        match self.mode.selected_id() {
            Some(id) => self.delete_table(id),
            None => Ok(false),
        }
    }

    // ========== Reservations ==========

    pub fn set_reservation_field(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> EditorResult<()> {
        self.reservations.set_field(field, value)
    }

    pub fn can_confirm_reservation(&self) -> bool {
        self.mode.role().can(actions::RESERVATION_CREATE) && self.reservations.can_confirm()
    }

    /// Book the selected table (guest)
    pub fn confirm_reservation(&mut self) -> EditorResult<FloorTable> {
        let table = self
            .reservations
            .confirm(&mut self.store, &mut self.mode)?;
        self.emit(ChangeEvent::ReservationChanged {
            id: table.id,
            reserved: true,
        });
        self.emit(ChangeEvent::SelectionChanged {
            selected_id: self.mode.selected_id(),
        });
        Ok(table)
    }

    /// Cancel the selected table's reservation. Admins cancel at once;
    /// guests must confirm.
    pub fn request_cancel_reservation(&mut self) -> EditorResult<CancelRequest> {
        let request = self
            .reservations
            .request_cancel(&mut self.store, &mut self.mode)?;
        if let CancelRequest::Cancelled(table) = &request {
            self.emit(ChangeEvent::ReservationChanged {
                id: table.id,
                reserved: false,
            });
        }
        Ok(request)
    }

    pub fn confirm_cancel_reservation(&mut self) -> EditorResult<FloorTable> {
        let selected_before = self.mode.selected_id();
        let table = self
            .reservations
            .confirm_cancel(&mut self.store, &mut self.mode)?;
        self.emit(ChangeEvent::ReservationChanged {
            id: table.id,
            reserved: false,
        });
        if self.mode.selected_id() != selected_before {
            self.emit(ChangeEvent::SelectionChanged {
                selected_id: self.mode.selected_id(),
            });
        }
        Ok(table)
    }

    pub fn dismiss_cancel_reservation(&mut self) -> bool {
        self.reservations.dismiss_cancel()
    }

    // ========== Persistence ==========

    /// Write the layout (admin only). On failure memory is untouched and the
    /// session stays dirty.
    pub fn save_layout(&mut self) -> EditorResult<()> {
        self.mode.require(actions::LAYOUT_SAVE)?;
        self.gateway.save(&self.layout())?;
        self.dirty = false;
        self.emit(ChangeEvent::LayoutSaved);
        Ok(())
    }

    /// Replace the in-memory layout with the stored one.
    ///
    /// Returns the repairs applied, or `None` when nothing usable was stored
    /// (the current layout is kept).
    pub fn load_layout(&mut self) -> Option<Vec<LoadWarning>> {
        let (layout, warnings) = self.gateway.load_with_report()?;

        self.drag.cancel();
        self.mode.clear_selection();
        self.mode.cancel_add_table();
        self.reservations.reset();
        self.store = EntityStore::from_tables(layout.tables, self.config.size_bounds);
        self.background_ref = layout.background_ref;
        self.dirty = false;

        self.emit(ChangeEvent::LayoutLoaded {
            tables: self.store.len(),
            repairs: warnings.len(),
        });
        Some(warnings)
    }

    // ========== Internals ==========

    fn after_selection_change(&mut self) {
        let selected = self.mode.selected_id();
        self.reservations
            .sync_selection(selected.and_then(|id| self.store.get(id)), self.mode.role());
        self.emit(ChangeEvent::SelectionChanged {
            selected_id: selected,
        });
    }

    fn emit_mode_changed(&mut self) {
        let event = ChangeEvent::ModeChanged {
            role: self.mode.role(),
            is_adding_table: self.mode.is_adding_table(),
        };
        self.emit(event);
    }

    fn emit(&mut self, event: ChangeEvent) {
        if event.touches_layout() {
            self.dirty = true;
        }
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&event, &snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStorage, StorageError, StorageResult};
    use shared::error::ErrorCode;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session() -> EditorSession {
        EditorSession::open(EditorConfig::new(), Box::new(MemoryStorage::new())).unwrap()
    }

    fn session_with_table() -> (EditorSession, TableId) {
        let mut session = session();
        session.on_background_image_ready("bg").unwrap();
        session.begin_add_table().unwrap();
        session.on_pointer_down(Point::new(10.0, 10.0), None);
        let id = session.snapshot().tables[0].table.id;
        (session, id)
    }

    #[test]
    fn test_add_table_needs_background() {
        let mut session = session();
        assert!(session.begin_add_table().is_err());
        session.on_pointer_down(Point::new(10.0, 10.0), None);
        assert!(session.snapshot().tables.is_empty());
    }

    #[test]
    fn test_add_is_single_shot() {
        let (mut session, id) = session_with_table();
        let snapshot = session.snapshot();
        assert!(!snapshot.is_adding_table);
        assert_eq!(snapshot.table(id).unwrap().table.position, Point::new(10.0, 10.0));

        session.on_pointer_down(Point::new(200.0, 200.0), None);
        assert_eq!(session.snapshot().tables.len(), 1);
    }

    #[test]
    fn test_admin_press_release_on_selected_table_deselects() {
        let (mut session, id) = session_with_table();
        session.on_pointer_down(Point::new(20.0, 20.0), Some(id));
        session.on_pointer_up(Point::new(20.0, 20.0));
        assert_eq!(session.selected_id(), Some(id));

        session.on_pointer_down(Point::new(20.0, 20.0), Some(id));
        session.on_pointer_up(Point::new(20.0, 20.0));
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_drag_of_selected_table_keeps_selection() {
        let (mut session, id) = session_with_table();
        session.select(id).unwrap();
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        assert!(session.snapshot().is_dragging);
        session.on_pointer_move(Point::new(50.0, 50.0));
        session.on_pointer_up(Point::new(50.0, 50.0));
        assert_eq!(session.selected_id(), Some(id));
        assert_eq!(session.table(id).unwrap().position, Point::new(48.0, 48.0));
    }

    #[test]
    fn test_background_press_during_drag_is_suppressed() {
        let (mut session, id) = session_with_table();
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        session.begin_add_table().unwrap();
        session.on_pointer_down(Point::new(300.0, 300.0), None);
        assert_eq!(session.snapshot().tables.len(), 1);
        assert!(session.snapshot().is_adding_table);
    }

    #[test]
    fn test_guest_press_toggles_and_never_drags() {
        let (mut session, id) = session_with_table();
        session.switch_role(Role::Guest);
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        assert_eq!(session.selected_id(), Some(id));
        assert!(!session.snapshot().is_dragging);
        session.on_pointer_move(Point::new(80.0, 80.0));
        assert_eq!(session.table(id).unwrap().position, Point::new(10.0, 10.0));
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        assert_eq!(session.selected_id(), None);
    }

    #[test]
    fn test_press_on_missing_table_is_noop() {
        let mut session = session();
        session.on_pointer_down(Point::new(1.0, 1.0), Some(404));
        assert_eq!(session.selected_id(), None);
        assert!(!session.snapshot().is_dragging);
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let (mut session, id) = session_with_table();
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        session.on_pointer_leave();
        assert!(!session.snapshot().is_dragging);
        assert_eq!(session.selected_id(), Some(id));
    }

    #[test]
    fn test_snapshot_uses_screen_rects() {
        let (mut session, id) = session_with_table();
        session.on_viewport_resized(Rect::new(100.0, 50.0, 500.0, 350.0));
        let view = session.snapshot().table(id).cloned().unwrap();
        assert_eq!(view.table.position, Point::new(10.0, 10.0));
        assert_eq!(view.screen_rect, Rect::new(105.0, 55.0, 30.0, 20.0));
    }

    #[test]
    fn test_listeners_see_events_and_dirty_tracking() {
        let (mut session, id) = session_with_table();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |event, snapshot| {
            sink.borrow_mut().push((event.clone(), snapshot.selected_id));
        });

        assert!(session.is_dirty());
        session.save_layout().unwrap();
        assert!(!session.is_dirty());

        session.delete_table(id).unwrap();
        assert!(session.is_dirty());

        let events: Vec<_> = seen.borrow().iter().map(|(e, _)| e.clone()).collect();
        assert_eq!(
            events,
            vec![ChangeEvent::LayoutSaved, ChangeEvent::TableDeleted { id }]
        );
    }

    #[test]
    fn test_selecting_another_table_ends_drag() {
        let (mut session, a) = session_with_table();
        session.begin_add_table().unwrap();
        session.on_pointer_down(Point::new(300.0, 300.0), None);
        let b = session.snapshot().tables[1].table.id;

        session.on_pointer_down(Point::new(12.0, 12.0), Some(a));
        session.select(b).unwrap();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.selected_id, Some(b));
        assert!(!snapshot.is_dragging);

        session.on_pointer_move(Point::new(100.0, 100.0));
        assert_eq!(session.table(a).unwrap().position, Point::new(10.0, 10.0));
        assert_eq!(session.table(b).unwrap().position, Point::new(300.0, 300.0));
    }

    #[test]
    fn test_reselecting_dragged_table_keeps_drag() {
        let (mut session, id) = session_with_table();
        session.on_pointer_down(Point::new(12.0, 12.0), Some(id));
        session.select(id).unwrap();
        assert!(session.snapshot().is_dragging);
    }

    struct FailingWrites(MemoryStorage);

    impl KeyValueStore for FailingWrites {
        fn read(&self, key: &str) -> StorageResult<Option<String>> {
            self.0.read(key)
        }
        fn write(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Unavailable("read-only medium".into()))
        }
        fn remove(&self, _key: &str) -> StorageResult<bool> {
            Err(StorageError::Unavailable("read-only medium".into()))
        }
    }

    #[test]
    fn test_failed_save_keeps_state_and_dirty_flag() {
        let mut session = EditorSession::open(
            EditorConfig::new(),
            Box::new(FailingWrites(MemoryStorage::new())),
        )
        .unwrap();
        session.on_background_image_ready("bg").unwrap();
        session.begin_add_table().unwrap();
        session.on_pointer_down(Point::new(40.0, 40.0), None);
        let before = session.layout();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |event, _| sink.borrow_mut().push(event.clone()));

        let err = session.save_layout().unwrap_err();
        assert_eq!(err.code(), ErrorCode::StorageUnavailable);
        assert!(session.is_dirty());
        assert_eq!(session.layout(), before);
        assert!(!seen.borrow().contains(&ChangeEvent::LayoutSaved));
    }

    #[test]
    fn test_guest_cannot_save_or_edit() {
        let (mut session, id) = session_with_table();
        session.switch_role(Role::Guest);
        assert!(matches!(
            session.save_layout(),
            Err(EditorError::NotPermitted { .. })
        ));
        assert!(session.delete_table(id).is_err());
        assert!(session.update_table(id, &TableUpdate::default()).is_err());
        assert!(session.on_background_image_ready("other").is_err());
        assert!(session.table(id).is_some());
    }
}
