//! Table entity store
//!
//! Holds the tables keyed by id plus their insertion order. Pure data: no
//! role awareness. Whether a caller may create/move/delete is decided by
//! [`ModeController`](crate::mode::ModeController) before the store is
//! touched.

use std::collections::HashMap;

use shared::error::ErrorCode;
use shared::models::{
    FloorTable, Point, ReservationState, Size, TableId, TableShape, TableUpdate,
};
use shared::util::snowflake_id;

use crate::config::SizeBounds;
use crate::error::{EditorError, EditorResult};

/// Aggregate counts for the layout details panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub total_tables: usize,
    pub total_seats: u64,
    pub reserved_tables: usize,
    pub available_tables: usize,
}

/// Ordered collection of tables
#[derive(Debug, Clone)]
pub struct EntityStore {
    tables: HashMap<TableId, FloorTable>,
    /// Insertion order
    order: Vec<TableId>,
    bounds: SizeBounds,
    /// Highest id ever issued or loaded; ids are never reused
    last_id: TableId,
}

impl EntityStore {
    pub fn new(bounds: SizeBounds) -> Self {
        Self {
            tables: HashMap::new(),
            order: Vec::new(),
            bounds,
            last_id: 0,
        }
    }

    /// Build a store from already-normalized tables (e.g. a loaded layout).
    ///
    /// Later duplicates of an id are dropped; sizes are clamped.
    pub fn from_tables(tables: Vec<FloorTable>, bounds: SizeBounds) -> Self {
        let mut store = Self::new(bounds);
        for mut table in tables {
            if store.tables.contains_key(&table.id) {
                tracing::warn!(table_id = table.id, "Duplicate table id dropped");
                continue;
            }
            table.size = bounds.clamp_size(table.size);
            store.last_id = store.last_id.max(table.id);
            store.order.push(table.id);
            store.tables.insert(table.id, table);
        }
        store
    }

    #[inline]
    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    /// Fresh id: time-based, but always above anything issued or loaded.
    ///
    /// A loaded id at `i64::MAX` leaves no room above it; ids are then
    /// searched upwards from a snowflake until a free one is found.
    fn next_id(&mut self) -> TableId {
        let snowflake = snowflake_id();
        match self.last_id.checked_add(1) {
            Some(next) => {
                let id = snowflake.max(next);
                self.last_id = id;
                id
            }
            None => {
                tracing::warn!(last_id = self.last_id, "Id space above loaded tables exhausted");
                let mut id = snowflake;
                while self.tables.contains_key(&id) {
                    id += 1;
                }
                id
            }
        }
    }

    /// Create a table. The display number defaults to `count + 1`.
    pub fn create(
        &mut self,
        position: Point,
        size: Size,
        shape: TableShape,
        seat_count: u32,
    ) -> &FloorTable {
        let id = self.next_id();
        let table = FloorTable {
            id,
            position,
            size: self.bounds.clamp_size(size),
            display_number: self.order.len() as i64 + 1,
            shape,
            seat_count: seat_count.max(1),
            reservation: ReservationState::Unreserved,
        };
        self.order.push(id);
        tracing::info!(table_id = id, number = table.display_number, "Table created");
        self.tables.entry(id).or_insert(table)
    }

    /// Merge `update` into a table. Sizes are clamped; a zero seat count is
    /// rejected and nothing is applied.
    pub fn update(&mut self, id: TableId, update: &TableUpdate) -> EditorResult<&FloorTable> {
        if update.seat_count == Some(0) {
            return Err(EditorError::rejected(
                ErrorCode::InvalidSeatCount,
                "seat count must be at least 1",
            ));
        }
        let bounds = self.bounds;
        let table = self.tables.get_mut(&id).ok_or(EditorError::NotFound(id))?;

        if let Some(position) = update.position {
            table.position = position;
        }
        if let Some(width) = update.width {
            table.size.width = bounds.clamp(width);
        }
        if let Some(height) = update.height {
            table.size.height = bounds.clamp(height);
        }
        if let Some(number) = update.display_number {
            table.display_number = number;
        }
        if let Some(shape) = update.shape {
            table.shape = shape;
        }
        if let Some(seats) = update.seat_count {
            table.seat_count = seats;
        }
        tracing::debug!(table_id = id, "Table updated");
        Ok(&*table)
    }

    /// Move a table. Hot path during a drag: no logging above trace.
    pub fn move_table(&mut self, id: TableId, position: Point) -> EditorResult<&FloorTable> {
        let table = self.tables.get_mut(&id).ok_or(EditorError::NotFound(id))?;
        table.position = position;
        tracing::trace!(table_id = id, x = position.x, y = position.y, "Table moved");
        Ok(&*table)
    }

    /// Replace the reservation sub-state
    pub fn set_reservation(
        &mut self,
        id: TableId,
        reservation: ReservationState,
    ) -> EditorResult<&FloorTable> {
        let table = self.tables.get_mut(&id).ok_or(EditorError::NotFound(id))?;
        table.reservation = reservation;
        Ok(&*table)
    }

    /// Remove a table. Display numbers of the remaining tables are kept.
    pub fn delete(&mut self, id: TableId) -> bool {
        if self.tables.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|t| *t != id);
        tracing::info!(table_id = id, "Table deleted");
        true
    }

    pub fn get(&self, id: TableId) -> Option<&FloorTable> {
        self.tables.get(&id)
    }

    pub fn contains(&self, id: TableId) -> bool {
        self.tables.contains_key(&id)
    }

    /// Tables in insertion order
    pub fn list(&self) -> impl Iterator<Item = &FloorTable> {
        self.order.iter().filter_map(|id| self.tables.get(id))
    }

    /// Unreserved tables in insertion order
    pub fn available(&self) -> impl Iterator<Item = &FloorTable> {
        self.list().filter(|t| !t.is_reserved())
    }

    /// Owned copy of every table in insertion order
    pub fn to_vec(&self) -> Vec<FloorTable> {
        self.list().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn stats(&self) -> LayoutStats {
        self.list().fold(LayoutStats::default(), |mut stats, table| {
            stats.total_tables += 1;
            stats.total_seats += u64::from(table.seat_count);
            if table.is_reserved() {
                stats.reserved_tables += 1;
            } else {
                stats.available_tables += 1;
            }
            stats
        })
    }
}
