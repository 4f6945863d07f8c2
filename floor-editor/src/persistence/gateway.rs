//! Layout persistence gateway
//!
//! Writes the whole [`Layout`] as one JSON document under a single key and
//! reads it back. Loading never fails past this boundary: a missing or
//! unreadable payload is reported as `None` and the caller starts empty.

use std::collections::HashSet;

use serde::Serialize;
use shared::models::{Layout, LayoutRecord, ReservationMismatch, TableId};

use super::storage::{KeyValueStore, StorageError};
use crate::config::SizeBounds;
use crate::error::EditorResult;

/// A repair applied while loading a stored layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadWarning {
    /// `reserved` disagreed with the reservation fields; `reserved` won
    ReservationMismatch {
        table_id: TableId,
        mismatch: ReservationMismatch,
    },
    /// Width or height outside the size bounds
    SizeClamped { table_id: TableId },
    /// Seat count below one
    SeatsRaised { table_id: TableId },
    /// A later record reused an id already loaded
    DuplicateDropped { table_id: TableId },
}

pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore>,
    key: String,
    bounds: SizeBounds,
}

impl PersistenceGateway {
    pub fn new(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            bounds: SizeBounds::default(),
        }
    }

    /// Size bounds applied when repairing loaded tables
    pub fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize and write `layout`. On failure nothing in memory changes.
    pub fn save(&self, layout: &Layout) -> EditorResult<()> {
        let record = LayoutRecord::from(layout);
        let text = serde_json::to_string(&record).map_err(StorageError::from)?;
        if let Err(e) = self.store.write(&self.key, &text) {
            tracing::error!(key = %self.key, error = %e, "Failed to save layout");
            return Err(e.into());
        }
        tracing::info!(
            key = %self.key,
            tables = layout.tables.len(),
            bytes = text.len(),
            "Layout saved"
        );
        Ok(())
    }

    /// Read the stored layout, or `None` when absent or unreadable
    pub fn load(&self) -> Option<Layout> {
        self.load_with_report().map(|(layout, _)| layout)
    }

    /// Like [`load`](Self::load), also returning every repair that was
    /// needed to restore the in-memory invariants.
    pub fn load_with_report(&self) -> Option<(Layout, Vec<LoadWarning>)> {
        let text = match self.store.read(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored layout");
                return None;
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to read layout");
                return None;
            }
        };

        let record: LayoutRecord = match serde_json::from_str(&text) {
            Ok(record) => record,
            Err(e) => {
                let e = StorageError::from(e);
                tracing::warn!(key = %self.key, code = %e.code(), error = %e, "Stored layout is corrupted, ignoring");
                return None;
            }
        };

        let (layout, warnings) = self.repair(record);
        for warning in &warnings {
            tracing::warn!(?warning, "Stored layout repaired");
        }
        tracing::info!(
            key = %self.key,
            tables = layout.tables.len(),
            repairs = warnings.len(),
            "Layout loaded"
        );
        Some((layout, warnings))
    }

    /// Remove the stored layout. Returns true when something was removed.
    pub fn clear(&self) -> EditorResult<bool> {
        Ok(self.store.remove(&self.key)?)
    }

    fn repair(&self, record: LayoutRecord) -> (Layout, Vec<LoadWarning>) {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        let mut tables = Vec::with_capacity(record.tables.len());

        for entry in &record.tables {
            if !seen.insert(entry.id) {
                warnings.push(LoadWarning::DuplicateDropped { table_id: entry.id });
                continue;
            }
            if let (_, Some(mismatch)) = entry.reservation_state() {
                warnings.push(LoadWarning::ReservationMismatch {
                    table_id: entry.id,
                    mismatch,
                });
            }
            if entry.seats < 1 {
                warnings.push(LoadWarning::SeatsRaised { table_id: entry.id });
            }

            let mut table = entry.to_table();
            let clamped = self.bounds.clamp_size(table.size);
            if clamped != table.size {
                warnings.push(LoadWarning::SizeClamped { table_id: entry.id });
                table.size = clamped;
            }
            tables.push(table);
        }

        let layout = Layout {
            tables,
            background_ref: record.background_image,
        };
        (layout, warnings)
    }
}
