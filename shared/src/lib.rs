//! Shared types for the floor-plan editor
//!
//! Data model (tables, reservations, layout and its persisted record),
//! geometry primitives, roles, unified error codes and id utilities.
//! Consumed by `floor-editor` and by whatever renders its snapshots.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorCategory, ErrorCode, InvalidErrorCode};
pub use models::{
    FloorTable, Layout, LayoutRecord, Point, Rect, Reservation, ReservationState, Role, Size,
    TableId, TableRecord, TableShape, TableUpdate,
};
