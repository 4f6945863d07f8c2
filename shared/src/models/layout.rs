//! Layout Model
//!
//! [`Layout`] is the in-memory aggregate; [`LayoutRecord`] is its persisted
//! shape. The record keeps the browser-era field names (`number`, `type`,
//! `seats`, `reserved`, `reservationName`, ...) so previously saved layouts
//! stay readable.

use serde::{Deserialize, Serialize};

use super::floor_table::{FloorTable, Reservation, ReservationState, TableId, TableShape};
use super::geometry::{Point, Size};

/// Tables plus the background reference: the unit that gets persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub tables: Vec<FloorTable>,
    /// Opaque reference (e.g. a data URI); never decoded here
    pub background_ref: Option<String>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty() && self.background_ref.is_none()
    }
}

/// Persisted layout record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRecord {
    pub tables: Vec<TableRecord>,
    #[serde(default)]
    pub background_image: Option<String>,
}

/// Persisted table record (flat, reservation denormalized)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub id: TableId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub number: i64,
    #[serde(rename = "type")]
    pub shape: TableShape,
    /// Signed so hand-edited or legacy payloads with `0`/negative seats
    /// still parse and can be repaired
    pub seats: i64,
    pub reserved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reservation_phone: Option<String>,
}

/// Disagreement between a record's `reserved` flag and its reservation fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationMismatch {
    /// `reserved = true` but at least one of name/time/phone is missing
    MissingFields,
    /// `reserved = false` but some reservation fields are present
    StrayFields,
}

impl From<&FloorTable> for TableRecord {
    fn from(table: &FloorTable) -> Self {
        let reservation = table.reservation.reservation();
        Self {
            id: table.id,
            x: table.position.x,
            y: table.position.y,
            width: table.size.width,
            height: table.size.height,
            number: table.display_number,
            shape: table.shape,
            seats: i64::from(table.seat_count),
            reserved: reservation.is_some(),
            reservation_name: reservation.map(|r| r.guest_name.clone()),
            reservation_time: reservation.map(|r| r.time.clone()),
            reservation_phone: reservation.map(|r| r.phone.clone()),
        }
    }
}

impl TableRecord {
    /// Rebuild the reservation variant, treating `reserved` as the source of
    /// truth. Missing fields of a reserved record become empty strings.
    pub fn reservation_state(&self) -> (ReservationState, Option<ReservationMismatch>) {
        let fields = [
            &self.reservation_name,
            &self.reservation_time,
            &self.reservation_phone,
        ];

        if self.reserved {
            let mismatch = fields
                .iter()
                .any(|f| f.is_none())
                .then_some(ReservationMismatch::MissingFields);
            let reservation = Reservation::new(
                self.reservation_name.clone().unwrap_or_default(),
                self.reservation_time.clone().unwrap_or_default(),
                self.reservation_phone.clone().unwrap_or_default(),
            );
            (ReservationState::Reserved(reservation), mismatch)
        } else {
            let mismatch = fields
                .iter()
                .any(|f| f.is_some())
                .then_some(ReservationMismatch::StrayFields);
            (ReservationState::Unreserved, mismatch)
        }
    }

    /// Convert to the in-memory entity without any bounds repair.
    ///
    /// Seat counts below one are raised to one.
    pub fn to_table(&self) -> FloorTable {
        let (reservation, _) = self.reservation_state();
        FloorTable {
            id: self.id,
            position: Point::new(self.x, self.y),
            size: Size::new(self.width, self.height),
            display_number: self.number,
            shape: self.shape,
            seat_count: u32::try_from(self.seats.max(1)).unwrap_or(u32::MAX),
            reservation,
        }
    }
}

impl From<&Layout> for LayoutRecord {
    fn from(layout: &Layout) -> Self {
        Self {
            tables: layout.tables.iter().map(TableRecord::from).collect(),
            background_image: layout.background_ref.clone(),
        }
    }
}
