//! Floor Table Model

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Size};

/// Table id. Stays a JavaScript-safe integer so the persisted record can be
/// read back by a browser front end.
pub type TableId = i64;

/// Table shape (桌型). Rendering hint only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    #[default]
    Rectangle,
    Round,
}

impl TableShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableShape::Rectangle => "rectangle",
            TableShape::Round => "round",
        }
    }
}

impl std::fmt::Display for TableShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Guest reservation details (预订信息)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub guest_name: String,
    /// Free-form time string as entered (e.g. `2024-01-01T19:00`)
    pub time: String,
    pub phone: String,
}

impl Reservation {
    pub fn new(
        guest_name: impl Into<String>,
        time: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            guest_name: guest_name.into(),
            time: time.into(),
            phone: phone.into(),
        }
    }
}

/// Reservation sub-state of a table.
///
/// `Unreserved` is the canonical "available" state; there is no separate
/// reserved flag that could disagree with it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReservationState {
    #[default]
    Unreserved,
    Reserved(Reservation),
}

impl ReservationState {
    #[inline]
    pub fn is_reserved(&self) -> bool {
        matches!(self, ReservationState::Reserved(_))
    }

    pub fn reservation(&self) -> Option<&Reservation> {
        match self {
            ReservationState::Reserved(r) => Some(r),
            ReservationState::Unreserved => None,
        }
    }
}

/// Floor table entity (桌台), positioned in logical canvas space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorTable {
    pub id: TableId,
    /// Top-left corner in logical canvas coordinates
    pub position: Point,
    /// Logical canvas units, kept inside the configured size bounds
    pub size: Size,
    /// Number shown to staff and guests. Operator-editable, not unique.
    pub display_number: i64,
    pub shape: TableShape,
    pub seat_count: u32,
    pub reservation: ReservationState,
}

impl FloorTable {
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.reservation.is_reserved()
    }

    /// Logical bounding box
    pub fn bounds(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }
}

/// Update table payload
///
/// Every `Some` field is merged into the table; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableUpdate {
    pub position: Option<Point>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub display_number: Option<i64>,
    pub shape: Option<TableShape>,
    pub seat_count: Option<u32>,
}

impl TableUpdate {
    pub fn is_empty(&self) -> bool {
        self == &TableUpdate::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&TableShape::Round).unwrap(),
            "\"round\""
        );
        let shape: TableShape = serde_json::from_str("\"rectangle\"").unwrap();
        assert_eq!(shape, TableShape::Rectangle);
    }

    #[test]
    fn test_reservation_state_accessors() {
        let free = ReservationState::Unreserved;
        assert!(!free.is_reserved());
        assert!(free.reservation().is_none());

        let taken = ReservationState::Reserved(Reservation::new("Alice", "19:00", "555-0100"));
        assert!(taken.is_reserved());
        assert_eq!(taken.reservation().unwrap().guest_name, "Alice");
    }

    #[test]
    fn test_empty_update() {
        assert!(TableUpdate::default().is_empty());
        let update = TableUpdate {
            seat_count: Some(6),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
