//! Unified error codes for the floor-plan editor
//!
//! Error codes are shared by the editor core and the render layer, which
//! maps them to user-visible copy. They are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 6xxx: Layout errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor error code
///
/// Serialized as the bare number so the render layer can switch on it
/// without knowing the Rust variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 6xxx: Layout ====================
    /// No background image has been provided yet
    NoBackgroundImage = 6001,
    /// Uploaded file is not an image
    UnsupportedImageFormat = 6002,
    /// Stored layout could not be parsed
    LayoutCorrupted = 6003,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// Table is already reserved
    TableAlreadyReserved = 7002,
    /// Table has no reservation
    TableNotReserved = 7003,
    /// Reservation form is missing name, time or phone
    ReservationIncomplete = 7004,
    /// Seat count must be positive
    InvalidSeatCount = 7005,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9005,

    // ==================== 94xx: Storage ====================
    /// Storage could not be read or written
    StorageUnavailable = 9401,
    /// Storage corrupted (data file damaged)
    StorageCorrupted = 9403,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Layout
            ErrorCode::NoBackgroundImage => "No background image loaded",
            ErrorCode::UnsupportedImageFormat => "File is not a supported image",
            ErrorCode::LayoutCorrupted => "Stored layout is corrupted",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableAlreadyReserved => "Table is already reserved",
            ErrorCode::TableNotReserved => "Table is not reserved",
            ErrorCode::ReservationIncomplete => "Name, time and phone are required",
            ErrorCode::InvalidSeatCount => "Seat count must be at least 1",

            // System
            ErrorCode::ConfigError => "Configuration error",

            // Storage
            ErrorCode::StorageUnavailable => "Storage unavailable",
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2003 => Ok(ErrorCode::AdminRequired),

            // Layout
            6001 => Ok(ErrorCode::NoBackgroundImage),
            6002 => Ok(ErrorCode::UnsupportedImageFormat),
            6003 => Ok(ErrorCode::LayoutCorrupted),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::TableAlreadyReserved),
            7003 => Ok(ErrorCode::TableNotReserved),
            7004 => Ok(ErrorCode::ReservationIncomplete),
            7005 => Ok(ErrorCode::InvalidSeatCount),

            // System
            9005 => Ok(ErrorCode::ConfigError),

            // Storage
            9401 => Ok(ErrorCode::StorageUnavailable),
            9403 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
