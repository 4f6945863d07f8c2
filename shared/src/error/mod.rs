//! Unified error codes for the floor-plan editor
//!
//! - [`ErrorCode`]: Standardized error codes for every rejection the editor
//!   core can report
//! - [`ErrorCategory`]: Classification of errors by domain
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 6xxx: Layout errors
//! - 7xxx: Table errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{ErrorCategory, ErrorCode};
//!
//! let code = ErrorCode::TableNotFound;
//! assert_eq!(code.code(), 7001);
//! assert_eq!(code.category(), ErrorCategory::Table);
//! ```

mod category;
mod codes;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
