//! Data models
//!
//! Shared between the editor core and the render layer (via snapshots).
//! Positions and sizes are logical canvas units; table ids are `i64`.

pub mod floor_table;
pub mod geometry;
pub mod layout;
pub mod role;

// Re-exports
pub use floor_table::*;
pub use geometry::*;
pub use layout::*;
pub use role::*;
