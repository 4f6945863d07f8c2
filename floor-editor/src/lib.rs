//! Floor-plan editor and table reservation core
//!
//! # 架构概述
//!
//! An admin lays out tables over a background image in a fixed logical
//! canvas; a guest picks an unreserved table and books it. Rendering, file
//! pickers and page chrome live in the host; this crate owns the state and
//! the rules.
//!
//! # 模块结构
//!
//! ```text
//! floor-editor/src/
//! ├── config.rs       # Canvas, size bounds, defaults, storage key
//! ├── coords.rs       # Viewport ↔ logical canvas mapping
//! ├── store.rs        # Table entity store
//! ├── drag.rs         # Drag state machine
//! ├── mode.rs         # Role, add-intent, selection
//! ├── reservation.rs  # Reservation form and lifecycle
//! ├── background.rs   # Background image → data URI
//! ├── persistence/    # Storage backends and layout gateway
//! ├── session.rs      # Facade driven by host events
//! ├── error.rs
//! └── logger.rs
//! ```

pub mod background;
pub mod config;
pub mod coords;
pub mod drag;
pub mod error;
pub mod logger;
pub mod mode;
pub mod persistence;
pub mod reservation;
pub mod session;
pub mod store;

// Re-export 公共类型
pub use config::{EditorConfig, SizeBounds};
pub use coords::CoordinateMapper;
pub use drag::{DragController, DragOutcome, DragState};
pub use error::{EditorError, EditorResult};
pub use mode::{ModeController, actions};
pub use persistence::{
    KeyValueStore, LoadWarning, MemoryStorage, PersistenceGateway, RedbStorage, StorageError,
};
pub use reservation::{CancelRequest, FormField, ReservationForm, ReservationManager};
pub use session::{ChangeEvent, EditorSession, EditorSnapshot, TableView};
pub use store::{EntityStore, LayoutStats};

// Re-export shared types the API is expressed in
pub use shared::{ErrorCategory, ErrorCode};
pub use shared::models::{
    FloorTable, Layout, Point, Rect, Reservation, ReservationState, Role, Size, TableId,
    TableShape, TableUpdate,
};

// Re-export logger functions
pub use logger::{init_logger, init_logger_with_file};
