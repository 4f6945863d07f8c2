//! Editor configuration

use shared::models::{Size, TableShape};

use crate::error::{EditorError, EditorResult};

/// Storage key used by earlier builds of the floor plan
pub const DEFAULT_STORAGE_KEY: &str = "restaurantLayout";

/// Inclusive bounds for table width and height (logical units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeBounds {
    pub min: f64,
    pub max: f64,
}

impl SizeBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp one side into `[min, max]`. Non-finite input falls back to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }

    pub fn clamp_size(&self, size: Size) -> Size {
        Size::new(self.clamp(size.width), self.clamp(size.height))
    }

    pub fn contains(&self, size: Size) -> bool {
        (self.min..=self.max).contains(&size.width) && (self.min..=self.max).contains(&size.height)
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self::new(20.0, 200.0)
    }
}

/// Editor configuration
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Fixed logical canvas size. Never follows the viewport.
    pub canvas_size: Size,

    /// Allowed table width/height
    pub size_bounds: SizeBounds,

    /// Size of a freshly placed table
    pub default_table_size: Size,

    /// Seat count of a freshly placed table
    pub default_seats: u32,

    /// Shape of a freshly placed table
    pub default_shape: TableShape,

    /// Key of the layout slot in the storage backend
    pub storage_key: String,

    /// Path of the redb file; `None` keeps the layout in memory only
    pub data_path: Option<String>,

    /// Log level (trace/debug/info/warn/error)
    pub log_level: String,

    /// Directory for rolling log files; `None` logs to stdout
    pub log_dir: Option<String>,
}

impl EditorConfig {
    /// Built-in defaults
    pub fn new() -> Self {
        Self {
            canvas_size: Size::new(1000.0, 700.0),
            size_bounds: SizeBounds::default(),
            default_table_size: Size::new(60.0, 40.0),
            default_seats: 4,
            default_shape: TableShape::Rectangle,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_path: None,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }

    /// Built-in defaults overridden by environment variables
    pub fn from_env() -> Self {
        let defaults = Self::new();
        Self {
            canvas_size: Size::new(
                env_parse("FLOOR_CANVAS_WIDTH").unwrap_or(defaults.canvas_size.width),
                env_parse("FLOOR_CANVAS_HEIGHT").unwrap_or(defaults.canvas_size.height),
            ),
            size_bounds: SizeBounds::new(
                env_parse("FLOOR_TABLE_MIN_SIZE").unwrap_or(defaults.size_bounds.min),
                env_parse("FLOOR_TABLE_MAX_SIZE").unwrap_or(defaults.size_bounds.max),
            ),
            default_table_size: Size::new(
                env_parse("FLOOR_TABLE_DEFAULT_WIDTH").unwrap_or(defaults.default_table_size.width),
                env_parse("FLOOR_TABLE_DEFAULT_HEIGHT")
                    .unwrap_or(defaults.default_table_size.height),
            ),
            default_seats: env_parse("FLOOR_TABLE_DEFAULT_SEATS").unwrap_or(defaults.default_seats),
            default_shape: defaults.default_shape,
            storage_key: std::env::var("FLOOR_STORAGE_KEY").unwrap_or(defaults.storage_key),
            data_path: std::env::var("FLOOR_DATA_PATH").ok().or(defaults.data_path),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: std::env::var("LOG_DIR").ok().or(defaults.log_dir),
        }
    }

    /// Set the logical canvas size
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_size = Size::new(width, height);
        self
    }

    /// Set the table size bounds
    pub fn with_size_bounds(mut self, min: f64, max: f64) -> Self {
        self.size_bounds = SizeBounds::new(min, max);
        self
    }

    /// Set the size of newly placed tables
    pub fn with_default_table_size(mut self, width: f64, height: f64) -> Self {
        self.default_table_size = Size::new(width, height);
        self
    }

    /// Set the seat count of newly placed tables
    pub fn with_default_seats(mut self, seats: u32) -> Self {
        self.default_seats = seats;
        self
    }

    /// Set the storage key
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Persist to a redb file at `path`
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Set the log level and optional log directory
    pub fn with_logging(mut self, level: impl Into<String>, dir: Option<String>) -> Self {
        self.log_level = level.into();
        self.log_dir = dir;
        self
    }

    /// Reject configurations the editor cannot honour
    pub fn validate(&self) -> EditorResult<()> {
        if self.canvas_size.is_degenerate() {
            return Err(EditorError::InvalidConfig(format!(
                "canvas size must be positive, got {}x{}",
                self.canvas_size.width, self.canvas_size.height
            )));
        }
        let bounds = self.size_bounds;
        if !(bounds.min.is_finite() && bounds.max.is_finite()) || bounds.min <= 0.0 {
            return Err(EditorError::InvalidConfig(format!(
                "table size bounds must be positive, got [{}, {}]",
                bounds.min, bounds.max
            )));
        }
        if bounds.min > bounds.max {
            return Err(EditorError::InvalidConfig(format!(
                "minimum table size {} exceeds maximum {}",
                bounds.min, bounds.max
            )));
        }
        if !bounds.contains(self.default_table_size) {
            return Err(EditorError::InvalidConfig(format!(
                "default table size {}x{} is outside [{}, {}]",
                self.default_table_size.width,
                self.default_table_size.height,
                bounds.min,
                bounds.max
            )));
        }
        if self.default_seats == 0 {
            return Err(EditorError::InvalidConfig(
                "default seat count must be at least 1".to_string(),
            ));
        }
        if self.storage_key.is_empty() {
            return Err(EditorError::InvalidConfig(
                "storage key must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
