//! Common types for the shared crate
//!
//! Utility types used across the editor

use serde::{Deserialize, Serialize};

/// Permission type
///
/// Permissions are `resource:action` strings. `*` grants everything and
/// `resource:*` grants every action on one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission(pub String);

impl Permission {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Check if this permission grants access to the given resource action
    pub fn grants(&self, action: &str) -> bool {
        if self.0 == "*" {
            return true;
        }
        if let Some(prefix) = self.0.strip_suffix(":*") {
            return action
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with(':'));
        }
        self.0 == action
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
