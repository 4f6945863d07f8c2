//! Role Model

use serde::{Deserialize, Serialize};

use crate::types::Permission;

/// Editor role (角色)
///
/// A client-side mode flag, not an authentication boundary: whoever drives
/// the editor may switch freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Lays out tables and manages the floor plan
    #[default]
    Admin,
    /// Picks an unreserved table and books it
    Guest,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Guest => "guest",
        }
    }

    /// The other role
    pub fn toggled(&self) -> Role {
        match self {
            Role::Admin => Role::Guest,
            Role::Guest => Role::Admin,
        }
    }

    /// Permission strings granted to this role
    pub fn permissions(&self) -> Vec<Permission> {
        match self {
            Role::Admin => vec![
                Permission::new("tables:*"),
                Permission::new("layout:*"),
                Permission::new("reservations:cancel"),
            ],
            Role::Guest => vec![
                Permission::new("tables:read"),
                Permission::new("reservations:*"),
            ],
        }
    }

    /// Check whether this role may perform `action` (e.g. `tables:create`)
    pub fn can(&self, action: &str) -> bool {
        self.permissions().iter().any(|p| p.grants(action))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
