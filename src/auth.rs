//! Role capability consumed by the store's mutation boundary.
//!
//! Authorization is enforced where the data changes, not in the calling UI:
//! every mutating operation on [`crate::reports::ReportStore`] takes a
//! [`UserRole`] and rejects callers without the admin capability. Read
//! operations are never gated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Viewer,
}

impl UserRole {
    /// Whether this role may create, update, delete or reorder reports.
    pub fn can_modify(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Viewer => write!(f, "viewer"),
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "viewer" => Ok(UserRole::Viewer),
            other => Err(format!("invalid role '{}', expected admin or viewer", other)),
        }
    }
}
