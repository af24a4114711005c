//! User roles shared between the API and its clients.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by every account and encoded into its token
///
/// Serialized in lowercase (`"user"`, `"admin"`), matching the stored
/// `users.json` format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Registered member; may read protected content
    #[default]
    User,
    /// Site administrator; may mutate gallery and roster content
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
