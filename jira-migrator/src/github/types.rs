//! GitHub selection types.

use serde::Deserialize;

/// An organization the authenticated user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Organization {
    /// Organization login, e.g. `acme`.
    pub login: String,
}

/// A repository issues are created in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl Repository {
    /// Full repository name in "owner/name" format.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// A repository label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    /// Label name.
    pub name: String,
}
