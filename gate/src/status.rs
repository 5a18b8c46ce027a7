//! Resolved authentication status.

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::token::SessionToken;

/// Three-state auth view consumed by guards and pages.
///
/// Resolution is synchronous today (a storage read), but `Loading` stays a
/// distinct state so an asynchronous validation step can slot in later
/// without changing consumers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    #[default]
    Loading,
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    /// Resolve from token presence.
    #[must_use]
    pub fn from_token(token: Option<&SessionToken>) -> Self {
        if token.is_some() { Self::Authenticated } else { Self::Unauthenticated }
    }

    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}
