//! Component-level route guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The edge filter only sees cookies at navigation time. The client guard
//! re-checks on every auth change (e.g. after logout) and may redirect on
//! its own. Leptos wiring lives in the client crate; the rules live here.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use crate::HOME_PATH;
use crate::status::AuthStatus;

/// What a guarded subtree should do for the current auth status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Status still resolving: show the fallback, no redirect.
    Pending,
    /// Leave for this path and render nothing.
    Redirect(String),
    /// Render the children.
    Render,
}

impl GuardOutcome {
    /// Decide for a guard with `require_auth` and `redirect_to`.
    ///
    /// Viewers that are signed in but hit a guest-only subtree
    /// (`require_auth = false`) go to the dashboard.
    #[must_use]
    pub fn decide(require_auth: bool, status: AuthStatus, redirect_to: &str) -> Self {
        match status {
            AuthStatus::Loading => Self::Pending,
            AuthStatus::Unauthenticated if require_auth => Self::Redirect(redirect_to.to_owned()),
            AuthStatus::Authenticated if !require_auth => Self::Redirect(HOME_PATH.to_owned()),
            AuthStatus::Authenticated | AuthStatus::Unauthenticated => Self::Render,
        }
    }
}

/// Ensures a redirect fires at most once per transition.
///
/// The guard's effect re-runs whenever the auth signal changes, and a
/// repeated `Unauthenticated` notification would otherwise navigate again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    issued: Option<String>,
}

impl RedirectLatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Target to navigate to now, if any.
    ///
    /// Returns `None` for non-redirect outcomes (which re-arm the latch), for
    /// a redirect already issued since the last re-arm, and for a redirect
    /// to the page the viewer is already on.
    pub fn issue(&mut self, outcome: &GuardOutcome, current_path: &str) -> Option<String> {
        let GuardOutcome::Redirect(target) = outcome else {
            self.issued = None;
            return None;
        };
        if self.issued.as_deref() == Some(target.as_str()) || target == current_path {
            return None;
        }
        self.issued = Some(target.clone());
        Some(target.clone())
    }
}
