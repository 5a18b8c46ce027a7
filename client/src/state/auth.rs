//! Auth-session state for the current browser viewer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and token-aware components to coordinate login
//! redirects and identity-dependent rendering. The context is provided once
//! by `App`, so tests and SSR can inject any [`TokenProvider`] instead of
//! components reading browser storage directly.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use gate::{AuthStatus, SessionToken, TokenProvider};
use leptos::prelude::*;

/// Authentication state derived from the token store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub status: AuthStatus,
}

impl AuthState {
    #[must_use]
    pub fn is_loading(self) -> bool {
        self.status.is_loading()
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        self.status.is_authenticated()
    }
}

/// Reactive auth state bundled with the token store it is derived from.
#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    tokens: Arc<dyn TokenProvider>,
}

impl AuthContext {
    /// New context in the `Loading` state. Call [`AuthContext::resolve`] to settle it.
    pub fn new(tokens: Arc<dyn TokenProvider>) -> Self {
        Self { state: RwSignal::new(AuthState::default()), tokens }
    }

    /// Tracked read of the current status.
    pub fn status(&self) -> AuthStatus {
        self.state.with(|s| s.status)
    }

    /// Untracked read, for event handlers and effects that must not subscribe.
    pub fn status_untracked(&self) -> AuthStatus {
        self.state.with_untracked(|s| s.status)
    }

    /// Resolve status from token presence.
    pub fn resolve(&self) -> AuthStatus {
        let status = AuthStatus::from_token(self.tokens.read().as_ref());
        self.set_status(status);
        status
    }

    /// Persist `token` to every slot and mark the viewer authenticated.
    pub fn sign_in(&self, token: &SessionToken) {
        self.tokens.write(token);
        self.set_status(AuthStatus::Authenticated);
    }

    /// Drop the token everywhere and mark the viewer unauthenticated.
    pub fn sign_out(&self) {
        self.tokens.clear();
        self.set_status(AuthStatus::Unauthenticated);
    }

    /// Current token, read through the provider so a stale mirror is repaired.
    pub fn token(&self) -> Option<SessionToken> {
        self.tokens.read()
    }

    fn set_status(&self, status: AuthStatus) {
        if self.status_untracked() != status {
            self.state.set(AuthState { status });
        }
    }
}

/// Create the auth context, provide it, and resolve it once mounted.
///
/// Resolution runs in an effect so the server render and the first
/// hydrated render agree on `Loading`.
pub fn provide_auth(tokens: Arc<dyn TokenProvider>) -> AuthContext {
    let auth = AuthContext::new(tokens);
    provide_context(auth.clone());

    let resolver = auth.clone();
    Effect::new(move || {
        resolver.resolve();
    });
    auth
}

/// The auth context provided by `App`.
///
/// # Panics
///
/// Panics if called outside a component tree rooted at `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
