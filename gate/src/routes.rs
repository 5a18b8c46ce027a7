//! Edge route rules: which paths the filter sees and where it redirects.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server runs [`RouteConfig::evaluate`] once per navigation, before any
//! page renders, using only the request path and the `auth_token` cookie.
//! The matcher is derived from the same prefixes the rules protect, so the
//! two can never drift apart: the login prefix is always matched, which keeps
//! the "signed-in viewer hits /auth" rule reachable.

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::token::SessionToken;
use crate::{HOME_PATH, LOGIN_PATH};

/// Error returned by [`RouteConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("route prefix must not be empty")]
    EmptyPrefix,
    #[error("route prefix {0:?} must start with '/' and name at least one segment")]
    InvalidPrefix(String),
    #[error("login prefix {login:?} overlaps protected prefix {protected:?}")]
    OverlappingPrefix { login: String, protected: String },
    #[error("redirect target {0:?} would itself be redirected")]
    RedirectLoop(String),
}

/// Decision for a single inbound request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteOutcome {
    /// Forward to the page router unchanged.
    Pass,
    /// Answer with a redirect to this path.
    Redirect(String),
}

/// Route protection rules for the edge filter.
///
/// Only the edge filter reads this. The client's guarded routes and the
/// `RouteGuard` defaults are compiled against [`LOGIN_PATH`], [`HOME_PATH`]
/// and the default prefixes, so a loaded override that changes them leaves
/// the two sides disagreeing until the client routes are changed to match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Login screen prefix. Signed-in viewers are bounced off it.
    pub login_prefix: String,
    /// Ordered prefixes that require a session token.
    pub protected_prefixes: Vec<String>,
    /// Target for unauthenticated requests to a protected prefix.
    pub login_redirect: String,
    /// Target for authenticated requests to the login prefix.
    pub home_redirect: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_prefix: LOGIN_PATH.to_owned(),
            protected_prefixes: ["/dashboard", "/profile", "/projects", "/services"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            login_redirect: LOGIN_PATH.to_owned(),
            home_redirect: HOME_PATH.to_owned(),
        }
    }
}

impl RouteConfig {
    /// Check prefixes are well formed and no redirect target bounces again.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_prefix(&self.login_prefix)?;
        for prefix in &self.protected_prefixes {
            check_prefix(prefix)?;
            if under_prefix(&self.login_prefix, prefix) || under_prefix(prefix, &self.login_prefix) {
                return Err(ConfigError::OverlappingPrefix {
                    login: self.login_prefix.clone(),
                    protected: prefix.clone(),
                });
            }
        }

        // An unauthenticated viewer sent to `login_redirect` must pass through,
        // and so must an authenticated viewer sent to `home_redirect`.
        if self.evaluate(&self.login_redirect, None) != RouteOutcome::Pass {
            return Err(ConfigError::RedirectLoop(self.login_redirect.clone()));
        }
        if under_prefix(&self.home_redirect, &self.login_prefix) {
            return Err(ConfigError::RedirectLoop(self.home_redirect.clone()));
        }
        Ok(())
    }

    /// Whether `path` invokes the filter at all.
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        under_prefix(path, &self.login_prefix) || self.is_protected(path)
    }

    /// Whether `path` sits under one of the protected prefixes.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| under_prefix(path, prefix))
    }

    /// Decide the outcome for `path` given the request's token.
    ///
    /// Pure: identical input always yields the identical outcome.
    #[must_use]
    pub fn evaluate(&self, path: &str, token: Option<&SessionToken>) -> RouteOutcome {
        if !self.matches(path) {
            return RouteOutcome::Pass;
        }
        if under_prefix(path, &self.login_prefix) && token.is_some() {
            return RouteOutcome::Redirect(self.home_redirect.clone());
        }
        if self.is_protected(path) && token.is_none() {
            return RouteOutcome::Redirect(self.login_redirect.clone());
        }
        RouteOutcome::Pass
    }
}

/// Segment-aware prefix match: `/dashboard` covers `/dashboard` and
/// `/dashboard/x`, not `/dashboardx`.
#[must_use]
pub fn under_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

fn check_prefix(prefix: &str) -> Result<(), ConfigError> {
    if prefix.is_empty() {
        return Err(ConfigError::EmptyPrefix);
    }
    if !prefix.starts_with('/') || prefix.trim_end_matches('/').is_empty() {
        return Err(ConfigError::InvalidPrefix(prefix.to_owned()));
    }
    Ok(())
}
