//! Edge route filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs ahead of page rendering for every page request. Only requests under
//! a configured prefix are inspected; everything else is forwarded untouched.
//! The filter never mutates the token, it only reads the `auth_token` cookie.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use gate::{RouteOutcome, SessionToken, TOKEN_SLOT};

use crate::state::AppState;

/// Session token from the request cookies. Malformed or empty means absent.
pub(crate) fn token_from_jar(jar: &CookieJar) -> Option<SessionToken> {
    jar.get(TOKEN_SLOT)
        .map(Cookie::value)
        .and_then(SessionToken::new)
}

/// Axum middleware applying [`gate::RouteConfig::evaluate`] to each request.
pub async fn edge_filter(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let token = token_from_jar(&jar);

    match state.routes.evaluate(&path, token.as_ref()) {
        RouteOutcome::Pass => next.run(request).await,
        RouteOutcome::Redirect(target) => {
            tracing::debug!(%path, %target, authenticated = token.is_some(), "edge filter redirect");
            Redirect::temporary(&target).into_response()
        }
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;
