//! REST API helpers for calling the external backend with the session token.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! UI behavior without crashing hydration. A missing token is not an error:
//! the request simply goes out without `Authorization`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gate::{SessionToken, TokenProvider, auth_headers};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{LoginRequest, LoginResponse};
use crate::state::auth::AuthContext;
use crate::util::storage::LocalStorageTokens;

/// Base URL of the external REST API, fixed at build time.
pub const API_BASE: &str = match option_env!("FOLIO_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Error returned by the request helpers.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed: {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Join [`API_BASE`] and `path` with exactly one slash between them.
pub fn api_url(path: &str) -> String {
    join_url(API_BASE, path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        401 => Some(ApiError::Unauthorized),
        other => Some(ApiError::Status(other)),
    }
}

/// Headers for an outbound API request.
///
/// Reads the local-storage copy of the token. With no storage facility
/// (SSR, pre-hydration) this yields only `Content-Type`.
pub fn request_headers() -> Vec<(&'static str, String)> {
    headers_from(&LocalStorageTokens)
}

fn headers_from(tokens: &dyn TokenProvider) -> Vec<(&'static str, String)> {
    auth_headers(tokens.read().as_ref())
}

/// Headers built from the provided auth context, so the bearer value comes
/// from the same mirrored store the guards resolve against. Without a
/// context this falls back to [`request_headers`].
pub fn context_headers(auth: Option<&AuthContext>) -> Vec<(&'static str, String)> {
    auth.map_or_else(request_headers, |auth| auth_headers(auth.token().as_ref()))
}

/// `GET {api}/{path}` decoded as JSON.
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status, or a body that
/// does not decode as `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    get_json_with(path, request_headers()).await
}

async fn get_json_with<T: DeserializeOwned>(path: &str, headers: Vec<(&'static str, String)>) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = headers
            .into_iter()
            .fold(gloo_net::http::Request::get(&api_url(path)), |req, (name, value)| {
                req.header(name, &value)
            });
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if let Some(err) = status_error(resp.status()) {
            return Err(err);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, headers);
        Err(ApiError::Unavailable)
    }
}

/// `POST {api}/{path}` with a JSON body, decoded as JSON.
///
/// # Errors
///
/// Same as [`get_json`], plus a body that fails to serialize.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = request_headers()
            .into_iter()
            .fold(gloo_net::http::Request::post(&api_url(path)), |req, (name, value)| {
                req.header(name, &value)
            })
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if let Some(err) = status_error(resp.status()) {
            return Err(err);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session token via `POST {api}/auth/login`.
///
/// Token issuance is the backend's job; this only carries the result.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] for rejected credentials and
/// [`ApiError::Decode`] when the backend answers with an empty token.
pub async fn login(email: &str, password: &str) -> Result<SessionToken, ApiError> {
    let body = LoginRequest { email: email.to_owned(), password: password.to_owned() };
    let resp: LoginResponse = post_json("auth/login", &body).await?;
    SessionToken::new(resp.token).ok_or_else(|| ApiError::Decode("empty token".to_owned()))
}

// =============================================================================
// FETCH STATE
// =============================================================================

/// Loading/error/data triple held by data-fetching views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { loading: true, error: None, data: None }
    }
}

impl<T> FetchState<T> {
    /// Settle with the request result. Prior data survives an error.
    pub fn finish(&mut self, result: Result<T, ApiError>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}

/// Whether a failed request means the stored token is no longer accepted.
pub fn should_sign_out(result: &Result<impl Sized, ApiError>) -> bool {
    matches!(result, Err(ApiError::Unauthorized))
}

/// Fetch `GET {api}/{path}` once on mount and expose its state.
///
/// A `401` signs the viewer out so any enclosing `RouteGuard` redirects.
pub fn use_fetch<T>(path: &str) -> RwSignal<FetchState<T>>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let state = RwSignal::new(FetchState::<T>::default());
    let auth = use_context::<AuthContext>();
    let headers = context_headers(auth.as_ref());

    #[cfg(feature = "hydrate")]
    {
        let path = path.to_owned();
        leptos::task::spawn_local(async move {
            let result = get_json_with::<T>(&path, headers).await;
            if should_sign_out(&result) {
                if let Some(auth) = &auth {
                    auth.sign_out();
                }
            }
            state.update(|s| s.finish(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, auth, headers);
    }

    state
}
