use super::*;
use std::sync::Arc;

use gate::{MemoryTokens, MirroredTokens};
use leptos::reactive::owner::Owner;

fn header<'a>(headers: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.as_str())
}

// =============================================================================
// urls and status mapping
// =============================================================================

#[test]
fn join_url_inserts_single_slash() {
    assert_eq!(join_url("/api", "dashboard"), "/api/dashboard");
    assert_eq!(join_url("/api/", "/dashboard"), "/api/dashboard");
    assert_eq!(join_url("https://api.example.test/v1", "auth/login"), "https://api.example.test/v1/auth/login");
}

#[test]
fn status_error_maps_codes() {
    assert_eq!(status_error(200), None);
    assert_eq!(status_error(204), None);
    assert_eq!(status_error(401), Some(ApiError::Unauthorized));
    assert_eq!(status_error(500), Some(ApiError::Status(500)));
}

#[test]
fn api_error_messages_are_readable() {
    assert_eq!(ApiError::Status(503).to_string(), "request failed: 503");
    assert_eq!(ApiError::Unauthorized.to_string(), "not authorized");
}

// =============================================================================
// headers
// =============================================================================

#[test]
fn headers_with_token_carry_bearer() {
    let tokens = MemoryTokens::with_token(SessionToken::new("abc").expect("token"));
    let headers = headers_from(&tokens);
    assert_eq!(header(&headers, "Authorization"), Some("Bearer abc"));
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn headers_without_token_omit_authorization() {
    let headers = headers_from(&MemoryTokens::new());
    assert_eq!(header(&headers, "Authorization"), None);
    assert_eq!(header(&headers, "Content-Type"), Some("application/json"));
}

#[test]
fn request_headers_without_storage_is_content_type_only() {
    assert_eq!(request_headers(), vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn context_headers_use_auth_context_token() {
    Owner::new().with(|| {
        let tokens = Arc::new(MirroredTokens::new(
            MemoryTokens::with_token(SessionToken::new("fresh").expect("token")),
            MemoryTokens::with_token(SessionToken::new("old").expect("token")),
        ));
        let auth = AuthContext::new(tokens.clone());
        let headers = context_headers(Some(&auth));
        assert_eq!(header(&headers, "Authorization"), Some("Bearer fresh"));
        assert_eq!(tokens.mirror().read().map(|t| t.as_str().to_owned()), Some("fresh".to_owned()));
    });
}

#[test]
fn context_headers_without_context_match_request_headers() {
    assert_eq!(context_headers(None), request_headers());
}

// =============================================================================
// FetchState
// =============================================================================

#[test]
fn fetch_state_starts_loading() {
    let state = FetchState::<u32>::default();
    assert!(state.loading);
    assert!(state.data.is_none());
    assert!(state.error.is_none());
}

#[test]
fn fetch_state_finish_ok_stores_data() {
    let mut state = FetchState::default();
    state.finish(Ok(7_u32));
    assert!(!state.loading);
    assert_eq!(state.data, Some(7));
    assert_eq!(state.error, None);
}

#[test]
fn fetch_state_finish_err_keeps_prior_data() {
    let mut state = FetchState { loading: true, error: None, data: Some(1_u32) };
    state.finish(Err(ApiError::Status(502)));
    assert!(!state.loading);
    assert_eq!(state.data, Some(1));
    assert_eq!(state.error.as_deref(), Some("request failed: 502"));
}

#[test]
fn only_unauthorized_triggers_sign_out() {
    assert!(should_sign_out(&Err::<(), _>(ApiError::Unauthorized)));
    assert!(!should_sign_out(&Err::<(), _>(ApiError::Status(403))));
    assert!(!should_sign_out(&Ok::<_, ApiError>(())));
}
