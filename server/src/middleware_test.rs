use super::*;
use axum::Router;
use axum::body::Body;
use axum::http::{StatusCode, header};
use gate::RouteConfig;
use tower::ServiceExt;

fn pages() -> Router {
    Router::new().fallback(|| async { "page" })
}

fn gated() -> Router {
    crate::routes::app(AppState::new(RouteConfig::default()), pages())
}

async fn send(router: Router, path: &str, cookie: Option<&str>) -> Response {
    let mut builder = axum::http::Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(resp: &Response) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

// =============================================================================
// token_from_jar
// =============================================================================

#[test]
fn token_from_jar_reads_auth_cookie() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::COOKIE, "theme=dark; auth_token=abc".parse().unwrap());
    let jar = CookieJar::from_headers(&headers);
    assert_eq!(token_from_jar(&jar).map(|t| t.as_str().to_owned()), Some("abc".to_owned()));
}

#[test]
fn token_from_jar_empty_value_is_absent() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::COOKIE, "auth_token=".parse().unwrap());
    assert!(token_from_jar(&CookieJar::from_headers(&headers)).is_none());
}

#[test]
fn token_from_jar_decodes_like_browser_adapter() {
    let token = SessionToken::new("a;b c").unwrap();
    let set = gate::cookie::set_cookie_value(TOKEN_SLOT, &token, false);
    let pair = set.split(';').next().unwrap();
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(header::COOKIE, pair.parse().unwrap());
    assert_eq!(token_from_jar(&CookieJar::from_headers(&headers)), Some(token));
}

// =============================================================================
// edge_filter
// =============================================================================

#[tokio::test]
async fn unmatched_paths_pass_regardless_of_cookie() {
    for path in ["/", "/about", "/blog/hello", "/dashboardx"] {
        for cookie in [None, Some("auth_token=abc")] {
            let resp = send(gated(), path, cookie).await;
            assert_eq!(resp.status(), StatusCode::OK, "{path} {cookie:?}");
        }
    }
}

#[tokio::test]
async fn protected_without_cookie_redirects_to_login() {
    for path in ["/dashboard", "/profile/edit", "/projects/7", "/services"] {
        let resp = send(gated(), path, None).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&resp), Some("/auth"), "{path}");
    }
}

#[tokio::test]
async fn protected_with_cookie_passes() {
    let resp = send(gated(), "/dashboard", Some("auth_token=abc")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_with_cookie_redirects_to_dashboard() {
    let resp = send(gated(), "/auth", Some("auth_token=abc")).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/dashboard"));
}

#[tokio::test]
async fn login_without_cookie_passes() {
    let resp = send(gated(), "/auth", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_cookie_counts_as_absent() {
    let resp = send(gated(), "/profile", Some("auth_token=")).await;
    assert_eq!(location(&resp), Some("/auth"));
}

#[tokio::test]
async fn malformed_cookie_header_counts_as_absent() {
    let resp = send(gated(), "/projects", Some(";;==;garbage")).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), Some("/auth"));
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let resp = send(gated(), "/services?tab=pricing", None).await;
    assert_eq!(location(&resp), Some("/auth"));
}

#[tokio::test]
async fn repeated_requests_get_identical_outcomes() {
    let first = send(gated(), "/dashboard", None).await;
    let second = send(gated(), "/dashboard", None).await;
    assert_eq!(first.status(), second.status());
    assert_eq!(location(&first), location(&second));
}

#[tokio::test]
async fn healthz_is_never_filtered() {
    let resp = send(gated(), "/healthz", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
