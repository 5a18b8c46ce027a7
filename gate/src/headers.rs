//! Outbound header set for calls to the external REST API.

#[cfg(test)]
#[path = "headers_test.rs"]
mod tests;

use crate::token::SessionToken;

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Headers for an API request carrying `token`, if any.
///
/// `Content-Type: application/json` is always present. `Authorization` is
/// added only with a token and is never emitted with an empty value.
#[must_use]
pub fn auth_headers(token: Option<&SessionToken>) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(token) = token {
        headers.push((AUTHORIZATION, bearer_value(token)));
    }
    headers.push((CONTENT_TYPE, JSON_CONTENT_TYPE.to_owned()));
    headers
}

/// `Bearer <token>` header value.
#[must_use]
pub fn bearer_value(token: &SessionToken) -> String {
    format!("Bearer {}", token.as_str())
}
