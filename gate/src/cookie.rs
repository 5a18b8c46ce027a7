//! Minimal `Cookie` header parsing for the browser-side cookie adapter.
//!
//! The server reads cookies through `axum_extra`'s `CookieJar`; this helper
//! covers `document.cookie`, which hands back the same `name=value; ...`
//! shape as a plain string.
//!
//! Values are percent-encoded on write and decoded on read, the same
//! encoding `CookieJar` applies on the server, so an opaque token survives
//! the round trip through either side.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;

use crate::token::SessionToken;

/// Find cookie `name` in a raw `Cookie` header string.
///
/// Pairs without `=` are skipped. The first occurrence wins, matching what
/// browsers send first for the most specific path. The value is returned as
/// stored, still encoded.
#[must_use]
pub fn read_cookie<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim())
}

/// Session token carried in cookie `name`, if present and non-empty.
///
/// A value that does not percent-decode to UTF-8 counts as absent.
#[must_use]
pub fn token_from_cookie_header(header: &str, name: &str) -> Option<SessionToken> {
    let raw = read_cookie(header, name)?;
    let decoded = urlencoding::decode(raw).ok()?;
    SessionToken::new(decoded.into_owned())
}

/// `Set-Cookie`-style string that stores `token` under `name` for the whole site.
#[must_use]
pub fn set_cookie_value(name: &str, token: &SessionToken, secure: bool) -> String {
    let mut out = format!("{name}={}; Path=/; SameSite=Lax", urlencoding::encode(token.as_str()));
    if secure {
        out.push_str("; Secure");
    }
    out
}

/// `Set-Cookie`-style string that expires cookie `name` immediately.
#[must_use]
pub fn clear_cookie_value(name: &str) -> String {
    format!("{name}=; Path=/; Max-Age=0; SameSite=Lax")
}
