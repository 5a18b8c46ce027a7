use super::*;

fn token(raw: &str) -> SessionToken {
    SessionToken::new(raw).expect("non-empty token")
}

// =============================================================================
// SessionToken
// =============================================================================

#[test]
fn session_token_rejects_empty() {
    assert!(SessionToken::new("").is_none());
}

#[test]
fn session_token_keeps_raw_value() {
    assert_eq!(token(" abc ").as_str(), " abc ");
}

#[test]
fn session_token_debug_hides_value() {
    let rendered = format!("{:?}", token("secret-value"));
    assert!(!rendered.contains("secret-value"));
}

// =============================================================================
// MemoryTokens
// =============================================================================

#[test]
fn memory_tokens_start_empty() {
    assert!(MemoryTokens::new().read().is_none());
}

#[test]
fn memory_tokens_write_then_clear() {
    let store = MemoryTokens::new();
    store.write(&token("abc"));
    assert_eq!(store.read(), Some(token("abc")));
    store.clear();
    assert!(store.read().is_none());
}

#[test]
fn memory_tokens_with_token_prefills_slot() {
    let store = MemoryTokens::with_token(token("t1"));
    assert_eq!(store.read(), Some(token("t1")));
}

// =============================================================================
// MirroredTokens
// =============================================================================

#[test]
fn mirrored_write_reaches_both_slots() {
    let tokens = MirroredTokens::new(MemoryTokens::new(), MemoryTokens::new());
    tokens.write(&token("abc"));
    assert_eq!(tokens.primary().read(), Some(token("abc")));
    assert_eq!(tokens.mirror().read(), Some(token("abc")));
}

#[test]
fn mirrored_clear_empties_both_slots() {
    let tokens = MirroredTokens::new(MemoryTokens::with_token(token("a")), MemoryTokens::with_token(token("a")));
    tokens.clear();
    assert!(tokens.primary().read().is_none());
    assert!(tokens.mirror().read().is_none());
}

#[test]
fn mirrored_read_drops_stale_mirror() {
    let tokens = MirroredTokens::new(MemoryTokens::new(), MemoryTokens::with_token(token("stale")));
    assert!(tokens.read().is_none());
    assert!(tokens.mirror().read().is_none());
}

#[test]
fn mirrored_read_repairs_diverged_mirror() {
    let tokens = MirroredTokens::new(MemoryTokens::with_token(token("fresh")), MemoryTokens::with_token(token("old")));
    assert_eq!(tokens.read(), Some(token("fresh")));
    assert_eq!(tokens.mirror().read(), Some(token("fresh")));
}

#[test]
fn mirrored_read_fills_missing_mirror() {
    let tokens = MirroredTokens::new(MemoryTokens::with_token(token("fresh")), MemoryTokens::new());
    assert_eq!(tokens.read(), Some(token("fresh")));
    assert_eq!(tokens.mirror().read(), Some(token("fresh")));
}

/// Cookie slot backed by a raw `name=value` string, as `document.cookie` is.
#[derive(Default)]
struct HeaderCookie(Mutex<String>);

impl TokenProvider for HeaderCookie {
    fn read(&self) -> Option<SessionToken> {
        crate::cookie::token_from_cookie_header(&self.0.lock().unwrap(), crate::TOKEN_SLOT)
    }

    fn write(&self, token: &SessionToken) {
        let set = crate::cookie::set_cookie_value(crate::TOKEN_SLOT, token, false);
        *self.0.lock().unwrap() = set.split(';').next().unwrap_or_default().to_owned();
    }

    fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

#[test]
fn mirrored_read_through_cookie_keeps_opaque_token() {
    for raw in [" abc ", "a;b", "\"q\""] {
        let tokens = MirroredTokens::new(HeaderCookie::default(), MemoryTokens::new());
        tokens.write(&token(raw));
        assert_eq!(tokens.read(), Some(token(raw)));
        assert_eq!(tokens.mirror().read(), Some(token(raw)));
    }
}
