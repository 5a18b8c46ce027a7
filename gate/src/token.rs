//! Session token value and the providers that persist it.
//!
//! DESIGN
//! ======
//! The same credential lives in two places on the browser side: a cookie
//! (visible to the edge filter) and a local-storage slot (read by the fetch
//! layer). [`MirroredTokens`] treats the cookie as the source of truth and
//! keeps the other slot in step, so the two copies cannot silently diverge.
//!
//! TRADE-OFFS
//! ==========
//! Presence of a non-empty string is all this layer checks. Expiry and
//! signature validation belong to the API that receives the bearer header.

#[cfg(test)]
#[path = "token_test.rs"]
mod tests;

use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Opaque bearer credential. Never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw value, rejecting the empty string.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep credentials out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// A single persistence slot for the session token.
pub trait TokenProvider: Send + Sync {
    /// Current token, if one is stored.
    fn read(&self) -> Option<SessionToken>;
    /// Store `token`, replacing any previous value.
    fn write(&self, token: &SessionToken);
    /// Remove the stored token.
    fn clear(&self);
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local slot. Used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    slot: Mutex<Option<SessionToken>>,
}

impl MemoryTokens {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `token`.
    #[must_use]
    pub fn with_token(token: SessionToken) -> Self {
        Self { slot: Mutex::new(Some(token)) }
    }
}

impl TokenProvider for MemoryTokens {
    fn read(&self) -> Option<SessionToken> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, token: &SessionToken) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn clear(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

// =============================================================================
// MIRRORED
// =============================================================================

/// Primary slot with a synchronized mirror.
///
/// Writes and clears hit both slots. Reads trust the primary: a token found
/// only in the mirror is stale and gets cleared, and a mirror that disagrees
/// with the primary is overwritten.
pub struct MirroredTokens<P, M> {
    primary: P,
    mirror: M,
}

impl<P, M> MirroredTokens<P, M>
where
    P: TokenProvider,
    M: TokenProvider,
{
    pub fn new(primary: P, mirror: M) -> Self {
        Self { primary, mirror }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }
}

impl<P, M> TokenProvider for MirroredTokens<P, M>
where
    P: TokenProvider,
    M: TokenProvider,
{
    fn read(&self) -> Option<SessionToken> {
        let primary = self.primary.read();
        let mirror = self.mirror.read();
        match (&primary, &mirror) {
            (None, Some(_)) => self.mirror.clear(),
            (Some(token), other) if other.as_ref() != Some(token) => self.mirror.write(token),
            _ => {}
        }
        primary
    }

    fn write(&self, token: &SessionToken) {
        self.primary.write(token);
        self.mirror.write(token);
    }

    fn clear(&self) {
        self.primary.clear();
        self.mirror.clear();
    }
}
