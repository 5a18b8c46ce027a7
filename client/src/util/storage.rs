//! Browser token adapters: `document.cookie` and `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cookie copy is what the edge filter sees on the next navigation; the
//! local-storage copy is what the fetch layer turns into a bearer header.
//! [`browser_tokens`] pairs them as a mirrored provider with the cookie as the
//! source of truth.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior; SSR and test builds
//! see empty slots and writes no-op, keeping server rendering deterministic.

use std::sync::Arc;

#[cfg(not(feature = "hydrate"))]
use gate::MemoryTokens;
#[cfg(feature = "hydrate")]
use gate::MirroredTokens;
use gate::{SessionToken, TokenProvider};

/// Session token held in the `auth_token` cookie.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokens {
    secure: bool,
}

impl CookieTokens {
    #[must_use]
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    #[cfg(feature = "hydrate")]
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
    }

    #[cfg(feature = "hydrate")]
    fn set_raw(cookie: &str) {
        if let Some(doc) = Self::document() {
            let _ = doc.set_cookie(cookie);
        }
    }
}

impl TokenProvider for CookieTokens {
    fn read(&self) -> Option<SessionToken> {
        #[cfg(feature = "hydrate")]
        {
            let header = Self::document()?.cookie().ok()?;
            gate::cookie::token_from_cookie_header(&header, gate::TOKEN_SLOT)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, token: &SessionToken) {
        #[cfg(feature = "hydrate")]
        Self::set_raw(&gate::cookie::set_cookie_value(gate::TOKEN_SLOT, token, self.secure));
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.secure);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        Self::set_raw(&gate::cookie::clear_cookie_value(gate::TOKEN_SLOT));
    }
}

/// Session token held in `localStorage["auth_token"]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenProvider for LocalStorageTokens {
    fn read(&self) -> Option<SessionToken> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(gate::TOKEN_SLOT).ok().flatten()?;
            SessionToken::new(raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, token: &SessionToken) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(gate::TOKEN_SLOT, token.as_str());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(gate::TOKEN_SLOT);
            }
        }
    }
}

/// Whether the page was served over HTTPS, so the cookie gets `Secure`.
#[cfg(feature = "hydrate")]
fn page_is_secure() -> bool {
    web_sys::window()
        .and_then(|w| w.location().protocol().ok())
        .is_some_and(|p| p == "https:")
}

/// Token provider for the current environment.
///
/// In the browser: cookie as source of truth, local storage as its mirror.
/// Elsewhere: an empty in-memory slot.
pub fn browser_tokens() -> Arc<dyn TokenProvider> {
    #[cfg(feature = "hydrate")]
    {
        Arc::new(MirroredTokens::new(CookieTokens::new(page_is_secure()), LocalStorageTokens))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Arc::new(MemoryTokens::new())
    }
}
