//! Shared session-gating model for the folio site.
//!
//! This crate owns the rules used by both `server` (edge route filter) and
//! `client` (auth context, route guard, authenticated fetch). Nothing here
//! touches a browser or a socket, so every decision can be exercised with
//! plain unit tests and in-memory token providers.

pub mod cookie;
pub mod guard;
pub mod headers;
pub mod routes;
pub mod status;
pub mod token;

pub use guard::{GuardOutcome, RedirectLatch};
pub use headers::auth_headers;
pub use routes::{ConfigError, RouteConfig, RouteOutcome};
pub use status::AuthStatus;
pub use token::{MemoryTokens, MirroredTokens, SessionToken, TokenProvider};

/// Cookie name and local-storage key holding the session token.
pub const TOKEN_SLOT: &str = "auth_token";

/// Where unauthenticated viewers are sent.
pub const LOGIN_PATH: &str = "/auth";

/// Where authenticated viewers are sent away from the login screen.
pub const HOME_PATH: &str = "/dashboard";
