//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into the edge filter via the `State` extractor.
//! It only carries the route rules; there is no session store on this side,
//! the cookie is the whole signal.

use std::sync::Arc;

use gate::RouteConfig;

/// Shared application state. Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Debug)]
pub struct AppState {
    pub routes: Arc<RouteConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(routes: RouteConfig) -> Self {
        Self { routes: Arc::new(routes) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_route_rules() {
        let state = AppState::new(RouteConfig::default());
        let other = state.clone();
        assert!(Arc::ptr_eq(&state.routes, &other.routes));
    }
}
