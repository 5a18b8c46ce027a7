//! Server configuration parsed from environment variables.
//!
//! Required: nothing. Optional:
//! - `PORT`: listen port, default 3000
//! - `ROUTE_CONFIG`: path to a YAML file overriding the built-in route rules
//! - `SITE_ROOT`: directory holding the built `pkg/` assets; overrides the
//!   Leptos `site-root` (default `target/site`)
//!
//! Leptos reads its own `LEPTOS_*` variables (output name, site address).

use std::path::{Path, PathBuf};

use gate::RouteConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("failed to read route config {path}: {source}")]
    ReadRoutes {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse route config {path}: {source}")]
    ParseRoutes {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid route config: {0}")]
    Routes(#[from] gate::ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub routes: RouteConfig,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unparsable port, an unreadable or
    /// malformed route file, or route rules that fail validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        let routes = std::env::var_os("ROUTE_CONFIG").map(PathBuf::from);
        let site_root = std::env::var("SITE_ROOT").ok();
        Self::from_parts(port.as_deref(), routes.as_deref(), site_root.as_deref())
    }

    fn from_parts(port: Option<&str>, routes_path: Option<&Path>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = parse_port(port)?;
        let routes = match routes_path {
            Some(path) => load_route_config(path)?,
            None => RouteConfig::default(),
        };
        routes.validate()?;
        Ok(Self { port, routes, site_root: parse_site_root(site_root) })
    }

    /// Whether the loaded route rules differ from the ones the client guards
    /// were built with.
    pub fn routes_differ_from_client(&self) -> bool {
        self.routes != RouteConfig::default()
    }
}

fn parse_site_root(raw: Option<&str>) -> Option<PathBuf> {
    raw.map(str::trim).filter(|v| !v.is_empty()).map(PathBuf::from)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

/// Read and parse a YAML route file. Missing keys fall back to the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::ReadRoutes`] or [`ConfigError::ParseRoutes`].
pub fn load_route_config(path: &Path) -> Result<RouteConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadRoutes { path: path.to_owned(), source })?;
    parse_route_config(&raw).map_err(|source| ConfigError::ParseRoutes { path: path.to_owned(), source })
}

fn parse_route_config(raw: &str) -> Result<RouteConfig, serde_yaml::Error> {
    if raw.trim().is_empty() {
        return Ok(RouteConfig::default());
    }
    serde_yaml::from_str(raw)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
