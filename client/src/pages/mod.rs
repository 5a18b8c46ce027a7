//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages are presentation only. Access rules are applied around them in
//! `app.rs` with `RouteGuard`, so no page checks auth on its own.

pub mod about;
pub mod blog;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;
pub mod projects;
pub mod services;
