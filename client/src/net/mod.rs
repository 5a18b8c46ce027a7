//! Networking: REST calls to the external API and their payload types.

pub mod api;
pub mod types;
