//! Core bolso library (config, API client, session store, auth controller).

pub mod api;
pub mod auth;
pub mod config;
pub mod messages;
pub mod money;
pub mod session;
pub mod types;
