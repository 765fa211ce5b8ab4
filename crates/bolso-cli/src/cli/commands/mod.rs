pub mod auth;
pub mod config;
pub mod dashboard;
pub mod status;
pub mod transactions;
