//! In-memory book catalog served over HTTP.

pub mod config;
pub mod models;
pub mod routes;
pub mod utils;
