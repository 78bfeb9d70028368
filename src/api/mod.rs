//! HTTP API layer.
//!
//! Translates HTTP requests into the documentation request workflow and maps
//! its outcome to status codes.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Caller identification and request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
