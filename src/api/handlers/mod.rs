//! HTTP request handlers for API endpoints.

pub mod create;
pub mod health;

pub use create::create_handler;
pub use health::health_handler;
