//! Infrastructure layer for external integrations.
//!
//! Implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - REST clients for Mattermost and GitHub

pub mod http;
