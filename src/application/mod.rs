//! Application layer: the documentation request workflow.
//!
//! Services consume the gateway traits from [`crate::domain::gateways`] and
//! give HTTP handlers a single call per use case.
//!
//! # Modules
//!
//! - [`services::doc_request_service::DocRequestService`] - Issue creation and thread reply
//! - [`routing_store::RoutingStore`] - Swappable routing snapshot shared by requests

pub mod routing_store;
pub mod services;
