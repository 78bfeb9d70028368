//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::routing_store::RoutingStore;
use crate::application::services::DocRequestService;
use crate::infrastructure::http::{GitHubClient, MattermostClient};

/// Service wired to the production HTTP clients.
pub type DocRequests = DocRequestService<MattermostClient, GitHubClient>;

/// State shared by all handlers.
///
/// Cloned per request; every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub doc_requests: Arc<DocRequests>,
    /// Used directly by the health check.
    pub chat: Arc<MattermostClient>,
    pub routing: RoutingStore,
}

impl AppState {
    /// Wires the service to the given clients and initial routing.
    pub fn new(
        chat: Arc<MattermostClient>,
        tracker: Arc<GitHubClient>,
        routing: RoutingStore,
    ) -> Self {
        Self {
            doc_requests: Arc::new(DocRequestService::new(chat.clone(), tracker)),
            chat,
            routing,
        }
    }
}
