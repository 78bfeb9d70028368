//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::IssueRouting;
use crate::domain::gateways::ChatPlatform;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: Chat server reachable and at least one category routed
/// - **503 Service Unavailable**: Otherwise
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "chat_platform": { "status": "ok", "message": "Mattermost reachable" },
///     "routing": { "status": "ok", "message": "Routed categories: admin, developer" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let chat_check = check_chat_platform(state.chat.as_ref()).await;
    let routing_check = check_routing(&state.routing.snapshot());

    let all_healthy = chat_check.status == "ok" && routing_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            chat_platform: chat_check,
            routing: routing_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the chat server answers its ping endpoint.
async fn check_chat_platform(chat: &impl ChatPlatform) -> CheckStatus {
    if chat.ping().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Mattermost reachable".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Mattermost ping failed".to_string()),
        }
    }
}

/// Checks that at least one category routes to a repository.
fn check_routing(routing: &IssueRouting) -> CheckStatus {
    let routed = routing.routed_categories();
    if routed.is_empty() {
        return CheckStatus {
            status: "error".to_string(),
            message: Some("No category has a repository configured".to_string()),
        };
    }

    let names: Vec<&str> = routed.iter().map(|c| c.as_str()).collect();
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Routed categories: {}", names.join(", "))),
    }
}
