//! Handler for the documentation request endpoint.

use axum::{Extension, body::Bytes, extract::State, http::StatusCode};

use crate::api::dto::create::CreateDocRequest;
use crate::api::middleware::auth::ChatUserId;
use crate::domain::entities::DocRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Opens a documentation issue for a chat post and replies in its thread.
///
/// # Endpoint
///
/// `POST /create`
///
/// # Request Body
///
/// ```json
/// {
///   "type": "developer",
///   "title": "Plugin upgrade steps",
///   "body": "How do I migrate a plugin to the new API?",
///   "post_id": "8ytq4mnyqfdh3mzxq6nepyd5ca"
/// }
/// ```
///
/// The body is read as raw bytes so a malformed payload is reported as a
/// server error, as the chat web client expects, rather than axum's `4xx`
/// JSON rejection.
///
/// # Response Codes
///
/// - **200 OK**: Issue created and reply posted (empty body)
/// - **401 Unauthorized**: Caller identity header missing (see [`crate::api::middleware::auth`])
/// - **400 Bad Request**: `type` is unknown or has no repository configured
/// - **500 Internal Server Error**: Malformed payload, misconfigured repository,
///   or a chat/GitHub call failed
pub async fn create_handler(
    State(state): State<AppState>,
    Extension(ChatUserId(user_id)): Extension<ChatUserId>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let payload: CreateDocRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::internal(format!("Unable to decode JSON: {e}")))?;

    let request = DocRequest::try_from(payload).map_err(|e| AppError::bad_request(e.to_string()))?;

    let routing = state.routing.snapshot();
    state
        .doc_requests
        .submit(&routing, &user_id, request)
        .await?;

    Ok(StatusCode::OK)
}
