//! Caller identity middleware.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::error::AppError;

/// Header the chat server sets to the id of the authenticated user.
pub const USER_ID_HEADER: &str = "Mattermost-User-ID";

/// Id of the chat user a request was sent on behalf of.
///
/// Inserted into request extensions by [`layer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatUserId(pub String);

/// Requires the caller identity header set by the chat server.
///
/// The header is trusted as-is: the service must only be reachable through
/// the chat server, which strips client-supplied copies and sets it for
/// logged-in users.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, empty or not valid
/// visible ASCII. The request is not processed further.
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/create", post(create_handler))
///     .route_layer(middleware::from_fn(auth::layer));
/// ```
pub async fn layer(mut req: Request, next: Next) -> Result<Response, AppError> {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthorized("Mattermost-User-ID header is missing"))?;

    req.extensions_mut().insert(ChatUserId(user_id));

    Ok(next.run(req).await)
}
