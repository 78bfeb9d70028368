//! Shared response handling for upstream calls.

use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::gateways::GatewayError;

/// Longest upstream error body kept in error messages.
const MAX_ERROR_BODY: usize = 512;

/// Appends `segments` to `base`.
///
/// Each segment is percent-encoded as exactly one path segment, so ids
/// containing `/`, `?` or `#` cannot reach another resource. Empty, `.` and
/// `..` segments are refused.
pub(super) fn endpoint(
    operation: &'static str,
    base: &Url,
    segments: &[&str],
) -> Result<Url, GatewayError> {
    if let Some(bad) = segments
        .iter()
        .find(|s| s.is_empty() || **s == "." || **s == "..")
    {
        return Err(GatewayError::InvalidRequest {
            operation,
            message: format!("'{bad}' is not a valid path segment"),
        });
    }

    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| GatewayError::InvalidRequest {
            operation,
            message: format!("'{base}' cannot be a base URL"),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends a request and decodes a successful JSON response.
pub(super) async fn send_json<T: DeserializeOwned>(
    operation: &'static str,
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let response = request
        .send()
        .await
        .map_err(|e| GatewayError::Transport {
            operation,
            message: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(GatewayError::Status {
            operation,
            status: status.as_u16(),
            body: truncate(body.trim()),
        });
    }

    response.json::<T>().await.map_err(|e| GatewayError::Decode {
        operation,
        message: e.to_string(),
    })
}

fn truncate(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
