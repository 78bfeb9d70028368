//! Errors raised by outbound API calls.

/// Failure talking to the chat platform or the issue tracker.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("{operation} failed: {message}")]
    Transport { operation: &'static str, message: String },

    /// The upstream answered with a non-success status.
    #[error("{operation} returned HTTP {status}: {body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The request could not be addressed, e.g. an identifier that is not a
    /// usable path segment. Nothing was sent.
    #[error("{operation} rejected: {message}")]
    InvalidRequest { operation: &'static str, message: String },

    /// The upstream answered 2xx but the body could not be decoded.
    #[error("{operation} returned an unreadable body: {message}")]
    Decode { operation: &'static str, message: String },
}

impl GatewayError {
    /// Returns true when the upstream reported that the resource is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
