//! Error classification for REST calls.
//!
//! Every failed request collapses into one [`ApiError`] variant. The
//! `Display` strings double as the user-facing toast messages, so the render
//! layer never sees a raw transport error.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Classified outcome of a failed API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401 — token missing, expired, or invalid. Clears the session.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// 403 — authenticated but not allowed. Session is left untouched.
    #[error("You do not have permission to do that.")]
    Forbidden,
    /// 404.
    #[error("The requested resource was not found.")]
    NotFound,
    /// Other 4xx with a server-provided (possibly aggregated) message.
    #[error("{0}")]
    BadRequest(String),
    /// 5xx.
    #[error("Something went wrong on the server. Please try again later.")]
    Server(u16),
    /// No response received: offline, DNS failure, or timeout.
    #[error("Could not reach the server. Check your connection.")]
    Network,
    /// The request could not be constructed or the response not decoded.
    #[error("The request could not be completed.")]
    Request,
}

/// Fallback when a 4xx body carries no usable message.
pub const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

impl ApiError {
    /// Classify an HTTP status code, using `body` for 4xx messages.
    pub fn from_status(status: u16, body: Option<&serde_json::Value>) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500.. => Self::Server(status),
            _ => Self::BadRequest(body.map_or_else(
                || GENERIC_MESSAGE.to_owned(),
                aggregate_error_message,
            )),
        }
    }

    /// Whether this failure invalidates the session (token must be cleared).
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::Forbidden)
    }
}

/// Classify a response from an endpoint whose success carries no payload
/// (follow/unfollow, password change). Any 2xx counts as success even when
/// the body is empty or not JSON; only failures consult the body.
pub fn classify_unit(status: u16, body: Option<&serde_json::Value>) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::from_status(status, body))
    }
}

/// Extract a single user-facing message from an error response body.
///
/// Field-level validation errors (`{"errors":[{"field","message"},..]}`) are
/// joined into one message; otherwise the top-level `message` is used, then
/// `error`, then a generic fallback.
pub fn aggregate_error_message(body: &serde_json::Value) -> String {
    if let Some(errors) = body.get("errors").and_then(|v| v.as_array()) {
        let joined = errors
            .iter()
            .filter_map(|e| {
                e.get("message")
                    .and_then(|m| m.as_str())
                    .or_else(|| e.as_str())
            })
            .collect::<Vec<_>>()
            .join(" ");
        if !joined.is_empty() {
            return joined;
        }
    }

    body.get("message")
        .and_then(|v| v.as_str())
        .or_else(|| body.get("error").and_then(|v| v.as_str()))
        .map_or_else(|| GENERIC_MESSAGE.to_owned(), ToOwned::to_owned)
}
