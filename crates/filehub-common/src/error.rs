use thiserror::Error;

/// Errors that can occur while talking to the file API over HTTP
#[derive(Error, Debug)]
pub enum CommonRequestError {
    /// The request never completed (connection refused, DNS, timeout, ...)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 2xx response whose body could not be decoded
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Invalid MIME type for file upload
    #[error("Invalid MIME type: {0}")]
    InvalidMimeType(String),
}

impl CommonRequestError {
    /// HTTP status code, if the server answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Parse error response from HTTP status and body
pub fn parse_error_response(status: reqwest::StatusCode, body: &bytes::Bytes) -> CommonRequestError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| extract_error_message(&json))
        .unwrap_or_else(|| {
            let raw = String::from_utf8_lossy(body).trim().to_string();
            if raw.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                raw
            }
        });

    CommonRequestError::Status {
        status: status.as_u16(),
        message,
    }
}

/// Extract error message from the JSON error shapes the backend emits
fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    // {"error": "No file provided"} or {"error": {"message": "..."}}
    if let Some(error) = json.get("error") {
        if let Some(msg) = error.as_str() {
            return Some(msg.to_string());
        }
        if let Some(msg) = error.get("message").and_then(serde_json::Value::as_str) {
            return Some(msg.to_string());
        }
    }

    // Framework default: {"detail": "Not found."}
    if let Some(msg) = json.get("detail").and_then(serde_json::Value::as_str) {
        return Some(msg.to_string());
    }

    if let Some(msg) = json.get("message").and_then(serde_json::Value::as_str) {
        return Some(msg.to_string());
    }

    None
}
