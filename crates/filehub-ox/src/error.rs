use serde::{Serialize, Serializer, ser::SerializeStruct};
use thiserror::Error;

/// Errors that can occur when talking to the File Hub API
#[derive(Debug, Error)]
pub enum FileHubError {
    /// The request never reached the server, or the connection broke mid-way
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// Rejected on the client before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// 2xx response that does not match the expected shape
    #[error("Unexpected response from API: {0}")]
    UnexpectedResponse(String),

    /// Reading a local file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FileHubError {
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    #[must_use]
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status of a server error
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short name of the variant, used when serializing
    fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "NetworkError",
            Self::Server { .. } => "ServerError",
            Self::Validation(_) => "ValidationError",
            Self::Json(_) => "JsonError",
            Self::UnexpectedResponse(_) => "UnexpectedResponse",
            Self::Io(_) => "IoError",
        }
    }
}

impl Serialize for FileHubError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FileHubError::Server { status, message } => {
                let mut state = serializer.serialize_struct("FileHubError", 3)?;
                state.serialize_field("type", self.kind())?;
                state.serialize_field("status", status)?;
                state.serialize_field("message", message)?;
                state.end()
            }
            FileHubError::Validation(message) | FileHubError::UnexpectedResponse(message) => {
                let mut state = serializer.serialize_struct("FileHubError", 2)?;
                state.serialize_field("type", self.kind())?;
                state.serialize_field("message", message)?;
                state.end()
            }
            FileHubError::Network(_) | FileHubError::Json(_) | FileHubError::Io(_) => {
                let mut state = serializer.serialize_struct("FileHubError", 2)?;
                state.serialize_field("type", self.kind())?;
                state.serialize_field("error", &self.to_string())?;
                state.end()
            }
        }
    }
}
