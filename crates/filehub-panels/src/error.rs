use filehub_ox::FileHubError;
use thiserror::Error;

/// Errors surfaced by panel interactions
#[derive(Debug, Error)]
pub enum PanelError {
    /// Caught before any request was sent
    #[error("{0}")]
    Validation(String),

    /// The submit control is disabled while an upload is pending
    #[error("An upload is already in progress")]
    UploadInFlight,

    /// `finish_upload` without a matching `begin_upload`
    #[error("No upload is in progress")]
    NoUploadInFlight,

    /// The backend call failed
    #[error(transparent)]
    Service(#[from] FileHubError),
}

impl PanelError {
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
            || matches!(self, Self::Service(e) if e.is_validation())
    }
}
