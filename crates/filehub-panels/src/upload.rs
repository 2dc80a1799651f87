//! Upload panel: stage one file, send it, report the outcome.

use filehub_ox::{FileHubError, SelectedFile, UploadResult};

use crate::{FileService, PanelError};

/// Shown when upload is pressed with nothing staged.
pub const NO_FILE_MESSAGE: &str = "Please select a file";
/// Shown when the backend call fails.
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to upload file. Please try again.";

/// Where the panel is in its `Idle → FileSelected → Uploading` cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected(SelectedFile),
    Uploading(SelectedFile),
}

#[derive(Debug, Default)]
pub struct UploadPanel {
    state: UploadState,
    drag_active: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl UploadPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// The staged file, also while it is being sent.
    #[must_use]
    pub fn selected(&self) -> Option<&SelectedFile> {
        match &self.state {
            UploadState::Idle => None,
            UploadState::FileSelected(file) | UploadState::Uploading(file) => Some(file),
        }
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading(_))
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Outcome text of the last successful upload.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(self.state, UploadState::FileSelected(_))
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_uploading() { "Uploading..." } else { "Upload" }
    }

    /// Stage a file chosen in a dialog, replacing any earlier choice.
    /// `None` is a cancelled dialog and changes nothing.
    pub fn select(&mut self, file: Option<SelectedFile>) {
        let Some(file) = file else { return };
        if self.is_uploading() {
            log::debug!("ignoring selection of {} while uploading", file.name);
            return;
        }
        self.notice = None;
        self.state = UploadState::FileSelected(file);
    }

    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    /// Stage the first dropped file; the rest are ignored.
    pub fn drop_files(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        self.drag_active = false;
        self.select(files.into_iter().next());
    }

    /// Move to `Uploading` and hand out the file to send.
    ///
    /// With nothing staged the error message is set and no request may be made.
    pub fn begin_upload(&mut self) -> Result<SelectedFile, PanelError> {
        match std::mem::take(&mut self.state) {
            UploadState::Idle => {
                self.error = Some(NO_FILE_MESSAGE.to_string());
                Err(PanelError::Validation(NO_FILE_MESSAGE.to_string()))
            }
            UploadState::Uploading(file) => {
                self.state = UploadState::Uploading(file);
                Err(PanelError::UploadInFlight)
            }
            UploadState::FileSelected(file) => {
                self.error = None;
                self.notice = None;
                self.state = UploadState::Uploading(file.clone());
                Ok(file)
            }
        }
    }

    /// Settle the in-flight upload. Success clears the selection; failure keeps
    /// the file staged so the user can retry.
    pub fn finish_upload(
        &mut self,
        result: Result<UploadResult, FileHubError>,
    ) -> Result<UploadResult, PanelError> {
        let file = match std::mem::take(&mut self.state) {
            UploadState::Uploading(file) => file,
            other => {
                self.state = other;
                return Err(PanelError::NoUploadInFlight);
            }
        };

        match result {
            Ok(result) => {
                log::debug!("upload of {} finished: {}", file.name, result.message);
                self.notice = Some(result.summary());
                Ok(result)
            }
            Err(err) => {
                log::warn!("upload of {} failed: {err}", file.name);
                self.state = UploadState::FileSelected(file);
                self.error = Some(UPLOAD_FAILED_MESSAGE.to_string());
                Err(err.into())
            }
        }
    }

    /// Upload the staged file through `service`.
    pub async fn submit<S>(&mut self, service: &S) -> Result<UploadResult, PanelError>
    where
        S: FileService + ?Sized,
    {
        let file = self.begin_upload()?;
        let result = service.upload(&file).await;
        self.finish_upload(result)
    }
}
