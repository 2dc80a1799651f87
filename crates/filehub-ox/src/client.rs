use bon::Builder;

use crate::{
    FileHubError, FileId, FileRecord, FilterCriteria, SelectedFile, UploadResult,
    internal::FileHubRequestHelper,
};

/// Development backend used when no override is configured.
pub const BASE_URL: &str = "http://localhost:8000/api";

/// Environment variable that overrides [`BASE_URL`].
pub const API_URL_ENV: &str = "FILE_HUB_API_URL";

/// Client for the File Hub file API.
#[derive(Debug, Clone, Builder)]
pub struct FileHub {
    #[builder(default = BASE_URL.to_string(), into)]
    pub(crate) base_url: String,
    #[builder(default)]
    pub(crate) client: reqwest::Client,
    #[builder(into)]
    pub(crate) user_agent: Option<String>,
}

impl Default for FileHub {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl FileHub {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            user_agent: None,
        }
    }

    /// Base URL from `FILE_HUB_API_URL`, or the local development default.
    #[must_use]
    pub fn load_from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create request helper for internal use
    fn request_helper(&self) -> FileHubRequestHelper {
        FileHubRequestHelper::new(self.client.clone(), &self.base_url, self.user_agent.as_deref())
    }
}

impl FileHub {
    /// Upload one file as multipart form data. A single attempt, no retry.
    pub async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError> {
        log::debug!("uploading {} ({} bytes)", file.name, file.size());
        let result = self.request_helper().upload(file).await?;
        if result.duplicate {
            log::debug!(
                "{} duplicates file {}, saved {} bytes",
                file.name,
                result.file.id,
                result.saved_storage
            );
        }
        Ok(result)
    }

    /// List files matching `filters`, in the order the server returns them.
    pub async fn list(&self, filters: &FilterCriteria) -> Result<Vec<FileRecord>, FileHubError> {
        let files = self.request_helper().list(filters).await?;
        log::debug!("listed {} files", files.len());
        Ok(files)
    }

    /// Delete one file by id. An unknown id is a server error (404).
    pub async fn remove(&self, id: FileId) -> Result<(), FileHubError> {
        log::debug!("deleting file {id}");
        self.request_helper().remove(id).await
    }
}
