use filehub_common::{
    CommonRequestError, MultipartForm,
    request_builder::{Endpoint, HttpMethod, RequestBuilder, RequestConfig},
};

use crate::{FileHubError, FileId, FileRecord, FilterCriteria, SelectedFile, UploadResult};

const FILES_PATH: &str = "files/";

impl From<CommonRequestError> for FileHubError {
    fn from(err: CommonRequestError) -> Self {
        match err {
            CommonRequestError::Network(e) => FileHubError::Network(e),
            CommonRequestError::Status { status, message } => {
                FileHubError::Server { status, message }
            }
            CommonRequestError::Json(e) => FileHubError::Json(e),
            CommonRequestError::UnexpectedResponse(msg) => FileHubError::UnexpectedResponse(msg),
            CommonRequestError::InvalidMimeType(mime) => {
                FileHubError::Validation(format!("invalid MIME type: {mime}"))
            }
        }
    }
}

/// File Hub helper methods using the common RequestBuilder
pub(crate) struct FileHubRequestHelper {
    request_builder: RequestBuilder,
}

impl FileHubRequestHelper {
    pub(crate) fn new(client: reqwest::Client, base_url: &str, user_agent: Option<&str>) -> Self {
        let mut config = RequestConfig::new(base_url).with_header("accept", "application/json");
        if let Some(user_agent) = user_agent {
            config = config.with_user_agent(user_agent);
        }

        Self {
            request_builder: RequestBuilder::new(client, config),
        }
    }

    pub(crate) async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError> {
        let form = MultipartForm::new()
            .file("file", file.name.clone(), file.content.clone(), &file.mime_type)?
            .build();
        let endpoint = Endpoint::new(FILES_PATH, HttpMethod::Post);

        Ok(self.request_builder.request_multipart(&endpoint, form).await?)
    }

    pub(crate) async fn list(
        &self,
        filters: &FilterCriteria,
    ) -> Result<Vec<FileRecord>, FileHubError> {
        let endpoint =
            Endpoint::new(FILES_PATH, HttpMethod::Get).with_query_params(filters.to_query_pairs());

        Ok(self.request_builder.request(&endpoint).await?)
    }

    pub(crate) async fn remove(&self, id: FileId) -> Result<(), FileHubError> {
        let endpoint = Endpoint::new(format!("{FILES_PATH}{id}/"), HttpMethod::Delete);

        Ok(self.request_builder.request_unit(&endpoint).await?)
    }
}
