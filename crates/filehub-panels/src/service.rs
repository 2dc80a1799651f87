use async_trait::async_trait;
use filehub_ox::{FileHub, FileHubError, FileId, FileRecord, FilterCriteria, SelectedFile, UploadResult};

/// The three backend operations the panels need.
#[async_trait]
pub trait FileService: Send + Sync {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError>;

    async fn list(&self, filters: &FilterCriteria) -> Result<Vec<FileRecord>, FileHubError>;

    async fn remove(&self, id: FileId) -> Result<(), FileHubError>;
}

#[async_trait]
impl FileService for FileHub {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError> {
        FileHub::upload(self, file).await
    }

    async fn list(&self, filters: &FilterCriteria) -> Result<Vec<FileRecord>, FileHubError> {
        FileHub::list(self, filters).await
    }

    async fn remove(&self, id: FileId) -> Result<(), FileHubError> {
        FileHub::remove(self, id).await
    }
}

#[async_trait]
impl<T: FileService + ?Sized> FileService for std::sync::Arc<T> {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError> {
        (**self).upload(file).await
    }

    async fn list(&self, filters: &FilterCriteria) -> Result<Vec<FileRecord>, FileHubError> {
        (**self).list(filters).await
    }

    async fn remove(&self, id: FileId) -> Result<(), FileHubError> {
        (**self).remove(id).await
    }
}
