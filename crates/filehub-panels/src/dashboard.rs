use filehub_ox::{FileId, UploadResult};

use crate::{FileListPanel, FileService, PanelError, UploadPanel};

/// Parent container: an upload panel above a file list, sharing one service.
///
/// A successful upload bumps `refresh_key` once and refetches the list with
/// the filters that were active.
#[derive(Debug)]
pub struct Dashboard<S> {
    service: S,
    upload: UploadPanel,
    list: FileListPanel,
    refresh_key: u64,
}

impl<S: FileService> Dashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            upload: UploadPanel::new(),
            list: FileListPanel::new(),
            refresh_key: 0,
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn upload_panel(&self) -> &UploadPanel {
        &self.upload
    }

    pub fn upload_panel_mut(&mut self) -> &mut UploadPanel {
        &mut self.upload
    }

    pub fn list_panel(&self) -> &FileListPanel {
        &self.list
    }

    pub fn list_panel_mut(&mut self) -> &mut FileListPanel {
        &mut self.list
    }

    /// Number of list refreshes forced by uploads.
    pub fn refresh_key(&self) -> u64 {
        self.refresh_key
    }

    pub async fn mount(&mut self) {
        self.list.mount(&self.service).await;
    }

    pub async fn upload(&mut self) -> Result<UploadResult, PanelError> {
        let result = self.upload.submit(&self.service).await?;
        self.refresh_key += 1;
        self.list.refresh(&self.service).await;
        Ok(result)
    }

    pub async fn apply_filters(&mut self) {
        self.list.apply(&self.service).await;
    }

    pub async fn delete(&mut self, id: FileId) -> Result<(), PanelError> {
        self.list.delete(&self.service, id).await
    }
}
