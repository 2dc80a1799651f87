#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use chrono::{TimeZone, Utc};
use filehub_panels::{
    FileHubError, FileId, FileRecord, FileService, FilterCriteria, SelectedFile, UploadResult,
    async_trait,
};

/// In-memory backend that dedupes by content and applies the list filters.
#[derive(Default)]
pub struct FakeService {
    files: Mutex<Vec<(FileRecord, Vec<u8>)>>,
    next_id: AtomicU64,
    pub uploads: AtomicUsize,
    pub lists: AtomicUsize,
    pub removes: AtomicUsize,
    pub fail_upload: AtomicBool,
    pub fail_list: AtomicBool,
    /// Deletes succeed but the record stays listed.
    pub lagging_delete: AtomicBool,
    pub last_filters: Mutex<Option<FilterCriteria>>,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(names: &[&str]) -> Self {
        let service = Self::new();
        for name in names {
            service.insert(name, name.as_bytes());
        }
        service
    }

    pub fn insert(&self, name: &str, content: &[u8]) -> FileRecord {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let record = FileRecord {
            id: FileId(id),
            original_filename: name.to_string(),
            file_type: SelectedFile::new(name, Vec::new()).mime_type,
            size: content.len() as u64,
            uploaded_at: Utc
                .with_ymd_and_hms(2025, 4, 1, 0, 0, 0)
                .single()
                .expect("valid time")
                + chrono::Duration::days(i64::try_from(id).expect("small id")),
        };
        self.files
            .lock()
            .expect("lock")
            .push((record.clone(), content.to_vec()));
        record
    }

    pub fn ids(&self) -> Vec<u64> {
        self.files
            .lock()
            .expect("lock")
            .iter()
            .map(|(r, _)| r.id.0)
            .collect()
    }

    fn server_error() -> FileHubError {
        FileHubError::Server {
            status: 500,
            message: "Internal Server Error".to_string(),
        }
    }
}

#[async_trait]
impl FileService for FakeService {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResult, FileHubError> {
        self.uploads.fetch_add(1, Ordering::SeqCst);
        if self.fail_upload.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }

        let existing = self
            .files
            .lock()
            .expect("lock")
            .iter()
            .find(|(_, content)| content.as_slice() == &file.content[..])
            .map(|(record, _)| record.clone());

        if let Some(record) = existing {
            return Ok(UploadResult {
                message: "Duplicate file".to_string(),
                duplicate: true,
                file: record,
                saved_storage: file.size() as u64,
            });
        }

        let record = self.insert(&file.name, &file.content);
        Ok(UploadResult {
            message: "File uploaded".to_string(),
            duplicate: false,
            file: record,
            saved_storage: 0,
        })
    }

    async fn list(&self, filters: &FilterCriteria) -> Result<Vec<FileRecord>, FileHubError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        *self.last_filters.lock().expect("lock") = Some(filters.clone());
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::server_error());
        }

        let mut files: Vec<FileRecord> = self
            .files
            .lock()
            .expect("lock")
            .iter()
            .map(|(r, _)| r.clone())
            .filter(|r| {
                filters
                    .filename
                    .as_ref()
                    .is_none_or(|f| r.original_filename.to_lowercase().contains(&f.to_lowercase()))
                    && filters
                        .file_type
                        .as_ref()
                        .is_none_or(|t| r.file_type.contains(t.as_str()))
                    && filters.size_min.is_none_or(|min| r.size >= min)
                    && filters.size_max.is_none_or(|max| r.size <= max)
            })
            .collect();
        files.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(files)
    }

    async fn remove(&self, id: FileId) -> Result<(), FileHubError> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        let mut files = self.files.lock().expect("lock");
        let Some(pos) = files.iter().position(|(r, _)| r.id == id) else {
            return Err(FileHubError::Server {
                status: 404,
                message: "Not found.".to_string(),
            });
        };
        if !self.lagging_delete.load(Ordering::SeqCst) {
            files.remove(pos);
        }
        Ok(())
    }
}
