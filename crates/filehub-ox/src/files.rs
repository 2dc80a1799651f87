use std::path::Path;

use bytes::Bytes;
use chrono::{DateTime, NaiveDateTime, Utc};
use derive_more::{Display, From, Into};
use serde::{Deserialize, Deserializer, Serialize};

use crate::FileHubError;

/// Server-assigned identifier of an uploaded file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
)]
#[serde(transparent)]
pub struct FileId(pub u64);

/// Metadata the server holds for one uploaded file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Unique identifier assigned on upload.
    pub id: FileId,
    /// Name of the file as it was uploaded.
    pub original_filename: String,
    /// MIME type reported by the uploading client.
    pub file_type: String,
    /// Size in bytes.
    pub size: u64,
    /// When the server stored the file. Timestamps without an offset are read as UTC.
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub uploaded_at: DateTime<Utc>,
}

/// RFC 3339, or a naive `YYYY-MM-DD[T ]HH:MM:SS[.f]` taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(at.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
}

/// Outcome of a single upload call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResult {
    /// Server status text, e.g. "File uploaded" or "Duplicate file".
    pub message: String,
    /// The content was already stored; `file` is the existing record.
    pub duplicate: bool,
    pub file: FileRecord,
    /// Bytes the server avoided storing because of the duplicate.
    pub saved_storage: u64,
}

impl UploadResult {
    /// User-facing notice for this upload.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.duplicate {
            format!("Duplicate file! You saved {} bytes.", self.saved_storage)
        } else {
            "File uploaded successfully.".to_string()
        }
    }
}

/// A local file staged for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub content: Bytes,
}

impl SelectedFile {
    /// Stage in-memory content. The MIME type is guessed from the file name.
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        let name = name.into();
        let mime_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self {
            name,
            mime_type,
            content: content.into(),
        }
    }

    /// Override the guessed MIME type, e.g. with the type a file picker reported.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Read a file from disk and stage it under its own file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, FileHubError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| {
                FileHubError::Validation(format!("{} does not name a file", path.display()))
            })?;
        let content = tokio::fs::read(path).await?;
        Ok(Self::new(name, content))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.content.len()
    }
}
