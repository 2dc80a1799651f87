#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Headless panels for the File Hub client.
//!
//! Each panel is a small state machine that talks to the backend through
//! [`FileService`]. Rendering is left to the embedding front-end; panels expose
//! the strings and flags a view needs.

pub mod dashboard;
pub mod error;
pub mod filter;
pub mod list;
pub mod service;
pub mod upload;

pub use dashboard::Dashboard;
pub use error::PanelError;
pub use filter::{FilterEdit, FilterPanel};
pub use list::{FetchTicket, FileListPanel, FileRow, ListState, ListView};
pub use service::FileService;
pub use upload::{UploadPanel, UploadState};

/// Re-exported so `FileService` can be implemented without a direct dependency
pub use async_trait::async_trait;

pub use filehub_ox::{
    FileHub, FileHubError, FileId, FileRecord, FilterCriteria, FilterField, SelectedFile,
    UploadResult,
};
