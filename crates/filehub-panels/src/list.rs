//! File list panel: fetch with the active filters, render rows, delete.
//!
//! Every mutation is followed by a full refetch; rows are never patched locally.
//! A fetch is split into [`FileListPanel::begin_fetch`] and
//! [`FileListPanel::complete_fetch`] so a front-end can drive it without holding
//! the panel across the await, and so late results can be told apart.

use filehub_ox::{FileHubError, FileId, FileRecord, FilterCriteria};

use crate::{FileService, FilterPanel, PanelError};

pub const LOADING_MESSAGE: &str = "Loading files...";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load files.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete file.";

/// Fetch status. Loading and failure are exclusive, and a failure holds no rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet.
    #[default]
    Idle,
    /// First fetch in flight, no rows to show.
    Loading,
    /// Rows from the last successful fetch; `refreshing` while a refetch runs.
    Loaded {
        files: Vec<FileRecord>,
        refreshing: bool,
    },
    Failed(String),
}

/// Handle for one issued fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    criteria: FilterCriteria,
}

impl FetchTicket {
    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// One rendered list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub id: FileId,
    pub title: String,
    pub details: String,
    pub uploaded: String,
}

impl From<&FileRecord> for FileRow {
    fn from(file: &FileRecord) -> Self {
        Self {
            id: file.id,
            title: file.original_filename.clone(),
            details: format!("{}, {} bytes", file.file_type, file.size),
            uploaded: format!("Uploaded {}", file.uploaded_at.format("%Y-%m-%d %H:%M:%S UTC")),
        }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading(&'static str),
    Failed(String),
    Rows(Vec<FileRow>),
}

#[derive(Debug, Default)]
pub struct FileListPanel {
    filters: FilterPanel,
    active: FilterCriteria,
    state: ListState,
    notice: Option<String>,
    issued: u64,
}

impl FileListPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a filter record already applied.
    #[must_use]
    pub fn with_filters(criteria: FilterCriteria) -> Self {
        Self {
            filters: FilterPanel::new(criteria.clone()),
            active: criteria,
            ..Self::default()
        }
    }

    /// Staged filters, edited by the filter inputs.
    #[must_use]
    pub fn filters(&self) -> &FilterPanel {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterPanel {
        &mut self.filters
    }

    /// Filters used by the next fetch.
    #[must_use]
    pub fn active_filters(&self) -> &FilterCriteria {
        &self.active
    }

    #[must_use]
    pub fn state(&self) -> &ListState {
        &self.state
    }

    #[must_use]
    pub fn files(&self) -> Option<&[FileRecord]> {
        match &self.state {
            ListState::Loaded { files, .. } => Some(files),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, ListState::Loading)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self.state, ListState::Failed(_))
    }

    /// Message from the last failed delete, cleared by the next delete.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn view(&self) -> ListView {
        match &self.state {
            ListState::Idle => ListView::Rows(Vec::new()),
            ListState::Loading => ListView::Loading(LOADING_MESSAGE),
            ListState::Failed(message) => ListView::Failed(message.clone()),
            ListState::Loaded { files, .. } => {
                ListView::Rows(files.iter().map(FileRow::from).collect())
            }
        }
    }

    /// Issue a fetch with the active filters. Loaded rows stay visible until
    /// the result arrives.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.state = match std::mem::take(&mut self.state) {
            ListState::Loaded { files, .. } => ListState::Loaded {
                files,
                refreshing: true,
            },
            _ => ListState::Loading,
        };
        FetchTicket {
            generation: self.issued,
            criteria: self.active.clone(),
        }
    }

    /// Apply a fetch result. Results of fetches superseded by a newer one are
    /// dropped; returns whether this one was applied.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<FileRecord>, FileHubError>,
    ) -> bool {
        if ticket.generation != self.issued {
            log::debug!(
                "dropping result of fetch {}, latest is {}",
                ticket.generation,
                self.issued
            );
            return false;
        }

        self.state = match result {
            Ok(files) => ListState::Loaded {
                files,
                refreshing: false,
            },
            Err(err) => {
                log::warn!("listing files failed: {err}");
                ListState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    async fn fetch<S>(&mut self, service: &S)
    where
        S: FileService + ?Sized,
    {
        let ticket = self.begin_fetch();
        let result = service.list(ticket.criteria()).await;
        self.complete_fetch(ticket, result);
    }

    /// Initial load.
    pub async fn mount<S>(&mut self, service: &S)
    where
        S: FileService + ?Sized,
    {
        self.fetch(service).await;
    }

    /// Refetch with the active filters.
    pub async fn refresh<S>(&mut self, service: &S)
    where
        S: FileService + ?Sized,
    {
        self.fetch(service).await;
    }

    /// Commit the staged filters and refetch, even if nothing changed.
    pub async fn apply<S>(&mut self, service: &S)
    where
        S: FileService + ?Sized,
    {
        self.active = self.filters.criteria().clone();
        self.fetch(service).await;
    }

    /// Replace the filter record. Fetches only when it differs from the active one.
    pub async fn set_filters<S>(&mut self, service: &S, criteria: FilterCriteria) -> bool
    where
        S: FileService + ?Sized,
    {
        self.filters = FilterPanel::new(criteria.clone());
        if criteria == self.active {
            return false;
        }
        self.active = criteria;
        self.fetch(service).await;
        true
    }

    /// Delete one file, then refetch the whole list.
    pub async fn delete<S>(&mut self, service: &S, id: FileId) -> Result<(), PanelError>
    where
        S: FileService + ?Sized,
    {
        self.notice = None;
        if let Err(err) = service.remove(id).await {
            log::warn!("deleting file {id} failed: {err}");
            self.notice = Some(DELETE_FAILED_MESSAGE.to_string());
            return Err(err.into());
        }
        self.fetch(service).await;
        Ok(())
    }
}
