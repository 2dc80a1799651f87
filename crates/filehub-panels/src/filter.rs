use chrono::NaiveDate;
use filehub_ox::{FilterCriteria, FilterField};

use crate::PanelError;

/// One typed edit of a single filter key. `None` clears the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    Filename(Option<String>),
    FileType(Option<String>),
    SizeMin(Option<u64>),
    SizeMax(Option<u64>),
    UploadedAfter(Option<NaiveDate>),
    UploadedBefore(Option<NaiveDate>),
}

impl FilterEdit {
    #[must_use]
    pub fn field(&self) -> FilterField {
        match self {
            Self::Filename(_) => FilterField::Filename,
            Self::FileType(_) => FilterField::FileType,
            Self::SizeMin(_) => FilterField::SizeMin,
            Self::SizeMax(_) => FilterField::SizeMax,
            Self::UploadedAfter(_) => FilterField::UploadedAfter,
            Self::UploadedBefore(_) => FilterField::UploadedBefore,
        }
    }
}

/// Staged filter record. Edits never trigger a fetch by themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    criteria: FilterCriteria,
}

impl FilterPanel {
    #[must_use]
    pub fn new(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Text to show in the input for `field`; empty when unset.
    #[must_use]
    pub fn display_value(&self, field: FilterField) -> String {
        self.criteria.value(field).unwrap_or_default()
    }

    /// Replace one key. Returns whether the record changed.
    pub fn apply_edit(&mut self, edit: FilterEdit) -> bool {
        let before = self.criteria.clone();
        let c = &mut self.criteria;
        match edit {
            FilterEdit::Filename(v) => c.filename = v,
            FilterEdit::FileType(v) => c.file_type = v,
            FilterEdit::SizeMin(v) => c.size_min = v,
            FilterEdit::SizeMax(v) => c.size_max = v,
            FilterEdit::UploadedAfter(v) => c.uploaded_after = v,
            FilterEdit::UploadedBefore(v) => c.uploaded_before = v,
        }
        self.criteria != before
    }

    /// Replace one key from raw input text. Ordering of ranges is not checked.
    pub fn edit(&mut self, field: FilterField, raw: &str) -> Result<bool, PanelError> {
        Ok(self.criteria.set(field, raw)?)
    }

    /// Replace one key by its wire name, as a generic form would submit it.
    pub fn edit_by_key(&mut self, key: &str, raw: &str) -> Result<bool, PanelError> {
        let field: FilterField = key
            .parse()
            .map_err(|_| PanelError::Validation(format!("unknown filter {key:?}")))?;
        self.edit(field, raw)
    }

    /// Drop every key. Returns whether the record changed.
    pub fn clear(&mut self) -> bool {
        let changed = self.criteria != FilterCriteria::default();
        self.criteria = FilterCriteria::default();
        changed
    }
}
