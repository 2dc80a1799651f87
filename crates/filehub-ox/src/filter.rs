use bon::Builder;
use chrono::NaiveDate;
use strum::IntoEnumIterator;

use crate::FileHubError;

/// Date format the list endpoint expects for `uploaded_after` / `uploaded_before`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The query keys the list endpoint recognizes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FilterField {
    Filename,
    FileType,
    SizeMin,
    SizeMax,
    UploadedAfter,
    UploadedBefore,
}

/// Constraints for listing files. `None` means no constraint on that dimension.
///
/// Ranges are not checked: `size_min > size_max` is sent as-is and simply
/// matches nothing on the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the original file name.
    #[builder(into)]
    pub filename: Option<String>,
    /// Case-insensitive substring of the MIME type.
    #[builder(into)]
    pub file_type: Option<String>,
    pub size_min: Option<u64>,
    pub size_max: Option<u64>,
    pub uploaded_after: Option<NaiveDate>,
    pub uploaded_before: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when no key constrains the listing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        FilterField::iter().all(|field| self.value(field).is_none())
    }

    /// Wire value of one key. Blank text counts as absent.
    #[must_use]
    pub fn value(&self, field: FilterField) -> Option<String> {
        match field {
            FilterField::Filename => non_blank(self.filename.as_deref()),
            FilterField::FileType => non_blank(self.file_type.as_deref()),
            FilterField::SizeMin => self.size_min.map(|v| v.to_string()),
            FilterField::SizeMax => self.size_max.map(|v| v.to_string()),
            FilterField::UploadedAfter => {
                self.uploaded_after.map(|d| d.format(DATE_FORMAT).to_string())
            }
            FilterField::UploadedBefore => {
                self.uploaded_before.map(|d| d.format(DATE_FORMAT).to_string())
            }
        }
    }

    /// Query-string pairs for the list call. Absent and blank keys are omitted,
    /// so an emptied input never turns into `key=`.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        FilterField::iter()
            .filter_map(|field| self.value(field).map(|v| (field.to_string(), v)))
            .collect()
    }

    /// Replace one key from raw form text. Blank text clears the key.
    ///
    /// Text keys keep the input verbatim; numbers and dates are parsed from the
    /// trimmed input. Returns whether the record changed. Text that does not
    /// parse for a numeric or date key is rejected and the record is left
    /// untouched.
    pub fn set(&mut self, field: FilterField, raw: &str) -> Result<bool, FileHubError> {
        let trimmed = raw.trim();
        let before = self.clone();

        match field {
            FilterField::Filename => self.filename = text_value(raw),
            FilterField::FileType => self.file_type = text_value(raw),
            FilterField::SizeMin => self.size_min = parse_size(field, trimmed)?,
            FilterField::SizeMax => self.size_max = parse_size(field, trimmed)?,
            FilterField::UploadedAfter => self.uploaded_after = parse_date(field, trimmed)?,
            FilterField::UploadedBefore => self.uploaded_before = parse_date(field, trimmed)?,
        }

        Ok(*self != before)
    }

    /// Remove the constraint on one key.
    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Filename => self.filename = None,
            FilterField::FileType => self.file_type = None,
            FilterField::SizeMin => self.size_min = None,
            FilterField::SizeMax => self.size_max = None,
            FilterField::UploadedAfter => self.uploaded_after = None,
            FilterField::UploadedBefore => self.uploaded_before = None,
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
}

fn text_value(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_string())
}

fn parse_size(field: FilterField, raw: &str) -> Result<Option<u64>, FileHubError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u64>().map(Some).map_err(|_| {
        FileHubError::Validation(format!("{field} must be a whole number of bytes, got {raw:?}"))
    })
}

fn parse_date(field: FilterField, raw: &str) -> Result<Option<NaiveDate>, FileHubError> {
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FileHubError::Validation(format!("{field} must be a date (YYYY-MM-DD), got {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn field_wire_names() {
        let names: Vec<String> = FilterField::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            [
                "filename",
                "file_type",
                "size_min",
                "size_max",
                "uploaded_after",
                "uploaded_before"
            ]
        );
        assert_eq!(
            FilterField::from_str("uploaded_before").expect("known key"),
            FilterField::UploadedBefore
        );
        assert!(FilterField::from_str("owner").is_err());
    }

    #[test]
    fn only_present_keys_are_serialized() {
        let mut filters = FilterCriteria::default();
        filters.set(FilterField::FileType, "pdf").expect("text");
        filters.set(FilterField::SizeMin, "1000").expect("number");

        let mut pairs = filters.to_query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("file_type".to_string(), "pdf".to_string()),
                ("size_min".to_string(), "1000".to_string()),
            ]
        );
    }

    #[test]
    fn blank_text_is_omitted() {
        let filters = FilterCriteria {
            filename: Some("   ".to_string()),
            file_type: Some(String::new()),
            ..FilterCriteria::default()
        };
        assert!(filters.to_query_pairs().is_empty());
        assert!(filters.is_empty());
    }

    #[test]
    fn emptying_a_date_clears_it() {
        let mut filters = FilterCriteria::default();
        assert!(filters.set(FilterField::UploadedAfter, "2025-04-01").expect("date"));
        assert_eq!(
            filters.value(FilterField::UploadedAfter).as_deref(),
            Some("2025-04-01")
        );

        assert!(filters.set(FilterField::UploadedAfter, "").expect("clear"));
        assert_eq!(filters.uploaded_after, None);
        assert!(filters.to_query_pairs().is_empty());
    }

    #[test]
    fn inverted_ranges_are_forwarded() {
        let filters = FilterCriteria::builder()
            .size_min(5000)
            .size_max(10)
            .uploaded_after(NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"))
            .uploaded_before(NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"))
            .build();

        let pairs = filters.to_query_pairs();
        assert_eq!(pairs.len(), 4);
        assert!(pairs.contains(&("size_min".to_string(), "5000".to_string())));
        assert!(pairs.contains(&("size_max".to_string(), "10".to_string())));
        assert!(pairs.contains(&("uploaded_before".to_string(), "2025-01-01".to_string())));
    }

    #[test]
    fn malformed_number_leaves_record_untouched() {
        let mut filters = FilterCriteria::builder().size_max(100).build();
        let err = filters
            .set(FilterField::SizeMax, "lots")
            .expect_err("not a number");
        assert!(err.is_validation());
        assert_eq!(filters.size_max, Some(100));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut filters = FilterCriteria::default();
        let err = filters
            .set(FilterField::UploadedBefore, "22/04/2025")
            .expect_err("wrong format");
        assert!(err.to_string().contains("uploaded_before"));
        assert!(filters.is_empty());
    }

    #[test]
    fn setting_same_value_reports_no_change() {
        let mut filters = FilterCriteria::builder().filename("report").build();
        assert!(!filters.set(FilterField::Filename, "report").expect("text"));
        assert!(filters.set(FilterField::Filename, "invoice").expect("text"));
    }

    #[test]
    fn text_filters_are_forwarded_verbatim() {
        let mut filters = FilterCriteria::default();
        filters.set(FilterField::Filename, " report ").expect("text");
        assert_eq!(
            filters.to_query_pairs(),
            vec![("filename".to_string(), " report ".to_string())]
        );

        assert!(filters.set(FilterField::Filename, "   ").expect("blank"));
        assert_eq!(filters.filename, None);

        filters.set(FilterField::SizeMin, " 42 ").expect("padded number");
        assert_eq!(filters.size_min, Some(42));
    }

    #[test]
    fn clear_removes_one_key() {
        let mut filters = FilterCriteria::builder().filename("a").file_type("b").build();
        filters.clear(FilterField::Filename);
        assert_eq!(filters.filename, None);
        assert_eq!(filters.file_type.as_deref(), Some("b"));
    }
}
