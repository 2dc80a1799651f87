#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! File Hub API client for Rust
//!
//! Upload files, list them with optional filters and delete them.
//!
//! # Example
//!
//! ```rust,no_run
//! use filehub_ox::{FileHub, FilterCriteria, SelectedFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FileHub::load_from_env();
//!
//!     let file = SelectedFile::new("report.pdf", b"%PDF-1.7".to_vec());
//!     let result = client.upload(&file).await?;
//!     println!("{}", result.summary());
//!
//!     let filters = FilterCriteria::builder().file_type("pdf").build();
//!     for record in client.list(&filters).await? {
//!         println!("{} ({} bytes)", record.original_filename, record.size);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod files;
pub mod filter;
mod internal;

pub use client::FileHub;
pub use error::FileHubError;
pub use files::{FileId, FileRecord, SelectedFile, UploadResult};
pub use filter::{FilterCriteria, FilterField};
