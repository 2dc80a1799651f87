#![cfg_attr(not(test), deny(unsafe_code))]
#![warn(
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::missing_docs_in_private_items
)]

//! Shared HTTP plumbing for the File Hub client crates
//!
//! Endpoint description, request configuration and a request builder that
//! executes JSON, unit and multipart calls and classifies their failures.

pub mod error;
pub mod request_builder;

pub use error::CommonRequestError;
pub use request_builder::{Endpoint, HttpMethod, MultipartForm, RequestBuilder, RequestConfig};

/// Re-export common types for convenience
pub use serde::{Deserialize, Serialize};
