//! Backend communication: HTTP client and wire types

pub mod api;
pub mod types;

pub use api::BackendClient;
pub use types::{SearchResult, UploadedFile};
