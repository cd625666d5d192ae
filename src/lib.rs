//! Docdesk: desktop client for a document upload, search and
//! speech-to-text backend.
//!
//! The backend owns storage, indexing, ranking and transcription; this
//! crate only renders state and orchestrates HTTP requests.

pub mod app;
pub mod audio;
pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod file_manager;
pub mod speech;
pub mod ui;

pub use error::{DocdeskError, Result};
