//! Error types shared by the backend client, recorder and config loader

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocdeskError {
    /// Backend answered with a non-2xx status. `message` is the body's
    /// `detail` or the operation's fallback text.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no microphone available")]
    NoInputDevice,

    #[error("audio capture failed: {0}")]
    Audio(String),

    #[error("no audio was captured")]
    EmptyRecording,

    #[error("WAV encoding failed: {0}")]
    Wav(#[from] hound::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl DocdeskError {
    /// Status code of a rejected request, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DocdeskError::Rejected { status, .. } => Some(*status),
            DocdeskError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocdeskError>;
