//! Wire types for backend communication

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// An entry of `/list-files`. The backend sends either a bare name or
/// an object with a `name` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UploadedFile {
    Name(String),
    Record { name: String },
}

impl UploadedFile {
    /// Text shown in the file list.
    pub fn label(&self) -> &str {
        match self {
            UploadedFile::Name(label) => label,
            UploadedFile::Record { name } => name,
        }
    }

    /// Filename used as identity for deletion. Bare strings may carry a
    /// size suffix like `"a.pdf (12 KB)"` which is not part of the name.
    pub fn name(&self) -> &str {
        match self {
            UploadedFile::Name(label) => label.split(" (").next().unwrap_or(label),
            UploadedFile::Record { name } => name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListFilesResponse {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
}

/// Search hit from backend. Page and chunk are backend metadata kept as
/// raw JSON; they are only displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub filename: String,
    #[serde(default)]
    pub page_number: Option<Value>,
    #[serde(default)]
    pub chunk_index: Option<Value>,
}

impl SearchResult {
    pub fn page(&self) -> String {
        position_label(self.page_number.as_ref())
    }

    pub fn chunk(&self) -> String {
        position_label(self.chunk_index.as_ref())
    }
}

/// Missing, null, zero, false or empty values show as `0`; anything else
/// is shown as sent. Whole floats drop their fraction.
fn position_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(f)) if f == 0.0 => "0".to_string(),
            (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other @ (Value::Array(_) | Value::Object(_))) => other.to_string(),
        _ => "0".to_string(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
pub struct TranscriptResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

/// Error body. FastAPI-style backends put a string here, validation
/// failures put a list of objects.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
