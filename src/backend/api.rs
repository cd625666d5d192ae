//! HTTP client for the document and speech backends

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

use super::types::{
    ErrorBody, ListFilesResponse, SearchRequest, SearchResponse, SearchResult, TranscriptResponse,
    UploadedFile,
};
use crate::config::Config;
use crate::error::{DocdeskError, Result};

/// Client for the document backend and the speech-to-text backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    speech_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str, speech_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            speech_url: speech_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, &config.speech_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upload a document from disk as multipart field `file`
    pub async fn upload(&self, path: &Path) -> Result<serde_json::Value> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| DocdeskError::ReadFile {
                path: path.display().to_string(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        self.upload_bytes(&file_name, bytes).await
    }

    pub async fn upload_bytes(&self, file_name: &str, bytes: Vec<u8>) -> Result<serde_json::Value> {
        let url = format!("{}/upload", self.base_url);
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = ensure_success(response, "Upload failed").await?;

        // Body shape is backend-defined; keep whatever came back.
        let body = response.text().await?;
        let value = serde_json::from_str(&body).unwrap_or_else(|_| serde_json::Value::String(body));
        tracing::info!("Uploaded {}", file_name);
        tracing::debug!("Upload response: {}", value);
        Ok(value)
    }

    pub async fn list_files(&self) -> Result<Vec<UploadedFile>> {
        let url = format!("{}/list-files", self.base_url);
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response, "Listing files failed").await?;
        let body: ListFilesResponse = response.json().await?;
        Ok(body.files)
    }

    /// Delete one file. The name is percent-encoded into the path.
    pub async fn delete_file(&self, filename: &str) -> Result<()> {
        let url = format!("{}/delete/{}", self.base_url, urlencoding::encode(filename));
        let response = self.client.delete(&url).send().await?;
        ensure_success(response, "Delete failed").await?;
        tracing::info!("Deleted {}", filename);
        Ok(())
    }

    pub async fn delete_all(&self) -> Result<()> {
        let url = format!("{}/delete-all", self.base_url);
        let response = self.client.delete(&url).send().await?;
        ensure_success(response, "Delete all failed").await?;
        tracing::info!("Deleted all files");
        Ok(())
    }

    /// Free-text search. Callers pass an already trimmed, non-empty query.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&SearchRequest { query })
            .send()
            .await?;
        let response = ensure_success(response, "Search failed").await?;
        let body: SearchResponse = response.json().await?;
        tracing::info!("Search returned {} results", body.results.len());
        Ok(body.results)
    }

    /// Send a WAV recording as multipart field `audio_file`
    pub async fn speech_to_text(&self, wav: Vec<u8>) -> Result<String> {
        let url = format!("{}/speech-to-text", self.speech_url);
        let part = Part::bytes(wav)
            .file_name("recording.wav")
            .mime_str("audio/wav")?;
        let form = Form::new().part("audio_file", part);

        let response = self.client.post(&url).multipart(form).send().await?;
        let response = ensure_success(response, "Transcription failed").await?;
        let body: TranscriptResponse = response.json().await?;
        Ok(body.text)
    }
}

/// Turn a non-2xx response into `Rejected`, using the body's `detail`
/// when present and `fallback` otherwise.
async fn ensure_success(response: Response, fallback: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message())
        .unwrap_or_else(|| fallback.to_string());

    tracing::warn!("{} ({}): {}", fallback, status, message);
    Err(DocdeskError::Rejected {
        status: status.as_u16(),
        message,
    })
}
