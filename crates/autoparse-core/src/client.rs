//! HTTP client for the candidate API.
//!
//! One method per remote operation, each a single round trip. There is no
//! retry, timeout or caching layer: callers decide what to do with a failure.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::model::{Candidate, CandidateDetails, MessageResponse};
use crate::ApiError;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://autoparse-be.onrender.com";

/// A file to be sent as one multipart field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk.
    pub async fn from_path(path: &Path) -> Result<Self, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::Attachment {
                path: path.display().to_string(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(file_name, bytes))
    }

    fn into_part(self) -> Result<Part, ApiError> {
        Ok(Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(self.content_type)?)
    }
}

fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Client for the candidate API rooted at a base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /api/candidates/`
    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, ApiError> {
        let url = self.url("/api/candidates/");
        log::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        Ok(read_json(response).await?.unwrap_or_default())
    }

    /// `GET /api/candidates/{id}/`. `None` on `204 No Content`.
    pub async fn get_candidate(&self, id: &str) -> Result<Option<CandidateDetails>, ApiError> {
        let url = self.url(&format!("/api/candidates/{id}/"));
        log::debug!("GET {url}");
        let response = self.http.get(&url).send().await?;
        read_json(response).await
    }

    /// `POST /api/candidates/upload/` with the file in the `resume` field.
    ///
    /// Returns the created (or updated) candidate when the service sends one.
    pub async fn upload_resume(&self, resume: Attachment) -> Result<Option<Candidate>, ApiError> {
        let url = self.url("/api/candidates/upload/");
        log::debug!("POST {url} ({}, {} bytes)", resume.file_name, resume.bytes.len());
        let form = Form::new().part("resume", resume.into_part()?);
        let response = self.http.post(&url).multipart(form).send().await?;
        read_json(response).await
    }

    /// `POST /api/candidates/{id}/request-documents/`, returning the generated
    /// request message.
    pub async fn request_documents(&self, id: &str) -> Result<String, ApiError> {
        let url = self.url(&format!("/api/candidates/{id}/request-documents/"));
        log::debug!("POST {url}");
        let response = self.http.post(&url).send().await?;
        let body: Option<MessageResponse> = read_json(response).await?;
        Ok(body.unwrap_or_default().message)
    }

    /// `POST /api/candidates/{id}/submit-documents/` with whichever of
    /// `pan_card` and `aadhar_card` are present.
    pub async fn submit_documents(
        &self,
        id: &str,
        pan_card: Option<Attachment>,
        aadhar_card: Option<Attachment>,
    ) -> Result<String, ApiError> {
        let url = self.url(&format!("/api/candidates/{id}/submit-documents/"));
        log::debug!(
            "POST {url} (pan_card: {}, aadhar_card: {})",
            pan_card.is_some(),
            aadhar_card.is_some()
        );
        let mut form = Form::new();
        if let Some(pan) = pan_card {
            form = form.part("pan_card", pan.into_part()?);
        }
        if let Some(aadhar) = aadhar_card {
            form = form.part("aadhar_card", aadhar.into_part()?);
        }
        let response = self.http.post(&url).multipart(form).send().await?;
        let body: Option<MessageResponse> = read_json(response).await?;
        Ok(body.unwrap_or_default().message)
    }
}

/// Turn a response into a decoded body.
///
/// Non-2xx responses fail with the body text as the message (or the status
/// line when the body is empty). `204 No Content` yields `None`.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = failure_message(status, &body);
        log::debug!("request failed with {status}: {message}");
        return Err(ApiError::RequestFailed {
            status: Some(status.as_u16()),
            message,
        });
    }
    if status == StatusCode::NO_CONTENT {
        return Ok(None);
    }
    let bytes = response.bytes().await?;
    Ok(Some(serde_json::from_slice(&bytes)?))
}

fn failure_message(status: StatusCode, body: &str) -> String {
    if !body.trim().is_empty() {
        return body.to_string();
    }
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => format!("Request failed with status {}", status.as_u16()),
    }
}
