use thiserror::Error;

pub mod client;
pub mod display;
pub mod model;

pub use client::{ApiClient, Attachment, DEFAULT_API_URL};
pub use model::{
    Candidate, CandidateDetails, ConfidenceScores, MessageResponse, Skills, SubmittedDocument,
};

/// Errors produced while talking to the candidate API.
///
/// Every failure the dashboard shows collapses to a human-readable message via
/// `Display`; the variants only exist so callers can log the HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Non-2xx response, or a transport failure (`status` is `None`).
    #[error("{message}")]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("could not read {path}: {source}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
